//! # Sift Filter Language - Abstract Syntax Tree
//!
//! This module defines the tokens and the expression tree for the sift filter
//! language, a tiny query language used to decide whether a node of a data
//! tree matches a textual filter.
//!
//! ## Architecture Overview
//!
//! The AST module is organized into focused submodules:
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[fields]** - The three field keys (`$key`, `$value`, `$type`)
//! - **[operators]** - The two binary logical operators (`&`, `|`)
//! - **[expressions]** - Expression tree nodes
//! - **[types]** - Type categories understood by type-literal nodes
//!
//! ## Quick Start
//!
//! ```text
//! $key: name & $type: string
//! ```
//!
//! This filter matches nodes whose key is `name` and whose type is `string`.
//!
//! ## Core Concepts
//!
//! ### Field Scoping
//!
//! A field key followed by a colon evaluates everything after the colon
//! against the facet of the node that the field resolves to:
//!
//! ```text
//! $value: 42              // the node's value is 42
//! $key: id | uuid         // the node's key is id or uuid
//! ```
//!
//! Field resolution is only available at the top of a scope. A field nested
//! inside another field's target fails to evaluate, which is why
//! `$key: id | $key: uuid` is an error once `id` does not match; write
//! `($key: id) | ($key: uuid)` instead.
//!
//! ### No Operator Precedence
//!
//! `&` and `|` bind identically and group to the right. After a complete
//! operand, an operator makes the *whole rest* of the expression its right
//! operand:
//!
//! ```text
//! a & b | c      =>  a & (b | c)
//! !a & b         =>  !(a & b)
//! $key: a | b    =>  $key: (a | b)
//! ```
//!
//! Parentheses are the only way to limit the reach of an operator:
//!
//! ```text
//! ($key: id) | ($value: 7)
//! ```
//!
//! ### Literals
//!
//! Strings may be double-quoted, single-quoted, or bare words. `true`,
//! `false` and `null` are keywords; anything starting with a digit, `-`, `+`
//! or `.` is a number.
//!
//! ```text
//! "hello world"   'it"s'   hello   42   -1.5   true   null
//! ```
pub mod expressions;
pub mod fields;
pub mod operators;
pub mod tokens;
pub mod types;

pub use expressions::Expr;
pub use fields::FieldKey;
pub use operators::LogicalOp;
pub use tokens::{Token, TokenKind};
pub use types::TypeCategory;
