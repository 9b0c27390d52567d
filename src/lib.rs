pub mod ast;
pub mod compare;
pub mod environment;
pub mod evaluator;
pub mod json;
pub mod lexer;
pub mod parser;
pub mod value;

#[cfg(feature = "cli")]
pub mod cli;

pub use ast::{Expr, FieldKey, LogicalOp, Token, TokenKind, TypeCategory};
pub use environment::{EmptyEnvironment, Environment, Fields};
pub use evaluator::{evaluate, Comparator, EvalError, Evaluator, Query};
pub use lexer::{lex, LexError, Lexer};
pub use parser::{parse, Expected, Found, ParseError, Parser, DEFAULT_MAX_DEPTH};
pub use value::{Literal, Subject, Value};
