//! CLI support for sift-lang
//!
//! Provides programmatic access to the `sift` commands so they can be
//! embedded in other tools and tested without spawning a process.

mod check;
mod docs;
mod inspect;

pub use check::{execute_check, CheckOptions, CheckResult, Match};
pub use docs::{get_doc_category, get_docs_overview, DocCategory};
pub use inspect::{render_ast, render_tokens};

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Parse error: {0}")]
    Parse(#[from] crate::ParseError),

    #[error("Evaluation error: {0}")]
    Eval(#[from] crate::EvalError),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("No input provided. Use --input or pipe JSON to stdin.")]
    NoInput,

    #[error("Unknown category: '{0}'\nRun 'sift docs' to see available categories.")]
    UnknownCategory(String),
}
