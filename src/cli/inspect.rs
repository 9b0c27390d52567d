//! Token and tree dumps for debugging filters

use super::CliError;
use crate::{lex, parse};

/// One token per line, as `Kind` or `Kind(payload)`
pub fn render_tokens(filter: &str) -> Result<String, CliError> {
    let tokens = lex(filter).map_err(crate::ParseError::from)?;
    let lines: Vec<String> = tokens.iter().map(|t| format!("{:?}", t)).collect();
    Ok(lines.join("\n"))
}

/// Pretty debug rendering of the parsed tree
pub fn render_ast(filter: &str) -> Result<String, CliError> {
    Ok(format!("{:#?}", parse(filter)?))
}
