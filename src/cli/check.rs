//! Run a filter over every node of a JSON document

use super::CliError;
use crate::{compare, json, parse, Value};

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The filter to run
    pub filter: String,
    /// JSON input string
    pub input: Option<String>,
    /// Only validate syntax, don't execute
    pub syntax_only: bool,
}

/// A node the filter matched
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub path: String,
    pub value: serde_json::Value,
}

impl Match {
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ "path": self.path, "value": self.value })
    }
}

/// Result of a check operation
#[derive(Debug)]
pub enum CheckResult {
    /// Syntax validation passed
    SyntaxValid,
    /// Matching nodes in document order
    Matches(Vec<Match>),
}

impl CheckResult {
    /// JSON rendering of the matches (an array of `{path, value}`)
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            CheckResult::SyntaxValid => serde_json::Value::Null,
            CheckResult::Matches(matches) => {
                serde_json::Value::Array(matches.iter().map(Match::to_json).collect())
            }
        }
    }
}

/// Execute a sift check operation
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let expr = parse(&options.filter)?;

    if options.syntax_only {
        return Ok(CheckResult::SyntaxValid);
    }

    let json_str = options.input.as_ref().ok_or(CliError::NoInput)?;
    let document: serde_json::Value = serde_json::from_str(json_str)?;
    let root = Value::from(document);

    let matches = json::filter_nodes(&expr, &root, Some(&compare::contains))?
        .into_iter()
        .map(|node| Match {
            path: node.path,
            value: json::to_json(node.value),
        })
        .collect();

    Ok(CheckResult::Matches(matches))
}
