//! Errors surfaced by the project-file boundary.
//!
//! This is the only throwing boundary in the whole core: domain operations
//! degrade silently by design, but a malformed project file must reach the
//! user as a structured, complete report.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// A single schema violation found while validating a project file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldViolation {
    /// Path of the offending value, e.g. `teams[2].members[0]`.
    pub path: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Failure to load a project file.
///
/// Validation does not stop at the first problem: `Schema` carries every
/// violated field so the user can fix a broken file in one pass.
#[derive(Debug, Error)]
pub enum ProjectFileError {
    /// The content is not valid JSON at all.
    #[error("not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The JSON shape does not match the project schema.
    #[error("project file failed validation:\n{}", format_violations(.0))]
    Schema(Vec<FieldViolation>),
    /// Anything else, wrapped with a generic message.
    #[error("failed to process project file: {0}")]
    Other(String),
}

fn format_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_error_lists_every_violation() {
        let error = ProjectFileError::Schema(vec![
            FieldViolation::new("mode", "unknown battle mode \"abc\""),
            FieldViolation::new("teams[0].members[2]", "expected an integer or null"),
        ]);
        let message = error.to_string();
        assert!(message.contains("mode: unknown battle mode"));
        assert!(message.contains("teams[0].members[2]: expected an integer or null"));
    }
}
