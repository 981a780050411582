//! Finding and load-failure types shared by every validator.

use std::path::PathBuf;

use serde::Serialize;

/// Errors (blocking) and warnings (advisory) produced by one validator.
///
/// A finding is just its human-readable message; there is no rule code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Findings {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl Findings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Append another validator's findings after this one's.
    pub fn extend(&mut self, other: Findings) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Fatal failure to obtain a document. Reported before any validator runs.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Workflow file '{}' not found", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read workflow file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse workflow JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
