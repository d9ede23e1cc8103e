use std::fmt;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlaceLintError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse as TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("failed to parse as JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to parse as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Error)]
#[error("place directory failed validation ({errors_len} errors)")]
pub struct ValidationError {
    pub errors: Vec<Violation>,
    pub warnings: Vec<Violation>,
    errors_len: usize,
}

impl ValidationError {
    pub fn new(errors: Vec<Violation>, warnings: Vec<Violation>) -> Self {
        let errors_len = errors.len();
        Self {
            errors,
            warnings,
            errors_len,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: String,
    pub message: String,
}

impl Violation {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Outcome of one validation run, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Blocking problems: the document must not be published.
    pub errors: Vec<Violation>,
    /// Advisories that do not block publishing.
    pub warnings: Vec<Violation>,
}

impl Report {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }

    pub fn into_result(self) -> Result<Report, ValidationError> {
        if self.errors.is_empty() {
            Ok(self)
        } else {
            Err(ValidationError::new(self.errors, self.warnings))
        }
    }
}
