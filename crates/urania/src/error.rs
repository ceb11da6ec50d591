use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One rejected field of a birth data request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Birth data failed validation. Lists every violated field, not just the first.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("Invalid birth data: {}", summarize(.issues))]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub fn fields(&self) -> Vec<&str> {
        self.issues.iter().map(|issue| issue.field.as_str()).collect()
    }
}

fn summarize(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("{}: {}", issue.field, issue.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors reported by a birth-chart provider
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("No provider API key configured")]
    MissingCredential,
    #[error("Provider rejected the API key (401)")]
    Unauthorized,
    #[error("Provider rate limit exceeded (429)")]
    RateLimited,
    #[error("Provider returned status {code}: {body}")]
    Status { code: u16, body: String },
    #[error("Provider request failed: {0}")]
    Transport(String),
    #[error("Provider response could not be decoded: {0}")]
    Decode(String),
}

impl ProviderError {
    /// Classify a non-success HTTP status.
    pub fn from_status(code: u16, body: String) -> Self {
        match code {
            401 => ProviderError::Unauthorized,
            429 => ProviderError::RateLimited,
            _ => ProviderError::Status { code, body },
        }
    }
}
