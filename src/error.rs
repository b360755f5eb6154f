//! Errors raised while loading documents and configuration.
//!
//! Profile validation itself never fails: every problem it finds becomes a
//! [`Finding`](crate::validate::report::Finding). These types only cover the
//! collaborators that feed it.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse crate metadata JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("crate metadata has no @graph array")]
    MissingGraph,

    #[error("@graph item {index} is not a JSON object")]
    NodeNotObject { index: usize },

    #[error("@id '{0}' appears more than once in @graph")]
    DuplicateId(String),

    #[error("@type of '{id}' must be a string or an array of strings")]
    InvalidType { id: String },
}

impl ParseError {
    /// Stable code for reporting layers that key on it.
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::InvalidJson(_) => "P001",
            ParseError::MissingGraph => "P002",
            ParseError::NodeNotObject { .. } => "P003",
            ParseError::DuplicateId(_) => "P004",
            ParseError::InvalidType { .. } => "P005",
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse profile configuration: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl ConfigError {
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::InvalidJson(_) => "C001",
        }
    }
}
