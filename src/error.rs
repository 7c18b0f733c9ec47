//! Crate-wide error type.

use thiserror::Error;

use crate::format::SectionKind;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A section was requested that the list format does not declare.
    /// Indicates a template/usage mismatch, not a runtime condition.
    #[error("the {0} section is disabled by this list format")]
    DisabledSection(SectionKind),

    #[error("invalid list format: {0}")]
    InvalidFormat(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
