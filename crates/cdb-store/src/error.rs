use thiserror::Error;

/// Malformed or unsupported record data.
///
/// Carries a primary message and an optional secondary detail; the preview
/// panel surfaces both in a dismissible notice and carries on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct LoadingError {
    pub message: String,
    pub detail: Option<String>,
}

impl LoadingError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            detail: None,
        }
    }

    pub fn with_detail(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            detail: Some(detail.into()),
        }
    }
}

#[derive(Debug, Error)]
pub enum CollectionError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: malformed tag pair: {text:?}")]
    BadTagPair { line: usize, text: String },
}
