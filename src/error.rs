use thiserror::Error;

/// Errors raised by the generator, the filter bank and config validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpectralError {
    /// A selector, sequence or parameter outside its accepted domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl SpectralError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        SpectralError::InvalidArgument(reason.into())
    }
}

pub type Result<T> = std::result::Result<T, SpectralError>;
