use thiserror::Error;

/// Errors produced by field generation and the surrounding harness.
#[derive(Debug, Error)]
pub enum FieldError {
    /// A precondition on the generator was violated. `param` names the
    /// offending argument; nothing is silently corrected.
    #[error("invalid parameter `{param}`: {reason}")]
    InvalidParameter {
        param: &'static str,
        reason: String,
    },

    #[error("config: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

impl FieldError {
    pub(crate) fn invalid(param: &'static str, reason: impl Into<String>) -> Self {
        FieldError::InvalidParameter {
            param,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FieldError>;
