/// Convenience alias for results carrying [`YuvLensError`].
pub type YuvLensResult<T> = Result<T, YuvLensError>;

/// Error taxonomy for the viewer core.
///
/// Every error is local to a single decode or render call; there is no global error
/// state, and a failure on one surface never blocks the others.
#[derive(thiserror::Error, Debug)]
pub enum YuvLensError {
    /// Missing or unusable drawable surface/context at setup. Fail-fast, not retried.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Raw buffer shorter than the planar YUV420p layout requires.
    #[error("decode underrun: {0}")]
    DecodeUnderrun(String),

    /// Cursor/pointer event that cannot yield a cursor sample.
    #[error("unsupported input: {0}")]
    UnsupportedInput(String),

    /// Invalid argument at a constructor boundary.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped third-party failure (e.g. encoded-image decode).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl YuvLensError {
    /// Construct a [`YuvLensError::Configuration`].
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Construct a [`YuvLensError::DecodeUnderrun`].
    pub fn decode_underrun(msg: impl Into<String>) -> Self {
        Self::DecodeUnderrun(msg.into())
    }

    /// Construct a [`YuvLensError::UnsupportedInput`].
    pub fn unsupported_input(msg: impl Into<String>) -> Self {
        Self::UnsupportedInput(msg.into())
    }

    /// Construct a [`YuvLensError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
