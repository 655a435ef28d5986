/// Convenience result type used across moteclock.
pub type MoteclockResult<T> = Result<T, MoteclockError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum MoteclockError {
    /// Invalid caller-provided data (canvas dimensions, font bytes, text size).
    #[error("validation error: {0}")]
    Validation(String),

    /// Failures while rasterizing to or reading back from a surface.
    #[error("surface error: {0}")]
    Surface(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MoteclockError {
    /// Build a [`MoteclockError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MoteclockError::Surface`] value.
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }
}
