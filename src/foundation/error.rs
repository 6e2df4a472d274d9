/// Convenience result type used across the crate.
pub type AssetResult<T> = Result<T, AssetError>;

/// Error taxonomy for drawing, encoding and writing assets.
#[derive(thiserror::Error, Debug)]
pub enum AssetError {
    /// Buffer dimensions or byte lengths that cannot describe an image.
    #[error("validation error: {0}")]
    Validation(String),

    /// Data that does not fit the PNG container limits.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AssetError {
    /// Build an [`AssetError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`AssetError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
