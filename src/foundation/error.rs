/// Convenience result type used across scrollfx.
pub type ScrollFxResult<T> = Result<T, ScrollFxError>;

/// Top-level error taxonomy. Everything here is recoverable: a failed bind or
/// build means the caller shows static content, never a crash.
#[derive(thiserror::Error, Debug)]
pub enum ScrollFxError {
    /// Invalid region, phase or effect configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Invalid viewport or radial geometry input.
    #[error("geometry error: {0}")]
    Geometry(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrollFxError {
    /// Build a [`ScrollFxError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`ScrollFxError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`ScrollFxError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ScrollFxError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
