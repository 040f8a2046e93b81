/// Convenience result type used across Mosaic.
pub type MosaicResult<T> = Result<T, MosaicError>;

/// Top-level error taxonomy used by library APIs.
///
/// Every variant describes a programming error made by the code that builds layouts, snapshots or
/// registries. None of them is expected at runtime once a screen is wired correctly, so callers
/// usually propagate them with `?` up to the point where the screen is constructed.
#[derive(thiserror::Error, Debug)]
pub enum MosaicError {
    /// Invalid dimension, fraction, inset or other layout-description input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Duplicate or missing identifiers in a snapshot.
    #[error("snapshot error: {0}")]
    Snapshot(String),

    /// A cell template or element kind was used before it was registered.
    #[error("registry error: {0}")]
    Registry(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MosaicError {
    /// Build a [`MosaicError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MosaicError::Snapshot`] value.
    pub fn snapshot(msg: impl Into<String>) -> Self {
        Self::Snapshot(msg.into())
    }

    /// Build a [`MosaicError::Registry`] value.
    pub fn registry(msg: impl Into<String>) -> Self {
        Self::Registry(msg.into())
    }

    /// Build a [`MosaicError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for MosaicError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
