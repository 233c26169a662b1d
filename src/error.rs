//! Error types for quadtree construction and configuration.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, QuadtreeError>;

/// Errors raised while building a tree or loading its configuration.
///
/// Insertion and querying never fail with an error: an insert that cannot be
/// placed simply returns `false`.
#[derive(Debug, Error)]
pub enum QuadtreeError {
    /// Node capacity must be at least one point.
    #[error("Invalid capacity {0}: a node must hold at least one point")]
    InvalidCapacity(usize),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(feature = "toml")]
impl From<toml::de::Error> for QuadtreeError {
    fn from(e: toml::de::Error) -> Self {
        QuadtreeError::Toml(e.to_string())
    }
}

#[cfg(feature = "toml")]
impl From<toml::ser::Error> for QuadtreeError {
    fn from(e: toml::ser::Error) -> Self {
        QuadtreeError::Toml(e.to_string())
    }
}
