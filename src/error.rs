//! Error types for the richblocks library.

use thiserror::Error;

/// Result type alias for richblocks operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading or rendering rich text.
#[derive(Error, Debug)]
pub enum Error {
    /// A style value matched neither the list-style nor the text-style
    /// shape. The element tree cannot be safely interpreted, so this is
    /// the only error that aborts a render.
    #[error("undecodable style value: {0}")]
    StyleDecode(String),

    /// Error deserializing the block tree or file list from JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
