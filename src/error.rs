//! Error types for rs-readability.
//!
//! Only tree construction can fail. Every heuristic downstream of parsing is
//! total: missing attributes, parents or text are treated as empty.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input could not be turned into a tree with a `<body>`, not even
    /// after falling back to an empty placeholder document.
    #[error("HTML parsing failed: {0}")]
    ParseError(String),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
