//! Feed error types.

/// Errors that can occur at the feed boundary.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// The frame's topic tag matches no known message family. Recoverable:
    /// the caller drops the frame and keeps polling.
    #[error("unknown topic: {0}")]
    UnknownTopic(String),

    /// The frame had a known topic but an undecodable payload.
    #[error("malformed frame: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A working-order carried a side tag other than `b` or `s`.
    #[error("invalid side tag: {0}")]
    InvalidSide(String),

    #[error("not connected")]
    NotConnected,

    #[error("connection error: {0}")]
    Connection(String),
}
