use thiserror::Error;

/// Errors surfaced to a channel caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChannelError {
    /// The handler does not recognize the requested method.
    #[error("method not implemented")]
    NotImplemented,

    /// The handler failed with a structured, host-visible error.
    #[error("{code}: {message}")]
    Platform {
        /// Stable machine-readable error code, e.g. `UNAVAILABLE`.
        code: String,
        /// Human-readable description of the failure.
        message: String,
    },

    /// The handler dropped without replying.
    #[error("channel closed before a reply was produced")]
    Closed,
}
