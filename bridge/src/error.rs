use quizkit_channel::ChannelError;
use thiserror::Error;

/// Failures the clipboard bridge reports to its caller.
///
/// Both variants are expected and recoverable: the clipboard simply does not
/// hold a usable image right now. They surface to the UI layer under the
/// `UNAVAILABLE` code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BridgeError {
    /// The clipboard holds no image payload.
    #[error("No image on clipboard")]
    NoImage,

    /// The clipboard image could not be PNG-encoded.
    #[error("Image could not be converted to PNG")]
    EncodeFailed,
}

impl BridgeError {
    /// Host-visible error code shared by both variants.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::NoImage | Self::EncodeFailed => "UNAVAILABLE",
        }
    }
}

impl From<BridgeError> for ChannelError {
    fn from(err: BridgeError) -> Self {
        Self::Platform {
            code: err.code().to_owned(),
            message: err.to_string(),
        }
    }
}
