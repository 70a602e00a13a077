//! Host-side clipboard bridge for the quiz app shell.
//!
//! At application launch, [`AppShell::launch`] registers the
//! [`ClipboardBridge`] handler on the [`CLIPBOARD_CHANNEL`] method channel.
//! A [`GET_CLIPBOARD_IMAGE`] invocation queries the OS clipboard and answers
//! with lossless PNG bytes, or a structured `UNAVAILABLE` error when the
//! clipboard holds no image or the image cannot be encoded.

#![warn(missing_docs)]

mod error;
mod handler;
mod png;
mod shell;

pub use error::BridgeError;
pub use handler::ClipboardBridge;
pub use png::{EncodeError, encode_png};
pub use shell::AppShell;

/// Channel identifier the UI layer uses to reach the clipboard bridge.
pub const CLIPBOARD_CHANNEL: &str = "com.example.nursing_quiz_app_6/clipboard";

/// Method name for reading the clipboard image.
pub const GET_CLIPBOARD_IMAGE: &str = "getClipboardImage";
