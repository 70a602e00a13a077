//! # Quizkit
//!
//! Host-side platform bridge crates for the Nursing Quiz app shell.
//!
//! The UI layer talks to the host through string-identified method channels.
//! Quizkit provides the channel plumbing, read-only system clipboard access,
//! and the clipboard bridge handler the shell registers at application launch.
//!
//! ## Features
//!
//! Quizkit is modular. Enable only the features you need:
//!
//! - `channel`: named method channels between the UI layer and host handlers.
//! - `clipboard`: read-only system clipboard image access.
//! - `bridge`: the clipboard bridge handler and the launch lifecycle that
//!   registers it.
//!
//! Use the `full` feature to enable everything.
//!
//! ## Example
//!
//! ```toml
//! [dependencies]
//! quizkit = { version = "0.1", features = ["bridge"] }
//! ```
//!
//! ```rust,ignore
//! use quizkit::bridge::{AppShell, GET_CLIPBOARD_IMAGE};
//! use quizkit::channel::MethodCall;
//! use quizkit::clipboard::SystemClipboard;
//!
//! async fn read_clipboard_png() -> Option<Vec<u8>> {
//!     let shell = AppShell::launch(SystemClipboard::new());
//!     let reply = shell
//!         .clipboard_channel()
//!         .invoke(MethodCall::new(GET_CLIPBOARD_IMAGE))
//!         .await;
//!     match reply {
//!         Ok(quizkit::channel::Payload::Bytes(png)) => Some(png),
//!         _ => None,
//!     }
//! }
//! ```

#[cfg(feature = "bridge")]
pub use quizkit_bridge as bridge;

#[cfg(feature = "channel")]
pub use quizkit_channel as channel;

#[cfg(feature = "clipboard")]
pub use quizkit_clipboard as clipboard;
