//! Read-only system clipboard image access.
//!
//! This crate exposes the one clipboard operation the quiz app shell needs:
//! reading an image off the OS clipboard. The clipboard itself is owned and
//! populated entirely outside this crate; nothing here writes to it.
//!
//! Bridge handlers depend on the [`ImageSource`] seam rather than the OS
//! clipboard directly, so they can be exercised against fixtures.

#![warn(missing_docs)]

mod sys;

pub use sys::get_image;

use std::borrow::Cow;

/// Image data containing width, height, and raw RGBA bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    /// Width of the image in pixels.
    pub width: usize,
    /// Height of the image in pixels.
    pub height: usize,
    /// Raw RGBA bytes of the image.
    pub bytes: Cow<'static, [u8]>,
}

/// A source of clipboard images.
pub trait ImageSource: Send + Sync {
    /// Snapshot the current clipboard image, if one is present.
    fn image(&self) -> Option<ImageData>;
}

/// The OS clipboard as an [`ImageSource`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    /// Create a handle to the system clipboard.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ImageSource for SystemClipboard {
    fn image(&self) -> Option<ImageData> {
        sys::get_image()
    }
}
