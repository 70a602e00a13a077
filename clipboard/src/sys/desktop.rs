use crate::ImageData;
use arboard::Clipboard;
use std::borrow::Cow;

/// Get the image currently on the clipboard, if any.
///
/// Returns `None` when the clipboard cannot be opened or holds no image
/// payload; both are expected states, not errors.
#[must_use]
pub fn get_image() -> Option<ImageData> {
    let mut clipboard = Clipboard::new().ok()?;
    let image = clipboard.get_image().ok()?;
    Some(ImageData {
        width: image.width,
        height: image.height,
        bytes: Cow::Owned(image.bytes.into_owned()),
    })
}
