use crate::ImageData;

/// Get the image currently on the clipboard, if any.
///
/// This platform has no clipboard backend; there is never an image.
#[must_use]
pub fn get_image() -> Option<ImageData> {
    None
}
