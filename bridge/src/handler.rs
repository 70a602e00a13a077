use std::fmt;
use std::sync::{Arc, Weak};

use quizkit_channel::{ChannelError, LogScope, MethodCall, MethodHandler, Payload};
use quizkit_clipboard::ImageSource;

use crate::GET_CLIPBOARD_IMAGE;
use crate::error::BridgeError;
use crate::png;
use crate::shell::ShellInner;

/// Handler for the clipboard method channel.
///
/// Each invocation is single-shot: query the image source, encode, answer.
/// No state is kept between calls, so repeated calls with an unchanged
/// clipboard are idempotent.
pub struct ClipboardBridge {
    // Non-owning back-reference to the shell, used solely for logging
    // context. A detached bridge still answers calls.
    shell: Weak<ShellInner>,
    source: Arc<dyn ImageSource>,
}

impl fmt::Debug for ClipboardBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClipboardBridge").finish_non_exhaustive()
    }
}

impl ClipboardBridge {
    pub(crate) fn new(shell: Weak<ShellInner>, source: Arc<dyn ImageSource>) -> Self {
        Self { shell, source }
    }

    fn with_log(&self, f: impl FnOnce(&LogScope)) {
        if let Some(shell) = self.shell.upgrade() {
            f(shell.log());
        }
    }
}

impl MethodHandler for ClipboardBridge {
    fn on_method_call(&self, call: MethodCall) -> Result<Payload, ChannelError> {
        if call.method != GET_CLIPBOARD_IMAGE {
            self.with_log(|log| {
                log.error(&format!("Received unknown method call: {}", call.method));
            });
            return Err(ChannelError::NotImplemented);
        }

        self.with_log(|log| log.info("Received getClipboardImage method call"));

        let Some(image) = self.source.image() else {
            // An empty clipboard is an expected state; logged at info, not warn.
            self.with_log(|log| log.info("No image found in clipboard"));
            return Err(BridgeError::NoImage.into());
        };
        self.with_log(|log| log.info("Image found in clipboard"));

        match png::encode_png(&image) {
            Ok(bytes) => {
                self.with_log(|log| log.info("Image converted to PNG data"));
                Ok(Payload::Bytes(bytes))
            }
            Err(err) => {
                self.with_log(|log| log.error(&format!("Failed to convert image to PNG: {err}")));
                Err(BridgeError::EncodeFailed.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizkit_clipboard::ImageData;

    struct EmptyClipboard;

    impl ImageSource for EmptyClipboard {
        fn image(&self) -> Option<ImageData> {
            None
        }
    }

    #[test]
    fn detached_bridge_still_answers() {
        let bridge = ClipboardBridge::new(Weak::new(), Arc::new(EmptyClipboard));
        let reply = bridge.on_method_call(MethodCall::new(GET_CLIPBOARD_IMAGE));
        assert_eq!(reply, Err(BridgeError::NoImage.into()));
    }

    #[test]
    fn detached_bridge_rejects_unknown_methods() {
        let bridge = ClipboardBridge::new(Weak::new(), Arc::new(EmptyClipboard));
        let reply = bridge.on_method_call(MethodCall::new("writeClipboardImage"));
        assert_eq!(reply, Err(ChannelError::NotImplemented));
    }
}
