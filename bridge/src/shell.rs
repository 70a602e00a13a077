use std::sync::{Arc, Weak};

use quizkit_channel::{LogScope, MessageHub, MethodChannel};
use quizkit_clipboard::ImageSource;

use crate::CLIPBOARD_CHANNEL;
use crate::handler::ClipboardBridge;

const LOG_SUBSYSTEM: &str = "com.example.nursing_quiz_app_6";
const LOG_CATEGORY: &str = "AppShell";

/// Application launch lifecycle for the host shell.
///
/// [`AppShell::launch`] is the launch hook: it builds the message hub,
/// registers the clipboard bridge on [`CLIPBOARD_CHANNEL`], and hands the
/// channel to the UI layer. The bridge holds only a weak back-reference to
/// the shell, so dropping the shell never leaks the handler and the handler
/// never keeps the shell alive.
#[derive(Debug, Clone)]
pub struct AppShell {
    inner: Arc<ShellInner>,
}

#[derive(Debug)]
pub(crate) struct ShellInner {
    hub: MessageHub,
    clipboard: MethodChannel,
    log: LogScope,
}

impl ShellInner {
    pub(crate) fn log(&self) -> &LogScope {
        &self.log
    }
}

impl AppShell {
    /// Launch the shell, registering the clipboard channel against `source`.
    #[must_use]
    pub fn launch(source: impl ImageSource + 'static) -> Self {
        let log = LogScope::new(LOG_SUBSYSTEM, LOG_CATEGORY);
        log.info("Application is launching");

        let source: Arc<dyn ImageSource> = Arc::new(source);
        let inner = Arc::new_cyclic(|shell: &Weak<ShellInner>| {
            let mut hub = MessageHub::new();
            log.info("Setting up method channel handler");
            let clipboard = hub.register(
                CLIPBOARD_CHANNEL,
                Arc::new(ClipboardBridge::new(shell.clone(), source)),
            );
            ShellInner {
                hub,
                clipboard,
                log,
            }
        });
        inner.log.info("Application launch completed");

        Self { inner }
    }

    /// The clipboard method channel, for the UI layer to invoke.
    #[must_use]
    pub fn clipboard_channel(&self) -> MethodChannel {
        self.inner.clipboard.clone()
    }

    /// Look up any registered channel by name.
    #[must_use]
    pub fn channel(&self, name: &str) -> Option<MethodChannel> {
        self.inner.hub.channel(name)
    }

    /// Diagnostics scope for this shell.
    #[must_use]
    pub fn log(&self) -> &LogScope {
        &self.inner.log
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
    fn launch_registers_the_clipboard_channel() {
        let shell = AppShell::launch(EmptyClipboard);
        assert_eq!(shell.clipboard_channel().name(), CLIPBOARD_CHANNEL);
        assert!(shell.channel(CLIPBOARD_CHANNEL).is_some());
        assert!(shell.channel("com.example.nursing_quiz_app_6/audio").is_none());
    }

    #[test]
    fn log_scope_is_bound_to_the_shell() {
        let shell = AppShell::launch(EmptyClipboard);
        assert_eq!(
            shell.log().target(),
            "com.example.nursing_quiz_app_6::AppShell"
        );
    }
}
