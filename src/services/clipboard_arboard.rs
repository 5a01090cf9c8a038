use arboard::Clipboard;

use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// System clipboard backed by arboard.
///
/// On Linux the copied text is served by this process and is lost once it exits,
/// unless the clipboard was built with [`ArboardClipboard::waiting`].
pub struct ArboardClipboard {
    inner: Clipboard,
    #[cfg_attr(not(target_os = "linux"), allow(dead_code))]
    wait: bool,
}

fn clipboard_error(err: arboard::Error) -> AppError {
    AppError::Clipboard(err.to_string())
}

impl ArboardClipboard {
    pub fn new() -> Result<Self, AppError> {
        Clipboard::new().map(|inner| Self { inner, wait: false }).map_err(clipboard_error)
    }

    /// Block each write until another program takes over the clipboard. Linux only.
    pub fn waiting(mut self, wait: bool) -> Self {
        self.wait = wait;
        self
    }
}

impl ClipboardWriter for ArboardClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        tracing::debug!(bytes = text.len(), "copying script to clipboard");

        #[cfg(target_os = "linux")]
        if self.wait {
            use arboard::SetExtLinux;
            return self.inner.set().wait().text(text).map_err(clipboard_error);
        }

        self.inner.set_text(text).map_err(clipboard_error)
    }
}
