use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// Clipboard double keeping every copied script, or refusing all writes.
#[derive(Debug, Default)]
#[allow(dead_code)]
pub struct MockClipboard {
    pub copies: Vec<String>,
    pub unavailable: bool,
}

#[allow(dead_code)]
impl MockClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that fails like a headless session without a display.
    pub fn unavailable() -> Self {
        Self { copies: Vec::new(), unavailable: true }
    }

    pub fn last_copy(&self) -> Option<&str> {
        self.copies.last().map(String::as_str)
    }
}

impl ClipboardWriter for MockClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        if self.unavailable {
            return Err(AppError::Clipboard("no display available".to_string()));
        }
        self.copies.push(text.to_string());
        Ok(())
    }
}
