use crate::ports::{Notice, NoticeLevel, Notifier};

/// Prints notices to stderr so stdout stays reserved for script text.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, notice: Notice) {
        match notice.level {
            NoticeLevel::Warning => {
                tracing::debug!(title = %notice.title, level = "warning", "{}", notice.message);
                eprintln!("⚠️  {}: {}", notice.title, notice.message);
            }
            NoticeLevel::Info => {
                tracing::debug!(title = %notice.title, level = "info", "{}", notice.message);
                eprintln!("✅ {}: {}", notice.title, notice.message);
            }
        }
    }
}
