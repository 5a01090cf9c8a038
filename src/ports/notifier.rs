/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
}

/// A short titled message for the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, title: title.into(), message: message.into() }
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Warning, title: title.into(), message: message.into() }
    }
}

/// Port for surfacing notices to the operator.
///
/// Delivery is fire-and-forget: a notifier never fails the operation that raised the notice.
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}
