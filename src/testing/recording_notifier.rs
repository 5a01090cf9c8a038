use crate::ports::{Notice, NoticeLevel, Notifier};

/// Notifier that keeps every notice for later assertions.
#[derive(Debug, Default)]
#[allow(dead_code)]
pub struct RecordingNotifier {
    pub notices: Vec<Notice>,
}

#[allow(dead_code)]
impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> Vec<&Notice> {
        self.notices.iter().filter(|n| n.level == NoticeLevel::Warning).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}
