use std::cell::RefCell;
use std::rc::Rc;

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A toast-style message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Sink for user-facing notifications.
pub trait Notifier {
    fn notify(&self, notice: Notice);

    fn success(&self, message: impl Into<String>) {
        self.notify(Notice {
            level: NoticeLevel::Success,
            message: message.into(),
        });
    }

    fn error(&self, message: impl Into<String>) {
        self.notify(Notice {
            level: NoticeLevel::Error,
            message: message.into(),
        });
    }
}

/// Collects notices in memory. Used headless and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryNotifier {
    notices: Rc<RefCell<Vec<Notice>>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    /// Drain and return everything recorded so far.
    pub fn take(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.notices.borrow_mut())
    }

    pub fn last(&self) -> Option<Notice> {
        self.notices.borrow().last().cloned()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}
