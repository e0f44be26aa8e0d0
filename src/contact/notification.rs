use std::fmt;

use crate::config::SubmissionTimings;

pub const SUCCESS_MESSAGE: &str =
    "Your message has been sent successfully. We'll get back to you within 24 hours.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn class_name(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success-message",
            NotificationKind::Error => "error-message",
        }
    }

    /// Bold lead-in shown before the message text.
    pub fn heading(&self) -> &'static str {
        match self {
            NotificationKind::Success => "Thank you!",
            NotificationKind::Error => "Error:",
        }
    }

    pub fn expiry_ms(&self, timings: &SubmissionTimings) -> u32 {
        match self {
            NotificationKind::Success => timings.success_expiry_ms,
            NotificationKind::Error => timings.error_expiry_ms,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(pub u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub message: String,
    pub expires_after_ms: u32,
}

/// Tracks which notification, if any, is currently on screen.
#[derive(Debug, Default)]
pub struct NotificationSlot {
    next_id: u64,
    visible: Option<NotificationId>,
}

impl NotificationSlot {
    /// Allocates a notification and makes it the visible one, replacing
    /// whatever was shown before.
    pub fn raise(
        &mut self,
        kind: NotificationKind,
        message: impl Into<String>,
        timings: &SubmissionTimings,
    ) -> Notification {
        self.next_id += 1;
        let id = NotificationId(self.next_id);
        self.visible = Some(id);
        Notification {
            id,
            kind,
            message: message.into(),
            expires_after_ms: kind.expiry_ms(timings),
        }
    }

    /// Returns false when `id` was already superseded or cleared.
    pub fn expire(&mut self, id: NotificationId) -> bool {
        if self.visible == Some(id) {
            self.visible = None;
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.visible = None;
    }

    pub fn visible(&self) -> Option<NotificationId> {
        self.visible
    }
}
