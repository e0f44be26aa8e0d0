use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info};

use super::notification::{Notification, NotificationId, NotificationKind, NotificationSlot, SUCCESS_MESSAGE};
use super::scheduler::Scheduler;
use super::validation::{validate, Field, FormInput, ValidationError};
use crate::config::SubmissionTimings;

pub const BUSY_LABEL: &str = "Sending...";
pub const BUSY_CLASS: &str = "loading";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Presentation of the submit control. Applied in a single view call so the
/// label, disabled flag and busy modifier always change together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonState {
    pub label: String,
    pub disabled: bool,
    pub busy: bool,
}

impl ButtonState {
    pub fn idle(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
            busy: false,
        }
    }

    pub fn busy() -> Self {
        Self {
            label: BUSY_LABEL.to_string(),
            disabled: true,
            busy: true,
        }
    }
}

/// What the controller needs from the page hosting the contact form.
pub trait FormView {
    fn read_input(&self) -> FormInput;
    fn button_label(&self) -> String;
    fn apply_button(&self, button: &ButtonState);
    /// Inserts the notification as the form's first child and scrolls to it.
    fn show_notification(&self, notification: &Notification);
    /// Must tolerate `id` no longer being on the page.
    fn remove_notification(&self, id: NotificationId);
    fn clear_notifications(&self);
    /// Focuses the field and scrolls it to the middle of the viewport.
    fn focus_field(&self, field: Field);
    fn reset_fields(&self);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rejected(ValidationError),
    Sending,
}

#[derive(Debug, Default)]
struct ControllerState {
    submission: SubmissionState,
    notifications: NotificationSlot,
}

struct Inner<V, S> {
    view: V,
    scheduler: S,
    timings: SubmissionTimings,
    idle_label: String,
    state: RefCell<ControllerState>,
}

/// Validates and "sends" the contact form. Sending is simulated with a fixed
/// delay; there is no network path and no failure after validation.
///
/// Nothing but the disabled button stops a second submit while one is in
/// flight. Each one runs to completion on its own timer.
pub struct FormSubmissionController<V, S> {
    inner: Rc<Inner<V, S>>,
}

impl<V, S> Clone for FormSubmissionController<V, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<V, S> FormSubmissionController<V, S>
where
    V: FormView + 'static,
    S: Scheduler + 'static,
{
    pub fn new(view: V, scheduler: S, timings: SubmissionTimings) -> Self {
        let idle_label = view.button_label();
        Self {
            inner: Rc::new(Inner {
                view,
                scheduler,
                timings,
                idle_label,
                state: RefCell::new(ControllerState::default()),
            }),
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.inner.state.borrow().submission
    }

    pub fn visible_notification(&self) -> Option<NotificationId> {
        self.inner.state.borrow().notifications.visible()
    }

    pub fn submit(&self) -> SubmitOutcome {
        let inner = &self.inner;
        inner.set_state(SubmissionState::Idle);
        inner.dismiss_all();

        let input = inner.view.read_input();
        if let Err(error) = validate(&input) {
            info!("Contact form rejected: {} ({})", error.reason(), error.field());
            inner.set_state(SubmissionState::Failed);
            inner.raise(NotificationKind::Error, error.to_string());
            inner.view.focus_field(error.field());
            return SubmitOutcome::Rejected(error);
        }

        inner.set_state(SubmissionState::Submitting);
        inner.view.apply_button(&ButtonState::busy());
        match serde_json::to_string(&input) {
            Ok(body) => debug!("Simulating contact request: {}", body),
            Err(e) => debug!("Could not serialize contact request: {}", e),
        }

        let pending = Rc::clone(inner);
        inner.scheduler.schedule(
            inner.timings.send_delay_ms,
            Box::new(move || pending.finish_send()),
        );
        SubmitOutcome::Sending
    }
}

impl<V, S> Inner<V, S>
where
    V: FormView + 'static,
    S: Scheduler + 'static,
{
    fn set_state(&self, submission: SubmissionState) {
        self.state.borrow_mut().submission = submission;
    }

    fn finish_send(self: &Rc<Self>) {
        self.view.apply_button(&ButtonState::idle(self.idle_label.as_str()));
        self.set_state(SubmissionState::Succeeded);
        self.raise(NotificationKind::Success, SUCCESS_MESSAGE);
        self.view.reset_fields();
        info!("Contact form sent");
        self.set_state(SubmissionState::Idle);
    }

    fn raise(self: &Rc<Self>, kind: NotificationKind, message: impl Into<String>) {
        self.view.clear_notifications();
        let notification = self
            .state
            .borrow_mut()
            .notifications
            .raise(kind, message, &self.timings);
        self.view.show_notification(&notification);

        let id = notification.id;
        let inner = Rc::clone(self);
        self.scheduler.schedule(
            notification.expires_after_ms,
            Box::new(move || inner.expire(id)),
        );
    }

    fn expire(&self, id: NotificationId) {
        let expired = {
            let mut state = self.state.borrow_mut();
            let expired = state.notifications.expire(id);
            if expired && state.submission == SubmissionState::Failed {
                state.submission = SubmissionState::Idle;
            }
            expired
        };
        if expired {
            self.view.remove_notification(id);
        } else {
            debug!("Notification {} was already replaced", id);
        }
    }

    fn dismiss_all(&self) {
        self.state.borrow_mut().notifications.clear();
        self.view.clear_notifications();
    }
}
