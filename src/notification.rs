// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct, the `Severity` enum, and
//! the optional `Action` attached to a notification.

use crate::design_tokens::palette;
use iced::Color;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Auto-dismiss timeout applied when none is set explicitly.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(5000);

/// Unique identifier for a notification.
///
/// IDs come from a process-wide monotonic counter, so two live notifications
/// can never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level of a notification.
///
/// Severity determines the accent color and glyph of the rendered toast and
/// nothing else; it never changes lifecycle behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (green).
    Success,
    /// Error requiring attention (red).
    Error,
    /// Warning that doesn't block operation (orange).
    Warning,
    /// Informational message (blue).
    #[default]
    Info,
}

impl Severity {
    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Error => palette::ERROR_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Info => palette::INFO_500,
        }
    }
}

/// An action button attached to a notification.
///
/// Activating the action invokes its callback; unless [`Action::keep_open`]
/// was used, the notification is then removed as well.
#[derive(Clone)]
pub struct Action {
    text: String,
    on_activate: Arc<dyn Fn() + Send + Sync>,
    close_on_activate: bool,
}

impl Action {
    /// Creates an action with the given button label and callback.
    ///
    /// By default, activating the action also closes its notification.
    pub fn new(text: impl Into<String>, on_activate: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            text: text.into(),
            on_activate: Arc::new(on_activate),
            close_on_activate: true,
        }
    }

    /// Keeps the notification visible after the action is activated.
    #[must_use]
    pub fn keep_open(mut self) -> Self {
        self.close_on_activate = false;
        self
    }

    /// Returns the button label.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns whether activating the action also closes the notification.
    #[must_use]
    pub fn close_on_activate(&self) -> bool {
        self.close_on_activate
    }

    /// Invokes the action callback.
    pub fn invoke(&self) {
        (self.on_activate)();
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("text", &self.text)
            .field("close_on_activate", &self.close_on_activate)
            .finish_non_exhaustive()
    }
}

/// A notification to be displayed to the user.
///
/// Notifications are immutable after creation; lifecycle is handled entirely
/// by the [`Manager`](crate::Manager) that owns them.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Unique identifier for this notification.
    id: NotificationId,
    /// Severity level (determines accent color and glyph).
    severity: Severity,
    /// Display text shown on the toast.
    message: String,
    /// When this notification was created.
    created_at: Instant,
    /// Auto-dismiss timeout; `None` means the notification never expires.
    duration: Option<Duration>,
    /// Optional action button.
    action: Option<Action>,
}

impl Notification {
    /// Creates a new notification with the given severity and message.
    ///
    /// The notification auto-dismisses after [`DEFAULT_DURATION`] unless
    /// overridden with [`auto_dismiss`](Self::auto_dismiss) or
    /// [`persistent`](Self::persistent).
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message: message.into(),
            created_at: Instant::now(),
            duration: Some(DEFAULT_DURATION),
            action: None,
        }
    }

    /// Creates a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    /// Creates an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Creates a warning notification.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Creates an info notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    /// Sets a custom auto-dismiss timeout.
    #[must_use]
    pub fn auto_dismiss(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Disables auto-dismiss; the notification stays until removed explicitly.
    #[must_use]
    pub fn persistent(mut self) -> Self {
        self.duration = None;
        self
    }

    /// Attaches an action button.
    #[must_use]
    pub fn with_action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the severity level.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the display text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns when this notification was created.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns the age of this notification.
    #[must_use]
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    /// Returns the auto-dismiss timeout, or `None` for persistent notifications.
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    /// Returns the attached action, if any.
    #[must_use]
    pub fn action(&self) -> Option<&Action> {
        self.action.as_ref()
    }

    /// Returns whether this notification has outlived its timeout.
    #[must_use]
    pub fn should_auto_dismiss(&self) -> bool {
        match self.duration {
            Some(d) => self.age() >= d,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn severity_colors_are_distinct() {
        let success = Severity::Success.color();
        let info = Severity::Info.color();
        let warning = Severity::Warning.color();
        let error = Severity::Error.color();

        assert_ne!(success, info);
        assert_ne!(success, warning);
        assert_ne!(success, error);
        assert_ne!(info, warning);
        assert_ne!(info, error);
        assert_ne!(warning, error);
    }

    #[test]
    fn default_severity_is_info() {
        assert_eq!(Severity::default(), Severity::Info);
    }

    #[test]
    fn new_notification_uses_default_duration() {
        let notification = Notification::info("test");
        assert_eq!(notification.duration(), Some(DEFAULT_DURATION));
    }

    #[test]
    fn persistent_notification_never_auto_dismisses() {
        let notification = Notification::error("test").persistent();
        assert_eq!(notification.duration(), None);
        assert!(!notification.should_auto_dismiss());
    }

    #[test]
    fn zero_duration_expires_immediately() {
        let notification = Notification::info("test").auto_dismiss(Duration::ZERO);
        assert!(notification.should_auto_dismiss());
    }

    #[test]
    fn notification_constructors_set_correct_severity() {
        assert_eq!(Notification::success("").severity(), Severity::Success);
        assert_eq!(Notification::info("").severity(), Severity::Info);
        assert_eq!(Notification::warning("").severity(), Severity::Warning);
        assert_eq!(Notification::error("").severity(), Severity::Error);
    }

    #[test]
    fn action_closes_by_default() {
        let action = Action::new("Undo", || {});
        assert!(action.close_on_activate());
        assert!(!action.keep_open().close_on_activate());
    }

    #[test]
    fn action_invoke_runs_callback() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        let action = Action::new("Retry", || {
            CALLS.fetch_add(1, Ordering::SeqCst);
        });

        action.invoke();
        action.invoke();
        assert_eq!(CALLS.load(Ordering::SeqCst), 2);
    }
}
