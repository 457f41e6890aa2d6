// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the ordered list of live notifications and handles
//! insertion, removal, and auto-dismiss expiry. It is designed to live inside
//! the host application's state and be driven through [`Message`] values
//! produced by the toast widgets and the tick subscription.

use crate::handle::ToastHandle;
use crate::notification::{Notification, NotificationId, Severity};
use crossbeam_channel::{bounded, Receiver, Sender};
use iced::{time, Subscription};
use std::sync::{Arc, Weak};
use std::time::Duration;

/// Capacity of the channel behind [`ToastHandle`].
///
/// A handle push returns [`HandleError::Full`](crate::HandleError::Full)
/// once this many notifications are buffered without a tick draining them.
pub const HANDLE_CHANNEL_CAPACITY: usize = 64;

/// Interval at which the tick subscription checks for expired notifications.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Activate the action button of a specific notification.
    Activate(NotificationId),
    /// Tick for checking auto-dismiss timers.
    Tick,
}

/// Manages the list of live notifications.
///
/// Notifications are kept in insertion order, which is also display order.
/// No two live notifications share an ID, and removing an unknown ID is a
/// no-op, so a tick arriving after a manual dismissal is harmless.
#[derive(Debug)]
pub struct Manager {
    /// Live notifications, oldest first.
    notifications: Vec<Notification>,
    /// Sender cloned into every [`ToastHandle`].
    handle_tx: Sender<Notification>,
    /// Receiving end drained on each tick.
    handle_rx: Receiver<Notification>,
    /// Tracks live handles; keeps the tick subscription alive while any
    /// handle exists so background pushes surface without another UI event.
    handle_token: Weak<()>,
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        let (handle_tx, handle_rx) = bounded(HANDLE_CHANNEL_CAPACITY);
        Self {
            notifications: Vec::new(),
            handle_tx,
            handle_rx,
            handle_token: Weak::new(),
        }
    }

    /// Pushes a notification, appending it after all existing ones.
    ///
    /// Returns the notification's ID, which is the sole handle for removing
    /// it later. Warnings and errors are logged through the `log` facade.
    pub fn push(&mut self, notification: Notification) -> NotificationId {
        match notification.severity() {
            Severity::Warning => log::warn!("notification: {}", notification.message()),
            Severity::Error => log::error!("notification: {}", notification.message()),
            Severity::Success | Severity::Info => {
                log::debug!("notification: {}", notification.message());
            }
        }

        let id = notification.id();
        self.notifications.push(notification);
        id
    }

    /// Adds a notification with the given message and severity.
    ///
    /// Uses the default duration. For a custom timeout, a persistent
    /// notification, or an action button, build the [`Notification`] with
    /// its builder methods and [`push`](Self::push) it.
    pub fn add(&mut self, message: impl Into<String>, severity: Severity) -> NotificationId {
        self.push(Notification::new(severity, message))
    }

    /// Adds a success notification.
    pub fn add_success(&mut self, message: impl Into<String>) -> NotificationId {
        self.push(Notification::success(message))
    }

    /// Adds an error notification.
    pub fn add_error(&mut self, message: impl Into<String>) -> NotificationId {
        self.push(Notification::error(message))
    }

    /// Adds a warning notification.
    pub fn add_warning(&mut self, message: impl Into<String>) -> NotificationId {
        self.push(Notification::warning(message))
    }

    /// Adds an info notification.
    pub fn add_info(&mut self, message: impl Into<String>) -> NotificationId {
        self.push(Notification::info(message))
    }

    /// Adds a success notification with an action button.
    ///
    /// The action closes the notification when activated. For a
    /// [`keep_open`](crate::Action::keep_open) action or a custom duration,
    /// build the [`Notification`] yourself and [`push`](Self::push) it.
    pub fn add_success_with_action(
        &mut self,
        message: impl Into<String>,
        action_text: impl Into<String>,
        on_activate: impl Fn() + Send + Sync + 'static,
    ) -> NotificationId {
        self.push(
            Notification::success(message)
                .with_action(crate::Action::new(action_text, on_activate)),
        )
    }

    /// Adds an error notification with an action button.
    ///
    /// The action closes the notification when activated. For a
    /// [`keep_open`](crate::Action::keep_open) action or a custom duration,
    /// build the [`Notification`] yourself and [`push`](Self::push) it.
    pub fn add_error_with_action(
        &mut self,
        message: impl Into<String>,
        action_text: impl Into<String>,
        on_activate: impl Fn() + Send + Sync + 'static,
    ) -> NotificationId {
        self.push(
            Notification::error(message).with_action(crate::Action::new(action_text, on_activate)),
        )
    }

    /// Adds a warning notification with an action button.
    ///
    /// The action closes the notification when activated. For a
    /// [`keep_open`](crate::Action::keep_open) action or a custom duration,
    /// build the [`Notification`] yourself and [`push`](Self::push) it.
    pub fn add_warning_with_action(
        &mut self,
        message: impl Into<String>,
        action_text: impl Into<String>,
        on_activate: impl Fn() + Send + Sync + 'static,
    ) -> NotificationId {
        self.push(
            Notification::warning(message)
                .with_action(crate::Action::new(action_text, on_activate)),
        )
    }

    /// Adds an info notification with an action button.
    ///
    /// The action closes the notification when activated. For a
    /// [`keep_open`](crate::Action::keep_open) action or a custom duration,
    /// build the [`Notification`] yourself and [`push`](Self::push) it.
    pub fn add_info_with_action(
        &mut self,
        message: impl Into<String>,
        action_text: impl Into<String>,
        on_activate: impl Fn() + Send + Sync + 'static,
    ) -> NotificationId {
        self.push(
            Notification::info(message).with_action(crate::Action::new(action_text, on_activate)),
        )
    }

    /// Removes a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed. Removing an
    /// unknown ID is a no-op, so expiry ticks and double dismissals never
    /// need coordination.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.notifications.iter().position(|n| n.id() == id) {
            self.notifications.remove(pos);
            true
        } else {
            false
        }
    }

    /// Activates the action of the notification with the given ID.
    ///
    /// Invokes the action callback, then removes the notification unless its
    /// action was built with [`keep_open`](crate::Action::keep_open).
    /// No-op when the ID is unknown or the notification has no action.
    pub fn activate(&mut self, id: NotificationId) {
        let action = self
            .notifications
            .iter()
            .find(|n| n.id() == id)
            .and_then(|n| n.action().cloned());

        if let Some(action) = action {
            action.invoke();
            if action.close_on_activate() {
                self.remove(id);
            }
        }
    }

    /// Processes a tick event, dismissing any notifications that have expired.
    ///
    /// Also drains notifications pushed through [`ToastHandle`]s since the
    /// last tick. Should be called periodically; [`subscription`](Self::subscription)
    /// provides a ready-made driver.
    pub fn tick(&mut self) {
        self.drain_handles();

        let expired: Vec<NotificationId> = self
            .notifications
            .iter()
            .filter(|n| n.should_auto_dismiss())
            .map(Notification::id)
            .collect();

        for id in expired {
            self.remove(id);
        }
    }

    /// Handles a notification message.
    pub fn update(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.remove(*id);
            }
            Message::Activate(id) => self.activate(*id),
            Message::Tick => self.tick(),
        }
    }

    /// Creates a cheap-to-clone handle for pushing notifications from
    /// background tasks.
    ///
    /// Handle pushes are buffered and surface on the next tick. The tick
    /// subscription stays active while the handle or any clone of it is
    /// alive, so drop handles once a background task is done with them.
    pub fn handle(&mut self) -> ToastHandle {
        let token = match self.handle_token.upgrade() {
            Some(token) => token,
            None => {
                let token = Arc::new(());
                self.handle_token = Arc::downgrade(&token);
                token
            }
        };
        ToastHandle::new(self.handle_tx.clone(), token)
    }

    /// Returns a periodic tick subscription while one is needed.
    ///
    /// Active while any live notification can still expire, a handle is
    /// alive, or handle pushes await draining; [`Subscription::none`]
    /// otherwise.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.needs_tick() {
            time::every(TICK_INTERVAL).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }

    /// Returns the live notifications in display order (oldest first).
    pub fn notifications(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }

    /// Returns the number of live notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    /// Returns whether there are no live notifications.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    /// Removes all notifications.
    pub fn clear(&mut self) {
        self.notifications.clear();
    }

    /// Returns whether the periodic tick has work left to do.
    fn needs_tick(&self) -> bool {
        let awaiting_expiry = self.notifications.iter().any(|n| n.duration().is_some());
        awaiting_expiry || self.handle_token.strong_count() > 0 || !self.handle_rx.is_empty()
    }

    /// Moves handle-pushed notifications into the live list.
    fn drain_handles(&mut self) {
        while let Ok(notification) = self.handle_rx.try_recv() {
            self.push(notification);
        }
    }
}

impl Default for Manager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.len(), 0);
        assert!(manager.is_empty());
    }

    #[test]
    fn push_preserves_insertion_order() {
        let mut manager = Manager::new();
        manager.add_success("Saved");
        manager.add_error("Failed");

        let messages: Vec<&str> = manager.notifications().map(Notification::message).collect();
        assert_eq!(messages, vec!["Saved", "Failed"]);
    }

    #[test]
    fn add_returns_id_of_pushed_notification() {
        let mut manager = Manager::new();
        let id = manager.add("test", Severity::Info);

        let stored = manager.notifications().next().unwrap();
        assert_eq!(stored.id(), id);
        assert_eq!(stored.severity(), Severity::Info);
    }

    #[test]
    fn remove_deletes_only_the_matching_notification() {
        let mut manager = Manager::new();
        let first = manager.add_success("Saved");
        manager.add_error("Failed");

        assert!(manager.remove(first));
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.notifications().next().unwrap().message(), "Failed");
    }

    #[test]
    fn remove_is_idempotent() {
        let mut manager = Manager::new();
        let id = manager.add_info("test");

        assert!(manager.remove(id));
        assert!(!manager.remove(id));
        assert!(manager.is_empty());
    }

    #[test]
    fn tick_removes_expired_notifications() {
        let mut manager = Manager::new();
        manager.push(Notification::info("old").auto_dismiss(Duration::ZERO));
        let keep = manager.push(Notification::info("fresh"));

        manager.tick();

        assert_eq!(manager.len(), 1);
        assert_eq!(manager.notifications().next().unwrap().id(), keep);
    }

    #[test]
    fn tick_never_removes_persistent_notifications() {
        let mut manager = Manager::new();
        manager.push(Notification::error("stuck").persistent());

        for _ in 0..10 {
            manager.tick();
        }
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn activate_invokes_callback_then_removes() {
        let mut manager = Manager::new();
        let invoked = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&invoked);
        let id = manager.add_info_with_action("Archived", "Undo", move || {
            flag.store(true, Ordering::SeqCst);
        });

        manager.activate(id);

        assert!(invoked.load(Ordering::SeqCst));
        assert!(manager.is_empty());
    }

    #[test]
    fn activate_with_keep_open_retains_notification() {
        let mut manager = Manager::new();
        let invoked = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&invoked);
        let id = manager.push(Notification::info("Downloading").with_action(
            crate::Action::new("Details", move || {
                flag.store(true, Ordering::SeqCst);
            })
            .keep_open(),
        ));

        manager.activate(id);

        assert!(invoked.load(Ordering::SeqCst));
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn activate_without_action_is_noop() {
        let mut manager = Manager::new();
        let id = manager.add_info("plain");

        manager.activate(id);
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn update_routes_messages() {
        let mut manager = Manager::new();
        let id = manager.add_success("test");

        manager.update(&Message::Dismiss(id));
        assert!(manager.is_empty());

        manager.push(Notification::info("expired").auto_dismiss(Duration::ZERO));
        manager.update(&Message::Tick);
        assert!(manager.is_empty());
    }

    #[test]
    fn clear_removes_all() {
        let mut manager = Manager::new();
        for i in 0..5 {
            manager.add_info(format!("test-{i}"));
        }

        manager.clear();
        assert!(manager.is_empty());
    }

    #[test]
    fn handle_pushes_surface_on_tick() {
        let mut manager = Manager::new();
        let handle = manager.handle();

        handle.success("done in background").unwrap();
        assert!(manager.is_empty());

        manager.tick();
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn tick_needed_only_while_notifications_can_expire() {
        let mut manager = Manager::new();
        assert!(!manager.needs_tick());

        let id = manager.add_info("expiring");
        assert!(manager.needs_tick());

        manager.remove(id);
        assert!(!manager.needs_tick());

        manager.push(Notification::error("stuck").persistent());
        assert!(!manager.needs_tick());
    }

    #[test]
    fn tick_not_needed_after_all_handles_drop() {
        let mut manager = Manager::new();
        let handle = manager.handle();
        let clone = handle.clone();
        assert!(manager.needs_tick());

        drop(handle);
        assert!(manager.needs_tick());

        drop(clone);
        assert!(!manager.needs_tick());
    }

    #[test]
    fn tick_needed_while_handle_pushes_await_draining() {
        let mut manager = Manager::new();
        let handle = manager.handle();
        handle.info("buffered").unwrap();
        drop(handle);

        assert!(manager.needs_tick());

        manager.tick();
        assert_eq!(manager.len(), 1);
    }
}
