// SPDX-License-Identifier: MPL-2.0
//! Handle for pushing notifications from outside the UI update loop.
//!
//! A [`ToastHandle`] is cheap to clone and can be moved into background
//! tasks. Notifications are sent over a bounded channel and surface on the
//! manager's next tick. Pushing through a handle whose manager is gone fails
//! loudly instead of silently dropping the notification.

use crate::notification::{Notification, NotificationId};
use crossbeam_channel::{Sender, TrySendError};
use std::sync::Arc;
use thiserror::Error;

/// Errors returned when a [`ToastHandle`] push cannot be delivered.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HandleError {
    /// The manager this handle belongs to has been dropped.
    #[error("notification manager is no longer alive")]
    Closed,
    /// The notification channel is full; the manager is not ticking.
    #[error("notification channel is full")]
    Full,
}

/// Handle for sending notifications to a [`Manager`](crate::Manager).
///
/// Created via [`Manager::handle`](crate::Manager::handle).
#[derive(Debug, Clone)]
pub struct ToastHandle {
    tx: Sender<Notification>,
    /// Liveness token; the manager keeps its tick subscription running
    /// while any clone of this handle holds one.
    _token: Arc<()>,
}

impl ToastHandle {
    pub(crate) fn new(tx: Sender<Notification>, token: Arc<()>) -> Self {
        Self { tx, _token: token }
    }

    /// Sends a notification to the owning manager.
    ///
    /// Returns the notification's ID on success. The notification becomes
    /// visible on the manager's next tick.
    pub fn push(&self, notification: Notification) -> Result<NotificationId, HandleError> {
        let id = notification.id();
        self.tx.try_send(notification).map_err(|err| match err {
            TrySendError::Disconnected(_) => HandleError::Closed,
            TrySendError::Full(_) => HandleError::Full,
        })?;
        Ok(id)
    }

    /// Sends a success notification.
    pub fn success(&self, message: impl Into<String>) -> Result<NotificationId, HandleError> {
        self.push(Notification::success(message))
    }

    /// Sends an error notification.
    pub fn error(&self, message: impl Into<String>) -> Result<NotificationId, HandleError> {
        self.push(Notification::error(message))
    }

    /// Sends a warning notification.
    pub fn warning(&self, message: impl Into<String>) -> Result<NotificationId, HandleError> {
        self.push(Notification::warning(message))
    }

    /// Sends an info notification.
    pub fn info(&self, message: impl Into<String>) -> Result<NotificationId, HandleError> {
        self.push(Notification::info(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Manager;

    #[test]
    fn push_returns_the_notification_id() {
        let mut manager = Manager::new();
        let handle = manager.handle();

        let id = handle.push(Notification::info("test")).unwrap();
        manager.tick();

        assert_eq!(manager.notifications().next().unwrap().id(), id);
    }

    #[test]
    fn cloned_handles_share_the_same_manager() {
        let mut manager = Manager::new();
        let handle = manager.handle();
        let clone = handle.clone();

        handle.info("first").unwrap();
        clone.info("second").unwrap();
        manager.tick();

        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn push_after_manager_drop_fails_loudly() {
        let mut manager = Manager::new();
        let handle = manager.handle();
        drop(manager);

        assert_eq!(
            handle.success("too late").unwrap_err(),
            HandleError::Closed
        );
    }
}
