// SPDX-License-Identifier: MPL-2.0
//! Toast notification library for the Iced GUI toolkit.
//!
//! This crate provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions (save success, errors, etc.) without blocking
//! interaction, and can carry an action button (undo, retry, details).
//!
//! # Components
//!
//! - [`Notification`] - Immutable notification record with severity, message,
//!   auto-dismiss timeout, and optional [`Action`]
//! - [`Manager`] - Owns the list of live notifications and their lifecycle
//! - [`Toast`] - Widget functions rendering notifications as toast cards
//! - [`ToastHandle`] - Clonable handle for pushing from background tasks
//!
//! # Usage
//!
//! The manager lives in your application state and is driven through
//! [`Message`] values:
//!
//! ```ignore
//! use iced_toasts::{Manager, Toast};
//!
//! struct App {
//!     toasts: Manager,
//! }
//!
//! // In update():
//! self.toasts.add_success("Image saved");
//! // Route toast messages back:
//! Message::Toast(message) => self.toasts.update(&message),
//!
//! // In view(), layer the overlay over your content:
//! iced::widget::Stack::new()
//!     .push(content)
//!     .push(Toast::view_overlay(&self.toasts).map(Message::Toast))
//!
//! // In subscription(), drive auto-dismiss:
//! self.toasts.subscription().map(Message::Toast)
//! ```
//!
//! # Design Considerations
//!
//! - Toasts auto-dismiss after 5s by default; `persistent()` disables this
//! - Display order is insertion order (oldest at the top)
//! - Position: bottom-right corner
//! - Late expiry ticks and double dismissals are harmless no-ops

#![doc(html_root_url = "https://docs.rs/iced_toasts/0.1.0")]

pub mod design_tokens;
mod handle;
mod manager;
mod notification;
mod toast;

pub use handle::{HandleError, ToastHandle};
pub use manager::{Manager, Message, HANDLE_CHANNEL_CAPACITY};
pub use notification::{Action, Notification, NotificationId, Severity, DEFAULT_DURATION};
pub use toast::Toast;
