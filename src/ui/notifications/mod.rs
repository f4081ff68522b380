// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions (item added, checkout completed, errors, etc.)
//! without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` for the replace-on-push lifecycle
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification};
//!
//! // Create a manager
//! let mut manager = Manager::new();
//!
//! // Push a notification; any toast already on screen is replaced
//! manager.push(Notification::success("notification-checkout-success"));
//!
//! // In your view function, render the toast overlay
//! let toast_overlay = Toast::view_overlay(&manager, &i18n, 1.0).map(Message::Notification);
//! ```
//!
//! # Design Considerations
//!
//! - One toast at a time: a new notification replaces the current one
//! - Toast duration: fixed 5s for every severity, manual dismiss available
//! - Position: top center of the window

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity, DISMISS_TIMEOUT};
pub use toast::Toast;
