// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` keeps at most one toast alive at a time. Pushing a new
//! notification replaces the current one immediately, which also restarts
//! the dismiss timer from the fresh notification's creation time.

use super::notification::{Notification, NotificationId};

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Tick for checking the auto-dismiss timer.
    Tick,
}

/// Manages the single visible notification.
#[derive(Debug, Default)]
pub struct Manager {
    /// The toast currently on screen, if any.
    current: Option<Notification>,
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a notification, replacing whatever toast was on screen.
    ///
    /// There is no queue: the replaced toast is dropped and the new one
    /// starts its own dismiss timer.
    pub fn push(&mut self, notification: Notification) {
        self.current = Some(notification);
    }

    /// Dismisses the current notification if its ID matches.
    ///
    /// Returns `true` if the notification was removed. A stale ID (from a
    /// toast that has already been replaced) is ignored.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id() == id) {
            self.current = None;
            return true;
        }
        false
    }

    /// Processes a tick event, dismissing the notification once expired.
    ///
    /// Should be called periodically (e.g., every 100-500ms) to handle
    /// auto-dismiss.
    pub fn tick(&mut self) {
        if self.current.as_ref().is_some_and(Notification::expired) {
            self.current = None;
        }
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => {
                self.tick();
            }
        }
    }

    /// Returns the currently visible notification, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Returns the visible notifications (zero or one).
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.current.iter()
    }

    /// Returns whether a toast is on screen.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        self.current.is_some()
    }

    /// Clears the current notification.
    pub fn clear(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::super::notification::DISMISS_TIMEOUT;
    use super::*;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert!(manager.current().is_none());
        assert!(!manager.has_notifications());
    }

    #[test]
    fn push_shows_notification() {
        let mut manager = Manager::new();
        manager.push(Notification::success("test"));

        assert!(manager.has_notifications());
        assert_eq!(manager.visible().count(), 1);
    }

    #[test]
    fn push_replaces_current() {
        let mut manager = Manager::new();
        manager.push(Notification::success("first"));
        manager.push(Notification::info("second"));

        assert_eq!(manager.visible().count(), 1);
        let current = manager.current().unwrap();
        assert_eq!(current.message_key(), "second");
    }

    #[test]
    fn dismiss_removes_current() {
        let mut manager = Manager::new();
        let notification = Notification::success("test");
        let id = notification.id();

        manager.push(notification);
        assert!(manager.has_notifications());

        let removed = manager.dismiss(id);
        assert!(removed);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn dismiss_stale_id_is_ignored() {
        let mut manager = Manager::new();
        let replaced = Notification::success("replaced");
        let stale_id = replaced.id();
        manager.push(replaced);
        manager.push(Notification::warning("current"));

        assert!(!manager.dismiss(stale_id));
        assert_eq!(manager.current().unwrap().message_key(), "current");
    }

    #[test]
    fn dismiss_on_empty_returns_false() {
        let mut manager = Manager::new();
        let fake_id = Notification::success("temp").id();

        assert!(!manager.dismiss(fake_id));
    }

    #[test]
    fn tick_keeps_fresh_notification() {
        let mut manager = Manager::new();
        manager.push(Notification::info("test"));

        manager.tick();
        assert!(manager.has_notifications());
    }

    #[test]
    fn tick_drops_expired_notification() {
        let mut manager = Manager::new();
        let mut notification = Notification::info("test");
        notification.backdate(DISMISS_TIMEOUT);
        manager.push(notification);

        manager.tick();
        assert!(!manager.has_notifications());
    }

    #[test]
    fn replacement_restarts_the_timer() {
        let mut manager = Manager::new();
        let mut old = Notification::success("old");
        old.backdate(DISMISS_TIMEOUT);
        manager.push(old);

        manager.push(Notification::success("new"));
        manager.tick();

        assert!(manager.has_notifications());
        assert_eq!(manager.current().unwrap().message_key(), "new");
    }

    #[test]
    fn handle_message_dismiss() {
        let mut manager = Manager::new();
        let notification = Notification::success("test");
        let id = notification.id();
        manager.push(notification);

        manager.handle_message(&Message::Dismiss(id));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn clear_removes_current() {
        let mut manager = Manager::new();
        manager.push(Notification::success("test"));

        manager.clear();
        assert!(!manager.has_notifications());
    }
}
