// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard routing depends on whether an overlay panel is open: with a
//! panel up, Escape, Tab and Enter/Space drive the panel's focus trap;
//! with no panel, only the accessibility accelerator is listened for.

use super::Message;
use crate::ui::panels::FocusDirection;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Creates the keyboard subscription for the current overlay state.
///
/// While a panel is open:
/// - Escape closes it
/// - Tab / Shift+Tab cycle the trapped focus
/// - Enter / Space activate the focused control when no widget claimed the key
///
/// Alt+A opens the accessibility menu from either state.
pub fn create_event_subscription(panel_open: bool) -> Subscription<Message> {
    if panel_open {
        event::listen_with(|event, status, _window_id| match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }) => Some(Message::EscapePressed),
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Tab),
                modifiers,
                ..
            }) => Some(Message::FocusCycle(if modifiers.shift() {
                FocusDirection::Backward
            } else {
                FocusDirection::Forward
            })),
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key:
                    keyboard::Key::Named(keyboard::key::Named::Enter | keyboard::key::Named::Space),
                ..
            }) if matches!(status, event::Status::Ignored) => Some(Message::ActivateFocused),
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Character(ref c),
                modifiers,
                ..
            }) if (c.as_str() == "a" || c.as_str() == "A")
                && modifiers.alt()
                && !modifiers.command() =>
            {
                Some(Message::AccessibilityAccelerator)
            }
            _ => None,
        })
    } else {
        event::listen_with(|event, _status, _window_id| match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Character(ref c),
                modifiers,
                ..
            }) if (c.as_str() == "a" || c.as_str() == "A")
                && modifiers.alt()
                && !modifiers.command() =>
            {
                Some(Message::AccessibilityAccelerator)
            }
            _ => None,
        })
    }
}

/// Creates a periodic tick subscription for notification auto-dismiss.
/// Idle whenever no toast is on screen.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
