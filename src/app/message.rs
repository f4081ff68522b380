// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::accessibility_panel;
use crate::ui::cart_panel;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::panels::FocusDirection;
use crate::ui::storefront;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Storefront(storefront::Message),
    CartPanel(cart_panel::Message),
    AccessibilityPanel(accessibility_panel::Message),
    Notification(notifications::NotificationMessage),
    /// Escape dismisses whichever overlay panel is open.
    EscapePressed,
    /// A click on the dimmed area around an open panel.
    BackdropPressed,
    /// Tab / Shift+Tab while a panel is open; focus stays trapped inside.
    FocusCycle(FocusDirection),
    /// Enter or Space pressed while a panel control holds focus.
    ActivateFocused,
    /// Alt+A, reachable from anywhere in the application.
    AccessibilityAccelerator,
    Tick(Instant),
}

/// Runtime flags resolved from the command line before the application
/// boots. All of them are optional overrides; the defaults come from the
/// user's platform directories and the saved configuration.
#[derive(Debug, Default)]
pub struct Flags {
    /// Locale override in BCP-47 form, e.g. `pt-BR`.
    pub lang: Option<String>,
    /// Extra directory searched for Fluent translation files.
    pub i18n_dir: Option<String>,
    /// Override for the directory holding the cart snapshot.
    pub data_dir: Option<String>,
    /// Override for the directory holding `settings.toml`.
    pub config_dir: Option<String>,
}
