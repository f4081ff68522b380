// SPDX-License-Identifier: MPL-2.0
//! Overlay panel state and keyboard focus discipline.
//!
//! Tracks which overlay panel is open, which of its controls holds
//! keyboard focus, and where focus returns when the panel closes. Focus
//! is modeled as an index into the open panel's focusable controls; the
//! views translate the index into a visible focus ring.

/// The two overlay panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelId {
    /// Shopping cart summary with line items and checkout.
    Cart,
    /// Accessibility preference controls.
    Accessibility,
}

impl PanelId {
    /// Returns whether this panel suspends background scrolling while open.
    ///
    /// The cart panel covers the page and blocks interaction behind it;
    /// the accessibility panel is a small dropdown that leaves the page
    /// scrollable.
    #[must_use]
    pub fn blocks_scroll(self) -> bool {
        matches!(self, PanelId::Cart)
    }
}

/// Direction of a focus-cycle key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusDirection {
    /// Tab: advance to the next control.
    Forward,
    /// Shift+Tab: move to the previous control.
    Backward,
}

/// Where tracked keyboard focus currently rests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// No tracked focus.
    #[default]
    None,
    /// The navbar control that opens the given panel.
    Opener(PanelId),
    /// The nth focusable control inside the given panel.
    Panel(PanelId, usize),
}

/// Open/close state for the overlay panels plus the focus bookkeeping
/// that goes with them.
///
/// At most one panel is open at a time: opening one closes the other.
#[derive(Debug, Default)]
pub struct Panels {
    /// The currently open panel, if any.
    open: Option<PanelId>,
    /// Tracked focus position.
    focus: Focus,
}

impl Panels {
    /// Creates the initial state with both panels closed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a panel, closing the other one first.
    ///
    /// Focus moves to the panel's first control, or nowhere when the
    /// panel has none.
    pub fn open(&mut self, panel: PanelId, focusable_count: usize) {
        self.open = Some(panel);
        self.focus = if focusable_count == 0 {
            Focus::None
        } else {
            Focus::Panel(panel, 0)
        };
    }

    /// Closes the given panel if it is open.
    ///
    /// Focus returns to the control that opens the panel, so a keyboard
    /// user lands back where they started.
    pub fn close(&mut self, panel: PanelId) {
        if self.open == Some(panel) {
            self.open = None;
            self.focus = Focus::Opener(panel);
        }
    }

    /// Opens the panel when closed, closes it when open.
    pub fn toggle(&mut self, panel: PanelId, focusable_count: usize) {
        if self.is_open(panel) {
            self.close(panel);
        } else {
            self.open(panel, focusable_count);
        }
    }

    /// Closes whichever panel is open, unconditionally.
    ///
    /// Returns `true` if a panel was open. This is the Escape handler.
    pub fn close_any(&mut self) -> bool {
        match self.open {
            Some(panel) => {
                self.close(panel);
                true
            }
            None => false,
        }
    }

    /// Moves focus one step through the open panel's controls, wrapping
    /// from the last control to the first and vice versa.
    ///
    /// Does nothing when no panel is open or the panel has no controls;
    /// closed panels are never trapped.
    pub fn trap(&mut self, direction: FocusDirection, focusable_count: usize) {
        let Some(panel) = self.open else { return };
        if focusable_count == 0 {
            return;
        }

        let index = match self.focus {
            Focus::Panel(p, index) if p == panel => index.min(focusable_count - 1),
            // Focus drifted outside the panel (mouse interaction); pull
            // it back to the first control.
            _ => {
                self.focus = Focus::Panel(panel, 0);
                return;
            }
        };

        let next = match direction {
            FocusDirection::Forward => {
                if index + 1 >= focusable_count {
                    0
                } else {
                    index + 1
                }
            }
            FocusDirection::Backward => {
                if index == 0 {
                    focusable_count - 1
                } else {
                    index - 1
                }
            }
        };
        self.focus = Focus::Panel(panel, next);
    }

    /// Re-clamps the focused index after the open panel's control count
    /// changed (e.g. a cart line was removed).
    pub fn clamp_focus(&mut self, focusable_count: usize) {
        if let Focus::Panel(panel, index) = self.focus {
            if self.open == Some(panel) {
                if focusable_count == 0 {
                    self.focus = Focus::None;
                } else if index >= focusable_count {
                    self.focus = Focus::Panel(panel, focusable_count - 1);
                }
            }
        }
    }

    /// Returns whether the given panel is open.
    #[must_use]
    pub fn is_open(&self, panel: PanelId) -> bool {
        self.open == Some(panel)
    }

    /// Returns the currently open panel, if any.
    #[must_use]
    pub fn open_panel(&self) -> Option<PanelId> {
        self.open
    }

    /// Returns whether background scrolling is currently suspended.
    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        self.open.is_some_and(PanelId::blocks_scroll)
    }

    /// Returns the tracked focus position.
    #[must_use]
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Returns the focused control index within the given panel, if that
    /// panel is open and holds focus.
    #[must_use]
    pub fn focused_index(&self, panel: PanelId) -> Option<usize> {
        match self.focus {
            Focus::Panel(p, index) if p == panel && self.is_open(panel) => Some(index),
            _ => None,
        }
    }

    /// Returns whether the opener control for the given panel should
    /// show a focus ring.
    #[must_use]
    pub fn opener_focused(&self, panel: PanelId) -> bool {
        self.focus == Focus::Opener(panel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_has_no_open_panel() {
        let panels = Panels::new();
        assert!(panels.open_panel().is_none());
        assert_eq!(panels.focus(), Focus::None);
        assert!(!panels.scroll_locked());
    }

    #[test]
    fn open_focuses_first_control() {
        let mut panels = Panels::new();
        panels.open(PanelId::Cart, 3);

        assert!(panels.is_open(PanelId::Cart));
        assert_eq!(panels.focused_index(PanelId::Cart), Some(0));
    }

    #[test]
    fn open_with_no_controls_leaves_focus_unset() {
        let mut panels = Panels::new();
        panels.open(PanelId::Cart, 0);

        assert!(panels.is_open(PanelId::Cart));
        assert_eq!(panels.focus(), Focus::None);
    }

    #[test]
    fn opening_one_panel_closes_the_other() {
        let mut panels = Panels::new();
        panels.open(PanelId::Cart, 3);
        panels.open(PanelId::Accessibility, 4);

        assert!(!panels.is_open(PanelId::Cart));
        assert!(panels.is_open(PanelId::Accessibility));
        assert_eq!(panels.focused_index(PanelId::Accessibility), Some(0));
    }

    #[test]
    fn close_returns_focus_to_opener() {
        let mut panels = Panels::new();
        panels.open(PanelId::Cart, 3);
        panels.close(PanelId::Cart);

        assert!(panels.open_panel().is_none());
        assert!(panels.opener_focused(PanelId::Cart));
    }

    #[test]
    fn closing_an_unopened_panel_is_ignored() {
        let mut panels = Panels::new();
        panels.open(PanelId::Cart, 3);
        panels.close(PanelId::Accessibility);

        assert!(panels.is_open(PanelId::Cart));
        assert_eq!(panels.focused_index(PanelId::Cart), Some(0));
    }

    #[test]
    fn toggle_round_trip() {
        let mut panels = Panels::new();
        panels.toggle(PanelId::Accessibility, 4);
        assert!(panels.is_open(PanelId::Accessibility));

        panels.toggle(PanelId::Accessibility, 4);
        assert!(!panels.is_open(PanelId::Accessibility));
        assert!(panels.opener_focused(PanelId::Accessibility));
    }

    #[test]
    fn close_any_reports_whether_a_panel_was_open() {
        let mut panels = Panels::new();
        assert!(!panels.close_any());

        panels.open(PanelId::Cart, 2);
        assert!(panels.close_any());
        assert!(panels.open_panel().is_none());
    }

    #[test]
    fn forward_cycle_wraps_from_last_to_first() {
        let mut panels = Panels::new();
        panels.open(PanelId::Cart, 3);

        panels.trap(FocusDirection::Forward, 3);
        panels.trap(FocusDirection::Forward, 3);
        assert_eq!(panels.focused_index(PanelId::Cart), Some(2));

        panels.trap(FocusDirection::Forward, 3);
        assert_eq!(panels.focused_index(PanelId::Cart), Some(0));
    }

    #[test]
    fn backward_cycle_wraps_from_first_to_last() {
        let mut panels = Panels::new();
        panels.open(PanelId::Cart, 3);

        panels.trap(FocusDirection::Backward, 3);
        assert_eq!(panels.focused_index(PanelId::Cart), Some(2));
    }

    #[test]
    fn trap_without_open_panel_is_ignored() {
        let mut panels = Panels::new();
        panels.trap(FocusDirection::Forward, 3);
        assert_eq!(panels.focus(), Focus::None);
    }

    #[test]
    fn trap_with_no_controls_is_ignored() {
        let mut panels = Panels::new();
        panels.open(PanelId::Cart, 0);
        panels.trap(FocusDirection::Forward, 0);
        assert_eq!(panels.focus(), Focus::None);
    }

    #[test]
    fn only_the_cart_panel_locks_scrolling() {
        let mut panels = Panels::new();
        panels.open(PanelId::Cart, 3);
        assert!(panels.scroll_locked());

        panels.open(PanelId::Accessibility, 4);
        assert!(!panels.scroll_locked());
    }

    #[test]
    fn clamp_focus_after_control_count_shrinks() {
        let mut panels = Panels::new();
        panels.open(PanelId::Cart, 5);
        panels.trap(FocusDirection::Backward, 5);
        assert_eq!(panels.focused_index(PanelId::Cart), Some(4));

        panels.clamp_focus(2);
        assert_eq!(panels.focused_index(PanelId::Cart), Some(1));

        panels.clamp_focus(0);
        assert_eq!(panels.focus(), Focus::None);
    }

    #[test]
    fn focused_index_only_reports_the_open_panel() {
        let mut panels = Panels::new();
        panels.open(PanelId::Cart, 3);

        assert_eq!(panels.focused_index(PanelId::Accessibility), None);
        assert_eq!(panels.focused_index(PanelId::Cart), Some(0));
    }
}
