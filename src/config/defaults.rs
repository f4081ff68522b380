// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Font Scale**: Multipliers applied to every text size
//! - **Notifications**: Toast lifetime

// ==========================================================================
// Font Scale Defaults
// ==========================================================================

/// Normal font scale (1.0 = design token sizes as authored).
pub const DEFAULT_FONT_FACTOR: f32 = 1.0;

/// Font scale applied by the "increase font" accessibility action.
pub const LARGE_FONT_FACTOR: f32 = 1.15;

/// Font scale applied by the "decrease font" accessibility action.
pub const SMALL_FONT_FACTOR: f32 = 0.85;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Seconds a toast stays on screen before auto-dismissal.
pub const NOTIFICATION_TIMEOUT_SECS: u64 = 5;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Font scale validation
    assert!(SMALL_FONT_FACTOR > 0.0);
    assert!(SMALL_FONT_FACTOR < DEFAULT_FONT_FACTOR);
    assert!(LARGE_FONT_FACTOR > DEFAULT_FONT_FACTOR);

    // Notification validation
    assert!(NOTIFICATION_TIMEOUT_SECS > 0);
};
