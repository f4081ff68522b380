// SPDX-License-Identifier: MPL-2.0
//! Extensible theming system.
//!
//! Two schemes exist: the standard light storefront look and the
//! high-contrast scheme toggled from the accessibility panel. `ColorScheme`
//! is `Copy` so views can pass it by value through their contexts.

use crate::ui::design_tokens::{opacity, palette};
use iced::Color;

/// Color palette for a theme.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub surface_tertiary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,

    // Brand colors
    pub brand_primary: Color,
    pub brand_secondary: Color,

    // Semantic colors
    pub error: Color,
    pub warning: Color,
    pub success: Color,
    pub info: Color,

    // Overlay colors
    pub overlay_background: Color,
    pub overlay_text: Color,

    // Keyboard focus indicator
    pub focus_ring: Color,
}

impl ColorScheme {
    /// Standard storefront scheme.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::PRIMARY_100,
            surface_tertiary: palette::GRAY_100,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,
            text_tertiary: palette::GRAY_400,

            brand_primary: palette::PRIMARY_500,
            brand_secondary: palette::PRIMARY_700,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,

            overlay_background: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,

            focus_ring: palette::PRIMARY_600,
        }
    }

    /// High-contrast scheme: near-black surfaces, yellow accents.
    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            surface_primary: palette::CONTRAST_BG,
            surface_secondary: palette::CONTRAST_SURFACE,
            surface_tertiary: Color::from_rgb(0.18, 0.18, 0.18),

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_100,
            text_tertiary: palette::GRAY_200,

            brand_primary: palette::CONTRAST_ACCENT,
            brand_secondary: palette::CONTRAST_ACCENT,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,

            overlay_background: Color {
                a: opacity::OVERLAY_HOVER,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,

            focus_ring: palette::CONTRAST_ACCENT,
        }
    }

    /// Returns the scheme for the current accessibility preference.
    #[must_use]
    pub fn for_mode(high_contrast: bool) -> Self {
        if high_contrast {
            Self::high_contrast()
        } else {
            Self::standard()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_scheme_has_light_surface() {
        let scheme = ColorScheme::standard();
        assert!(scheme.surface_primary.r > 0.9); // Close to white
    }

    #[test]
    fn high_contrast_scheme_has_dark_surface() {
        let scheme = ColorScheme::high_contrast();
        assert!(scheme.surface_primary.r < 0.1); // Close to black
    }

    #[test]
    fn high_contrast_accent_is_yellow() {
        let scheme = ColorScheme::high_contrast();
        assert!(scheme.brand_primary.r > 0.9);
        assert!(scheme.brand_primary.g > 0.7);
        assert!(scheme.brand_primary.b < 0.1);
    }

    #[test]
    fn for_mode_selects_the_right_scheme() {
        assert!(ColorScheme::for_mode(false).surface_primary.r > 0.9);
        assert!(ColorScheme::for_mode(true).surface_primary.r < 0.1);
    }

    #[test]
    fn focus_ring_stands_out_from_surface() {
        for scheme in [ColorScheme::standard(), ColorScheme::high_contrast()] {
            assert_ne!(scheme.focus_ring, scheme.surface_primary);
        }
    }
}
