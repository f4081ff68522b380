// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.
//!
//! Every factory captures the active [`ColorScheme`] so the same button
//! reads correctly in both the standard and high-contrast schemes, and takes
//! a `focused` flag that draws the keyboard focus ring.

use crate::ui::design_tokens::{border, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Border for a control, swapping in the focus ring when focused.
fn ring(scheme: ColorScheme, focused: bool, normal: Color) -> Border {
    if focused {
        Border {
            color: scheme.focus_ring,
            width: border::WIDTH_MD,
            radius: radius::SM.into(),
        }
    } else {
        Border {
            color: normal,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        }
    }
}

/// Primary action button (add to cart, checkout, submit).
pub fn primary(
    scheme: ColorScheme,
    focused: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered => scheme.brand_secondary,
            _ => scheme.brand_primary,
        };
        // Yellow-on-black needs dark button text to stay legible
        let text_color = if scheme.brand_primary.g > 0.7 && scheme.brand_primary.b < 0.2 {
            scheme.surface_primary
        } else {
            scheme.overlay_text
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: ring(scheme, focused, scheme.brand_secondary),
            shadow: match status {
                button::Status::Hovered => shadow::MD,
                _ => shadow::SM,
            },
            snap: true,
        }
    }
}

/// Neutral button (close panel, accessibility actions).
pub fn secondary(
    scheme: ColorScheme,
    focused: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered => scheme.surface_tertiary,
            _ => scheme.surface_secondary,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: scheme.text_primary,
            border: ring(scheme, focused, scheme.text_tertiary),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Destructive button (remove a cart line).
pub fn destructive(
    scheme: ColorScheme,
    focused: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered => scheme.error,
            _ => Color::TRANSPARENT,
        };
        let text_color = match status {
            button::Status::Hovered => scheme.overlay_text,
            _ => scheme.error,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: ring(scheme, focused, scheme.error),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Navbar section link. Active sections get brand-colored text.
pub fn nav_link(
    scheme: ColorScheme,
    active: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let text_color = if active || matches!(status, button::Status::Hovered) {
            scheme.brand_primary
        } else {
            scheme.text_primary
        };

        button::Style {
            background: Some(Background::Color(Color::TRANSPARENT)),
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Navbar icon button (cart, accessibility). The focus ring also marks the
/// opener a closed panel returned focus to.
pub fn chrome(
    scheme: ColorScheme,
    focused: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered => scheme.surface_secondary,
            _ => Color::TRANSPARENT,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: scheme.text_primary,
            border: ring(scheme, focused, Color::TRANSPARENT),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// FAQ accordion header row.
pub fn accordion(
    scheme: ColorScheme,
    expanded: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = if expanded || matches!(status, button::Status::Hovered) {
            scheme.surface_secondary
        } else {
            scheme.surface_primary
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: scheme.text_primary,
            border: Border {
                color: scheme.surface_tertiary,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
