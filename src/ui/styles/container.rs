// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Slide-over panel surface (cart, accessibility).
pub fn panel(scheme: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(scheme.surface_primary)),
        text_color: Some(scheme.text_primary),
        border: Border {
            color: scheme.surface_tertiary,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Dim layer behind an open panel. Clicking it closes the panel.
pub fn backdrop(scheme: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(scheme.overlay_background)),
        ..Default::default()
    }
}

/// Fixed top navigation bar.
pub fn navbar(scheme: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(scheme.surface_primary)),
        text_color: Some(scheme.text_primary),
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Storefront card (product, service, value proposition).
///
/// Cards below the reveal line render washed out until the user scrolls
/// them into view.
pub fn card(scheme: ColorScheme, revealed: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let alpha = if revealed {
            opacity::OPAQUE
        } else {
            opacity::REVEAL_DIMMED
        };

        container::Style {
            background: Some(Background::Color(Color {
                a: alpha,
                ..scheme.surface_primary
            })),
            text_color: Some(Color {
                a: alpha,
                ..scheme.text_primary
            }),
            border: Border {
                color: Color {
                    a: alpha,
                    ..scheme.surface_tertiary
                },
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            shadow: if revealed { shadow::SM } else { shadow::NONE },
            ..Default::default()
        }
    }
}

/// Full-width page band. Alternating bands are tinted with the light brand
/// color so section boundaries stay visible while scrolling.
pub fn section(scheme: ColorScheme, tinted: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(if tinted {
            scheme.surface_secondary
        } else {
            scheme.surface_primary
        })),
        text_color: Some(scheme.text_primary),
        ..Default::default()
    }
}

/// Hero banner at the top of the page.
pub fn hero(scheme: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(scheme.brand_primary)),
        text_color: Some(if scheme.brand_primary.g > 0.7 && scheme.brand_primary.b < 0.2 {
            scheme.surface_primary
        } else {
            scheme.overlay_text
        }),
        ..Default::default()
    }
}

/// Item-count badge pinned to the navbar cart button.
pub fn badge(scheme: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(scheme.error)),
        text_color: Some(scheme.overlay_text),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Gray placeholder block standing in for a product photo.
pub fn card_image(scheme: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(scheme.surface_secondary)),
        text_color: Some(scheme.brand_primary),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
