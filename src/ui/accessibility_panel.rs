// SPDX-License-Identifier: MPL-2.0
//! Accessibility preferences panel.
//!
//! A small dropdown with the font-size and high-contrast controls. The
//! preference values themselves live in the app config; this module only
//! renders and emits messages. Focus order follows [`control_at`].

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Number of focusable controls in the panel.
pub const FOCUSABLE_COUNT: usize = 4;

/// Messages emitted by the accessibility panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    IncreaseFont,
    DecreaseFont,
    ToggleHighContrast,
    Close,
}

/// The panel controls in visual order.
const CONTROLS: [Message; FOCUSABLE_COUNT] = [
    Message::IncreaseFont,
    Message::DecreaseFont,
    Message::ToggleHighContrast,
    Message::Close,
];

/// Returns the control at a focus index.
#[must_use]
pub fn control_at(index: usize) -> Option<Message> {
    CONTROLS.get(index).copied()
}

fn label_key(control: Message) -> &'static str {
    match control {
        Message::IncreaseFont => "accessibility-increase-font",
        Message::DecreaseFont => "accessibility-decrease-font",
        Message::ToggleHighContrast => "accessibility-high-contrast",
        Message::Close => "accessibility-close",
    }
}

/// Contextual data needed to render the panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub scheme: ColorScheme,
    pub font_factor: f32,
    /// Whether high contrast is currently on, shown on the toggle row.
    pub high_contrast: bool,
    /// Index of the panel control holding keyboard focus, if any.
    pub focused: Option<usize>,
}

/// Render the accessibility panel.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title =
        Text::new(ctx.i18n.tr("accessibility-title")).size(typography::TITLE_SM * ctx.font_factor);

    let mut column = Column::new().spacing(spacing::SM).push(title);
    for (index, control) in CONTROLS.iter().enumerate() {
        column = column.push(build_control(&ctx, index, *control));
    }

    Container::new(column)
        .width(Length::Fixed(sizing::PANEL_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::panel(ctx.scheme))
        .into()
}

/// Build one control row with its focus ring and optional state marker.
fn build_control<'a>(ctx: &ViewContext<'a>, index: usize, control: Message) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(ctx.i18n.tr(label_key(control)))
                .size(typography::BODY * ctx.font_factor)
                .width(Length::Fill),
        );

    if control == Message::ToggleHighContrast {
        let state_key = if ctx.high_contrast {
            "accessibility-state-on"
        } else {
            "accessibility-state-off"
        };
        row = row.push(
            Text::new(ctx.i18n.tr(state_key))
                .size(typography::BODY_SM * ctx.font_factor)
                .color(ctx.scheme.text_secondary),
        );
    }

    button(row)
        .on_press(control)
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill)
        .style(styles::button::secondary(
            ctx.scheme,
            ctx.focused == Some(index),
        ))
        .into()
}
