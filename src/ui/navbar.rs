// SPDX-License-Identifier: MPL-2.0
//! Top navigation bar with section links and the panel opener buttons.
//!
//! The navbar itself is stateless: the active section comes from the
//! storefront's scroll tracking and the panel state lives with the app,
//! so this module only renders and emits messages.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, Container, Row, Text};
use iced::{alignment, Element, Length};

/// The storefront page sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Products,
    Services,
    Faq,
    Contact,
}

impl Section {
    /// All sections in page order.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Products,
        Section::Services,
        Section::Faq,
        Section::Contact,
    ];

    /// Returns the i18n key for the nav link label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Section::Home => "nav-home",
            Section::Products => "nav-products",
            Section::Services => "nav-services",
            Section::Faq => "nav-faq",
            Section::Contact => "nav-contact",
        }
    }
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub scheme: ColorScheme,
    pub font_factor: f32,
    /// Section currently highlighted in the nav links.
    pub active_section: Section,
    /// Total units in the cart, shown in the badge.
    pub cart_count: u32,
    /// Whether the cart opener should show a focus ring.
    pub cart_opener_focused: bool,
    /// Whether the accessibility opener should show a focus ring.
    pub accessibility_opener_focused: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// A section link was activated.
    SectionPressed(Section),
    /// The cart button was activated.
    CartPressed,
    /// The accessibility button was activated.
    AccessibilityPressed,
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.i18n.tr("brand-name"))
        .size(typography::TITLE_MD * ctx.font_factor)
        .color(ctx.scheme.brand_primary);

    let mut links = Row::new()
        .spacing(spacing::XXS)
        .align_y(alignment::Vertical::Center);
    for section in Section::ALL {
        let active = ctx.active_section == section;
        links = links.push(
            button(
                Text::new(ctx.i18n.tr(section.label_key()))
                    .size(typography::BODY * ctx.font_factor),
            )
            .on_press(Message::SectionPressed(section))
            .padding([spacing::XS, spacing::SM])
            .style(styles::button::nav_link(ctx.scheme, active)),
        );
    }

    let accessibility_button = button(
        Text::new(ctx.i18n.tr("navbar-accessibility")).size(typography::BODY * ctx.font_factor),
    )
    .on_press(Message::AccessibilityPressed)
    .padding([spacing::XS, spacing::SM])
    .style(styles::button::chrome(
        ctx.scheme,
        ctx.accessibility_opener_focused,
    ));

    let cart_button = button(build_cart_label(&ctx))
        .on_press(Message::CartPressed)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::chrome(ctx.scheme, ctx.cart_opener_focused));

    let row = Row::new()
        .spacing(spacing::MD)
        .padding([0.0, spacing::LG])
        .align_y(alignment::Vertical::Center)
        .push(brand)
        .push(
            Container::new(links)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        )
        .push(accessibility_button)
        .push(cart_button);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .align_y(alignment::Vertical::Center)
        .style(styles::container::navbar(ctx.scheme))
        .into()
}

/// Build the cart button content: label plus the unit-count badge.
fn build_cart_label<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let label = Text::new(ctx.i18n.tr("navbar-cart")).size(typography::BODY * ctx.font_factor);

    let badge = Container::new(
        Text::new(ctx.cart_count.to_string())
            .size(typography::CAPTION * ctx.font_factor)
            .color(ctx.scheme.overlay_text),
    )
    .padding([spacing::XXS / 2.0, spacing::XXS])
    .style(styles::container::badge(ctx.scheme));

    Row::new()
        .spacing(spacing::XXS)
        .align_y(alignment::Vertical::Center)
        .push(label)
        .push(badge)
        .into()
}
