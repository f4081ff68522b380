// SPDX-License-Identifier: MPL-2.0
//! Cart overlay panel: line items, derived totals, and checkout.
//!
//! The panel is a read-only projection of the cart engine's state; every
//! number shown here is recomputed from the cart on render, never cached.
//! Focusable controls are ordered close button, one remove button per
//! line, then checkout, matching [`control_at`].

use crate::cart::{format_price, Cart, CartItem};
use crate::catalog::ProductId;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, scrollable, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Contextual data needed to render the cart panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub cart: &'a Cart,
    pub scheme: ColorScheme,
    pub font_factor: f32,
    /// Index of the panel control holding keyboard focus, if any.
    pub focused: Option<usize>,
}

/// Messages emitted by the cart panel.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// The close button was activated.
    Close,
    /// A line's remove button was activated.
    Remove(ProductId),
    /// The checkout button was activated.
    Checkout,
}

/// Number of focusable controls: close, one remove per line, checkout.
#[must_use]
pub fn focusable_count(cart: &Cart) -> usize {
    cart.len() + 2
}

/// Returns the control at a focus index, in visual order.
#[must_use]
pub fn control_at(cart: &Cart, index: usize) -> Option<Message> {
    if index == 0 {
        return Some(Message::Close);
    }
    let line = index - 1;
    if line < cart.len() {
        return Some(Message::Remove(cart.items()[line].id));
    }
    (index == cart.len() + 1).then_some(Message::Checkout)
}

/// Render the cart panel.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let header = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(ctx.i18n.tr("cart-title"))
                .size(typography::TITLE_SM * ctx.font_factor)
                .width(Length::Fill),
        )
        .push(
            button(Text::new("×").size(typography::BODY_LG * ctx.font_factor))
                .on_press(Message::Close)
                .padding(spacing::XXS)
                .style(styles::button::chrome(ctx.scheme, ctx.focused == Some(0))),
        );

    let body: Element<'a, Message> = if ctx.cart.is_empty() {
        Container::new(
            Text::new(ctx.i18n.tr("cart-empty-state"))
                .size(typography::BODY * ctx.font_factor)
                .color(ctx.scheme.text_secondary),
        )
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .into()
    } else {
        let mut items = Column::new().spacing(spacing::SM);
        for (line, item) in ctx.cart.items().iter().enumerate() {
            items = items.push(build_line(&ctx, line, item));
        }
        scrollable(items)
            .height(Length::Fixed(sizing::PANEL_BODY_HEIGHT))
            .into()
    };

    let total_price = format_price(ctx.cart.totals().price);
    let total_row = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(ctx.i18n.tr("cart-total-label"))
                .size(typography::BODY_LG * ctx.font_factor)
                .width(Length::Fill),
        )
        .push(
            Text::new(
                ctx.i18n
                    .tr_with_args("price-tag", &[("amount", total_price.as_str())]),
            )
            .size(typography::BODY_LG * ctx.font_factor)
            .color(ctx.scheme.brand_primary),
        );

    let checkout_index = ctx.cart.len() + 1;
    let checkout =
        button(Text::new(ctx.i18n.tr("cart-checkout")).size(typography::BODY * ctx.font_factor))
            .on_press(Message::Checkout)
            .padding([spacing::XS, spacing::LG])
            .width(Length::Fill)
            .style(styles::button::primary(
                ctx.scheme,
                ctx.focused == Some(checkout_index),
            ));

    let content = Column::new()
        .spacing(spacing::MD)
        .push(header)
        .push(body)
        .push(total_row)
        .push(checkout);

    Container::new(content)
        .width(Length::Fixed(sizing::PANEL_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::panel(ctx.scheme))
        .into()
}

/// Build one cart line: thumbnail block, name and amounts, remove button.
fn build_line<'a>(ctx: &ViewContext<'a>, line: usize, item: &'a CartItem) -> Element<'a, Message> {
    let initial: String = item.name.chars().take(1).collect();
    let thumbnail = Container::new(Text::new(initial).size(typography::TITLE_SM * ctx.font_factor))
        .width(Length::Fixed(sizing::BUTTON_HEIGHT))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::card_image(ctx.scheme));

    let quantity = item.quantity.to_string();
    let line_total = format_price(item.line_total());

    let info = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(Text::new(item.name.as_str()).size(typography::BODY * ctx.font_factor))
        .push(
            Text::new(
                ctx.i18n
                    .tr_with_args("cart-quantity", &[("count", quantity.as_str())]),
            )
            .size(typography::BODY_SM * ctx.font_factor)
            .color(ctx.scheme.text_secondary),
        )
        .push(
            Text::new(
                ctx.i18n
                    .tr_with_args("price-tag", &[("amount", line_total.as_str())]),
            )
            .size(typography::BODY_SM * ctx.font_factor)
            .color(ctx.scheme.brand_primary),
        );

    let remove =
        button(Text::new(ctx.i18n.tr("cart-remove")).size(typography::BODY_SM * ctx.font_factor))
            .on_press(Message::Remove(item.id))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::button::destructive(
                ctx.scheme,
                ctx.focused == Some(1 + line),
            ));

    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(thumbnail)
        .push(info)
        .push(remove)
        .into()
}
