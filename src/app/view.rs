// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The storefront page is the permanent base layer; overlay panels and the
//! toast are stacked above it. Layering decisions all live here so the
//! components themselves stay flat.

use super::Message;
use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::i18n::fluent::I18n;
use crate::ui::accessibility_panel;
use crate::ui::cart_panel;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{self, Toast};
use crate::ui::panels::{PanelId, Panels};
use crate::ui::storefront;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::scroll_lock;
use iced::widget::{mouse_area, opaque, Column, Container, Stack};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    pub cart: &'a Cart,
    pub storefront: &'a storefront::State,
    pub panels: &'a Panels,
    pub notifications: &'a notifications::Manager,
    pub scheme: ColorScheme,
    pub font_factor: f32,
    pub high_contrast: bool,
}

/// Renders the full application: page, overlay panel and toast.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        scheme: ctx.scheme,
        font_factor: ctx.font_factor,
        active_section: ctx.storefront.active_section(),
        cart_count: ctx.cart.totals().items,
        cart_opener_focused: ctx.panels.opener_focused(PanelId::Cart),
        accessibility_opener_focused: ctx.panels.opener_focused(PanelId::Accessibility),
    })
    .map(Message::Navbar);

    let page = storefront::view(
        ctx.storefront,
        storefront::ViewContext {
            i18n: ctx.i18n,
            catalog: ctx.catalog,
            scheme: ctx.scheme,
            font_factor: ctx.font_factor,
        },
    )
    .map(Message::Storefront);

    let base = Column::new()
        .push(navbar)
        .push(scroll_lock(page, ctx.panels.scroll_locked()))
        .width(Length::Fill)
        .height(Length::Fill);

    let mut stack = Stack::new()
        .push(base)
        .width(Length::Fill)
        .height(Length::Fill);

    match ctx.panels.open_panel() {
        Some(PanelId::Cart) => {
            stack = stack.push(view_cart_layer(
                ctx.i18n,
                ctx.cart,
                ctx.panels,
                ctx.scheme,
                ctx.font_factor,
            ));
        }
        Some(PanelId::Accessibility) => {
            stack = stack.push(view_accessibility_layer(
                ctx.i18n,
                ctx.panels,
                ctx.scheme,
                ctx.font_factor,
                ctx.high_contrast,
            ));
        }
        None => {}
    }

    // The toast sits above everything, open panels included.
    stack = stack.push(
        Toast::view_overlay(ctx.notifications, ctx.i18n, ctx.font_factor)
            .map(Message::Notification),
    );

    stack.into()
}

/// Modal layer for the cart: dim backdrop, centered panel, page blocked.
///
/// The outer `opaque` keeps every event away from the page; the inner one
/// absorbs clicks landing on the panel body, so only true backdrop clicks
/// reach the dismiss handler.
fn view_cart_layer<'a>(
    i18n: &'a I18n,
    cart: &'a Cart,
    panels: &'a Panels,
    scheme: ColorScheme,
    font_factor: f32,
) -> Element<'a, Message> {
    let panel = cart_panel::view(cart_panel::ViewContext {
        i18n,
        cart,
        scheme,
        font_factor,
        focused: panels.focused_index(PanelId::Cart),
    })
    .map(Message::CartPanel);

    opaque(
        mouse_area(
            Container::new(opaque(panel))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
                .style(styles::container::backdrop(scheme)),
        )
        .on_press(Message::BackdropPressed),
    )
}

/// Non-modal layer for the accessibility menu, dropped below the navbar's
/// right edge. No dimming and no outer `opaque`: wheel events must keep
/// reaching the page. The `mouse_area` swallows the click that closes it.
fn view_accessibility_layer<'a>(
    i18n: &'a I18n,
    panels: &'a Panels,
    scheme: ColorScheme,
    font_factor: f32,
    high_contrast: bool,
) -> Element<'a, Message> {
    let panel = accessibility_panel::view(accessibility_panel::ViewContext {
        i18n,
        scheme,
        font_factor,
        high_contrast,
        focused: panels.focused_index(PanelId::Accessibility),
    })
    .map(Message::AccessibilityPanel);

    mouse_area(
        Container::new(opaque(panel))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Top)
            .padding([sizing::NAVBAR_HEIGHT + spacing::XS, spacing::MD]),
    )
    .on_press(Message::BackdropPressed)
    .into()
}
