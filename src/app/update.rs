// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized message handlers the top-level
//! `App::update` dispatches to. Every mutation of application state and
//! every persistence side effect lives here; the components themselves
//! only report events.

use super::paths::Storage;
use super::Message;
use crate::cart::{self, format_price, CheckoutOutcome};
use crate::catalog::{Catalog, ProductId};
use crate::config;
use crate::ui::accessibility_panel;
use crate::ui::cart_panel;
use crate::ui::navbar;
use crate::ui::notifications::{self, Notification};
use crate::ui::panels::{Focus, FocusDirection, PanelId, Panels};
use crate::ui::storefront;
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::time::Instant;

/// Mutable view of the application state handed to the message handlers.
pub struct UpdateContext<'a> {
    pub storage: &'a Storage,
    pub config: &'a mut config::Config,
    pub catalog: &'a Catalog,
    pub engine: &'a mut cart::Engine,
    pub panels: &'a mut Panels,
    pub storefront: &'a mut storefront::State,
    pub notifications: &'a mut notifications::Manager,
}

/// Number of keyboard-focusable controls inside the given panel right now.
/// The cart's count changes as line items come and go.
fn focusable_count_for(ctx: &UpdateContext<'_>, panel: PanelId) -> usize {
    match panel {
        PanelId::Cart => cart_panel::focusable_count(ctx.engine.cart()),
        PanelId::Accessibility => accessibility_panel::FOCUSABLE_COUNT,
    }
}

/// Scrolls the storefront so the section lands just below the navbar.
fn jump_to_section(ctx: &mut UpdateContext<'_>, section: navbar::Section) -> Task<Message> {
    let offset = ctx.storefront.jump_to(section);
    operation::scroll_to(
        Id::new(storefront::SCROLLABLE_ID),
        AbsoluteOffset { x: 0.0, y: offset },
    )
}

/// Writes the cart snapshot to disk, surfacing a failure as a toast.
fn persist_cart(ctx: &mut UpdateContext<'_>) {
    if let Some(key) = cart::store::save_to(ctx.engine.cart(), ctx.storage.data_dir.clone()) {
        ctx.notifications.push(Notification::warning(key));
    }
}

/// Writes the configuration to disk, surfacing a failure as a toast.
fn persist_config(ctx: &mut UpdateContext<'_>) {
    if config::save_with_override(ctx.config, ctx.storage.config_dir.clone()).is_err() {
        ctx.notifications
            .push(Notification::warning("notification-config-save-error"));
    }
}

fn add_to_cart(ctx: &mut UpdateContext<'_>, id: ProductId) {
    let Some(product) = ctx.catalog.get(id) else {
        return;
    };
    let name = product.name.clone();
    ctx.engine.add(product);
    ctx.notifications
        .push(Notification::success("notification-item-added").with_arg("name", name));
    persist_cart(ctx);
}

fn set_font_scale(ctx: &mut UpdateContext<'_>, scale: config::FontScale, key: &str) {
    ctx.config.accessibility.font_scale = scale;
    ctx.notifications.push(Notification::info(key));
    persist_config(ctx);
}

/// Handles navbar interactions: section jumps and the two panel openers.
pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match message {
        navbar::Message::SectionPressed(section) => jump_to_section(ctx, section),
        navbar::Message::CartPressed => {
            let count = focusable_count_for(ctx, PanelId::Cart);
            ctx.panels.toggle(PanelId::Cart, count);
            Task::none()
        }
        navbar::Message::AccessibilityPressed => {
            let count = focusable_count_for(ctx, PanelId::Accessibility);
            ctx.panels.toggle(PanelId::Accessibility, count);
            Task::none()
        }
    }
}

/// Handles storefront events: scroll tracking, hero jump, add-to-cart and
/// the contact form.
pub fn handle_storefront_message(
    ctx: &mut UpdateContext<'_>,
    message: storefront::Message,
) -> Task<Message> {
    // A modal panel freezes the page underneath it; scroll reports that
    // arrive while locked are stale and must not move the section spy.
    if ctx.panels.scroll_locked() && matches!(message, storefront::Message::Scrolled { .. }) {
        return Task::none();
    }

    match ctx.storefront.update(message, Instant::now(), ctx.catalog) {
        storefront::Event::None => Task::none(),
        storefront::Event::JumpTo(section) => jump_to_section(ctx, section),
        storefront::Event::AddToCart(id) => {
            add_to_cart(ctx, id);
            Task::none()
        }
        storefront::Event::FormSubmitted => {
            ctx.notifications
                .push(Notification::success("notification-form-success"));
            Task::none()
        }
    }
}

/// Handles cart panel interactions: close, per-line removal and checkout.
pub fn handle_cart_panel_message(
    ctx: &mut UpdateContext<'_>,
    message: cart_panel::Message,
) -> Task<Message> {
    match message {
        cart_panel::Message::Close => {
            ctx.panels.close(PanelId::Cart);
        }
        cart_panel::Message::Remove(id) => {
            if let Some(removed) = ctx.engine.remove(id) {
                ctx.notifications.push(
                    Notification::info("notification-item-removed").with_arg("name", removed.name),
                );
                persist_cart(ctx);
            }
            // Removing a line shrinks the control list under the trapped focus.
            let count = focusable_count_for(ctx, PanelId::Cart);
            ctx.panels.clamp_focus(count);
        }
        cart_panel::Message::Checkout => match ctx.engine.checkout() {
            CheckoutOutcome::EmptyCart => {
                ctx.notifications
                    .push(Notification::warning("notification-checkout-empty"));
            }
            CheckoutOutcome::Completed(totals) => {
                ctx.notifications.push(
                    Notification::success("notification-checkout-success")
                        .with_arg("count", totals.items.to_string())
                        .with_arg("total", format_price(totals.price)),
                );
                persist_cart(ctx);
                ctx.panels.close(PanelId::Cart);
            }
        },
    }
    Task::none()
}

/// Handles accessibility menu interactions. Every change is applied
/// immediately and persisted to the configuration file.
pub fn handle_accessibility_panel_message(
    ctx: &mut UpdateContext<'_>,
    message: accessibility_panel::Message,
) -> Task<Message> {
    match message {
        accessibility_panel::Message::IncreaseFont => {
            let scale = ctx.config.accessibility.font_scale.increased();
            set_font_scale(ctx, scale, "notification-font-increased");
        }
        accessibility_panel::Message::DecreaseFont => {
            let scale = ctx.config.accessibility.font_scale.decreased();
            set_font_scale(ctx, scale, "notification-font-decreased");
        }
        accessibility_panel::Message::ToggleHighContrast => {
            ctx.config.accessibility.high_contrast = !ctx.config.accessibility.high_contrast;
            let key = if ctx.config.accessibility.high_contrast {
                "notification-contrast-on"
            } else {
                "notification-contrast-off"
            };
            ctx.notifications.push(Notification::info(key));
            persist_config(ctx);
        }
        accessibility_panel::Message::Close => {
            ctx.panels.close(PanelId::Accessibility);
        }
    }
    Task::none()
}

/// Closes whichever panel is open. Escape and backdrop clicks land here.
pub fn handle_panel_dismiss(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.panels.close_any();
    Task::none()
}

/// Moves the trapped focus one control forward or backward.
pub fn handle_focus_cycle(ctx: &mut UpdateContext<'_>, direction: FocusDirection) -> Task<Message> {
    if let Some(panel) = ctx.panels.open_panel() {
        let count = focusable_count_for(ctx, panel);
        ctx.panels.trap(direction, count);
    }
    Task::none()
}

/// Activates the focused panel control as if it had been clicked.
pub fn handle_focus_activation(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    match ctx.panels.focus() {
        Focus::Panel(PanelId::Cart, index) => {
            if let Some(message) = cart_panel::control_at(ctx.engine.cart(), index) {
                return handle_cart_panel_message(ctx, message);
            }
        }
        Focus::Panel(PanelId::Accessibility, index) => {
            if let Some(message) = accessibility_panel::control_at(index) {
                return handle_accessibility_panel_message(ctx, message);
            }
        }
        Focus::None | Focus::Opener(_) => {}
    }
    Task::none()
}

/// Opens the accessibility menu from the Alt+A accelerator.
pub fn handle_accessibility_accelerator(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.panels
        .open(PanelId::Accessibility, accessibility_panel::FOCUSABLE_COUNT);
    Task::none()
}

/// Forwards toast dismissals to the notification manager.
pub fn handle_notification_message(
    ctx: &mut UpdateContext<'_>,
    message: &notifications::NotificationMessage,
) -> Task<Message> {
    ctx.notifications.handle_message(message);
    Task::none()
}

/// Expires the visible toast once its display time has elapsed.
pub fn handle_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.notifications.tick();
    Task::none()
}
