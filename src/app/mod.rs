// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the storefront page and
//! its overlay panels.
//!
//! The `App` struct wires together the domains (catalog, cart engine,
//! localization, accessibility preferences) and translates messages into
//! side effects like cart persistence or scroll tasks. This file keeps
//! policy decisions (window sizing, startup warnings, theme selection)
//! close to the main update loop so user-facing behavior is easy to audit.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::cart;
use crate::catalog::Catalog;
use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Notification};
use crate::ui::panels::Panels;
use crate::ui::storefront;
use crate::ui::theming::ColorScheme;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state that bridges the storefront page, the cart
/// engine, localization, and persisted preferences.
pub struct App {
    pub i18n: I18n,
    /// Resolved directory overrides for configuration and cart persistence.
    storage: paths::Storage,
    config: config::Config,
    catalog: Catalog,
    engine: cart::Engine,
    /// Overlay panel bookkeeping: which panel is open and where focus sits.
    panels: Panels,
    storefront: storefront::State,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("cart_items", &self.engine.totals().items)
            .field("open_panel", &self.panels.open_panel())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 800;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            storage: paths::Storage::default(),
            config: config::Config::default(),
            catalog: Catalog::default(),
            engine: cart::Engine::new(),
            panels: Panels::new(),
            storefront: storefront::State::new(),
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state from CLI flags, the stored
    /// configuration, the embedded catalog, and the persisted cart snapshot.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let storage = paths::Storage {
            config_dir: flags.config_dir.map(PathBuf::from),
            data_dir: flags.data_dir.map(PathBuf::from),
        };

        let (config, config_warning) = config::load_with_override(storage.config_dir.clone());
        let i18n = I18n::new(flags.lang, flags.i18n_dir, &config);
        let (catalog, catalog_warning) = Catalog::load_embedded();
        let (cart, cart_warning) = cart::store::load_from(storage.data_dir.clone());

        let mut app = App {
            i18n,
            storage,
            config,
            catalog,
            engine: cart::Engine::from_cart(cart),
            ..Self::default()
        };

        // Cards already inside the initial viewport are shown immediately;
        // everything further down waits for its reveal sweep.
        app.storefront.seed_reveal(&app.catalog);

        // One toast slot: if several load problems occur the last one wins.
        for key in [config_warning, catalog_warning, cart_warning]
            .into_iter()
            .flatten()
        {
            app.notifications.push(Notification::warning(key));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let items = self.engine.totals().items;

        if items > 0 {
            format!("{app_name} ({items})")
        } else {
            app_name
        }
    }

    fn theme(&self) -> Theme {
        if self.config.accessibility.high_contrast {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub =
            subscription::create_event_subscription(self.panels.open_panel().is_some());
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            storage: &self.storage,
            config: &mut self.config,
            catalog: &self.catalog,
            engine: &mut self.engine,
            panels: &mut self.panels,
            storefront: &mut self.storefront,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Storefront(storefront_message) => {
                update::handle_storefront_message(&mut ctx, storefront_message)
            }
            Message::CartPanel(panel_message) => {
                update::handle_cart_panel_message(&mut ctx, panel_message)
            }
            Message::AccessibilityPanel(panel_message) => {
                update::handle_accessibility_panel_message(&mut ctx, panel_message)
            }
            Message::Notification(notification_message) => {
                update::handle_notification_message(&mut ctx, &notification_message)
            }
            Message::EscapePressed | Message::BackdropPressed => {
                update::handle_panel_dismiss(&mut ctx)
            }
            Message::FocusCycle(direction) => update::handle_focus_cycle(&mut ctx, direction),
            Message::ActivateFocused => update::handle_focus_activation(&mut ctx),
            Message::AccessibilityAccelerator => update::handle_accessibility_accelerator(&mut ctx),
            Message::Tick(_instant) => update::handle_tick(&mut ctx),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let high_contrast = self.config.accessibility.high_contrast;

        view::view(view::ViewContext {
            i18n: &self.i18n,
            catalog: &self.catalog,
            cart: self.engine.cart(),
            storefront: &self.storefront,
            panels: &self.panels,
            notifications: &self.notifications,
            scheme: ColorScheme::for_mode(high_contrast),
            font_factor: self.config.accessibility.font_scale.factor(),
            high_contrast,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::format_price;
    use crate::catalog::ProductId;
    use crate::config::FontScale;
    use crate::ui::accessibility_panel;
    use crate::ui::cart_panel;
    use crate::ui::contact_form;
    use crate::ui::navbar;
    use crate::ui::notifications::{NotificationMessage, Severity};
    use crate::ui::panels::{FocusDirection, PanelId};
    use std::fs;
    use tempfile::{tempdir, TempDir};

    fn test_app(temp: &TempDir) -> App {
        let (catalog, warning) = Catalog::load_embedded();
        assert!(warning.is_none(), "embedded catalog should load cleanly");

        App {
            catalog,
            storage: paths::Storage {
                config_dir: Some(temp.path().join("config")),
                data_dir: Some(temp.path().join("data")),
            },
            ..App::default()
        }
    }

    fn first_product_id(app: &App) -> ProductId {
        app.catalog
            .products()
            .first()
            .expect("catalog has products")
            .id
    }

    #[test]
    fn adding_a_product_updates_totals_and_title() {
        let temp = tempdir().expect("failed to create temp dir");
        let mut app = test_app(&temp);
        let id = first_product_id(&app);

        let _ = app.update(Message::Storefront(storefront::Message::AddToCart(id)));
        let _ = app.update(Message::Storefront(storefront::Message::AddToCart(id)));

        assert_eq!(app.engine.totals().items, 2);
        assert!(app.title().ends_with("(2)"));

        let toast = app.notifications.current().expect("toast after adding");
        assert_eq!(toast.severity(), Severity::Success);
        assert_eq!(toast.message_key(), "notification-item-added");
    }

    #[test]
    fn cart_opener_toggles_the_panel() {
        let temp = tempdir().expect("failed to create temp dir");
        let mut app = test_app(&temp);

        let _ = app.update(Message::Navbar(navbar::Message::CartPressed));
        assert_eq!(app.panels.open_panel(), Some(PanelId::Cart));
        assert!(app.panels.scroll_locked());

        let _ = app.update(Message::Navbar(navbar::Message::CartPressed));
        assert_eq!(app.panels.open_panel(), None);
    }

    #[test]
    fn checkout_clears_the_cart_and_closes_the_panel() {
        let temp = tempdir().expect("failed to create temp dir");
        let mut app = test_app(&temp);
        let id = first_product_id(&app);

        let _ = app.update(Message::Storefront(storefront::Message::AddToCart(id)));
        let _ = app.update(Message::Navbar(navbar::Message::CartPressed));
        let _ = app.update(Message::CartPanel(cart_panel::Message::Checkout));

        assert!(app.engine.cart().is_empty());
        assert_eq!(app.panels.open_panel(), None);

        let toast = app.notifications.current().expect("checkout toast");
        assert_eq!(toast.message_key(), "notification-checkout-success");
        assert!(toast
            .message_args()
            .iter()
            .any(|(key, value)| key == "total" && value == &format_price(28.9)));
    }

    #[test]
    fn checkout_with_an_empty_cart_warns_and_keeps_the_panel() {
        let temp = tempdir().expect("failed to create temp dir");
        let mut app = test_app(&temp);

        let _ = app.update(Message::Navbar(navbar::Message::CartPressed));
        let _ = app.update(Message::CartPanel(cart_panel::Message::Checkout));

        assert_eq!(app.panels.open_panel(), Some(PanelId::Cart));

        let toast = app.notifications.current().expect("warning toast");
        assert_eq!(toast.severity(), Severity::Warning);
        assert_eq!(toast.message_key(), "notification-checkout-empty");
    }

    #[test]
    fn escape_closes_the_panel_and_returns_focus_to_the_opener() {
        let temp = tempdir().expect("failed to create temp dir");
        let mut app = test_app(&temp);

        let _ = app.update(Message::Navbar(navbar::Message::CartPressed));
        let _ = app.update(Message::EscapePressed);

        assert_eq!(app.panels.open_panel(), None);
        assert!(app.panels.opener_focused(PanelId::Cart));
    }

    #[test]
    fn tab_wraps_focus_inside_the_accessibility_menu() {
        let temp = tempdir().expect("failed to create temp dir");
        let mut app = test_app(&temp);

        let _ = app.update(Message::AccessibilityAccelerator);
        assert_eq!(app.panels.focused_index(PanelId::Accessibility), Some(0));

        for _ in 0..accessibility_panel::FOCUSABLE_COUNT {
            let _ = app.update(Message::FocusCycle(FocusDirection::Forward));
        }
        assert_eq!(app.panels.focused_index(PanelId::Accessibility), Some(0));

        let _ = app.update(Message::FocusCycle(FocusDirection::Backward));
        assert_eq!(
            app.panels.focused_index(PanelId::Accessibility),
            Some(accessibility_panel::FOCUSABLE_COUNT - 1)
        );
    }

    #[test]
    fn activating_the_focused_control_flips_high_contrast() {
        let temp = tempdir().expect("failed to create temp dir");
        let mut app = test_app(&temp);

        let _ = app.update(Message::AccessibilityAccelerator);
        // Control order: increase font, decrease font, high contrast, close.
        let _ = app.update(Message::FocusCycle(FocusDirection::Forward));
        let _ = app.update(Message::FocusCycle(FocusDirection::Forward));
        let _ = app.update(Message::ActivateFocused);

        assert!(app.config.accessibility.high_contrast);
        assert_eq!(app.theme(), Theme::Dark);

        // A second activation lands on the same control and undoes it.
        let _ = app.update(Message::ActivateFocused);
        assert!(!app.config.accessibility.high_contrast);
        assert_eq!(app.theme(), Theme::Light);
    }

    #[test]
    fn page_scroll_reports_are_dropped_while_the_cart_is_open() {
        let temp = tempdir().expect("failed to create temp dir");
        let mut app = test_app(&temp);

        let _ = app.update(Message::Navbar(navbar::Message::CartPressed));
        let _ = app.update(Message::Storefront(storefront::Message::Scrolled {
            y: 700.0,
            viewport_height: 680.0,
        }));

        assert_eq!(app.storefront.scroll_offset(), 0.0);
        assert_eq!(app.storefront.active_section(), navbar::Section::Home);
    }

    #[test]
    fn font_scale_change_persists_across_instances() {
        let temp = tempdir().expect("failed to create temp dir");
        let mut app = test_app(&temp);

        let _ = app.update(Message::AccessibilityAccelerator);
        let _ = app.update(Message::AccessibilityPanel(
            accessibility_panel::Message::IncreaseFont,
        ));
        assert_eq!(app.config.accessibility.font_scale, FontScale::Large);

        let (reloaded, _task) = App::new(Flags {
            config_dir: Some(temp.path().join("config").to_string_lossy().into_owned()),
            data_dir: Some(temp.path().join("data").to_string_lossy().into_owned()),
            ..Flags::default()
        });
        assert_eq!(reloaded.config.accessibility.font_scale, FontScale::Large);
    }

    #[test]
    fn removing_the_last_line_keeps_focus_in_bounds() {
        let temp = tempdir().expect("failed to create temp dir");
        let mut app = test_app(&temp);
        let id = first_product_id(&app);

        let _ = app.update(Message::Storefront(storefront::Message::AddToCart(id)));
        let _ = app.update(Message::Navbar(navbar::Message::CartPressed));

        // Move focus onto checkout, the last of close/remove/checkout.
        let _ = app.update(Message::FocusCycle(FocusDirection::Forward));
        let _ = app.update(Message::FocusCycle(FocusDirection::Forward));
        assert_eq!(app.panels.focused_index(PanelId::Cart), Some(2));

        let _ = app.update(Message::CartPanel(cart_panel::Message::Remove(id)));

        assert!(app.engine.cart().is_empty());
        // Close and checkout remain; focus clamps onto the last control.
        assert_eq!(app.panels.focused_index(PanelId::Cart), Some(1));

        let toast = app.notifications.current().expect("removal toast");
        assert_eq!(toast.message_key(), "notification-item-removed");
    }

    #[test]
    fn alt_a_switches_panels_even_while_the_cart_is_open() {
        let temp = tempdir().expect("failed to create temp dir");
        let mut app = test_app(&temp);

        let _ = app.update(Message::Navbar(navbar::Message::CartPressed));
        let _ = app.update(Message::AccessibilityAccelerator);

        assert_eq!(app.panels.open_panel(), Some(PanelId::Accessibility));
        assert!(!app.panels.scroll_locked());
    }

    #[test]
    fn startup_warnings_surface_as_a_single_toast() {
        let temp = tempdir().expect("failed to create temp dir");
        let data_dir = temp.path().join("data");
        fs::create_dir_all(&data_dir).expect("failed to create data dir");
        fs::write(data_dir.join("cart.json"), "{ not json").expect("failed to write cart");

        let (app, _task) = App::new(Flags {
            config_dir: Some(temp.path().join("config").to_string_lossy().into_owned()),
            data_dir: Some(data_dir.to_string_lossy().into_owned()),
            ..Flags::default()
        });

        let toast = app.notifications.current().expect("warning toast");
        assert_eq!(toast.severity(), Severity::Warning);
        assert_eq!(toast.message_key(), "notification-cart-parse-error");
    }

    #[test]
    fn contact_form_submission_raises_a_success_toast() {
        let temp = tempdir().expect("failed to create temp dir");
        let mut app = test_app(&temp);

        for (field, value) in [
            (contact_form::Field::Name, "Ana"),
            (contact_form::Field::Email, "ana@example.com"),
            (contact_form::Field::Subject, "Pedido"),
            (contact_form::Field::Message, "Olá!"),
        ] {
            let _ = app.update(Message::Storefront(storefront::Message::Form(
                contact_form::Message::Input(field, value.to_string()),
            )));
        }
        let _ = app.update(Message::Storefront(storefront::Message::Form(
            contact_form::Message::Submit,
        )));

        let toast = app.notifications.current().expect("form toast");
        assert_eq!(toast.severity(), Severity::Success);
        assert_eq!(toast.message_key(), "notification-form-success");
    }

    #[test]
    fn hero_call_to_action_jumps_to_products() {
        let temp = tempdir().expect("failed to create temp dir");
        let mut app = test_app(&temp);

        let _ = app.update(Message::Storefront(storefront::Message::JumpPressed(
            navbar::Section::Products,
        )));

        assert_eq!(app.storefront.active_section(), navbar::Section::Products);
    }

    #[test]
    fn toast_dismissal_goes_through_the_manager() {
        let temp = tempdir().expect("failed to create temp dir");
        let mut app = test_app(&temp);
        let id = first_product_id(&app);

        let _ = app.update(Message::Storefront(storefront::Message::AddToCart(id)));
        let toast_id = app.notifications.current().expect("toast").id();

        let _ = app.update(Message::Notification(NotificationMessage::Dismiss(toast_id)));
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn app_view_renders_every_overlay_state() {
        let temp = tempdir().expect("failed to create temp dir");
        let mut app = test_app(&temp);

        {
            let _element = app.view();
        }

        let _ = app.update(Message::Navbar(navbar::Message::CartPressed));
        {
            let _element = app.view();
        }

        let _ = app.update(Message::AccessibilityAccelerator);
        {
            let _element = app.view();
        }
    }
}
