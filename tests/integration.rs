// SPDX-License-Identifier: MPL-2.0
use iced_vitrine::cart::{format_price, store, Engine};
use iced_vitrine::catalog::Catalog;
use iced_vitrine::config::{self, Config, GeneralConfig};
use iced_vitrine::i18n::fluent::I18n;
use std::fs;
use tempfile::tempdir;

#[test]
fn language_change_via_config_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    // 1. Initial config: pt-BR
    let initial_config = Config {
        general: GeneralConfig {
            language: Some("pt-BR".to_string()),
        },
        ..Config::default()
    };
    config::save_to_path(&initial_config, &config_path).expect("Failed to write initial config");

    let loaded = config::load_from_path(&config_path).expect("Failed to load initial config");
    let i18n_pt = I18n::new(None, None, &loaded);
    assert_eq!(i18n_pt.current_locale().to_string(), "pt-BR");
    assert_eq!(i18n_pt.tr("cart-empty-state"), "Seu carrinho está vazio");

    // 2. Change config to en-US
    let english_config = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
        },
        ..Config::default()
    };
    config::save_to_path(&english_config, &config_path).expect("Failed to write english config");

    let loaded = config::load_from_path(&config_path).expect("Failed to load english config");
    let i18n_en = I18n::new(None, None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("cart-empty-state"), "Your cart is empty");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn cart_survives_a_restart() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let data_dir = dir.path().join("data");

    let (catalog, warning) = Catalog::load_embedded();
    assert!(warning.is_none(), "embedded catalog should load cleanly");
    let products = catalog.products();

    let mut engine = Engine::new();
    engine.add(&products[0]);
    engine.add(&products[0]);
    engine.add(&products[1]);
    assert_eq!(store::save_to(engine.cart(), Some(data_dir.clone())), None);

    // A fresh engine picks the snapshot back up.
    let (restored, warning) = store::load_from(Some(data_dir));
    assert!(warning.is_none(), "snapshot should load without warnings");
    let engine = Engine::from_cart(restored);

    let totals = engine.totals();
    assert_eq!(totals.items, 3);
    assert_eq!(
        format_price(totals.price),
        format_price(products[0].price * 2.0 + products[1].price)
    );
}

#[test]
fn corrupted_cart_snapshot_is_discarded_with_a_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let data_dir = dir.path().join("data");
    fs::create_dir_all(&data_dir).expect("Failed to create data dir");
    fs::write(data_dir.join("cart.json"), "{ definitely not json")
        .expect("Failed to write cart file");

    let (cart, warning) = store::load_from(Some(data_dir));

    assert!(cart.is_empty());
    assert_eq!(warning.as_deref(), Some("notification-cart-parse-error"));
}

#[test]
fn checkout_summary_reads_naturally_in_portuguese() {
    let mut i18n = I18n::default();
    i18n.set_locale("pt-BR".parse().expect("valid locale"));

    let total = format_price(99.9);
    let text = i18n.tr_with_args(
        "notification-checkout-success",
        &[("count", "3"), ("total", total.as_str())],
    );

    assert_eq!(
        text,
        "Compra finalizada com sucesso! 3 itens - Total: R$ 99,90. Entraremos em contato em breve!"
    );
}

#[test]
fn embedded_catalog_is_complete() {
    let (catalog, warning) = Catalog::load_embedded();

    assert!(warning.is_none());
    assert_eq!(catalog.len(), 6);
    assert!(catalog.products().iter().all(|p| p.price > 0.0));
    assert!(catalog.products().iter().all(|p| !p.name.is_empty()));
}

#[test]
fn extra_locale_directory_is_picked_up() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("es-ES.ftl"),
        "window-title = Sabores de la Tierra\n",
    )
    .expect("Failed to write override locale");

    let i18n = I18n::new(
        Some("es-ES".to_string()),
        Some(dir.path().to_string_lossy().into_owned()),
        &Config::default(),
    );

    assert_eq!(i18n.current_locale().to_string(), "es-ES");
    assert_eq!(i18n.tr("window-title"), "Sabores de la Tierra");
}
