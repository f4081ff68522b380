// SPDX-License-Identifier: MPL-2.0
//! `iced_vitrine` is an accessible storefront for local products built with
//! the Iced GUI framework.
//!
//! It keeps a small cart engine behind the scrollable shop page and
//! demonstrates internationalization with Fluent, persisted accessibility
//! preferences, and keyboard-friendly overlay panels.

#![doc(html_root_url = "https://docs.rs/iced_vitrine/0.2.0")]

pub mod app;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
