// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Page
//!
//! - [`storefront`] - The scrollable page: hero, products, services, FAQ, contact
//! - [`navbar`] - Navigation bar with section links and panel openers
//! - [`cart_panel`] - Shopping cart overlay panel
//! - [`accessibility_panel`] - Font-size and contrast preference panel
//! - [`faq`] - Single-open FAQ accordion
//! - [`contact_form`] - Validated contact form
//!
//! # Shared Infrastructure
//!
//! - [`panels`] - Overlay panel state: which is open, focus trapping
//! - [`notifications`] - Toast notification system for user feedback
//! - [`widgets`] - Custom Iced widgets (scroll lock)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Standard and high-contrast color schemes

pub mod accessibility_panel;
pub mod cart_panel;
pub mod contact_form;
pub mod design_tokens;
pub mod faq;
pub mod navbar;
pub mod notifications;
pub mod panels;
pub mod storefront;
pub mod styles;
pub mod theming;
pub mod widgets;
