// SPDX-License-Identifier: MPL-2.0
//! Cart persistence using a JSON snapshot.
//!
//! The cart survives restarts but is not user-editable configuration, so it
//! lives in the data directory (next to nothing else, currently) rather than
//! with `settings.toml`. The snapshot is a bare JSON array of cart lines,
//! written after every cart mutation.
//!
//! All functions here fail open: a broken snapshot yields an empty cart plus
//! a warning key for the notification system, and a failed save leaves the
//! in-memory cart authoritative.
//!
//! # Path Resolution
//!
//! The snapshot location can be customized for testing or portable deployments:
//! 1. Use `load_from()`/`save_to()` with explicit path override
//! 2. Set `ICED_VITRINE_DATA_DIR` environment variable
//! 3. Falls back to platform-specific data directory

use super::Cart;
use crate::app::paths;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// Snapshot file name within the app data directory.
const CART_FILE: &str = "cart.json";

/// Loads the cart from the default location.
///
/// Returns a tuple of (cart, optional_warning). If loading fails, returns an
/// empty cart with a warning key explaining what went wrong.
pub fn load() -> (Cart, Option<String>) {
    load_from(None)
}

/// Loads the cart from a custom directory.
///
/// Lines the engine could never have produced (zero quantity, broken price,
/// duplicate id) are dropped quietly; only a structurally unreadable file
/// warns.
pub fn load_from(base_dir: Option<PathBuf>) -> (Cart, Option<String>) {
    let Some(path) = cart_file_path_with_override(base_dir) else {
        return (Cart::default(), None);
    };

    if !path.exists() {
        return (Cart::default(), None);
    }

    match fs::File::open(&path) {
        Ok(file) => {
            let reader = BufReader::new(file);
            match serde_json::from_reader::<_, Cart>(reader) {
                Ok(mut cart) => {
                    cart.sanitize();
                    (cart, None)
                }
                Err(_) => (
                    Cart::default(),
                    Some("notification-cart-parse-error".to_string()),
                ),
            }
        }
        Err(_) => (
            Cart::default(),
            Some("notification-cart-read-error".to_string()),
        ),
    }
}

/// Saves the cart to the default location.
///
/// Creates the parent directory if it doesn't exist.
/// Returns an optional warning key if the save failed.
pub fn save(cart: &Cart) -> Option<String> {
    save_to(cart, None)
}

/// Saves the cart to a custom directory.
pub fn save_to(cart: &Cart, base_dir: Option<PathBuf>) -> Option<String> {
    let Some(path) = cart_file_path_with_override(base_dir) else {
        return Some("notification-cart-path-error".to_string());
    };

    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return Some("notification-cart-dir-error".to_string());
        }
    }

    match fs::File::create(&path) {
        Ok(file) => {
            let writer = BufWriter::new(file);
            if serde_json::to_writer(writer, cart).is_err() {
                return Some("notification-cart-write-error".to_string());
            }
            None
        }
        Err(_) => Some("notification-cart-create-error".to_string()),
    }
}

/// Returns the full path to the cart snapshot with optional override.
fn cart_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_data_dir_with_override(base_dir).map(|mut path| {
        path.push(CART_FILE);
        path
    })
}
