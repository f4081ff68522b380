// SPDX-License-Identifier: MPL-2.0
//! Product catalog loaded from an embedded JSON descriptor.
//!
//! The storefront renders whatever this module hands it, so malformed
//! entries are skipped at load time rather than surfacing later as broken
//! cards or un-addable products. A skipped entry is reported once through
//! the startup warning channel.

use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(RustEmbed)]
#[folder = "assets/catalog/"]
struct Asset;

const CATALOG_FILE: &str = "products.json";

/// Stable product identifier, unique within the catalog.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A purchasable item as described by the catalog file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub image: String,
}

impl Product {
    /// A catalog entry is usable when it has a display name and a price the
    /// cart math can work with.
    fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.price.is_finite() && self.price >= 0.0
    }
}

/// The full set of products offered by the shop.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Loads the embedded catalog.
    ///
    /// Returns the catalog plus an optional warning key. A missing or
    /// structurally broken file yields an empty catalog; individually
    /// malformed entries are dropped while the rest still load.
    pub fn load_embedded() -> (Self, Option<String>) {
        let Some(content) = Asset::get(CATALOG_FILE) else {
            return (
                Self::default(),
                Some("notification-catalog-load-error".to_string()),
            );
        };

        let source = String::from_utf8_lossy(content.data.as_ref());
        match Self::parse(&source) {
            Ok((products, skipped)) => {
                let warning = (skipped > 0)
                    .then(|| "notification-catalog-entry-error".to_string());
                (Self { products }, warning)
            }
            Err(_) => (
                Self::default(),
                Some("notification-catalog-load-error".to_string()),
            ),
        }
    }

    /// Parses a catalog document, returning the usable products and the
    /// number of entries that were skipped.
    ///
    /// The document must be a JSON array; anything else is a structural
    /// error. Entries inside the array are validated one by one so a single
    /// bad record cannot empty the shop.
    pub fn parse(source: &str) -> Result<(Vec<Product>, usize)> {
        let entries: Vec<serde_json::Value> =
            serde_json::from_str(source).map_err(|e| Error::Catalog(e.to_string()))?;

        let mut products: Vec<Product> = Vec::with_capacity(entries.len());
        let mut skipped = 0;

        for entry in entries {
            match serde_json::from_value::<Product>(entry) {
                Ok(product) if product.is_valid() => {
                    if products.iter().any(|p| p.id == product.id) {
                        skipped += 1;
                    } else {
                        products.push(product);
                    }
                }
                _ => skipped += 1,
            }
        }

        Ok((products, skipped))
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
