// SPDX-License-Identifier: MPL-2.0
//! Shopping cart engine.
//!
//! The [`Engine`] owns the cart and applies every mutation to it. It is
//! deliberately free of I/O: the update layer persists a snapshot after each
//! mutation through [`store`], so a failed disk write can never leave the
//! in-memory cart in a half-applied state.
//!
//! # Money
//!
//! Prices are `f64` and only ever added, never divided, so binary float noise
//! stays far below the two displayed decimals. Display formatting goes
//! through [`format_price`], which renders the Brazilian comma-decimal form.

pub mod store;

use crate::catalog::{Product, ProductId};
use serde::{Deserialize, Serialize};

/// Formats a price for display: two decimals, comma separator ("21,00").
pub fn format_price(value: f64) -> String {
    format!("{:.2}", value).replace('.', ",")
}

/// A cart line: one product plus how many units of it were added.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub quantity: u32,
}

impl CartItem {
    fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: 1,
        }
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Aggregate cart numbers shown in the navbar badge and the cart panel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    /// Sum of quantities across all lines.
    pub items: u32,
    /// Sum of line totals.
    pub price: f64,
}

/// The cart contents, serialized as a bare JSON array of lines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn totals(&self) -> Totals {
        Totals {
            items: self.items.iter().map(|item| item.quantity).sum(),
            price: self.items.iter().map(CartItem::line_total).sum(),
        }
    }

    /// Drops lines a loaded snapshot may contain that the engine could never
    /// have produced: zero quantities, broken prices, duplicate ids.
    ///
    /// Returns the number of lines dropped.
    pub(crate) fn sanitize(&mut self) -> usize {
        let before = self.items.len();

        self.items
            .retain(|item| item.quantity >= 1 && item.price.is_finite() && item.price >= 0.0);

        let mut seen: Vec<ProductId> = Vec::with_capacity(self.items.len());
        self.items.retain(|item| {
            if seen.contains(&item.id) {
                false
            } else {
                seen.push(item.id);
                true
            }
        });

        before - self.items.len()
    }
}

/// Result of a checkout attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CheckoutOutcome {
    /// Nothing to buy; the cart is left untouched.
    EmptyCart,
    /// The order went through with these totals; the cart is now empty.
    Completed(Totals),
}

/// Owns the cart and applies all mutations to it.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    cart: Cart,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an engine around a previously persisted cart.
    pub fn from_cart(cart: Cart) -> Self {
        Self { cart }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn totals(&self) -> Totals {
        self.cart.totals()
    }

    /// Adds one unit of `product`, incrementing the existing line if the
    /// product is already in the cart.
    pub fn add(&mut self, product: &Product) {
        if let Some(item) = self.cart.items.iter_mut().find(|item| item.id == product.id) {
            item.quantity += 1;
        } else {
            self.cart.items.push(CartItem::from_product(product));
        }
    }

    /// Removes the whole line for `id`, regardless of quantity.
    ///
    /// Returns the removed line, or `None` if the product was not in the
    /// cart (in which case nothing changes).
    pub fn remove(&mut self, id: ProductId) -> Option<CartItem> {
        let index = self.cart.items.iter().position(|item| item.id == id)?;
        Some(self.cart.items.remove(index))
    }

    /// Attempts checkout. On success the totals are captured first and the
    /// cart is cleared; an empty cart refuses and stays as it is.
    pub fn checkout(&mut self) -> CheckoutOutcome {
        if self.cart.is_empty() {
            return CheckoutOutcome::EmptyCart;
        }
        let totals = self.cart.totals();
        self.cart.items.clear();
        CheckoutOutcome::Completed(totals)
    }
}
