//! # Cart
//!
//! The shopping cart slice: an ordered list of lines plus a total that is
//! always recomputed from those lines.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  UI Action              Operation               Cart Change            │
//! │  ─────────              ─────────               ───────────            │
//! │                                                                         │
//! │  "Add to Cart" ───────► add_item() ──────────► qty += 1 or push line   │
//! │                                                                         │
//! │  Change quantity ─────► set_quantity() ──────► items[i].qty = n        │
//! │                                                                         │
//! │  Remove ──────────────► remove_item() ───────► items.remove(i)         │
//! │                                                                         │
//! │  Clear ───────────────► clear() ─────────────► items.clear()           │
//! │                                                                         │
//! │  Every mutation ends with recompute_total().                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Product;
use crate::MAX_ITEM_QUANTITY;

/// A line in the cart.
///
/// Name and price are frozen from the first time the product was added;
/// adding the same id again with a different price only bumps the quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartItem {
    pub id: u64,
    pub name: String,
    pub price: Money,
    pub quantity: u32,
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Creates a line with quantity 1.
    pub fn from_product(product: &Product) -> Self {
        CartItem {
            id: product.id(),
            name: product.name().to_string(),
            price: product.price(),
            quantity: 1,
            added_at: Utc::now(),
        }
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price * self.quantity
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by `id`
/// - Every quantity is ≥ 1 (setting 0 removes the line)
/// - `total == Σ price × quantity`
///
/// Fields are private so the invariants hold for every value of this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Cart {
    items: Vec<CartItem>,
    total: Money,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            total: Money::zero(),
        }
    }

    /// Adds one unit of `product`.
    ///
    /// Linear scan by id; carts are small enough that an index would not pay
    /// for itself. Never fails: the quantity saturates at `u32::MAX`.
    pub fn add_item(&mut self, product: &Product) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == product.id()) {
            item.quantity = item.quantity.saturating_add(1);
        } else {
            self.items.push(CartItem::from_product(product));
        }
        self.recompute_total();
    }

    /// Sets the quantity of an existing line. A quantity of 0 removes it.
    pub fn set_quantity(&mut self, id: u64, quantity: u32) -> CoreResult<()> {
        if quantity == 0 {
            return self.remove_item(id);
        }

        if quantity > MAX_ITEM_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: quantity,
                max: MAX_ITEM_QUANTITY,
            });
        }

        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(CoreError::ItemNotInCart(id))?;
        item.quantity = quantity;
        self.recompute_total();
        Ok(())
    }

    /// Removes a line by product id.
    pub fn remove_item(&mut self, id: u64) -> CoreResult<()> {
        let initial_len = self.items.len();
        self.items.retain(|i| i.id != id);

        if self.items.len() == initial_len {
            return Err(CoreError::ItemNotInCart(id));
        }
        self.recompute_total();
        Ok(())
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.recompute_total();
    }

    /// Lines in insertion order.
    #[inline]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[inline]
    pub fn total(&self) -> Money {
        self.total
    }

    /// Number of distinct lines (the navigation badge).
    #[inline]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of all quantities.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn recompute_total(&mut self) {
        self.total = self.items.iter().map(CartItem::line_total).sum();
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MAX_PRICE_CENTS;

    fn product(id: u64, name: &str, cents: i64) -> Product {
        Product::new(id, name, Money::from_cents(cents))
    }

    fn expected_total(cart: &Cart) -> i64 {
        cart.items()
            .iter()
            .map(|i| i.price.cents() * i64::from(i.quantity))
            .sum()
    }

    #[test]
    fn test_same_product_twice_merges() {
        let mut cart = Cart::new();
        let a = product(1, "A", 1000);

        cart.add_item(&a);
        cart.add_item(&a);

        assert_eq!(cart.item_count(), 1);
        let item = &cart.items()[0];
        assert_eq!(item.id, 1);
        assert_eq!(item.name, "A");
        assert_eq!(item.price, Money::from_cents(1000));
        assert_eq!(item.quantity, 2);
        assert_eq!(cart.total(), Money::from_cents(2000));
    }

    #[test]
    fn test_different_products_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add_item(&product(2, "Laptop", 129_999));
        cart.add_item(&product(1, "Smartphone", 59_999));

        let ids: Vec<u64> = cart.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(cart.total().cents(), 189_998);
    }

    #[test]
    fn test_readding_with_new_price_keeps_original() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, "A", 1000));
        cart.add_item(&product(1, "A renamed", 5000));

        let item = &cart.items()[0];
        assert_eq!(item.name, "A");
        assert_eq!(item.price.cents(), 1000);
        assert_eq!(item.quantity, 2);
        assert_eq!(cart.total().cents(), 2000);
    }

    #[test]
    fn test_total_matches_sum_after_every_add() {
        let catalog = [
            product(1, "Smartphone", 59_999),
            product(2, "Laptop", 129_999),
            product(3, "Headphones", 19_999),
        ];
        let sequence = [0, 1, 0, 2, 2, 2, 1, 0];

        let mut cart = Cart::new();
        for idx in sequence {
            cart.add_item(&catalog[idx]);
            assert_eq!(cart.total().cents(), expected_total(&cart));
        }
        assert_eq!(cart.total_quantity(), 8);
    }

    #[test]
    fn test_out_of_range_prices_never_break_the_total() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, "Refund", -500));
        assert_eq!(cart.total(), Money::zero());

        let big = product(2, "Big", i64::MAX / 2 + 1);
        cart.add_item(&big);
        cart.add_item(&big);
        assert_eq!(cart.total().cents(), 2 * MAX_PRICE_CENTS);
        assert!(!cart.total().is_negative());
    }

    #[test]
    fn test_total_saturates_instead_of_wrapping() {
        let mut cart = Cart::new();
        for id in 0..3 {
            cart.add_item(&product(id, "Max", MAX_PRICE_CENTS));
            cart.set_quantity(id, MAX_ITEM_QUANTITY).unwrap();
        }
        assert_eq!(cart.total().cents(), 3 * MAX_PRICE_CENTS * i64::from(MAX_ITEM_QUANTITY));

        let mut line = cart.items()[0].clone();
        line.quantity = u32::MAX;
        assert!(line.line_total().cents() > 0);
    }

    #[test]
    fn test_set_quantity() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, "A", 250));

        cart.set_quantity(1, 4).unwrap();
        assert_eq!(cart.items()[0].quantity, 4);
        assert_eq!(cart.total().cents(), 1000);

        cart.set_quantity(1, 0).unwrap();
        assert!(cart.is_empty());
        assert!(cart.total().is_zero());
    }

    #[test]
    fn test_set_quantity_rejects_unknown_and_too_large() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, "A", 250));

        assert_eq!(cart.set_quantity(9, 2), Err(CoreError::ItemNotInCart(9)));
        assert_eq!(
            cart.set_quantity(1, MAX_ITEM_QUANTITY + 1),
            Err(CoreError::QuantityTooLarge {
                requested: MAX_ITEM_QUANTITY + 1,
                max: MAX_ITEM_QUANTITY
            })
        );
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, "A", 100));
        cart.add_item(&product(2, "B", 200));

        cart.remove_item(1).unwrap();
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total().cents(), 200);
        assert!(cart.remove_item(1).is_err());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
    }

    #[test]
    fn test_cart_serializes_items_and_total() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, "A", 1000));

        let json = serde_json::to_value(&cart).unwrap();
        assert_eq!(json["total"], 1000);
        assert_eq!(json["items"][0]["quantity"], 1);
        assert!(json["items"][0]["addedAt"].is_string());
    }
}
