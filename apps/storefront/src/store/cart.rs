//! # Cart Operations
//!
//! Thin wrappers over [`storefront_core::Cart`] that lock the slice, apply
//! the change, and notify observers. Price and total rules live in the core
//! type.

use tracing::debug;

use storefront_core::{Cart, CoreError, CoreResult, Product};

use super::Store;
use crate::state::StoreEvent;

impl Store {
    /// Adds one unit of `product`.
    ///
    /// An existing line keeps its original name and price; only its
    /// quantity grows.
    pub fn add_to_cart(&self, product: &Product) -> Cart {
        debug!(product_id = product.id(), "add_to_cart");
        let cart = self.cart.write(|c| {
            c.add_item(product);
            c.clone()
        });
        self.publish(StoreEvent::Cart);
        cart
    }

    /// Removes the line for `product_id`.
    pub fn remove_from_cart(&self, product_id: u64) -> CoreResult<Cart> {
        debug!(product_id, "remove_from_cart");
        let cart = self.cart.write(|c| {
            c.remove_item(product_id)?;
            Ok::<Cart, CoreError>(c.clone())
        })?;
        self.publish(StoreEvent::Cart);
        Ok(cart)
    }

    /// Sets the quantity of an existing line. Zero removes it.
    pub fn set_quantity(&self, product_id: u64, quantity: u32) -> CoreResult<Cart> {
        debug!(product_id, quantity, "set_quantity");
        let cart = self.cart.write(|c| {
            c.set_quantity(product_id, quantity)?;
            Ok::<Cart, CoreError>(c.clone())
        })?;
        self.publish(StoreEvent::Cart);
        Ok(cart)
    }

    pub fn clear_cart(&self) {
        debug!("clear_cart");
        self.cart.write(Cart::clear);
        self.publish(StoreEvent::Cart);
    }

    /// A copy of the cart slice.
    pub fn cart(&self) -> Cart {
        self.cart.snapshot()
    }
}
