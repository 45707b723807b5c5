//! # Sample Catalog
//!
//! Canned product lists for the two pages that render products. There is no
//! product service behind either.
//!
//! ```text
//! Products page  (sample_catalog)      Landing page  (featured)
//! ─────────────────────────────        ────────────────────────
//! Smartphone        $599.99            Wireless Headphones  $199.99
//! Laptop          $1,299.99            Smart Watch          $299.99
//! Headphones        $199.99            Laptop Computer      $999.99
//! Watch             $299.99            Smartphone           $699.99
//! Tablet            $799.99            Gaming Console       $499.99
//! Camera            $899.99            Wireless Speaker     $149.99
//! ```
//!
//! The two lists reuse ids 1 to 6 for different products, exactly as the
//! pages they stand in for do.

use crate::money::Money;
use crate::types::Product;

/// Number of products the landing page features.
pub const FEATURED_COUNT: usize = 6;

/// The products page catalog, in display order.
pub fn sample_catalog() -> Vec<Product> {
    vec![
        Product::new(1, "Smartphone", Money::from_major_minor(599, 99)),
        Product::new(2, "Laptop", Money::from_major_minor(1299, 99)),
        Product::new(3, "Headphones", Money::from_major_minor(199, 99)),
        Product::new(4, "Watch", Money::from_major_minor(299, 99)),
        Product::new(5, "Tablet", Money::from_major_minor(799, 99)),
        Product::new(6, "Camera", Money::from_major_minor(899, 99)),
    ]
}

/// The landing page's featured products, with their blurbs.
pub fn featured() -> Vec<Product> {
    vec![
        Product::new(1, "Wireless Headphones", Money::from_major_minor(199, 99))
            .with_description("Premium sound quality with active noise cancellation technology"),
        Product::new(2, "Smart Watch", Money::from_major_minor(299, 99))
            .with_description("Track your fitness goals and stay connected on the go"),
        Product::new(3, "Laptop Computer", Money::from_major_minor(999, 99))
            .with_description("High-performance laptop for work, gaming, and creativity"),
        Product::new(4, "Smartphone", Money::from_major_minor(699, 99))
            .with_description("Latest flagship device with cutting-edge camera technology"),
        Product::new(5, "Gaming Console", Money::from_major_minor(499, 99))
            .with_description("Next-generation gaming with stunning 4K graphics"),
        Product::new(6, "Wireless Speaker", Money::from_major_minor(149, 99))
            .with_description("360-degree premium audio for your home entertainment"),
    ]
}

/// Finds a products page entry by id.
pub fn find(id: u64) -> Option<Product> {
    sample_catalog().into_iter().find(|p| p.id() == id)
}
