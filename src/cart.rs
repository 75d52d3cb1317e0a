//! Cart engine - the in-memory set of (product, quantity) lines.
//!
//! The cart is deliberately session-scoped and never persisted: losing it on
//! restart is acceptable, losing order history is not. At most one line exists
//! per product id, and every surviving line has quantity >= 1 - decrementing a
//! quantity-1 line removes it.

use crate::catalog::Product;

/// One product in the cart with its chosen quantity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartLine {
    /// Snapshot of the catalog product
    pub product: Product,
    /// Units of this product, always >= 1
    pub quantity: u32,
}

impl CartLine {
    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> i64 {
        self.product.price * i64::from(self.quantity)
    }
}

/// The shopper's current cart.
#[derive(Clone, Debug, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Adds one unit of `product`. If a line for it already exists, its
    /// quantity is incremented instead of inserting a duplicate line.
    pub fn add_item(&mut self, product: &Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine {
                product: product.clone(),
                quantity: 1,
            });
        }
    }

    /// Adjusts the quantity of the line for `product_id` by `delta`.
    ///
    /// A resulting quantity of zero or below removes the line. Unknown ids are
    /// a silent no-op.
    pub fn change_quantity(&mut self, product_id: &str, delta: i64) {
        let Some(idx) = self.lines.iter().position(|l| l.product.id == product_id) else {
            return;
        };

        let new_quantity = i64::from(self.lines[idx].quantity) + delta;
        if new_quantity <= 0 {
            self.lines.remove(idx);
        } else {
            // new_quantity is positive and bounded by u32 arithmetic above
            self.lines[idx].quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
        }
    }

    /// Removes the line for `product_id` if present; no-op otherwise.
    pub fn remove_item(&mut self, product_id: &str) {
        self.lines.retain(|l| l.product.id != product_id);
    }

    /// Empties the cart. Called by the checkout orchestrator once an order has
    /// been recorded.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of unit price times quantity over all lines, in whole naira.
    #[must_use]
    pub fn subtotal(&self) -> i64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Number of distinct lines (for badge display), not total units.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total units across all lines.
    #[must_use]
    pub fn total_units(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// True if the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The current lines, read-only.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::sample_catalog;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    #[test]
    fn test_add_same_item_twice_merges_lines() {
        let catalog = sample_catalog();
        let fish = catalog.product("sf-1").unwrap();

        let mut cart = Cart::new();
        cart.add_item(fish);
        cart.add_item(fish);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.subtotal(), fish.price * 2);
    }

    #[test]
    fn test_decrement_at_quantity_one_removes_line() {
        let catalog = sample_catalog();
        let mut cart = Cart::new();
        cart.add_item(catalog.product("sf-1").unwrap());

        cart.change_quantity("sf-1", -1);
        assert_eq!(cart.line_count(), 0);
        assert_eq!(cart.subtotal(), 0);
    }

    #[test]
    fn test_change_quantity_unknown_id_is_noop() {
        let catalog = sample_catalog();
        let mut cart = Cart::new();
        cart.add_item(catalog.product("sf-1").unwrap());

        cart.change_quantity("missing", -1);
        cart.change_quantity("missing", 5);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn test_remove_item() {
        let catalog = sample_catalog();
        let mut cart = Cart::new();
        cart.add_item(catalog.product("sf-1").unwrap());
        cart.add_item(catalog.product("rm-1").unwrap());

        cart.remove_item("sf-1");
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].product.id, "rm-1");

        // removing again is a no-op
        cart.remove_item("sf-1");
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_clear_resets_totals() {
        let catalog = sample_catalog();
        let mut cart = Cart::new();
        cart.add_item(catalog.product("sf-1").unwrap());
        cart.add_item(catalog.product("dr-2").unwrap());

        cart.clear();
        assert_eq!(cart.subtotal(), 0);
        assert_eq!(cart.line_count(), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_subtotal_matches_recomputation_after_random_ops() {
        let catalog = sample_catalog();
        let ids: Vec<String> = catalog.all().iter().map(|p| p.id.clone()).collect();
        let mut rng = StdRng::seed_from_u64(0x5EED);
        let mut cart = Cart::new();

        for _ in 0..500 {
            let id = &ids[rng.gen_range(0..ids.len())];
            match rng.gen_range(0..4) {
                0 => cart.add_item(catalog.product(id).unwrap()),
                1 => cart.change_quantity(id, 1),
                2 => cart.change_quantity(id, -1),
                _ => cart.remove_item(id),
            }

            // Invariants: unique lines, positive quantities, consistent subtotal
            let expected: i64 = cart
                .lines()
                .iter()
                .map(|l| l.product.price * i64::from(l.quantity))
                .sum();
            assert_eq!(cart.subtotal(), expected);
            assert!(cart.lines().iter().all(|l| l.quantity >= 1));

            let mut seen: Vec<&str> = cart.lines().iter().map(|l| l.product.id.as_str()).collect();
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(seen.len(), cart.line_count());
        }
    }
}
