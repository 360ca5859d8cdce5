use serde::{Deserialize, Serialize};
use sfs_common::UsdAmount;

use crate::cart_types::CartLine;

/// An ordered sequence of [`CartLine`]s, owned by exactly one client context.
///
/// Totals and item counts are always recomputed from the lines and never cached; the line array is the only state.
/// `Cart` serializes transparently as that array, which is exactly what the durable store persists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Merges the given line into the cart. If a line for the same (product id, variant id) pair already exists its
    /// quantity is incremented; otherwise the line is appended as-is, keeping its captured unit price.
    pub fn add_line(&mut self, line: CartLine) {
        match self.line_mut(&line.product_id, &line.variant_id) {
            Some(existing) => existing.quantity += line.quantity,
            None => self.lines.push(line),
        }
    }

    /// Removes the matching line. Returns `false` (and changes nothing) when no line matches.
    pub fn remove_line(&mut self, product_id: &str, variant_id: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| !(l.product_id == product_id && l.variant_id == variant_id));
        self.lines.len() != before
    }

    /// Sets the matching line's quantity to an absolute value. A new quantity of zero (the caller normalizes
    /// negatives to zero) removes the line. Returns `false` when no line matches.
    pub fn set_quantity(&mut self, product_id: &str, variant_id: &str, new_quantity: u32) -> bool {
        if new_quantity == 0 {
            return self.remove_line(product_id, variant_id);
        }
        match self.line_mut(product_id, variant_id) {
            Some(line) => {
                line.quantity = new_quantity;
                true
            },
            None => false,
        }
    }

    /// Σ(unit price × quantity) over all lines.
    pub fn total(&self) -> UsdAmount {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Σ(quantity) over all lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, product_id: &str, variant_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id && l.variant_id == variant_id)
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    fn line_mut(&mut self, product_id: &str, variant_id: &str) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| l.product_id == product_id && l.variant_id == variant_id)
    }
}
