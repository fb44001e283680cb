//! Shopping cart entity.

use super::variant::VariantId;

/// Ordered sequence of variant IDs added to the cart.
///
/// Removal is last-in first-out: [`Cart::remove_last`] drops the most recently
/// added entry regardless of which variant a caller had selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    entries: Vec<VariantId>,
}

impl Cart {
    /// Creates an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an entry. Duplicate IDs are kept as separate entries.
    pub fn add_entry(&mut self, id: VariantId) {
        self.entries.push(id);
    }

    /// Removes the last entry, if any.
    pub fn remove_last(&mut self) -> Option<VariantId> {
        self.entries.pop()
    }

    /// Empties the cart.
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[VariantId] {
        &self.entries
    }
}
