//! Mutable search state with scoped undo.
//!
//! [`PartialSolution`] accumulates the items included along the current
//! search path. Inclusion goes through [`PartialSolution::try_include`],
//! which hands back a [`TrialInclusion`] guard; dropping the guard removes
//! the item again, so the pre-include state is restored on every exit path.
//! A guard that is [committed](TrialInclusion::commit) hands that duty to the
//! caller, which pairs it with a later [`PartialSolution::remove_last`].

use crate::item::Item;
use std::ops::{Deref, DerefMut};

/// Items included so far, their summed totals, and the fixed capacity.
///
/// Invariant: `total().weight <= capacity()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialSolution {
    items: Vec<Item>,
    indices: Vec<usize>,
    total: Item,
    capacity: u64,
}

impl PartialSolution {
    /// An empty solution for the given capacity.
    pub fn new(capacity: u64) -> Self {
        Self {
            items: Vec::new(),
            indices: Vec::new(),
            total: Item::default(),
            capacity,
        }
    }

    /// Pre-allocates room for `n` included items.
    pub fn with_capacity_hint(capacity: u64, n: usize) -> Self {
        Self {
            items: Vec::with_capacity(n),
            indices: Vec::with_capacity(n),
            total: Item::default(),
            capacity,
        }
    }

    /// Included items, in inclusion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Input indices of the included items, parallel to [`items`](Self::items).
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Summed weight and cost of the included items.
    pub fn total(&self) -> Item {
        self.total
    }

    /// The capacity this solution is bounded by.
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Number of included items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is included.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether `item` fits in the remaining capacity.
    pub fn fits(&self, item: &Item) -> bool {
        self.total.weight + item.weight <= self.capacity
    }

    /// Tentatively includes `item` (taken from input position `index`).
    ///
    /// Returns `None`, leaving the solution untouched, if the item does not
    /// fit. Otherwise the item stays included until the returned guard drops.
    pub fn try_include(&mut self, index: usize, item: Item) -> Option<TrialInclusion<'_>> {
        if !self.fits(&item) {
            return None;
        }
        self.total += item;
        self.items.push(item);
        self.indices.push(index);
        Some(TrialInclusion { state: self })
    }

    /// Removes the most recently included item and returns it.
    pub fn remove_last(&mut self) -> Option<Item> {
        let item = self.items.pop()?;
        self.indices.pop();
        self.total -= item;
        Some(item)
    }
}

/// Guard for a tentative inclusion. Dereferences to the extended
/// [`PartialSolution`]; dropping it removes the item again.
#[derive(Debug)]
pub struct TrialInclusion<'a> {
    state: &'a mut PartialSolution,
}

impl TrialInclusion<'_> {
    /// Keeps the item included past the guard's lifetime.
    ///
    /// The caller must undo it later with [`PartialSolution::remove_last`].
    pub fn commit(self) {
        std::mem::forget(self);
    }
}

impl Deref for TrialInclusion<'_> {
    type Target = PartialSolution;

    fn deref(&self) -> &PartialSolution {
        self.state
    }
}

impl DerefMut for TrialInclusion<'_> {
    fn deref_mut(&mut self) -> &mut PartialSolution {
        self.state
    }
}

impl Drop for TrialInclusion<'_> {
    fn drop(&mut self) {
        self.state.remove_last();
    }
}
