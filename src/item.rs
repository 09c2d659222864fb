//! Item data model shared by both solvers.
//!
//! An [`Item`] doubles as an aggregate: the running totals of a partial
//! solution are themselves an `Item` (summed weight, summed cost).

use crate::error::KnapsackError;
use std::cmp::Ordering;
use std::ops::{AddAssign, SubAssign};

/// A knapsack item, or the summed weight and cost of several items.
///
/// # Examples
///
/// ```
/// use u_knapsack::Item;
///
/// let mut total = Item::default();
/// total += Item::new(2, 3);
/// total += Item::new(3, 4);
/// assert_eq!(total, Item::new(5, 7));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Weight consumed from the capacity.
    pub weight: u64,
    /// Value gained by packing the item.
    pub cost: u64,
}

impl Item {
    /// Creates an item.
    pub const fn new(weight: u64, cost: u64) -> Self {
        Self { weight, cost }
    }

    /// Cost per unit of weight.
    ///
    /// Returns `f64::INFINITY` for zero weight; validated instances never
    /// contain such items.
    pub fn unit_cost(&self) -> f64 {
        if self.weight == 0 {
            return f64::INFINITY;
        }
        self.cost as f64 / self.weight as f64
    }

    /// The fraction of this item that weighs `partial_weight`.
    ///
    /// The cost is scaled proportionally and rounded **up**, so a bound built
    /// from partial items never underestimates.
    ///
    /// # Panics
    /// Panics in debug builds if the item has zero weight.
    pub fn partial(&self, partial_weight: u64) -> Item {
        debug_assert!(self.weight > 0, "partial of a zero-weight item");
        let scaled = self.cost as u128 * partial_weight as u128;
        let cost = scaled.div_ceil(self.weight as u128);
        Item {
            weight: partial_weight,
            cost: u64::try_from(cost).unwrap_or(u64::MAX),
        }
    }

    /// Compares densities exactly (`self.cost / self.weight` against
    /// `other.cost / other.weight`) using 128-bit cross multiplication.
    pub fn cmp_density(&self, other: &Item) -> Ordering {
        let lhs = self.cost as u128 * other.weight as u128;
        let rhs = other.cost as u128 * self.weight as u128;
        lhs.cmp(&rhs)
    }
}

impl AddAssign for Item {
    fn add_assign(&mut self, rhs: Item) {
        self.weight += rhs.weight;
        self.cost += rhs.cost;
    }
}

impl SubAssign for Item {
    fn sub_assign(&mut self, rhs: Item) {
        self.weight -= rhs.weight;
        self.cost -= rhs.cost;
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{ weight = {}, cost = {} }}", self.weight, self.cost)
    }
}

impl From<(u64, u64)> for Item {
    fn from((weight, cost): (u64, u64)) -> Self {
        Self { weight, cost }
    }
}

/// A validated problem instance: items plus a capacity.
///
/// Construction guarantees that every item has positive weight and that the
/// summed weight and summed cost of all items fit in `u64`, so no solver
/// aggregate can overflow.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawInstance"))]
pub struct KnapsackInstance {
    items: Vec<Item>,
    capacity: u64,
}

impl KnapsackInstance {
    /// Validates `items` and builds an instance.
    ///
    /// Empty item lists and a zero capacity are valid degenerate inputs.
    ///
    /// # Errors
    ///
    /// - [`KnapsackError::InvalidItem`] if any item weighs zero
    /// - [`KnapsackError::Overflow`] if summed weights or costs exceed `u64`
    ///
    /// # Examples
    ///
    /// ```
    /// use u_knapsack::{Item, KnapsackInstance};
    ///
    /// let instance = KnapsackInstance::new(vec![Item::new(2, 3)], 5).unwrap();
    /// assert_eq!(instance.len(), 1);
    ///
    /// assert!(KnapsackInstance::new(vec![Item::new(0, 3)], 5).is_err());
    /// ```
    pub fn new(items: Vec<Item>, capacity: u64) -> Result<Self, KnapsackError> {
        let mut total_weight = 0u64;
        let mut total_cost = 0u64;
        for (index, item) in items.iter().enumerate() {
            if item.weight == 0 {
                return Err(KnapsackError::invalid_item(index, item.weight));
            }
            total_weight = total_weight
                .checked_add(item.weight)
                .ok_or(KnapsackError::Overflow { field: "weight" })?;
            total_cost = total_cost
                .checked_add(item.cost)
                .ok_or(KnapsackError::Overflow { field: "cost" })?;
        }
        Ok(Self { items, capacity })
    }

    /// The items, in input order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The knapsack capacity.
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the instance has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Input indices ordered by decreasing density.
    ///
    /// The sort is stable: items of equal density keep their input order.
    pub fn density_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.items.len()).collect();
        order.sort_by(|&a, &b| self.items[b].cmp_density(&self.items[a]));
        order
    }

    /// Summed weight and cost of the items selected by `genes`.
    ///
    /// Gene `i` selects item `i`; genes beyond the item list are ignored.
    pub fn aggregate(&self, genes: &[bool]) -> Item {
        let mut total = Item::default();
        for (item, _) in self.items.iter().zip(genes).filter(|(_, g)| **g) {
            total += *item;
        }
        total
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawInstance {
    items: Vec<Item>,
    capacity: u64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawInstance> for KnapsackInstance {
    type Error = KnapsackError;

    fn try_from(raw: RawInstance) -> Result<Self, Self::Error> {
        Self::new(raw.items, raw.capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_cost() {
        assert!((Item::new(4, 10).unit_cost() - 2.5).abs() < 1e-12);
        assert_eq!(Item::new(0, 1).unit_cost(), f64::INFINITY);
    }

    #[test]
    fn test_partial_rounds_up() {
        // 5 * 2 / 3 = 3.33.. -> 4
        assert_eq!(Item::new(3, 5).partial(2), Item::new(2, 4));
        // exact division stays exact
        assert_eq!(Item::new(4, 8).partial(2), Item::new(2, 4));
        assert_eq!(Item::new(4, 8).partial(0), Item::new(0, 0));
    }

    #[test]
    fn test_partial_large_values_do_not_overflow() {
        let item = Item::new(u64::MAX / 2, u64::MAX / 2);
        let part = item.partial(u64::MAX / 4);
        assert_eq!(part.weight, u64::MAX / 4);
        assert!(part.cost >= u64::MAX / 4);
    }

    #[test]
    fn test_cmp_density() {
        let a = Item::new(2, 3); // 1.5
        let b = Item::new(4, 5); // 1.25
        let c = Item::new(4, 6); // 1.5
        assert_eq!(a.cmp_density(&b), Ordering::Greater);
        assert_eq!(b.cmp_density(&a), Ordering::Less);
        assert_eq!(a.cmp_density(&c), Ordering::Equal);
    }

    #[test]
    fn test_add_sub_assign() {
        let mut total = Item::new(1, 1);
        total += Item::new(2, 5);
        assert_eq!(total, Item::new(3, 6));
        total -= Item::new(2, 5);
        assert_eq!(total, Item::new(1, 1));
    }

    #[test]
    fn test_display() {
        assert_eq!(Item::new(2, 3).to_string(), "{ weight = 2, cost = 3 }");
    }

    #[test]
    fn test_instance_rejects_zero_weight() {
        let err = KnapsackInstance::new(vec![Item::new(1, 1), Item::new(0, 5)], 10).unwrap_err();
        assert_eq!(err, KnapsackError::InvalidItem { index: 1, weight: 0 });
    }

    #[test]
    fn test_instance_rejects_overflow() {
        let items = vec![Item::new(u64::MAX, 1), Item::new(1, 1)];
        let err = KnapsackInstance::new(items, 10).unwrap_err();
        assert_eq!(err, KnapsackError::Overflow { field: "weight" });

        let items = vec![Item::new(1, u64::MAX), Item::new(1, 1)];
        let err = KnapsackInstance::new(items, 10).unwrap_err();
        assert_eq!(err, KnapsackError::Overflow { field: "cost" });
    }

    #[test]
    fn test_instance_degenerate_inputs_are_valid() {
        let empty = KnapsackInstance::new(vec![], 10).unwrap();
        assert!(empty.is_empty());
        let zero_cap = KnapsackInstance::new(vec![Item::new(1, 1)], 0).unwrap();
        assert_eq!(zero_cap.capacity(), 0);
    }

    #[test]
    fn test_density_order_is_stable() {
        let items = vec![
            Item::new(4, 5), // 1.25
            Item::new(2, 3), // 1.5
            Item::new(1, 2), // 2.0
            Item::new(4, 6), // 1.5
        ];
        let instance = KnapsackInstance::new(items, 10).unwrap();
        assert_eq!(instance.density_order(), vec![2, 1, 3, 0]);
    }

    #[test]
    fn test_aggregate() {
        let items = vec![Item::new(2, 3), Item::new(3, 4), Item::new(4, 5)];
        let instance = KnapsackInstance::new(items, 10).unwrap();
        assert_eq!(instance.aggregate(&[true, false, true]), Item::new(6, 8));
        assert_eq!(instance.aggregate(&[false, false, false]), Item::default());
    }
}
