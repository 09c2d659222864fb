//! Fractional relaxation bound.
//!
//! Items are taken whole in density order while they fit; the first item
//! that overflows contributes only the fraction that fits, with its cost
//! rounded up. Because the relaxation drops integrality, the result is never
//! below the best integral completion (Dantzig, 1957).

use crate::item::Item;

/// Upper bound on the cost reachable from `current` using `sorted[from..]`.
///
/// `sorted` must be ordered by decreasing density and `current.weight` must
/// not exceed `capacity`. A `from` past the end bounds with `current` alone.
///
/// # Examples
///
/// ```
/// use u_knapsack::Item;
/// use u_knapsack::bnb::fractional_upper_bound;
///
/// let sorted = [Item::new(2, 3), Item::new(3, 4), Item::new(4, 5)];
/// // 3 + 4 whole, then 0 of the third item
/// assert_eq!(fractional_upper_bound(&sorted, 0, Item::default(), 5), 7);
/// // 3 whole, then 2/3 of (3, 4) -> ceil(8/3) = 3
/// assert_eq!(fractional_upper_bound(&sorted, 0, Item::default(), 4), 6);
/// ```
pub fn fractional_upper_bound(sorted: &[Item], from: usize, current: Item, capacity: u64) -> u64 {
    let mut total = current;
    for item in sorted.iter().skip(from) {
        if total.weight + item.weight > capacity {
            let remaining = capacity.saturating_sub(total.weight);
            total += item.partial(remaining);
            break;
        }
        total += *item;
    }
    total.cost
}
