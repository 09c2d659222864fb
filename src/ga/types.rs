//! Chromosome representation.

use crate::item::{Item, KnapsackInstance};

/// A candidate subset: one gene per item plus cached totals.
///
/// Gene `i` set means item `i` (input order) is packed. `total_cost` and
/// `total_weight` are kept in step with the genes by every operator; they are
/// not re-verified between updates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome {
    /// Inclusion flag per item.
    pub genes: Vec<bool>,
    /// Summed cost of the included items.
    pub total_cost: u64,
    /// Summed weight of the included items.
    pub total_weight: u64,
}

impl Chromosome {
    /// A chromosome with `n` genes, none set.
    pub fn empty(n: usize) -> Self {
        Self {
            genes: vec![false; n],
            total_cost: 0,
            total_weight: 0,
        }
    }

    /// Builds a chromosome from genes, computing its totals.
    pub fn from_genes(genes: Vec<bool>, instance: &KnapsackInstance) -> Self {
        let total = instance.aggregate(&genes);
        Self {
            genes,
            total_cost: total.cost,
            total_weight: total.weight,
        }
    }

    /// Recomputes both totals from scratch.
    pub fn recompute(&mut self, items: &[Item]) {
        self.total_cost = 0;
        self.total_weight = 0;
        for (gene, item) in self.genes.iter().zip(items) {
            if *gene {
                self.total_cost += item.cost;
                self.total_weight += item.weight;
            }
        }
    }

    /// Flips gene `index`, updating the totals incrementally.
    pub fn flip(&mut self, index: usize, item: &Item) {
        self.genes[index] = !self.genes[index];
        if self.genes[index] {
            self.total_cost += item.cost;
            self.total_weight += item.weight;
        } else {
            self.total_cost -= item.cost;
            self.total_weight -= item.weight;
        }
    }

    /// Whether the packed weight is within `capacity`.
    pub fn is_feasible(&self, capacity: u64) -> bool {
        self.total_weight <= capacity
    }

    /// Indices of the packed items.
    pub fn included(&self) -> impl Iterator<Item = usize> + '_ {
        self.genes
            .iter()
            .enumerate()
            .filter_map(|(i, &g)| g.then_some(i))
    }

    /// Number of genes (equals the number of items).
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Whether the chromosome has no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<Item> {
        vec![Item::new(2, 3), Item::new(3, 4), Item::new(4, 5)]
    }

    #[test]
    fn test_from_genes() {
        let instance = KnapsackInstance::new(items(), 10).unwrap();
        let chrom = Chromosome::from_genes(vec![true, false, true], &instance);
        assert_eq!(chrom.total_cost, 8);
        assert_eq!(chrom.total_weight, 6);
        assert_eq!(chrom.included().collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn test_flip_is_incremental() {
        let items = items();
        let mut chrom = Chromosome::empty(3);
        chrom.flip(1, &items[1]);
        assert_eq!((chrom.total_weight, chrom.total_cost), (3, 4));
        chrom.flip(2, &items[2]);
        assert_eq!((chrom.total_weight, chrom.total_cost), (7, 9));
        chrom.flip(1, &items[1]);
        assert_eq!((chrom.total_weight, chrom.total_cost), (4, 5));
        assert_eq!(chrom.genes, vec![false, false, true]);
    }

    #[test]
    fn test_recompute_matches_flips() {
        let items = items();
        let mut chrom = Chromosome::empty(3);
        chrom.flip(0, &items[0]);
        chrom.flip(2, &items[2]);
        let mut fresh = chrom.clone();
        fresh.total_cost = 999;
        fresh.recompute(&items);
        assert_eq!(fresh, chrom);
    }

    #[test]
    fn test_feasibility() {
        let chrom = Chromosome {
            genes: vec![true],
            total_cost: 1,
            total_weight: 5,
        };
        assert!(chrom.is_feasible(5));
        assert!(!chrom.is_feasible(4));
    }

    #[test]
    fn test_empty() {
        let chrom = Chromosome::empty(0);
        assert!(chrom.is_empty());
        assert_eq!(chrom.included().count(), 0);
    }
}
