//! Bit-string genetic operators for the knapsack chromosome.
//!
//! # Operators
//!
//! - [`random_chromosome`]: Each gene set independently with probability 1/2
//! - [`single_point_crossover`]: Prefix from one parent, suffix from the other
//! - [`bit_flip_mutation`]: Flip each gene independently with a fixed rate
//! - [`repair`]: Drop random packed items until the weight fits
//!
//! All operators take the random source explicitly so that a solver owns
//! exactly one generator and runs reproducibly under a fixed seed.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Michalewicz (1996), *Genetic Algorithms + Data Structures = Evolution
//!   Programs*, ch. 11 (repair for the 0/1 knapsack)

use super::types::Chromosome;
use crate::item::Item;
use rand::Rng;

/// Creates a chromosome with every gene drawn 50/50. Totals are computed;
/// the result may be infeasible until [`repair`]ed.
pub fn random_chromosome<R: Rng>(items: &[Item], rng: &mut R) -> Chromosome {
    let mut chrom = Chromosome::empty(items.len());
    for (i, item) in items.iter().enumerate() {
        if rng.random_bool(0.5) {
            chrom.flip(i, item);
        }
    }
    chrom
}

/// Single-point crossover.
///
/// Draws a split point uniformly from `[0, n)`; the child takes genes
/// `[0, point)` from `parent1` and `[point, n)` from `parent2`. Totals are
/// recomputed from scratch.
///
/// # Panics
/// Panics if the parents' lengths differ from `items.len()`.
pub fn single_point_crossover<R: Rng>(
    parent1: &Chromosome,
    parent2: &Chromosome,
    items: &[Item],
    rng: &mut R,
) -> Chromosome {
    let n = items.len();
    assert_eq!(parent1.len(), n, "parent1 must have one gene per item");
    assert_eq!(parent2.len(), n, "parent2 must have one gene per item");

    if n == 0 {
        return Chromosome::empty(0);
    }

    let point = rng.random_range(0..n);
    crossover_at(parent1, parent2, items, point)
}

/// Single-point crossover at a fixed split point.
pub(crate) fn crossover_at(
    parent1: &Chromosome,
    parent2: &Chromosome,
    items: &[Item],
    point: usize,
) -> Chromosome {
    let mut genes = Vec::with_capacity(items.len());
    genes.extend_from_slice(&parent1.genes[..point]);
    genes.extend_from_slice(&parent2.genes[point..]);

    let mut child = Chromosome {
        genes,
        total_cost: 0,
        total_weight: 0,
    };
    child.recompute(items);
    child
}

/// Flips each gene independently with probability `rate`, updating the
/// totals on every flip.
///
/// # Panics
/// Panics if `rate` is not within `[0, 1]`.
pub fn bit_flip_mutation<R: Rng>(chrom: &mut Chromosome, items: &[Item], rate: f64, rng: &mut R) {
    for (i, item) in items.iter().enumerate() {
        if rng.random_bool(rate) {
            chrom.flip(i, item);
        }
    }
}

/// Removes uniformly random packed items until the chromosome fits in
/// `capacity` or nothing is packed.
pub fn repair<R: Rng>(chrom: &mut Chromosome, items: &[Item], capacity: u64, rng: &mut R) {
    if chrom.is_feasible(capacity) {
        return;
    }
    let mut packed: Vec<usize> = chrom.included().collect();
    while chrom.total_weight > capacity && !packed.is_empty() {
        let pick = rng.random_range(0..packed.len());
        let index = packed.swap_remove(pick);
        chrom.flip(index, &items[index]);
    }
}
