//! Fixed scenarios exercised through the public API.

use u_knapsack::bnb::{find_optimal, BnbConfig, SearchStatus};
use u_knapsack::ga::{solve, GaConfig, GaRunner};
use u_knapsack::{compare, Item, KnapsackError, KnapsackInstance};

fn items(raw: &[(u64, u64)]) -> Vec<Item> {
    raw.iter().copied().map(Item::from).collect()
}

#[test]
fn four_items_capacity_five() {
    let result = find_optimal(items(&[(2, 3), (3, 4), (4, 5), (5, 6)]), 5).unwrap();
    assert_eq!(result.total_cost, 7);
    assert_eq!(result.total_weight, 5);
    assert_eq!(result.chosen_items, items(&[(2, 3), (3, 4)]));
    assert_eq!(result.status, SearchStatus::Optimal);
}

#[test]
fn single_item_zero_capacity() {
    let result = find_optimal(items(&[(1, 1)]), 0).unwrap();
    assert_eq!(result.total_cost, 0);
    assert!(result.chosen_items.is_empty());

    let best = solve(items(&[(1, 1)]), 0, 100, 0.01, 100).unwrap();
    assert_eq!(best.total_cost, 0);
    assert_eq!(best.total_weight, 0);
}

#[test]
fn ten_identical_items_capacity_five() {
    let result = find_optimal(vec![Item::new(1, 1); 10], 5).unwrap();
    assert_eq!(result.total_cost, 5);
    assert_eq!(result.chosen_items.len(), 5);
}

#[test]
fn empty_input_yields_empty_solutions() {
    let result = find_optimal(vec![], 10).unwrap();
    assert_eq!(result.total_cost, 0);
    assert!(result.chosen_items.is_empty());

    let best = solve(vec![], 10, 100, 0.01, 100).unwrap();
    assert!(best.genes.is_empty());
    assert_eq!(best.total_cost, 0);
}

#[test]
fn zero_weight_item_is_rejected() {
    let err = find_optimal(items(&[(3, 3), (0, 9)]), 10).unwrap_err();
    assert_eq!(err, KnapsackError::InvalidItem { index: 1, weight: 0 });
    assert!(solve(items(&[(0, 1)]), 10, 10, 0.01, 10).is_err());
}

#[test]
fn classic_fifteen_item_instance() {
    // ks_15 style: weights/costs with a known optimum of 1458 at capacity 750
    let raw = [
        (70, 135),
        (73, 139),
        (77, 149),
        (80, 150),
        (82, 156),
        (87, 163),
        (90, 173),
        (94, 184),
        (98, 192),
        (106, 201),
        (110, 210),
        (113, 214),
        (115, 221),
        (118, 229),
        (120, 240),
    ];
    let instance = KnapsackInstance::new(items(&raw), 750).unwrap();
    let cmp = compare(
        &instance,
        &BnbConfig::default(),
        &GaConfig::default().with_seed(2024),
    );

    assert_eq!(cmp.exact.total_cost, 1458);
    assert!(cmp.exact.total_weight <= 750);
    assert!(cmp.heuristic.best_cost <= 1458);
    assert!(cmp.heuristic.best_weight <= 750);
    assert!(cmp.gap() >= 0.0);
}

#[test]
fn heuristic_is_reproducible_under_seed() {
    let instance =
        KnapsackInstance::new(items(&[(5, 10), (4, 40), (6, 30), (3, 50), (2, 5)]), 10).unwrap();
    let config = GaConfig::default().with_seed(99);
    let a = GaRunner::run(&instance, &config);
    let b = GaRunner::run(&instance, &config);
    assert_eq!(a.best, b.best);
    assert_eq!(a.cost_history, b.cost_history);
    // optimum: (4, 40) + (3, 50) + (2, 5) = 95 at weight 9
    assert_eq!(a.best_cost, 95);
}

#[test]
fn node_limited_search_still_feasible() {
    let raw: Vec<(u64, u64)> = (1..=30).map(|i| (i * 17 % 29 + 1, i * 23 % 37 + 1)).collect();
    let instance = KnapsackInstance::new(items(&raw), 100).unwrap();
    let config = BnbConfig::default().with_node_limit(50);
    let result = u_knapsack::bnb::BnbRunner::run(&instance, &config);
    assert_eq!(result.status, SearchStatus::NodeLimit);
    assert!(result.total_weight <= 100);
}
