use std::collections::BTreeSet;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rbtree::{First, NaturalOrder, RBTree, ReverseOrder, TreeError};

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 1_000;

/// Values in a narrow range so duplicates are common.
fn value_strategy() -> impl Strategy<Value = i64> {
    -200i64..200i64
}

// ─── Operations enum for driving randomized tests ────────────────────────────

#[derive(Debug, Clone)]
enum TreeOp {
    Insert(i64),
    EraseKey(i64),
    EraseFound(i64),
    Find(i64),
    LowerBound(i64),
    UpperBound(i64),
    PopFirst,
    PopLast,
}

fn tree_op_strategy() -> impl Strategy<Value = TreeOp> {
    prop_oneof![
        6 => value_strategy().prop_map(TreeOp::Insert),
        2 => value_strategy().prop_map(TreeOp::EraseKey),
        2 => value_strategy().prop_map(TreeOp::EraseFound),
        2 => value_strategy().prop_map(TreeOp::Find),
        1 => value_strategy().prop_map(TreeOp::LowerBound),
        1 => value_strategy().prop_map(TreeOp::UpperBound),
        1 => Just(TreeOp::PopFirst),
        1 => Just(TreeOp::PopLast),
    ]
}

fn collect(tree: &RBTree<i64>) -> Vec<i64> {
    tree.iter().copied().collect()
}

// ─── Unique insertion against BTreeSet ───────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Replays random operations on an `RBTree` with unique insertion and on a
    /// `BTreeSet`, checking results and tree invariants after every step.
    #[test]
    fn unique_ops_match_btreeset(ops in proptest::collection::vec(tree_op_strategy(), TEST_SIZE)) {
        let mut tree: RBTree<i64> = RBTree::new();
        let mut model: BTreeSet<i64> = BTreeSet::new();

        for op in &ops {
            match *op {
                TreeOp::Insert(v) => {
                    let (pos, inserted) = tree.insert_unique(v);
                    prop_assert_eq!(inserted, model.insert(v), "insert_unique({})", v);
                    prop_assert_eq!(tree[pos], v);
                }
                TreeOp::EraseKey(v) => {
                    prop_assert_eq!(tree.erase_key(&v), usize::from(model.remove(&v)), "erase_key({})", v);
                }
                TreeOp::EraseFound(v) => {
                    let pos = tree.find(&v);
                    if model.remove(&v) {
                        let next = tree.erase(pos);
                        prop_assert_eq!(tree.get(next), model.range(v..).next());
                    } else {
                        prop_assert!(pos.is_end(), "find({}) should be end()", v);
                    }
                }
                TreeOp::Find(v) => {
                    prop_assert_eq!(tree.get(tree.find(&v)), model.get(&v), "find({})", v);
                    prop_assert_eq!(tree.contains(&v), model.contains(&v));
                }
                TreeOp::LowerBound(v) => {
                    prop_assert_eq!(tree.get(tree.lower_bound(&v)), model.range(v..).next(), "lower_bound({})", v);
                }
                TreeOp::UpperBound(v) => {
                    prop_assert_eq!(tree.get(tree.upper_bound(&v)), model.range(v + 1..).next(), "upper_bound({})", v);
                }
                TreeOp::PopFirst => prop_assert_eq!(tree.pop_first(), model.pop_first()),
                TreeOp::PopLast => prop_assert_eq!(tree.pop_last(), model.pop_last()),
            }
            prop_assert_eq!(tree.check_invariants(), Ok(()));
            prop_assert_eq!(tree.len(), model.len());
        }

        prop_assert_eq!(collect(&tree), model.into_iter().collect::<Vec<_>>());
    }

    /// Equal insertion keeps every duplicate; the model is a sorted `Vec`.
    #[test]
    fn equal_ops_match_sorted_vec(ops in proptest::collection::vec(tree_op_strategy(), TEST_SIZE)) {
        let mut tree: RBTree<i64> = RBTree::new();
        let mut model: Vec<i64> = Vec::new();

        for op in &ops {
            match *op {
                TreeOp::Insert(v) => {
                    let pos = tree.insert_equal(v);
                    let at = model.partition_point(|&m| m <= v);
                    model.insert(at, v);
                    // The new element comes after every equivalent one.
                    prop_assert_eq!(tree.next(pos), tree.upper_bound(&v));
                }
                TreeOp::EraseKey(v) => {
                    let before = model.len();
                    model.retain(|&m| m != v);
                    prop_assert_eq!(tree.erase_key(&v), before - model.len(), "erase_key({})", v);
                }
                TreeOp::EraseFound(v) => {
                    let pos = tree.find(&v);
                    match model.binary_search(&v) {
                        Ok(_) => {
                            let at = model.partition_point(|&m| m < v);
                            model.remove(at);
                            tree.erase(pos);
                        }
                        Err(_) => prop_assert!(pos.is_end()),
                    }
                }
                TreeOp::Find(v) => {
                    let expected = model.iter().filter(|&&m| m == v).count();
                    prop_assert_eq!(tree.count(&v), expected, "count({})", v);
                }
                TreeOp::LowerBound(v) => {
                    let at = model.partition_point(|&m| m < v);
                    prop_assert_eq!(tree.get(tree.lower_bound(&v)), model.get(at));
                }
                TreeOp::UpperBound(v) => {
                    let at = model.partition_point(|&m| m <= v);
                    prop_assert_eq!(tree.get(tree.upper_bound(&v)), model.get(at));
                }
                TreeOp::PopFirst => {
                    let expected = if model.is_empty() { None } else { Some(model.remove(0)) };
                    prop_assert_eq!(tree.pop_first(), expected);
                }
                TreeOp::PopLast => prop_assert_eq!(tree.pop_last(), model.pop()),
            }
            prop_assert_eq!(tree.check_invariants(), Ok(()));
        }

        prop_assert_eq!(collect(&tree), model);
    }

    /// Forward and backward position walks visit the same elements as `iter`.
    #[test]
    fn position_walks_match_iter(values in proptest::collection::vec(value_strategy(), 0..TEST_SIZE)) {
        let mut tree = RBTree::new();
        for &v in &values {
            tree.insert_equal(v);
        }

        let mut forward = Vec::new();
        let mut pos = tree.begin();
        while pos != tree.end() {
            forward.push(tree[pos]);
            pos = tree.next(pos);
        }

        let mut backward = Vec::new();
        let mut pos = tree.prev(tree.end());
        while pos != tree.end() {
            backward.push(tree[pos]);
            pos = tree.prev(pos);
        }
        backward.reverse();

        let mut sorted = values.clone();
        sorted.sort_unstable();
        prop_assert_eq!(&forward, &sorted);
        prop_assert_eq!(&backward, &sorted);
        prop_assert_eq!(collect(&tree), sorted.clone());
        prop_assert_eq!(tree.iter().len(), sorted.len());
        prop_assert_eq!(tree.into_iter().rev().collect::<Vec<_>>(), sorted.into_iter().rev().collect::<Vec<_>>());
    }

    /// Erasing every element in order, by the returned follower, empties the tree.
    #[test]
    fn erase_all_in_order(values in proptest::collection::vec(value_strategy(), 0..TEST_SIZE)) {
        let mut tree = RBTree::new();
        for &v in &values {
            tree.insert_unique(v);
        }

        let mut pos = tree.begin();
        while pos != tree.end() {
            pos = tree.erase(pos);
            prop_assert_eq!(tree.check_invariants(), Ok(()));
        }
        prop_assert!(tree.is_empty());
        prop_assert_eq!(tree.begin(), tree.end());
    }
}

// ─── Scenarios ───────────────────────────────────────────────────────────────

#[test]
fn textbook_insertion_sequence() {
    let mut tree = RBTree::new();
    for v in [10, 5, 15, 3, 7, 12, 18] {
        assert!(tree.insert_unique(v).1);
    }
    assert_eq!(tree.check_invariants(), Ok(()));
    assert_eq!(collect(&tree), vec![3, 5, 7, 10, 12, 15, 18]);
    assert_eq!(tree.first(), Some(&3));
    assert_eq!(tree.last(), Some(&18));
}

#[test]
fn insert_unique_twice_keeps_one() {
    let mut tree = RBTree::new();
    let (first, inserted) = tree.insert_unique(5);
    assert!(inserted);
    let (second, inserted) = tree.insert_unique(5);
    assert!(!inserted);
    assert_eq!(first, second);
    assert_eq!(tree.len(), 1);
}

#[test]
fn insert_equal_then_erase_one() {
    let mut tree = RBTree::new();
    let a = tree.insert_equal(5);
    let b = tree.insert_equal(5);
    assert_ne!(a, b);
    assert_eq!(tree.find(&5), a);
    assert_eq!(tree.erase(a), b);
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.find(&5), b);
    assert_eq!(tree.check_invariants(), Ok(()));
}

#[test]
fn sorted_then_reversed_bulk_inserts_stay_balanced() {
    let mut tree = RBTree::new();
    for v in 0..4_096 {
        tree.insert_unique(v);
    }
    for v in (4_096..8_192).rev() {
        tree.insert_unique(v);
    }
    assert_eq!(tree.check_invariants(), Ok(()));
    assert_eq!(tree.len(), 8_192);
    assert!(tree.iter().copied().eq(0..8_192));
}

#[test]
fn map_semantics_with_first() {
    let mut map = RBTree::with_comparator(First, NaturalOrder);
    assert!(map.insert_unique(("pear", 3)).1);
    assert!(map.insert_unique(("apple", 1)).1);
    let (pos, inserted) = map.insert_unique(("pear", 9));
    assert!(!inserted);
    assert_eq!(map[pos], ("pear", 3));

    if let Some(entry) = map.get_mut(pos) {
        entry.1 = 4;
    }
    assert_eq!(map.get(map.find(&"pear")), Some(&("pear", 4)));
    assert_eq!(map.erase_key(&"apple"), 1);
    assert_eq!(format!("{map:?}"), r#"{("pear", 4)}"#);
}

#[test]
fn reverse_order_bounds() {
    let mut tree = RBTree::with_comparator(rbtree::Identity, ReverseOrder);
    for v in [1, 5, 3, 5] {
        tree.insert_equal(v);
    }
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![5, 5, 3, 1]);
    let (lower, upper) = tree.equal_range(&5);
    assert_eq!(lower, tree.begin());
    assert_eq!(tree[upper], 3);
    assert_eq!(tree.count(&5), 2);
}

#[test]
fn positions_survive_unrelated_mutations() {
    let mut tree = RBTree::new();
    let (kept, _) = tree.insert_unique(50);
    for v in 0..100 {
        tree.insert_unique(v);
    }
    for v in (0..100).filter(|v| v % 2 == 1) {
        tree.erase_key(&v);
    }
    assert_eq!(tree[kept], 50);
    assert_eq!(tree[tree.next(kept)], 52);
    assert_eq!(tree[tree.prev(kept)], 48);
}

#[test]
fn try_variants_report_and_succeed() {
    let mut tree: RBTree<i64> = RBTree::new();
    assert_eq!(tree.try_insert_equal(1).map(|pos| tree_value(&tree, pos)), Ok(Some(1)));
    assert_eq!(tree.try_insert_unique(1).map(|(_, inserted)| inserted), Ok(false));
    assert_eq!(tree.try_reserve(usize::MAX), Err(TreeError::CapacityOverflow));
    assert_eq!(tree.len(), 1);
}

fn tree_value(tree: &RBTree<i64>, pos: rbtree::Position) -> Option<i64> {
    tree.get(pos).copied()
}

#[test]
fn clone_eq_and_default() {
    let mut tree = RBTree::new();
    for v in [3, 1, 2] {
        tree.insert_unique(v);
    }
    let copy = tree.clone();
    assert_eq!(tree, copy);
    tree.pop_first();
    assert_ne!(tree, copy);

    let empty: RBTree<i32> = RBTree::default();
    assert!(empty.is_empty());
    assert_eq!(empty.iter().next(), None);
}

#[test]
fn cursor_walk() {
    let mut tree = RBTree::new();
    for v in 1..=3 {
        tree.insert_unique(v);
    }
    let mut cursor = tree.cursor_front();
    let mut seen = Vec::new();
    while let Some(&v) = cursor.get() {
        seen.push(v);
        cursor.move_next();
    }
    assert_eq!(seen, vec![1, 2, 3]);
    assert!(cursor.position().is_end());
}
