mod common;

use avl_tree::{AvlTree, InvariantError};

use common::init_logger;

fn pairs<K: Clone>(tree: &AvlTree<K>) -> Vec<(K, usize)> {
    tree.iter().map(|(k, h)| (k.clone(), h)).collect()
}

#[test]
fn insert_single_element_matrix() {
    let mut tree = AvlTree::new();
    assert!(tree.insert(1));
    assert_eq!(pairs(&tree), vec![(1, 0)]);
    assert!(!tree.insert(1));
    assert_eq!(pairs(&tree), vec![(1, 0)]);
    assert_eq!(tree.len(), 1);
}

#[test]
fn insert_list_of_elements_matrix() {
    init_logger();
    let mut tree = AvlTree::new();
    tree.insert_many([1, 2, 3, 4]);
    assert_eq!(pairs(&tree), vec![(1, 0), (2, 2), (3, 1), (4, 0)]);
    tree.insert_many([1, 2, 3, 4]);
    assert_eq!(pairs(&tree), vec![(1, 0), (2, 2), (3, 1), (4, 0)]);
    tree.insert(5);
    assert_eq!(pairs(&tree), vec![(1, 0), (2, 2), (3, 0), (4, 1), (5, 0)]);
    tree.extend([6, 7]);
    assert_eq!(
        pairs(&tree),
        vec![(1, 0), (2, 1), (3, 0), (4, 2), (5, 0), (6, 1), (7, 0)]
    );
    tree.assert_valid().unwrap();
}

#[test]
fn rotation_scenarios_matrix() {
    let tree: AvlTree<i32> = [1, 2, 3].into_iter().collect();
    assert_eq!(pairs(&tree), vec![(1, 0), (2, 1), (3, 0)]);

    let tree: AvlTree<i32> = [5, 3, 4].into_iter().collect();
    assert_eq!(pairs(&tree), vec![(3, 0), (4, 1), (5, 0)]);
    assert_eq!(tree.height(), Some(1));

    let tree: AvlTree<i32> = [-2, 1, 0].into_iter().collect();
    assert_eq!(pairs(&tree), vec![(-2, 0), (0, 1), (1, 0)]);
}

#[test]
fn print_matrix() {
    let mut tree = AvlTree::new();
    assert_eq!(tree.to_string(), "Tree is empty!!!");
    tree.insert_many([1, 2, 3, 4]);
    assert_eq!(tree.to_string(), "1 [0], 2 [2], 3 [1], 4 [0]");
    assert_eq!(format!("{tree:?}"), "[(1, 0), (2, 2), (3, 1), (4, 0)]");
}

#[test]
fn tree_dump_matrix() {
    let mut tree = AvlTree::new();
    assert_eq!(tree.to_tree_string(), "∅");
    tree.insert_many([2, 1, 3, 4]);
    assert_eq!(
        tree.to_tree_string(),
        "2 [2]\n├─ 1 [0]\n└─ 3 [1]\n   ├─ ∅\n   └─ 4 [0]"
    );
}

#[test]
fn find_matrix() {
    let mut tree = AvlTree::new();
    assert!(!tree.find(&0));
    tree.insert(2);
    assert!(!tree.find(&0));
    tree.insert(0);
    assert!(tree.find(&0));
    assert!(tree.contains(&2));
}

#[test]
fn min_max_matrix() {
    let mut tree = AvlTree::new();
    assert_eq!(tree.max(), None);
    assert_eq!(tree.min(), None);
    tree.insert_many([1, 2, 3, 4, 5]);
    assert_eq!(tree.max(), Some(&5));
    assert_eq!(tree.min(), Some(&1));
}

#[test]
fn empty_tree_matrix() {
    let mut tree: AvlTree<i32> = AvlTree::default();
    assert!(tree.is_empty());
    assert!(!tree.find(&42));
    assert_eq!(tree.min(), None);
    assert_eq!(tree.max(), None);
    assert!(!tree.delete(&42));
    assert_eq!(tree.height(), None);
    assert!(tree.key_height_inorder().is_empty());
    assert_eq!(tree.iter().next(), None);
    tree.assert_valid().unwrap();
}

#[test]
fn bulk_insert_then_delete_matrix() {
    init_logger();
    let mut tree = AvlTree::new();
    tree.insert_many([1, 2, 3, 4, 5]);
    assert_eq!(tree.max(), Some(&5));
    assert_eq!(tree.min(), Some(&1));

    assert!(tree.delete(&3));
    assert!(!tree.find(&3));
    let keys: Vec<i32> = tree.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, vec![1, 2, 4, 5]);
    assert_eq!(pairs(&tree), vec![(1, 0), (2, 2), (4, 1), (5, 0)]);
    tree.assert_valid().unwrap();

    assert!(!tree.delete(&3));
    assert_eq!(tree.len(), 4);
}

#[test]
fn delete_sole_root_matrix() {
    let mut tree = AvlTree::new();
    tree.insert(7);
    assert!(!tree.delete(&8));
    assert!(tree.delete(&7));
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.to_string(), "Tree is empty!!!");

    tree.insert(9);
    assert_eq!(pairs(&tree), vec![(9, 0)]);
    tree.assert_valid().unwrap();
}

#[test]
fn delete_rebalances_multiple_levels_matrix() {
    init_logger();
    // Fibonacci-shaped tree: removing 12 forces rotations at two levels.
    let mut tree = AvlTree::new();
    tree.insert_many([8, 5, 11, 3, 7, 10, 12, 2, 4, 6, 9, 1]);
    tree.assert_valid().unwrap();
    assert_eq!(tree.height(), Some(4));

    assert!(tree.delete(&12));
    tree.assert_valid().unwrap();
    assert_eq!(tree.height(), Some(3));
    let keys: Vec<i32> = tree.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
}

#[test]
fn delete_everything_matrix() {
    let mut tree: AvlTree<i32> = (0..64).collect();
    for i in (0..64).rev().step_by(2) {
        assert!(tree.delete(&i));
        tree.assert_valid().unwrap();
    }
    for i in (0..64).step_by(2) {
        assert!(tree.delete(&i));
        tree.assert_valid().unwrap();
    }
    assert!(tree.is_empty());
}

#[test]
fn height_stays_logarithmic_matrix() {
    let tree: AvlTree<u32> = (1..=1000).collect();
    assert_eq!(tree.len(), 1000);
    let max_height = (1000_f64.log2() * 1.45).ceil() as usize;
    assert!(tree.height().unwrap() <= max_height);
    tree.assert_valid().unwrap();
}

#[test]
fn custom_comparator_matrix() {
    let mut tree = AvlTree::with_comparator(|a: &i32, b: &i32| b - a);
    tree.insert_many([1, 5, 3, 4, 2]);
    let keys: Vec<i32> = tree.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, vec![5, 4, 3, 2, 1]);
    assert_eq!(tree.min(), Some(&5));
    assert!(tree.delete(&3));
    tree.assert_valid().unwrap();
}

#[test]
fn float_keys_with_total_order_matrix() {
    let mut tree = AvlTree::with_comparator(|a: &f64, b: &f64| a.total_cmp(b) as i32);
    tree.insert_many([2.5, f64::NAN, -1.0, 0.0]);
    assert!(tree.find(&f64::NAN));
    assert!(!tree.insert(f64::NAN));
    assert_eq!(tree.min(), Some(&-1.0));
    assert!(tree.max().is_some_and(|k| k.is_nan()));
    assert!(tree.delete(&f64::NAN));
    assert!(!tree.find(&f64::NAN));
    tree.assert_valid().unwrap();
}

#[test]
fn rotation_traces_reach_test_logger_matrix() {
    init_logger();
    assert_eq!(log::max_level(), log::LevelFilter::Trace);
    let mut tree = AvlTree::new();
    tree.insert_many([1, 2, 3]);
    assert_eq!(pairs(&tree), vec![(1, 0), (2, 1), (3, 0)]);
}

#[test]
fn strings_matrix() {
    let mut tree = AvlTree::with_capacity(3);
    tree.insert(String::from("banana"));
    tree.insert(String::from("apple"));
    tree.insert(String::from("cherry"));
    assert_eq!(tree.min().map(String::as_str), Some("apple"));
    assert!(tree.delete(&String::from("banana")));
    assert_eq!(tree.to_string(), "apple [0], cherry [1]");
}

#[test]
fn clone_is_independent_matrix() {
    let mut tree: AvlTree<i32> = [50, 30, 70].into_iter().collect();
    let clone = tree.clone();
    tree.delete(&30);
    assert!(clone.find(&30));
    assert!(!tree.find(&30));
    clone.assert_valid().unwrap();
}

#[test]
fn into_iterator_matrix() {
    let tree: AvlTree<i32> = [3, 1, 2].into_iter().collect();
    let mut seen = Vec::new();
    for (k, h) in &tree {
        seen.push((*k, h));
    }
    assert_eq!(seen, tree.key_height_inorder().into_iter().map(|(k, h)| (*k, h)).collect::<Vec<_>>());
}

#[test]
fn invariant_error_messages_matrix() {
    let err = InvariantError::Unbalanced { node: 3, balance: 2 };
    assert_eq!(err.to_string(), "node 3 has balance factor 2");
    let err = InvariantError::HeightMismatch {
        node: 1,
        expected: 2,
        actual: 0,
    };
    assert_eq!(err.to_string(), "node 1 caches height 0, expected 2");
}
