#![allow(dead_code)]

use std::sync::Once;

use avl_tree::avl::util::get_key_height_inorder;
use avl_tree::avl::{insert, AvlNode};
use avl_tree::default_comparator;
use simplelog::{Config, LevelFilter, TestLogger};

static LOGGER: Once = Once::new();

/// Routes rotation traces to the test harness output.
pub fn init_logger() {
    LOGGER.call_once(|| {
        let _ = TestLogger::init(LevelFilter::Trace, Config::default());
    });
}

/// Arena whose first node is a standalone root, like a freshly built node.
pub fn root_node<K>(key: K) -> (Vec<AvlNode<K>>, u32) {
    (vec![AvlNode::new(key)], 0)
}

/// Inserts `key` at node level and follows the reported root.
pub fn node_insert<K: PartialOrd>(arena: &mut Vec<AvlNode<K>>, root: u32, key: K) -> u32 {
    insert(arena, root, key, &default_comparator::<K>).unwrap_or(root)
}

pub fn key_heights<K: Clone>(arena: &[AvlNode<K>], root: u32) -> Vec<(K, usize)> {
    get_key_height_inorder(arena, Some(root))
        .into_iter()
        .map(|(k, h)| (k.clone(), h))
        .collect()
}
