// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Tests for `Node::locate` and the capacity predicates.

use super::*;

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf_with(keys: Vec<i32>) -> Node<i32, &'static str> {
        let mut node = Node::new_leaf();
        let values = vec!["v"; keys.len()];
        node.keys = keys;
        node.values = values;
        node
    }

    #[test]
    fn test_locate_found() {
        let node = leaf_with(vec![10, 20, 30]);
        assert_eq!(node.locate(&20).unwrap(), (1, true));
    }

    #[test]
    fn test_locate_not_found_insertion_point() {
        let node = leaf_with(vec![10, 20, 30]);
        assert_eq!(node.locate(&5).unwrap(), (0, false));
        assert_eq!(node.locate(&15).unwrap(), (1, false));
        assert_eq!(node.locate(&35).unwrap(), (3, false));
    }

    #[test]
    fn test_locate_empty_node() {
        let node: Node<i32, &str> = Node::new_leaf();
        assert_eq!(node.locate(&5).unwrap(), (0, false));
    }

    #[test]
    fn test_is_full_and_is_minimal() {
        let t = 3;
        let node = leaf_with(vec![1, 2, 3, 4, 5]);
        assert!(node.is_full(t)); // 2t - 1 == 5
        assert!(!node.is_minimal(t));

        let node = leaf_with(vec![1, 2]);
        assert!(node.is_minimal(t)); // t - 1 == 2
        assert!(!node.is_full(t));
    }
}
