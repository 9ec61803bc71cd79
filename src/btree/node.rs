// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! B-tree node: a tagged leaf/internal node with parallel key/value arrays
//! and, for internal nodes, one more child than it has keys.
//!
//! ## Invariants
//! - `keys.len() == values.len()`
//! - `is_leaf` implies `children.is_empty()`
//! - `!is_leaf` implies `children.len() == keys.len() + 1`
//! - `keys` are strictly increasing under [`KeyOrd`]

use super::comparator::KeyOrd;
use crate::error::BTreeError;

/// A single B-tree node.
///
/// Leaves and internal nodes share one representation, distinguished by
/// `is_leaf`: a tagged sum type in spirit, a flag in practice, since Rust
/// would otherwise need an enum with duplicated key/value storage per
/// variant.
#[derive(Debug)]
pub(crate) struct Node<K, V> {
    pub(crate) is_leaf: bool,
    pub(crate) keys: Vec<K>,
    pub(crate) values: Vec<V>,
    pub(crate) children: Vec<Box<Node<K, V>>>,
}

impl<K, V> Node<K, V> {
    pub(crate) fn new_leaf() -> Self {
        Self {
            is_leaf: true,
            keys: Vec::new(),
            values: Vec::new(),
            children: Vec::new(),
        }
    }

    pub(crate) fn new_internal() -> Self {
        Self {
            is_leaf: false,
            keys: Vec::new(),
            values: Vec::new(),
            children: Vec::new(),
        }
    }

    /// `n == 2t - 1`: no room left for a direct insert.
    pub(crate) fn is_full(&self, t: usize) -> bool {
        self.keys.len() == 2 * t - 1
    }

    /// `n == t - 1`: at the non-root floor, cannot lend a key.
    pub(crate) fn is_minimal(&self, t: usize) -> bool {
        self.keys.len() == t - 1
    }
}

impl<K: KeyOrd, V> Node<K, V> {
    /// Binary search for `key` among this node's keys.
    ///
    /// Returns `(index, true)` when `keys[index] == key`, or
    /// `(index, false)` with `index` the position `key` would occupy if
    /// inserted (0 <= index <= n).
    pub(crate) fn locate(&self, key: &K) -> Result<(usize, bool), BTreeError> {
        let mut lo = 0usize;
        let mut hi = self.keys.len();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            match self.keys[mid].key_compare(key)? {
                std::cmp::Ordering::Equal => return Ok((mid, true)),
                std::cmp::Ordering::Less => lo = mid + 1,
                std::cmp::Ordering::Greater => hi = mid,
            }
        }
        Ok((lo, false))
    }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
