// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Bulk and convenience operations built on top of [`iter`](super::iter) and
//! [`tree`](super::tree): materialized key/value/item vectors, batched
//! update, entry-style insert-or-compute, and first/last access.

use super::comparator::KeyOrd;
use super::tree::BTree;
use crate::error::{BTreeError, BTreeResult};
use std::fmt;

/// One row of a batched [`BTree::update_from_rows`] call.
///
/// Unlike [`BTree::update`], which takes `(K, V)` pairs that are shape-safe
/// by construction, `update_from_rows` takes a heterogeneous sequence of
/// cells so a caller assembling rows from an untyped source (a parsed file,
/// a script binding) can report a misshapen row as
/// [`BTreeError::ShapeError`] instead of it being a compile error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell<K, V> {
    Key(K),
    Value(V),
}

/// Which end of the tree an external `peekitem`/`popitem` index resolved to.
enum Endpoint {
    First,
    Last,
}

impl<K, V> BTree<K, V> {
    /// All keys, ascending.
    pub fn keys(&self) -> Vec<&K> {
        self.iter().map(|(k, _)| k).collect()
    }

    /// All values, in ascending key order.
    pub fn values(&self) -> Vec<&V> {
        self.iter().map(|(_, v)| v).collect()
    }

    /// All `(key, value)` pairs, ascending.
    pub fn items(&self) -> Vec<(&K, &V)> {
        self.iter().collect()
    }
}

impl<K: KeyOrd, V> BTree<K, V> {
    /// Insert or update every pair from `rows`, in iteration order.
    ///
    /// Equivalent to calling [`BTree::insert`] once per pair, but a single
    /// entry point for callers bulk-loading data.
    pub fn update<I: IntoIterator<Item = (K, V)>>(&mut self, rows: I) -> BTreeResult<()> {
        for (k, v) in rows {
            self.insert(k, v)?;
        }
        Ok(())
    }

    /// Insert or update every `(key, value)` pair from `other` into `self`,
    /// in `other`'s ascending key order. On a key present in both, `self`'s
    /// entry is overwritten with `other`'s.
    pub fn update_from_tree(&mut self, other: &Self) -> BTreeResult<()>
    where
        K: Clone,
        V: Clone,
    {
        for (k, v) in other.iter() {
            self.insert(k.clone(), v.clone())?;
        }
        Ok(())
    }

    /// Insert or update every row from `rows`, where each row is exactly
    /// one [`Cell::Key`] followed by exactly one [`Cell::Value`].
    ///
    /// ## Error Conditions
    /// - A row whose cells are not `[Key, Value]` in that order, or whose
    ///   length isn't 2: [`BTreeError::ShapeError`] naming the offending
    ///   row's position. Rows before the bad one have already been applied;
    ///   the call does not roll back (mirrors [`BTree::insert`], which is
    ///   also not transactional across a batch).
    pub fn update_from_rows<I>(&mut self, rows: I) -> BTreeResult<()>
    where
        I: IntoIterator<Item = Vec<Cell<K, V>>>,
    {
        for (position, mut row) in rows.into_iter().enumerate() {
            if row.len() != 2 {
                return Err(BTreeError::ShapeError {
                    position,
                    reason: format!("expected 2 cells, got {}", row.len()),
                });
            }
            let value_cell = row.pop().expect("length checked above");
            let key_cell = row.pop().expect("length checked above");
            let (key, value) = match (key_cell, value_cell) {
                (Cell::Key(k), Cell::Value(v)) => (k, v),
                _ => {
                    return Err(BTreeError::ShapeError {
                        position,
                        reason: "expected [Key, Value]".to_string(),
                    })
                }
            };
            self.insert(key, value)?;
        }
        Ok(())
    }

    /// Return a mutable reference to `key`'s value, inserting
    /// `f()` first if `key` is absent.
    pub fn get_or_insert_with<F: FnOnce() -> V>(&mut self, key: K, f: F) -> BTreeResult<&mut V>
    where
        K: Clone,
    {
        if !self.contains_key(&key)? {
            self.insert(key.clone(), f())?;
        }
        self.get_mut(&key)?.ok_or(BTreeError::KeyNotFound)
    }

    /// The smallest key's pair without removing it. Alias of [`BTree::min`].
    pub fn peek_first(&self) -> BTreeResult<(&K, &V)> {
        self.min()
    }

    /// The largest key's pair without removing it. Alias of [`BTree::max`].
    pub fn peek_last(&self) -> BTreeResult<(&K, &V)> {
        self.max()
    }

    /// Remove and return the smallest `(key, value)` pair.
    ///
    /// ## Error Conditions
    /// - Empty tree: [`BTreeError::IndexEmpty`].
    pub fn pop_first(&mut self) -> BTreeResult<(K, V)>
    where
        K: Clone,
    {
        let key = self.min()?.0.clone();
        let value = self.remove(&key)?;
        Ok((key, value))
    }

    /// Remove and return the largest `(key, value)` pair.
    ///
    /// ## Error Conditions
    /// - Empty tree: [`BTreeError::IndexEmpty`].
    pub fn pop_last(&mut self) -> BTreeResult<(K, V)>
    where
        K: Clone,
    {
        let key = self.max()?.0.clone();
        let value = self.remove(&key)?;
        Ok((key, value))
    }

    /// Remove `key` and return its value, or `default` if absent.
    pub fn pop_or(&mut self, key: &K, default: V) -> BTreeResult<V> {
        match self.remove(key) {
            Ok(value) => Ok(value),
            Err(BTreeError::KeyNotFound) => Ok(default),
            Err(e) => Err(e),
        }
    }

    /// Remove `key` and return its value, or `None` if absent. Unlike
    /// [`BTree::remove`], a missing key is not an error.
    pub fn pop(&mut self, key: &K) -> BTreeResult<Option<V>> {
        match self.remove(key) {
            Ok(value) => Ok(Some(value)),
            Err(BTreeError::KeyNotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Peek at the pair at `index`, without removing it. Only the first
    /// (`0`) and last (`-1`, or `len() - 1`) positions are supported — this
    /// is not indexed access into the middle of the tree (Non-goals, §1).
    ///
    /// ## Error Conditions
    /// - Empty tree: [`BTreeError::IndexEmpty`].
    /// - `index` is neither `0` nor the last position:
    ///   [`BTreeError::IndexUnsupported`].
    pub fn peekitem(&self, index: isize) -> BTreeResult<(&K, &V)> {
        match self.endpoint_index(index)? {
            Endpoint::First => self.min(),
            Endpoint::Last => self.max(),
        }
    }

    /// Remove and return the pair at `index`. Only the first (`0`) and last
    /// (`-1`, or `len() - 1`) positions are supported.
    ///
    /// ## Error Conditions
    /// - `index` is neither `0` nor the last position:
    ///   [`BTreeError::IndexUnsupported`].
    /// - Empty tree: [`BTreeError::KeyNotFound`].
    pub fn popitem(&mut self, index: isize) -> BTreeResult<(K, V)>
    where
        K: Clone,
    {
        let endpoint = match self.endpoint_index(index) {
            Ok(e) => e,
            Err(BTreeError::IndexEmpty) => return Err(BTreeError::KeyNotFound),
            Err(e) => return Err(e),
        };
        match endpoint {
            Endpoint::First => self.pop_first(),
            Endpoint::Last => self.pop_last(),
        }
    }

    /// Resolve an external `peekitem`/`popitem` index to first-or-last, the
    /// only two supported positions.
    ///
    /// ## Error Conditions
    /// - Empty tree: [`BTreeError::IndexEmpty`].
    /// - `index` not `0`, `-1`, or `len() - 1`: [`BTreeError::IndexUnsupported`].
    fn endpoint_index(&self, index: isize) -> BTreeResult<Endpoint> {
        if self.is_empty() {
            return Err(BTreeError::IndexEmpty);
        }
        let last = (self.len() - 1) as isize;
        if index == 0 {
            Ok(Endpoint::First)
        } else if index == -1 || index == last {
            Ok(Endpoint::Last)
        } else {
            Err(BTreeError::IndexUnsupported { index })
        }
    }
}

impl<K: KeyOrd + PartialEq, V: PartialEq> PartialEq for BTree<K, V> {
    /// Two trees are equal when they hold the same `(key, value)` pairs in
    /// the same order, regardless of order (`t`) or internal shape.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: KeyOrd + Eq, V: Eq> Eq for BTree<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for BTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
#[path = "bulk_test.rs"]
mod bulk_test;
