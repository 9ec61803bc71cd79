// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Core types for the B-tree engine: the validated minimum-degree `Order`.

use crate::error::BTreeError;

/// Default minimum degree used when a caller omits an explicit order.
pub const DEFAULT_ORDER: usize = 8;

/// Minimum degree (`t`) of a [`crate::BTree`].
///
/// Every non-root node holds between `t - 1` and `2t - 1` keys; every
/// non-leaf node has one more child than it has keys.
///
/// ## Example
/// ```rust
/// use btreedict::btree::types::Order;
///
/// let order = Order::new(4).unwrap();
/// assert_eq!(order.value(), 4);
/// assert_eq!(order.max_keys(), 7);
/// assert_eq!(order.min_keys(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order(usize);

impl Order {
    /// Validate and build an explicit order.
    ///
    /// ## Error Conditions
    /// - `order < 2`: a B-tree of minimum degree below 2 cannot maintain
    ///   the `[t-1, 2t-1]` occupancy invariant.
    pub fn new(order: usize) -> Result<Self, BTreeError> {
        if order < 2 {
            return Err(BTreeError::BadArgument {
                reason: format!("order must be >= 2, got {order}"),
            });
        }
        Ok(Self(order))
    }

    /// Same validation as [`Order::new`], reserved for call sites that also
    /// want to reject orders whose node capacity would overflow `usize`
    /// arithmetic on the host platform (see [`crate::BTreeError::OutOfMemory`]).
    pub fn checked_new(order: usize) -> Result<Self, BTreeError> {
        order
            .checked_mul(2)
            .and_then(|v| v.checked_sub(1))
            .ok_or(BTreeError::OutOfMemory)?;
        Self::new(order)
    }

    /// Raw minimum-degree value (`t`).
    pub fn value(&self) -> usize {
        self.0
    }

    /// Maximum keys per node: `2t - 1`.
    pub fn max_keys(&self) -> usize {
        2 * self.0 - 1
    }

    /// Minimum keys per non-root node: `t - 1`.
    pub fn min_keys(&self) -> usize {
        self.0 - 1
    }
}

impl Default for Order {
    /// The default order (8) when a caller supplies none.
    fn default() -> Self {
        Self(DEFAULT_ORDER)
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
