// Copyright 2025 the VeloGraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! VeloGraph Compare: the bookkeeping behind a "compare these frames" list.
//!
//! The core type is [`ComparisonSet`], a small container that tracks:
//! - The items the user picked, in the order they were picked.
//! - Uniqueness by identifier (see [`Keyed`]); adding an item whose key is
//!   already present is a no-op.
//! - A monotonically increasing **revision** counter that bumps only when the
//!   contents change.
//!
//! It does not persist anything by itself. Storage layers watch the
//! revision (or the `bool` returned by each mutation) and write the list out
//! when it changes.
//!
//! ## Minimal example
//!
//! ```rust
//! use velograph_compare::{ComparisonSet, Keyed};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Pick {
//!     id: u64,
//!     size: &'static str,
//! }
//!
//! impl Keyed for Pick {
//!     type Key = u64;
//!     fn key(&self) -> u64 {
//!         self.id
//!     }
//! }
//!
//! let mut set = ComparisonSet::new();
//! assert!(set.add(Pick { id: 7, size: "M" }));
//! // Same identifier again: ignored, even with different contents.
//! assert!(!set.add(Pick { id: 7, size: "L" }));
//! assert_eq!(set.len(), 1);
//!
//! set.add(Pick { id: 3, size: "S" });
//! assert_eq!(set.keys().collect::<Vec<_>>(), vec![7, 3]);
//!
//! set.remove(&7);
//! assert!(!set.contains(&7));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

/// Items that carry a unique identifier.
pub trait Keyed {
    /// Identifier type; equality decides duplicates.
    type Key: PartialEq;

    /// Returns this item's identifier.
    fn key(&self) -> Self::Key;
}

/// An insertion-ordered list of items, unique by [`Keyed::key`].
///
/// Keys are compared by equality with a linear scan. Comparison lists are a
/// handful of entries long, so no hashing or ordering is required of the key
/// type.
#[derive(Clone, Debug)]
pub struct ComparisonSet<T> {
    items: Vec<T>,
    revision: u64,
}

impl<T> Default for ComparisonSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ComparisonSet<T> {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            revision: 0,
        }
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns an iterator over the items in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns the current revision counter.
    ///
    /// The revision is bumped only when a mutation changes the contents.
    /// No-op calls (adding a present key, removing an absent one, clearing an
    /// empty set) leave it unchanged.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Removes all items.
    ///
    /// Returns `true` if anything was removed.
    pub fn clear(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        self.items.clear();
        self.bump_revision();
        true
    }

    /// Consumes the set, returning its items in insertion order.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<T: Keyed> ComparisonSet<T> {
    /// Builds a set from `items`, keeping the first occurrence of each key.
    ///
    /// The revision starts at zero regardless of how many items were taken.
    #[must_use]
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = Self::new();
        for item in items {
            set.add(item);
        }
        set.revision = 0;
        set
    }

    /// Returns `true` if an item with `key` is present.
    #[must_use]
    pub fn contains(&self, key: &T::Key) -> bool {
        self.position_of(key).is_some()
    }

    /// Returns the item with `key`, if present.
    #[must_use]
    pub fn get(&self, key: &T::Key) -> Option<&T> {
        self.position_of(key).map(|idx| &self.items[idx])
    }

    /// Iterates over the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = T::Key> + '_ {
        self.items.iter().map(Keyed::key)
    }

    /// Appends `item` unless an item with the same key is already present.
    ///
    /// Returns `true` if the item was added.
    pub fn add(&mut self, item: T) -> bool {
        if self.contains(&item.key()) {
            return false;
        }
        self.items.push(item);
        self.bump_revision();
        true
    }

    /// Removes the item with `key`, if present, and returns it.
    pub fn remove(&mut self, key: &T::Key) -> Option<T> {
        let idx = self.position_of(key)?;
        let removed = self.items.remove(idx);
        self.bump_revision();
        Some(removed)
    }

    /// Adds `item` if its key is absent, removes the present item otherwise.
    ///
    /// Returns `true` if the item is in the set afterwards.
    pub fn toggle(&mut self, item: T) -> bool {
        let key = item.key();
        if self.remove(&key).is_some() {
            false
        } else {
            self.add(item)
        }
    }

    fn position_of(&self, key: &T::Key) -> Option<usize> {
        self.items.iter().position(|item| item.key() == *key)
    }
}

impl<'a, T> IntoIterator for &'a ComparisonSet<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl Keyed for u64 {
    type Key = Self;

    fn key(&self) -> Self {
        *self
    }
}

impl Keyed for u32 {
    type Key = Self;

    fn key(&self) -> Self {
        *self
    }
}
