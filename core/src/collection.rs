//! Growable owned sequence with an explicit growth policy.
//!
//! [`Collection`] is the storage reducers append records to. It is a thin
//! layer over [`Vec`] that makes two things explicit:
//!
//! - **Growth policy**: when full, capacity grows by `max(2, capacity / 2)`
//!   (0 → 2 → 4 → 6 → 9 → 13 → 19 …), giving amortized O(1) appends.
//! - **Fallible growth**: reservation goes through [`Vec::try_reserve_exact`],
//!   so running out of memory surfaces as
//!   [`ReduceError::AllocationFailure`] instead of aborting.
//!
//! Appending is the only way to grow. There is no insertion at an arbitrary
//! position and no removal, so an element's index never changes once it has
//! been appended.
//!
//! # Example
//!
//! ```
//! use reflux_core::Collection;
//!
//! let mut words = Collection::new();
//! words.append("alpha")?;
//! words.append("beta")?;
//! words.append("gamma")?;
//!
//! assert_eq!(words.len(), 3);
//! assert_eq!(words.capacity(), 4);
//! assert_eq!(words.get(1), Some(&"beta"));
//! assert_eq!(words.iter().copied().collect::<Vec<_>>(), ["alpha", "beta", "gamma"]);
//! # Ok::<(), reflux_core::ReduceError>(())
//! ```

use crate::error::ReduceError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Minimum number of slots added by a single growth step.
pub const MIN_GROWTH: usize = 2;

/// Number of slots added when a collection of `capacity` slots is full.
///
/// ```
/// use reflux_core::collection::next_growth;
///
/// assert_eq!(next_growth(0), 2);
/// assert_eq!(next_growth(4), 2);
/// assert_eq!(next_growth(9), 4);
/// ```
#[must_use]
pub const fn next_growth(capacity: usize) -> usize {
    let increase = capacity / 2;
    if increase < MIN_GROWTH {
        MIN_GROWTH
    } else {
        increase
    }
}

/// Smallest capacity on the growth sequence (0, 2, 4, 6, 9, 13 ...) that
/// holds `len` elements.
///
/// ```
/// use reflux_core::collection::policy_capacity;
///
/// assert_eq!(policy_capacity(0), 0);
/// assert_eq!(policy_capacity(3), 4);
/// assert_eq!(policy_capacity(7), 9);
/// ```
#[must_use]
pub const fn policy_capacity(len: usize) -> usize {
    let mut capacity = 0;
    while capacity < len {
        capacity = capacity.saturating_add(next_growth(capacity));
    }
    capacity
}

/// Owned, contiguous, append-only sequence.
///
/// Invariant: `len() <= capacity()`, and at least `capacity()` slots of
/// storage are reserved. Every constructor keeps `capacity()` on the growth
/// sequence.
#[derive(Debug)]
pub struct Collection<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> Collection<T> {
    /// Creates an empty collection with no storage
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            capacity: 0,
        }
    }

    /// Number of stored elements
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing has been appended
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of slots reserved under the growth policy
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Appends `item` after the last element, growing storage if full.
    ///
    /// # Errors
    ///
    /// Returns [`ReduceError::AllocationFailure`] if the next growth step
    /// cannot be reserved. The collection is left unchanged in that case.
    pub fn append(&mut self, item: T) -> Result<(), ReduceError> {
        if self.items.len() >= self.capacity {
            self.grow()?;
        }
        self.items.push(item);
        Ok(())
    }

    fn grow(&mut self) -> Result<(), ReduceError> {
        let requested = self.capacity.saturating_add(next_growth(self.capacity));
        self.items
            .try_reserve_exact(requested - self.items.len())
            .map_err(|_| ReduceError::AllocationFailure { requested })?;
        self.capacity = requested;
        Ok(())
    }

    /// Element at `index`, or `None` when `index >= len()`
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Mutable element at `index`, or `None` when `index >= len()`
    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Read-only iterator in insertion order
    ///
    /// The iterator borrows the collection, so it cannot outlive a
    /// subsequent append. Calling `iter()` again restarts from the first
    /// element.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Contents as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Frees storage and returns to the empty state. Idempotent.
    pub fn release(&mut self) {
        self.items = Vec::new();
        self.capacity = 0;
    }
}

impl<T: Clone> Clone for Collection<T> {
    // Vec::clone reserves only `len` slots; keep the logical capacity backed.
    fn clone(&self) -> Self {
        let mut items = Vec::with_capacity(self.capacity);
        items.extend_from_slice(&self.items);
        Self {
            items,
            capacity: self.capacity,
        }
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Equality is over contents; reserved capacity is not observable state.
impl<T: PartialEq> PartialEq for Collection<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for Collection<T> {}

/// Adopts the vector's contents. Capacity is rounded up to the growth
/// sequence, so later appends continue it.
impl<T> From<Vec<T>> for Collection<T> {
    fn from(mut items: Vec<T>) -> Self {
        let capacity = policy_capacity(items.len());
        items.reserve_exact(capacity - items.len());
        Self { items, capacity }
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Serialize> Serialize for Collection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.items)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Collection<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_collection_is_empty() {
        let collection: Collection<u32> = Collection::new();
        assert_eq!(collection.len(), 0);
        assert_eq!(collection.capacity(), 0);
        assert!(collection.is_empty());
        assert_eq!(collection.iter().count(), 0);
    }

    #[test]
    fn capacity_follows_growth_policy() {
        let mut collection = Collection::new();
        let mut capacities = Vec::new();

        for i in 0..14 {
            assert!(collection.append(i).is_ok());
            capacities.push(collection.capacity());
        }

        assert_eq!(
            capacities,
            [2, 2, 4, 4, 6, 6, 9, 9, 9, 13, 13, 13, 13, 19]
        );
    }

    #[test]
    fn get_out_of_range_is_none() {
        let mut collection = Collection::new();
        assert!(collection.append('a').is_ok());

        assert_eq!(collection.get(0), Some(&'a'));
        assert_eq!(collection.get(1), None);
        assert_eq!(collection.get_mut(7), None);
    }

    #[test]
    fn release_resets_and_is_idempotent() {
        let mut collection = Collection::new();
        for i in 0..5 {
            assert!(collection.append(i).is_ok());
        }

        collection.release();
        assert!(collection.is_empty());
        assert_eq!(collection.capacity(), 0);

        collection.release();
        assert!(collection.is_empty());
        assert_eq!(collection.capacity(), 0);

        // Usable again after release
        assert!(collection.append(42).is_ok());
        assert_eq!(collection.capacity(), 2);
    }

    #[test]
    fn iteration_is_restartable() {
        let collection = Collection::from(vec![1, 2, 3]);
        let first: Vec<_> = collection.iter().collect();
        let second: Vec<_> = (&collection).into_iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn from_vec_lands_on_growth_sequence() {
        let mut grown = Collection::new();
        for i in 0..3 {
            assert!(grown.append(i).is_ok());
        }

        let mut adopted = Collection::from(vec![0, 1, 2]);
        assert_eq!(adopted, grown);
        assert_eq!(adopted.capacity(), 4);
        assert!(adopted.items.capacity() >= adopted.capacity());

        let mut capacities = Vec::new();
        for i in 3..7 {
            assert!(adopted.append(i).is_ok());
            capacities.push(adopted.capacity());
        }
        assert_eq!(capacities, [4, 6, 6, 9]);
    }

    #[test]
    fn clone_keeps_capacity_reserved() {
        let mut original = Collection::new();
        for i in 0..3 {
            assert!(original.append(i).is_ok());
        }
        assert_eq!(original.capacity(), 4);

        let mut cloned = original.clone();
        assert_eq!(cloned, original);
        assert_eq!(cloned.capacity(), 4);
        assert!(cloned.items.capacity() >= cloned.capacity());

        // The next append fits in reserved storage, the one after grows by policy
        assert!(cloned.append(3).is_ok());
        assert_eq!(cloned.capacity(), 4);
        assert!(cloned.append(4).is_ok());
        assert_eq!(cloned.capacity(), 6);
        assert!(cloned.items.capacity() >= cloned.capacity());
    }

    #[test]
    fn policy_capacity_matches_appends() {
        let mut collection = Collection::new();
        for len in 1..40 {
            assert!(collection.append(len).is_ok());
            assert_eq!(policy_capacity(len), collection.capacity());
        }
    }

    #[test]
    fn serializes_as_sequence() {
        let collection = Collection::from(vec!["x", "y"]);
        let json = serde_json::to_string(&collection).unwrap_or_default();
        assert_eq!(json, r#"["x","y"]"#);

        let back: Result<Collection<String>, _> = serde_json::from_str(&json);
        assert!(matches!(back, Ok(ref c) if c.len() == 2 && c.capacity() == 2));

        let odd: Result<Collection<u8>, _> = serde_json::from_str("[1,2,3,4,5]");
        assert!(matches!(odd, Ok(ref c) if c.len() == 5 && c.capacity() == 6));
    }

    proptest! {
        #[test]
        fn appended_items_survive_reallocation(items in proptest::collection::vec(any::<u64>(), 0..200)) {
            let mut collection = Collection::new();
            for item in &items {
                prop_assert!(collection.append(*item).is_ok());
                prop_assert!(collection.len() <= collection.capacity());
                prop_assert!(collection.items.capacity() >= collection.capacity());
            }

            let cloned = collection.clone();
            prop_assert!(cloned.items.capacity() >= cloned.capacity());
            prop_assert_eq!(cloned.capacity(), policy_capacity(items.len()));

            prop_assert_eq!(collection.len(), items.len());
            for (index, item) in items.iter().enumerate() {
                prop_assert_eq!(collection.get(index), Some(item));
            }
        }
    }
}
