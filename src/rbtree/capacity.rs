use super::RBTree;
use crate::compare::{Identity, NaturalOrder};
use crate::error::TreeResult;
use crate::raw::RawTree;

impl<V> RBTree<V, Identity, NaturalOrder> {
    /// Creates an empty tree with room for at least `capacity` elements
    /// before node storage has to grow.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RBTree;
    ///
    /// let tree: RBTree<i32> = RBTree::with_capacity(16);
    /// assert!(tree.is_empty());
    /// assert!(tree.capacity() >= 16);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, Identity, NaturalOrder)
    }
}

impl<V, P, C> RBTree<V, P, C> {
    /// As [`with_comparator`](RBTree::with_comparator), preallocating room
    /// for `capacity` elements.
    #[must_use]
    pub fn with_capacity_and_comparator(capacity: usize, key_of: P, compare: C) -> Self {
        RBTree {
            raw: RawTree::with_capacity(capacity),
            key_of,
            compare,
        }
    }

    /// Returns how many elements the tree can hold without growing its node
    /// storage.
    ///
    /// Erased slots are reused before the storage grows.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Reserves room for at least `additional` more elements.
    ///
    /// # Panics
    ///
    /// Panics if the allocation fails; see
    /// [`try_reserve`](RBTree::try_reserve).
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RBTree;
    ///
    /// let mut tree = RBTree::new();
    /// tree.insert_unique(1);
    /// tree.reserve(10);
    /// assert!(tree.capacity() >= 11);
    /// ```
    pub fn reserve(&mut self, additional: usize) {
        if let Err(err) = self.raw.try_reserve(additional) {
            panic!("`RBTree::reserve()` - {err}!");
        }
    }

    /// Tries to reserve room for at least `additional` more elements.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError`](crate::TreeError) if the allocator refuses or
    /// the request exceeds the number of addressable nodes. The tree is
    /// unchanged in either case.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::{RBTree, TreeError};
    ///
    /// let mut tree: RBTree<u64> = RBTree::new();
    /// assert!(tree.try_reserve(8).is_ok());
    /// assert!(matches!(tree.try_reserve(usize::MAX), Err(TreeError::CapacityOverflow)));
    /// ```
    pub fn try_reserve(&mut self, additional: usize) -> TreeResult<()> {
        self.raw.try_reserve(additional)
    }
}
