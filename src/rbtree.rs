use core::fmt;
use core::iter::FusedIterator;
use core::ops::Index;

use crate::compare::{Compare, Identity, KeyOfValue, NaturalOrder};
use crate::error::TreeResult;
use crate::position::Position;
use crate::raw::{Handle, Link, RawTree, Side};

mod capacity;
mod cursor;
mod invariants;

pub use cursor::Cursor;

/// An ordered container based on a [red-black tree].
///
/// Values of type `V` are kept sorted by a key that a [`KeyOfValue`]
/// projection borrows out of each value, compared with a strict weak order
/// supplied as a [`Compare`]. The defaults, [`Identity`] and
/// [`NaturalOrder`], make the tree an ordered multiset of `V: Ord`; the
/// [`First`](crate::First) projection gives map semantics over `(K, T)` pairs.
///
/// Each insertion picks its duplicate policy:
///
/// - [`insert_unique`](RBTree::insert_unique) refuses a value whose key is
///   equivalent to one already stored and hands back the existing position.
/// - [`insert_equal`](RBTree::insert_equal) always inserts; equivalent keys
///   keep their insertion order, the newest last.
///
/// Elements are addressed by [`Position`]s: `begin()` is the minimum, `end()`
/// is a marker one past the maximum, and [`next`](RBTree::next) /
/// [`prev`](RBTree::prev) step between them in O(log n) worst case and O(1)
/// amortized. Insertion, lookup and erasure are O(log n).
///
/// It is a logic error for a value's key to change, relative to the other
/// keys, while it is in the tree. This is normally only possible through
/// [`get_mut`](RBTree::get_mut), [`Cell`], [`RefCell`], global state, I/O, or
/// unsafe code. The resulting behavior is unspecified but stays inside the
/// tree that observed it and is never undefined behavior.
///
/// # Examples
///
/// ```
/// use rbtree::RBTree;
///
/// let mut tree = RBTree::new();
/// for key in [10, 5, 15, 3, 7, 12, 18] {
///     assert!(tree.insert_unique(key).1);
/// }
///
/// // Duplicates are refused by `insert_unique`...
/// let (existing, inserted) = tree.insert_unique(7);
/// assert!(!inserted);
/// assert_eq!(tree[existing], 7);
///
/// // ...and accepted by `insert_equal`.
/// tree.insert_equal(7);
/// assert_eq!(tree.count(&7), 2);
///
/// // Erasing returns the position that followed the erased element.
/// let next = tree.erase(tree.find(&10));
/// assert_eq!(tree[next], 12);
///
/// let values: Vec<_> = tree.iter().copied().collect();
/// assert_eq!(values, [3, 5, 7, 7, 12, 15, 18]);
/// ```
///
/// [red-black tree]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree
/// [`Cell`]: core::cell::Cell
/// [`RefCell`]: core::cell::RefCell
#[derive(Clone)]
pub struct RBTree<V, P = Identity, C = NaturalOrder> {
    raw: RawTree<V>,
    key_of: P,
    compare: C,
}

/// An iterator over the values of an `RBTree`, in key order.
///
/// This `struct` is created by the [`iter`] method on [`RBTree`].
///
/// # Examples
///
/// ```
/// use rbtree::RBTree;
///
/// let mut tree = RBTree::new();
/// tree.insert_unique(2);
/// tree.insert_unique(1);
/// let mut iter = tree.iter();
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.next_back(), Some(&2));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`iter`]: RBTree::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, V> {
    raw: Option<&'a RawTree<V>>,
    front: Link,
    back: Link,
    remaining: usize,
}

/// An owning iterator over the values of an `RBTree`, in key order.
///
/// This `struct` is created by the [`into_iter`] method on [`RBTree`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: IntoIterator::into_iter
pub struct IntoIter<V> {
    inner: alloc::vec::IntoIter<V>,
}

/// Where a value would go, as decided by the unique-insertion descent.
enum Slot {
    Vacant(Link, Side),
    Occupied(Handle),
}

impl<V> RBTree<V> {
    /// Makes a new, empty `RBTree` ordered by `V`'s [`Ord`].
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RBTree;
    ///
    /// let mut tree = RBTree::new();
    /// tree.insert_unique("a");
    /// assert_eq!(tree.len(), 1);
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self::with_comparator(Identity, NaturalOrder)
    }
}

impl<V, P, C> RBTree<V, P, C> {
    /// Makes a new, empty `RBTree` that orders values by `compare` applied to
    /// the keys `key_of` projects out of them.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::{First, RBTree, ReverseOrder};
    ///
    /// let mut scores = RBTree::with_comparator(First, ReverseOrder);
    /// scores.insert_unique((70, "Bob"));
    /// scores.insert_unique((95, "Alice"));
    /// assert_eq!(scores.first(), Some(&(95, "Alice")));
    /// ```
    #[must_use]
    pub const fn with_comparator(key_of: P, compare: C) -> Self {
        Self {
            raw: RawTree::new(),
            key_of,
            compare,
        }
    }

    /// The key projection this tree was built with.
    pub const fn key_of(&self) -> &P {
        &self.key_of
    }

    /// The comparator this tree was built with.
    pub const fn comparator(&self) -> &C {
        &self.compare
    }

    /// Returns the number of elements in the tree.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the tree contains no elements.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Removes every element. Positions obtained before the call are invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RBTree;
    ///
    /// let mut tree = RBTree::new();
    /// tree.insert_equal(1);
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.begin(), tree.end());
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Position of the smallest element, or [`end`](RBTree::end) if empty.
    ///
    /// # Complexity
    ///
    /// O(1) - the minimum is cached in the header.
    #[must_use]
    pub const fn begin(&self) -> Position {
        Position(self.raw.leftmost())
    }

    /// The end marker, one past the largest element.
    #[must_use]
    pub const fn end(&self) -> Position {
        Position::END
    }

    /// The position after `position`.
    ///
    /// Stepping past the largest element gives `end()`, and stepping from
    /// `end()` wraps around to `begin()`.
    ///
    /// # Panics
    ///
    /// Panics if `position` names an erased element whose slot is vacant.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RBTree;
    ///
    /// let mut tree = RBTree::new();
    /// let (one, _) = tree.insert_unique(1);
    /// let (two, _) = tree.insert_unique(2);
    /// assert_eq!(tree.next(one), two);
    /// assert_eq!(tree.next(two), tree.end());
    /// assert_eq!(tree.next(tree.end()), tree.begin());
    /// ```
    #[must_use]
    pub fn next(&self, position: Position) -> Position {
        Position(self.raw.next(position.0))
    }

    /// The position before `position`.
    ///
    /// Stepping back from `end()` gives the largest element, and stepping
    /// back from `begin()` gives `end()`.
    ///
    /// # Panics
    ///
    /// Panics if `position` names an erased element whose slot is vacant.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RBTree;
    ///
    /// let mut tree = RBTree::new();
    /// tree.insert_unique(1);
    /// let (two, _) = tree.insert_unique(2);
    /// assert_eq!(tree.prev(tree.end()), two);
    /// assert_eq!(tree.prev(tree.begin()), tree.end());
    /// ```
    #[must_use]
    pub fn prev(&self, position: Position) -> Position {
        Position(self.raw.prev(position.0))
    }

    /// The element at `position`, or `None` for `end()` or an erased element.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RBTree;
    ///
    /// let mut tree = RBTree::new();
    /// let (pos, _) = tree.insert_unique('x');
    /// assert_eq!(tree.get(pos), Some(&'x'));
    /// assert_eq!(tree.get(tree.end()), None);
    /// ```
    #[must_use]
    pub fn get(&self, position: Position) -> Option<&V> {
        let handle = position.0.node()?;
        self.raw.try_node(handle).map(|node| &node.value)
    }

    /// Mutable access to the element at `position`, or `None` for `end()`.
    ///
    /// Changing the element's key ordering through this reference is a logic
    /// error; see the type-level documentation.
    ///
    /// # Panics
    ///
    /// Panics if `position` names an erased element whose slot is vacant.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::{First, NaturalOrder, RBTree};
    ///
    /// let mut map = RBTree::with_comparator(First, NaturalOrder);
    /// let (pos, _) = map.insert_unique(("apples", 3));
    /// if let Some((_, count)) = map.get_mut(pos) {
    ///     *count += 1;
    /// }
    /// assert_eq!(map[pos], ("apples", 4));
    /// ```
    pub fn get_mut(&mut self, position: Position) -> Option<&mut V> {
        let handle = position.0.node()?;
        Some(&mut self.raw.node_mut(handle).value)
    }

    /// The element at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is `end()` or names an erased element.
    #[must_use]
    pub fn value(&self, position: Position) -> &V {
        match position.0 {
            Link::Header => panic!("`RBTree::value()` - cannot dereference `end()`!"),
            Link::Node(handle) => self.raw.value(handle),
        }
    }

    /// Returns the smallest element.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RBTree;
    ///
    /// let mut tree = RBTree::new();
    /// assert_eq!(tree.first(), None);
    /// tree.insert_equal(2);
    /// tree.insert_equal(1);
    /// assert_eq!(tree.first(), Some(&1));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn first(&self) -> Option<&V> {
        self.raw.leftmost().node().map(|h| self.raw.value(h))
    }

    /// Returns the largest element.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RBTree;
    ///
    /// let mut tree = RBTree::new();
    /// tree.insert_equal(2);
    /// tree.insert_equal(1);
    /// assert_eq!(tree.last(), Some(&2));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn last(&self) -> Option<&V> {
        self.raw.rightmost().node().map(|h| self.raw.value(h))
    }

    /// Removes the element at `position` and returns the position that
    /// followed it.
    ///
    /// Only `position` itself is invalidated; every other position stays
    /// valid.
    ///
    /// # Panics
    ///
    /// Panics if `position` is `end()` or names an erased element.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RBTree;
    ///
    /// let mut tree = RBTree::new();
    /// for v in 1..=5 {
    ///     tree.insert_unique(v);
    /// }
    ///
    /// // Erase every even element while walking the tree.
    /// let mut pos = tree.begin();
    /// while pos != tree.end() {
    ///     pos = if tree[pos] % 2 == 0 { tree.erase(pos) } else { tree.next(pos) };
    /// }
    /// let left: Vec<_> = tree.iter().copied().collect();
    /// assert_eq!(left, [1, 3, 5]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn erase(&mut self, position: Position) -> Position {
        assert!(!position.is_end(), "`RBTree::erase()` - cannot erase `end()`!");
        self.remove_at(position).1
    }

    /// Removes the element at `position`, returning it together with the
    /// position that followed it.
    ///
    /// # Panics
    ///
    /// Panics if `position` is `end()` or names an erased element.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RBTree;
    ///
    /// let mut tree = RBTree::new();
    /// let (pos, _) = tree.insert_unique(String::from("kept"));
    /// let (value, next) = tree.remove_at(pos);
    /// assert_eq!(value, "kept");
    /// assert_eq!(next, tree.end());
    /// ```
    pub fn remove_at(&mut self, position: Position) -> (V, Position) {
        match position.0 {
            Link::Header => panic!("`RBTree::remove_at()` - cannot remove `end()`!"),
            Link::Node(handle) => {
                let (value, following) = self.raw.remove(handle);
                (value, Position(following))
            }
        }
    }

    /// Removes and returns the smallest element.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RBTree;
    ///
    /// let mut tree = RBTree::new();
    /// tree.insert_equal(1);
    /// tree.insert_equal(2);
    /// assert_eq!(tree.pop_first(), Some(1));
    /// assert_eq!(tree.pop_first(), Some(2));
    /// assert_eq!(tree.pop_first(), None);
    /// ```
    pub fn pop_first(&mut self) -> Option<V> {
        let handle = self.raw.leftmost().node()?;
        Some(self.raw.remove(handle).0)
    }

    /// Removes and returns the largest element.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RBTree;
    ///
    /// let mut tree = RBTree::new();
    /// tree.insert_equal(1);
    /// tree.insert_equal(2);
    /// assert_eq!(tree.pop_last(), Some(2));
    /// assert_eq!(tree.pop_last(), Some(1));
    /// assert_eq!(tree.pop_last(), None);
    /// ```
    pub fn pop_last(&mut self) -> Option<V> {
        let handle = self.raw.rightmost().node()?;
        Some(self.raw.remove(handle).0)
    }

    /// Gets an iterator over the elements, in key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RBTree;
    ///
    /// let mut tree = RBTree::new();
    /// for v in [3, 1, 2] {
    ///     tree.insert_unique(v);
    /// }
    /// let forward: Vec<_> = tree.iter().copied().collect();
    /// let backward: Vec<_> = tree.iter().rev().copied().collect();
    /// assert_eq!(forward, [1, 2, 3]);
    /// assert_eq!(backward, [3, 2, 1]);
    /// ```
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            raw: Some(&self.raw),
            front: self.raw.leftmost(),
            back: self.raw.rightmost(),
            remaining: self.raw.len(),
        }
    }
}

impl<V, P, C> RBTree<V, P, C>
where
    P: KeyOfValue<V>,
    C: Compare<P::Key>,
{
    #[inline]
    fn key(&self, handle: Handle) -> &P::Key {
        self.key_of.key(self.raw.value(handle))
    }

    /// Descends to the null child where `key` belongs, going left only when
    /// `key` orders strictly before the node, so equivalents land after
    /// existing ones.
    fn equal_slot(&self, key: &P::Key) -> (Link, Side) {
        let mut parent = Link::Header;
        let mut side = Side::Left;
        let mut current = self.raw.root();
        while let Some(handle) = current {
            parent = Link::Node(handle);
            side = if self.compare.less(key, self.key(handle)) { Side::Left } else { Side::Right };
            current = self.raw.child(handle, side);
        }
        (parent, side)
    }

    /// As [`equal_slot`](Self::equal_slot), then compares against the
    /// in-order predecessor of the slot: that is the only element that can
    /// be equivalent to `key`.
    fn unique_slot(&self, key: &P::Key) -> Slot {
        let (parent, side) = self.equal_slot(key);
        let Link::Node(p) = parent else {
            return Slot::Vacant(parent, side);
        };
        let candidate = match side {
            Side::Left if self.raw.leftmost() == parent => return Slot::Vacant(parent, side),
            Side::Left => self.raw.predecessor(p),
            Side::Right => parent,
        };
        match candidate {
            Link::Node(j) if !self.compare.less(self.key(j), key) => Slot::Occupied(j),
            _ => Slot::Vacant(parent, side),
        }
    }

    /// Inserts `value` unless an element with an equivalent key is present.
    ///
    /// Returns the position of the new element and `true`, or the position
    /// of the existing equivalent element and `false` (in which case `value`
    /// is dropped).
    ///
    /// # Panics
    ///
    /// Panics if node storage cannot grow; see
    /// [`try_insert_unique`](RBTree::try_insert_unique).
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RBTree;
    ///
    /// let mut tree = RBTree::new();
    /// let (first, inserted) = tree.insert_unique(5);
    /// assert!(inserted);
    /// let (again, inserted) = tree.insert_unique(5);
    /// assert!(!inserted);
    /// assert_eq!(first, again);
    /// assert_eq!(tree.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn insert_unique(&mut self, value: V) -> (Position, bool) {
        match self.unique_slot(self.key_of.key(&value)) {
            Slot::Occupied(existing) => (Position(Link::Node(existing)), false),
            Slot::Vacant(parent, side) => (Position(Link::Node(self.raw.link(parent, side, value))), true),
        }
    }

    /// Fallible [`insert_unique`](RBTree::insert_unique).
    ///
    /// # Errors
    ///
    /// Returns [`TreeError`](crate::TreeError) if a node could not be
    /// allocated. The tree is left unmodified and `value` is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RBTree;
    ///
    /// let mut tree = RBTree::new();
    /// assert_eq!(tree.try_insert_unique(1).map(|(_, inserted)| inserted), Ok(true));
    /// assert_eq!(tree.try_insert_unique(1).map(|(_, inserted)| inserted), Ok(false));
    /// ```
    pub fn try_insert_unique(&mut self, value: V) -> TreeResult<(Position, bool)> {
        match self.unique_slot(self.key_of.key(&value)) {
            Slot::Occupied(existing) => Ok((Position(Link::Node(existing)), false)),
            Slot::Vacant(parent, side) => {
                let handle = self.raw.try_link(parent, side, value)?;
                Ok((Position(Link::Node(handle)), true))
            }
        }
    }

    /// Inserts `value`, after any elements with an equivalent key.
    ///
    /// # Panics
    ///
    /// Panics if node storage cannot grow; see
    /// [`try_insert_equal`](RBTree::try_insert_equal).
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::{First, NaturalOrder, RBTree};
    ///
    /// let mut log = RBTree::with_comparator(First, NaturalOrder);
    /// log.insert_equal((2, "b"));
    /// log.insert_equal((1, "a"));
    /// log.insert_equal((2, "c"));
    /// let entries: Vec<_> = log.iter().map(|&(_, s)| s).collect();
    /// assert_eq!(entries, ["a", "b", "c"]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn insert_equal(&mut self, value: V) -> Position {
        let (parent, side) = self.equal_slot(self.key_of.key(&value));
        Position(Link::Node(self.raw.link(parent, side, value)))
    }

    /// Fallible [`insert_equal`](RBTree::insert_equal).
    ///
    /// # Errors
    ///
    /// Returns [`TreeError`](crate::TreeError) if a node could not be
    /// allocated. The tree is left unmodified and `value` is dropped.
    pub fn try_insert_equal(&mut self, value: V) -> TreeResult<Position> {
        let (parent, side) = self.equal_slot(self.key_of.key(&value));
        let handle = self.raw.try_link(parent, side, value)?;
        Ok(Position(Link::Node(handle)))
    }

    /// Position of the first element whose key is equivalent to `key`, or
    /// `end()` if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RBTree;
    ///
    /// let mut tree = RBTree::new();
    /// tree.insert_unique(4);
    /// assert_eq!(tree.get(tree.find(&4)), Some(&4));
    /// assert_eq!(tree.find(&5), tree.end());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn find(&self, key: &P::Key) -> Position {
        match self.lower_bound(key).0 {
            Link::Node(h) if !self.compare.less(key, self.key(h)) => Position(Link::Node(h)),
            _ => Position::END,
        }
    }

    /// Returns `true` if an element with a key equivalent to `key` is present.
    #[must_use]
    pub fn contains(&self, key: &P::Key) -> bool {
        !self.find(key).is_end()
    }

    /// Position of the first element whose key does not order before `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RBTree;
    ///
    /// let mut tree = RBTree::new();
    /// for v in [10, 20, 30] {
    ///     tree.insert_unique(v);
    /// }
    /// assert_eq!(tree[tree.lower_bound(&20)], 20);
    /// assert_eq!(tree[tree.lower_bound(&21)], 30);
    /// assert_eq!(tree.lower_bound(&31), tree.end());
    /// ```
    #[must_use]
    pub fn lower_bound(&self, key: &P::Key) -> Position {
        let mut result = Link::Header;
        let mut current = self.raw.root();
        while let Some(handle) = current {
            if self.compare.less(self.key(handle), key) {
                current = self.raw.child(handle, Side::Right);
            } else {
                result = Link::Node(handle);
                current = self.raw.child(handle, Side::Left);
            }
        }
        Position(result)
    }

    /// Position of the first element whose key orders after `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RBTree;
    ///
    /// let mut tree = RBTree::new();
    /// for v in [10, 20, 30] {
    ///     tree.insert_unique(v);
    /// }
    /// assert_eq!(tree[tree.upper_bound(&20)], 30);
    /// assert_eq!(tree[tree.upper_bound(&5)], 10);
    /// assert_eq!(tree.upper_bound(&30), tree.end());
    /// ```
    #[must_use]
    pub fn upper_bound(&self, key: &P::Key) -> Position {
        let mut result = Link::Header;
        let mut current = self.raw.root();
        while let Some(handle) = current {
            if self.compare.less(key, self.key(handle)) {
                result = Link::Node(handle);
                current = self.raw.child(handle, Side::Left);
            } else {
                current = self.raw.child(handle, Side::Right);
            }
        }
        Position(result)
    }

    /// The half-open range `[lower_bound(key), upper_bound(key))` of elements
    /// equivalent to `key`.
    #[must_use]
    pub fn equal_range(&self, key: &P::Key) -> (Position, Position) {
        (self.lower_bound(key), self.upper_bound(key))
    }

    /// Number of elements with a key equivalent to `key`.
    ///
    /// # Complexity
    ///
    /// O(log n + k) for k matching elements.
    #[must_use]
    pub fn count(&self, key: &P::Key) -> usize {
        let (mut position, end) = self.equal_range(key);
        let mut count = 0;
        while position != end {
            count += 1;
            position = self.next(position);
        }
        count
    }

    /// Erases every element with a key equivalent to `key`, returning how
    /// many were removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RBTree;
    ///
    /// let mut tree = RBTree::new();
    /// for v in [1, 2, 2, 2, 3] {
    ///     tree.insert_equal(v);
    /// }
    /// assert_eq!(tree.erase_key(&2), 3);
    /// assert_eq!(tree.erase_key(&2), 0);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn erase_key(&mut self, key: &P::Key) -> usize {
        let (mut position, end) = self.equal_range(key);
        let mut removed = 0;
        while position != end {
            position = self.erase(position);
            removed += 1;
        }
        removed
    }
}

impl<V: fmt::Debug, P, C> fmt::Debug for RBTree<V, P, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<V, P: Default, C: Default> Default for RBTree<V, P, C> {
    /// Creates an empty `RBTree` with default policies.
    fn default() -> Self {
        Self::with_comparator(P::default(), C::default())
    }
}

impl<V: PartialEq, P, C> PartialEq for RBTree<V, P, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<V: Eq, P, C> Eq for RBTree<V, P, C> {}

impl<V, P, C> Index<Position> for RBTree<V, P, C> {
    type Output = V;

    /// Returns the element at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is `end()` or names an erased element.
    fn index(&self, position: Position) -> &V {
        self.value(position)
    }
}

impl<'a, V, P, C> IntoIterator for &'a RBTree<V, P, C> {
    type Item = &'a V;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Iter<'a, V> {
        self.iter()
    }
}

impl<V, P, C> IntoIterator for RBTree<V, P, C> {
    type Item = V;
    type IntoIter = IntoIter<V>;

    /// Gets an owning iterator over the elements, in key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RBTree;
    ///
    /// let mut tree = RBTree::new();
    /// tree.insert_unique(2);
    /// tree.insert_unique(1);
    /// let values: Vec<_> = tree.into_iter().collect();
    /// assert_eq!(values, [1, 2]);
    /// ```
    fn into_iter(self) -> IntoIter<V> {
        IntoIter {
            inner: self.raw.into_sorted_values().into_iter(),
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        if self.remaining == 0 {
            return None;
        }
        let raw = self.raw?;
        let handle = self.front.node()?;
        self.front = raw.successor(handle);
        self.remaining -= 1;
        Some(raw.value(handle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> DoubleEndedIterator for Iter<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let raw = self.raw?;
        let handle = self.back.node()?;
        self.back = raw.predecessor(handle);
        self.remaining -= 1;
        Some(raw.value(handle))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<V> FusedIterator for Iter<'_, V> {}

impl<V> Clone for Iter<'_, V> {
    fn clone(&self) -> Self {
        Iter {
            raw: self.raw,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<V> Default for Iter<'_, V> {
    /// Creates an empty `rbtree::Iter`.
    ///
    /// ```
    /// let iter: rbtree::rbtree::Iter<'_, u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        Iter {
            raw: None,
            front: Link::Header,
            back: Link::Header,
            remaining: 0,
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for Iter<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<V> Iterator for IntoIter<V> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for IntoIter<V> {
    fn next_back(&mut self) -> Option<V> {
        self.inner.next_back()
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<V> FusedIterator for IntoIter<V> {}

impl<V> Default for IntoIter<V> {
    fn default() -> Self {
        IntoIter {
            inner: alloc::vec::Vec::new().into_iter(),
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for IntoIter<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.inner.as_slice()).finish()
    }
}
