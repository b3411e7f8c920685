use core::fmt;

use super::RBTree;
use crate::position::Position;

/// A read-only cursor over an [`RBTree`].
///
/// A cursor sits on a position and moves along the same ring as
/// [`RBTree::next`] and [`RBTree::prev`]: past the largest element it rests
/// on the end marker, and from there it wraps to the smallest.
///
/// # Examples
///
/// ```
/// use rbtree::RBTree;
///
/// let mut tree = RBTree::new();
/// for v in [1, 2, 3] {
///     tree.insert_unique(v);
/// }
///
/// let mut cursor = tree.cursor_front();
/// assert_eq!(cursor.get(), Some(&1));
/// assert_eq!(cursor.peek_prev(), None);
/// cursor.move_next();
/// assert_eq!(cursor.get(), Some(&2));
/// assert_eq!(cursor.peek_next(), Some(&3));
/// ```
pub struct Cursor<'a, V, P, C> {
    tree: &'a RBTree<V, P, C>,
    position: Position,
}

impl<V, P, C> RBTree<V, P, C> {
    /// A cursor resting on `position`.
    pub fn cursor(&self, position: Position) -> Cursor<'_, V, P, C> {
        Cursor { tree: self, position }
    }

    /// A cursor on the smallest element, or on the end marker if empty.
    pub fn cursor_front(&self) -> Cursor<'_, V, P, C> {
        self.cursor(self.begin())
    }

    /// A cursor on the largest element, or on the end marker if empty.
    pub fn cursor_back(&self) -> Cursor<'_, V, P, C> {
        self.cursor(self.prev(self.end()))
    }
}

impl<'a, V, P, C> Cursor<'a, V, P, C> {
    /// Where the cursor currently rests.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// The element under the cursor, or `None` on the end marker.
    #[must_use]
    pub fn get(&self) -> Option<&'a V> {
        self.tree.get(self.position)
    }

    pub fn move_next(&mut self) {
        self.position = self.tree.next(self.position);
    }

    pub fn move_prev(&mut self) {
        self.position = self.tree.prev(self.position);
    }

    /// The element [`move_next`](Cursor::move_next) would land on.
    #[must_use]
    pub fn peek_next(&self) -> Option<&'a V> {
        self.tree.get(self.tree.next(self.position))
    }

    /// The element [`move_prev`](Cursor::move_prev) would land on.
    #[must_use]
    pub fn peek_prev(&self) -> Option<&'a V> {
        self.tree.get(self.tree.prev(self.position))
    }
}

impl<V, P, C> Clone for Cursor<'_, V, P, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V, P, C> Copy for Cursor<'_, V, P, C> {}

impl<V: fmt::Debug, P, C> fmt::Debug for Cursor<'_, V, P, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.get()).finish()
    }
}
