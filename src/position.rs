use crate::raw::Link;

/// A bidirectional position in an [`RBTree`](crate::RBTree): an element, or
/// the end marker one past the maximum.
///
/// Positions are plain handles. They do not borrow the tree, so they can be
/// kept across mutations and passed back to [`erase`](crate::RBTree::erase).
/// Inserting never invalidates a position; erasing invalidates only the
/// position of the erased element. Using an invalidated position is a
/// contract error: it panics if the slot is still vacant and may name an
/// unrelated element once the slot has been reused.
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
///
/// let mut pos = tree.begin();
/// let mut seen = Vec::new();
/// while pos != tree.end() {
///     seen.push(*tree.value(pos));
///     pos = tree.next(pos);
/// }
/// assert_eq!(seen, [1, 2, 3]);
/// assert_eq!(tree.get(tree.end()), None);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct Position(pub(crate) Link);

impl Position {
    /// The end marker of every tree.
    pub(crate) const END: Position = Position(Link::Header);

    /// Returns `true` if this is the end marker.
    #[must_use]
    pub const fn is_end(self) -> bool {
        matches!(self.0, Link::Header)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::raw::Handle;
    use static_assertions::assert_eq_size;

    assert_eq_size!(Position, Option<Handle>);

    #[test]
    fn end_is_header() {
        assert!(Position::END.is_end());
        assert!(!Position(Link::Node(Handle::from_index(0))).is_end());
    }
}
