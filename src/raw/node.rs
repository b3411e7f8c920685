use super::handle::Handle;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Color {
    Red,
    Black,
}

/// Which child slot of a node.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub(crate) const fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A non-owning structural reference: either the header or a node.
///
/// The header is its own variant rather than a node with a special color, so
/// "is this the end?" is a tag test and never a property of the coloring.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub(crate) enum Link {
    Header,
    Node(Handle),
}

impl Link {
    #[inline]
    pub(crate) const fn node(self) -> Option<Handle> {
        match self {
            Link::Header => None,
            Link::Node(h) => Some(h),
        }
    }
}

#[derive(Clone)]
pub(crate) struct Node<V> {
    pub(crate) color: Color,
    // Navigation only; the parent owns this node through its child slot.
    pub(crate) parent: Link,
    pub(crate) left: Option<Handle>,
    pub(crate) right: Option<Handle>,
    pub(crate) value: V,
}

impl<V> Node<V> {
    /// A fresh leaf. New nodes start red so black-height is untouched.
    pub(crate) const fn leaf(value: V, parent: Link) -> Self {
        Self {
            color: Color::Red,
            parent,
            left: None,
            right: None,
            value,
        }
    }

    #[inline]
    pub(crate) const fn child(&self, side: Side) -> Option<Handle> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline]
    pub(crate) fn set_child(&mut self, side: Side, child: Option<Handle>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    #[inline]
    pub(crate) fn is_red(&self) -> bool {
        self.color == Color::Red
    }
}

/// The sentinel: anchor of the root and both cached extrema.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Header {
    pub(crate) root: Option<Handle>,
    pub(crate) leftmost: Link,
    pub(crate) rightmost: Link,
}

impl Header {
    pub(crate) const fn empty() -> Self {
        Self {
            root: None,
            leftmost: Link::Header,
            rightmost: Link::Header,
        }
    }
}
