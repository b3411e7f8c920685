use alloc::vec::Vec;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Color, Header, Link, Node, Side};
use crate::error::TreeResult;

/// The comparator-free half of the red-black tree.
///
/// Owns the node arena and the header. Everything here works on handles and
/// links only: the public `RBTree` decides *where* a value goes, this type
/// hooks it up, keeps the extrema cached and repairs the coloring.
#[derive(Clone)]
pub(crate) struct RawTree<V> {
    /// Arena owning every node.
    nodes: Arena<Node<V>>,
    /// The sentinel: root anchor, leftmost and rightmost.
    pub(super) header: Header,
}

impl<V> RawTree<V> {
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            header: Header::empty(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            header: Header::empty(),
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) fn try_reserve(&mut self, additional: usize) -> TreeResult<()> {
        log::trace!("reserving room for {additional} more nodes beyond {}", self.len());
        self.nodes.try_reserve(additional)
    }

    /// Releases every node; the header reverts to pointing at itself.
    pub(crate) fn clear(&mut self) {
        log::trace!("clearing {} nodes", self.len());
        self.nodes.clear();
        self.header = Header::empty();
    }

    pub(crate) const fn root(&self) -> Option<Handle> {
        self.header.root
    }

    pub(crate) const fn leftmost(&self) -> Link {
        self.header.leftmost
    }

    pub(crate) const fn rightmost(&self) -> Link {
        self.header.rightmost
    }

    #[inline]
    pub(crate) fn node(&self, handle: Handle) -> &Node<V> {
        self.nodes.get(handle)
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, handle: Handle) -> &mut Node<V> {
        self.nodes.get_mut(handle)
    }

    /// The node behind `handle`, or `None` if the slot has been released.
    #[inline]
    pub(crate) fn try_node(&self, handle: Handle) -> Option<&Node<V>> {
        self.nodes.try_get(handle)
    }

    #[inline]
    pub(crate) fn value(&self, handle: Handle) -> &V {
        &self.node(handle).value
    }

    #[inline]
    pub(crate) fn child(&self, handle: Handle, side: Side) -> Option<Handle> {
        self.node(handle).child(side)
    }

    #[inline]
    pub(crate) fn parent(&self, handle: Handle) -> Link {
        self.node(handle).parent
    }

    /// Null children count as black.
    #[inline]
    pub(crate) fn is_red(&self, handle: Option<Handle>) -> bool {
        handle.is_some_and(|h| self.node(h).is_red())
    }

    #[inline]
    pub(crate) fn set_color(&mut self, handle: Handle, color: Color) {
        self.node_mut(handle).color = color;
    }

    /// The side of `parent` that holds `child`.
    #[inline]
    pub(crate) fn side_of(&self, parent: Handle, child: Option<Handle>) -> Side {
        if self.node(parent).left == child { Side::Left } else { Side::Right }
    }

    /// Points whatever held `old` (a node's child slot or the header's root
    /// slot) at `new` instead. Does not touch `new`'s parent link.
    pub(crate) fn replace_child(&mut self, parent: Link, old: Handle, new: Option<Handle>) {
        match parent {
            Link::Header => self.header.root = new,
            Link::Node(p) => {
                let side = self.side_of(p, Some(old));
                debug_assert_eq!(self.child(p, side), Some(old), "`RawTree::replace_child()` - not a child!");
                self.node_mut(p).set_child(side, new);
            }
        }
    }

    /// Moves the subtree `new` into the position held by `old`.
    fn transplant(&mut self, old: Handle, new: Option<Handle>) {
        let parent = self.parent(old);
        self.replace_child(parent, old, new);
        if let Some(n) = new {
            self.node_mut(n).parent = parent;
        }
    }

    /// Hooks a new red leaf under `parent` on `side`, keeps the extrema
    /// current and rebalances.
    ///
    /// `parent` must be the header only when the tree is empty, and the chosen
    /// child slot must be vacant. Nothing is modified if allocation fails.
    pub(crate) fn try_link(&mut self, parent: Link, side: Side, value: V) -> TreeResult<Handle> {
        let handle = self.nodes.try_alloc(Node::leaf(value, parent))?;
        self.attach(handle, parent, side);
        Ok(handle)
    }

    /// As [`RawTree::try_link`], aborting on allocator failure.
    pub(crate) fn link(&mut self, parent: Link, side: Side, value: V) -> Handle {
        let handle = self.nodes.alloc(Node::leaf(value, parent));
        self.attach(handle, parent, side);
        handle
    }

    fn attach(&mut self, handle: Handle, parent: Link, side: Side) {
        self.hook(handle, parent, side);
        self.rebalance_after_insert(handle);
    }

    /// Structural hookup only: child slot and extrema.
    fn hook(&mut self, handle: Handle, parent: Link, side: Side) {
        match parent {
            Link::Header => {
                debug_assert!(self.header.root.is_none(), "`RawTree::attach()` - tree already has a root!");
                self.header.root = Some(handle);
                self.header.leftmost = Link::Node(handle);
                self.header.rightmost = Link::Node(handle);
            }
            Link::Node(p) => {
                debug_assert!(self.child(p, side).is_none(), "`RawTree::attach()` - child slot is occupied!");
                self.node_mut(p).set_child(side, Some(handle));
                match side {
                    Side::Left if self.header.leftmost == parent => self.header.leftmost = Link::Node(handle),
                    Side::Right if self.header.rightmost == parent => self.header.rightmost = Link::Node(handle),
                    _ => {}
                }
            }
        }
    }

    /// Links a red leaf without repairing the coloring, to build known shapes.
    #[cfg(test)]
    pub(crate) fn link_unbalanced(&mut self, parent: Link, side: Side, value: V) -> Handle {
        let handle = self.nodes.alloc(Node::leaf(value, parent));
        self.hook(handle, parent, side);
        handle
    }

    /// Unlinks `z`, repairs the tree and returns its value together with the
    /// link to the element that followed it.
    pub(crate) fn remove(&mut self, z: Handle) -> (V, Link) {
        let following = self.successor(z);
        if self.header.leftmost == Link::Node(z) {
            self.header.leftmost = following;
        }
        if self.header.rightmost == Link::Node(z) {
            self.header.rightmost = self.predecessor(z);
        }

        let (z_left, z_right) = (self.node(z).left, self.node(z).right);
        // `x` takes the place of the node physically spliced out; it may be
        // null, so its parent is tracked separately.
        let (x, x_parent, removed_color) = match (z_left, z_right) {
            (None, _) | (_, None) => {
                let x = z_left.or(z_right);
                let x_parent = self.parent(z);
                let color = self.node(z).color;
                self.transplant(z, x);
                (x, x_parent, color)
            }
            (Some(z_left), Some(z_right)) => {
                // Two children: the in-order successor `y` moves into `z`'s place.
                let y = self.minimum(z_right);
                let y_color = self.node(y).color;
                let x = self.node(y).right;
                let x_parent = if y == z_right {
                    Link::Node(y)
                } else {
                    let y_parent = self.parent(y);
                    self.transplant(y, x);
                    self.node_mut(y).right = Some(z_right);
                    self.node_mut(z_right).parent = Link::Node(y);
                    y_parent
                };
                self.transplant(z, Some(y));
                self.node_mut(y).left = Some(z_left);
                self.node_mut(z_left).parent = Link::Node(y);
                let z_color = self.node(z).color;
                self.set_color(y, z_color);
                (x, x_parent, y_color)
            }
        };

        if removed_color == Color::Black {
            self.rebalance_after_delete(x, x_parent);
        }

        let node = self.nodes.take(z);
        (node.value, following)
    }

    /// Consumes the tree, yielding values in order. O(n).
    pub(crate) fn into_sorted_values(mut self) -> Vec<V> {
        let mut order = Vec::with_capacity(self.len());
        let mut cursor = self.header.leftmost;
        while let Link::Node(h) = cursor {
            order.push(h);
            cursor = self.successor(h);
        }
        order.into_iter().map(|h| self.nodes.take(h).value).collect()
    }
}
