//! Rotations and the red-black repair loops.
//!
//! Both fixups are written once over [`Side`] so each left case and its
//! mirror share a single code path.

use super::handle::Handle;
use super::node::{Color, Link, Side};
use super::raw_tree::RawTree;

impl<V> RawTree<V> {
    /// Rotates `x` down towards `side`; its child on the opposite side takes
    /// its place. In-order sequence and colors are unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `x` has no child on the opposite side.
    pub(crate) fn rotate(&mut self, x: Handle, side: Side) {
        let y = self.child(x, side.opposite()).expect("`RawTree::rotate()` - pivot has no child to lift!");
        let inner = self.child(y, side);

        self.node_mut(x).set_child(side.opposite(), inner);
        if let Some(inner) = inner {
            self.node_mut(inner).parent = Link::Node(x);
        }

        let x_parent = self.parent(x);
        self.node_mut(y).parent = x_parent;
        self.replace_child(x_parent, x, Some(y));

        self.node_mut(y).set_child(side, Some(x));
        self.node_mut(x).parent = Link::Node(y);
    }

    /// Restores the coloring rules after `z` was linked in as a red leaf.
    pub(crate) fn rebalance_after_insert(&mut self, mut z: Handle) {
        while let Link::Node(mut parent) = self.parent(z) {
            if !self.node(parent).is_red() {
                break;
            }
            // A red parent is never the root, so the grandparent is a node.
            let Link::Node(grandparent) = self.parent(parent) else {
                break;
            };
            let side = self.side_of(grandparent, Some(parent));
            let uncle = self.child(grandparent, side.opposite());

            if let Some(uncle) = uncle
                && self.node(uncle).is_red()
            {
                log::trace!("insert fixup: red uncle, recoloring");
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grandparent, Color::Red);
                z = grandparent;
                continue;
            }

            if self.child(parent, side.opposite()) == Some(z) {
                log::trace!("insert fixup: inner child, straightening");
                self.rotate(parent, side);
                z = parent;
                parent = self.parent(z).node().expect("`RawTree::rebalance_after_insert()` - rotation lost parent!");
            }
            log::trace!("insert fixup: outer child, rotating grandparent");
            self.set_color(parent, Color::Black);
            self.set_color(grandparent, Color::Red);
            self.rotate(grandparent, side.opposite());
            break;
        }

        if let Some(root) = self.root() {
            self.set_color(root, Color::Black);
        }
    }

    /// Restores equal black-height after a black node was spliced out.
    ///
    /// `x` is the subtree that moved into the vacated position (possibly
    /// null) and `parent` is where it now hangs.
    pub(crate) fn rebalance_after_delete(&mut self, mut x: Option<Handle>, mut parent: Link) {
        while !self.is_red(x) {
            // `x` is the root: the extra black is simply dropped.
            let Link::Node(p) = parent else {
                break;
            };
            let side = self.side_of(p, x);
            let mut sibling = self.sibling(p, side);

            if self.node(sibling).is_red() {
                log::trace!("delete fixup: red sibling");
                self.set_color(sibling, Color::Black);
                self.set_color(p, Color::Red);
                self.rotate(p, side);
                sibling = self.sibling(p, side);
            }

            let near = self.child(sibling, side);
            let far = self.child(sibling, side.opposite());
            if !self.is_red(near) && !self.is_red(far) {
                log::trace!("delete fixup: black nephews, moving up");
                self.set_color(sibling, Color::Red);
                x = Some(p);
                parent = self.parent(p);
                continue;
            }

            if !self.is_red(far) {
                log::trace!("delete fixup: red near nephew, rotating sibling");
                if let Some(near) = near {
                    self.set_color(near, Color::Black);
                }
                self.set_color(sibling, Color::Red);
                self.rotate(sibling, side.opposite());
                sibling = self.sibling(p, side);
            }

            log::trace!("delete fixup: red far nephew, rotating parent");
            let parent_color = self.node(p).color;
            self.set_color(sibling, parent_color);
            self.set_color(p, Color::Black);
            if let Some(far) = self.child(sibling, side.opposite()) {
                self.set_color(far, Color::Black);
            }
            self.rotate(p, side);
            x = self.root();
            break;
        }

        if let Some(x) = x {
            self.set_color(x, Color::Black);
        }
    }

    /// The child of `p` opposite to `side`. A doubly-black position always
    /// has one, since its sibling subtree has black-height of at least one.
    fn sibling(&self, p: Handle, side: Side) -> Handle {
        self.child(p, side.opposite()).expect("`RawTree::rebalance_after_delete()` - missing sibling!")
    }
}
