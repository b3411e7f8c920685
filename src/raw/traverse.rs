use super::handle::Handle;
use super::node::{Link, Side};
use super::raw_tree::RawTree;

impl<V> RawTree<V> {
    /// Leftmost node of the subtree rooted at `handle`.
    pub(crate) fn minimum(&self, handle: Handle) -> Handle {
        self.extreme(handle, Side::Left)
    }

    /// Rightmost node of the subtree rooted at `handle`.
    pub(crate) fn maximum(&self, handle: Handle) -> Handle {
        self.extreme(handle, Side::Right)
    }

    fn extreme(&self, mut handle: Handle, side: Side) -> Handle {
        while let Some(child) = self.child(handle, side) {
            handle = child;
        }
        handle
    }

    /// In-order successor of `handle`, or the header past the maximum.
    pub(crate) fn successor(&self, handle: Handle) -> Link {
        self.step(handle, Side::Right)
    }

    /// In-order predecessor of `handle`, or the header before the minimum.
    pub(crate) fn predecessor(&self, handle: Handle) -> Link {
        self.step(handle, Side::Left)
    }

    /// One in-order step towards `side`: the nearest node of the subtree on
    /// that side, else the first ancestor we are not on the `side` of.
    fn step(&self, handle: Handle, side: Side) -> Link {
        if let Some(child) = self.child(handle, side) {
            return Link::Node(self.extreme(child, side.opposite()));
        }
        let mut current = handle;
        loop {
            match self.parent(current) {
                Link::Header => return Link::Header,
                Link::Node(parent) if self.child(parent, side) == Some(current) => current = parent,
                Link::Node(parent) => return Link::Node(parent),
            }
        }
    }

    /// Advances a position. The header's successor is the minimum, so
    /// positions form a ring through the end marker.
    pub(crate) fn next(&self, link: Link) -> Link {
        match link {
            Link::Header => self.leftmost(),
            Link::Node(h) => self.successor(h),
        }
    }

    /// Retreats a position; the header's predecessor is the maximum.
    pub(crate) fn prev(&self, link: Link) -> Link {
        match link {
            Link::Header => self.rightmost(),
            Link::Node(h) => self.predecessor(h),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    /// Builds a balanced tree of `0..n` by linking at the maximum.
    fn ascending(n: u32) -> RawTree<u32> {
        let mut tree = RawTree::new();
        for value in 0..n {
            let parent = tree.rightmost();
            tree.link(parent, Side::Right, value);
        }
        tree
    }

    fn walk(tree: &RawTree<u32>, from: Link, step: impl Fn(&RawTree<u32>, Link) -> Link) -> Vec<u32> {
        let mut out = Vec::new();
        let mut cursor = from;
        while let Link::Node(h) = cursor {
            out.push(*tree.value(h));
            cursor = step(tree, cursor);
        }
        out
    }

    #[test]
    fn empty_tree_wraps_to_header() {
        let tree: RawTree<u32> = RawTree::new();
        assert_eq!(tree.next(Link::Header), Link::Header);
        assert_eq!(tree.prev(Link::Header), Link::Header);
    }

    #[test]
    fn header_neighbours_are_the_extrema() {
        let tree = ascending(10);
        assert_eq!(tree.next(Link::Header), tree.leftmost());
        assert_eq!(tree.prev(Link::Header), tree.rightmost());
        let root = tree.root().unwrap();
        assert_eq!(Link::Node(tree.minimum(root)), tree.leftmost());
        assert_eq!(Link::Node(tree.maximum(root)), tree.rightmost());
    }

    #[test]
    fn stepping_off_either_end_reaches_header() {
        let tree = ascending(5);
        let Link::Node(first) = tree.leftmost() else { panic!("empty tree") };
        let Link::Node(last) = tree.rightmost() else { panic!("empty tree") };
        assert_eq!(tree.predecessor(first), Link::Header);
        assert_eq!(tree.successor(last), Link::Header);
    }

    proptest! {
        #[test]
        fn forward_and_backward_walks_agree(n in 0u32..300) {
            let tree = ascending(n);
            let forward = walk(&tree, tree.leftmost(), RawTree::next);
            let mut backward = walk(&tree, tree.rightmost(), RawTree::prev);
            backward.reverse();
            let expected: Vec<u32> = (0..n).collect();
            prop_assert_eq!(&forward, &expected);
            prop_assert_eq!(&backward, &expected);
        }
    }
}
