use super::RBTree;
use crate::compare::{Compare, KeyOfValue};
use crate::error::InvariantViolation;
use crate::raw::{Handle, Link, Side};

impl<V, P, C> RBTree<V, P, C>
where
    P: KeyOfValue<V>,
    C: Compare<P::Key>,
{
    /// Verifies the red-black and structural invariants of the tree.
    ///
    /// Checks that the root is black, that no red node has a red child, that
    /// every root-to-null path crosses the same number of black nodes, that
    /// parent links agree with child links, that the cached minimum and
    /// maximum are current, that the length matches the reachable nodes, and
    /// that the in-order sequence is non-decreasing under the comparator.
    ///
    /// Meant for tests and debugging; the public API cannot break these.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RBTree;
    ///
    /// let mut tree = RBTree::new();
    /// for v in 0..100 {
    ///     tree.insert_equal(v % 7);
    /// }
    /// assert_eq!(tree.check_invariants(), Ok(()));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let stored = self.raw.len();
        let Some(root) = self.raw.root() else {
            if stored != 0 {
                return Err(InvariantViolation::LengthMismatch { stored, reachable: 0 });
            }
            if self.raw.leftmost() != Link::Header {
                return Err(InvariantViolation::StaleLeftmost);
            }
            if self.raw.rightmost() != Link::Header {
                return Err(InvariantViolation::StaleRightmost);
            }
            return Ok(());
        };

        if self.raw.parent(root) != Link::Header {
            return Err(InvariantViolation::BrokenParentLink { depth: 0 });
        }
        if self.raw.is_red(Some(root)) {
            return Err(InvariantViolation::RedRoot);
        }

        let mut reachable = 0;
        self.black_height(root, 0, &mut reachable)?;
        if reachable != stored {
            return Err(InvariantViolation::LengthMismatch { stored, reachable });
        }

        if self.raw.leftmost() != Link::Node(self.raw.minimum(root)) {
            return Err(InvariantViolation::StaleLeftmost);
        }
        if self.raw.rightmost() != Link::Node(self.raw.maximum(root)) {
            return Err(InvariantViolation::StaleRightmost);
        }

        let mut previous: Option<&P::Key> = None;
        for (index, value) in self.iter().enumerate() {
            let key = self.key_of.key(value);
            if let Some(previous) = previous
                && self.compare.less(key, previous)
            {
                return Err(InvariantViolation::OutOfOrder { index });
            }
            previous = Some(key);
        }
        Ok(())
    }

    /// Black height of the subtree at `handle`, null leaves counting as one.
    fn black_height(&self, handle: Handle, depth: usize, reachable: &mut usize) -> Result<usize, InvariantViolation> {
        *reachable += 1;
        // A cycle would otherwise recurse forever.
        if *reachable > self.raw.len() {
            return Err(InvariantViolation::LengthMismatch {
                stored: self.raw.len(),
                reachable: *reachable,
            });
        }

        let red = self.raw.is_red(Some(handle));
        let mut heights = [1; 2];
        for (height, side) in heights.iter_mut().zip([Side::Left, Side::Right]) {
            let Some(child) = self.raw.child(handle, side) else {
                continue;
            };
            if self.raw.parent(child) != Link::Node(handle) {
                return Err(InvariantViolation::BrokenParentLink { depth: depth + 1 });
            }
            if red && self.raw.is_red(Some(child)) {
                return Err(InvariantViolation::RedRedEdge { depth });
            }
            *height = self.black_height(child, depth + 1, reachable)?;
        }

        let [left, right] = heights;
        if left != right {
            return Err(InvariantViolation::BlackHeightMismatch { depth, left, right });
        }
        Ok(left + usize::from(!red))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use crate::raw::{Color, Handle, Link};
    use crate::{InvariantViolation, RBTree};

    // Shape: 2 (black) over 1 and 3 (black), with 4 (red) right of 3.
    fn four() -> RBTree<i32> {
        let mut tree = RBTree::new();
        for v in 1..=4 {
            tree.insert_unique(v);
        }
        tree.check_invariants().unwrap();
        tree
    }

    fn handle_of(tree: &RBTree<i32>, key: i32) -> Handle {
        tree.find(&key).0.node().unwrap()
    }

    #[test]
    fn empty_tree_is_valid() {
        let tree: RBTree<i32> = RBTree::new();
        assert_eq!(tree.check_invariants(), Ok(()));
    }

    #[test]
    fn detects_red_root() {
        let mut tree = four();
        let root = tree.raw.root().unwrap();
        tree.raw.set_color(root, Color::Red);
        assert_eq!(tree.check_invariants(), Err(InvariantViolation::RedRoot));
    }

    #[test]
    fn detects_red_red_edge() {
        let mut tree = four();
        let three = handle_of(&tree, 3);
        tree.raw.set_color(three, Color::Red);
        assert_eq!(tree.check_invariants(), Err(InvariantViolation::RedRedEdge { depth: 1 }));
    }

    #[test]
    fn detects_black_height_mismatch() {
        let mut tree = four();
        let four = handle_of(&tree, 4);
        tree.raw.set_color(four, Color::Black);
        assert_eq!(
            tree.check_invariants(),
            Err(InvariantViolation::BlackHeightMismatch { depth: 1, left: 1, right: 2 })
        );
    }

    #[test]
    fn detects_broken_parent_link() {
        let mut tree = four();
        let one = handle_of(&tree, 1);
        let three = handle_of(&tree, 3);
        tree.raw.node_mut(one).parent = Link::Node(three);
        assert_eq!(tree.check_invariants(), Err(InvariantViolation::BrokenParentLink { depth: 1 }));
    }

    #[test]
    fn detects_out_of_order_values() {
        let mut tree = four();
        let one = handle_of(&tree, 1);
        tree.raw.node_mut(one).value = 5;
        assert_eq!(tree.check_invariants(), Err(InvariantViolation::OutOfOrder { index: 1 }));
    }
}
