//! Error and result types for fallible tree operations.

use alloc::collections::TryReserveError;
use core::fmt;

/// Error returned by the `try_*` operations of [`RBTree`](crate::RBTree).
///
/// Whenever one of these is returned the tree is exactly as it was before the
/// call.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TreeError {
    /// The allocator could not provide memory for more nodes.
    AllocationFailed(TryReserveError),
    /// Every node handle is in use.
    CapacityOverflow,
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::AllocationFailed(err) => write!(f, "node allocation failed: {err}"),
            TreeError::CapacityOverflow => f.write_str("node capacity exceeded"),
        }
    }
}

impl core::error::Error for TreeError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            TreeError::AllocationFailed(err) => Some(err),
            TreeError::CapacityOverflow => None,
        }
    }
}

impl From<TryReserveError> for TreeError {
    fn from(err: TryReserveError) -> Self {
        TreeError::AllocationFailed(err)
    }
}

/// Result type for fallible tree operations.
pub type TreeResult<T> = Result<T, TreeError>;

/// A broken red-black or structural invariant, as found by
/// [`RBTree::check_invariants`](crate::RBTree::check_invariants).
///
/// Depths and counts are reported instead of values so the type stays free of
/// the tree's generic parameters.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InvariantViolation {
    /// The root of a non-empty tree is red.
    RedRoot,
    /// A red node at `depth` has a red child.
    RedRedEdge { depth: usize },
    /// Two paths below a node at `depth` see different numbers of black nodes.
    BlackHeightMismatch { depth: usize, left: usize, right: usize },
    /// The element at in-order `index` sorts before its predecessor.
    OutOfOrder { index: usize },
    /// A child at `depth` does not name its parent, or the root does not name
    /// the header.
    BrokenParentLink { depth: usize },
    /// The header's cached minimum is not the leftmost node.
    StaleLeftmost,
    /// The header's cached maximum is not the rightmost node.
    StaleRightmost,
    /// The stored length differs from the number of reachable nodes.
    LengthMismatch { stored: usize, reachable: usize },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantViolation::RedRoot => f.write_str("root is red"),
            InvariantViolation::RedRedEdge { depth } => write!(f, "red node at depth {depth} has a red child"),
            InvariantViolation::BlackHeightMismatch { depth, left, right } => {
                write!(f, "black-height mismatch below depth {depth}: left {left}, right {right}")
            }
            InvariantViolation::OutOfOrder { index } => write!(f, "element {index} is out of order"),
            InvariantViolation::BrokenParentLink { depth } => write!(f, "broken parent link at depth {depth}"),
            InvariantViolation::StaleLeftmost => f.write_str("cached leftmost is stale"),
            InvariantViolation::StaleRightmost => f.write_str("cached rightmost is stale"),
            InvariantViolation::LengthMismatch { stored, reachable } => {
                write!(f, "length mismatch: stored {stored}, reachable {reachable}")
            }
        }
    }
}

impl core::error::Error for InvariantViolation {}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec::Vec;

    #[test]
    fn try_reserve_error_converts_and_keeps_source() {
        let mut v: Vec<u64> = Vec::new();
        let err: TreeError = v.try_reserve(usize::MAX).unwrap_err().into();
        assert!(matches!(err, TreeError::AllocationFailed(_)));
        assert!(core::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("node allocation failed"));
    }

    #[test]
    fn violations_render_their_location() {
        let violation = InvariantViolation::BlackHeightMismatch { depth: 2, left: 3, right: 4 };
        assert_eq!(violation.to_string(), "black-height mismatch below depth 2: left 3, right 4");
        assert_eq!(TreeError::CapacityOverflow.to_string(), "node capacity exceeded");
    }
}
