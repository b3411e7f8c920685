//! An ordered container built on a red-black tree.
//!
//! This crate provides [`RBTree`], a self-balancing binary search tree that
//! keeps values sorted by a key projected out of each value. It serves as the
//! shared engine behind ordered sets, multisets, maps and multimaps:
//!
//! - [`insert_unique`](RBTree::insert_unique) - Insert unless an equivalent key is present
//! - [`insert_equal`](RBTree::insert_equal) - Always insert, after any equivalent keys
//! - [`find`](RBTree::find), [`lower_bound`](RBTree::lower_bound),
//!   [`upper_bound`](RBTree::upper_bound) - Ordered lookup in O(log n)
//! - [`erase`](RBTree::erase) - Remove by [`Position`], returning the following position
//!
//! # Example
//!
//! ```
//! use rbtree::{First, NaturalOrder, RBTree};
//!
//! // A map: values are (key, payload) pairs ordered by their first field.
//! let mut scores = RBTree::with_comparator(First, NaturalOrder);
//! scores.insert_unique(("Alice", 100));
//! scores.insert_unique(("Bob", 85));
//! scores.insert_unique(("Carol", 92));
//!
//! // A second "Bob" is refused and the existing entry is returned.
//! let (bob, inserted) = scores.insert_unique(("Bob", 0));
//! assert!(!inserted);
//! assert_eq!(scores[bob], ("Bob", 85));
//!
//! // Positions walk the tree in key order.
//! let names: Vec<_> = scores.iter().map(|&(name, _)| name).collect();
//! assert_eq!(names, ["Alice", "Bob", "Carol"]);
//! assert_eq!(scores.next(bob), scores.find(&"Carol"));
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Pluggable ordering** - Any [`KeyOfValue`] projection and [`Compare`] strict weak order
//! - **Stable positions** - Inserting never invalidates a [`Position`]; erasing invalidates only the erased one
//! - **Fallible allocation** - `try_*` variants report [`TreeError`] instead of aborting
//!
//! # Implementation
//!
//! Nodes live in a contiguous arena and refer to each other through compact
//! handles. A header outside the arena holds the root and caches the minimum
//! and maximum, and doubles as the end marker, so positions form a ring:
//! stepping forward from the end reaches the minimum and stepping back from
//! the end reaches the maximum.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod compare;
mod error;
mod position;
mod raw;

pub mod rbtree;

pub use compare::{Compare, First, Identity, KeyOfValue, NaturalOrder, ReverseOrder};
pub use error::{InvariantViolation, TreeError, TreeResult};
pub use position::Position;
pub use rbtree::RBTree;
