mod arena;
mod handle;
mod node;
mod raw_tree;
mod rebalance;
mod traverse;

pub(crate) use handle::Handle;
#[cfg(test)]
pub(crate) use node::Color;
pub(crate) use node::{Link, Side};
pub(crate) use raw_tree::RawTree;
