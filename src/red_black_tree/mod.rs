//! Self-balancing binary search tree that uses a color bit to ensure that the tree remains
//! approximately balanced during insertions and deletions.
//!
//! Both insertion and deletion fix the tree up on the way down: insertion splits nodes with two
//! red children before descending past them, and deletion makes sure the node it descends into is
//! red, so that unlinking the final leaf never shortens a black path.

mod node;
mod set;
mod tree;

pub use self::node::{Color, NodeRef};
pub use self::set::RedBlackSet;
