//! Self-balancing ordered sets backed by a red black tree and an avl tree.
//!
//! Both sets store each element at most once and keep their height logarithmic in the number of
//! elements under any sequence of insertions and removals. The red black tree rebalances in a
//! single top-down pass without recursion, while the avl tree rebalances recursively on the way
//! back up from the modified leaf.
//!
//! # Examples
//!
//! ```
//! use balanced_trees::avl_tree::AvlSet;
//! use balanced_trees::red_black_tree::RedBlackSet;
//!
//! let mut rb = RedBlackSet::new();
//! let mut avl = AvlSet::new();
//! for i in 0..10 {
//!     rb.insert(i);
//!     avl.insert(i);
//! }
//!
//! assert_eq!(rb.len(), avl.len());
//! assert!(rb.validate().is_ok());
//! assert!(avl.validate().is_ok());
//! ```

#[macro_use]
extern crate log;

mod error;
pub mod arena;
pub mod avl_tree;
pub mod red_black_tree;

pub use crate::error::{Error, Result};
