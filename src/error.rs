use std::error;
use std::fmt;
use std::result;

/// An enum representing a broken tree invariant found by `validate`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The root of a red black tree is red.
    RedRoot,
    /// A red node has a red child.
    ConsecutiveRed,
    /// Two downward paths from the same node pass through a different number of black nodes.
    BlackHeightMismatch,
    /// A node's parent link does not point at the node holding it as a child.
    ParentMismatch,
    /// An in-order traversal is not strictly increasing.
    OrderViolation,
    /// A node's cached height differs from the height of its subtree.
    StaleHeight,
    /// The heights of a node's subtrees differ by more than one.
    Unbalanced,
    /// The stored length differs from the number of reachable nodes.
    LenMismatch { expected: usize, actual: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::RedRoot => write!(f, "root node is red"),
            Error::ConsecutiveRed => write!(f, "red node has a red child"),
            Error::BlackHeightMismatch => write!(f, "black heights of sibling paths differ"),
            Error::ParentMismatch => write!(f, "parent link is inconsistent with child link"),
            Error::OrderViolation => write!(f, "elements are not in strictly increasing order"),
            Error::StaleHeight => write!(f, "cached node height is stale"),
            Error::Unbalanced => write!(f, "subtree heights differ by more than one"),
            Error::LenMismatch { expected, actual } => write!(
                f,
                "length is {} but {} nodes are reachable from the root",
                expected, actual,
            ),
        }
    }
}

/// Convenience `Result` type for invariant checks.
pub type Result<T> = result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Error::RedRoot), "root node is red");
        assert_eq!(
            format!("{}", Error::LenMismatch { expected: 2, actual: 1 }),
            "length is 2 but 1 nodes are reachable from the root",
        );
    }
}
