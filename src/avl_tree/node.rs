use crate::avl_tree::tree;
use std::cmp;

/// A struct representing an internal node of an avl tree.
///
/// An empty subtree has a height of `-1`, so a leaf has a height of `0`.
pub struct Node<T> {
    pub(crate) element: T,
    pub(crate) height: i32,
    pub(crate) left: tree::Tree<T>,
    pub(crate) right: tree::Tree<T>,
}

impl<T> Node<T> {
    pub(crate) fn new(element: T) -> Self {
        Node {
            element,
            height: 0,
            left: None,
            right: None,
        }
    }

    pub(crate) fn update(&mut self) {
        self.height = cmp::max(tree::height(&self.left), tree::height(&self.right)) + 1;
    }

    /// Returns the element stored in this node.
    pub fn element(&self) -> &T {
        &self.element
    }

    /// Returns the cached height of the subtree rooted at this node.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Returns the height of the left subtree minus the height of the right subtree.
    pub fn balance_factor(&self) -> i32 {
        tree::height(&self.left) - tree::height(&self.right)
    }

    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_ref().map(|node| &**node)
    }

    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_ref().map(|node| &**node)
    }
}
