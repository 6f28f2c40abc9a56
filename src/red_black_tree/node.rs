use crate::arena::NodeId;
use crate::red_black_tree::tree::Tree;

/// An enum representing the color of a node in a red black tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Color {
    Red,
    Black,
}

/// A struct representing an internal node of a red black tree.
///
/// Child links own their subtrees through the arena. The parent link is only a lookup handle and
/// is `None` exactly for the root.
pub struct Node<T> {
    pub element: T,
    pub color: Color,
    pub parent: Option<NodeId>,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

impl<T> Node<T> {
    pub fn new(element: T) -> Self {
        Node {
            element,
            color: Color::Red,
            parent: None,
            left: None,
            right: None,
        }
    }
}

/// A read-only view of a node in a `RedBlackSet<T>`.
///
/// # Examples
///
/// ```
/// use balanced_trees::red_black_tree::{Color, RedBlackSet};
///
/// let mut set = RedBlackSet::new();
/// set.insert(2);
/// set.insert(1);
///
/// let root = set.root().unwrap();
/// assert_eq!(root.element(), &2);
/// assert_eq!(root.color(), Color::Black);
///
/// let left = root.left().unwrap();
/// assert_eq!(left.element(), &1);
/// assert!(left.is_red());
/// assert_eq!(left.parent().map(|node| *node.element()), Some(2));
/// ```
pub struct NodeRef<'a, T> {
    tree: &'a Tree<T>,
    id: NodeId,
}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>, id: NodeId) -> Self {
        NodeRef { tree, id }
    }

    fn node(&self) -> &'a Node<T> {
        let tree: &'a Tree<T> = self.tree;
        &tree.arena[self.id]
    }

    fn relative(&self, id: Option<NodeId>) -> Option<NodeRef<'a, T>> {
        id.map(|id| NodeRef::new(self.tree, id))
    }

    /// Returns the element stored in this node.
    pub fn element(&self) -> &'a T {
        &self.node().element
    }

    /// Returns the color of this node.
    pub fn color(&self) -> Color {
        self.node().color
    }

    pub fn is_red(&self) -> bool {
        self.color() == Color::Red
    }

    pub fn is_black(&self) -> bool {
        self.color() == Color::Black
    }

    /// Returns the left child of this node, if any.
    pub fn left(&self) -> Option<NodeRef<'a, T>> {
        self.relative(self.node().left)
    }

    /// Returns the right child of this node, if any.
    pub fn right(&self) -> Option<NodeRef<'a, T>> {
        self.relative(self.node().right)
    }

    /// Returns the parent of this node, or `None` for the root.
    pub fn parent(&self) -> Option<NodeRef<'a, T>> {
        self.relative(self.node().parent)
    }
}

impl<'a, T> Clone for NodeRef<'a, T> {
    fn clone(&self) -> Self {
        NodeRef::new(self.tree, self.id)
    }
}

impl<'a, T> Copy for NodeRef<'a, T> {}
