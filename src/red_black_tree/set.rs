use crate::error::{Error, Result};
use crate::red_black_tree::node::NodeRef;
use crate::red_black_tree::tree::Tree;
use std::borrow::Borrow;

/// An ordered set implemented using a red black tree.
///
/// A red black tree is a self-balancing binary search tree that colors every node red or black.
/// The root is black, a red node never has a red child, and every downward path from a node to
/// an empty subtree passes through the same number of black nodes. Together these keep the height
/// within twice the optimum.
///
/// # Examples
///
/// ```
/// use balanced_trees::red_black_tree::RedBlackSet;
///
/// let mut set = RedBlackSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
///
/// assert_eq!(set.min(), Some(&0));
/// assert!(set.contains(&3));
///
/// assert_eq!(set.remove(&0), Some(0));
/// assert_eq!(set.remove(&1), None);
/// ```
pub struct RedBlackSet<T> {
    tree: Tree<T>,
    len: usize,
}

impl<T> RedBlackSet<T> {
    /// Constructs a new, empty `RedBlackSet<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::new();
    /// ```
    pub fn new() -> Self {
        RedBlackSet {
            tree: Tree::new(),
            len: 0,
        }
    }

    /// Constructs a new, empty `RedBlackSet<T>` with node storage reserved for `capacity`
    /// elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::with_capacity(1024);
    /// assert!(set.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        RedBlackSet {
            tree: Tree::with_capacity(capacity),
            len: 0,
        }
    }

    /// Inserts a key into the set. Returns `false` and leaves the set unchanged if an equal key
    /// already exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// assert!(set.insert(1));
    /// assert!(set.contains(&1));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, key: T) -> bool
    where
        T: Ord,
    {
        let inserted = self.tree.insert(key);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes a key from the set. If the key exists in the set, it will return the removed key.
    /// Otherwise it will return `None` and leave the set unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.remove(&1), Some(1));
    /// assert_eq!(set.remove(&1), None);
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> Option<T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let ret = self.tree.remove(key);
        if ret.is_some() {
            self.len -= 1;
        }
        ret
    }

    /// Checks if a key exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.tree.contains(key)
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree.clear();
        self.len = 0;
    }

    /// Returns a read-only view of the root node. Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::{Color, RedBlackSet};
    ///
    /// let mut set = RedBlackSet::new();
    /// for key in 1..4 {
    ///     set.insert(key);
    /// }
    ///
    /// let root = set.root().unwrap();
    /// assert_eq!(root.element(), &2);
    /// assert_eq!(root.color(), Color::Black);
    /// assert!(root.parent().is_none());
    /// ```
    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        self.tree.root.map(|id| NodeRef::new(&self.tree, id))
    }

    /// Returns the minimum key of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        self.tree.min()
    }

    /// Returns the maximum key of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        self.tree.max()
    }

    /// Returns the number of black nodes on every path from the root to an empty subtree,
    /// counting the root itself. An empty set has a black height of zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// assert_eq!(set.black_height(), 0);
    /// for key in 1..5 {
    ///     set.insert(key);
    /// }
    /// assert_eq!(set.black_height(), 2);
    /// ```
    pub fn black_height(&self) -> usize {
        self.tree.black_height()
    }

    /// Checks the ordering, coloring and parent links of every node, and that the length matches
    /// the number of nodes in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// for key in 0..100 {
    ///     set.insert(key);
    /// }
    /// assert!(set.validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<()>
    where
        T: Ord,
    {
        let actual = self.tree.validate()?;
        if actual != self.len {
            return Err(Error::LenMismatch {
                expected: self.len,
                actual,
            });
        }
        Ok(())
    }
}

impl<T> Default for RedBlackSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::RedBlackSet;
    use crate::red_black_tree::{Color, NodeRef};

    fn in_order(set: &RedBlackSet<u32>) -> Vec<u32> {
        fn walk(node: Option<NodeRef<'_, u32>>, out: &mut Vec<u32>) {
            if let Some(node) = node {
                walk(node.left(), out);
                out.push(*node.element());
                walk(node.right(), out);
            }
        }
        let mut out = Vec::new();
        walk(set.root(), &mut out);
        out
    }

    #[test]
    fn test_len_empty() {
        let set: RedBlackSet<u32> = RedBlackSet::new();
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_is_empty() {
        let set: RedBlackSet<u32> = RedBlackSet::new();
        assert!(set.is_empty());
        assert!(set.root().is_none());
    }

    #[test]
    fn test_min_max_empty() {
        let set: RedBlackSet<u32> = RedBlackSet::new();
        assert_eq!(set.min(), None);
        assert_eq!(set.max(), None);
    }

    #[test]
    fn test_empty_remove_contains() {
        let mut set: RedBlackSet<u32> = RedBlackSet::new();
        assert_eq!(set.remove(&1), None);
        assert!(!set.contains(&1));
        assert_eq!(set.validate(), Ok(()));
    }

    #[test]
    fn test_insert() {
        let mut set = RedBlackSet::new();
        assert!(set.insert(1));
        assert!(set.contains(&1));
        assert_eq!(set.root().map(|node| node.color()), Some(Color::Black));
    }

    #[test]
    fn test_insert_duplicate() {
        let mut set = RedBlackSet::new();
        assert!(set.insert(1));
        assert!(!set.insert(1));
        assert_eq!(set.len(), 1);
        assert!(set.contains(&1));
    }

    #[test]
    fn test_remove() {
        let mut set = RedBlackSet::new();
        set.insert(1);
        assert_eq!(set.remove(&1), Some(1));
        assert!(!set.contains(&1));
        assert!(set.is_empty());
    }

    #[test]
    fn test_min_max() {
        let mut set = RedBlackSet::new();
        set.insert(1);
        set.insert(3);
        set.insert(5);

        assert_eq!(set.min(), Some(&1));
        assert_eq!(set.max(), Some(&5));
    }

    #[test]
    fn test_borrowed_keys() {
        let mut set = RedBlackSet::new();
        set.insert(String::from("b"));
        set.insert(String::from("a"));

        assert!(set.contains("a"));
        assert_eq!(set.remove("b"), Some(String::from("b")));
        assert_eq!(set.validate(), Ok(()));
    }

    #[test]
    fn test_parent_links() {
        let mut set = RedBlackSet::new();
        for key in 0..32 {
            set.insert(key);
        }

        fn check(node: NodeRef<'_, u32>) {
            for child in node.left().into_iter().chain(node.right()) {
                assert_eq!(child.parent().map(|parent| *parent.element()), Some(*node.element()));
                check(child);
            }
        }
        check(set.root().unwrap());
    }

    #[test]
    fn test_insert_then_remove_scenario() {
        let mut set = RedBlackSet::new();
        for key in &[10, 20, 30, 15, 25, 5] {
            set.insert(*key);
        }
        assert_eq!(set.validate(), Ok(()));
        assert!(set.root().unwrap().is_black());
        assert_eq!(in_order(&set), vec![5, 10, 15, 20, 25, 30]);

        assert_eq!(set.remove(&20), Some(20));
        assert_eq!(set.validate(), Ok(()));
        assert_eq!(in_order(&set), vec![5, 10, 15, 25, 30]);
        assert!(!set.contains(&20));
    }

    #[test]
    fn test_clear() {
        let mut set = RedBlackSet::new();
        set.insert(1);
        set.insert(2);
        set.clear();
        assert!(set.is_empty());
        assert!(set.root().is_none());
        assert!(set.insert(1));
        assert_eq!(set.validate(), Ok(()));
    }
}
