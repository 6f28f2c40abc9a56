use crate::arena::{NodeArena, NodeId};
use crate::error::{Error, Result};
use crate::red_black_tree::node::{Color, Node};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

/// The node graph of a red black tree.
///
/// Insertion and removal are single top-down passes. Every visited node is fixed up before the
/// descent continues, so no pass ever walks back up towards the root.
pub struct Tree<T> {
    pub arena: NodeArena<Node<T>>,
    pub root: Option<NodeId>,
}

impl<T> Tree<T> {
    pub fn new() -> Self {
        Tree {
            arena: NodeArena::new(),
            root: None,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Tree {
            arena: NodeArena::with_capacity(capacity),
            root: None,
        }
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    fn color(&self, id: NodeId) -> Color {
        self.arena[id].color
    }

    fn is_red(&self, id: Option<NodeId>) -> bool {
        id.map_or(false, |id| self.color(id) == Color::Red)
    }

    // an absent subtree is neither red nor black
    fn is_black(&self, id: Option<NodeId>) -> bool {
        id.map_or(false, |id| self.color(id) == Color::Black)
    }

    fn set_color(&mut self, id: Option<NodeId>, color: Color) {
        if let Some(id) = id {
            self.arena[id].color = color;
        }
    }

    fn left_of(&self, id: NodeId) -> Option<NodeId> {
        self.arena[id].left
    }

    fn right_of(&self, id: NodeId) -> Option<NodeId> {
        self.arena[id].right
    }

    fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.arena[id].parent
    }

    fn sibling_of(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.parent_of(id)?;
        if self.left_of(parent) == Some(id) {
            self.right_of(parent)
        } else {
            self.left_of(parent)
        }
    }

    fn has_two_children(&self, id: NodeId) -> bool {
        self.left_of(id).is_some() && self.right_of(id).is_some()
    }

    fn has_red_child(&self, id: NodeId) -> bool {
        self.is_red(self.left_of(id)) || self.is_red(self.right_of(id))
    }

    fn has_two_black_children(&self, id: NodeId) -> bool {
        let (left, right) = (self.left_of(id), self.right_of(id));
        (left.is_none() && right.is_none()) || (self.is_black(left) && self.is_black(right))
    }

    fn set_left(&mut self, id: NodeId, child: Option<NodeId>) {
        self.arena[id].left = child;
        if let Some(child) = child {
            self.arena[child].parent = Some(id);
        }
    }

    fn set_right(&mut self, id: NodeId, child: Option<NodeId>) {
        self.arena[id].right = child;
        if let Some(child) = child {
            self.arena[child].parent = Some(id);
        }
    }

    // makes `new` take the place of `old` under `parent`, or at the root if there is no parent
    fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: NodeId) {
        match parent {
            None => {
                self.arena[new].parent = None;
                self.root = Some(new);
            },
            Some(parent) => {
                if self.left_of(parent) == Some(old) {
                    self.set_left(parent, Some(new));
                } else {
                    self.set_right(parent, Some(new));
                }
            },
        }
    }

    // promotes the left child of `id` and returns it
    fn rotate_right(&mut self, id: NodeId) -> NodeId {
        let child = self
            .left_of(id)
            .expect("Expected left child node to be `Some`.");
        let parent = self.parent_of(id);
        self.set_left(id, self.right_of(child));
        self.set_right(child, Some(id));
        self.replace_child(parent, id, child);
        child
    }

    // promotes the right child of `id` and returns it
    fn rotate_left(&mut self, id: NodeId) -> NodeId {
        let child = self
            .right_of(id)
            .expect("Expected right child node to be `Some`.");
        let parent = self.parent_of(id);
        self.set_right(id, self.left_of(child));
        self.set_left(child, Some(id));
        self.replace_child(parent, id, child);
        child
    }

    // promotes the right child of the left child of `id` and returns it
    fn rotate_left_right(&mut self, id: NodeId) -> NodeId {
        let child = self
            .left_of(id)
            .expect("Expected left child node to be `Some`.");
        self.rotate_left(child);
        self.rotate_right(id)
    }

    // promotes the left child of the right child of `id` and returns it
    fn rotate_right_left(&mut self, id: NodeId) -> NodeId {
        let child = self
            .right_of(id)
            .expect("Expected right child node to be `Some`.");
        self.rotate_right(child);
        self.rotate_left(id)
    }

    fn min_node(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.left_of(id) {
            id = left;
        }
        id
    }

    fn max_node(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self.right_of(id) {
            id = right;
        }
        id
    }

    fn swap_elements(&mut self, a: NodeId, b: NodeId) {
        if let Some((x, y)) = self.arena.get_pair_mut(a, b) {
            mem::swap(&mut x.element, &mut y.element);
        }
    }

    // resolves a red node `id` under a red parent by rotating at the grandparent
    fn balance_after_insert(&mut self, id: NodeId) {
        let parent = match self.parent_of(id) {
            Some(parent) => parent,
            None => return,
        };
        if self.color(id) != Color::Red || self.color(parent) != Color::Red {
            return;
        }
        let grandparent = match self.parent_of(parent) {
            Some(grandparent) => grandparent,
            None => return,
        };

        let parent_is_left = self.left_of(grandparent) == Some(parent);
        let node_is_left = self.left_of(parent) == Some(id);
        self.set_color(Some(grandparent), Color::Red);
        match (parent_is_left, node_is_left) {
            (true, true) => {
                trace!("red black insert: left-left rotation");
                self.set_color(Some(parent), Color::Black);
                self.rotate_right(grandparent);
            },
            (true, false) => {
                trace!("red black insert: left-right rotation");
                self.set_color(Some(id), Color::Black);
                self.rotate_left_right(grandparent);
            },
            (false, false) => {
                trace!("red black insert: right-right rotation");
                self.set_color(Some(parent), Color::Black);
                self.rotate_left(grandparent);
            },
            (false, true) => {
                trace!("red black insert: right-left rotation");
                self.set_color(Some(id), Color::Black);
                self.rotate_right_left(grandparent);
            },
        }
    }

    fn flip_colors(&mut self, id: NodeId) {
        let (left, right) = (self.left_of(id), self.right_of(id));
        if self.color(id) == Color::Black && self.is_red(left) && self.is_red(right) {
            trace!("red black insert: color flip");
            self.set_color(Some(id), Color::Red);
            self.set_color(left, Color::Black);
            self.set_color(right, Color::Black);
            self.balance_after_insert(id);
        }
    }

    pub fn insert(&mut self, element: T) -> bool
    where
        T: Ord,
    {
        let inserted = match self.root {
            None => {
                self.root = Some(self.arena.allocate(Node::new(element)));
                true
            },
            Some(root) => self.insert_below(root, element),
        };
        self.set_color(self.root, Color::Black);
        inserted
    }

    fn insert_below(&mut self, mut curr: NodeId, element: T) -> bool
    where
        T: Ord,
    {
        loop {
            self.flip_colors(curr);

            let ordering = element.cmp(&self.arena[curr].element);
            let next = match ordering {
                Ordering::Less => self.left_of(curr),
                Ordering::Greater => self.right_of(curr),
                Ordering::Equal => return false,
            };

            match next {
                Some(next) => curr = next,
                None => {
                    let id = self.arena.allocate(Node::new(element));
                    if ordering == Ordering::Less {
                        self.set_left(curr, Some(id));
                    } else {
                        self.set_right(curr, Some(id));
                    }
                    self.balance_after_insert(id);
                    return true;
                },
            }
        }
    }

    // rotates a red child of `id` up so that the branch the search follows is rooted at a red
    // node; `id` must have two children, one of which is red
    fn rotate_red_toward<V>(&mut self, id: NodeId, key: &V)
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let (left, right) = (self.left_of(id), self.right_of(id));
        if key.cmp(self.arena[id].element.borrow()) == Ordering::Less {
            if self.is_black(left) {
                trace!("red black remove: rotating red right child up");
                self.set_color(Some(id), Color::Red);
                self.set_color(right, Color::Black);
                self.rotate_left(id);
            }
        } else if self.is_black(right) {
            trace!("red black remove: rotating red left child up");
            self.set_color(Some(id), Color::Red);
            self.set_color(left, Color::Black);
            self.rotate_right(id);
        }
    }

    // turns `id` red using its red parent and black sibling; `id` has no red children
    fn borrow_from_sibling(&mut self, id: NodeId) {
        let parent = match self.parent_of(id) {
            Some(parent) => parent,
            None => return,
        };
        let sibling = match self.sibling_of(id) {
            Some(sibling) => sibling,
            None => return,
        };

        if self.has_two_black_children(sibling) {
            trace!("red black remove: recoloring parent and sibling");
            self.set_color(Some(parent), Color::Black);
            self.set_color(Some(id), Color::Red);
            self.set_color(Some(sibling), Color::Red);
            return;
        }

        let nephew = if self.is_red(self.left_of(sibling)) {
            self.left_of(sibling)
        } else {
            self.right_of(sibling)
        };
        let nephew = match nephew {
            Some(nephew) if self.color(nephew) == Color::Red => nephew,
            _ => return,
        };

        let sibling_is_left = self.left_of(parent) == Some(sibling);
        let nephew_is_left = self.left_of(sibling) == Some(nephew);
        self.set_color(Some(id), Color::Red);
        self.set_color(Some(parent), Color::Black);
        match (sibling_is_left, nephew_is_left) {
            (true, true) => {
                trace!("red black remove: single rotation with outer nephew");
                self.set_color(Some(sibling), Color::Red);
                self.set_color(Some(nephew), Color::Black);
                self.rotate_right(parent);
            },
            (false, false) => {
                trace!("red black remove: single rotation with outer nephew");
                self.set_color(Some(sibling), Color::Red);
                self.set_color(Some(nephew), Color::Black);
                self.rotate_left(parent);
            },
            (true, false) => {
                trace!("red black remove: double rotation with inner nephew");
                self.rotate_left_right(parent);
            },
            (false, true) => {
                trace!("red black remove: double rotation with inner nephew");
                self.rotate_right_left(parent);
            },
        }
    }

    // ensures that `id`, or the child the search for `key` continues into, is red
    fn balance_before_remove<V>(&mut self, id: NodeId, key: &V)
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        if self.color(id) == Color::Red {
            return;
        }

        let (left, right) = (self.left_of(id), self.right_of(id));
        if self.parent_of(id).is_none() {
            if self.is_black(left) && self.is_black(right) {
                trace!("red black remove: recoloring root");
                self.set_color(Some(id), Color::Red);
            } else if self.has_two_children(id) && self.has_red_child(id) {
                self.rotate_red_toward(id, key);
            }
        } else if self.has_two_black_children(id) {
            self.borrow_from_sibling(id);
        } else if self.has_two_children(id) && self.has_red_child(id) {
            self.rotate_red_toward(id, key);
        }
    }

    fn unlink_leaf(&mut self, id: NodeId) -> T {
        match self.parent_of(id) {
            None => self.root = None,
            Some(parent) => {
                if self.left_of(parent) == Some(id) {
                    self.arena[parent].left = None;
                } else {
                    self.arena[parent].right = None;
                }
            },
        }
        self.arena.free(id).element
    }

    pub fn remove<V>(&mut self, key: &V) -> Option<T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let mut ret = None;
        let mut curr = self.root;

        while let Some(id) = curr {
            self.balance_before_remove(id, key);

            curr = match key.cmp(self.arena[id].element.borrow()) {
                Ordering::Less => self.left_of(id),
                Ordering::Greater => self.right_of(id),
                Ordering::Equal => {
                    // the matched element trades places with its successor or predecessor and
                    // is then removed from the donor's position further down
                    if let Some(right) = self.right_of(id) {
                        let donor = self.min_node(right);
                        self.swap_elements(id, donor);
                        Some(right)
                    } else if let Some(left) = self.left_of(id) {
                        let donor = self.max_node(left);
                        self.swap_elements(id, donor);
                        Some(left)
                    } else {
                        ret = Some(self.unlink_leaf(id));
                        None
                    }
                },
            };
        }

        self.set_color(self.root, Color::Black);
        ret
    }

    fn find<V>(&self, key: &V) -> Option<NodeId>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let mut curr = self.root;
        while let Some(id) = curr {
            curr = match key.cmp(self.arena[id].element.borrow()) {
                Ordering::Less => self.left_of(id),
                Ordering::Greater => self.right_of(id),
                Ordering::Equal => return Some(id),
            };
        }
        None
    }

    pub fn contains<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.find(key).is_some()
    }

    pub fn min(&self) -> Option<&T> {
        self.root.map(|root| &self.arena[self.min_node(root)].element)
    }

    pub fn max(&self) -> Option<&T> {
        self.root.map(|root| &self.arena[self.max_node(root)].element)
    }

    pub fn black_height(&self) -> usize {
        let mut height = 0;
        let mut curr = self.root;
        while let Some(id) = curr {
            if self.color(id) == Color::Black {
                height += 1;
            }
            curr = self.left_of(id);
        }
        height
    }

    // returns the black height of the subtree at `id` and counts its nodes into `len`
    fn check(
        &self,
        id: Option<NodeId>,
        parent: Option<NodeId>,
        lower: Option<&T>,
        upper: Option<&T>,
        len: &mut usize,
    ) -> Result<usize>
    where
        T: Ord,
    {
        let id = match id {
            Some(id) => id,
            None => return Ok(0),
        };
        let node = &self.arena[id];

        if node.parent != parent {
            return Err(Error::ParentMismatch);
        }
        let above_lower = lower.map_or(true, |lower| *lower < node.element);
        let below_upper = upper.map_or(true, |upper| node.element < *upper);
        if !above_lower || !below_upper {
            return Err(Error::OrderViolation);
        }
        if node.color == Color::Red && self.has_red_child(id) {
            return Err(Error::ConsecutiveRed);
        }

        *len += 1;
        let left_height = self.check(node.left, Some(id), lower, Some(&node.element), len)?;
        let right_height = self.check(node.right, Some(id), Some(&node.element), upper, len)?;
        if left_height != right_height {
            return Err(Error::BlackHeightMismatch);
        }

        match node.color {
            Color::Red => Ok(left_height),
            Color::Black => Ok(left_height + 1),
        }
    }

    /// Checks every red black invariant and returns the number of reachable nodes.
    pub fn validate(&self) -> Result<usize>
    where
        T: Ord,
    {
        if self.is_red(self.root) {
            return Err(Error::RedRoot);
        }
        let mut len = 0;
        self.check(self.root, None, None, None, &mut len)?;
        Ok(len)
    }
}
