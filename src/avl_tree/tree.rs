use crate::avl_tree::node::Node;
use crate::error::{Error, Result};
use std::borrow::Borrow;
use std::cmp::{self, Ordering};
use std::mem;

const ALLOWED_IMBALANCE: i32 = 1;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn height<T>(tree: &Tree<T>) -> i32 {
    match tree {
        None => -1,
        Some(node) => node.height,
    }
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

fn rotate_left_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = Some(rotate_left(child));
    rotate_right(node)
}

fn rotate_right_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = Some(rotate_right(child));
    rotate_left(node)
}

// restores the height invariant at the root of `tree`, whose subtrees are already balanced and
// differ in height by at most two
fn balance<T>(tree: &mut Tree<T>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    let left_height = height(&node.left);
    let right_height = height(&node.right);

    if left_height - right_height > ALLOWED_IMBALANCE {
        // ties favor the single rotation
        let outer_is_taller = match node.left {
            Some(ref child) => height(&child.left) >= height(&child.right),
            None => unreachable!(),
        };
        if outer_is_taller {
            trace!("avl: single right rotation");
            node = rotate_right(node);
        } else {
            trace!("avl: left-right double rotation");
            node = rotate_left_right(node);
        }
    } else if right_height - left_height > ALLOWED_IMBALANCE {
        let outer_is_taller = match node.right {
            Some(ref child) => height(&child.right) >= height(&child.left),
            None => unreachable!(),
        };
        if outer_is_taller {
            trace!("avl: single left rotation");
            node = rotate_left(node);
        } else {
            trace!("avl: right-left double rotation");
            node = rotate_right_left(node);
        }
    }

    node.update();
    *tree = Some(node);
}

// precondition: there exists a minimum node in the tree
fn remove_min<T>(tree: &mut Tree<T>) -> Box<Node<T>> {
    if let Some(ref mut node) = *tree {
        if node.left.is_some() {
            let ret = remove_min(&mut node.left);
            balance(tree);
            return ret;
        }
    }

    let mut node = tree.take().expect("Expected a non-empty tree.");
    *tree = node.right.take();
    node
}

pub fn insert<T>(tree: &mut Tree<T>, element: T) -> bool
where
    T: Ord,
{
    let ret = match *tree {
        Some(ref mut node) => match element.cmp(&node.element) {
            Ordering::Less => insert(&mut node.left, element),
            Ordering::Greater => insert(&mut node.right, element),
            Ordering::Equal => return false,
        },
        None => {
            *tree = Some(Box::new(Node::new(element)));
            return true;
        },
    };

    balance(tree);
    ret
}

pub fn remove<T, V>(tree: &mut Tree<T>, key: &V) -> Option<T>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let ret = match tree.take() {
        Some(mut node) => match key.cmp(node.element.borrow()) {
            Ordering::Less => {
                let ret = remove(&mut node.left, key);
                *tree = Some(node);
                ret
            },
            Ordering::Greater => {
                let ret = remove(&mut node.right, key);
                *tree = Some(node);
                ret
            },
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                (None, right) => {
                    *tree = right;
                    let Node { element, .. } = *node;
                    Some(element)
                },
                (left, None) => {
                    *tree = left;
                    let Node { element, .. } = *node;
                    Some(element)
                },
                (left, mut right) => {
                    // the successor is unlinked from the right subtree and takes this node's place
                    let successor = remove_min(&mut right);
                    let Node { element, .. } = *successor;
                    node.left = left;
                    node.right = right;
                    let ret = mem::replace(&mut node.element, element);
                    *tree = Some(node);
                    Some(ret)
                },
            },
        },
        None => return None,
    };

    balance(tree);
    ret
}

pub fn contains<T, V>(tree: &Tree<T>, key: &V) -> bool
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut curr = tree;
    while let Some(ref node) = *curr {
        curr = match key.cmp(node.element.borrow()) {
            Ordering::Less => &node.left,
            Ordering::Greater => &node.right,
            Ordering::Equal => return true,
        };
    }
    false
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.element
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.element
    })
}

// returns the recomputed height of `tree` and counts its nodes into `len`
fn check<T>(tree: &Tree<T>, lower: Option<&T>, upper: Option<&T>, len: &mut usize) -> Result<i32>
where
    T: Ord,
{
    let node = match *tree {
        Some(ref node) => node,
        None => return Ok(-1),
    };

    let above_lower = lower.map_or(true, |lower| *lower < node.element);
    let below_upper = upper.map_or(true, |upper| node.element < *upper);
    if !above_lower || !below_upper {
        return Err(Error::OrderViolation);
    }

    *len += 1;
    let left_height = check(&node.left, lower, Some(&node.element), len)?;
    let right_height = check(&node.right, Some(&node.element), upper, len)?;
    if (left_height - right_height).abs() > ALLOWED_IMBALANCE {
        return Err(Error::Unbalanced);
    }

    let height = cmp::max(left_height, right_height) + 1;
    if height != node.height {
        return Err(Error::StaleHeight);
    }
    Ok(height)
}

/// Checks every avl invariant and returns the number of reachable nodes.
pub fn validate<T>(tree: &Tree<T>) -> Result<usize>
where
    T: Ord,
{
    let mut len = 0;
    check(tree, None, None, &mut len)?;
    Ok(len)
}
