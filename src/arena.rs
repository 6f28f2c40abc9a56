//! Index-addressed node storage with slot reuse.

use std::mem;
use std::ops::{Index, IndexMut};
use std::vec::Vec;

/// A handle to an object stored in a `NodeArena<T>`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NodeId(usize);

enum Slot<T> {
    Occupied(T),
    Vacant(Option<NodeId>),
}

/// Slot storage for the nodes of a linked structure.
///
/// Objects are addressed by `NodeId` handles instead of pointers, so a structure can hold
/// back-references between its nodes without shared ownership. Freed slots are threaded onto a
/// free list and reused by later allocations. All objects are dropped when the arena is dropped.
///
/// # Examples
///
/// ```
/// use balanced_trees::arena::NodeArena;
///
/// let mut arena = NodeArena::new();
///
/// let x = arena.allocate(1);
/// assert_eq!(arena[x], 1);
///
/// arena[x] += 1;
/// assert_eq!(arena[x], 2);
///
/// assert_eq!(arena.free(x), 2);
/// assert!(arena.is_empty());
/// ```
pub struct NodeArena<T> {
    head: Option<NodeId>,
    slots: Vec<Slot<T>>,
    len: usize,
}

impl<T> NodeArena<T> {
    /// Constructs a new, empty `NodeArena<T>`.
    pub fn new() -> Self {
        NodeArena {
            head: None,
            slots: Vec::new(),
            len: 0,
        }
    }

    /// Constructs a new, empty `NodeArena<T>` with room for `capacity` objects before it
    /// reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::arena::NodeArena;
    ///
    /// let arena: NodeArena<u32> = NodeArena::with_capacity(1024);
    /// assert!(arena.capacity() >= 1024);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        NodeArena {
            head: None,
            slots: Vec::with_capacity(capacity),
            len: 0,
        }
    }

    /// Stores an object in the arena and returns its handle. Vacant slots are reused before the
    /// arena grows.
    pub fn allocate(&mut self, value: T) -> NodeId {
        self.len += 1;
        match self.head.take() {
            None => {
                self.slots.push(Slot::Occupied(value));
                NodeId(self.slots.len() - 1)
            },
            Some(id) => {
                let vacant_slot = mem::replace(&mut self.slots[id.0], Slot::Occupied(value));
                match vacant_slot {
                    Slot::Vacant(next) => {
                        self.head = next;
                        id
                    },
                    Slot::Occupied(_) => unreachable!(),
                }
            },
        }
    }

    /// Removes an object from the arena and returns it.
    ///
    /// # Panics
    ///
    /// Panics if `id` corresponds to an invalid or vacant slot.
    pub fn free(&mut self, id: NodeId) -> T {
        match self.slots.get(id.0) {
            None => panic!("Error: attempting to free invalid slot."),
            Some(Slot::Vacant(_)) => panic!("Error: attempting to free vacant slot."),
            Some(Slot::Occupied(_)) => {},
        }
        let old_slot = mem::replace(&mut self.slots[id.0], Slot::Vacant(self.head.take()));
        self.len -= 1;
        self.head = Some(id);
        match old_slot {
            Slot::Occupied(value) => value,
            Slot::Vacant(_) => unreachable!(),
        }
    }

    /// Returns an immutable reference to an object in the arena. Returns `None` if `id` does not
    /// correspond to a stored object.
    pub fn get(&self, id: NodeId) -> Option<&T> {
        match self.slots.get(id.0) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns a mutable reference to an object in the arena. Returns `None` if `id` does not
    /// correspond to a stored object.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        match self.slots.get_mut(id.0) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns mutable references to two distinct objects in the arena. Returns `None` if the
    /// handles are equal or either one does not correspond to a stored object.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_trees::arena::NodeArena;
    /// use std::mem;
    ///
    /// let mut arena = NodeArena::new();
    /// let x = arena.allocate(1);
    /// let y = arena.allocate(2);
    ///
    /// if let Some((a, b)) = arena.get_pair_mut(x, y) {
    ///     mem::swap(a, b);
    /// }
    /// assert_eq!(arena[x], 2);
    /// assert_eq!(arena[y], 1);
    /// ```
    pub fn get_pair_mut(&mut self, a: NodeId, b: NodeId) -> Option<(&mut T, &mut T)> {
        if a == b || a.0 >= self.slots.len() || b.0 >= self.slots.len() {
            return None;
        }
        let (low, high, swapped) = if a.0 < b.0 { (a.0, b.0, false) } else { (b.0, a.0, true) };
        let (head, tail) = self.slots.split_at_mut(high);
        match (&mut head[low], &mut tail[0]) {
            (Slot::Occupied(x), Slot::Occupied(y)) => {
                if swapped {
                    Some((y, x))
                } else {
                    Some((x, y))
                }
            },
            _ => None,
        }
    }

    /// Returns the number of objects stored in the arena.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the arena stores no objects.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots the arena can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Drops every stored object. Previously returned handles become invalid.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        self.len = 0;
    }
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<NodeId> for NodeArena<T> {
    type Output = T;

    fn index(&self, id: NodeId) -> &Self::Output {
        self.get(id).expect("Error: node id out of bounds.")
    }
}

impl<T> IndexMut<NodeId> for NodeArena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        self.get_mut(id).expect("Error: node id out of bounds.")
    }
}

#[cfg(test)]
mod tests {
    use super::{NodeArena, NodeId};

    #[test]
    #[should_panic]
    fn test_free_invalid_slot() {
        let mut arena: NodeArena<u32> = NodeArena::new();
        arena.free(NodeId(0));
    }

    #[test]
    #[should_panic]
    fn test_free_vacant_slot() {
        let mut arena = NodeArena::new();
        let id = arena.allocate(0);
        arena.free(id);
        arena.free(id);
    }

    #[test]
    fn test_allocate() {
        let mut arena = NodeArena::new();
        assert_eq!(arena.allocate(0), NodeId(0));
        assert_eq!(arena.allocate(0), NodeId(1));
        assert_eq!(arena.allocate(0), NodeId(2));
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn test_free_reuses_slots() {
        let mut arena = NodeArena::new();
        let x = arena.allocate(0);
        let y = arena.allocate(1);
        assert_eq!(arena.free(x), 0);
        assert_eq!(arena.free(y), 1);
        assert!(arena.is_empty());

        // freed slots are handed out most recently freed first
        assert_eq!(arena.allocate(2), y);
        assert_eq!(arena.allocate(3), x);
        assert_eq!(arena.allocate(4), NodeId(2));
    }

    #[test]
    fn test_get() {
        let mut arena = NodeArena::new();
        let id = arena.allocate(0);
        assert_eq!(arena.get(id), Some(&0));
        assert_eq!(arena.get(NodeId(1)), None);
    }

    #[test]
    fn test_get_vacant_slot() {
        let mut arena = NodeArena::new();
        let id = arena.allocate(0);
        arena.free(id);
        assert_eq!(arena.get(id), None);
        assert_eq!(arena.get_mut(id), None);
    }

    #[test]
    fn test_get_mut() {
        let mut arena = NodeArena::new();
        let id = arena.allocate(0);
        *arena.get_mut(id).unwrap() = 1;
        assert_eq!(arena.get(id), Some(&1));
    }

    #[test]
    fn test_get_pair_mut() {
        let mut arena = NodeArena::new();
        let x = arena.allocate(0);
        let y = arena.allocate(1);

        assert!(arena.get_pair_mut(x, x).is_none());

        {
            let (a, b) = arena.get_pair_mut(y, x).unwrap();
            assert_eq!((*a, *b), (1, 0));
            *a = 10;
        }
        assert_eq!(arena[y], 10);

        arena.free(y);
        assert!(arena.get_pair_mut(x, y).is_none());
    }

    #[test]
    fn test_clear() {
        let mut arena = NodeArena::new();
        arena.allocate(0);
        arena.allocate(1);
        arena.clear();
        assert!(arena.is_empty());
        assert_eq!(arena.allocate(2), NodeId(0));
    }
}
