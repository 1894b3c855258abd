//! Union-find (disjoint set union) over arbitrary hashable elements.
//!
//! Elements are interned into dense slots on first sight; parent links and
//! ranks live in slot-indexed vectors. `find` applies path halving and
//! `union` links by rank, which keeps the amortised cost per operation near
//! constant.
//!
//! `find`, `connected`, and `union` register unseen elements as singleton
//! sets, so they can change [`DisjointSet::count`]. Callers that need a pure
//! lookup use [`DisjointSet::contains`] or [`DisjointSet::find_registered`],
//! and can pre-register elements with [`DisjointSet::register`].

use std::{cmp::Ordering, collections::HashMap, hash::Hash};

/// Disjoint-set forest with path halving and union by rank.
///
/// # Examples
/// ```
/// use arbor_core::DisjointSet;
///
/// let mut sets = DisjointSet::from_elements(["a", "b", "c"]);
/// assert_eq!(sets.count(), 3);
/// assert!(sets.union(&"a", &"b"));
/// assert!(!sets.union(&"b", &"a"));
/// assert!(sets.connected(&"a", &"b"));
/// assert_eq!(sets.count(), 2);
///
/// // Unseen elements are registered on first use.
/// assert!(!sets.connected(&"a", &"d"));
/// assert_eq!(sets.count(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet<T> {
    elements: Vec<T>,
    slots: HashMap<T, usize>,
    parent: Vec<usize>,
    rank: Vec<u32>,
    count: usize,
}

impl<T> Default for DisjointSet<T> {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
            slots: HashMap::new(),
            parent: Vec::new(),
            rank: Vec::new(),
            count: 0,
        }
    }
}

impl<T: Eq + Hash + Clone> DisjointSet<T> {
    /// Creates an empty structure with `count() == 0`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a structure with every element in its own singleton set.
    ///
    /// Duplicate elements are registered once, so `count()` equals the number
    /// of distinct elements.
    #[must_use]
    pub fn from_elements(elements: impl IntoIterator<Item = T>) -> Self {
        elements.into_iter().collect()
    }

    /// Registers `element` as a singleton set. Returns `false` if it was
    /// already known, in which case nothing changes.
    pub fn register(&mut self, element: T) -> bool {
        if self.slots.contains_key(&element) {
            return false;
        }
        self.insert(element);
        true
    }

    /// Returns `true` if `element` has been registered.
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        self.slots.contains_key(element)
    }

    /// Returns the representative of the set containing `element`.
    ///
    /// An unseen element is registered as a new singleton (incrementing
    /// [`DisjointSet::count`]) and returned unchanged.
    pub fn find(&mut self, element: &T) -> &T {
        let slot = self.slot_of(element);
        let root = self.root_of(slot);
        &self.elements[root]
    }

    /// Returns the representative of `element`'s set without registering
    /// unseen elements.
    pub fn find_registered(&mut self, element: &T) -> Option<&T> {
        let slot = *self.slots.get(element)?;
        let root = self.root_of(slot);
        self.elements.get(root)
    }

    /// Returns `true` if `left` and `right` share a representative.
    ///
    /// Registers either element if it is unseen.
    pub fn connected(&mut self, left: &T, right: &T) -> bool {
        let left = self.slot_of(left);
        let right = self.slot_of(right);
        self.root_of(left) == self.root_of(right)
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `false` when both already share a set. Otherwise the
    /// lower-rank root is linked under the higher-rank root; on equal ranks
    /// `right`'s root goes under `left`'s root, whose rank grows by one.
    /// A successful merge decrements [`DisjointSet::count`].
    pub fn union(&mut self, left: &T, right: &T) -> bool {
        let left = self.slot_of(left);
        let right = self.slot_of(right);
        let left_root = self.root_of(left);
        let right_root = self.root_of(right);
        if left_root == right_root {
            return false;
        }

        match self.rank[left_root].cmp(&self.rank[right_root]) {
            Ordering::Less => self.parent[left_root] = right_root,
            Ordering::Greater => self.parent[right_root] = left_root,
            Ordering::Equal => {
                self.parent[right_root] = left_root;
                self.rank[left_root] = self.rank[left_root].saturating_add(1);
            }
        }
        self.count = self.count.saturating_sub(1);
        true
    }

    fn slot_of(&mut self, element: &T) -> usize {
        match self.slots.get(element) {
            Some(&slot) => slot,
            None => self.insert(element.clone()),
        }
    }

    fn insert(&mut self, element: T) -> usize {
        let slot = self.elements.len();
        self.elements.push(element.clone());
        self.slots.insert(element, slot);
        self.parent.push(slot);
        self.rank.push(0);
        self.count = self.count.saturating_add(1);
        slot
    }

    /// Path halving: every visited node is relinked to its grandparent.
    fn root_of(&mut self, mut node: usize) -> usize {
        while self.parent[node] != node {
            let grandparent = self.parent[self.parent[node]];
            self.parent[node] = grandparent;
            node = grandparent;
        }
        node
    }
}

impl<T> DisjointSet<T> {
    /// Returns the number of disjoint sets currently represented.
    #[must_use]
    #[rustfmt::skip]
    pub const fn count(&self) -> usize { self.count }

    /// Returns the number of registered elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` when no element has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<T: Eq + Hash + Clone> Extend<T> for DisjointSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, elements: I) {
        for element in elements {
            self.register(element);
        }
    }
}

impl<T: Eq + Hash + Clone> FromIterator<T> for DisjointSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(elements: I) -> Self {
        let mut sets = Self::new();
        sets.extend(elements);
        sets
    }
}
