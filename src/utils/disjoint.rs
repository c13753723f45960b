/*!
# Disjoint-set Forest

Union-find over node ids with union-by-rank and path compression.

The forest is arena-backed: members live in a `Vec` and parent links are
indices into it, with a hash map from node id to slot. This keeps the
structure free of reference cycles and makes `components` a single linear
scan.
*/

use itertools::Itertools;

use crate::{node::Node, utils::NodeMap};

/// A collection of non-overlapping sets of nodes.
///
/// # Examples
/// ```
/// use wgraphs::{node::Node, utils::DisjointSet};
///
/// let mut ds = DisjointSet::new();
/// for id in 0..4 {
///     ds.make_set(Node::new(id));
/// }
/// ds.union(Node::new(0), Node::new(1));
/// ds.union(Node::new(2), Node::new(3));
///
/// assert!(ds.same_set(Node::new(0), Node::new(1)));
/// assert!(!ds.same_set(Node::new(1), Node::new(2)));
/// assert_eq!(ds.components().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DisjointSet {
    slot_of: NodeMap<usize>,
    nodes: Vec<Node>,
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl DisjointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the node is a member of any set.
    pub fn contains(&self, u: Node) -> bool {
        self.slot_of.contains_key(&u)
    }

    /// Adds `u` as a singleton set. Idempotent: adding a present member is a
    /// no-op.
    pub fn make_set(&mut self, u: Node) {
        if self.contains(u) {
            return;
        }
        let slot = self.nodes.len();
        self.slot_of.insert(u, slot);
        self.nodes.push(u);
        self.parent.push(slot);
        self.rank.push(0);
    }

    /// Returns the canonical representative of the set containing `u`, or
    /// `None` if `u` is not a member. Compresses the path walked.
    pub fn find(&mut self, u: Node) -> Option<Node> {
        let slot = *self.slot_of.get(&u)?;
        let root = self.find_root(slot);
        Some(self.nodes[root])
    }

    /// Returns `true` if both nodes are members of the same set.
    pub fn same_set(&mut self, a: Node, b: Node) -> bool {
        match (self.slot_of.get(&a), self.slot_of.get(&b)) {
            (Some(&a), Some(&b)) => self.find_root(a) == self.find_root(b),
            _ => false,
        }
    }

    /// Merges the sets containing `a` and `b`. Returns `true` if two
    /// distinct sets were merged, `false` if they already coincided or
    /// either node is not a member.
    pub fn union(&mut self, a: Node, b: Node) -> bool {
        let (Some(&a), Some(&b)) = (self.slot_of.get(&a), self.slot_of.get(&b)) else {
            return false;
        };
        let a_root = self.find_root(a);
        let b_root = self.find_root(b);
        if a_root == b_root {
            return false;
        }

        if self.rank[a_root] < self.rank[b_root] {
            self.parent[a_root] = b_root;
        } else if self.rank[b_root] < self.rank[a_root] {
            self.parent[b_root] = a_root;
        } else {
            self.parent[b_root] = a_root;
            self.rank[a_root] += 1;
        }
        true
    }

    /// Groups all members by their current representative.
    pub fn components(&mut self) -> Vec<Vec<Node>> {
        let mut groups: NodeMap<Vec<Node>> = NodeMap::default();
        for slot in 0..self.nodes.len() {
            let root = self.find_root(slot);
            groups
                .entry(self.nodes[root])
                .or_default()
                .push(self.nodes[slot]);
        }
        groups.into_values().collect_vec()
    }

    /// Two-pass iterative find: locate the root, then point every walked
    /// slot directly at it.
    fn find_root(&mut self, slot: usize) -> usize {
        let mut root = slot;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut cur = slot;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }

        root
    }
}
