use std::fmt::{Debug, Display};

/// A node of a graph, identified by a stable integer id.
///
/// Nodes compare, order and hash **by id only**. Ids are never assumed to be
/// contiguous or dense; graphs and algorithms key all bookkeeping on the id
/// through hash maps, so `Node::new(7)` and `Node::new(7_000_000_000)` are
/// equally cheap to work with.
#[repr(transparent)]
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Node(i64);

impl Node {
    /// Creates a node from its id.
    #[inline]
    pub const fn new(id: i64) -> Self {
        Node(id)
    }

    /// Returns the id of this node.
    #[inline]
    pub const fn id(self) -> i64 {
        self.0
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl From<i64> for Node {
    fn from(id: i64) -> Self {
        Node(id)
    }
}

impl From<&i64> for Node {
    fn from(id: &i64) -> Self {
        Node(*id)
    }
}
