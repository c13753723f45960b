/*!
# Edge Representation

This module defines the representation of edges in graphs.

- An `Edge(u, v)` consists of a source node `u` and a target node `v`.
- For **undirected graphs**, `Edge(u, v)` is equivalent to `Edge(v, u)`.
- An edge is **normalized** if `u <= v` (by id).
- Edges carry no identity beyond their endpoints; the weight of an edge is
  supplied by the graph's weight capability and paired up on demand via
  [`WeightedEdge`].
*/

use std::fmt::{Debug, Display};

use crate::node::Node;

/// Represents an edge between two nodes `u` and `v`.
///
/// The graph decides whether the edge is directed or undirected.
/// For undirected graphs, consider `Edge(u, v)` equivalent to `Edge(v, u)`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Returns the source endpoint.
    #[inline(always)]
    pub fn source(&self) -> Node {
        self.0
    }

    /// Returns the target endpoint.
    #[inline(always)]
    pub fn target(&self) -> Node {
        self.1
    }

    /// Returns a normalized edge where the smaller node comes first.
    ///
    /// # Example
    /// ```
    /// # use wgraphs::{edge::Edge, node::Node};
    /// let e = Edge(Node::new(3), Node::new(1));
    /// assert_eq!(e.normalized(), Edge(Node::new(1), Node::new(3)));
    /// ```
    #[inline(always)]
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns `true` if the smaller endpoint comes first (i.e., `u <= v`).
    #[inline(always)]
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns `true` if the edge is a self-loop (`u == v`).
    #[inline(always)]
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Returns the edge with endpoints swapped (`Edge(v, u)`).
    #[inline(always)]
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<(i64, i64)> for Edge {
    fn from(value: (i64, i64)) -> Self {
        Edge(Node::new(value.0), Node::new(value.1))
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

/// An edge paired with its weight.
///
/// Produced by edge enumeration and consumed by the algorithms that operate
/// on explicit edge lists (Prim, Kruskal) or feed edge-cost updates into a
/// planner.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WeightedEdge {
    pub edge: Edge,
    pub weight: f64,
}

impl WeightedEdge {
    /// Creates a weighted edge from raw ids.
    pub fn new(u: i64, v: i64, weight: f64) -> Self {
        WeightedEdge {
            edge: Edge(Node::new(u), Node::new(v)),
            weight,
        }
    }
}

impl From<(Edge, f64)> for WeightedEdge {
    fn from(value: (Edge, f64)) -> Self {
        WeightedEdge {
            edge: value.0,
            weight: value.1,
        }
    }
}
