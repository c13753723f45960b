/*!
# Capability Resolution

Algorithms accept optional weight and heuristic overrides in addition to
whatever the graph itself supplies. [`Resolved`] bundles a graph reference
with those overrides once per algorithm invocation, so the per-edge hot
path is a plain method call with no repeated dispatch decisions:

- weight: override, else the graph's [`EdgeWeights`](crate::ops::EdgeWeights)
  capability (whose default body is uniform cost 1),
- heuristic: override, else the graph's
  [`HeuristicCost`](crate::ops::HeuristicCost) capability (whose default
  body is the null heuristic).

The bundle is read-only with respect to the graph.
*/

use crate::{
    edge::Edge,
    node::Node,
    ops::{InAdjacency, SearchGraph},
};

/// Signature of a weight override.
pub type WeightFn<'a> = dyn Fn(Edge) -> f64 + 'a;

/// Signature of a heuristic override.
pub type HeuristicFn<'a> = dyn Fn(Node, Node) -> f64 + 'a;

/// A graph bundled with resolved weight and heuristic functions.
///
/// Constructed once per algorithm invocation.
pub struct Resolved<'a, G> {
    graph: &'a G,
    weight: Option<&'a WeightFn<'a>>,
    heuristic: Option<&'a HeuristicFn<'a>>,
}

impl<'a, G> Resolved<'a, G>
where
    G: SearchGraph,
{
    pub fn new(
        graph: &'a G,
        weight: Option<&'a WeightFn<'a>>,
        heuristic: Option<&'a HeuristicFn<'a>>,
    ) -> Self {
        Resolved {
            graph,
            weight,
            heuristic,
        }
    }

    /// Forward neighbors of `u`.
    #[inline]
    pub fn successors(&self, u: Node) -> G::NeighborIter<'a> {
        self.graph.neighbors_of(u)
    }

    #[inline]
    pub fn has_edge(&self, u: Node, v: Node) -> bool {
        self.graph.has_edge(u, v)
    }

    #[inline]
    pub fn edge_between(&self, u: Node, v: Node) -> Option<Edge> {
        self.graph.edge_between(u, v)
    }

    /// Weight of an edge: the override takes precedence over the graph.
    #[inline]
    pub fn weight(&self, e: Edge) -> f64 {
        match self.weight {
            Some(weight) => weight(e),
            None => self.graph.weight(e),
        }
    }

    /// Heuristic estimate: the override takes precedence over the graph.
    #[inline]
    pub fn heuristic(&self, u: Node, v: Node) -> f64 {
        match self.heuristic {
            Some(heuristic) => heuristic(u, v),
            None => self.graph.heuristic_weight(u, v),
        }
    }

    /// Weight of the edge `(u, v)`, or `f64::INFINITY` if it is absent.
    #[inline]
    pub fn edge_weight(&self, u: Node, v: Node) -> f64 {
        match self.edge_between(u, v) {
            Some(e) => self.weight(e),
            None => f64::INFINITY,
        }
    }
}

impl<'a, G> Resolved<'a, G>
where
    G: SearchGraph + InAdjacency,
{
    /// Backward neighbors of `u`. For undirected graphs this coincides with
    /// [`Resolved::successors`].
    #[inline]
    pub fn predecessors(&self, u: Node) -> G::InNeighborIter<'a> {
        self.graph.in_neighbors_of(u)
    }
}
