/*!
# Graph Operations

Core graph traits and operations.

This module defines the **fundamental capabilities** that graph
representations in `wgraphs` supply to the algorithms:
- **Graph type metadata** ([`GraphType`], [`GraphDir`], [`GraphDirection`]).
- **Node enumeration and membership** ([`GraphOrder`]).
- **Neighborhood access** ([`AdjacencyList`], [`InAdjacency`]).
- **Edge testing and enumeration** ([`AdjacencyTest`], [`EdgeList`]).
- **Weights and heuristics** ([`EdgeWeights`], [`HeuristicCost`]).
- **Mutation** ([`GraphNew`], [`NodeEditing`], [`EdgeEditing`]).

Algorithms consume graphs exclusively through these traits, so they work
across representations regardless of whether the graph is directed or
undirected, dense or sparse, mutable or immutable.

# Examples
```
use wgraphs::prelude::*;

// Build a simple undirected triangle graph
let g = AdjMapUndir::from_edges([(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0)]);

assert_eq!(g.order(), 3);
assert_eq!(g.number_of_edges(), 3);
assert!(g.has_edge(Node::new(0), Node::new(1)));
assert!(g.has_edge(Node::new(1), Node::new(0))); // undirected
```
*/

use crate::{
    edge::{Edge, WeightedEdge},
    node::Node,
};

/// Whether a graph is `Directed` or `Undirected`.
///
/// Used by [`GraphType`] to specialize behavior.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GraphDirection {
    Directed,
    Undirected,
}

/// Marker type representing a directed graph.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Directed;

/// Marker type representing an undirected graph.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Undirected;

/// Trait implemented by [`Directed`] and [`Undirected`].
///
/// Provides a compile-time constant [`GraphDirection`].
pub trait GraphDir {
    const DIRECTION: GraphDirection;
}

impl GraphDir for Directed {
    const DIRECTION: GraphDirection = GraphDirection::Directed;
}

impl GraphDir for Undirected {
    const DIRECTION: GraphDirection = GraphDirection::Undirected;
}

/// Identifies whether a graph is directed or undirected.
///
/// Directedness is a **static** capability: algorithms that only make sense
/// on one kind of graph (minimum spanning trees, strongly connected
/// components, ...) constrain their input with `GraphType<Dir = ...>`.
///
/// # Examples
/// ```
/// use wgraphs::prelude::*;
///
/// type G = AdjMapUndir;
/// assert!(G::is_undirected());
/// assert!(!G::is_directed());
/// ```
pub trait GraphType {
    /// Marker for the direction of the graph.
    type Dir: GraphDir;

    /// Returns *true* if the graph is directed
    #[inline(always)]
    fn is_directed() -> bool {
        Self::Dir::DIRECTION == GraphDirection::Directed
    }

    /// Returns *true* if the graph is undirected
    #[inline(always)]
    fn is_undirected() -> bool {
        Self::Dir::DIRECTION == GraphDirection::Undirected
    }
}

/// Provides node enumeration and membership tests.
///
/// Implemented by all graph representations. Enumeration order is
/// unspecified; every enumerated node satisfies [`GraphOrder::has_node`].
///
/// # Examples
/// ```
/// use wgraphs::prelude::*;
///
/// let g = AdjMapUndir::from_edges([(0, 1, 1.0), (1, 2, 1.0)]);
/// assert_eq!(g.order(), 3);
/// assert!(g.has_node(Node::new(1)));
/// assert!(!g.has_node(Node::new(9)));
/// ```
pub trait GraphOrder {
    /// Iterator over all nodes in the graph.
    ///
    /// Returned by [`GraphOrder::nodes`].
    type NodeIter<'a>: Iterator<Item = Node> + 'a
    where
        Self: 'a;

    /// Returns the number of nodes in the graph.
    fn order(&self) -> usize;

    /// Returns `true` if the node is part of the graph.
    fn has_node(&self, u: Node) -> bool;

    /// Returns an iterator over all nodes in the graph.
    fn nodes(&self) -> Self::NodeIter<'_>;

    /// Returns `true` if the graph has no nodes (and therefore no edges).
    fn is_empty(&self) -> bool {
        self.order() == 0
    }
}

/// Provides access to forward neighborhoods.
///
/// Implemented by both directed and undirected graphs. For directed graphs,
/// `neighbors_of(u)` enumerates the *successors* of `u`; for undirected
/// graphs it enumerates the full neighborhood.
///
/// Enumerating the neighbors of a node that is not part of the graph yields
/// an empty iterator.
pub trait AdjacencyList: GraphOrder {
    /// Iterator over the (forward) neighbors of a vertex.
    ///
    /// Returned by [`AdjacencyList::neighbors_of`].
    type NeighborIter<'a>: Iterator<Item = Node> + 'a
    where
        Self: 'a;

    /// Returns an iterator over the forward neighborhood of a given vertex.
    fn neighbors_of(&self, u: Node) -> Self::NeighborIter<'_>;

    /// Returns the number of forward neighbors of a vertex.
    fn degree_of(&self, u: Node) -> usize;
}

/// Extends [`AdjacencyList`] with backward-neighbor access.
///
/// For a directed graph, `in_neighbors_of(u)` enumerates every `v` with an
/// edge `(v, u)`. Undirected representations implement this as the forward
/// relation, so algorithms that walk edges backwards (D* Lite, dominators)
/// accept either kind.
pub trait InAdjacency: AdjacencyList {
    /// Iterator over the incoming neighbors of a vertex.
    ///
    /// Returned by [`InAdjacency::in_neighbors_of`].
    type InNeighborIter<'a>: Iterator<Item = Node> + 'a
    where
        Self: 'a;

    /// Returns an iterator over incoming neighbors of a vertex
    /// (every `v` such that `(v, u)` exists).
    fn in_neighbors_of(&self, u: Node) -> Self::InNeighborIter<'_>;

    /// Returns the number of incoming edges of a vertex.
    fn in_degree_of(&self, u: Node) -> usize;
}

/// Trait for testing the existence of edges.
///
/// For directed graphs the queried pair is ordered; for undirected graphs
/// either order answers the same.
///
/// # Examples
/// ```
/// use wgraphs::prelude::*;
///
/// let g = AdjMap::from_edges([(0, 1, 1.0)]);
/// assert!(g.has_edge(Node::new(0), Node::new(1)));
/// assert!(!g.has_edge(Node::new(1), Node::new(0))); // directed
/// ```
pub trait AdjacencyTest: GraphOrder {
    /// Returns `true` if the edge `(u, v)` exists in the graph.
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Returns the edge between `u` and `v` if it exists.
    ///
    /// The returned value is a fresh [`Edge`]; edges carry no identity
    /// beyond their endpoints.
    fn edge_between(&self, u: Node, v: Node) -> Option<Edge> {
        self.has_edge(u, v).then_some(Edge(u, v))
    }
}

/// Provides enumeration of all edges together with their weights.
///
/// Directed graphs report every arc once; undirected graphs report every
/// edge once, normalized (smaller endpoint first).
pub trait EdgeList {
    /// Iterator over all edges in the graph.
    ///
    /// Returned by [`EdgeList::edges`].
    type EdgeIter<'a>: Iterator<Item = WeightedEdge> + 'a
    where
        Self: 'a;

    /// Returns an iterator over all edges with their weights.
    fn edges(&self) -> Self::EdgeIter<'_>;

    /// Returns the number of edges in the graph.
    fn number_of_edges(&self) -> usize;
}

/// Supplies the weight of an edge.
///
/// The default body models an unweighted graph: every present edge costs
/// `1.0` and absent edges report `f64::INFINITY`. Representations that
/// store weights override it.
pub trait EdgeWeights: AdjacencyTest {
    /// Returns the weight of `e`, or `f64::INFINITY` if `e` is not present.
    fn weight(&self, e: Edge) -> f64 {
        if self.has_edge(e.0, e.1) {
            1.0
        } else {
            f64::INFINITY
        }
    }
}

/// Supplies a heuristic estimate of the distance between two nodes.
///
/// The default body is the null heuristic, which is admissible and
/// consistent for any graph with non-negative weights. Graphs with
/// geometric structure override it.
pub trait HeuristicCost {
    /// Estimates the cost from `u` to `v`. Must be non-negative.
    fn heuristic_weight(&self, _u: Node, _v: Node) -> f64 {
        0.0
    }
}

/// Creation of an empty graph.
pub trait GraphNew {
    /// Returns a graph with no nodes and no edges.
    fn empty() -> Self;
}

/// Adding and removing nodes.
pub trait NodeEditing: GraphOrder {
    /// Inserts `u` into the graph. Inserting a present node is a no-op.
    fn add_node(&mut self, u: Node);

    /// Removes `u` and all edges incident to it. Removing an absent node is
    /// a no-op.
    fn remove_node(&mut self, u: Node);

    /// Allocates a node with a fresh id, inserts it and returns it.
    fn new_node(&mut self) -> Node;
}

/// Adding and removing edges.
pub trait EdgeEditing: NodeEditing {
    /// Inserts the edge `e` with the given weight, overwriting the weight if
    /// the edge is already present. Missing endpoints are added.
    ///
    /// On undirected representations this inserts the edge in both
    /// orientations.
    fn set_edge(&mut self, e: Edge, weight: f64);

    /// Removes the edge `e` (both orientations for undirected
    /// representations). Removing an absent edge is a no-op.
    fn remove_edge(&mut self, e: Edge);
}

/// Everything a weighted single-source search needs: node enumeration,
/// forward adjacency, edge tests, weights and a heuristic.
///
/// Blanket-implemented for every graph with those capabilities.
pub trait SearchGraph: AdjacencyList + AdjacencyTest + EdgeWeights + HeuristicCost {}

impl<G> SearchGraph for G where G: AdjacencyList + AdjacencyTest + EdgeWeights + HeuristicCost {}
