use std::collections::hash_map;
use std::{iter, option};

use crate::{
    edge::{Edge, WeightedEdge},
    node::Node,
    ops::*,
    utils::NodeMap,
};

/// Iterator over all edges of a hash-keyed adjacency container.
///
/// Walks the outer node map and each inner neighbor map in turn. With
/// `only_normalized` set (undirected storage), edges are reported once with
/// the smaller endpoint first.
pub struct EdgesIter<'a> {
    outer: hash_map::Iter<'a, Node, NodeMap<f64>>,
    inner: Option<(Node, hash_map::Iter<'a, Node, f64>)>,
    only_normalized: bool,
}

impl<'a> Iterator for EdgesIter<'a> {
    type Item = WeightedEdge;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((u, neighbors)) = &mut self.inner {
                for (&v, &weight) in neighbors.by_ref() {
                    let edge = Edge(*u, v);
                    if edge.is_normalized() || !self.only_normalized {
                        return Some(WeightedEdge { edge, weight });
                    }
                }
            }

            let (&u, neighbors) = self.outer.next()?;
            self.inner = Some((u, neighbors.iter()));
        }
    }
}

type NeighborsOf<'a> =
    iter::Flatten<option::IntoIter<iter::Copied<hash_map::Keys<'a, Node, f64>>>>;

#[inline]
fn neighbors_in(map: &NodeMap<NodeMap<f64>>, u: Node) -> NeighborsOf<'_> {
    map.get(&u)
        .map(|neighbors| neighbors.keys().copied())
        .into_iter()
        .flatten()
}

/// Directed graph over arbitrary `i64` node ids, stored as hash maps of
/// successor and predecessor neighborhoods with per-edge weights.
///
/// Keeping both orientations makes backward traversal (D* Lite, dominators)
/// as cheap as forward traversal, at the cost of writing every edge twice.
///
/// # Examples
/// ```
/// use wgraphs::prelude::*;
///
/// let mut g = AdjMap::empty();
/// g.set_edge(Edge::from((0, 1)), 2.5);
///
/// assert!(g.has_edge(Node::new(0), Node::new(1)));
/// assert!(!g.has_edge(Node::new(1), Node::new(0)));
/// assert_eq!(g.weight(Edge::from((0, 1))), 2.5);
/// assert_eq!(g.weight(Edge::from((1, 0))), f64::INFINITY);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AdjMap {
    out: NodeMap<NodeMap<f64>>,
    rev: NodeMap<NodeMap<f64>>,
    m: usize,
    max_id: i64,
}

impl AdjMap {
    /// Builds a graph from `(source id, target id, weight)` triples.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (i64, i64, f64)>,
    {
        let mut graph = Self::empty();
        for (u, v, w) in edges {
            graph.set_edge(Edge::from((u, v)), w);
        }
        graph
    }
}

impl GraphType for AdjMap {
    type Dir = Directed;
}

impl GraphNew for AdjMap {
    fn empty() -> Self {
        Self::default()
    }
}

impl GraphOrder for AdjMap {
    type NodeIter<'a>
        = iter::Copied<hash_map::Keys<'a, Node, NodeMap<f64>>>
    where
        Self: 'a;

    fn order(&self) -> usize {
        self.out.len()
    }

    fn has_node(&self, u: Node) -> bool {
        self.out.contains_key(&u)
    }

    fn nodes(&self) -> Self::NodeIter<'_> {
        self.out.keys().copied()
    }
}

impl AdjacencyList for AdjMap {
    type NeighborIter<'a>
        = NeighborsOf<'a>
    where
        Self: 'a;

    fn neighbors_of(&self, u: Node) -> Self::NeighborIter<'_> {
        neighbors_in(&self.out, u)
    }

    fn degree_of(&self, u: Node) -> usize {
        self.out.get(&u).map_or(0, |neighbors| neighbors.len())
    }
}

impl InAdjacency for AdjMap {
    type InNeighborIter<'a>
        = NeighborsOf<'a>
    where
        Self: 'a;

    fn in_neighbors_of(&self, u: Node) -> Self::InNeighborIter<'_> {
        neighbors_in(&self.rev, u)
    }

    fn in_degree_of(&self, u: Node) -> usize {
        self.rev.get(&u).map_or(0, |neighbors| neighbors.len())
    }
}

impl AdjacencyTest for AdjMap {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.out
            .get(&u)
            .is_some_and(|neighbors| neighbors.contains_key(&v))
    }
}

impl EdgeWeights for AdjMap {
    fn weight(&self, e: Edge) -> f64 {
        self.out
            .get(&e.0)
            .and_then(|neighbors| neighbors.get(&e.1))
            .copied()
            .unwrap_or(f64::INFINITY)
    }
}

impl HeuristicCost for AdjMap {}

impl EdgeList for AdjMap {
    type EdgeIter<'a>
        = EdgesIter<'a>
    where
        Self: 'a;

    fn edges(&self) -> Self::EdgeIter<'_> {
        EdgesIter {
            outer: self.out.iter(),
            inner: None,
            only_normalized: false,
        }
    }

    fn number_of_edges(&self) -> usize {
        self.m
    }
}

impl NodeEditing for AdjMap {
    fn add_node(&mut self, u: Node) {
        self.max_id = self.max_id.max(u.id());
        self.out.entry(u).or_default();
        self.rev.entry(u).or_default();
    }

    fn remove_node(&mut self, u: Node) {
        let Some(succs) = self.out.remove(&u) else {
            return;
        };
        self.m -= succs.len();
        for v in succs.keys() {
            if let Some(preds) = self.rev.get_mut(v) {
                preds.remove(&u);
            }
        }
        if let Some(preds) = self.rev.remove(&u) {
            for p in preds.keys() {
                if *p == u {
                    continue; // the self-loop left with the successor map
                }
                if let Some(succs) = self.out.get_mut(p) {
                    succs.remove(&u);
                    self.m -= 1;
                }
            }
        }
    }

    fn new_node(&mut self) -> Node {
        let u = Node::new(self.max_id + 1);
        self.add_node(u);
        u
    }
}

impl EdgeEditing for AdjMap {
    fn set_edge(&mut self, e: Edge, weight: f64) {
        self.add_node(e.0);
        self.add_node(e.1);
        if self.out.get_mut(&e.0).unwrap().insert(e.1, weight).is_none() {
            self.m += 1;
        }
        self.rev.get_mut(&e.1).unwrap().insert(e.0, weight);
    }

    fn remove_edge(&mut self, e: Edge) {
        let removed = self
            .out
            .get_mut(&e.0)
            .is_some_and(|neighbors| neighbors.remove(&e.1).is_some());
        if removed {
            self.m -= 1;
            self.rev.get_mut(&e.1).unwrap().remove(&e.0);
        }
    }
}

/// Undirected graph over arbitrary `i64` node ids, stored as a single
/// symmetric hash-keyed neighborhood map with per-edge weights.
///
/// # Examples
/// ```
/// use wgraphs::prelude::*;
///
/// let g = AdjMapUndir::from_edges([(0, 1, 2.0), (1, 2, 3.0)]);
///
/// assert!(g.has_edge(Node::new(1), Node::new(0)));
/// assert_eq!(g.weight(Edge::from((2, 1))), 3.0);
/// assert_eq!(g.number_of_edges(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AdjMapUndir {
    adj: NodeMap<NodeMap<f64>>,
    m: usize,
    max_id: i64,
}

impl AdjMapUndir {
    /// Builds a graph from `(id, id, weight)` triples.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (i64, i64, f64)>,
    {
        let mut graph = Self::empty();
        for (u, v, w) in edges {
            graph.set_edge(Edge::from((u, v)), w);
        }
        graph
    }
}

impl GraphType for AdjMapUndir {
    type Dir = Undirected;
}

impl GraphNew for AdjMapUndir {
    fn empty() -> Self {
        Self::default()
    }
}

impl GraphOrder for AdjMapUndir {
    type NodeIter<'a>
        = iter::Copied<hash_map::Keys<'a, Node, NodeMap<f64>>>
    where
        Self: 'a;

    fn order(&self) -> usize {
        self.adj.len()
    }

    fn has_node(&self, u: Node) -> bool {
        self.adj.contains_key(&u)
    }

    fn nodes(&self) -> Self::NodeIter<'_> {
        self.adj.keys().copied()
    }
}

impl AdjacencyList for AdjMapUndir {
    type NeighborIter<'a>
        = NeighborsOf<'a>
    where
        Self: 'a;

    fn neighbors_of(&self, u: Node) -> Self::NeighborIter<'_> {
        neighbors_in(&self.adj, u)
    }

    fn degree_of(&self, u: Node) -> usize {
        self.adj.get(&u).map_or(0, |neighbors| neighbors.len())
    }
}

impl InAdjacency for AdjMapUndir {
    type InNeighborIter<'a>
        = NeighborsOf<'a>
    where
        Self: 'a;

    fn in_neighbors_of(&self, u: Node) -> Self::InNeighborIter<'_> {
        self.neighbors_of(u)
    }

    fn in_degree_of(&self, u: Node) -> usize {
        self.degree_of(u)
    }
}

impl AdjacencyTest for AdjMapUndir {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.adj
            .get(&u)
            .is_some_and(|neighbors| neighbors.contains_key(&v))
    }
}

impl EdgeWeights for AdjMapUndir {
    fn weight(&self, e: Edge) -> f64 {
        self.adj
            .get(&e.0)
            .and_then(|neighbors| neighbors.get(&e.1))
            .copied()
            .unwrap_or(f64::INFINITY)
    }
}

impl HeuristicCost for AdjMapUndir {}

impl EdgeList for AdjMapUndir {
    type EdgeIter<'a>
        = EdgesIter<'a>
    where
        Self: 'a;

    fn edges(&self) -> Self::EdgeIter<'_> {
        EdgesIter {
            outer: self.adj.iter(),
            inner: None,
            only_normalized: true,
        }
    }

    fn number_of_edges(&self) -> usize {
        self.m
    }
}

impl NodeEditing for AdjMapUndir {
    fn add_node(&mut self, u: Node) {
        self.max_id = self.max_id.max(u.id());
        self.adj.entry(u).or_default();
    }

    fn remove_node(&mut self, u: Node) {
        let Some(neighbors) = self.adj.remove(&u) else {
            return;
        };
        self.m -= neighbors.len();
        for v in neighbors.keys() {
            if *v == u {
                continue;
            }
            if let Some(back) = self.adj.get_mut(v) {
                back.remove(&u);
            }
        }
    }

    fn new_node(&mut self) -> Node {
        let u = Node::new(self.max_id + 1);
        self.add_node(u);
        u
    }
}

impl EdgeEditing for AdjMapUndir {
    fn set_edge(&mut self, e: Edge, weight: f64) {
        self.add_node(e.0);
        self.add_node(e.1);
        if self.adj.get_mut(&e.0).unwrap().insert(e.1, weight).is_none() {
            self.m += 1;
        }
        if !e.is_loop() {
            self.adj.get_mut(&e.1).unwrap().insert(e.0, weight);
        }
    }

    fn remove_edge(&mut self, e: Edge) {
        let removed = self
            .adj
            .get_mut(&e.0)
            .is_some_and(|neighbors| neighbors.remove(&e.1).is_some());
        if removed {
            self.m -= 1;
            if !e.is_loop() {
                self.adj.get_mut(&e.1).unwrap().remove(&e.0);
            }
        }
    }
}
