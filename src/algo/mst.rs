use itertools::Itertools;

use crate::{
    edge::WeightedEdge,
    ops::{EdgeEditing, EdgeList, GraphType, SearchGraph, Undirected},
    resolve::{Resolved, WeightFn},
    utils::{DisjointSet, NodeSet},
};

/// Prim's minimum spanning tree.
///
/// Seeds the destination with one node and repeatedly attaches the
/// cheapest edge leaving the seen set. Ties break deterministically in
/// favor of the earlier-enumerated edge. On a disconnected graph, the tree
/// spans only the seed's component.
///
/// The destination graph must be empty (or at least disjoint from the
/// source's node ids); the source is not mutated.
///
/// # Examples
/// ```
/// use wgraphs::prelude::*;
///
/// let g = AdjMapUndir::from_edges([(0, 1, 1.0), (1, 2, 2.0), (0, 2, 4.0)]);
/// let mut tree = AdjMapUndir::empty();
/// Prim::new().run(&g, &mut tree);
///
/// assert_eq!(tree.number_of_edges(), 2);
/// let total: f64 = tree.edges().map(|we| we.weight).sum();
/// assert_eq!(total, 3.0);
/// ```
#[derive(Default)]
pub struct Prim<'a> {
    weight: Option<&'a WeightFn<'a>>,
}

impl<'a> Prim<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the weight capability of the graph.
    pub fn with_weight(mut self, weight: &'a WeightFn<'a>) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn run<G, D>(&self, graph: &G, dst: &mut D)
    where
        G: SearchGraph + EdgeList + GraphType<Dir = Undirected>,
        D: EdgeEditing + GraphType<Dir = Undirected>,
    {
        let funcs = Resolved::new(graph, self.weight, None);

        let Some(seed) = graph.nodes().next() else {
            return;
        };
        dst.add_node(seed);

        let mut seen = NodeSet::default();
        seen.insert(seed);
        let mut remaining: NodeSet = graph.nodes().filter(|&u| u != seed).collect();

        let edges = graph
            .edges()
            .map(|we| WeightedEdge {
                edge: we.edge,
                weight: funcs.weight(we.edge),
            })
            .collect_vec();

        while !remaining.is_empty() {
            let mut best: Option<WeightedEdge> = None;
            for we in &edges {
                let (u, v) = (we.edge.source(), we.edge.target());
                let crosses = (seen.contains(&u) && remaining.contains(&v))
                    || (seen.contains(&v) && remaining.contains(&u));
                if crosses && best.is_none_or(|b| we.weight < b.weight) {
                    best = Some(*we);
                }
            }

            // No crossing edge left: the remaining nodes are unreachable.
            let Some(we) = best else {
                break;
            };

            dst.set_edge(we.edge, we.weight);
            let attached = if remaining.contains(&we.edge.source()) {
                we.edge.source()
            } else {
                we.edge.target()
            };
            remaining.remove(&attached);
            seen.insert(attached);
        }
    }
}

/// Kruskal's minimum spanning tree.
///
/// Sorts all edges by weight (stable, so ties keep their enumeration
/// order) and adds every edge whose endpoints are still in different
/// components of a disjoint set. On a disconnected graph this produces a
/// spanning forest.
///
/// The destination graph must be empty (or at least disjoint from the
/// source's node ids); the source is not mutated.
#[derive(Default)]
pub struct Kruskal<'a> {
    weight: Option<&'a WeightFn<'a>>,
}

impl<'a> Kruskal<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the weight capability of the graph.
    pub fn with_weight(mut self, weight: &'a WeightFn<'a>) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn run<G, D>(&self, graph: &G, dst: &mut D)
    where
        G: SearchGraph + EdgeList + GraphType<Dir = Undirected>,
        D: EdgeEditing + GraphType<Dir = Undirected>,
    {
        let funcs = Resolved::new(graph, self.weight, None);

        let mut edges = graph
            .edges()
            .map(|we| WeightedEdge {
                edge: we.edge,
                weight: funcs.weight(we.edge),
            })
            .collect_vec();
        edges.sort_by(|a, b| a.weight.total_cmp(&b.weight));

        let mut sets = DisjointSet::new();
        for u in graph.nodes() {
            sets.make_set(u);
        }

        for we in edges {
            if sets.union(we.edge.source(), we.edge.target()) {
                dst.set_edge(we.edge, we.weight);
            }
        }
    }
}
