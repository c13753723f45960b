use crate::{
    node::Node,
    ops::SearchGraph,
    resolve::{Resolved, WeightFn},
    utils::{NodeMap, ScoreHeap},
};

use super::walk_predecessors;

/// Single-source shortest paths: for every node reachable from the source,
/// the cheapest path and its cost. Unreachable nodes are absent from both
/// maps.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathTree {
    pub paths: NodeMap<Vec<Node>>,
    pub costs: NodeMap<f64>,
}

/// Dijkstra's algorithm.
///
/// A goal-less uniform-cost search: once a node is popped from the open
/// set, its cost is final. Requires non-negative edge weights; use
/// [`BellmanFord`](super::BellmanFord) when negative weights are present.
///
/// Predecessors are recorded at the moment a tentative cost is accepted,
/// so the reconstructed paths always match the reported costs.
///
/// # Examples
/// ```
/// use wgraphs::prelude::*;
///
/// let g = AdjMap::from_edges([(0, 1, 1.0), (1, 2, 1.0), (0, 2, 5.0)]);
/// let tree = Dijkstra::new().run(&g, Node::new(0));
///
/// assert_eq!(tree.costs[&Node::new(2)], 2.0);
/// assert_eq!(
///     tree.paths[&Node::new(2)],
///     vec![Node::new(0), Node::new(1), Node::new(2)],
/// );
/// ```
#[derive(Default)]
pub struct Dijkstra<'a> {
    weight: Option<&'a WeightFn<'a>>,
}

impl<'a> Dijkstra<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the weight capability of the graph.
    pub fn with_weight(mut self, weight: &'a WeightFn<'a>) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn run<G>(&self, graph: &G, source: Node) -> ShortestPathTree
    where
        G: SearchGraph,
    {
        let funcs = Resolved::new(graph, self.weight, None);

        let mut open = ScoreHeap::new();
        let mut costs: NodeMap<f64> = NodeMap::default();
        let mut predecessor: NodeMap<Node> = NodeMap::default();

        costs.insert(source, 0.0);
        open.push(source, 0.0, 0.0);

        while let Some(curr) = open.pop() {
            let u = curr.node;

            for v in funcs.successors(u) {
                let tentative = costs[&u] + funcs.edge_weight(u, v);

                match costs.get(&v) {
                    None => {
                        costs.insert(v, tentative);
                        predecessor.insert(v, u);
                        open.push(v, tentative, tentative);
                    }
                    Some(&known) if tentative < known => {
                        costs.insert(v, tentative);
                        predecessor.insert(v, u);
                        open.decrease(v, tentative, tentative);
                    }
                    Some(_) => {}
                }
            }
        }

        let paths = costs
            .keys()
            .map(|&u| (u, walk_predecessors(&predecessor, u)))
            .collect();

        ShortestPathTree { paths, costs }
    }
}
