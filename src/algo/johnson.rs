use itertools::Itertools;

use crate::{
    Error,
    edge::Edge,
    node::Node,
    ops::{EdgeEditing, GraphNew, NodeEditing, SearchGraph},
    repr::AdjMap,
    resolve::{Resolved, WeightFn},
    utils::NodeMap,
};

use super::{BellmanFord, Dijkstra};

/// All-pairs shortest paths, keyed source -> destination. Pairs without a
/// connecting path are absent.
#[derive(Debug, Clone, PartialEq)]
pub struct AllPairs {
    pub paths: NodeMap<NodeMap<Vec<Node>>>,
    pub costs: NodeMap<NodeMap<f64>>,
}

/// Johnson's algorithm.
///
/// All-pairs shortest paths on graphs that may contain negative edge
/// weights (but no negative cycles). The input is copied into a private
/// directed scratch graph; a dummy node with zero-weight edges to every
/// node yields Bellman-Ford potentials `h`, every edge `(u, v)` is
/// reweighted to the non-negative `w + h(u) - h(v)`, and Dijkstra runs from
/// every node over the reweighted copy.
///
/// Reported costs are translated back to the original weights (adding
/// `h(v) - h(u)` per pair), so each per-source slice agrees with what
/// [`BellmanFord`] reports for that source.
///
/// # Examples
/// ```
/// use wgraphs::prelude::*;
///
/// let g = AdjMap::from_edges([(0, 1, 3.0), (1, 2, -2.0), (0, 2, 2.0)]);
/// let all = Johnson::new().run(&g).unwrap();
///
/// assert_eq!(all.costs[&Node::new(0)][&Node::new(2)], 1.0);
/// ```
#[derive(Default)]
pub struct Johnson<'a> {
    weight: Option<&'a WeightFn<'a>>,
}

impl<'a> Johnson<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the weight capability of the graph.
    pub fn with_weight(mut self, weight: &'a WeightFn<'a>) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn run<G>(&self, graph: &G) -> Result<AllPairs, Error>
    where
        G: SearchGraph,
    {
        let funcs = Resolved::new(graph, self.weight, None);
        let originals = graph.nodes().collect_vec();

        // Directed scratch copy preserving weights.
        let mut scratch = AdjMap::empty();
        for &u in &originals {
            scratch.add_node(u);
        }
        for &u in &originals {
            for v in funcs.successors(u) {
                scratch.set_edge(Edge(u, v), funcs.edge_weight(u, v));
            }
        }

        // Dummy node with zero-weight edges to every original node.
        let dummy = scratch.new_node();
        for &u in &originals {
            scratch.set_edge(Edge(dummy, u), 0.0);
        }

        // Bellman-Ford potentials; aborts on a negative cycle.
        let potentials = BellmanFord::new().run(&scratch, dummy)?.costs;

        // Reweight: w'(u, v) = w(u, v) + h(u) - h(v) >= 0 by the triangle
        // property of the potentials.
        for &u in &originals {
            for v in funcs.successors(u) {
                let reweighted = funcs.edge_weight(u, v) + potentials[&u] - potentials[&v];
                scratch.set_edge(Edge(u, v), reweighted);
            }
        }
        scratch.remove_node(dummy);

        // Dijkstra from every node; translate costs back to the original
        // weights through the potentials.
        let mut paths: NodeMap<NodeMap<Vec<Node>>> = NodeMap::default();
        let mut costs: NodeMap<NodeMap<f64>> = NodeMap::default();
        for &src in &originals {
            let tree = Dijkstra::new().run(&scratch, src);
            let restored = tree
                .costs
                .into_iter()
                .map(|(dst, cost)| (dst, cost - potentials[&src] + potentials[&dst]))
                .collect();
            paths.insert(src, tree.paths);
            costs.insert(src, restored);
        }

        Ok(AllPairs { paths, costs })
    }
}
