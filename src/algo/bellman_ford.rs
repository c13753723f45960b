use itertools::Itertools;

use crate::{
    Error,
    node::Node,
    ops::SearchGraph,
    resolve::{Resolved, WeightFn},
    utils::NodeMap,
};

use super::{ShortestPathTree, walk_predecessors};

/// The Bellman-Ford algorithm.
///
/// Single-source shortest paths in the presence of negative edge weights.
/// If a negative-weight cycle is reachable from the source, the run aborts
/// with [`Error::NegativeCycle`] instead of looping forever.
///
/// Costs start out absent (interpreted as infinite) except for the source
/// at 0; every edge is then relaxed `|V| - 1` times, which is enough for a
/// shortest path of any length. A final scan over all edges detects
/// remaining relaxations, i.e. negative cycles.
///
/// # Examples
/// ```
/// use wgraphs::prelude::*;
///
/// let g = AdjMap::from_edges([(0, 1, 2.0), (1, 2, -1.0)]);
/// let tree = BellmanFord::new().run(&g, Node::new(0)).unwrap();
/// assert_eq!(tree.costs[&Node::new(2)], 1.0);
///
/// let g = AdjMap::from_edges([(0, 1, 1.0), (1, 0, -3.0)]);
/// assert!(BellmanFord::new().run(&g, Node::new(0)).is_err());
/// ```
#[derive(Default)]
pub struct BellmanFord<'a> {
    weight: Option<&'a WeightFn<'a>>,
}

impl<'a> BellmanFord<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the weight capability of the graph.
    pub fn with_weight(mut self, weight: &'a WeightFn<'a>) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn run<G>(&self, graph: &G, source: Node) -> Result<ShortestPathTree, Error>
    where
        G: SearchGraph,
    {
        let funcs = Resolved::new(graph, self.weight, None);
        let nodes = graph.nodes().collect_vec();

        let mut costs: NodeMap<f64> = NodeMap::default();
        let mut predecessor: NodeMap<Node> = NodeMap::default();
        costs.insert(source, 0.0);

        for _ in 1..graph.order() {
            let mut changed = false;
            for &u in &nodes {
                let Some(&from_cost) = costs.get(&u) else {
                    continue;
                };
                for v in funcs.successors(u) {
                    let dist = from_cost + funcs.edge_weight(u, v);
                    if costs.get(&v).is_none_or(|&known| dist < known) {
                        costs.insert(v, dist);
                        predecessor.insert(v, u);
                        changed = true;
                    }
                }
            }
            if !changed {
                break;
            }
        }

        for &u in &nodes {
            let Some(&from_cost) = costs.get(&u) else {
                continue;
            };
            for v in funcs.successors(u) {
                if from_cost + funcs.edge_weight(u, v) < costs[&v] {
                    return Err(Error::NegativeCycle);
                }
            }
        }

        let paths = costs
            .keys()
            .map(|&u| (u, walk_predecessors(&predecessor, u)))
            .collect();

        Ok(ShortestPathTree { paths, costs })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{algo::Dijkstra, repr::AdjMap};
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn n(id: i64) -> Node {
        Node::new(id)
    }

    #[test]
    fn detects_negative_cycle() {
        // a -> b (1), b -> a (-3), b -> c (2)
        let graph = AdjMap::from_edges([(0, 1, 1.0), (1, 0, -3.0), (1, 2, 2.0)]);
        assert!(matches!(
            BellmanFord::new().run(&graph, n(0)),
            Err(Error::NegativeCycle)
        ));
    }

    #[test]
    fn negative_cycle_out_of_reach_is_ignored() {
        let graph = AdjMap::from_edges([(0, 1, 1.0), (2, 3, -2.0), (3, 2, -2.0)]);
        let tree = BellmanFord::new().run(&graph, n(0)).unwrap();
        assert_eq!(tree.costs[&n(1)], 1.0);
        assert!(!tree.costs.contains_key(&n(2)));
    }

    #[test]
    fn negative_edges_reroute() {
        // The direct hop 0 -> 3 costs 1, but the detour through the negative
        // edge is cheaper.
        let graph = AdjMap::from_edges([
            (0, 1, 4.0),
            (1, 2, -3.0),
            (2, 3, 1.0),
            (0, 3, 3.0),
        ]);
        let tree = BellmanFord::new().run(&graph, n(0)).unwrap();

        assert_eq!(tree.costs[&n(3)], 2.0);
        assert_eq!(tree.paths[&n(3)], vec![n(0), n(1), n(2), n(3)]);
    }

    /// A chain needs the full `|V| - 1` relaxation rounds in the worst
    /// iteration order.
    #[test]
    fn chain_is_relaxed_to_the_end() {
        let len = 64i64;
        let graph = AdjMap::from_edges((0..len - 1).map(|u| (u, u + 1, 1.0)));
        let tree = BellmanFord::new().run(&graph, n(0)).unwrap();

        assert_eq!(tree.costs[&n(len - 1)], (len - 1) as f64);
        assert_eq!(tree.paths[&n(len - 1)].len(), len as usize);
    }

    #[test]
    fn agrees_with_dijkstra_on_non_negative_weights() {
        let rng = &mut Pcg64Mcg::seed_from_u64(23);

        for _ in 0..10 {
            let n_nodes = 30i64;
            let graph = AdjMap::from_edges((0..200).map(|_| {
                (
                    rng.random_range(0..n_nodes),
                    rng.random_range(0..n_nodes),
                    rng.random_range(0.0..5.0),
                )
            }));

            let bf = BellmanFord::new().run(&graph, n(0)).unwrap();
            let dij = Dijkstra::new().run(&graph, n(0));

            assert_eq!(bf.costs.len(), dij.costs.len());
            for (u, cost) in &bf.costs {
                assert!((cost - dij.costs[u]).abs() < 1e-9);
            }
        }
    }
}
