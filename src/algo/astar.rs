use crate::{
    node::Node,
    ops::SearchGraph,
    resolve::{HeuristicFn, Resolved, WeightFn},
    utils::{NodeMap, NodeSet, ScoreHeap},
};

use super::walk_predecessors;

/// Result of a single-pair search: the node sequence from start to goal
/// (empty if the goal is unreachable), the total cost (0 if unreachable)
/// and the number of nodes *expanded*, i.e. popped from the open set.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    pub path: Vec<Node>,
    pub cost: f64,
    pub expanded: usize,
}

impl ShortestPath {
    /// Returns `true` if the goal was reached.
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }
}

/// A* best-first search.
///
/// Finds a cheapest path between two nodes, guided by a heuristic estimate
/// of the remaining distance. With an admissible heuristic (one that never
/// overestimates) the returned path is optimal; a consistent heuristic
/// additionally guarantees that no node is expanded twice. Closed nodes are
/// never re-opened.
///
/// Edge weights must be non-negative. Unreachability is not an error: the
/// result carries an empty path and cost 0.
///
/// Weight and heuristic overrides take precedence over the graph's own
/// capabilities; without either, the graph's defaults apply (uniform cost
/// 1, null heuristic).
///
/// # Examples
/// ```
/// use wgraphs::prelude::*;
///
/// let g = AdjMapUndir::from_edges([(0, 1, 1.0), (1, 2, 2.0), (0, 2, 5.0)]);
/// let found = AStar::new().run(&g, Node::new(0), Node::new(2));
///
/// assert_eq!(found.path, vec![Node::new(0), Node::new(1), Node::new(2)]);
/// assert_eq!(found.cost, 3.0);
/// ```
#[derive(Default)]
pub struct AStar<'a> {
    weight: Option<&'a WeightFn<'a>>,
    heuristic: Option<&'a HeuristicFn<'a>>,
}

impl<'a> AStar<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the weight capability of the graph.
    pub fn with_weight(mut self, weight: &'a WeightFn<'a>) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Overrides the heuristic capability of the graph.
    pub fn with_heuristic(mut self, heuristic: &'a HeuristicFn<'a>) -> Self {
        self.heuristic = Some(heuristic);
        self
    }

    pub fn run<G>(&self, graph: &G, start: Node, goal: Node) -> ShortestPath
    where
        G: SearchGraph,
    {
        let funcs = Resolved::new(graph, self.weight, self.heuristic);

        let mut open = ScoreHeap::new();
        let mut closed = NodeSet::default();
        let mut predecessor: NodeMap<Node> = NodeMap::default();
        let mut expanded = 0;

        open.push(start, 0.0, funcs.heuristic(start, goal));

        while let Some(curr) = open.pop() {
            expanded += 1;

            if curr.node == goal {
                return ShortestPath {
                    path: walk_predecessors(&predecessor, goal),
                    cost: curr.g,
                    expanded,
                };
            }

            closed.insert(curr.node);

            for v in funcs.successors(curr.node) {
                if closed.contains(&v) {
                    continue;
                }

                let tentative = curr.g + funcs.edge_weight(curr.node, v);

                match open.find(v) {
                    None => {
                        predecessor.insert(v, curr.node);
                        open.push(v, tentative, tentative + funcs.heuristic(v, goal));
                    }
                    Some(existing) if tentative < existing.g => {
                        predecessor.insert(v, curr.node);
                        open.decrease(v, tentative, tentative + funcs.heuristic(v, goal));
                    }
                    Some(_) => {}
                }
            }
        }

        ShortestPath {
            path: Vec::new(),
            cost: 0.0,
            expanded,
        }
    }
}
