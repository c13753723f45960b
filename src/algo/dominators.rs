use itertools::Itertools;

use crate::{
    node::Node,
    ops::{AdjacencyList, InAdjacency},
    utils::{NodeMap, NodeSet},
};

/// All dominators of every node, by iterative data-flow.
///
/// `d` dominates `n` iff every path from `start` to `n` passes through
/// `d`. The returned map is not pruned: it contains every dominator of
/// every node, including the node itself (no strict or immediate
/// dominator extraction).
///
/// Each set starts as "all nodes" (except `dom(start) = {start}`) and is
/// repeatedly narrowed to `{v} ∪ ⋂ dom(p)` over the predecessors `p` of
/// `v`, until a full pass changes nothing. Set comparison is structural,
/// so the fixpoint is well-defined.
///
/// # Examples
/// ```
/// use wgraphs::prelude::*;
///
/// // A diamond: both branches re-join at 3.
/// let g = AdjMap::from_edges([
///     (0, 1, 1.0),
///     (0, 2, 1.0),
///     (1, 3, 1.0),
///     (2, 3, 1.0),
/// ]);
/// let dom = dominators(&g, Node::new(0));
///
/// assert!(dom[&Node::new(3)].contains(&Node::new(0)));
/// assert!(!dom[&Node::new(3)].contains(&Node::new(1)));
/// ```
pub fn dominators<G>(graph: &G, start: Node) -> NodeMap<NodeSet>
where
    G: InAdjacency,
{
    flow(graph, start, |u| graph.in_neighbors_of(u).collect_vec())
}

/// All post-dominators of every node: dominators over the transposed
/// graph, anchored at `end`. `d` post-dominates `n` iff every path from
/// `n` to `end` passes through `d`.
pub fn post_dominators<G>(graph: &G, end: Node) -> NodeMap<NodeSet>
where
    G: AdjacencyList,
{
    flow(graph, end, |u| graph.neighbors_of(u).collect_vec())
}

fn flow<G, F>(graph: &G, root: Node, mut adjacent: F) -> NodeMap<NodeSet>
where
    G: AdjacencyList,
    F: FnMut(Node) -> Vec<Node>,
{
    let nodes = graph.nodes().collect_vec();
    let all: NodeSet = nodes.iter().copied().collect();

    let mut dom: NodeMap<NodeSet> = NodeMap::default();
    for &u in &nodes {
        if u == root {
            dom.insert(u, NodeSet::from_iter([root]));
        } else {
            dom.insert(u, all.clone());
        }
    }

    let mut changed = true;
    while changed {
        changed = false;
        for &u in &nodes {
            if u == root {
                continue;
            }
            let flows_in = adjacent(u);
            if flows_in.is_empty() {
                continue;
            }

            let mut narrowed = dom[&flows_in[0]].clone();
            for p in &flows_in[1..] {
                narrowed.retain(|d| dom[p].contains(d));
            }
            narrowed.insert(u);

            if narrowed != dom[&u] {
                dom.insert(u, narrowed);
                changed = true;
            }
        }
    }

    dom
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{ops::GraphOrder, repr::AdjMap};

    fn n(id: i64) -> Node {
        Node::new(id)
    }

    fn set(ids: &[i64]) -> NodeSet {
        ids.iter().map(|&id| n(id)).collect()
    }

    /// A small control-flow graph: a branch re-joining at 4, then an exit.
    ///
    /// ```text
    /// 0 -> 1 -> {2, 3} -> 4 -> 5
    /// ```
    fn branch_cfg() -> AdjMap {
        AdjMap::from_edges([
            (0, 1, 1.0),
            (1, 2, 1.0),
            (1, 3, 1.0),
            (2, 4, 1.0),
            (3, 4, 1.0),
            (4, 5, 1.0),
        ])
    }

    #[test]
    fn dominators_of_branching_flow() {
        let dom = dominators(&branch_cfg(), n(0));

        assert_eq!(dom[&n(0)], set(&[0]));
        assert_eq!(dom[&n(1)], set(&[0, 1]));
        assert_eq!(dom[&n(2)], set(&[0, 1, 2]));
        assert_eq!(dom[&n(3)], set(&[0, 1, 3]));
        assert_eq!(dom[&n(4)], set(&[0, 1, 4]));
        assert_eq!(dom[&n(5)], set(&[0, 1, 4, 5]));
    }

    #[test]
    fn post_dominators_of_branching_flow() {
        let pdom = post_dominators(&branch_cfg(), n(5));

        assert_eq!(pdom[&n(5)], set(&[5]));
        assert_eq!(pdom[&n(4)], set(&[4, 5]));
        assert_eq!(pdom[&n(2)], set(&[2, 4, 5]));
        assert_eq!(pdom[&n(3)], set(&[3, 4, 5]));
        assert_eq!(pdom[&n(1)], set(&[1, 4, 5]));
        assert_eq!(pdom[&n(0)], set(&[0, 1, 4, 5]));
    }

    #[test]
    fn loops_do_not_add_dominators() {
        // 0 -> 1 -> 2 -> 1 back-edge; 2 -> 3 exit
        let graph = AdjMap::from_edges([
            (0, 1, 1.0),
            (1, 2, 1.0),
            (2, 1, 1.0),
            (2, 3, 1.0),
        ]);
        let dom = dominators(&graph, n(0));

        assert_eq!(dom[&n(1)], set(&[0, 1]));
        assert_eq!(dom[&n(2)], set(&[0, 1, 2]));
        assert_eq!(dom[&n(3)], set(&[0, 1, 2, 3]));
    }

    #[test]
    fn fixpoint_is_stable() {
        let graph = branch_cfg();
        let dom = dominators(&graph, n(0));

        // Re-applying the data-flow equation changes no set.
        for u in graph.nodes() {
            if u == n(0) {
                continue;
            }
            let preds = graph.in_neighbors_of(u).collect_vec();
            let mut expected = dom[&preds[0]].clone();
            for p in &preds[1..] {
                expected.retain(|d| dom[p].contains(d));
            }
            expected.insert(u);
            assert_eq!(expected, dom[&u]);
        }
    }

    #[test]
    fn unreachable_nodes_keep_the_full_set() {
        // 9 has no incoming edges, so the equation never narrows it.
        let graph = AdjMap::from_edges([(0, 1, 1.0), (9, 1, 1.0)]);
        let dom = dominators(&graph, n(0));
        assert_eq!(dom[&n(9)], set(&[0, 1, 9]));
        assert_eq!(dom[&n(1)], set(&[0, 1]));
    }
}
