use crate::{
    node::Node,
    ops::{AdjacencyList, AdjacencyTest, SearchGraph},
    utils::{NodeMap, NodeSet},
};

use super::{AStar, walk_predecessors};

/// Depth-first search from `start` to `goal`.
///
/// Expands the most recently discovered node first, so the returned path
/// is valid but not necessarily shortest. Returns an empty path when the
/// goal is unreachable.
pub fn depth_first_search<G>(graph: &G, start: Node, goal: Node) -> Vec<Node>
where
    G: AdjacencyList,
{
    let mut closed = NodeSet::default();
    let mut predecessor: NodeMap<Node> = NodeMap::default();
    let mut stack = vec![start];

    while let Some(curr) = stack.pop() {
        if closed.contains(&curr) {
            continue;
        }

        if curr == goal {
            return walk_predecessors(&predecessor, goal);
        }

        closed.insert(curr);

        for v in graph.neighbors_of(curr) {
            if closed.contains(&v) {
                continue;
            }
            predecessor.insert(v, curr);
            stack.push(v);
        }
    }

    Vec::new()
}

/// Breadth-first search from `start` to `goal`: the path with the fewest
/// edges, realized as [`AStar`] under uniform cost and the null heuristic.
///
/// Returns the path (empty when unreachable) and the number of nodes
/// visited during the search.
pub fn breadth_first_search<G>(graph: &G, start: Node, goal: Node) -> (Vec<Node>, usize)
where
    G: SearchGraph,
{
    let found = AStar::new()
        .with_weight(&|_| 1.0)
        .with_heuristic(&|_, _| 0.0)
        .run(graph, start, goal);
    (found.path, found.expanded)
}

/// Returns `true` if `path` is a connected path within `graph`.
///
/// Empty paths are trivially valid; a single-node path is valid iff the
/// node exists in the graph; longer paths are valid iff every consecutive
/// pair is connected by an edge. Edge direction follows the graph's
/// capability, so on a directed graph each hop must follow an arc while an
/// undirected graph accepts either orientation.
pub fn is_path<G>(path: &[Node], graph: &G) -> bool
where
    G: AdjacencyTest,
{
    match path {
        [] => true,
        [u] => graph.has_node(*u),
        _ => path.windows(2).all(|pair| graph.has_edge(pair[0], pair[1])),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        edge::Edge,
        ops::*,
        repr::{AdjMap, AdjMapUndir},
    };

    fn n(id: i64) -> Node {
        Node::new(id)
    }

    #[test]
    fn bfs_visits_in_breadth_order() {
        let graph = AdjMap::from_edges([(0, 1, 1.0), (0, 2, 1.0), (2, 3, 1.0)]);
        let (path, visited) = breadth_first_search(&graph, n(0), n(3));

        assert_eq!(path, vec![n(0), n(2), n(3)]);
        assert_eq!(visited, 4);
    }

    #[test]
    fn bfs_ignores_weights() {
        // The weighted short-cut is irrelevant under uniform cost.
        let graph = AdjMap::from_edges([(0, 1, 0.1), (1, 2, 0.1), (0, 2, 100.0)]);
        let (path, _) = breadth_first_search(&graph, n(0), n(2));
        assert_eq!(path, vec![n(0), n(2)]);
    }

    #[test]
    fn dfs_finds_some_path() {
        let graph = AdjMap::from_edges([
            (0, 1, 1.0),
            (1, 2, 1.0),
            (2, 3, 1.0),
            (0, 3, 1.0),
            (3, 4, 1.0),
        ]);

        let path = depth_first_search(&graph, n(0), n(4));
        assert!(!path.is_empty());
        assert_eq!(*path.first().unwrap(), n(0));
        assert_eq!(*path.last().unwrap(), n(4));
        assert!(is_path(&path, &graph));
    }

    #[test]
    fn dfs_unreachable_goal() {
        let graph = AdjMap::from_edges([(0, 1, 1.0), (2, 3, 1.0)]);
        assert_eq!(depth_first_search(&graph, n(0), n(3)), vec![]);
    }

    #[test]
    fn is_path_on_directed_graphs() {
        let mut graph = AdjMap::empty();

        assert!(is_path(&[], &graph));
        assert!(!is_path(&[n(0)], &graph));

        graph.add_node(n(0));
        assert!(is_path(&[n(0)], &graph));

        graph.add_node(n(1));
        assert!(!is_path(&[n(0), n(1)], &graph));

        graph.set_edge(Edge::from((0, 1)), 1.0);
        assert!(is_path(&[n(0), n(1)], &graph));
        assert!(!is_path(&[n(1), n(0)], &graph), "arcs have a direction");

        graph.set_edge(Edge::from((1, 2)), 1.0);
        assert!(is_path(&[n(0), n(1), n(2)], &graph));
    }

    #[test]
    fn is_path_on_undirected_graphs() {
        let graph = AdjMapUndir::from_edges([(0, 1, 1.0), (1, 2, 1.0)]);
        assert!(is_path(&[n(2), n(1), n(0)], &graph));
        assert!(!is_path(&[n(0), n(2)], &graph));
    }
}
