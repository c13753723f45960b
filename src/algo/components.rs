use crate::{
    node::Node,
    ops::{AdjacencyList, EdgeList, GraphType, Undirected},
    utils::{DisjointSet, NodeSet},
};

/// Connected components of an undirected graph.
///
/// Two equivalent implementations are provided: a DFS sweep and a
/// union-find pass over the edge list. They produce the same components,
/// possibly in different orders.
pub trait Components: AdjacencyList + GraphType<Dir = Undirected> + Sized {
    /// Collects the connected components by depth-first traversal,
    /// flushing one component per sweep.
    fn connected_components(&self) -> Vec<Vec<Node>>;

    /// Collects the connected components by unioning the endpoints of every
    /// edge and reading the groups back out of the disjoint set.
    fn connected_components_union_find(&self) -> Vec<Vec<Node>>
    where
        Self: EdgeList;
}

impl<G> Components for G
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    fn connected_components(&self) -> Vec<Vec<Node>> {
        let mut visited = NodeSet::default();
        let mut components = Vec::new();

        for root in self.nodes() {
            if visited.contains(&root) {
                continue;
            }
            visited.insert(root);

            let mut component = Vec::new();
            let mut stack = vec![root];
            while let Some(u) = stack.pop() {
                component.push(u);
                for v in self.neighbors_of(u) {
                    if visited.insert(v) {
                        stack.push(v);
                    }
                }
            }
            components.push(component);
        }

        components
    }

    fn connected_components_union_find(&self) -> Vec<Vec<Node>>
    where
        Self: EdgeList,
    {
        let mut sets = DisjointSet::new();
        for u in self.nodes() {
            sets.make_set(u);
        }
        for we in self.edges() {
            sets.union(we.edge.source(), we.edge.target());
        }
        sets.components()
    }
}
