use crate::{
    node::Node,
    ops::{AdjacencyList, Directed, GraphType},
    utils::{NodeMap, NodeSet},
};

/// Strongly connected components of a directed graph.
pub trait Scc: AdjacencyList + GraphType<Dir = Directed> + Sized {
    /// Computes the strongly connected components with Tarjan's algorithm.
    ///
    /// Components are emitted in the order their roots close, which is the
    /// reverse topological order of the condensation: every edge between
    /// two distinct components points from a later-emitted component to an
    /// earlier-emitted one. The order of nodes within a component is
    /// unspecified.
    fn tarjan_scc(&self) -> Vec<Vec<Node>>;
}

impl<G> Scc for G
where
    G: AdjacencyList + GraphType<Dir = Directed>,
{
    fn tarjan_scc(&self) -> Vec<Vec<Node>> {
        let mut tarjan = Tarjan {
            graph: self,
            index: 0,
            info: NodeMap::default(),
            on_stack: NodeSet::default(),
            path_stack: Vec::new(),
            call_stack: Vec::new(),
            sccs: Vec::new(),
        };

        for v in tarjan.graph.nodes() {
            if !tarjan.info.contains_key(&v) {
                tarjan.visit(v);
                tarjan.search();
            }
        }

        tarjan.sccs
    }
}

/// Discovery bookkeeping per node. The depth index counter starts at 1 and
/// is never reused; `index == low_link` identifies a component root.
#[derive(Debug, Clone, Copy)]
struct NodeInfo {
    index: usize,
    low_link: usize,
}

struct StackFrame<'a, G>
where
    G: AdjacencyList + 'a,
{
    node: Node,
    neighbors: G::NeighborIter<'a>,
}

struct Tarjan<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    index: usize,

    info: NodeMap<NodeInfo>,
    on_stack: NodeSet,

    path_stack: Vec<Node>,
    call_stack: Vec<StackFrame<'a, G>>,

    sccs: Vec<Vec<Node>>,
}

impl<'a, G> Tarjan<'a, G>
where
    G: AdjacencyList,
{
    /// Assigns the next depth index to `v` and puts a pristine stack frame
    /// on the call stack, i.e. the first half of a recursive call.
    fn visit(&mut self, v: Node) {
        self.index += 1;
        self.info.insert(
            v,
            NodeInfo {
                index: self.index,
                low_link: self.index,
            },
        );
        self.on_stack.insert(v);
        self.path_stack.push(v);
        self.call_stack.push(StackFrame {
            node: v,
            neighbors: self.graph.neighbors_of(v),
        });
    }

    /// Runs the depth-first search with an explicit call stack. The
    /// recursive formulation overflows the thread stack on deep graphs, so
    /// all state, including the neighbor iterators, lives in
    /// `self.call_stack` and a "recursive call" is a `continue` to the top
    /// of the loop.
    fn search(&mut self) {
        'recurse: while let Some(frame) = self.call_stack.last_mut() {
            let v = frame.node;

            for w in frame.neighbors.by_ref() {
                if !self.info.contains_key(&w) {
                    self.visit(w);
                    continue 'recurse;
                }
                if self.on_stack.contains(&w) {
                    let reached = self.info[&w].index;
                    let info = self.info.get_mut(&v).unwrap();
                    info.low_link = info.low_link.min(reached);
                }
            }

            // All neighbors handled: v's low link is final.
            self.call_stack.pop();
            let v_info = self.info[&v];

            if let Some(parent) = self.call_stack.last() {
                let info = self.info.get_mut(&parent.node).unwrap();
                info.low_link = info.low_link.min(v_info.low_link);
            }

            if v_info.index == v_info.low_link {
                // v is a root: everything above it on the path stack forms
                // one strongly connected component.
                let mut scc = Vec::new();
                loop {
                    let w = self.path_stack.pop().unwrap();
                    self.on_stack.remove(&w);
                    scc.push(w);
                    if w == v {
                        break;
                    }
                }
                self.sccs.push(scc);
            }
        }
    }
}

/// Sorts the nodes in each component increasingly and then the components
/// themselves by their smallest node. Useful to compare component lists
/// whose internal order is unspecified.
pub fn sort_components(mut components: Vec<Vec<Node>>) -> Vec<Vec<Node>> {
    components.iter_mut().for_each(|scc| scc.sort_unstable());
    components.sort_by(|a, b| a[0].cmp(&b[0]));
    components
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{ops::GraphOrder, repr::AdjMap};
    use itertools::Itertools;

    fn n(id: i64) -> Node {
        Node::new(id)
    }

    fn graph_of(edges: &[(i64, i64)]) -> AdjMap {
        AdjMap::from_edges(edges.iter().map(|&(u, v)| (u, v, 1.0)))
    }

    fn ids(scc: &[Node]) -> Vec<i64> {
        scc.iter().map(|u| u.id()).sorted().collect_vec()
    }

    #[test]
    fn classic_eight_node_example() {
        let graph = graph_of(&[
            (0, 1),
            (1, 2),
            (1, 7),
            (2, 3),
            (2, 6),
            (3, 4),
            (4, 2),
            (4, 5),
            (6, 3),
            (6, 5),
            (7, 0),
            (7, 6),
        ]);

        let sccs = graph.tarjan_scc();
        assert_eq!(sccs.len(), 3);

        // The condensation is a chain, so the emission order is fixed.
        assert_eq!(ids(&sccs[0]), vec![5]);
        assert_eq!(ids(&sccs[1]), vec![2, 3, 4, 6]);
        assert_eq!(ids(&sccs[2]), vec![0, 1, 7]);
    }

    #[test]
    fn single_component_cycle() {
        let graph = graph_of(&[(0, 1), (1, 0), (1, 2), (2, 1)]);
        let sccs = graph.tarjan_scc();
        assert_eq!(sccs.len(), 1);
        assert_eq!(ids(&sccs[0]), vec![0, 1, 2]);
    }

    #[test]
    fn directed_tree_has_singleton_components() {
        let graph = graph_of(&[(0, 1), (1, 2), (1, 3), (1, 4), (3, 5), (3, 6)]);
        let sccs = graph.tarjan_scc();
        assert_eq!(sccs.len(), 7);
        assert!(sccs.iter().all(|scc| scc.len() == 1));
    }

    #[test]
    fn partition_covers_every_node_once() {
        let graph = graph_of(&[
            (0, 1),
            (1, 2),
            (2, 0),
            (1, 3),
            (3, 4),
            (4, 3),
            (5, 3),
            (2, 2),
        ]);

        let sccs = graph.tarjan_scc();
        let all = sccs.iter().flatten().copied().collect_vec();
        assert_eq!(all.len(), graph.order());
        assert_eq!(all.iter().unique().count(), graph.order());

        // Cross-component edges point from later-emitted to earlier-emitted
        // components (reverse topological order of the condensation).
        let mut emitted_at = NodeMap::default();
        for (i, scc) in sccs.iter().enumerate() {
            for &u in scc {
                emitted_at.insert(u, i);
            }
        }
        for u in graph.nodes() {
            for v in graph.neighbors_of(u) {
                assert!(emitted_at[&u] >= emitted_at[&v]);
            }
        }
    }

    #[test]
    fn deep_cycle_does_not_overflow() {
        let len = 50_000i64;
        let graph = AdjMap::from_edges((0..len).map(|u| (u, (u + 1) % len, 1.0)));
        let sccs = graph.tarjan_scc();
        assert_eq!(sccs.len(), 1);
        assert_eq!(sccs[0].len(), len as usize);
    }
}
