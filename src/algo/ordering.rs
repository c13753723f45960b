use itertools::Itertools;

use crate::{
    node::Node,
    ops::{AdjacencyList, GraphType, Undirected},
    utils::NodeMap,
};

/// Result of the degeneracy decomposition of an undirected graph.
///
/// `order` lists every node such that each has few neighbors *earlier* in
/// the ordering (at most the degeneracy of the graph). `cores[i]` is the
/// full i-core: every node whose coreness is at least `i`, so
/// `cores[i + 1]` is always a subset of `cores[i]` and `cores.len() - 1`
/// is the degeneracy.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexOrder {
    pub order: Vec<Node>,
    pub cores: Vec<Vec<Node>>,
}

impl VertexOrder {
    /// The degeneracy of the graph: the largest `k` with a non-empty
    /// k-core.
    pub fn degeneracy(&self) -> usize {
        self.cores.len() - 1
    }
}

/// Degeneracy ordering and k-core decomposition.
pub trait CoreDecomposition: AdjacencyList + GraphType<Dir = Undirected> + Sized {
    /// Repeatedly removes a vertex of minimum residual degree, prepending
    /// it to the output order. The largest residual degree ever removed is
    /// the degeneracy `k`, and the vertices removed at residual degree
    /// `>= i` form the i-core.
    fn vertex_ordering(&self) -> VertexOrder;
}

impl<G> CoreDecomposition for G
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    fn vertex_ordering(&self) -> VertexOrder {
        let nodes = self.nodes().collect_vec();

        // Residual degrees and cached neighborhoods.
        let mut degrees: NodeMap<usize> = NodeMap::default();
        let mut neighbors: NodeMap<Vec<Node>> = NodeMap::default();
        let mut max_degree = 0;
        for &u in &nodes {
            let adjacent = self.neighbors_of(u).collect_vec();
            max_degree = max_degree.max(adjacent.len());
            degrees.insert(u, adjacent.len());
            neighbors.insert(u, adjacent);
        }

        // buckets[d] holds the not-yet-removed vertices of residual
        // degree d.
        let mut buckets: Vec<Vec<Node>> = vec![Vec::new(); max_degree + 1];
        for &u in &nodes {
            buckets[degrees[&u]].push(u);
        }

        let mut removal = Vec::with_capacity(nodes.len());
        let mut k = 0;
        let mut level_sizes = vec![0usize];

        for _ in 0..nodes.len() {
            let i = buckets
                .iter()
                .position(|bucket| !bucket.is_empty())
                .expect("a vertex remains");

            if i > k {
                k = i;
                level_sizes.resize(k + 1, 0);
            }

            let v = buckets[i].pop().unwrap();
            removal.push(v);
            level_sizes[k] += 1;
            degrees.remove(&v);

            // Each not-yet-removed neighbor loses one residual degree and
            // moves down one bucket.
            for &w in &neighbors[&v] {
                let Some(&dw) = degrees.get(&w) else {
                    continue;
                };
                if let Some(pos) = buckets[dw].iter().position(|&x| x == w) {
                    buckets[dw].swap_remove(pos);
                    buckets[dw - 1].push(w);
                    degrees.insert(w, dw - 1);
                }
            }
        }

        // The i-core is the tail of the removal sequence from the first
        // vertex removed at residual degree i onward.
        let mut cores = Vec::with_capacity(level_sizes.len());
        let mut start = 0;
        for &count in &level_sizes {
            cores.push(removal[start..].to_vec());
            start += count;
        }

        let order = removal.into_iter().rev().collect_vec();
        VertexOrder { order, cores }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{algo::components::test::batagelj_zaversnik, repr::AdjMapUndir};

    fn n(id: i64) -> Node {
        Node::new(id)
    }

    fn ids(core: &[Node]) -> Vec<i64> {
        core.iter().map(|u| u.id()).sorted().collect_vec()
    }

    #[test]
    fn small_three_core() {
        let graph = AdjMapUndir::from_edges(
            [
                (0, 1),
                (0, 2),
                (0, 4),
                (0, 6),
                (1, 2),
                (1, 4),
                (1, 6),
                (2, 3),
                (2, 6),
                (3, 4),
                (3, 5),
                (4, 6),
            ]
            .map(|(u, v)| (u, v, 1.0)),
        );

        let decomposition = graph.vertex_ordering();
        assert_eq!(decomposition.degeneracy(), 3);
        assert_eq!(decomposition.order.len(), 7);

        assert_eq!(ids(&decomposition.cores[0]), (0..=6).collect_vec());
        assert_eq!(ids(&decomposition.cores[1]), (0..=6).collect_vec());
        assert_eq!(ids(&decomposition.cores[2]), vec![0, 1, 2, 3, 4, 6]);
        assert_eq!(ids(&decomposition.cores[3]), vec![0, 1, 2, 4, 6]);
    }

    #[test]
    fn batagelj_zaversnik_cores() {
        let decomposition = batagelj_zaversnik().vertex_ordering();
        assert_eq!(decomposition.degeneracy(), 3);

        assert_eq!(ids(&decomposition.cores[0]), (0..=20).collect_vec());
        assert_eq!(ids(&decomposition.cores[1]), (1..=20).collect_vec());
        assert_eq!(
            ids(&decomposition.cores[2]),
            vec![1, 2, 3, 4, 6, 7, 8, 11, 12, 13, 14, 15, 17, 18, 19, 20],
        );
        assert_eq!(
            ids(&decomposition.cores[3]),
            vec![6, 7, 8, 14, 17, 18, 19, 20],
        );
    }

    #[test]
    fn cores_are_nested_and_dense_enough() {
        let graph = batagelj_zaversnik();
        let decomposition = graph.vertex_ordering();

        for i in 1..decomposition.cores.len() {
            let outer: Vec<i64> = ids(&decomposition.cores[i - 1]);
            for u in &decomposition.cores[i] {
                assert!(outer.contains(&u.id()));
            }

            // every vertex of the i-core has >= i neighbors inside it
            let members: Vec<Node> = decomposition.cores[i].clone();
            for &u in &members {
                let inside = graph
                    .neighbors_of(u)
                    .filter(|v| members.contains(v))
                    .count();
                assert!(inside >= i);
            }
        }
    }
}
