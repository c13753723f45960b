use itertools::Itertools;

use crate::{
    node::Node,
    ops::{AdjacencyList, GraphType, Undirected},
    utils::NodeSet,
};

use super::CoreDecomposition;

/// Maximal clique enumeration for undirected graphs.
pub trait MaximalCliques: AdjacencyList + GraphType<Dir = Undirected> + Sized {
    /// Enumerates all maximal cliques with the Bron-Kerbosch algorithm.
    ///
    /// The outer loop walks the vertices in degeneracy order (see
    /// [`CoreDecomposition::vertex_ordering`]); the inner recursion prunes
    /// candidates with a pivot. By default the pivot is simply the first
    /// available candidate; the `tomita-pivot` feature switches to the
    /// Tomita-Tanaka-Takahashi choice maximizing `|P ∩ N(u)|`.
    ///
    /// The order of cliques and of the nodes within a clique is
    /// unspecified.
    fn bron_kerbosch(&self) -> Vec<Vec<Node>>;
}

impl<G> MaximalCliques for G
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    fn bron_kerbosch(&self) -> Vec<Vec<Node>> {
        let order = self.vertex_ordering().order;

        let mut candidates: NodeSet = self.nodes().collect();
        let mut excluded = NodeSet::default();
        let mut cliques = Vec::new();

        for v in order {
            let adjacent: NodeSet = self.neighbors_of(v).collect();
            extend(
                self,
                vec![v],
                candidates.intersection(&adjacent).copied().collect(),
                excluded.intersection(&adjacent).copied().collect(),
                &mut cliques,
            );
            candidates.remove(&v);
            excluded.insert(v);
        }

        cliques
    }
}

/// One level of the Bron-Kerbosch recursion: `clique` is the growing
/// clique R, `candidates` is P, `excluded` is X. Emits R when both P and X
/// are exhausted.
fn extend<G>(
    graph: &G,
    clique: Vec<Node>,
    mut candidates: NodeSet,
    mut excluded: NodeSet,
    out: &mut Vec<Vec<Node>>,
) where
    G: AdjacencyList,
{
    if candidates.is_empty() && excluded.is_empty() {
        out.push(clique);
        return;
    }

    let pivot_neighbors: NodeSet = graph
        .neighbors_of(choose_pivot(graph, &candidates, &excluded))
        .collect();

    for v in candidates.iter().copied().collect_vec() {
        if pivot_neighbors.contains(&v) {
            continue;
        }

        let adjacent: NodeSet = graph.neighbors_of(v).collect();
        let mut grown = clique.clone();
        grown.push(v);

        extend(
            graph,
            grown,
            candidates.intersection(&adjacent).copied().collect(),
            excluded.intersection(&adjacent).copied().collect(),
            out,
        );

        candidates.remove(&v);
        excluded.insert(v);
    }
}

/// Picks the cheapest available pivot: any candidate, or any excluded node
/// when no candidate remains.
#[cfg(not(feature = "tomita-pivot"))]
fn choose_pivot<G>(_graph: &G, candidates: &NodeSet, excluded: &NodeSet) -> Node
where
    G: AdjacencyList,
{
    candidates
        .iter()
        .chain(excluded.iter())
        .next()
        .copied()
        .expect("pivot from empty candidate sets")
}

/// Picks the pivot maximizing `|candidates ∩ N(u)|` over both sets
/// (Tomita-Tanaka-Takahashi).
#[cfg(feature = "tomita-pivot")]
fn choose_pivot<G>(graph: &G, candidates: &NodeSet, excluded: &NodeSet) -> Node
where
    G: AdjacencyList,
{
    let mut pivot = None;
    let mut best = 0;
    for &u in candidates.iter().chain(excluded.iter()) {
        let covered = graph
            .neighbors_of(u)
            .filter(|v| candidates.contains(v))
            .count();
        if pivot.is_none() || covered > best {
            pivot = Some(u);
            best = covered;
        }
    }
    pivot.expect("pivot from empty candidate sets")
}
