/*!
`wgraphs` is a library of graph algorithms for **weighted** graphs whose
nodes carry arbitrary (not necessarily contiguous) integer ids.

# Representation

**Nodes** are [`Node`](node::Node) values wrapping a stable `i64` id; all
per-node bookkeeping inside the algorithms keys on that id through hash
maps, so ids may be sparse. **Edges** are ordered
[`Edge(u, v)`](edge::Edge) pairs whose weight is supplied by the graph's
weight capability; absent edges report `f64::INFINITY`.

Two storage backends ship with the crate (see [`repr`]):

- [`AdjMap`](repr::AdjMap): directed, with successor and predecessor maps
- [`AdjMapUndir`](repr::AdjMapUndir): undirected, symmetric storage

# Design

Algorithms consume graphs through the capability traits of [`ops`]
(enumeration, forward/backward adjacency, edge tests, weights, heuristic,
mutation) and never depend on a concrete representation. Directedness is a
compile-time property ([`GraphType`](ops::GraphType)), so algorithms that
only make sense on one kind of graph say so in their bounds.

Search algorithms are configurable structs in the *builder* style: create
one, optionally attach weight/heuristic overrides, then run it against a
graph. Overrides take precedence over the graph's own capabilities, which
in turn default to uniform cost 1 and the null heuristic. Structural
algorithms (components, cliques, cores, ...) are exposed as traits
implemented for every graph with the required capabilities.

```
use wgraphs::prelude::*;

let g = AdjMapUndir::from_edges([(1, 2, 7.0), (2, 3, 10.0), (1, 3, 9.0)]);

let found = AStar::new().run(&g, Node::new(1), Node::new(3));
assert_eq!(found.path, vec![Node::new(1), Node::new(3)]);
assert_eq!(found.cost, 9.0);
```

# Algorithms

- Single-pair / single-source: [`AStar`](algo::AStar),
  [`Dijkstra`](algo::Dijkstra), [`BellmanFord`](algo::BellmanFord)
  (negative weights), [`depth_first_search`](algo::depth_first_search),
  [`breadth_first_search`](algo::breadth_first_search)
- All-pairs: [`Johnson`](algo::Johnson)
- Dynamic re-planning: [`DStarLite`](algo::DStarLite)
- Structure: [`Scc`](algo::Scc) (Tarjan), [`Components`](algo::Components),
  [`MaximalCliques`](algo::MaximalCliques) (Bron-Kerbosch),
  [`CoreDecomposition`](algo::CoreDecomposition) (degeneracy / k-cores)
- Spanning trees: [`Prim`](algo::Prim), [`Kruskal`](algo::Kruskal)
- Control flow: [`dominators`](algo::dominators),
  [`post_dominators`](algo::post_dominators)
- Validation: [`is_path`](algo::is_path)

All algorithms run synchronously on the calling thread and never mutate
their input graph; the ones that need scratch space (Johnson, D* Lite)
keep private copies.
*/

use thiserror::Error as ThisError;

pub mod algo;
pub mod edge;
pub mod node;
pub mod ops;
pub mod repr;
pub mod resolve;
pub mod utils;

/// Errors reported by the fallible algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum Error {
    /// A negative-weight cycle is reachable from the source, so shortest
    /// paths are unbounded below. Reported by Bellman-Ford and Johnson.
    #[error("negative-weight cycle detected")]
    NegativeCycle,
}

/// `wgraphs::prelude` includes the node/edge types, all capability traits,
/// the bundled graph representations and every algorithm entry point.
pub mod prelude {
    pub use super::{
        Error,
        algo::*,
        edge::{Edge, WeightedEdge},
        node::Node,
        ops::*,
        repr::*,
        resolve::{HeuristicFn, WeightFn},
        utils::{NodeMap, NodeSet},
    };
}
