/*!
# Graph Representations

Concrete graph storage backends:
- [`AdjMap`]: directed, hash-keyed adjacency maps with both orientations.
- [`AdjMapUndir`]: undirected, symmetric hash-keyed adjacency map.

Both accept arbitrary `i64` node ids and implement every capability trait
from [`ops`](crate::ops). The algorithms also use them internally wherever
they need scratch space of their own (Johnson's reweighted copy, the D*
Lite world).
*/

mod adjacency;

pub use adjacency::{AdjMap, AdjMapUndir, EdgesIter};
