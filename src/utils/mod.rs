/*!
# Utilities

Shared data structures backing the algorithms:
- [`ScoreHeap`](heap::ScoreHeap): indexed binary min-heap keyed by f-score,
- [`KeyQueue`](heap::KeyQueue): indexed queue keyed by lexicographic
  [`Key`](heap::Key) pairs,
- [`DisjointSet`](disjoint::DisjointSet): union-find over node ids,
- [`NodeMap`] / [`NodeSet`]: the id-keyed map and set types used for all
  per-node bookkeeping.
*/

use fxhash::{FxHashMap, FxHashSet};

use crate::node::Node;

pub mod disjoint;
pub mod heap;

pub use disjoint::DisjointSet;
pub use heap::{Key, KeyQueue, ScoreHeap};

/// Map keyed by node id. All algorithm bookkeeping uses this type, so
/// correctness never depends on node ids being contiguous or dense.
pub type NodeMap<V> = FxHashMap<Node, V>;

/// Set of node ids.
pub type NodeSet = FxHashSet<Node>;
