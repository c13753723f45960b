mod astar;
mod bellman_ford;
mod cliques;
mod components;
mod dijkstra;
mod dominators;
mod dstar_lite;
mod johnson;
mod mst;
mod ordering;
mod tarjan;
mod traversal;

pub use astar::*;
pub use bellman_ford::*;
pub use cliques::*;
pub use components::*;
pub use dijkstra::*;
pub use dominators::*;
pub use dstar_lite::*;
pub use johnson::*;
pub use mst::*;
pub use ordering::*;
pub use tarjan::*;
pub use traversal::*;

use crate::{node::Node, utils::NodeMap};

/// Rebuilds a path by walking a predecessor map backwards from `goal`.
pub(crate) fn walk_predecessors(predecessor: &NodeMap<Node>, goal: Node) -> Vec<Node> {
    let mut path = vec![goal];
    let mut curr = goal;
    while let Some(&prev) = predecessor.get(&curr) {
        path.push(prev);
        curr = prev;
    }
    path.reverse();
    path
}
