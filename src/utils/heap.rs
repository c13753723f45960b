/*!
# Indexed Priority Queues

Two binary min-heaps that keep a side map from node id to heap slot, so
membership tests and key changes are O(1) lookup + O(log n) re-sift:

- [`ScoreHeap`] orders `(node, g, f)` entries by `f` and backs A* and
  Dijkstra (Dijkstra pushes `f = g`).
- [`KeyQueue`] orders nodes by a lexicographic [`Key`] pair as required by
  the D* Lite planner.

Both embed nodes by value; the position maps hold indices, never pointers.
Scores must not be NaN.
*/

use crate::{node::Node, utils::NodeMap};

/// A heap entry of [`ScoreHeap`]: a node with its g- and f-score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scored {
    pub node: Node,
    pub g: f64,
    pub f: f64,
}

/// Binary min-heap of `(node, g, f)` entries ordered by `f`, with a side
/// map from node id to heap position.
///
/// Invariant: for every index `i`, `f[i] <= f[2i+1]`, `f[i] <= f[2i+2]` and
/// `position[entries[i].node] == i`.
///
/// # Examples
/// ```
/// use wgraphs::{node::Node, utils::ScoreHeap};
///
/// let mut heap = ScoreHeap::new();
/// heap.push(Node::new(1), 0.0, 2.0);
/// heap.push(Node::new(2), 0.0, 1.0);
/// heap.decrease(Node::new(1), 0.0, 0.5);
///
/// assert_eq!(heap.pop().unwrap().node, Node::new(1));
/// assert_eq!(heap.pop().unwrap().node, Node::new(2));
/// assert!(heap.pop().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScoreHeap {
    entries: Vec<Scored>,
    position: NodeMap<usize>,
}

impl ScoreHeap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if the node is currently on the heap.
    pub fn contains(&self, node: Node) -> bool {
        self.position.contains_key(&node)
    }

    /// Returns the stored scores of a node in O(1).
    pub fn find(&self, node: Node) -> Option<Scored> {
        self.position.get(&node).map(|&i| self.entries[i])
    }

    /// Pushes a new entry. The caller must not push a node that is already
    /// on the heap; use [`ScoreHeap::decrease`] to change its scores.
    pub fn push(&mut self, node: Node, g: f64, f: f64) {
        debug_assert!(!self.contains(node));
        let i = self.entries.len();
        self.entries.push(Scored { node, g, f });
        self.position.insert(node, i);
        self.sift_up(i);
    }

    /// Removes and returns the entry with the minimum f-score.
    pub fn pop(&mut self) -> Option<Scored> {
        if self.entries.is_empty() {
            return None;
        }
        let last = self.entries.len() - 1;
        self.swap_entries(0, last);
        let top = self.entries.pop().unwrap();
        self.position.remove(&top.node);
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Some(top)
    }

    /// Replaces the stored scores of `node` and re-sifts. If the node is
    /// not on the heap, this is a no-op.
    pub fn decrease(&mut self, node: Node, g: f64, f: f64) {
        let Some(&i) = self.position.get(&node) else {
            return;
        };
        self.entries[i].g = g;
        self.entries[i].f = f;
        let i = self.sift_up(i);
        self.sift_down(i);
    }

    fn swap_entries(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        self.entries.swap(i, j);
        self.position.insert(self.entries[i].node, i);
        self.position.insert(self.entries[j].node, j);
    }

    /// Moves the entry at `i` up while it is smaller than its parent.
    /// Returns the final index.
    fn sift_up(&mut self, mut i: usize) -> usize {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.entries[i].f < self.entries[parent].f {
                self.swap_entries(i, parent);
                i = parent;
            } else {
                break;
            }
        }
        i
    }

    /// Moves the entry at `i` down while a child is smaller. Returns the
    /// final index.
    fn sift_down(&mut self, mut i: usize) -> usize {
        loop {
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            let mut smallest = i;
            if left < self.entries.len() && self.entries[left].f < self.entries[smallest].f {
                smallest = left;
            }
            if right < self.entries.len() && self.entries[right].f < self.entries[smallest].f {
                smallest = right;
            }
            if smallest == i {
                return i;
            }
            self.swap_entries(i, smallest);
            i = smallest;
        }
    }
}

/// A D* Lite priority, ordered lexicographically:
/// `a < b  iff  a.0 < b.0  or  (a.0 == b.0 and a.1 < b.1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Key(pub f64, pub f64);

impl Key {
    /// Strict lexicographic comparison.
    #[inline]
    pub fn less(self, other: Key) -> bool {
        self.0 < other.0 || (self.0 == other.0 && self.1 < other.1)
    }
}

/// Indexed min-queue of nodes ordered by lexicographic [`Key`].
///
/// An empty queue is signaled via `len() == 0`; callers must not read
/// [`KeyQueue::top`] on an empty queue.
#[derive(Debug, Clone, Default)]
pub struct KeyQueue {
    entries: Vec<(Node, Key)>,
    position: NodeMap<usize>,
}

impl KeyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if the node is currently queued.
    pub fn contains(&self, node: Node) -> bool {
        self.position.contains_key(&node)
    }

    /// Returns the node with the smallest key and its key.
    ///
    /// **Panics on an empty queue**; check [`KeyQueue::len`] first.
    pub fn top(&self) -> (Node, Key) {
        self.entries[0]
    }

    /// Inserts a node with the given key. The caller must not insert a node
    /// that is already queued; use [`KeyQueue::update`] instead.
    pub fn insert(&mut self, node: Node, key: Key) {
        debug_assert!(!self.contains(node));
        let i = self.entries.len();
        self.entries.push((node, key));
        self.position.insert(node, i);
        self.sift_up(i);
    }

    /// Changes the key of a queued node and repositions it. If the node is
    /// not queued, this is a no-op.
    pub fn update(&mut self, node: Node, key: Key) {
        let Some(&i) = self.position.get(&node) else {
            return;
        };
        self.entries[i].1 = key;
        let i = self.sift_up(i);
        self.sift_down(i);
    }

    /// Removes a node from the queue. If the node is not queued, this is a
    /// no-op.
    pub fn remove(&mut self, node: Node) {
        let Some(i) = self.position.remove(&node) else {
            return;
        };
        let last = self.entries.len() - 1;
        self.swap_entries(i, last);
        self.entries.pop();
        if i < self.entries.len() {
            let i = self.sift_up(i);
            self.sift_down(i);
        }
    }

    fn swap_entries(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        self.entries.swap(i, j);
        self.position.insert(self.entries[i].0, i);
        self.position.insert(self.entries[j].0, j);
    }

    fn sift_up(&mut self, mut i: usize) -> usize {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.entries[i].1.less(self.entries[parent].1) {
                self.swap_entries(i, parent);
                i = parent;
            } else {
                break;
            }
        }
        i
    }

    fn sift_down(&mut self, mut i: usize) -> usize {
        loop {
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            let mut smallest = i;
            if left < self.entries.len() && self.entries[left].1.less(self.entries[smallest].1) {
                smallest = left;
            }
            if right < self.entries.len() && self.entries[right].1.less(self.entries[smallest].1) {
                smallest = right;
            }
            if smallest == i {
                return i;
            }
            self.swap_entries(i, smallest);
            i = smallest;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn check_score_heap(heap: &ScoreHeap) {
        for (i, entry) in heap.entries.iter().enumerate() {
            assert_eq!(heap.position[&entry.node], i);
            for child in [2 * i + 1, 2 * i + 2] {
                if child < heap.entries.len() {
                    assert!(heap.entries[i].f <= heap.entries[child].f);
                }
            }
        }
    }

    #[test]
    fn score_heap_pops_in_order() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for n in [1, 2, 10, 100] {
            let mut heap = ScoreHeap::new();
            let mut scores = (0..n)
                .map(|id| (id, rng.random_range(0.0..100.0)))
                .collect_vec();
            for &(id, f) in &scores {
                heap.push(Node::new(id), f, f);
                check_score_heap(&heap);
            }

            scores.sort_by(|a, b| a.1.total_cmp(&b.1));
            for &(_, f) in &scores {
                let popped = heap.pop().unwrap();
                check_score_heap(&heap);
                assert_eq!(popped.f, f);
            }
            assert!(heap.pop().is_none());
        }
    }

    #[test]
    fn score_heap_decrease() {
        let mut heap = ScoreHeap::new();
        for id in 0..10 {
            heap.push(Node::new(id), id as f64, 10.0 + id as f64);
        }

        // Absent node: no-op.
        heap.decrease(Node::new(99), 0.0, 0.0);

        heap.decrease(Node::new(7), 0.0, 1.0);
        check_score_heap(&heap);

        let top = heap.pop().unwrap();
        assert_eq!(top.node, Node::new(7));
        assert_eq!(top.g, 0.0);

        let found = heap.find(Node::new(3)).unwrap();
        assert_eq!(found.f, 13.0);
        assert!(heap.find(Node::new(7)).is_none());
    }

    #[test]
    fn key_ordering_is_lexicographic() {
        assert!(Key(0.0, 5.0).less(Key(1.0, 0.0)));
        assert!(Key(1.0, 0.0).less(Key(1.0, 1.0)));
        assert!(!Key(1.0, 1.0).less(Key(1.0, 1.0)));
        assert!(!Key(2.0, 0.0).less(Key(1.0, 9.0)));
    }

    #[test]
    fn key_queue_update_remove() {
        let mut queue = KeyQueue::new();
        for id in 0..8 {
            queue.insert(Node::new(id), Key(id as f64, 0.0));
        }
        assert_eq!(queue.top().0, Node::new(0));

        queue.update(Node::new(5), Key(-1.0, 0.0));
        assert_eq!(queue.top().0, Node::new(5));

        queue.remove(Node::new(5));
        assert_eq!(queue.top().0, Node::new(0));
        assert_eq!(queue.len(), 7);

        // Ties on the first component resolve via the second.
        queue.update(Node::new(3), Key(0.0, -1.0));
        assert_eq!(queue.top().0, Node::new(3));

        queue.remove(Node::new(99)); // no-op
        assert_eq!(queue.len(), 7);
    }

    #[test]
    fn key_queue_drains_sorted() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);

        let mut queue = KeyQueue::new();
        let mut keys = (0..200)
            .map(|id| {
                (
                    id,
                    Key(rng.random_range(0..10) as f64, rng.random_range(0.0..1.0)),
                )
            })
            .collect_vec();
        for &(id, key) in &keys {
            queue.insert(Node::new(id), key);
        }

        keys.sort_by(|a, b| (a.1.0, a.1.1).partial_cmp(&(b.1.0, b.1.1)).unwrap());
        for &(_, key) in &keys {
            let (top, top_key) = queue.top();
            assert!(!top_key.less(key) && !key.less(top_key));
            queue.remove(top);
        }
        assert!(queue.is_empty());
    }
}
