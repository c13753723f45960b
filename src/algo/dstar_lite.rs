use smallvec::SmallVec;

use crate::{
    edge::{Edge, WeightedEdge},
    node::Node,
    ops::{
        AdjacencyList, EdgeEditing, EdgeWeights, GraphNew, GraphOrder, InAdjacency, NodeEditing,
        SearchGraph,
    },
    repr::AdjMap,
    resolve::{HeuristicFn, Resolved, WeightFn},
    utils::{Key, KeyQueue, NodeMap},
};

/// Per-node planner bookkeeping: the last computed cost-to-goal `g` and the
/// one-step lookahead estimate `rhs`. A node is locally consistent when
/// `g == rhs`.
#[derive(Debug, Clone, Copy)]
struct PlanState {
    g: f64,
    rhs: f64,
}

impl Default for PlanState {
    fn default() -> Self {
        PlanState {
            g: f64::INFINITY,
            rhs: f64::INFINITY,
        }
    }
}

/// D* Lite dynamic re-planning search.
///
/// Plans a cheapest path from a moving agent position to a fixed goal and
/// repairs the plan incrementally as edge costs change, instead of
/// replanning from scratch. See `doi:10.1109/tro.2004.838026`.
///
/// The planner owns a *world* graph: a directed copy of the input's
/// topology and weights taken at construction. The caller's graph is never
/// mutated. All `g`/`rhs` bookkeeping lives in an id-keyed table beside the
/// world, so every world node has planner state by construction. State
/// persists across [`step`](DStarLite::step), [`move_to`](DStarLite::move_to)
/// and [`update_world`](DStarLite::update_world) for the lifetime of the
/// planner.
///
/// Edge weights must be non-negative; a negative weight at construction or
/// in an update is a programmer error and **panics**.
///
/// # Examples
/// ```
/// use wgraphs::prelude::*;
///
/// let g = AdjMap::from_edges([(0, 1, 1.0), (1, 2, 1.0), (0, 2, 5.0)]);
/// let mut plan = DStarLite::new(&g, Node::new(0), Node::new(2));
///
/// let (path, cost) = plan.path();
/// assert_eq!(path, vec![Node::new(0), Node::new(1), Node::new(2)]);
/// assert_eq!(cost, 2.0);
///
/// // The short-cut just got cheap: the plan repairs itself.
/// plan.update_world(&[WeightedEdge::new(0, 2, 0.5)]);
/// assert_eq!(plan.path().1, 0.5);
/// ```
pub struct DStarLite<'a> {
    world: AdjMap,
    state: NodeMap<PlanState>,
    queue: KeyQueue,
    k_m: f64,

    s: Node,
    t: Node,
    last: Node,

    heuristic: Box<dyn Fn(Node, Node) -> f64 + 'a>,
}

impl<'a> DStarLite<'a> {
    /// Plans from `start` to `goal` in `graph`, using the graph's own
    /// weight and heuristic capabilities.
    pub fn new<G>(graph: &'a G, start: Node, goal: Node) -> Self
    where
        G: SearchGraph,
    {
        Self::with_overrides(graph, start, goal, None, None)
    }

    /// As [`DStarLite::new`], with optional weight and heuristic overrides.
    /// The weight function is consulted once while copying the world; the
    /// heuristic is retained for the lifetime of the planner.
    ///
    /// **Panics** if any copied edge weight is negative.
    pub fn with_overrides<G>(
        graph: &'a G,
        start: Node,
        goal: Node,
        weight: Option<&WeightFn<'_>>,
        heuristic: Option<&'a HeuristicFn<'a>>,
    ) -> Self
    where
        G: SearchGraph,
    {
        let funcs = Resolved::new(graph, weight, None);

        let mut world = AdjMap::empty();
        for u in graph.nodes() {
            world.add_node(u);
        }
        for u in graph.nodes() {
            for v in funcs.successors(u) {
                let w = funcs.edge_weight(u, v);
                assert!(w >= 0.0, "D* Lite: negative edge weight");
                world.set_edge(Edge(u, v), w);
            }
        }

        let heuristic: Box<dyn Fn(Node, Node) -> f64 + 'a> = match heuristic {
            Some(h) => Box::new(h),
            None => Box::new(move |u, v| graph.heuristic_weight(u, v)),
        };

        let mut state: NodeMap<PlanState> =
            world.nodes().map(|u| (u, PlanState::default())).collect();
        state.entry(goal).or_default().rhs = 0.0;

        let mut plan = DStarLite {
            world,
            state,
            queue: KeyQueue::new(),
            k_m: 0.0,
            s: start,
            t: goal,
            last: start,
            heuristic,
        };

        plan.queue
            .insert(goal, Key((plan.heuristic)(start, goal), 0.0));
        plan.compute_shortest_path();
        plan
    }

    /// Returns the agent's current location.
    pub fn here(&self) -> Node {
        self.s
    }

    /// Returns the goal.
    pub fn goal(&self) -> Node {
        self.t
    }

    #[inline]
    fn state(&self, u: Node) -> PlanState {
        self.state.get(&u).copied().unwrap_or_default()
    }

    #[inline]
    fn set_g(&mut self, u: Node, g: f64) {
        self.state.entry(u).or_default().g = g;
    }

    #[inline]
    fn set_rhs(&mut self, u: Node, rhs: f64) {
        self.state.entry(u).or_default().rhs = rhs;
    }

    /// The CalculateKey procedure:
    /// `key(u) = (min(g, rhs) + h(s, u) + k_m, min(g, rhs))`.
    fn key_for(&self, u: Node) -> Key {
        let st = self.state(u);
        let lookahead = st.g.min(st.rhs);
        Key(
            lookahead + (self.heuristic)(self.s, u) + self.k_m,
            lookahead,
        )
    }

    /// The UpdateVertex procedure: reconciles queue membership with local
    /// consistency.
    fn update_vertex(&mut self, u: Node) {
        let st = self.state(u);
        let in_queue = self.queue.contains(u);
        let consistent = st.g == st.rhs;

        match (in_queue, consistent) {
            (true, false) => self.queue.update(u, self.key_for(u)),
            (false, false) => self.queue.insert(u, self.key_for(u)),
            (true, true) => self.queue.remove(u),
            (false, true) => {}
        }
    }

    /// `rhs(u) = min over successors v of c(u, v) + g(v)`.
    fn recompute_rhs(&mut self, u: Node) {
        let mut rhs = f64::INFINITY;
        for v in self.world.neighbors_of(u) {
            rhs = rhs.min(self.world.weight(Edge(u, v)) + self.state(v).g);
        }
        self.set_rhs(u, rhs);
    }

    /// The ComputeShortestPath procedure: expands queued nodes until the
    /// agent's location is consistent and no queued key precedes it.
    fn compute_shortest_path(&mut self) {
        while self.queue.len() != 0 {
            let (u, k_old) = self.queue.top();

            let start = self.state(self.s);
            if !k_old.less(self.key_for(self.s)) && start.rhs <= start.g {
                break;
            }

            let k_new = self.key_for(u);
            let st = self.state(u);

            if k_old.less(k_new) {
                // The key went stale while u sat in the queue.
                self.queue.update(u, k_new);
            } else if st.g > st.rhs {
                // Overconsistent: the new cost through u is final.
                let g = st.rhs;
                self.set_g(u, g);
                self.queue.remove(u);

                let preds: SmallVec<[Node; 8]> = self.world.in_neighbors_of(u).collect();
                for p in preds {
                    if p != self.t {
                        let through = self.world.weight(Edge(p, u)) + g;
                        if through < self.state(p).rhs {
                            self.set_rhs(p, through);
                        }
                    }
                    self.update_vertex(p);
                }
            } else {
                // Underconsistent: costs through u grew; invalidate and let
                // the affected predecessors re-derive their lookahead.
                let g_old = st.g;
                self.set_g(u, f64::INFINITY);

                let mut affected: SmallVec<[Node; 8]> = self.world.in_neighbors_of(u).collect();
                affected.push(u);
                for p in affected {
                    if self.state(p).rhs == self.world.weight(Edge(p, u)) + g_old && p != self.t {
                        self.recompute_rhs(p);
                    }
                    self.update_vertex(p);
                }
            }
        }
    }

    /// Advances the agent one step along the current best path. Returns
    /// `false` if no further progression toward the goal is possible,
    /// either because the goal has been reached or because there is no
    /// known path.
    pub fn step(&mut self) -> bool {
        if self.s == self.t {
            return false;
        }
        if self.state(self.s).rhs.is_infinite() {
            return false;
        }

        let mut best = f64::INFINITY;
        let mut next = None;
        for v in self.world.neighbors_of(self.s) {
            let through = self.world.weight(Edge(self.s, v)) + self.state(v).g;
            if through < best {
                best = through;
                next = Some(v);
            }
        }

        match next {
            Some(v) => {
                self.move_to(v);
                true
            }
            None => false,
        }
    }

    /// Moves the agent to `n`, accumulating the heuristic drift into the
    /// locality offset `k_m`.
    pub fn move_to(&mut self, n: Node) {
        self.last = self.s;
        self.s = n;
        self.k_m += (self.heuristic)(self.last, n);
    }

    /// Applies a batch of edge-cost changes to the world and repairs the
    /// plan. An empty batch is a no-op.
    ///
    /// **Panics** if a change carries a negative weight.
    pub fn update_world(&mut self, changes: &[WeightedEdge]) {
        if changes.is_empty() {
            return;
        }

        self.k_m += (self.heuristic)(self.last, self.s);
        self.last = self.s;

        for change in changes {
            assert!(change.weight >= 0.0, "D* Lite: negative edge weight");

            let Edge(u, v) = change.edge;
            let c_old = self.world.weight(change.edge);
            self.world.set_edge(change.edge, change.weight);
            self.state.entry(u).or_default();
            self.state.entry(v).or_default();

            let g_v = self.state(v).g;
            if c_old > change.weight {
                // The edge got cheaper; it may improve u's lookahead.
                if u != self.t {
                    let through = change.weight + g_v;
                    if through < self.state(u).rhs {
                        self.set_rhs(u, through);
                    }
                }
            } else if self.state(u).rhs == c_old + g_v && u != self.t {
                // The edge carried u's lookahead; re-derive it.
                self.recompute_rhs(u);
            }
            self.update_vertex(u);
        }

        self.compute_shortest_path();
    }

    /// Extracts the planned path from the current location to the goal by
    /// greedily following the successor minimizing `c(u, v) + g(v)`, and
    /// the sum of edge weights along it. Returns an empty path and
    /// `f64::INFINITY` when no path is known.
    pub fn path(&self) -> (Vec<Node>, f64) {
        let mut u = self.s;
        let mut path = vec![u];
        let mut weight = 0.0;

        while u != self.t {
            if self.state(u).rhs.is_infinite() {
                return (Vec::new(), f64::INFINITY);
            }

            let mut best = f64::INFINITY;
            let mut next = None;
            let mut step_cost = 0.0;
            for v in self.world.neighbors_of(u) {
                let c = self.world.weight(Edge(u, v));
                if c + self.state(v).g < best {
                    best = c + self.state(v).g;
                    next = Some(v);
                    step_cost = c;
                }
            }

            let Some(v) = next else {
                return (Vec::new(), f64::INFINITY);
            };
            u = v;
            weight += step_cost;
            path.push(u);
        }

        (path, weight)
    }
}
