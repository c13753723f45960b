//! Cross-algorithm invariants on randomized inputs.
//!
//! Each property ties two independent implementations (or an algorithm and
//! its defining equation) together, so a regression in either side shows
//! up as a disagreement.

use itertools::Itertools;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use wgraphs::prelude::*;

fn n(id: i64) -> Node {
    Node::new(id)
}

/// Random directed graph with non-negative weights.
fn random_directed(rng: &mut impl Rng, nodes: i64, edges: usize) -> AdjMap {
    let mut graph = AdjMap::empty();
    for id in 0..nodes {
        graph.add_node(n(id));
    }
    for _ in 0..edges {
        let u = rng.random_range(0..nodes);
        let v = rng.random_range(0..nodes);
        graph.set_edge((u, v).into(), rng.random_range(0.0..10.0));
    }
    graph
}

/// Random connected undirected graph: a spanning path plus chords.
fn random_connected_undirected(rng: &mut impl Rng, nodes: i64, chords: usize) -> AdjMapUndir {
    let mut graph = AdjMapUndir::empty();
    for u in 1..nodes {
        graph.set_edge((u - 1, u).into(), rng.random_range(0.5..10.0));
    }
    for _ in 0..chords {
        let u = rng.random_range(0..nodes);
        let v = rng.random_range(0..nodes);
        if u != v && !graph.has_edge(n(u), n(v)) {
            graph.set_edge((u, v).into(), rng.random_range(0.5..10.0));
        }
    }
    graph
}

#[test]
fn astar_with_null_heuristic_matches_dijkstra() {
    let rng = &mut Pcg64Mcg::seed_from_u64(101);

    for _ in 0..10 {
        let graph = random_directed(rng, 40, 200);
        let tree = Dijkstra::new().run(&graph, n(0));

        for (&goal, &cost) in &tree.costs {
            let found = AStar::new().run(&graph, n(0), goal);
            assert!((found.cost - cost).abs() < 1e-9);
            assert!(is_path(&found.path, &graph));
        }

        // Unreachable goals report an empty path at cost 0.
        for goal in graph.nodes() {
            if !tree.costs.contains_key(&goal) {
                let found = AStar::new().run(&graph, n(0), goal);
                assert_eq!(found.path, vec![]);
                assert_eq!(found.cost, 0.0);
            }
        }
    }
}

#[test]
fn every_returned_path_is_a_path() {
    let rng = &mut Pcg64Mcg::seed_from_u64(103);

    for _ in 0..5 {
        let graph = random_directed(rng, 30, 120);

        let tree = Dijkstra::new().run(&graph, n(0));
        for path in tree.paths.values() {
            assert!(is_path(path, &graph));
        }

        let bf = BellmanFord::new().run(&graph, n(0)).unwrap();
        for path in bf.paths.values() {
            assert!(is_path(path, &graph));
        }

        let dfs = depth_first_search(&graph, n(0), n(29));
        assert!(is_path(&dfs, &graph));

        let (bfs, _) = breadth_first_search(&graph, n(0), n(29));
        assert!(is_path(&bfs, &graph));
    }
}

#[test]
fn dijkstra_costs_satisfy_the_triangle_inequality() {
    let rng = &mut Pcg64Mcg::seed_from_u64(105);

    for _ in 0..5 {
        let graph = random_directed(rng, 40, 250);
        let tree = Dijkstra::new().run(&graph, n(0));

        for (&u, &du) in &tree.costs {
            for v in graph.neighbors_of(u) {
                let w = graph.weight(Edge(u, v));
                assert!(tree.costs[&v] <= du + w + 1e-9);
            }
        }
    }
}

#[test]
fn prim_and_kruskal_weigh_the_same() {
    let rng = &mut Pcg64Mcg::seed_from_u64(107);

    for _ in 0..10 {
        let graph = random_connected_undirected(rng, 40, 120);

        let mut prim = AdjMapUndir::empty();
        Prim::new().run(&graph, &mut prim);
        let mut kruskal = AdjMapUndir::empty();
        Kruskal::new().run(&graph, &mut kruskal);

        let prim_total: f64 = prim.edges().map(|we| we.weight).sum();
        let kruskal_total: f64 = kruskal.edges().map(|we| we.weight).sum();

        assert_eq!(prim.number_of_edges(), graph.order() - 1);
        assert_eq!(kruskal.number_of_edges(), graph.order() - 1);
        assert!((prim_total - kruskal_total).abs() < 1e-9);
    }
}

#[test]
fn tarjan_partitions_in_reverse_topological_order() {
    let rng = &mut Pcg64Mcg::seed_from_u64(109);

    for _ in 0..10 {
        let graph = random_directed(rng, 50, 150);
        let sccs = graph.tarjan_scc();

        // Every node appears in exactly one component.
        let all = sccs.iter().flatten().copied().collect_vec();
        assert_eq!(all.len(), graph.order());
        assert_eq!(all.iter().unique().count(), graph.order());

        // Every edge stays within a component or points at an
        // earlier-emitted one.
        let mut emitted_at: NodeMap<usize> = NodeMap::default();
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
}

#[test]
fn connected_component_implementations_agree() {
    let rng = &mut Pcg64Mcg::seed_from_u64(111);

    for _ in 0..10 {
        let mut graph = AdjMapUndir::empty();
        for id in 0..60 {
            graph.add_node(n(id));
        }
        for _ in 0..50 {
            let u = rng.random_range(0..60);
            let v = rng.random_range(0..60);
            graph.set_edge((u, v).into(), 1.0);
        }

        assert_eq!(
            sort_components(graph.connected_components()),
            sort_components(graph.connected_components_union_find()),
        );
    }
}

#[test]
fn cores_are_nested_and_satisfy_the_degree_bound() {
    let rng = &mut Pcg64Mcg::seed_from_u64(113);

    for _ in 0..5 {
        let graph = random_connected_undirected(rng, 40, 150);
        let decomposition = graph.vertex_ordering();

        for i in 1..decomposition.cores.len() {
            let members: NodeSet = decomposition.cores[i].iter().copied().collect();
            let outer: NodeSet = decomposition.cores[i - 1].iter().copied().collect();

            for &u in &members {
                assert!(outer.contains(&u));
                let inside = graph
                    .neighbors_of(u)
                    .filter(|v| members.contains(v))
                    .count();
                assert!(inside >= i);
            }
        }
    }
}

#[test]
fn dominator_fixpoint_is_stable() {
    let rng = &mut Pcg64Mcg::seed_from_u64(115);

    for _ in 0..5 {
        let graph = random_directed(rng, 25, 60);
        let dom = dominators(&graph, n(0));

        for u in graph.nodes() {
            if u == n(0) {
                continue;
            }
            let preds = graph.in_neighbors_of(u).collect_vec();
            if preds.is_empty() {
                continue;
            }
            let mut narrowed = dom[&preds[0]].clone();
            for p in &preds[1..] {
                narrowed.retain(|d| dom[p].contains(d));
            }
            narrowed.insert(u);
            assert_eq!(narrowed, dom[&u]);
        }
    }
}

#[test]
fn johnson_agrees_with_dijkstra_on_non_negative_weights() {
    let rng = &mut Pcg64Mcg::seed_from_u64(117);

    let graph = random_directed(rng, 25, 120);
    let all = Johnson::new().run(&graph).unwrap();

    for src in graph.nodes() {
        let tree = Dijkstra::new().run(&graph, src);
        assert_eq!(all.costs[&src].len(), tree.costs.len());
        for (dst, cost) in &tree.costs {
            assert!((all.costs[&src][dst] - cost).abs() < 1e-9);
        }
    }
}
