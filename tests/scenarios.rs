//! The sample graphs from the reference driver, replayed end to end.

use wgraph_wasm::algorithms::{
    has_cycle, is_bipartite, is_connected, pagerank, pagerank_rounds, shortest_path,
    shortest_path_with_cost,
};
use wgraph_wasm::{Graph, GraphError, PageRankConfig, SinkPolicy};

const EPS: f64 = 1e-9;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < EPS, "got {actual:?}, expected {expected:?}");
    }
}

#[test]
fn graph1_connectivity_and_tree() {
    init_tracing();
    let mut g = Graph::new();
    g.add_vertex("A");
    g.add_vertex("B");
    g.add_undirected_edge("A", "B", 2);
    g.add_undirected_edge("A", "C", 4);
    g.add_vertex("D");
    assert!(!is_connected(&g));

    g.add_undirected_edge("D", "C", 7);
    assert!(is_connected(&g));
    assert_eq!(g.to_string(), "A: B 2  C 4  \nB: A 2  \nC: A 4  D 7  \nD: C 7  \n\n");
    assert_eq!(has_cycle(&g), Ok(false));
}

#[test]
fn graph2_empty() {
    init_tracing();
    let g: Graph<String> = Graph::new();
    assert!(!is_connected(&g));
    assert_eq!(g.to_string(), "The Graph is Empty");
    assert_eq!(has_cycle(&g), Err(GraphError::EmptyGraph));
}

#[test]
fn graph3_cycle() {
    init_tracing();
    let mut g = Graph::new();
    g.add_undirected_edge("A", "B", 2);
    g.add_vertex("C");
    g.add_vertex("D");
    assert!(!is_connected(&g));

    g.add_undirected_edge("B", "C", 5);
    g.add_undirected_edge("C", "A", 10);
    g.add_undirected_edge("D", "A", 8);
    assert!(is_connected(&g));
    assert_eq!(has_cycle(&g), Ok(true));
}

fn graph4() -> Graph<&'static str> {
    let mut g = Graph::new();
    for (a, b, w) in [
        ("A", "B", 10),
        ("A", "C", 15),
        ("D", "B", 12),
        ("F", "B", 15),
        ("C", "E", 10),
        ("D", "F", 1),
        ("D", "E", 2),
        ("F", "E", 5),
    ] {
        g.add_undirected_edge(a, b, w);
    }
    g
}

#[test]
fn graph4_shortest_paths() {
    init_tracing();
    let g = graph4();

    let found = shortest_path_with_cost(&g, &"A", &"E").unwrap();
    assert_eq!(found.path, vec!["A", "B", "D", "E"]);
    assert_eq!(found.cost, 24);

    assert_eq!(shortest_path(&g, &"F", &"E").unwrap(), vec!["F", "D", "E"]);
    assert!(matches!(
        shortest_path(&g, &"A", &"Q"),
        Err(GraphError::NotFound(_))
    ));
}

#[test]
fn graph5_even_ring_is_bipartite() {
    init_tracing();
    let mut g = Graph::new();
    let ring = ["A", "B", "C", "D", "E", "F"];
    for i in 0..ring.len() {
        g.add_undirected_edge(ring[i], ring[(i + 1) % ring.len()], 1);
    }
    assert!(is_bipartite(&g));

    // Chord A-C makes an odd cycle A-B-C
    g.add_undirected_edge("A", "C", 1);
    assert!(!is_bipartite(&g));
}

#[test]
fn graph6_pagerank() {
    init_tracing();
    let mut g = Graph::new();
    for (from, to) in [(0, 1), (1, 0), (1, 2), (2, 3), (3, 1), (4, 3)] {
        g.add_edge(from, to, 1);
    }

    let pr = pagerank_rounds(&g, 8).unwrap();
    assert_close(pr.scores(), &[0.1875, 0.425, 0.1875, 0.2, 0.0]);
    assert!((pr.total() - 1.0).abs() < EPS);
}

#[test]
fn graph7_pagerank_rank_trap() {
    init_tracing();
    // 2 <-> 3 soak up all rank, but every vertex has an outgoing edge
    let mut g = Graph::new();
    for (from, to) in [(0, 2), (2, 3), (3, 2), (1, 0), (1, 3)] {
        g.add_edge(from, to, 1);
    }

    let pr = pagerank_rounds(&g, 5).unwrap();
    assert_close(pr.scores(), &[0.0, 0.0, 0.5, 0.5]);
}

#[test]
fn pagerank_sink_policies() {
    init_tracing();
    let mut g = Graph::new();
    g.add_edge(0, 1, 1);
    g.add_edge(1, 2, 1);
    g.add_edge(2, 0, 1);
    g.add_edge(2, 3, 1);

    assert!(matches!(
        pagerank_rounds(&g, 4),
        Err(GraphError::DegenerateInput { .. })
    ));

    let config = PageRankConfig {
        rounds: 30,
        sink_policy: SinkPolicy::Redistribute,
    };
    let pr = pagerank(&g, &config).unwrap();
    assert!((pr.total() - 1.0).abs() < EPS);
    assert!(pr.scores().iter().all(|s| s.is_finite() && *s > 0.0));
}

#[test]
fn queries_do_not_change_results() {
    init_tracing();
    let g = graph4();
    let first = (
        is_connected(&g),
        has_cycle(&g),
        is_bipartite(&g),
        shortest_path(&g, &"A", &"E"),
    );
    let second = (
        is_connected(&g),
        has_cycle(&g),
        is_bipartite(&g),
        shortest_path(&g, &"A", &"E"),
    );
    assert_eq!(first, second);
    assert_eq!(g.vertex_count(), 6);
}

#[test]
fn shared_graph_across_threads() {
    init_tracing();
    let mut g = Graph::new();
    for i in 0..50u32 {
        g.add_edge(i, (i + 1) % 50, 1);
    }

    let ranks: Vec<Vec<f64>> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| pagerank_rounds(&g, 10).unwrap().into_scores()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert!(ranks.windows(2).all(|w| w[0] == w[1]));
}
