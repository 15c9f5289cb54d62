use narwhal::solver::{solve, validate_edges};
use narwhal::{Anchor, Edge, EngineConfig, Error, Graph, NodeSpec, Point, RankDir, Size};
use std::collections::BTreeMap;

fn graph(nodes: &[&str], edges: &[(&str, &str)]) -> Graph {
    Graph::from_elements(
        nodes.iter().map(|id| NodeSpec::new(*id)),
        edges.iter().map(|(s, t)| Edge::new(*s, *t)),
        Size::default(),
    )
    .unwrap()
}

fn desired(g: &Graph) -> BTreeMap<String, (f64, f64)> {
    g.nodes()
        .map(|n| {
            let p = n.desired.unwrap();
            (n.id.to_string(), (p.x, p.y))
        })
        .collect()
}

fn ranks(g: &Graph) -> BTreeMap<String, i32> {
    g.nodes()
        .map(|n| (n.id.to_string(), n.rank.unwrap()))
        .collect()
}

#[test]
fn solve_lays_a_chain_out_top_to_bottom() {
    let mut g = graph(&["a", "b", "c"], &[("a", "b"), ("b", "c")]);
    let solved = solve(&mut g, &EngineConfig::default());

    assert_eq!(
        desired(&g),
        [
            ("a".to_string(), (0.0, 0.0)),
            ("b".to_string(), (0.0, 86.0)),
            ("c".to_string(), (0.0, 172.0)),
        ]
        .into()
    );
    assert_eq!(solved.ranks, 3);
    assert_eq!(solved.width, 172.0);
    assert_eq!(solved.height, 208.0);
    assert_eq!(solved.dropped_edges, 0);
}

#[test]
fn solve_places_unconnected_nodes_side_by_side() {
    let mut g = graph(&["a", "c"], &[]);
    solve(&mut g, &EngineConfig::default());

    assert_eq!(
        desired(&g),
        [
            ("a".to_string(), (0.0, 0.0)),
            ("c".to_string(), (222.0, 0.0)),
        ]
        .into()
    );
    assert_eq!(ranks(&g), [("a".to_string(), 0), ("c".to_string(), 0)].into());
}

#[test]
fn solve_is_deterministic() {
    let nodes = ["root", "x", "y", "z", "leaf"];
    let edges = [
        ("root", "x"),
        ("root", "y"),
        ("root", "z"),
        ("x", "leaf"),
        ("z", "leaf"),
        ("y", "x"),
        ("leaf", "root"),
    ];
    let mut first = graph(&nodes, &edges);
    let mut second = graph(&nodes, &edges);
    solve(&mut first, &EngineConfig::default());
    solve(&mut second, &EngineConfig::default());
    assert_eq!(desired(&first), desired(&second));

    let before = desired(&first);
    solve(&mut first, &EngineConfig::default());
    assert_eq!(desired(&first), before);
}

#[test]
fn solve_places_new_nodes_directly_at_their_target() {
    let mut g = graph(&["a", "b"], &[("a", "b")]);
    solve(&mut g, &EngineConfig::default());

    for node in g.nodes() {
        assert_eq!(node.displayed, node.desired);
    }
    assert!(g.settled());
}

#[test]
fn solve_keeps_existing_displayed_positions() {
    let mut g = Graph::from_elements(
        [
            NodeSpec::new("a").with_position(Point::new(400.0, 300.0)),
            NodeSpec::new("b"),
        ],
        [Edge::new("a", "b")],
        Size::default(),
    )
    .unwrap();
    solve(&mut g, &EngineConfig::default());

    let a = g.node("a").unwrap();
    assert_eq!(a.displayed, Some(Point::new(400.0, 300.0)));
    assert_eq!(a.desired, Some(Point::new(0.0, 0.0)));
    assert!(!g.settled());
}

#[test]
fn solve_skips_edges_with_a_missing_endpoint() {
    let mut g = graph(&["a", "b"], &[("a", "b"), ("a", "ghost")]);
    assert_eq!(
        validate_edges(&g),
        Err(Error::InvalidGraph {
            from: "a".into(),
            to: "ghost".into(),
        })
    );

    let solved = solve(&mut g, &EngineConfig::default());
    assert_eq!(solved.dropped_edges, 1);
    assert_eq!(ranks(&g), [("a".to_string(), 0), ("b".to_string(), 1)].into());
    assert_eq!(g.edges().len(), 2);
}

#[test]
fn solve_accepts_self_loops_and_duplicate_edges() {
    let mut g = graph(&["a", "b"], &[("a", "a"), ("a", "b"), ("a", "b")]);
    let solved = solve(&mut g, &EngineConfig::default());

    assert_eq!(solved.dropped_edges, 0);
    assert_eq!(ranks(&g), [("a".to_string(), 0), ("b".to_string(), 1)].into());
    assert_eq!(g.edges().len(), 3);
}

#[test]
fn solve_turns_cycles_into_ranks() {
    let mut g = graph(&["a", "b", "c"], &[("a", "b"), ("b", "c"), ("c", "a")]);
    solve(&mut g, &EngineConfig::default());
    assert_eq!(
        ranks(&g),
        [
            ("a".to_string(), 0),
            ("b".to_string(), 1),
            ("c".to_string(), 2)
        ]
        .into()
    );
}

#[test]
fn solve_ignores_node_insertion_order() {
    let edges = [("a", "b"), ("b", "c"), ("c", "a"), ("a", "d")];
    let mut forward = graph(&["a", "b", "c", "d"], &edges);
    let mut backward = graph(&["d", "c", "b", "a"], &edges);
    let config = EngineConfig::default();

    let first = solve(&mut forward, &config);
    let second = solve(&mut backward, &config);

    assert_eq!(first, second);
    assert_eq!(ranks(&forward), ranks(&backward));
    assert_eq!(desired(&forward), desired(&backward));
    assert_eq!(ranks(&forward)["c"], 2);
}

#[test]
fn solve_handles_a_long_chain() {
    let ids: Vec<String> = (0..10_000).map(|i| format!("n{i}")).collect();
    let nodes: Vec<&str> = ids.iter().map(String::as_str).collect();
    let edges: Vec<(&str, &str)> = nodes.windows(2).map(|w| (w[0], w[1])).collect();
    let mut g = graph(&nodes, &edges);

    let solved = solve(&mut g, &EngineConfig::default());
    assert_eq!(solved.dropped_edges, 0);
    assert_eq!(solved.ranks, 10_000);
    assert_eq!(g.node("n9999").unwrap().rank, Some(9_999));
    assert_eq!(g.node("n1").unwrap().desired, Some(Point::new(0.0, 86.0)));
}

#[test]
fn solve_supports_centre_anchors_and_rank_direction() {
    let mut config = EngineConfig {
        anchor: Anchor::Center,
        ..Default::default()
    };
    config.layout.rankdir = RankDir::LR;

    let mut g = graph(&["a", "b"], &[("a", "b")]);
    solve(&mut g, &config);
    assert_eq!(
        desired(&g),
        [
            ("a".to_string(), (86.0, 18.0)),
            ("b".to_string(), (308.0, 18.0)),
        ]
        .into()
    );
}

#[test]
fn solve_uses_node_sizes_and_margins() {
    let mut config = EngineConfig::default();
    config.layout.marginx = 10.0;
    config.layout.marginy = 20.0;
    config.layout.ranksep = 100.0;

    let mut g = Graph::from_elements(
        [
            NodeSpec::new("a").with_size(Size::new(100.0, 40.0)),
            NodeSpec::new("b"),
        ],
        [Edge::new("a", "b")],
        Size::new(60.0, 20.0),
    )
    .unwrap();
    let solved = solve(&mut g, &config);

    assert_eq!(
        desired(&g),
        [
            ("a".to_string(), (10.0, 20.0)),
            ("b".to_string(), (30.0, 160.0)),
        ]
        .into()
    );
    assert_eq!(solved.width, 120.0);
    assert_eq!(solved.height, 200.0);
}
