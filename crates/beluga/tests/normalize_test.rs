use beluga::graphlib::{Graph, GraphOptions};
use beluga::normalize::{run, undo};
use beluga::{EdgeLabel, GraphLabel, NodeLabel};

fn new_graph() -> Graph<NodeLabel, EdgeLabel, GraphLabel> {
    let mut g: Graph<NodeLabel, EdgeLabel, GraphLabel> =
        Graph::new(GraphOptions { multigraph: true });
    g.set_graph(GraphLabel::default());
    g
}

fn ranked(rank: i32) -> NodeLabel {
    NodeLabel {
        rank: Some(rank),
        ..Default::default()
    }
}

#[test]
fn run_leaves_short_edges_alone() {
    let mut g = new_graph();
    g.set_node("a", ranked(0));
    g.set_node("b", ranked(1));
    g.set_edge("a", "b");

    run(&mut g);
    assert_eq!(g.node_count(), 2);
    assert!(g.has_edge("a", "b", None));
    assert!(g.graph().dummy_chains.is_empty());
}

#[test]
fn run_splits_a_long_edge_into_a_dummy_chain() {
    let mut g = new_graph();
    g.set_node("a", ranked(0));
    g.set_node("b", ranked(3));
    g.set_edge("a", "b");

    run(&mut g);
    assert!(!g.has_edge("a", "b", None));
    assert_eq!(g.node_count(), 4);
    assert_eq!(g.edge_count(), 3);
    assert_eq!(g.graph().dummy_chains.len(), 1);

    let first = g.graph().dummy_chains[0].clone();
    let dummy = g.node(&first).unwrap();
    assert!(dummy.dummy);
    assert_eq!(dummy.rank, Some(1));
    assert_eq!(dummy.width, 0.0);

    let second = g.successors(&first)[0].to_string();
    assert_eq!(g.node(&second).unwrap().rank, Some(2));
    assert_eq!(g.successors(&second), vec!["b"]);
}

#[test]
fn undo_restores_the_original_edge_and_label() {
    let mut g = new_graph();
    g.set_node("a", ranked(0));
    g.set_node("b", ranked(2));
    g.set_edge_named(
        "a",
        "b",
        Some("e0"),
        Some(EdgeLabel {
            weight: 2.0,
            ..Default::default()
        }),
    );

    run(&mut g);
    assert_eq!(g.node_count(), 3);
    undo(&mut g);

    assert_eq!(g.node_count(), 2);
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.edge("a", "b", Some("e0")).unwrap().weight, 2.0);
    assert!(g.graph().dummy_chains.is_empty());
}
