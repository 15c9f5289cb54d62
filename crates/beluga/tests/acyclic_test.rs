use beluga::acyclic::{dfs_fas, run, undo};
use beluga::graphlib::alg::is_acyclic;
use beluga::graphlib::{EdgeKey, Graph, GraphOptions};
use beluga::{EdgeLabel, GraphLabel, NodeLabel};

fn new_graph() -> Graph<NodeLabel, EdgeLabel, GraphLabel> {
    let mut g: Graph<NodeLabel, EdgeLabel, GraphLabel> =
        Graph::new(GraphOptions { multigraph: true });
    g.set_default_edge_label(|| EdgeLabel {
        minlen: 1,
        weight: 1.0,
        ..Default::default()
    });
    g
}

fn sorted_keys(
    g: &Graph<NodeLabel, EdgeLabel, GraphLabel>,
) -> Vec<(String, String, Option<String>)> {
    let mut keys: Vec<_> = g
        .edge_keys()
        .into_iter()
        .map(|e| (e.v, e.w, e.name))
        .collect();
    keys.sort();
    keys
}

#[test]
fn dfs_fas_is_empty_for_a_dag() {
    let mut g = new_graph();
    g.set_path(&["a", "b", "d"]);
    g.set_path(&["a", "c", "d"]);
    assert!(dfs_fas(&g).is_empty());
}

#[test]
fn dfs_fas_picks_the_edge_that_closes_the_cycle() {
    let mut g = new_graph();
    g.set_path(&["a", "b", "c", "a"]);
    assert_eq!(dfs_fas(&g), vec![EdgeKey::new("c", "a", None::<String>)]);
}

#[test]
fn run_leaves_an_acyclic_graph() {
    let mut g = new_graph();
    g.set_path(&["a", "b", "c", "d", "a"]);
    g.set_path(&["b", "e", "b"]);

    run(&mut g);
    assert!(is_acyclic(&g));
    assert_eq!(g.edge_count(), 6);
}

#[test]
fn run_keeps_parallel_edges_distinct_when_reversing() {
    let mut g = new_graph();
    g.set_edge("a", "b");
    g.set_edge("b", "a");

    run(&mut g);
    assert!(is_acyclic(&g));
    assert_eq!(g.edge_count(), 2);
    let reversed = g.edge("a", "b", Some("rev1")).unwrap();
    assert!(reversed.reversed);
}

#[test]
fn undo_restores_the_original_edges() {
    let mut g = new_graph();
    g.set_path(&["a", "b", "c", "a"]);
    g.set_edge_named(
        "c",
        "b",
        Some("x"),
        Some(EdgeLabel {
            weight: 3.0,
            ..Default::default()
        }),
    );
    let before = sorted_keys(&g);

    run(&mut g);
    undo(&mut g);
    assert_eq!(sorted_keys(&g), before);
    let restored = g.edge("c", "b", Some("x")).unwrap();
    assert_eq!(restored.weight, 3.0);
    assert!(!restored.reversed);
}

#[test]
fn dfs_fas_does_not_depend_on_node_insertion_order() {
    let mut forward = new_graph();
    for v in ["a", "b", "c"] {
        forward.set_node(v, NodeLabel::default());
    }
    forward.set_path(&["a", "b", "c", "a"]);

    let mut backward = new_graph();
    for v in ["c", "b", "a"] {
        backward.set_node(v, NodeLabel::default());
    }
    backward.set_path(&["a", "b", "c", "a"]);

    let expected = vec![EdgeKey::new("c", "a", None::<String>)];
    assert_eq!(dfs_fas(&forward), expected);
    assert_eq!(dfs_fas(&backward), expected);
}

#[test]
fn dfs_fas_handles_a_long_chain_without_recursion() {
    let mut g = new_graph();
    let ids: Vec<String> = (0..20_000).map(|i| format!("n{i}")).collect();
    let path: Vec<&str> = ids.iter().map(String::as_str).collect();
    g.set_path(&path);
    g.set_edge("n19999", "n0");

    assert_eq!(dfs_fas(&g), vec![EdgeKey::new("n19999", "n0", None::<String>)]);
}
