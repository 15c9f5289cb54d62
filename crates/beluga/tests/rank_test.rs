use beluga::graphlib::{Graph, GraphOptions};
use beluga::rank::rank;
use beluga::util::{add_dummy_node, build_layer_matrix, normalize_ranks};
use beluga::{EdgeLabel, GraphLabel, NodeLabel};
use std::collections::BTreeMap;

fn new_graph() -> Graph<NodeLabel, EdgeLabel, GraphLabel> {
    Graph::new(GraphOptions { multigraph: true })
}

fn ranks(g: &Graph<NodeLabel, EdgeLabel, GraphLabel>) -> BTreeMap<String, i32> {
    g.nodes()
        .map(|v| (v.to_string(), g.node(v).unwrap().rank.unwrap()))
        .collect()
}

#[test]
fn rank_puts_every_source_on_rank_0() {
    let mut g = new_graph();
    g.set_path(&["a", "b", "c"]);
    g.set_edge("d", "c");
    g.set_node("e", NodeLabel::default());

    rank(&mut g);
    assert_eq!(
        ranks(&g),
        [
            ("a".to_string(), 0),
            ("b".to_string(), 1),
            ("c".to_string(), 2),
            ("d".to_string(), 0),
            ("e".to_string(), 0),
        ]
        .into()
    );
}

#[test]
fn rank_places_a_node_below_its_lowest_predecessor() {
    let mut g = new_graph();
    g.set_path(&["a", "b", "d"]);
    g.set_path(&["a", "c", "d"]);
    g.set_edge("a", "d");

    rank(&mut g);
    assert_eq!(
        ranks(&g),
        [
            ("a".to_string(), 0),
            ("b".to_string(), 1),
            ("c".to_string(), 1),
            ("d".to_string(), 2),
        ]
        .into()
    );
}

#[test]
fn rank_respects_minlen() {
    let mut g = new_graph();
    g.set_edge_with_label(
        "a",
        "b",
        EdgeLabel {
            minlen: 2,
            ..Default::default()
        },
    );
    g.set_edge("b", "c");

    rank(&mut g);
    assert_eq!(g.node("b").unwrap().rank, Some(2));
    assert_eq!(g.node("c").unwrap().rank, Some(3));
}

#[test]
fn normalize_ranks_shifts_the_lowest_rank_to_0() {
    let mut g = new_graph();
    for (v, r) in [("a", 3), ("b", 5), ("c", 4)] {
        g.set_node(
            v,
            NodeLabel {
                rank: Some(r),
                ..Default::default()
            },
        );
    }

    normalize_ranks(&mut g);
    assert_eq!(
        ranks(&g),
        [
            ("a".to_string(), 0),
            ("b".to_string(), 2),
            ("c".to_string(), 1)
        ]
        .into()
    );
}

#[test]
fn build_layer_matrix_groups_by_rank_and_order() {
    let mut g = new_graph();
    for (v, rank, order) in [("a", 0, 1), ("b", 1, 0), ("c", 0, 0), ("d", 2, 0)] {
        g.set_node(
            v,
            NodeLabel {
                rank: Some(rank),
                order: Some(order),
                ..Default::default()
            },
        );
    }

    assert_eq!(
        build_layer_matrix(&g),
        vec![
            vec!["c".to_string(), "a".to_string()],
            vec!["b".to_string()],
            vec!["d".to_string()],
        ]
    );
}

#[test]
fn add_dummy_node_avoids_existing_ids() {
    let mut g = new_graph();
    g.set_node("_d", NodeLabel::default());

    let first = add_dummy_node(&mut g, NodeLabel::default(), "_d");
    let second = add_dummy_node(&mut g, NodeLabel::default(), "_d");
    assert_eq!(first, "_d1");
    assert_eq!(second, "_d2");
    assert_eq!(g.node_count(), 3);
}
