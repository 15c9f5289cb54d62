//! Deterministic layered graph layout.
//!
//! The pipeline follows the classic Sugiyama phases: break cycles, assign ranks, split long
//! edges, order each rank to reduce crossings, then assign coordinates. Every tie is resolved
//! from insertion order or node id, so identical inputs always produce identical output.

pub use beluga_graphlib as graphlib;

mod model;

pub use model::{EdgeLabel, GraphLabel, NodeLabel, RankDir};

pub mod acyclic;
pub mod coordinate_system;
pub mod normalize;
pub mod order;
pub mod position;
pub mod rank;
pub mod util;

use graphlib::{Graph, GraphOptions};

/// Lays out `g` in place: fills `rank`, `order`, `x` and `y` (node centres) of every node and
/// `width` / `height` of the graph label.
///
/// Self loops are accepted but never constrain the layout. The input graph's edges are left
/// untouched; all intermediate edits happen on a private copy.
pub fn layout(g: &mut Graph<NodeLabel, EdgeLabel, GraphLabel>) {
    let mut lg = build_layout_graph(g);
    run_layout(&mut lg);
    update_input_graph(g, &lg);
}

fn run_layout(g: &mut Graph<NodeLabel, EdgeLabel, GraphLabel>) {
    coordinate_system::adjust(g);
    acyclic::run(g);
    rank::rank(g);
    normalize::run(g);
    order::order(g, order::OrderOptions::default());
    position::position(g);
    normalize::undo(g);
    acyclic::undo(g);
    coordinate_system::undo(g);
    position::translate(g);
}

fn build_layout_graph(
    input: &Graph<NodeLabel, EdgeLabel, GraphLabel>,
) -> Graph<NodeLabel, EdgeLabel, GraphLabel> {
    let mut g: Graph<NodeLabel, EdgeLabel, GraphLabel> =
        Graph::new(GraphOptions { multigraph: true });
    let label = input.graph();
    g.set_graph(GraphLabel {
        rankdir: label.rankdir,
        nodesep: label.nodesep,
        ranksep: label.ranksep,
        edgesep: label.edgesep,
        marginx: label.marginx,
        marginy: label.marginy,
        ..Default::default()
    });

    input.for_each_node(|v, n| {
        g.set_node(
            v,
            NodeLabel {
                width: n.width,
                height: n.height,
                ..Default::default()
            },
        );
    });

    input.for_each_edge(|e, lbl| {
        if e.is_self_loop() {
            return;
        }
        g.set_edge_named(
            e.v.clone(),
            e.w.clone(),
            e.name.clone(),
            Some(EdgeLabel {
                minlen: lbl.minlen.max(1),
                weight: lbl.weight,
                ..Default::default()
            }),
        );
    });

    g
}

fn update_input_graph(
    input: &mut Graph<NodeLabel, EdgeLabel, GraphLabel>,
    layout: &Graph<NodeLabel, EdgeLabel, GraphLabel>,
) {
    input.for_each_node_mut(|v, n| {
        let Some(laid) = layout.node(v) else {
            return;
        };
        n.x = laid.x;
        n.y = laid.y;
        n.rank = laid.rank;
        n.order = laid.order;
    });

    let graph = input.graph_mut();
    graph.width = layout.graph().width;
    graph.height = layout.graph().height;
}
