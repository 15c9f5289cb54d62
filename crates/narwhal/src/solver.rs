//! Layout Solver: desired positions from topology.
//!
//! The engine graph is copied into a `beluga` multigraph (nodes and edges in insertion order,
//! edges named by their index so parallel edges survive), laid out, and the resulting centres
//! are written back as desired positions. Displayed positions of nodes that were already
//! placed are never touched here.

use crate::config::{Anchor, EngineConfig};
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::model::Point;
use beluga::graphlib::{Graph as LayoutGraph, GraphOptions};
use beluga::{EdgeLabel, GraphLabel, NodeLabel};

/// Summary of one solver pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Solved {
    /// Drawing extent including margins.
    pub width: f64,
    pub height: f64,
    /// Number of layers used.
    pub ranks: usize,
    /// Edges skipped because an endpoint is missing.
    pub dropped_edges: usize,
}

/// Recomputes every node's desired position.
///
/// Edges with a missing endpoint are skipped (and logged) rather than failing the pass.
/// Nodes placed for the first time appear directly at their target. Every override pin is
/// released.
#[tracing::instrument(skip_all, fields(nodes = graph.nodes.len(), edges = graph.edges.len()))]
pub fn solve(graph: &mut Graph, config: &EngineConfig) -> Solved {
    let layout = &config.layout;
    let mut g: LayoutGraph<NodeLabel, EdgeLabel, GraphLabel> =
        LayoutGraph::new(GraphOptions { multigraph: true });
    g.set_graph(GraphLabel {
        rankdir: layout.rankdir,
        nodesep: layout.nodesep,
        ranksep: layout.ranksep,
        marginx: layout.marginx,
        marginy: layout.marginy,
        ..Default::default()
    });

    for node in graph.nodes.values() {
        g.set_node(
            node.id.as_str(),
            NodeLabel {
                width: node.size.width,
                height: node.size.height,
                ..Default::default()
            },
        );
    }

    let mut dropped_edges: usize = 0;
    for (ix, edge) in graph.edges.iter().enumerate() {
        if !graph.nodes.contains_key(&edge.source) || !graph.nodes.contains_key(&edge.target) {
            tracing::warn!(
                source = %edge.source,
                target = %edge.target,
                "skipping edge with a missing endpoint"
            );
            dropped_edges += 1;
            continue;
        }
        g.set_edge_named(
            edge.source.as_str(),
            edge.target.as_str(),
            Some(ix.to_string()),
            None,
        );
    }

    beluga::layout(&mut g);

    let mut max_rank: Option<i32> = None;
    for node in graph.nodes.values_mut() {
        node.pinned = false;
        let Some(label) = g.node(node.id.as_str()) else {
            continue;
        };
        let (Some(x), Some(y)) = (label.x, label.y) else {
            continue;
        };
        let desired = match config.anchor {
            Anchor::TopLeft => Point::new(x - node.size.width / 2.0, y - node.size.height / 2.0),
            Anchor::Center => Point::new(x, y),
        };
        node.desired = Some(desired);
        node.rank = label.rank;
        if node.displayed.is_none() {
            node.displayed = Some(desired);
        }
        if let Some(rank) = label.rank {
            max_rank = Some(max_rank.map_or(rank, |m| m.max(rank)));
        }
    }
    let settled = graph.refresh_settled();

    let solved = Solved {
        width: g.graph().width,
        height: g.graph().height,
        ranks: max_rank.map_or(0, |r| (r + 1).max(0) as usize),
        dropped_edges,
    };
    tracing::debug!(
        ranks = solved.ranks,
        width = solved.width,
        height = solved.height,
        dropped_edges,
        settled,
        "layout pass"
    );
    solved
}

/// Fails on the first edge whose endpoints are not both in the graph.
pub fn validate_edges(graph: &Graph) -> Result<()> {
    match graph.first_dangling_edge() {
        Some(edge) => Err(Error::InvalidGraph {
            from: edge.source.clone(),
            to: edge.target.clone(),
        }),
        None => Ok(()),
    }
}
