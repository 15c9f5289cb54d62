//! Coordinate assignment.
//!
//! Ranks become horizontal bands stacked top to bottom, each as tall as its tallest node and
//! `ranksep` apart. Within a band nodes are packed left to right in `order`, and every band is
//! centred against the widest one. Coordinates are node centres.

use crate::graphlib::Graph;
use crate::{EdgeLabel, GraphLabel, NodeLabel, util};

pub fn position(g: &mut Graph<NodeLabel, EdgeLabel, GraphLabel>) {
    let layering = util::build_layer_matrix(g);
    position_y(g, &layering);
    position_x(g, &layering);
}

fn position_y(g: &mut Graph<NodeLabel, EdgeLabel, GraphLabel>, layering: &[Vec<String>]) {
    let rank_sep = g.graph().ranksep;
    let mut prev_y: f64 = 0.0;
    for layer in layering {
        let max_height = layer
            .iter()
            .filter_map(|v| g.node(v))
            .fold(0.0_f64, |acc, n| acc.max(n.height));
        for v in layer {
            if let Some(n) = g.node_mut(v) {
                n.y = Some(prev_y + max_height / 2.0);
            }
        }
        prev_y += max_height + rank_sep;
    }
}

fn position_x(g: &mut Graph<NodeLabel, EdgeLabel, GraphLabel>, layering: &[Vec<String>]) {
    let label = g.graph();
    let (node_sep, edge_sep) = (label.nodesep, label.edgesep);
    let sep = |n: &NodeLabel| if n.dummy { edge_sep } else { node_sep };

    // Left edge offsets of every node relative to its band, plus the band width.
    let mut bands: Vec<(Vec<f64>, f64)> = Vec::with_capacity(layering.len());
    for layer in layering {
        let mut offsets: Vec<f64> = Vec::with_capacity(layer.len());
        let mut cursor: f64 = 0.0;
        let mut prev: Option<&NodeLabel> = None;
        for v in layer {
            let Some(n) = g.node(v) else {
                offsets.push(cursor);
                continue;
            };
            if let Some(p) = prev {
                cursor += (sep(p) + sep(n)) / 2.0;
            }
            offsets.push(cursor);
            cursor += n.width;
            prev = Some(n);
        }
        bands.push((offsets, cursor));
    }

    let widest = bands.iter().fold(0.0_f64, |acc, (_, w)| acc.max(*w));
    for (layer, (offsets, band_width)) in layering.iter().zip(bands) {
        let shift = (widest - band_width) / 2.0;
        for (v, offset) in layer.iter().zip(offsets) {
            if let Some(n) = g.node_mut(v) {
                n.x = Some(shift + offset + n.width / 2.0);
            }
        }
    }
}

/// Moves the drawing so its top-left corner sits at `(marginx, marginy)` and records the
/// overall extent in the graph label.
pub fn translate(g: &mut Graph<NodeLabel, EdgeLabel, GraphLabel>) {
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    g.for_each_node(|_, n| {
        let (Some(x), Some(y)) = (n.x, n.y) else {
            return;
        };
        min_x = min_x.min(x - n.width / 2.0);
        max_x = max_x.max(x + n.width / 2.0);
        min_y = min_y.min(y - n.height / 2.0);
        max_y = max_y.max(y + n.height / 2.0);
    });

    let (margin_x, margin_y) = (g.graph().marginx, g.graph().marginy);
    if !min_x.is_finite() || !min_y.is_finite() {
        let label = g.graph_mut();
        label.width = 0.0;
        label.height = 0.0;
        return;
    }

    let dx = margin_x - min_x;
    let dy = margin_y - min_y;
    g.for_each_node_mut(|_, n| {
        if let Some(x) = n.x.as_mut() {
            *x += dx;
        }
        if let Some(y) = n.y.as_mut() {
            *y += dy;
        }
    });

    let label = g.graph_mut();
    label.width = max_x - min_x + 2.0 * margin_x;
    label.height = max_y - min_y + 2.0 * margin_y;
}
