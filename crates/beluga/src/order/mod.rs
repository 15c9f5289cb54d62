//! Node ordering / crossing minimization.
//!
//! An initial depth-first ordering is refined by alternating down and up sweeps. Each sweep
//! sorts a rank by the barycenter of its neighbours in the rank just fixed, and the layering
//! with the fewest crossings seen so far wins.

mod barycenter;
pub use barycenter::{BarycenterEntry, barycenter, sort};

mod cross_count;
pub use cross_count::cross_count;

mod init_order;
pub use init_order::init_order;

use crate::graphlib::Graph;
use crate::{EdgeLabel, GraphLabel, NodeLabel, util};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relationship {
    /// Sort by predecessors (downward sweep).
    InEdges,
    /// Sort by successors (upward sweep).
    OutEdges,
}

#[derive(Debug, Clone, Copy)]
pub struct OrderOptions {
    /// Hard cap on refinement sweeps.
    pub max_sweeps: usize,
    /// Stop after this many consecutive sweeps without fewer crossings.
    pub patience: usize,
}

impl Default for OrderOptions {
    fn default() -> Self {
        Self {
            max_sweeps: 24,
            patience: 4,
        }
    }
}

pub fn order(g: &mut Graph<NodeLabel, EdgeLabel, GraphLabel>, opts: OrderOptions) {
    let Some(max_rank) = util::max_rank(g) else {
        return;
    };

    let layering = init_order(g);
    assign_order(g, &layering);

    let mut best_cc = cross_count(g, &layering);
    let mut best = layering;

    let mut sweeps: usize = 0;
    let mut since_best: usize = 0;
    while best_cc > 0.0 && since_best < opts.patience && sweeps < opts.max_sweeps {
        let relationship = if sweeps % 2 == 0 {
            Relationship::InEdges
        } else {
            Relationship::OutEdges
        };
        sweep(g, max_rank, relationship);

        let layering = util::build_layer_matrix(g);
        let cc = cross_count(g, &layering);
        if cc < best_cc {
            best_cc = cc;
            best = layering;
            since_best = 0;
        } else {
            since_best += 1;
        }
        sweeps += 1;
    }

    assign_order(g, &best);
}

fn assign_order(g: &mut Graph<NodeLabel, EdgeLabel, GraphLabel>, layering: &[Vec<String>]) {
    for layer in layering {
        for (i, v) in layer.iter().enumerate() {
            if let Some(node) = g.node_mut(v) {
                node.order = Some(i);
            }
        }
    }
}

fn sweep(
    g: &mut Graph<NodeLabel, EdgeLabel, GraphLabel>,
    max_rank: i32,
    relationship: Relationship,
) {
    let ranks: Vec<i32> = match relationship {
        Relationship::InEdges => (1..=max_rank).collect(),
        Relationship::OutEdges => (0..max_rank).rev().collect(),
    };

    // Sorting one rank only touches that rank's `order`, so one matrix serves the sweep.
    let layering = util::build_layer_matrix(g);
    for rank in ranks {
        let Some(layer) = layering.get(rank as usize) else {
            continue;
        };
        let entries = barycenter(g, layer, relationship);
        let sorted = sort(&entries);
        for (i, v) in sorted.iter().enumerate() {
            if let Some(n) = g.node_mut(v) {
                n.order = Some(i);
            }
        }
    }
}
