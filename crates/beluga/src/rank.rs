//! Rank assignment.
//!
//! Longest-path layering from the sources: every source sits on rank 0 and every other node
//! sits just below its lowest predecessor. For unit `minlen` this uses the fewest ranks any
//! valid layering can.

use crate::graphlib::{Graph, alg};
use crate::{EdgeLabel, GraphLabel, NodeLabel, util};
use rustc_hash::FxHashMap as HashMap;

/// Expects an acyclic graph (see [`crate::acyclic`]).
pub fn rank(g: &mut Graph<NodeLabel, EdgeLabel, GraphLabel>) {
    longest_path(g);
    util::normalize_ranks(g);
}

pub fn longest_path(g: &mut Graph<NodeLabel, EdgeLabel, GraphLabel>) {
    // A cycle here means `acyclic::run` was skipped; ranking in insertion order still gives
    // every node a rank.
    let topo = alg::topsort(g).unwrap_or_else(|_| g.node_ids());

    let mut ranks: HashMap<String, i32> = HashMap::default();
    for v in &topo {
        let mut rank: i32 = 0;
        g.for_each_in_edge(v, |e, lbl| {
            if let Some(&u_rank) = ranks.get(&e.v) {
                rank = rank.max(u_rank + lbl.minlen as i32);
            }
        });
        ranks.insert(v.clone(), rank);
    }

    g.for_each_node_mut(|v, n| {
        n.rank = Some(ranks.get(v).copied().unwrap_or(0));
    });
}
