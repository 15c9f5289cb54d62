//! Long edge splitting.
//!
//! Every edge spanning more than one rank is replaced by a chain of zero-size dummy nodes, one
//! per intermediate rank, so that ordering and positioning see the edge on each rank it
//! crosses. [`undo`] removes the chains and restores the original edges.

use crate::graphlib::{EdgeKey, Graph};
use crate::{EdgeLabel, GraphLabel, NodeLabel, util};

pub fn run(g: &mut Graph<NodeLabel, EdgeLabel, GraphLabel>) {
    g.graph_mut().dummy_chains.clear();
    for e in g.edge_keys() {
        normalize_edge(g, e);
    }
}

fn normalize_edge(g: &mut Graph<NodeLabel, EdgeLabel, GraphLabel>, e: EdgeKey) {
    let v_rank = g.node(&e.v).and_then(|n| n.rank).unwrap_or(0);
    let w_rank = g.node(&e.w).and_then(|n| n.rank).unwrap_or(0);
    if w_rank <= v_rank + 1 {
        return;
    }
    let Some(edge_label) = g.edge_by_key(&e).cloned() else {
        return;
    };

    let _ = g.remove_edge_key(&e);

    let mut prev = e.v.clone();
    for r in (v_rank + 1)..w_rank {
        let dummy = util::add_dummy_node(
            g,
            NodeLabel {
                rank: Some(r),
                dummy: true,
                edge_label: Some(edge_label.clone()),
                edge_obj: Some(e.clone()),
                ..Default::default()
            },
            "_d",
        );
        if r == v_rank + 1 {
            g.graph_mut().dummy_chains.push(dummy.clone());
        }

        g.set_edge_named(
            prev,
            dummy.clone(),
            e.name.clone(),
            Some(EdgeLabel {
                weight: edge_label.weight,
                ..Default::default()
            }),
        );
        prev = dummy;
    }

    g.set_edge_named(
        prev,
        e.w.clone(),
        e.name.clone(),
        Some(EdgeLabel {
            weight: edge_label.weight,
            ..Default::default()
        }),
    );
}

pub fn undo(g: &mut Graph<NodeLabel, EdgeLabel, GraphLabel>) {
    let chains = std::mem::take(&mut g.graph_mut().dummy_chains);
    for start in chains {
        let Some(start_node) = g.node(&start) else {
            continue;
        };
        let (Some(orig_label), Some(edge_obj)) =
            (start_node.edge_label.clone(), start_node.edge_obj.clone())
        else {
            continue;
        };

        let mut v = Some(start);
        while let Some(id) = v.take() {
            if !g.node(&id).is_some_and(|n| n.dummy) {
                break;
            }
            v = g.successors(&id).first().map(|s| s.to_string());
            let _ = g.remove_node(&id);
        }

        g.set_edge_key(edge_obj, orig_label);
    }
}
