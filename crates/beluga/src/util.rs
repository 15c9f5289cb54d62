//! Small helpers shared by the pipeline phases.

use crate::graphlib::Graph;
use crate::{EdgeLabel, GraphLabel, NodeLabel};
use std::collections::BTreeMap;

/// Shifts ranks so the smallest one becomes 0.
pub fn normalize_ranks<E, G>(g: &mut Graph<NodeLabel, E, G>)
where
    E: Default + 'static,
    G: Default,
{
    let mut min_rank: i32 = i32::MAX;
    g.for_each_node(|_, n| {
        if let Some(rank) = n.rank {
            min_rank = min_rank.min(rank);
        }
    });
    if min_rank == i32::MAX {
        return;
    }
    g.for_each_node_mut(|_, n| {
        if let Some(rank) = n.rank {
            n.rank = Some(rank - min_rank);
        }
    });
}

pub fn max_rank<E, G>(g: &Graph<NodeLabel, E, G>) -> Option<i32>
where
    E: Default + 'static,
    G: Default,
{
    let mut max_rank: Option<i32> = None;
    g.for_each_node(|_, n| {
        if let Some(rank) = n.rank {
            max_rank = Some(max_rank.map_or(rank, |m| m.max(rank)));
        }
    });
    max_rank
}

/// Node ids grouped by rank, each rank sorted by `order` (insertion order breaks ties).
pub fn build_layer_matrix<E, G>(g: &Graph<NodeLabel, E, G>) -> Vec<Vec<String>>
where
    E: Default + 'static,
    G: Default,
{
    let Some(max_rank) = max_rank(g) else {
        return Vec::new();
    };

    let mut ranks: BTreeMap<i32, Vec<(usize, String)>> = BTreeMap::new();
    g.for_each_node(|v, n| {
        let Some(rank) = n.rank else { return };
        let order = n.order.unwrap_or(usize::MAX);
        ranks.entry(rank).or_default().push((order, v.to_string()));
    });

    let mut out: Vec<Vec<String>> = Vec::with_capacity((max_rank + 1).max(0) as usize);
    for rank in 0..=max_rank {
        let mut entries = ranks.remove(&rank).unwrap_or_default();
        entries.sort_by_key(|(o, _)| *o);
        out.push(entries.into_iter().map(|(_, v)| v).collect());
    }
    out
}

/// Adds a node named `prefix` (or `prefix1`, `prefix2`, ...) that does not collide with any
/// existing id.
pub fn add_dummy_node(
    g: &mut Graph<NodeLabel, EdgeLabel, GraphLabel>,
    label: NodeLabel,
    prefix: &str,
) -> String {
    let mut v = prefix.to_string();
    let mut i = 0usize;
    while g.has_node(&v) {
        i += 1;
        v = format!("{prefix}{i}");
    }
    g.set_node(v.clone(), label);
    v
}
