//! Barycenter computation and sorting.

use super::Relationship;
use crate::graphlib::Graph;
use crate::{EdgeLabel, GraphLabel, NodeLabel};
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq)]
pub struct BarycenterEntry {
    pub v: String,
    /// Weighted mean order of the neighbours in the adjacent rank, if there are any.
    pub barycenter: Option<f64>,
    pub weight: Option<f64>,
}

/// One entry per node of `layer`, in the same order.
pub fn barycenter(
    g: &Graph<NodeLabel, EdgeLabel, GraphLabel>,
    layer: &[String],
    relationship: Relationship,
) -> Vec<BarycenterEntry> {
    layer
        .iter()
        .map(|v| {
            let mut sum: f64 = 0.0;
            let mut weight: f64 = 0.0;
            let mut accumulate = |neighbour: &str, lbl: &EdgeLabel| {
                let order = g
                    .node(neighbour)
                    .and_then(|n| n.order)
                    .map(|o| o as f64)
                    .unwrap_or(0.0);
                sum += lbl.weight * order;
                weight += lbl.weight;
            };
            match relationship {
                Relationship::InEdges => {
                    g.for_each_in_edge(v, |e, lbl| accumulate(e.v.as_str(), lbl))
                }
                Relationship::OutEdges => {
                    g.for_each_out_edge(v, |e, lbl| accumulate(e.w.as_str(), lbl))
                }
            }

            if weight <= 0.0 {
                return BarycenterEntry {
                    v: v.clone(),
                    barycenter: None,
                    weight: None,
                };
            }
            BarycenterEntry {
                v: v.clone(),
                barycenter: Some(sum / weight),
                weight: Some(weight),
            }
        })
        .collect()
}

/// Returns the node ids in their new order.
///
/// Entries with a barycenter are sorted by it (ties by node id) and fill the slots left by
/// entries without one, which stay at their current index.
pub fn sort(entries: &[BarycenterEntry]) -> Vec<String> {
    let mut sortable: Vec<(f64, &str)> = entries
        .iter()
        .filter_map(|e| e.barycenter.map(|b| (b, e.v.as_str())))
        .collect();
    sortable.sort_by(|a, b| match a.0.total_cmp(&b.0) {
        Ordering::Equal => a.1.cmp(b.1),
        other => other,
    });

    let mut sortable = sortable.into_iter();
    entries
        .iter()
        .filter_map(|e| match e.barycenter {
            None => Some(e.v.clone()),
            Some(_) => sortable.next().map(|(_, v)| v.to_string()),
        })
        .collect()
}
