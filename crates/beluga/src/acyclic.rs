//! Cycle breaking.
//!
//! Back edges of a depth-first search are flipped so ranking sees a DAG. Roots are taken in
//! node id order and out-edges in edge insertion order, so the result does not depend on the
//! order nodes were added. Flipped edges carry `reversed` and their original name until
//! [`undo`] puts them back.

use crate::graphlib::{EdgeKey, Graph};
use crate::{EdgeLabel, GraphLabel, NodeLabel};
use rustc_hash::FxHashSet as HashSet;

pub fn run(g: &mut Graph<NodeLabel, EdgeLabel, GraphLabel>) {
    for key in dfs_fas(g) {
        let Some(label) = g.edge_by_key(&key).cloned() else {
            continue;
        };
        let _ = g.remove_edge_key(&key);
        let flipped = flip_name(g, &key.w, &key.v);
        let label = EdgeLabel {
            forward_name: key.name,
            reversed: true,
            ..label
        };
        g.set_edge_named(key.w, key.v, Some(flipped), Some(label));
    }
}

pub fn undo(g: &mut Graph<NodeLabel, EdgeLabel, GraphLabel>) {
    let flipped: Vec<EdgeKey> = g
        .edge_keys()
        .into_iter()
        .filter(|key| g.edge_by_key(key).is_some_and(|label| label.reversed))
        .collect();
    for key in flipped {
        let Some(mut label) = g.edge_by_key(&key).cloned() else {
            continue;
        };
        let _ = g.remove_edge_key(&key);
        let name = label.forward_name.take();
        label.reversed = false;
        g.set_edge_named(key.w, key.v, name, Some(label));
    }
}

/// First free `revN` name for an edge `v -> w`.
fn flip_name(g: &Graph<NodeLabel, EdgeLabel, GraphLabel>, v: &str, w: &str) -> String {
    (1usize..)
        .map(|i| format!("rev{i}"))
        .find(|name| !g.has_edge(v, w, Some(name.as_str())))
        .unwrap_or_default()
}

/// Edges that close a cycle, found by an iterative depth-first search.
pub fn dfs_fas(g: &Graph<NodeLabel, EdgeLabel, GraphLabel>) -> Vec<EdgeKey> {
    let mut roots = g.node_ids();
    roots.sort();

    let mut fas: Vec<EdgeKey> = Vec::new();
    let mut visited: HashSet<String> = HashSet::default();
    let mut on_path: HashSet<String> = HashSet::default();
    // (node, its out-edges, index of the next out-edge to follow)
    let mut frames: Vec<(String, Vec<EdgeKey>, usize)> = Vec::new();

    for root in roots {
        if !visited.insert(root.clone()) {
            continue;
        }
        on_path.insert(root.clone());
        let out = g.out_edges(&root, None);
        frames.push((root, out, 0));

        while let Some((_, out, ix)) = frames.last_mut() {
            let next = out.get(*ix).cloned();
            *ix += 1;

            let Some(e) = next else {
                if let Some((v, _, _)) = frames.pop() {
                    on_path.remove(&v);
                }
                continue;
            };

            if on_path.contains(&e.w) {
                fas.push(e);
            } else if visited.insert(e.w.clone()) {
                on_path.insert(e.w.clone());
                let out = g.out_edges(&e.w, None);
                frames.push((e.w, out, 0));
            }
        }
    }
    fas
}
