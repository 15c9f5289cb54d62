use crate::graphlib::Graph;
use crate::{EdgeLabel, GraphLabel, NodeLabel, util};
use rustc_hash::FxHashSet as HashSet;

/// Initial layering: a depth-first walk started from every node in `(rank, id)` order,
/// following out-edges in insertion order. Each node joins its rank when first visited.
pub fn init_order(g: &Graph<NodeLabel, EdgeLabel, GraphLabel>) -> Vec<Vec<String>> {
    let Some(max_rank) = util::max_rank(g) else {
        return Vec::new();
    };
    let mut layers: Vec<Vec<String>> = vec![Vec::new(); (max_rank + 1).max(0) as usize];

    let mut starts: Vec<(i32, &str)> = g
        .nodes()
        .filter_map(|v| g.node(v).and_then(|n| n.rank).map(|rank| (rank, v)))
        .collect();
    starts.sort();

    let mut visited: HashSet<String> = HashSet::default();
    let mut stack: Vec<String> = Vec::new();
    for (_, start) in starts {
        stack.push(start.to_string());
        while let Some(v) = stack.pop() {
            if !visited.insert(v.clone()) {
                continue;
            }
            let Some(rank) = g.node(&v).and_then(|n| n.rank) else {
                continue;
            };
            if let Some(layer) = layers.get_mut(rank.max(0) as usize) {
                layer.push(v.clone());
            }
            // Reversed so the first out-edge is explored first.
            for w in g.successors(&v).into_iter().rev() {
                if !visited.contains(w) {
                    stack.push(w.to_string());
                }
            }
        }
    }

    layers
}
