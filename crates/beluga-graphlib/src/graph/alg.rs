//! Helper algorithms over [`Graph`](super::Graph).

use super::Graph;
use std::collections::{BTreeSet, HashMap, VecDeque};
use std::fmt;

/// Returned by [`topsort`] when the graph contains at least one cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleError {
    /// Nodes that could not be ordered, in insertion order.
    pub remaining: Vec<String>,
}

impl fmt::Display for CycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "graph has a cycle through {} node(s): {}",
            self.remaining.len(),
            self.remaining.join(", ")
        )
    }
}

impl std::error::Error for CycleError {}

/// Kahn's algorithm. Sources are seeded in node insertion order and out-edges are expanded
/// in edge insertion order, so the result is a pure function of the two insertion orders.
pub fn topsort<N, E, G>(g: &Graph<N, E, G>) -> Result<Vec<String>, CycleError>
where
    N: Default + 'static,
    E: Default + 'static,
    G: Default,
{
    let mut indegree: Vec<usize> = g.nodes().map(|v| g.predecessors(v).len()).collect();
    let ids = g.node_ids();
    let index: HashMap<&str, usize> = ids
        .iter()
        .enumerate()
        .map(|(ix, v)| (v.as_str(), ix))
        .collect();

    let mut queue: VecDeque<usize> = indegree
        .iter()
        .enumerate()
        .filter(|(_, d)| **d == 0)
        .map(|(ix, _)| ix)
        .collect();

    let mut out: Vec<String> = Vec::with_capacity(ids.len());
    while let Some(ix) = queue.pop_front() {
        out.push(ids[ix].clone());
        for w in g.successors(&ids[ix]) {
            let Some(&w_ix) = index.get(w) else {
                continue;
            };
            indegree[w_ix] = indegree[w_ix].saturating_sub(1);
            if indegree[w_ix] == 0 {
                queue.push_back(w_ix);
            }
        }
    }

    if out.len() != ids.len() {
        let done: BTreeSet<&str> = out.iter().map(String::as_str).collect();
        return Err(CycleError {
            remaining: ids
                .iter()
                .filter(|v| !done.contains(v.as_str()))
                .cloned()
                .collect(),
        });
    }
    Ok(out)
}

pub fn is_acyclic<N, E, G>(g: &Graph<N, E, G>) -> bool
where
    N: Default + 'static,
    E: Default + 'static,
    G: Default,
{
    topsort(g).is_ok()
}

/// Weakly connected components, each listed in discovery order, components ordered by
/// their first node's insertion position.
pub fn components<N, E, G>(g: &Graph<N, E, G>) -> Vec<Vec<String>>
where
    N: Default + 'static,
    E: Default + 'static,
    G: Default,
{
    let mut seen: BTreeSet<String> = BTreeSet::new();
    let mut out: Vec<Vec<String>> = Vec::new();

    for v in g.nodes() {
        if seen.contains(v) {
            continue;
        }
        let mut cmpt: Vec<String> = Vec::new();
        let mut queue: VecDeque<String> = VecDeque::from([v.to_string()]);
        seen.insert(v.to_string());
        while let Some(n) = queue.pop_front() {
            for w in g.neighbors(&n) {
                if seen.insert(w.to_string()) {
                    queue.push_back(w.to_string());
                }
            }
            cmpt.push(n);
        }
        out.push(cmpt);
    }
    out
}
