//! Graph container APIs used by `beluga`.
//!
//! Nodes are keyed by string ids and edges by `(v, w, name)` triples. Both are kept in
//! insertion order, which the layout relies on for deterministic tie-breaking.

mod graph;

pub use graph::{EdgeKey, Graph, GraphOptions, alg};
