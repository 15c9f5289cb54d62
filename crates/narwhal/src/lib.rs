//! Incremental layered graph layout.
//!
//! A [`LayoutEngine`] owns a directed graph. Every structural change re-runs a deterministic
//! layered layout ([`solver`]) that assigns each node a desired position, and each tick moves
//! the displayed positions a fraction of the way there ([`animator`]) until the graph is
//! settled. The host renders [`Frame`]s and stops ticking once a frame reports `settled`.
//!
//! ```
//! use narwhal::{Edge, EngineConfig, LayoutEngine, Mutation, NodeSpec};
//!
//! let mut engine = LayoutEngine::with_elements(
//!     EngineConfig::default(),
//!     [NodeSpec::new("a"), NodeSpec::new("b")],
//!     [Edge::new("a", "b")],
//! )?;
//! assert!(engine.is_settled());
//!
//! engine.apply(Mutation::add_node(NodeSpec::new("c")))?;
//! engine.apply(Mutation::add_edge("a", "c"))?;
//! while !engine.tick().settled {}
//! # Ok::<(), narwhal::Error>(())
//! ```

pub use beluga::RankDir;

pub mod animator;
pub mod config;
mod engine;
mod error;
pub mod graph;
pub mod model;
pub mod solver;

pub use config::{Anchor, EngineConfig, LayoutConfig};
pub use engine::LayoutEngine;
pub use error::{Error, Result};
pub use graph::{Applied, Graph, Mutation};
pub use model::{Edge, Frame, Node, NodeFrame, NodeId, NodeSpec, Point, Size};
pub use solver::Solved;
