//! Layout label types.

use crate::graphlib::EdgeKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum RankDir {
    /// Ranks grow downwards.
    #[default]
    TB,
    BT,
    LR,
    RL,
}

#[derive(Debug, Clone)]
pub struct GraphLabel {
    pub rankdir: RankDir,
    /// Gap between neighbouring nodes of one rank.
    pub nodesep: f64,
    /// Gap between neighbouring rank bands.
    pub ranksep: f64,
    /// Gap reserved next to a long edge passing through a rank.
    pub edgesep: f64,
    pub marginx: f64,
    pub marginy: f64,

    /// Drawing extent, written by the layout.
    pub width: f64,
    pub height: f64,

    /// First dummy node of every long-edge chain, written by `normalize::run`.
    pub dummy_chains: Vec<String>,
}

impl Default for GraphLabel {
    fn default() -> Self {
        Self {
            rankdir: RankDir::TB,
            nodesep: 50.0,
            ranksep: 50.0,
            edgesep: 20.0,
            marginx: 0.0,
            marginy: 0.0,
            width: 0.0,
            height: 0.0,
            dummy_chains: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeLabel {
    pub width: f64,
    pub height: f64,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub rank: Option<i32>,
    pub order: Option<usize>,

    /// Set on the placeholder nodes that carry a long edge across a rank.
    pub dummy: bool,
    pub edge_label: Option<EdgeLabel>,
    pub edge_obj: Option<EdgeKey>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgeLabel {
    /// Minimum number of ranks between the endpoints.
    pub minlen: usize,
    /// Pull of the edge during crossing minimization.
    pub weight: f64,
    pub reversed: bool,
    pub forward_name: Option<String>,
}

impl Default for EdgeLabel {
    fn default() -> Self {
        Self {
            minlen: 1,
            weight: 1.0,
            reversed: false,
            forward_name: None,
        }
    }
}
