//! Engine configuration.
//!
//! Plain data with defaults; hosts embed these in their own settings through serde.

use crate::error::{Error, Result};
use crate::model::Size;
use beluga::RankDir;
use serde::{Deserialize, Serialize};

/// Spacing handed to the layered layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub rankdir: RankDir,
    /// Gap between neighbouring nodes of one rank.
    pub nodesep: f64,
    /// Gap between ranks.
    pub ranksep: f64,
    pub marginx: f64,
    pub marginy: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            rankdir: RankDir::TB,
            nodesep: 50.0,
            ranksep: 50.0,
            marginx: 0.0,
            marginy: 0.0,
        }
    }
}

/// Which point of a node's box a position refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Anchor {
    #[default]
    TopLeft,
    Center,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub layout: LayoutConfig,
    /// Size of nodes added without one.
    pub node_size: Size,
    /// Fraction of the remaining distance closed per tick, in `(0, 1]`.
    pub rate: f64,
    /// Per-axis distance under which a node snaps onto its target.
    pub snap_epsilon: f64,
    pub anchor: Anchor,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            node_size: Size::default(),
            rate: 0.05,
            snap_epsilon: 0.01,
            anchor: Anchor::TopLeft,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        validate_rate(self.rate)?;
        validate_epsilon(self.snap_epsilon)?;

        let layout = &self.layout;
        for (name, value) in [
            ("layout.nodesep", layout.nodesep),
            ("layout.ranksep", layout.ranksep),
            ("layout.marginx", layout.marginx),
            ("layout.marginy", layout.marginy),
            ("node_size.width", self.node_size.width),
            ("node_size.height", self.node_size.height),
        ] {
            if !is_extent(value) {
                return Err(Error::InvalidConfig {
                    message: format!("{name} must be finite and non-negative, got {value}"),
                });
            }
        }
        Ok(())
    }
}

/// Finite and non-negative: spacings, margins and sizes.
pub(crate) fn is_extent(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

pub(crate) fn validate_rate(rate: f64) -> Result<()> {
    if rate.is_finite() && rate > 0.0 && rate <= 1.0 {
        Ok(())
    } else {
        Err(Error::InvalidRate { rate })
    }
}

pub(crate) fn validate_epsilon(epsilon: f64) -> Result<()> {
    if epsilon.is_finite() && epsilon > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidConfig {
            message: format!("snap_epsilon must be finite and positive, got {epsilon}"),
        })
    }
}
