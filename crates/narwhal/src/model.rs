//! Node, edge and frame types shared by the graph, the solver and the animator.

use crate::config::is_extent;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque node identifier, unique among the nodes of a graph.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Moves the fraction `t` of the way from `self` to `to`, per axis.
    pub fn lerp(self, to: Point, t: f64) -> Point {
        Point {
            x: self.x * (1.0 - t) + to.x * t,
            y: self.y * (1.0 - t) + to.y * t,
        }
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self {
            width: 172.0,
            height: 36.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub label: String,
    /// Host payload, carried along untouched.
    pub data: Option<serde_json::Value>,
    pub size: Size,
    /// What the host currently draws. `None` until the node has been placed once.
    pub displayed: Option<Point>,
    /// Target computed by the last solver pass.
    pub desired: Option<Point>,
    /// Layer assigned by the last solver pass, 0 for sources.
    pub rank: Option<i32>,
    /// Set by a position override; cleared by the next solver pass.
    pub pinned: bool,
}

impl Node {
    /// True when nothing is left to animate for this node.
    pub fn is_settled(&self) -> bool {
        if self.pinned {
            return true;
        }
        match (self.displayed, self.desired) {
            (Some(displayed), Some(desired)) => displayed == desired,
            (_, None) => true,
            (None, Some(_)) => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
}

impl Edge {
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// A node as described by the host, before the engine owns it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeSpec {
    pub id: String,
    pub label: String,
    /// Falls back to `EngineConfig::node_size`.
    pub size: Option<Size>,
    /// Where the host would like the node to appear first. It animates from here to its
    /// laid out position; without a hint the node appears directly in place.
    pub position: Option<Point>,
    pub data: Option<serde_json::Value>,
}

impl NodeSpec {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            ..Default::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_position(mut self, position: Point) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Rejects a size or position hint the layout could not place.
    pub(crate) fn validate(&self) -> Result<()> {
        if let Some(size) = self.size {
            for (field, value) in [("size.width", size.width), ("size.height", size.height)] {
                if !is_extent(value) {
                    return Err(Error::InvalidValue {
                        id: NodeId::new(self.id.as_str()),
                        field,
                        value,
                    });
                }
            }
        }
        let Some(position) = self.position else {
            return Ok(());
        };
        check_point(&NodeId::new(self.id.as_str()), "position", position)
    }

    pub(crate) fn into_node(self, default_size: Size) -> Node {
        Node {
            id: NodeId::new(self.id),
            label: self.label,
            data: self.data,
            size: self.size.unwrap_or(default_size),
            displayed: self.position,
            desired: None,
            rank: None,
            pinned: false,
        }
    }
}

pub(crate) fn check_point(id: &NodeId, field: &'static str, point: Point) -> Result<()> {
    for value in [point.x, point.y] {
        if !value.is_finite() {
            return Err(Error::InvalidValue {
                id: id.clone(),
                field,
                value,
            });
        }
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeFrame {
    pub id: NodeId,
    pub position: Point,
    pub settled: bool,
}

/// Everything the renderer needs for one tick.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Frame {
    pub nodes: Vec<NodeFrame>,
    /// False while another tick would still move something.
    pub settled: bool,
}

impl Frame {
    pub fn position(&self, id: &str) -> Option<Point> {
        self.nodes
            .iter()
            .find(|n| n.id.as_str() == id)
            .map(|n| n.position)
    }
}
