//! The graph the engine owns, and the mutations a host can apply to it.

use crate::error::{Error, Result};
use crate::model::{Edge, Node, NodeId, NodeSpec, Point, Size, check_point};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A change requested by the host, usually in response to user input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Mutation {
    AddNode(NodeSpec),
    /// Also removes every edge touching the node.
    RemoveNode { id: NodeId },
    AddEdge { source: NodeId, target: NodeId },
    /// Removes the first matching edge, if any.
    RemoveEdge { source: NodeId, target: NodeId },
    /// Moves a node to where the host put it (a drag) and keeps it there until the next
    /// layout pass.
    OverridePosition { id: NodeId, position: Point },
}

impl Mutation {
    pub fn add_node(spec: NodeSpec) -> Self {
        Self::AddNode(spec)
    }

    pub fn remove_node(id: impl Into<NodeId>) -> Self {
        Self::RemoveNode { id: id.into() }
    }

    pub fn add_edge(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self::AddEdge {
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn remove_edge(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self::RemoveEdge {
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn override_position(id: impl Into<NodeId>, position: Point) -> Self {
        Self::OverridePosition {
            id: id.into(),
            position,
        }
    }
}

/// Outcome of an accepted mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Applied {
    /// Nodes or edges changed, so desired positions are stale.
    pub needs_layout: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    pub(crate) nodes: IndexMap<NodeId, Node>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) settled: bool,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    pub fn new() -> Self {
        Self {
            nodes: IndexMap::new(),
            edges: Vec::new(),
            settled: true,
        }
    }

    /// Builds a graph from host lists. Duplicate ids and non-finite sizes or positions are
    /// rejected; edges are taken as given, see [`crate::solver::validate_edges`].
    pub fn from_elements(
        nodes: impl IntoIterator<Item = NodeSpec>,
        edges: impl IntoIterator<Item = Edge>,
        default_size: Size,
    ) -> Result<Self> {
        let mut graph = Self::new();
        for spec in nodes {
            spec.validate()?;
            graph.insert_node(spec.into_node(default_size))?;
        }
        graph.edges.extend(edges);
        graph.refresh_settled();
        Ok(graph)
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Value computed by the last solver or animator pass.
    pub fn settled(&self) -> bool {
        self.settled
    }

    /// Recomputes the settled flag from the nodes. Pinned nodes never hold the graph
    /// unsettled.
    pub fn is_settled(&self) -> bool {
        self.nodes.values().all(Node::is_settled)
    }

    pub(crate) fn refresh_settled(&mut self) -> bool {
        self.settled = self.is_settled();
        self.settled
    }

    pub(crate) fn insert_node(&mut self, node: Node) -> Result<()> {
        if self.nodes.contains_key(&node.id) {
            return Err(Error::DuplicateNode { id: node.id });
        }
        self.nodes.insert(node.id.clone(), node);
        Ok(())
    }

    /// Validates `mutation` against the current graph and commits it. A rejected mutation
    /// leaves the graph untouched.
    pub fn apply(&mut self, mutation: Mutation, default_size: Size) -> Result<Applied> {
        match mutation {
            Mutation::AddNode(spec) => {
                spec.validate()?;
                self.insert_node(spec.into_node(default_size))?;
                self.settled = false;
                Ok(Applied { needs_layout: true })
            }
            Mutation::RemoveNode { id } => {
                if self.nodes.shift_remove(&id).is_none() {
                    return Err(Error::UnknownNode { id });
                }
                self.edges.retain(|e| e.source != id && e.target != id);
                Ok(Applied { needs_layout: true })
            }
            Mutation::AddEdge { source, target } => {
                self.require(&source)?;
                self.require(&target)?;
                self.edges.push(Edge { source, target });
                Ok(Applied { needs_layout: true })
            }
            Mutation::RemoveEdge { source, target } => {
                self.require(&source)?;
                self.require(&target)?;
                let Some(ix) = self
                    .edges
                    .iter()
                    .position(|e| e.source == source && e.target == target)
                else {
                    return Ok(Applied::default());
                };
                self.edges.remove(ix);
                Ok(Applied { needs_layout: true })
            }
            Mutation::OverridePosition { id, position } => {
                check_point(&id, "position", position)?;
                let Some(node) = self.nodes.get_mut(&id) else {
                    return Err(Error::UnknownNode { id });
                };
                node.displayed = Some(position);
                node.pinned = true;
                self.refresh_settled();
                Ok(Applied::default())
            }
        }
    }

    fn require(&self, id: &NodeId) -> Result<()> {
        if self.nodes.contains_key(id) {
            Ok(())
        } else {
            Err(Error::UnknownNode { id: id.clone() })
        }
    }

    /// First edge whose endpoints are not both present.
    pub(crate) fn first_dangling_edge(&self) -> Option<&Edge> {
        self.edges.iter().find(|e| {
            !self.nodes.contains_key(&e.source) || !self.nodes.contains_key(&e.target)
        })
    }
}
