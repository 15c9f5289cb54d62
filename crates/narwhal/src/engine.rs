//! The engine a host drives: mutations in, one frame per tick out.

use crate::animator;
use crate::config::{EngineConfig, validate_rate};
use crate::error::Result;
use crate::graph::{Graph, Mutation};
use crate::model::{Edge, Frame, Node, NodeFrame, NodeSpec};
use crate::solver::{self, Solved};

/// Owns the graph and keeps its desired positions in step with its topology.
///
/// Every mutation that changes nodes or edges is followed by a solver pass before `apply`
/// returns, so a tick never animates toward a stale layout. The host calls [`tick`] once per
/// frame while [`is_settled`] is false.
///
/// [`tick`]: LayoutEngine::tick
/// [`is_settled`]: LayoutEngine::is_settled
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    config: EngineConfig,
    graph: Graph,
    last_solve: Solved,
}

impl LayoutEngine {
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            graph: Graph::new(),
            last_solve: Solved::default(),
        })
    }

    /// Seeds the engine and lays it out once. Nodes without a position appear in place, so
    /// an engine seeded without hints starts settled.
    pub fn with_elements(
        config: EngineConfig,
        nodes: impl IntoIterator<Item = NodeSpec>,
        edges: impl IntoIterator<Item = Edge>,
    ) -> Result<Self> {
        config.validate()?;
        let mut graph = Graph::from_elements(nodes, edges, config.node_size)?;
        solver::validate_edges(&graph)?;
        let last_solve = solver::solve(&mut graph, &config);
        Ok(Self {
            config,
            graph,
            last_solve,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.graph.node(id)
    }

    pub fn is_settled(&self) -> bool {
        self.graph.settled()
    }

    /// Summary of the most recent solver pass.
    pub fn last_solve(&self) -> Solved {
        self.last_solve
    }

    #[tracing::instrument(skip_all, fields(mutation = mutation_kind(&mutation)))]
    pub fn apply(&mut self, mutation: Mutation) -> Result<()> {
        let applied = self.graph.apply(mutation, self.config.node_size)?;
        if applied.needs_layout {
            self.relayout();
        }
        Ok(())
    }

    /// Applies every mutation or none of them, followed by a single solver pass.
    #[tracing::instrument(skip_all)]
    pub fn apply_all(&mut self, mutations: impl IntoIterator<Item = Mutation>) -> Result<()> {
        let mut graph = self.graph.clone();
        let mut needs_layout = false;
        let mut count: usize = 0;
        for mutation in mutations {
            needs_layout |= graph.apply(mutation, self.config.node_size)?.needs_layout;
            count += 1;
        }
        self.graph = graph;
        tracing::debug!(count, needs_layout, "applied batch");
        if needs_layout {
            self.relayout();
        }
        Ok(())
    }

    /// Forces a solver pass on the current topology. This also releases every pin.
    pub fn relayout(&mut self) -> Solved {
        self.last_solve = solver::solve(&mut self.graph, &self.config);
        self.last_solve
    }

    /// Advances the animation by one tick at the configured rate.
    pub fn tick(&mut self) -> Frame {
        if !self.graph.settled() {
            let (rate, epsilon) = (self.config.rate, self.config.snap_epsilon);
            // Both values were checked by `EngineConfig::validate`.
            if let Err(err) = animator::step(&mut self.graph, rate, epsilon) {
                tracing::error!(%err, "animator rejected the configured rate");
            }
        }
        self.frame()
    }

    pub fn tick_with_rate(&mut self, rate: f64) -> Result<Frame> {
        validate_rate(rate)?;
        if !self.graph.settled() {
            animator::step(&mut self.graph, rate, self.config.snap_epsilon)?;
        }
        Ok(self.frame())
    }

    /// Current displayed positions, in node insertion order.
    pub fn frame(&self) -> Frame {
        let nodes = self
            .graph
            .nodes()
            .filter_map(|node| {
                node.displayed.map(|position| NodeFrame {
                    id: node.id.clone(),
                    position,
                    settled: node.is_settled(),
                })
            })
            .collect();
        Frame {
            nodes,
            settled: self.graph.settled(),
        }
    }
}

fn mutation_kind(mutation: &Mutation) -> &'static str {
    match mutation {
        Mutation::AddNode(_) => "add_node",
        Mutation::RemoveNode { .. } => "remove_node",
        Mutation::AddEdge { .. } => "add_edge",
        Mutation::RemoveEdge { .. } => "remove_edge",
        Mutation::OverridePosition { .. } => "override_position",
    }
}
