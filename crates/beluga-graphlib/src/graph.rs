//! The `Graph` container plus a few helper algorithms under [`alg`].

mod edge_key;

pub mod alg;

use edge_key::EdgeKeyView;
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use std::cell::{Cell, Ref, RefCell};
use std::fmt;

pub use edge_key::EdgeKey;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphOptions {
    /// Allow several edges between the same ordered pair, told apart by their `name`.
    pub multigraph: bool,
}

/// Per-node edge indices, each list in edge insertion order.
#[derive(Debug, Default)]
struct Adjacency {
    out_edges: Vec<Vec<usize>>,
    in_edges: Vec<Vec<usize>>,
}

impl Adjacency {
    fn build<N, E>(nodes: &FxIndexMap<String, N>, edges: &FxIndexMap<EdgeKey, E>) -> Self {
        let mut out_edges = vec![Vec::new(); nodes.len()];
        let mut in_edges = vec![Vec::new(); nodes.len()];
        for (edge_ix, key) in edges.keys().enumerate() {
            let (Some(v), Some(w)) = (nodes.get_index_of(&key.v), nodes.get_index_of(&key.w))
            else {
                continue;
            };
            out_edges[v].push(edge_ix);
            in_edges[w].push(edge_ix);
        }
        Self {
            out_edges,
            in_edges,
        }
    }
}

/// Directed graph with string node ids and optional parallel edges.
///
/// Nodes and edges iterate in insertion order; removal keeps the relative order of what is
/// left. Adjacency queries are served from an index rebuilt on first use after a
/// structural change.
pub struct Graph<N, E, G>
where
    N: Default + 'static,
    E: Default + 'static,
    G: Default,
{
    options: GraphOptions,
    label: G,
    default_node_label: Box<dyn Fn() -> N + Send + Sync>,
    default_edge_label: Box<dyn Fn() -> E + Send + Sync>,

    nodes: FxIndexMap<String, N>,
    edges: FxIndexMap<EdgeKey, E>,

    adjacency: RefCell<Adjacency>,
    adjacency_stale: Cell<bool>,
}

impl<N, E, G> fmt::Debug for Graph<N, E, G>
where
    N: Default + fmt::Debug + 'static,
    E: Default + fmt::Debug + 'static,
    G: Default + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("options", &self.options)
            .field("label", &self.label)
            .field("nodes", &self.nodes)
            .field("edges", &self.edges)
            .finish()
    }
}

impl<N, E, G> Graph<N, E, G>
where
    N: Default + 'static,
    E: Default + 'static,
    G: Default,
{
    pub fn new(options: GraphOptions) -> Self {
        Self {
            options,
            label: G::default(),
            default_node_label: Box::new(N::default),
            default_edge_label: Box::new(E::default),
            nodes: FxIndexMap::default(),
            edges: FxIndexMap::default(),
            adjacency: RefCell::new(Adjacency::default()),
            adjacency_stale: Cell::new(false),
        }
    }

    pub fn set_graph(&mut self, label: G) -> &mut Self {
        self.label = label;
        self
    }

    pub fn graph(&self) -> &G {
        &self.label
    }

    pub fn graph_mut(&mut self) -> &mut G {
        &mut self.label
    }

    /// Label used for nodes created implicitly, e.g. as edge endpoints.
    pub fn set_default_node_label<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn() -> N + Send + Sync + 'static,
    {
        self.default_node_label = Box::new(f);
        self
    }

    pub fn set_default_edge_label<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn() -> E + Send + Sync + 'static,
    {
        self.default_edge_label = Box::new(f);
        self
    }

    fn touch(&mut self) {
        self.adjacency_stale.set(true);
    }

    fn adjacency(&self) -> Ref<'_, Adjacency> {
        if self.adjacency_stale.get() {
            *self.adjacency.borrow_mut() = Adjacency::build(&self.nodes, &self.edges);
            self.adjacency_stale.set(false);
        }
        self.adjacency.borrow()
    }

    // ---- nodes ----

    pub fn has_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Inserts the node, or replaces the label of an existing one in place.
    pub fn set_node(&mut self, id: impl Into<String>, label: N) -> &mut Self {
        let id = id.into();
        if let Some(slot) = self.nodes.get_mut(&id) {
            *slot = label;
            return self;
        }
        self.nodes.insert(id, label);
        self.touch();
        self
    }

    pub fn ensure_node(&mut self, id: impl Into<String>) -> &mut Self {
        let id = id.into();
        if !self.nodes.contains_key(&id) {
            let label = (self.default_node_label)();
            self.nodes.insert(id, label);
            self.touch();
        }
        self
    }

    pub fn node(&self, id: &str) -> Option<&N> {
        self.nodes.get(id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut N> {
        self.nodes.get_mut(id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    pub fn node_ids(&self) -> Vec<String> {
        self.nodes.keys().cloned().collect()
    }

    pub fn for_each_node<F>(&self, mut f: F)
    where
        F: FnMut(&str, &N),
    {
        for (id, label) in &self.nodes {
            f(id, label);
        }
    }

    pub fn for_each_node_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&str, &mut N),
    {
        for (id, label) in &mut self.nodes {
            f(id, label);
        }
    }

    /// Removes the node and every edge incident to it.
    pub fn remove_node(&mut self, id: &str) -> bool {
        if self.nodes.shift_remove(id).is_none() {
            return false;
        }
        self.edges.retain(|key, _| key.v != id && key.w != id);
        self.touch();
        true
    }

    // ---- edges ----

    fn view<'a>(&self, v: &'a str, w: &'a str, name: Option<&'a str>) -> EdgeKeyView<'a> {
        EdgeKeyView {
            v,
            w,
            name: if self.options.multigraph { name } else { None },
        }
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> impl Iterator<Item = &EdgeKey> {
        self.edges.keys()
    }

    pub fn edge_keys(&self) -> Vec<EdgeKey> {
        self.edges.keys().cloned().collect()
    }

    pub fn for_each_edge<F>(&self, mut f: F)
    where
        F: FnMut(&EdgeKey, &E),
    {
        for (key, label) in &self.edges {
            f(key, label);
        }
    }

    pub fn set_edge(&mut self, v: impl Into<String>, w: impl Into<String>) -> &mut Self {
        self.set_edge_named(v, w, None::<String>, None)
    }

    pub fn set_edge_with_label(
        &mut self,
        v: impl Into<String>,
        w: impl Into<String>,
        label: E,
    ) -> &mut Self {
        self.set_edge_named(v, w, None::<String>, Some(label))
    }

    /// Adds (or relabels) an edge, creating missing endpoints with the default node label.
    ///
    /// Without `label` a new edge gets the default edge label and an existing one keeps its
    /// label. `name` is ignored unless the graph is a multigraph.
    pub fn set_edge_named(
        &mut self,
        v: impl Into<String>,
        w: impl Into<String>,
        name: Option<impl Into<String>>,
        label: Option<E>,
    ) -> &mut Self {
        let key = EdgeKey {
            v: v.into(),
            w: w.into(),
            name: name.map(Into::into).filter(|_| self.options.multigraph),
        };

        if let Some(existing) = self.edges.get_mut(&key) {
            if let Some(label) = label {
                *existing = label;
            }
            return self;
        }

        self.ensure_node(key.v.clone());
        self.ensure_node(key.w.clone());
        let label = label.unwrap_or_else(|| (self.default_edge_label)());
        self.edges.insert(key, label);
        self.touch();
        self
    }

    pub fn set_edge_key(&mut self, key: EdgeKey, label: E) -> &mut Self {
        self.set_edge_named(key.v, key.w, key.name, Some(label))
    }

    /// Adds an edge between every consecutive pair of `nodes`.
    pub fn set_path(&mut self, nodes: &[&str]) -> &mut Self {
        for pair in nodes.windows(2) {
            self.set_edge(pair[0], pair[1]);
        }
        self
    }

    pub fn has_edge(&self, v: &str, w: &str, name: Option<&str>) -> bool {
        self.edges.contains_key(&self.view(v, w, name))
    }

    pub fn edge(&self, v: &str, w: &str, name: Option<&str>) -> Option<&E> {
        self.edges.get(&self.view(v, w, name))
    }

    pub fn edge_by_key(&self, key: &EdgeKey) -> Option<&E> {
        self.edge(&key.v, &key.w, key.name.as_deref())
    }

    pub fn remove_edge(&mut self, v: &str, w: &str, name: Option<&str>) -> bool {
        let view = self.view(v, w, name);
        if self.edges.shift_remove(&view).is_none() {
            return false;
        }
        self.touch();
        true
    }

    pub fn remove_edge_key(&mut self, key: &EdgeKey) -> bool {
        self.remove_edge(&key.v, &key.w, key.name.as_deref())
    }

    // ---- adjacency ----

    fn edge_key_at(&self, edge_ix: usize) -> Option<&EdgeKey> {
        self.edges.get_index(edge_ix).map(|(key, _)| key)
    }

    fn out_edge_indices(&self, v: &str) -> Vec<usize> {
        match self.nodes.get_index_of(v) {
            Some(ix) => self.adjacency().out_edges[ix].clone(),
            None => Vec::new(),
        }
    }

    fn in_edge_indices(&self, v: &str) -> Vec<usize> {
        match self.nodes.get_index_of(v) {
            Some(ix) => self.adjacency().in_edges[ix].clone(),
            None => Vec::new(),
        }
    }

    pub fn successors(&self, v: &str) -> Vec<&str> {
        self.out_edge_indices(v)
            .into_iter()
            .filter_map(|ix| self.edge_key_at(ix))
            .map(|key| key.w.as_str())
            .collect()
    }

    pub fn predecessors(&self, v: &str) -> Vec<&str> {
        self.in_edge_indices(v)
            .into_iter()
            .filter_map(|ix| self.edge_key_at(ix))
            .map(|key| key.v.as_str())
            .collect()
    }

    /// Successors then predecessors, each neighbour listed once.
    pub fn neighbors(&self, v: &str) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for w in self.successors(v).into_iter().chain(self.predecessors(v)) {
            if !out.contains(&w) {
                out.push(w);
            }
        }
        out
    }

    /// Out-edges of `v`, optionally only those ending at `w`.
    pub fn out_edges(&self, v: &str, w: Option<&str>) -> Vec<EdgeKey> {
        self.out_edge_indices(v)
            .into_iter()
            .filter_map(|ix| self.edge_key_at(ix))
            .filter(|key| w.is_none_or(|w| key.w == w))
            .cloned()
            .collect()
    }

    /// In-edges of `v`, optionally only those starting at `u`.
    pub fn in_edges(&self, v: &str, u: Option<&str>) -> Vec<EdgeKey> {
        self.in_edge_indices(v)
            .into_iter()
            .filter_map(|ix| self.edge_key_at(ix))
            .filter(|key| u.is_none_or(|u| key.v == u))
            .cloned()
            .collect()
    }

    pub fn for_each_in_edge<F>(&self, v: &str, mut f: F)
    where
        F: FnMut(&EdgeKey, &E),
    {
        for ix in self.in_edge_indices(v) {
            if let Some((key, label)) = self.edges.get_index(ix) {
                f(key, label);
            }
        }
    }

    pub fn for_each_out_edge<F>(&self, v: &str, mut f: F)
    where
        F: FnMut(&EdgeKey, &E),
    {
        for ix in self.out_edge_indices(v) {
            if let Some((key, label)) = self.edges.get_index(ix) {
                f(key, label);
            }
        }
    }

    /// Nodes with no in-edges, in insertion order.
    pub fn sources(&self) -> Vec<&str> {
        let adjacency = self.adjacency();
        self.nodes
            .keys()
            .zip(&adjacency.in_edges)
            .filter(|(_, edges)| edges.is_empty())
            .map(|(id, _)| id.as_str())
            .collect()
    }

    /// Nodes with no out-edges, in insertion order.
    pub fn sinks(&self) -> Vec<&str> {
        let adjacency = self.adjacency();
        self.nodes
            .keys()
            .zip(&adjacency.out_edges)
            .filter(|(_, edges)| edges.is_empty())
            .map(|(id, _)| id.as_str())
            .collect()
    }
}
