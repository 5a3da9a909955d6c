//! Graph builder for labelled edge lists
//!
//! Collects nodes and directed edges incrementally, using FxHashMap for
//! O(1) label and edge lookups, then materializes a dense [`Graph`].

use rustc_hash::FxHashMap;

use super::dense::DenseMatrix;
use super::model::Graph;
use crate::error::{Error, Result};

/// A node in the graph builder
#[derive(Debug, Clone)]
pub struct BuilderNode {
    /// The label for this node
    pub label: String,
    /// Outgoing edges: target node ID -> edge weight
    pub edges: FxHashMap<usize, f64>,
}

impl BuilderNode {
    /// Create a new node
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            edges: FxHashMap::default(),
        }
    }
}

/// A mutable builder that assigns node IDs in insertion order
#[derive(Debug)]
pub struct GraphBuilder {
    /// Maps label -> node ID
    label_to_id: FxHashMap<String, usize>,
    /// Node storage
    nodes: Vec<BuilderNode>,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder {
    /// Create a new empty graph builder
    pub fn new() -> Self {
        Self {
            label_to_id: FxHashMap::default(),
            nodes: Vec::new(),
        }
    }

    /// Create a graph builder with pre-allocated capacity
    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            label_to_id: FxHashMap::with_capacity_and_hasher(node_capacity, Default::default()),
            nodes: Vec::with_capacity(node_capacity),
        }
    }

    /// Build from a list of `(source, target)` label pairs
    ///
    /// Nodes are numbered in order of first appearance.
    pub fn from_edges<'a, I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut builder = Self::new();
        for (from, to) in edges {
            let from = builder.get_or_create_node(from);
            let to = builder.get_or_create_node(to);
            builder.add_edge(from, to);
        }
        builder
    }

    /// Get or create a node for the given label, returning its ID
    pub fn get_or_create_node(&mut self, label: &str) -> usize {
        if let Some(&id) = self.label_to_id.get(label) {
            return id;
        }

        let id = self.nodes.len();
        self.label_to_id.insert(label.to_string(), id);
        self.nodes.push(BuilderNode::new(label));
        id
    }

    /// Add a directed edge `from → to` with weight 1.0
    ///
    /// Adding the same edge twice keeps a single edge.
    pub fn add_edge(&mut self, from: usize, to: usize) {
        self.set_edge_weight(from, to, 1.0);
    }

    /// Set the weight of a directed edge, replacing any previous weight
    ///
    /// Out-of-range node IDs are ignored.
    pub fn set_edge_weight(&mut self, from: usize, to: usize, weight: f64) {
        if to >= self.nodes.len() {
            return;
        }
        if let Some(node) = self.nodes.get_mut(from) {
            node.edges.insert(to, weight);
        }
    }

    /// Add a directed edge between two existing labels
    pub fn add_edge_by_label(&mut self, from: &str, to: &str) -> Result<()> {
        let from = self
            .get_node_id(from)
            .ok_or_else(|| Error::UnknownLabel(from.to_string()))?;
        let to = self
            .get_node_id(to)
            .ok_or_else(|| Error::UnknownLabel(to.to_string()))?;
        self.add_edge(from, to);
        Ok(())
    }

    /// Get the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the total number of directed edges
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum()
    }

    /// Get a node by ID
    pub fn get_node(&self, id: usize) -> Option<&BuilderNode> {
        self.nodes.get(id)
    }

    /// Get a node ID by label
    pub fn get_node_id(&self, label: &str) -> Option<usize> {
        self.label_to_id.get(label).copied()
    }

    /// Get the label for a node ID
    pub fn get_label(&self, id: usize) -> Option<&str> {
        self.nodes.get(id).map(|n| n.label.as_str())
    }

    /// Iterate over all nodes
    pub fn nodes(&self) -> impl Iterator<Item = (usize, &BuilderNode)> {
        self.nodes.iter().enumerate()
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Materialize the dense adjacency matrix and validate it into a [`Graph`]
    pub fn build(&self) -> Result<Graph> {
        let n = self.nodes.len();
        let mut adjacency = DenseMatrix::zeros(n, n);
        let mut labels = Vec::with_capacity(n);

        for (id, node) in self.nodes() {
            labels.push(node.label.clone());
            for (&target, &weight) in &node.edges {
                adjacency.set(id, target, weight);
            }
        }

        Graph::from_matrix(labels, adjacency)
    }
}
