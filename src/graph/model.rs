//! Immutable labelled graph with its derived matrices
//!
//! A [`Graph`] is validated once at construction and never mutated. The
//! transpose (used by HITS) and the transition matrix (used by PageRank) are
//! derived eagerly, so any number of ranker runs can read them concurrently.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::dense::{self, DenseMatrix};
use crate::error::{Error, Result};

/// A directed graph over labelled nodes, stored as a dense adjacency matrix
#[derive(Debug, Clone)]
pub struct Graph {
    labels: Vec<String>,
    label_to_id: FxHashMap<String, usize>,
    adjacency: DenseMatrix,
    transpose: DenseMatrix,
    transition: DenseMatrix,
    out_degree: Vec<f64>,
}

impl Graph {
    /// Build a graph from node labels and an N×N adjacency matrix
    ///
    /// `adjacency[i][j] > 0` denotes an edge from node `i` to node `j`.
    /// Fails if the matrix is ragged or not square, if its dimension does not
    /// match the label count, if a label repeats, if an entry is negative or
    /// not finite, or if a row or column total overflows.
    pub fn new<L>(labels: Vec<L>, adjacency: Vec<Vec<f64>>) -> Result<Self>
    where
        L: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let adjacency = DenseMatrix::from_rows(adjacency)?;
        Self::from_matrix(labels, adjacency)
    }

    /// Build a graph from labels and an already-assembled matrix
    pub fn from_matrix(labels: Vec<String>, adjacency: DenseMatrix) -> Result<Self> {
        // An empty row list yields a 0x0 matrix regardless of label count
        if adjacency.rows != labels.len() {
            return Err(Error::Shape(format!(
                "adjacency matrix has {} rows but {} labels were given",
                adjacency.rows,
                labels.len()
            )));
        }
        adjacency.ensure_square()?;

        let mut label_to_id =
            FxHashMap::with_capacity_and_hasher(labels.len(), Default::default());
        for (id, label) in labels.iter().enumerate() {
            if label_to_id.insert(label.clone(), id).is_some() {
                return Err(Error::DuplicateLabel(label.clone()));
            }
        }

        for (row, values) in adjacency.iter_rows().enumerate() {
            for (col, &weight) in values.iter().enumerate() {
                if !weight.is_finite() || weight < 0.0 {
                    return Err(Error::InvalidWeight { row, col, weight });
                }
            }
        }

        let transpose = dense::transpose(&adjacency)?;
        check_totals(&adjacency, false)?;
        check_totals(&transpose, true)?;
        let transition = dense::transition_matrix(&adjacency)?;
        let out_degree = adjacency.row_sums();

        Ok(Self {
            labels,
            label_to_id,
            adjacency,
            transpose,
            transition,
            out_degree,
        })
    }

    /// Parse a graph from a JSON [`GraphSpec`] document
    pub fn from_json(json: &str) -> Result<Self> {
        let spec: GraphSpec = serde_json::from_str(json)?;
        spec.into_graph()
    }

    /// Number of nodes
    pub fn num_nodes(&self) -> usize {
        self.labels.len()
    }

    /// Check if the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of non-zero adjacency entries
    pub fn num_edges(&self) -> usize {
        self.adjacency
            .iter_rows()
            .map(|row| row.iter().filter(|&&w| w > 0.0).count())
            .sum()
    }

    /// Node labels, in node order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Label of a node, `None` if out of range
    pub fn label(&self, node: usize) -> Option<&str> {
        self.labels.get(node).map(String::as_str)
    }

    /// Node index for a label
    pub fn node_id(&self, label: &str) -> Option<usize> {
        self.label_to_id.get(label).copied()
    }

    /// Adjacency matrix `A`
    pub fn adjacency(&self) -> &DenseMatrix {
        &self.adjacency
    }

    /// Transpose `A^T`
    pub fn transpose(&self) -> &DenseMatrix {
        &self.transpose
    }

    /// Column-stochastic transition matrix `M`
    ///
    /// Columns of dangling nodes are all zero, see
    /// [`transition_matrix`](super::dense::transition_matrix).
    pub fn transition(&self) -> &DenseMatrix {
        &self.transition
    }

    /// Out-degree (row sum) of every node
    pub fn out_degrees(&self) -> &[f64] {
        &self.out_degree
    }

    /// Out-degree of one node, `None` if out of range
    pub fn out_degree(&self, node: usize) -> Option<f64> {
        self.out_degree.get(node).copied()
    }

    /// Nodes with no outgoing edges
    pub fn dangling_nodes(&self) -> Vec<usize> {
        self.out_degree
            .iter()
            .enumerate()
            .filter(|(_, d)| **d == 0.0)
            .map(|(i, _)| i)
            .collect()
    }

    /// Check whether an edge `from → to` exists
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.adjacency.get(from, to) > 0.0
    }
}

/// Reject a matrix whose row totals leave the `f64` range.
///
/// Passing the transpose checks column totals; errors are reported in
/// adjacency coordinates either way.
fn check_totals(matrix: &DenseMatrix, transposed: bool) -> Result<()> {
    for (i, values) in matrix.iter_rows().enumerate() {
        let mut total = 0.0;
        for (j, &weight) in values.iter().enumerate() {
            total += weight;
            if !total.is_finite() {
                let (row, col) = if transposed { (j, i) } else { (i, j) };
                return Err(Error::InvalidWeight { row, col, weight });
            }
        }
    }
    Ok(())
}

/// Serialized graph input: ordered labels plus an adjacency matrix
///
/// ```json
/// {
///   "labels": ["a", "b", "c"],
///   "adjacency": [[0, 1, 1], [0, 0, 1], [1, 0, 0]]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphSpec {
    pub labels: Vec<String>,
    pub adjacency: Vec<Vec<f64>>,
}

impl GraphSpec {
    /// Validate and convert into a [`Graph`]
    pub fn into_graph(self) -> Result<Graph> {
        Graph::new(self.labels, self.adjacency)
    }
}

impl From<&Graph> for GraphSpec {
    fn from(graph: &Graph) -> Self {
        Self {
            labels: graph.labels.clone(),
            adjacency: graph.adjacency.to_rows(),
        }
    }
}
