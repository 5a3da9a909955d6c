//! # linkrank
//!
//! PageRank and HITS link analysis over small directed graphs held as dense
//! adjacency matrices.
//!
//! Both algorithms run on one generic power-iteration engine
//! ([`iteration::PowerIteration`]). A ranker supplies the update rule and
//! the normalization; the engine applies it until every tracked vector moves
//! less than the tolerance (Euclidean distance) in the same step, or the
//! iteration budget runs out. Running out of budget is reported through
//! `converged = false`, never as an error.
//!
//! ```
//! use linkrank::{GraphBuilder, Hits, PageRank};
//!
//! let graph = GraphBuilder::from_edges([("a", "b"), ("b", "c"), ("c", "a"), ("a", "c")])
//!     .build()
//!     .unwrap();
//!
//! let pr = PageRank::new().with_damping(0.85).run(&graph).unwrap();
//! assert!((pr.scores.iter().sum::<f64>() - 1.0).abs() < 1e-9);
//!
//! let hits = Hits::new().run(&graph).unwrap();
//! assert!(hits.converged);
//! ```
//!
//! ## Dangling nodes
//!
//! A node with no outgoing edges gets an all-zero column in the PageRank
//! transition matrix. The mass it holds is dropped each step rather than
//! redistributed; [`PageRankResult::mass`] reports how much survived before
//! the final rescaling to sum 1.

#[macro_use]
mod macros;

pub mod batch;
pub mod config;
pub mod error;
pub mod graph;
pub mod hits;
pub mod iteration;
pub mod pagerank;
pub mod ranking;

pub use batch::{analyze, rank_batch, LinkAnalysis};
pub use config::RankConfig;
pub use error::{Error, Result};
pub use graph::{Graph, GraphBuilder, GraphSpec};
pub use hits::{Hits, HitsResult, HitsScores};
pub use iteration::{IterationOutcome, Normalization, PowerIteration, UpdateRule};
pub use pagerank::{PageRank, PageRankResult};
pub use ranking::Ranker;
