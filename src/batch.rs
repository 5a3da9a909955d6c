//! Parallel execution of independent ranking runs
//!
//! Graphs and their derived matrices are immutable, so they can be read from
//! many threads at once. Every run still owns its own iteration state; the
//! only thing shared is `&Graph` and `&Ranker`.

use rayon::prelude::*;
use serde::Serialize;

use crate::error::Result;
use crate::graph::Graph;
use crate::hits::{Hits, HitsResult};
use crate::pagerank::{PageRank, PageRankResult};
use crate::ranking::Ranker;

/// Rank many graphs in parallel with the same ranker
///
/// Results are returned in input order; one failing graph does not affect
/// the others.
pub fn rank_batch<R>(ranker: &R, graphs: &[Graph]) -> Vec<Result<R::Output>>
where
    R: Ranker + Sync,
{
    trace_event!(debug, ranker = ranker.name(), graphs = graphs.len(), "ranking batch");
    graphs.par_iter().map(|graph| ranker.rank(graph)).collect()
}

/// PageRank and HITS computed over the same graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkAnalysis {
    pub pagerank: PageRankResult,
    pub hits: HitsResult,
}

/// Run PageRank and HITS side by side on one graph
pub fn analyze(graph: &Graph, pagerank: &PageRank, hits: &Hits) -> Result<LinkAnalysis> {
    let (pagerank, hits) = rayon::join(|| pagerank.run(graph), || hits.run(graph));
    Ok(LinkAnalysis {
        pagerank: pagerank?,
        hits: hits?,
    })
}
