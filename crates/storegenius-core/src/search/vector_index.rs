//! Exact nearest-neighbor index over the catalog embedding matrix
//!
//! Every query is compared against every row. The similarity convention is
//! fixed when the index is built and cannot be changed per query.

use crate::error::{Result, StoreGeniusError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Tolerance used when checking whether a stored row is unit length
const UNIT_NORM_TOLERANCE: f32 = 1e-3;

/// Similarity convention shared by the embedding file, index and queries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Inner product over L2-normalized vectors; higher is better
    #[default]
    Cosine,
    /// Squared Euclidean distance over raw vectors; lower is better
    L2,
}

impl Metric {
    fn score(self, a: &[f32], b: &[f32]) -> f32 {
        match self {
            Metric::Cosine => a.iter().zip(b).map(|(x, y)| x * y).sum(),
            Metric::L2 => a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum(),
        }
    }

    /// Ordering that puts the better score first
    fn rank(self, a: f32, b: f32) -> Ordering {
        match self {
            Metric::Cosine => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
            Metric::L2 => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Metric::Cosine => write!(f, "cosine"),
            Metric::L2 => write!(f, "l2"),
        }
    }
}

/// One search hit: the catalog row and its metric score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub row: usize,
    pub score: f32,
}

/// Immutable flat index; safe to share between threads
#[derive(Debug, Clone)]
pub struct VectorIndex {
    data: Vec<f32>,
    dimensions: usize,
    rows: usize,
    metric: Metric,
}

impl VectorIndex {
    /// Build the index from a row-major embedding matrix.
    /// Under [`Metric::Cosine`] every row is L2-normalized on the way in.
    pub fn build(embeddings: &[Vec<f32>], metric: Metric) -> Result<Self> {
        let dimensions = embeddings.first().map(|row| row.len()).unwrap_or(0);
        if !embeddings.is_empty() && dimensions == 0 {
            return Err(StoreGeniusError::Index(
                "embedding rows must have at least one dimension".to_string(),
            ));
        }
        let mut data = Vec::with_capacity(embeddings.len() * dimensions);
        let mut renormalized = 0usize;

        for (i, row) in embeddings.iter().enumerate() {
            if row.len() != dimensions {
                return Err(StoreGeniusError::Index(format!(
                    "embedding row {} has {} dimensions, expected {}",
                    i,
                    row.len(),
                    dimensions
                )));
            }
            if row.iter().any(|v| !v.is_finite()) {
                return Err(StoreGeniusError::Index(format!(
                    "embedding row {} contains non-finite values",
                    i
                )));
            }

            match metric {
                Metric::Cosine => {
                    let norm = l2_norm(row);
                    if (norm - 1.0).abs() > UNIT_NORM_TOLERANCE {
                        renormalized += 1;
                    }
                    data.extend(normalized(row, norm));
                }
                Metric::L2 => data.extend_from_slice(row),
            }
        }

        if renormalized > 0 {
            tracing::warn!(
                "{} of {} catalog embeddings were not unit-length; was the embedding file produced for {} similarity?",
                renormalized,
                embeddings.len(),
                metric
            );
        }

        tracing::info!(
            "Built {} index with {} rows x {} dims",
            metric,
            embeddings.len(),
            dimensions
        );

        Ok(Self {
            data,
            dimensions,
            rows: embeddings.len(),
            metric,
        })
    }

    /// Search a batch of queries; one neighbor list per query, best first
    pub fn search(&self, queries: &[Vec<f32>], k: usize) -> Result<Vec<Vec<Neighbor>>> {
        queries.iter().map(|q| self.search_one(q, k)).collect()
    }

    /// Return the `min(k, len)` best rows for one query, best first.
    /// Ties break towards the lower row index.
    pub fn search_one(&self, query: &[f32], k: usize) -> Result<Vec<Neighbor>> {
        if self.rows == 0 || k == 0 {
            return Ok(Vec::new());
        }
        if query.len() != self.dimensions {
            return Err(StoreGeniusError::Index(format!(
                "query has {} dimensions, index has {}",
                query.len(),
                self.dimensions
            )));
        }
        if query.iter().any(|v| !v.is_finite()) {
            return Err(StoreGeniusError::Index(
                "query contains non-finite values".to_string(),
            ));
        }

        let query: Vec<f32> = match self.metric {
            Metric::Cosine => normalized(query, l2_norm(query)),
            Metric::L2 => query.to_vec(),
        };

        let mut scored: Vec<Neighbor> = self
            .data
            .chunks_exact(self.dimensions)
            .enumerate()
            .map(|(row, vector)| Neighbor {
                row,
                score: self.metric.score(&query, vector),
            })
            .collect();

        let metric = self.metric;
        let by_rank = |a: &Neighbor, b: &Neighbor| metric.rank(a.score, b.score).then(a.row.cmp(&b.row));

        let k = k.min(scored.len());
        if k < scored.len() {
            scored.select_nth_unstable_by(k - 1, by_rank);
            scored.truncate(k);
        }
        scored.sort_by(by_rank);
        Ok(scored)
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn len(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }
}

fn l2_norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Unit-length copy of `v`; a zero vector stays zero
fn normalized(v: &[f32], norm: f32) -> Vec<f32> {
    if norm == 0.0 {
        return v.to_vec();
    }
    v.iter().map(|x| x / norm).collect()
}
