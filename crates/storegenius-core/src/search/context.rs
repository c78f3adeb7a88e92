//! Explicitly constructed retrieval state
//!
//! Holds the read-only catalog, its built vector index and the query
//! embedding convention. Built once at start-up and shared by reference
//! (or `Arc`) between request handlers.

use super::{Metric, VectorIndex};
use crate::catalog::{load_embeddings, Catalog, CatalogItem};
use crate::config::CatalogConfig;
use crate::error::{Result, StoreGeniusError};

#[derive(Debug, Clone)]
pub struct RetrievalContext {
    catalog: Catalog,
    index: VectorIndex,
    query_prefix: String,
}

impl RetrievalContext {
    /// Pair a catalog with the index built from its embedding file.
    /// Row counts must agree; row order is the caller's responsibility.
    pub fn new(catalog: Catalog, index: VectorIndex, query_prefix: impl Into<String>) -> Result<Self> {
        if catalog.len() != index.len() {
            return Err(StoreGeniusError::Catalog(format!(
                "catalog has {} rows but embedding matrix has {}",
                catalog.len(),
                index.len()
            )));
        }

        Ok(Self {
            catalog,
            index,
            query_prefix: query_prefix.into(),
        })
    }

    /// Load catalog and embeddings from disk and build the index
    pub fn load(config: &CatalogConfig) -> Result<Self> {
        let catalog = Catalog::from_csv_path(&config.path)?;
        let embeddings = load_embeddings(&config.embeddings, config.dimensions)?;
        let index = VectorIndex::build(&embeddings, config.metric)?;
        Self::new(catalog, index, config.query_prefix.clone())
    }

    /// Text actually sent to the embedder for a query
    pub fn query_text(&self, query: &str) -> String {
        format!("{}{}", self.query_prefix, query)
    }

    pub fn item(&self, row: usize) -> Option<&CatalogItem> {
        self.catalog.get(row)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn index(&self) -> &VectorIndex {
        &self.index
    }

    pub fn metric(&self) -> Metric {
        self.index.metric()
    }

    pub fn query_prefix(&self) -> &str {
        &self.query_prefix
    }
}
