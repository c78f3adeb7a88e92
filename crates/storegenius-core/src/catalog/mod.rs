//! Read-only product catalog
//!
//! The catalog is loaded once at start-up from a CSV file and never mutated.
//! Row `i` of the catalog is aligned with row `i` of the embedding matrix.

mod embeddings;

pub use embeddings::{bytes_to_embeddings, embedding_to_bytes, is_raw_embedding_file, load_embeddings};

use crate::error::{Result, StoreGeniusError};
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A sellable item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub product_name: String,
    pub short_description: String,
    pub final_price: f64,
}

/// Raw CSV row; other columns are ignored
#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(default)]
    id: Option<String>,
    product_name: String,
    #[serde(default)]
    short_description: String,
    final_price: String,
}

/// Immutable, ordered catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    /// Load the catalog from a CSV file with a header row
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(StoreGeniusError::CatalogNotFound(path.display().to_string()));
        }
        let file = std::fs::File::open(path)?;
        let catalog = Self::from_reader(file)?;
        tracing::info!("Loaded {} catalog items from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Load the catalog from any CSV source with a header row
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let mut items = Vec::new();
        for (row_num, result) in reader.deserialize::<CatalogRow>().enumerate() {
            let row = result?;
            let final_price = parse_price_field(&row.final_price).ok_or_else(|| {
                StoreGeniusError::Catalog(format!(
                    "row {}: invalid final_price '{}'",
                    row_num + 1,
                    row.final_price
                ))
            })?;

            items.push(CatalogItem {
                id: row
                    .id
                    .filter(|id| !id.trim().is_empty())
                    .unwrap_or_else(|| row_num.to_string()),
                product_name: row.product_name,
                short_description: row.short_description,
                final_price,
            });
        }

        Ok(Self { items })
    }

    pub fn get(&self, row: usize) -> Option<&CatalogItem> {
        self.items.get(row)
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Parse a catalog price cell, stripping currency symbols and separators.
/// Returns `None` for empty, non-numeric, negative or non-finite values.
pub fn parse_price_field(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '$' | '₹' | ',') && !c.is_whitespace())
        .collect();
    let price: f64 = cleaned.parse().ok()?;
    (price.is_finite() && price >= 0.0).then_some(price)
}
