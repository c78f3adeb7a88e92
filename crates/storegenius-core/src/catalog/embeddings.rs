//! Precomputed embedding matrix loading
//!
//! Two layouts are accepted:
//! - `.csv` / `.txt`: one row of comma-separated floats per catalog item
//! - `.f32` / `.bin`: raw little-endian f32, row-major, width given by config

use crate::error::{Result, StoreGeniusError};
use csv::ReaderBuilder;
use std::path::Path;

/// Whether the path names a raw little-endian f32 matrix
pub fn is_raw_embedding_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("f32") | Some("bin")
    )
}

/// Load the embedding matrix, one `Vec<f32>` per catalog row
pub fn load_embeddings(path: &Path, dimensions: Option<usize>) -> Result<Vec<Vec<f32>>> {
    if !path.exists() {
        return Err(StoreGeniusError::CatalogNotFound(path.display().to_string()));
    }

    let rows = if is_raw_embedding_file(path) {
        let dims = dimensions.ok_or_else(|| {
            StoreGeniusError::Config(format!(
                "dimensions required to read raw embedding file {}",
                path.display()
            ))
        })?;
        bytes_to_embeddings(&std::fs::read(path)?, dims)?
    } else {
        read_csv_rows(path)?
    };

    if let Some(dims) = dimensions {
        if let Some((row, v)) = rows.iter().enumerate().find(|(_, v)| v.len() != dims) {
            return Err(StoreGeniusError::Catalog(format!(
                "embedding row {} has {} values, expected {}",
                row + 1,
                v.len(),
                dims
            )));
        }
    }

    tracing::info!(
        "Loaded {} embeddings ({} dims) from {}",
        rows.len(),
        rows.first().map(|r| r.len()).unwrap_or(0),
        path.display()
    );
    Ok(rows)
}

fn read_csv_rows(path: &Path) -> Result<Vec<Vec<f32>>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut rows = Vec::new();
    for (row_num, record) in reader.records().enumerate() {
        let record = record?;
        let values = record
            .iter()
            .map(|field| field.parse::<f32>())
            .collect::<std::result::Result<Vec<f32>, _>>()
            .map_err(|e| {
                StoreGeniusError::Catalog(format!("embedding row {}: {}", row_num + 1, e))
            })?;
        rows.push(values);
    }
    Ok(rows)
}

/// Convert f32 embedding to bytes (little-endian)
pub fn embedding_to_bytes(embedding: &[f32]) -> Vec<u8> {
    embedding.iter().flat_map(|f| f.to_le_bytes()).collect()
}

/// Split a raw little-endian buffer into rows of `dimensions` floats
pub fn bytes_to_embeddings(bytes: &[u8], dimensions: usize) -> Result<Vec<Vec<f32>>> {
    let row_bytes = dimensions * std::mem::size_of::<f32>();
    if row_bytes == 0 || bytes.len() % row_bytes != 0 {
        return Err(StoreGeniusError::Catalog(format!(
            "embedding buffer of {} bytes is not a whole number of {}-dim rows",
            bytes.len(),
            dimensions
        )));
    }

    Ok(bytes
        .chunks_exact(row_bytes)
        .map(|row| {
            row.chunks_exact(4)
                .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
                .collect()
        })
        .collect())
}
