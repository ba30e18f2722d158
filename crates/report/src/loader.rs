//! Reads product records from JSON and hands back a validated list.

use std::path::{Path, PathBuf};

use thiserror::Error;

use grocer_core::ValidationError;
use grocer_products::{parse_products_with, Product, RawRecord, ValidationMode};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input is not a JSON array of objects.
    #[error("failed to parse {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Load, validate and convert the records stored at `path`.
pub fn load_products(path: &Path, mode: ValidationMode) -> Result<Vec<Product>, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let products = parse_json(&text, &path.display().to_string(), mode)?;
    tracing::info!(path = %path.display(), records = products.len(), ?mode, "products loaded");
    Ok(products)
}

/// Same as [`load_products`] for JSON already in memory.
pub fn parse_products_json(text: &str, mode: ValidationMode) -> Result<Vec<Product>, LoadError> {
    parse_json(text, "<inline>", mode)
}

fn parse_json(text: &str, origin: &str, mode: ValidationMode) -> Result<Vec<Product>, LoadError> {
    let raw: Vec<RawRecord> = serde_json::from_str(text).map_err(|source| LoadError::Parse {
        origin: origin.to_string(),
        source,
    })?;
    Ok(parse_products_with(&raw, mode)?)
}
