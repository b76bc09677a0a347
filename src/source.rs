/// Suite document loading
///
/// This module handles:
/// - Reading a parsed suite tree from disk (JSON or TOML)
/// - Treating an empty document as "nothing to convert"
/// - Rejecting documents that don't match the suite tree shape
use crate::error::{ConvertError, Result};
use crate::types::{Product, SuiteDocument};
use log::{debug, error};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Toml,
}

impl DocumentFormat {
    /// `.json` files are JSON; anything else is read as TOML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            _ => DocumentFormat::Toml,
        }
    }
}

/// Parse document text into its products.
///
/// Blank text yields no products rather than an error.
pub fn parse_document(text: &str, format: DocumentFormat) -> Result<Vec<Product>, String> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let document: SuiteDocument = match format {
        DocumentFormat::Json => serde_json::from_str(text).map_err(|e| format!("Failed to parse JSON: {}", e))?,
        DocumentFormat::Toml => toml::from_str(text).map_err(|e| format!("Failed to parse TOML: {}", e))?,
    };

    Ok(document.products)
}

/// Load the products of a suite document
pub fn load_document(path: &Path) -> Result<Vec<Product>> {
    let text = fs::read_to_string(path).map_err(|source| ConvertError::Read { path: path.to_path_buf(), source })?;

    let products = parse_document(&text, DocumentFormat::from_path(path))
        .map_err(|message| ConvertError::InvalidDocument { path: path.to_path_buf(), message })?;

    if products.is_empty() {
        error!("Invalid suite document({}): it is empty!", path.display());
    } else {
        debug!(
            "Loaded suite document({}): {} products, {} testcases",
            path.display(),
            products.len(),
            products.iter().map(Product::testcase_count).sum::<usize>()
        );
    }

    Ok(products)
}
