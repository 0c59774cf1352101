use crate::types::EndpointDescriptor;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Toml,
    Json,
}

impl CatalogFormat {
    /// `.json` files are JSON, everything else is read as TOML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => CatalogFormat::Json,
            _ => CatalogFormat::Toml,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    endpoints: Vec<EndpointDescriptor>,
}

pub fn parse_catalog(text: &str, format: CatalogFormat) -> Result<Vec<EndpointDescriptor>> {
    let catalog: CatalogFile = match format {
        CatalogFormat::Toml => toml::from_str(text).context("invalid TOML catalog")?,
        CatalogFormat::Json => serde_json::from_str(text).context("invalid JSON catalog")?,
    };

    validate(&catalog.endpoints)?;
    Ok(catalog.endpoints)
}

/// Remote catalogs carry no extension to go by: try JSON, then TOML
pub fn parse_catalog_any(text: &str) -> Result<Vec<EndpointDescriptor>> {
    match parse_catalog(text, CatalogFormat::Json) {
        Ok(endpoints) => Ok(endpoints),
        Err(json_err) => parse_catalog(text, CatalogFormat::Toml)
            .with_context(|| format!("not a JSON catalog either ({json_err:#})")),
    }
}

fn validate(endpoints: &[EndpointDescriptor]) -> Result<()> {
    for (index, endpoint) in endpoints.iter().enumerate() {
        if endpoint.path.is_empty() {
            bail!("endpoint #{index} has an empty path");
        }
        if !endpoint.path.starts_with('/') {
            bail!(
                "endpoint #{index} path {:?} must start with '/'",
                endpoint.path
            );
        }
    }
    Ok(())
}
