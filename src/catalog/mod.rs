//! Endpoint catalog loading
//!
//! The catalog lists every documented endpoint. It is read from a TOML/JSON
//! file or fetched from an http(s) URL.

mod fetch;
mod parse;

pub use fetch::load_catalog_background;

use std::fmt;
use std::path::PathBuf;
use url::Url;

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogSource {
    File(PathBuf),
    Remote(Url),
}

impl CatalogSource {
    /// `http://` and `https://` sources are fetched, anything else is a path
    pub fn parse(source: &str) -> Self {
        match Url::parse(source) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => CatalogSource::Remote(url),
            _ => CatalogSource::File(PathBuf::from(source)),
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::File(path) => write!(f, "{}", path.display()),
            CatalogSource::Remote(url) => write!(f, "{url}"),
        }
    }
}
