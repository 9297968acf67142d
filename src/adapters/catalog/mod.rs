//! Catalog Adapters
//!
//! - **YamlCatalogLoader** - Reads a template catalog from a YAML file

mod yaml_catalog;

pub use yaml_catalog::{CatalogLoadError, YamlCatalogLoader};
