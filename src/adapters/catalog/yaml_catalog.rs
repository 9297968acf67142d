//! YAML Catalog Adapter
//!
//! Loads a template catalog from a YAML file:
//!
//! ```yaml
//! default_category: stomach
//! templates:
//!   stomach:
//!     questions:
//!       - id: nausea
//!         question: Are you experiencing nausea?
//!         type: yes_no
//!         weight: high
//!     follow_ups:
//!       nausea:
//!         "yes":
//!           - id: vomit_frequency
//!             question: How many times have you vomited?
//!             type: choice
//!             options: [Once, 2-3 times, More than 3 times]
//! ```

use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::catalog::{CatalogError, Category, FollowUpsByAnswer, Question, Template, TemplateCatalog};
use crate::domain::foundation::QuestionId;

/// Errors that can occur while loading a catalog file
#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    #[error("Failed to read catalog {path}: {message}")]
    Io { path: PathBuf, message: String },

    #[error("Failed to parse catalog: {0}")]
    Parse(String),

    #[error("Invalid catalog: {0}")]
    Invalid(#[from] CatalogError),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    default_category: Category,
    templates: BTreeMap<Category, TemplateFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TemplateFile {
    questions: Vec<Question>,
    #[serde(default)]
    follow_ups: HashMap<QuestionId, FollowUpsByAnswer>,
}

/// Reads template catalogs from YAML
pub struct YamlCatalogLoader;

impl YamlCatalogLoader {
    /// Load and validate a catalog file
    ///
    /// # Errors
    /// - `Io` if the file cannot be read
    /// - `Parse` if the YAML does not match the catalog format
    /// - `Invalid` if the templates break catalog invariants
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<TemplateCatalog, CatalogLoadError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .await
            .map_err(|e| CatalogLoadError::Io {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let catalog = Self::parse(&contents)?;
        tracing::info!(
            path = %path.display(),
            categories = catalog.categories().len(),
            "Loaded question catalog"
        );
        Ok(catalog)
    }

    /// Parse and validate catalog YAML
    pub fn parse(yaml: &str) -> Result<TemplateCatalog, CatalogLoadError> {
        let file: CatalogFile =
            serde_yaml::from_str(yaml).map_err(|e| CatalogLoadError::Parse(e.to_string()))?;

        let templates = file
            .templates
            .into_iter()
            .map(|(category, t)| Template::from_parts(category, t.questions, t.follow_ups))
            .collect();

        Ok(TemplateCatalog::new(file.default_category, templates)?)
    }
}
