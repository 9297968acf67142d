//! TemplateCatalog - validated set of templates with a default category.

use std::collections::HashMap;
use std::sync::Arc;

use super::{builtin, Category, CatalogError, Template, TemplateSelector};

/// Immutable, validated mapping from category to template.
///
/// Construction fails unless every template is valid and the default
/// category has a template, so lookups through [`TemplateCatalog::template_for`]
/// cannot miss at run time.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: HashMap<Category, Arc<Template>>,
    default_category: Category,
}

impl TemplateCatalog {
    /// Builds a catalog, validating every template.
    ///
    /// # Errors
    ///
    /// - `DuplicateTemplate` if two templates share a category
    /// - `MissingDefault` if `default_category` has no template
    /// - any error from [`Template::validate`]
    pub fn new(default_category: Category, templates: Vec<Template>) -> Result<Self, CatalogError> {
        let mut by_category = HashMap::with_capacity(templates.len());
        for template in templates {
            template.validate()?;
            let category = template.category();
            if by_category.insert(category, Arc::new(template)).is_some() {
                return Err(CatalogError::DuplicateTemplate(category));
            }
        }

        if !by_category.contains_key(&default_category) {
            return Err(CatalogError::MissingDefault(default_category));
        }

        Ok(Self {
            templates: by_category,
            default_category,
        })
    }

    /// Returns the compiled-in catalog.
    pub fn builtin() -> Arc<TemplateCatalog> {
        builtin::BUILTIN_CATALOG.clone()
    }

    pub fn default_category(&self) -> Category {
        self.default_category
    }

    /// Selector that falls back to this catalog's default category.
    pub fn selector(&self) -> TemplateSelector {
        TemplateSelector::new(self.default_category)
    }

    /// Selects the category for free-text symptoms.
    pub fn select(&self, symptom_text: &str) -> Category {
        self.selector().select(symptom_text)
    }

    /// Returns the template for `category` if one is defined.
    pub fn template(&self, category: Category) -> Option<Arc<Template>> {
        self.templates.get(&category).cloned()
    }

    /// Returns the template for `category`, falling back to the default category.
    ///
    /// # Errors
    ///
    /// - `InvalidCategory` if neither template exists
    pub fn template_for(&self, category: Category) -> Result<Arc<Template>, CatalogError> {
        self.template(category)
            .or_else(|| self.template(self.default_category))
            .ok_or(CatalogError::InvalidCategory(category))
    }

    /// Categories with a template, in selection priority order.
    pub fn categories(&self) -> Vec<Category> {
        Category::all()
            .iter()
            .copied()
            .filter(|c| self.templates.contains_key(c))
            .collect()
    }
}
