//! Keyword-based template selection.

use super::Category;

/// Maps free-text symptom descriptions to a category.
///
/// Categories are tested in [`Category::PRIORITY`] order and the first one
/// with a keyword contained in the lowercased text wins. Text matching no
/// keyword resolves to the default category, so selection never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateSelector {
    default_category: Category,
}

impl TemplateSelector {
    pub fn new(default_category: Category) -> Self {
        Self { default_category }
    }

    /// Selects the category for `symptom_text`.
    pub fn select(&self, symptom_text: &str) -> Category {
        let text = symptom_text.to_lowercase();
        Category::all()
            .iter()
            .copied()
            .find(|category| category.keywords().iter().any(|k| text.contains(k)))
            .unwrap_or(self.default_category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector() -> TemplateSelector {
        TemplateSelector::new(Category::Stomach)
    }

    #[test]
    fn matches_keywords_case_insensitively() {
        assert_eq!(selector().select("My TUMMY hurts"), Category::Stomach);
        assert_eq!(selector().select("Migraine since noon"), Category::Headache);
        assert_eq!(selector().select("high Temperature"), Category::Fever);
        assert_eq!(selector().select("sore throat"), Category::Cough);
    }

    #[test]
    fn category_names_select_themselves() {
        for category in Category::all() {
            assert_eq!(selector().select(category.as_str()), *category);
        }
    }

    #[test]
    fn earlier_category_wins_on_multiple_matches() {
        assert_eq!(selector().select("headache and stomach cramps"), Category::Stomach);
        assert_eq!(selector().select("fever with a cough"), Category::Fever);
    }

    #[test]
    fn falls_back_to_default_category() {
        assert_eq!(selector().select("sprained ankle"), Category::Stomach);
        assert_eq!(
            TemplateSelector::new(Category::Cough).select(""),
            Category::Cough
        );
    }

    #[test]
    fn keywords_match_as_substrings() {
        // "head" is contained in "forehead".
        assert_eq!(selector().select("pain in my forehead"), Category::Headache);
    }
}
