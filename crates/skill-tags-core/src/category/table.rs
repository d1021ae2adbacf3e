//! Keyword Table
//!
//! Category → keyword lookup for one session. Builtins merged with the
//! `[categories]` section of the settings file; immutable once built.

use crate::settings::Settings;

use super::builtin::{CategoryRule, BUILTIN_CATEGORIES};

/// Ordered category → keywords mapping
#[derive(Debug, Clone)]
pub struct KeywordTable {
    rules: Vec<CategoryRule>,
}

impl KeywordTable {
    /// Builtin categories only
    pub fn builtin() -> Self {
        Self {
            rules: BUILTIN_CATEGORIES.iter().map(CategoryRule::from).collect(),
        }
    }

    /// Override with settings
    ///
    /// - same name: keywords replaced in place
    /// - new name: appended
    pub fn with_settings(mut self, settings: &Settings) -> Self {
        for (name, entry) in &settings.categories {
            let rule = CategoryRule {
                name: name.clone(),
                keywords: entry.keywords.clone(),
            };
            match self.rules.iter_mut().find(|r| r.name == *name) {
                Some(existing) => *existing = rule,
                None => self.rules.push(rule),
            }
        }
        self.warn_identical();
        self
    }

    /// Keywords for a category; empty for unknown (custom) categories
    pub fn keywords(&self, category: &str) -> &[String] {
        self.get(category)
            .map(|r| r.keywords.as_slice())
            .unwrap_or_default()
    }

    pub fn get(&self, category: &str) -> Option<&CategoryRule> {
        self.rules.iter().find(|r| r.name == category)
    }

    pub fn all(&self) -> &[CategoryRule] {
        &self.rules
    }

    pub fn names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name.as_str()).collect()
    }

    /// Keyword overlap between categories is allowed (a skill may sit in
    /// several categories), but two categories with the same list are
    /// almost certainly a settings mistake.
    fn warn_identical(&self) {
        for (i, a) in self.rules.iter().enumerate() {
            for b in &self.rules[i + 1..] {
                if !a.keywords.is_empty() && a.keywords == b.keywords {
                    tracing::warn!(
                        first = %a.name,
                        second = %b.name,
                        "categories have identical keyword lists"
                    );
                }
            }
        }
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::CategorySettings;

    fn settings_with(name: &str, keywords: &[&str]) -> Settings {
        let mut settings = Settings::default();
        settings.categories.insert(
            name.to_string(),
            CategorySettings {
                keywords: keywords.iter().map(|s| s.to_string()).collect(),
            },
        );
        settings
    }

    #[test]
    fn test_builtin_table() {
        let table = KeywordTable::builtin();
        assert!(table.keywords("frontend").contains(&"react".to_string()));
        assert!(table.keywords("nonexistent").is_empty());
        assert_eq!(table.names()[0], "frontend");
    }

    #[test]
    fn test_override_keeps_position() {
        let table = KeywordTable::builtin().with_settings(&settings_with("backend", &["axum"]));
        assert_eq!(table.keywords("backend"), &["axum".to_string()]);
        assert_eq!(table.names()[1], "backend");
        assert_eq!(table.all().len(), 12);
    }

    #[test]
    fn test_custom_category_appended() {
        let table = KeywordTable::builtin().with_settings(&settings_with("rust", &["cargo"]));
        assert_eq!(table.names().last(), Some(&"rust"));
        assert_eq!(table.keywords("rust"), &["cargo".to_string()]);
    }
}
