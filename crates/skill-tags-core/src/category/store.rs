//! Category Config Store
//!
//! The persisted category → skills mapping, one line per category:
//!
//! ```text
//! # skill-tags category config: edit with `skill-tags categories`
//! frontend=react-best-practices,tailwind-v4
//! my-custom=
//! ```
//!
//! Category order is kept across load → edit → save so the file diffs
//! cleanly under version control.

use std::fs;
use std::path::Path;

use crate::error::Result;

/// First line of every saved config file
pub const CONFIG_HEADER: &str = "# skill-tags category config: edit with `skill-tags categories`";

/// Ordered category → skill names mapping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryConfig {
    entries: Vec<(String, Vec<String>)>,
}

impl CategoryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from disk; a missing file is an empty config
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no category config yet");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    /// Parse config text. Comment lines and lines without `=` are skipped.
    pub fn parse(content: &str) -> Self {
        let mut config = Self::default();

        for line in content.lines() {
            if line.starts_with('#') {
                continue;
            }
            let Some((category, skills)) = line.split_once('=') else {
                if !line.trim().is_empty() {
                    tracing::debug!(line, "skipping malformed config line");
                }
                continue;
            };

            let category = category.trim();
            if category.is_empty() {
                continue;
            }
            let skills = skills
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
            config.insert(category, skills);
        }

        config
    }

    /// Render as file contents, header first
    pub fn render(&self) -> String {
        let mut out = String::from(CONFIG_HEADER);
        out.push('\n');
        for (category, skills) in &self.entries {
            out.push_str(category);
            out.push('=');
            out.push_str(&skills.join(","));
            out.push('\n');
        }
        out
    }

    /// Replace the file with this config.
    ///
    /// Written to a sibling temp file and renamed over the target, so a
    /// reader never sees a half-written config.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp = path.with_extension("conf.tmp");
        fs::write(&tmp, self.render())?;
        fs::rename(&tmp, path)?;

        tracing::info!(
            path = %path.display(),
            categories = self.entries.len(),
            "saved category config"
        );
        Ok(())
    }

    /// Set a category's members. An existing category keeps its position.
    pub fn insert(&mut self, category: &str, skills: Vec<String>) {
        match self.entries.iter_mut().find(|(c, _)| c == category) {
            Some((_, existing)) => *existing = skills,
            None => self.entries.push((category.to_string(), skills)),
        }
    }

    pub fn remove(&mut self, category: &str) -> Option<Vec<String>> {
        let idx = self.entries.iter().position(|(c, _)| c == category)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, s)| s.as_slice())
    }

    pub fn contains(&self, category: &str) -> bool {
        self.get(category).is_some()
    }

    /// Category names in file order
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(c, _)| c.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(c, s)| (c.as_str(), s.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_round_trip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(".cursor").join("skill-tags-categories.conf");

        let mut config = CategoryConfig::new();
        config.insert("frontend", strings(&["react-best-practices", "tailwind"]));
        config.insert("empty", Vec::new());
        config.insert("devops", strings(&["docker-expert"]));
        config.save(&path).unwrap();

        let loaded = CategoryConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.names(), vec!["frontend", "empty", "devops"]);
        assert_eq!(loaded.get("empty"), Some(&[][..]));
    }

    #[test]
    fn test_round_trip_empty_config() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("c.conf");
        CategoryConfig::new().save(&path).unwrap();
        assert!(CategoryConfig::load(&path).unwrap().is_empty());
    }

    #[test]
    fn test_header_and_format() {
        let mut config = CategoryConfig::new();
        config.insert("testing", strings(&["a", "b"]));
        config.insert("custom", Vec::new());
        assert_eq!(
            config.render(),
            format!("{}\ntesting=a,b\ncustom=\n", CONFIG_HEADER)
        );
    }

    #[test]
    fn test_tolerant_load() {
        let config = CategoryConfig::parse("# comment\nnot a valid line\nmobile=expo-app\n");
        assert_eq!(config.names(), vec!["mobile"]);
        assert_eq!(config.get("mobile"), Some(&strings(&["expo-app"])[..]));
    }

    #[test]
    fn test_missing_file_is_empty() {
        let tmp = TempDir::new().unwrap();
        let config = CategoryConfig::load(&tmp.path().join("missing.conf")).unwrap();
        assert!(config.is_empty());
    }

    #[test]
    fn test_parse_skips_empty_names_and_items() {
        let config = CategoryConfig::parse("=orphan\ndesign= figma-kit ,,\n");
        assert_eq!(config.names(), vec!["design"]);
        assert_eq!(config.get("design"), Some(&strings(&["figma-kit"])[..]));
    }

    #[test]
    fn test_insert_keeps_position() {
        let mut config = CategoryConfig::new();
        config.insert("a", Vec::new());
        config.insert("b", Vec::new());
        config.insert("a", strings(&["x"]));
        assert_eq!(config.names(), vec!["a", "b"]);
        assert_eq!(config.get("a"), Some(&strings(&["x"])[..]));
    }

    #[test]
    fn test_remove() {
        let mut config = CategoryConfig::parse("a=1\nb=2\n");
        assert_eq!(config.remove("a"), Some(strings(&["1"])));
        assert_eq!(config.remove("a"), None);
        assert_eq!(config.names(), vec!["b"]);
    }

    #[test]
    fn test_save_overwrites() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("c.conf");
        fs::write(&path, "old=stuff\n").unwrap();
        CategoryConfig::parse("new=x\n").save(&path).unwrap();
        let loaded = CategoryConfig::load(&path).unwrap();
        assert_eq!(loaded.names(), vec!["new"]);
        assert!(!path.with_extension("conf.tmp").exists());
    }
}
