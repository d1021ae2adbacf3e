use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SkillTagsError};

/// Default settings template with rich comments
pub const DEFAULT_SETTINGS_TEMPLATE: &str = r#"# skill-tags settings
# Location: ~/.cursor/skill-tags.toml (or .cursor/skill-tags.toml with --local)

[sync]
# Script that regenerates skill-tags.md and the per-category command files
# Default: ~/.cursor/sync-skill-commands.sh
# script = "/path/to/sync.sh"

# Interpreter used to run the script
shell = "bash"

# Extra keyword rules. A name that matches a built-in category replaces its
# keywords; any other name gives a custom category something to match.
# [categories.rust]
# keywords = ["rust", "cargo", "tokio"]
"#;

/// Settings loaded from `skill-tags.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub sync: SyncSettings,

    #[serde(default)]
    pub categories: BTreeMap<String, CategorySettings>,
}

/// Sync collaborator settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncSettings {
    /// Path to the sync script
    #[serde(default)]
    pub script: Option<PathBuf>,

    /// Interpreter for the script
    #[serde(default = "default_shell")]
    pub shell: String,
}

fn default_shell() -> String {
    "bash".to_string()
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            script: None,
            shell: default_shell(),
        }
    }
}

/// Keyword rule for one category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySettings {
    pub keywords: Vec<String>,
}

impl Settings {
    /// Load settings; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let settings: Settings =
            toml::from_str(&content).map_err(|e| SkillTagsError::SettingsParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        tracing::debug!(
            path = %path.display(),
            categories = settings.categories.len(),
            "loaded settings"
        );
        Ok(settings)
    }

    /// Write the commented template if no settings file exists yet
    pub fn init(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_SETTINGS_TEMPLATE)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_default() {
        let tmp = TempDir::new().unwrap();
        let settings = Settings::load(&tmp.path().join("nope.toml")).unwrap();
        assert!(settings.sync.script.is_none());
        assert_eq!(settings.sync.shell, "bash");
        assert!(settings.categories.is_empty());
    }

    #[test]
    fn test_parse_full() {
        let toml_str = r#"
            [sync]
            script = "/opt/skill-tags/sync.sh"
            shell = "zsh"

            [categories.rust]
            keywords = ["rust", "cargo"]
        "#;
        let settings: Settings = toml::from_str(toml_str).unwrap();
        assert_eq!(
            settings.sync.script,
            Some(PathBuf::from("/opt/skill-tags/sync.sh"))
        );
        assert_eq!(settings.sync.shell, "zsh");
        assert_eq!(settings.categories["rust"].keywords, vec!["rust", "cargo"]);
        assert!(!settings.categories.contains_key("none"));
    }

    #[test]
    fn test_template_parses() {
        let settings: Settings = toml::from_str(DEFAULT_SETTINGS_TEMPLATE).unwrap();
        assert_eq!(settings.sync.shell, "bash");
    }

    #[test]
    fn test_init_does_not_overwrite() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(".cursor").join("skill-tags.toml");
        assert!(Settings::init(&path).unwrap());
        fs::write(&path, "[sync]\nshell = \"sh\"\n").unwrap();
        assert!(!Settings::init(&path).unwrap());
        assert_eq!(Settings::load(&path).unwrap().sync.shell, "sh");
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("skill-tags.toml");
        fs::write(&path, "[sync\n").unwrap();
        assert!(matches!(
            Settings::load(&path),
            Err(SkillTagsError::SettingsParse { .. })
        ));
    }
}
