//! Install scope and the file paths derived from it.
//!
//! skill-tags works either on the user's global Cursor directory
//! (`~/.cursor/`) or on the current project's `.cursor/` directory. Every
//! path the other modules touch is resolved here once, at session start.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Name of the Cursor configuration directory under the scope root.
pub const CURSOR_DIR: &str = ".cursor";

/// Persisted category → skills mapping.
pub const CATEGORIES_CONFIG_FILE: &str = "skill-tags-categories.conf";

/// Optional TOML settings file.
pub const SETTINGS_FILE: &str = "skill-tags.toml";

/// Fallback location of the sync script for global installs.
pub const DEFAULT_SYNC_SCRIPT: &str = "sync-skill-commands.sh";

/// Where skill-tags reads and writes its files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scope {
    /// `~/.cursor/`
    #[default]
    Global,
    /// `./.cursor/` of the current project
    Project,
}

impl Scope {
    pub fn from_local_flag(local: bool) -> Self {
        if local {
            Self::Project
        } else {
            Self::Global
        }
    }

    /// Short identifier for display
    pub fn id(&self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Project => "project",
        }
    }

    /// File name of the skill index for this scope
    pub fn index_file_name(&self) -> &'static str {
        match self {
            Self::Global => "skill-tags.md",
            Self::Project => "project-skill-tags.md",
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// All file locations for one session, resolved from a [`Scope`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopePaths {
    pub scope: Scope,
    pub config_file: PathBuf,
    pub settings_file: PathBuf,
    pub commands_dir: PathBuf,
    pub index_file: PathBuf,
    /// Explicit sync script override (flag or environment); `None` defers
    /// to settings and then to [`ScopePaths::default_sync_script`].
    pub sync_script: Option<PathBuf>,
    home: PathBuf,
}

impl ScopePaths {
    /// Resolve paths for `scope`.
    ///
    /// `home` and `cwd` are passed in rather than looked up so that nothing
    /// below the binary reads process-wide state.
    pub fn resolve(scope: Scope, home: &Path, cwd: &Path, sync_script: Option<PathBuf>) -> Self {
        let root = match scope {
            Scope::Global => home,
            Scope::Project => cwd,
        };
        let cursor_dir = root.join(CURSOR_DIR);
        let commands_dir = cursor_dir.join("commands");

        Self {
            scope,
            config_file: cursor_dir.join(CATEGORIES_CONFIG_FILE),
            settings_file: cursor_dir.join(SETTINGS_FILE),
            index_file: commands_dir.join(scope.index_file_name()),
            commands_dir,
            sync_script,
            home: home.to_path_buf(),
        }
    }

    /// Generated command file for a category
    pub fn artifact_path(&self, category: &str) -> PathBuf {
        self.commands_dir.join(artifact_file_name(category))
    }

    /// Sync script used when neither an override nor a setting names one
    pub fn default_sync_script(&self) -> PathBuf {
        self.home.join(CURSOR_DIR).join(DEFAULT_SYNC_SCRIPT)
    }

    /// Config file path as shown to the operator (`~` for the home dir)
    pub fn display_config_path(&self) -> String {
        match self.scope {
            Scope::Global => format!("~/{}/{}", CURSOR_DIR, CATEGORIES_CONFIG_FILE),
            Scope::Project => format!("{}/{}", CURSOR_DIR, CATEGORIES_CONFIG_FILE),
        }
    }
}

/// `skills-<category>.md`
pub fn artifact_file_name(category: &str) -> String {
    format!("skills-{}.md", category)
}
