//! Sync Collaborator
//!
//! The sync script regenerates `skill-tags.md` and the per-category command
//! files. skill-tags only knows how to start it and read its exit code.
//!
//! ```rust,ignore
//! use skill_tags_core::sync::{ScriptSync, SyncOptions, SyncRunner};
//!
//! let mut sync = ScriptSync::new("bash", "/home/me/.cursor/sync-skill-commands.sh");
//! let code = sync.run(&SyncOptions { local: false, quiet: true })?;
//! ```

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Result, SkillTagsError};
use crate::scope::{Scope, ScopePaths};
use crate::settings::Settings;

// ============================================================================
// Options
// ============================================================================

/// Flags passed to the sync script
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncOptions {
    /// Project scope (`--local`)
    pub local: bool,
    /// Suppress the script's own progress output (`--quiet`)
    pub quiet: bool,
}

impl SyncOptions {
    pub fn for_scope(scope: Scope) -> Self {
        Self {
            local: scope == Scope::Project,
            quiet: false,
        }
    }

    pub fn quiet(mut self) -> Self {
        self.quiet = true;
        self
    }

    pub fn to_args(self) -> Vec<&'static str> {
        let mut args = Vec::new();
        if self.local {
            args.push("--local");
        }
        if self.quiet {
            args.push("--quiet");
        }
        args
    }
}

// ============================================================================
// Runner
// ============================================================================

/// Something that can run a sync and report its exit code.
///
/// `Err` means the sync could not be started at all. A sync that ran and
/// failed is `Ok` with a non-zero code.
pub trait SyncRunner {
    fn run(&mut self, options: &SyncOptions) -> Result<i32>;
}

/// Runs the sync script as a blocking child process sharing this
/// process's stdin/stdout/stderr.
#[derive(Debug, Clone)]
pub struct ScriptSync {
    shell: String,
    script: PathBuf,
}

impl ScriptSync {
    pub fn new(shell: impl Into<String>, script: impl Into<PathBuf>) -> Self {
        Self {
            shell: shell.into(),
            script: script.into(),
        }
    }

    /// Script chosen by override, then settings, then the default location
    pub fn from_settings(paths: &ScopePaths, settings: &Settings) -> Self {
        let script = paths
            .sync_script
            .clone()
            .or_else(|| settings.sync.script.clone())
            .unwrap_or_else(|| paths.default_sync_script());
        Self::new(settings.sync.shell.clone(), script)
    }

    pub fn script(&self) -> &Path {
        &self.script
    }
}

impl SyncRunner for ScriptSync {
    fn run(&mut self, options: &SyncOptions) -> Result<i32> {
        if !self.script.exists() {
            return Err(SkillTagsError::SyncScriptNotFound {
                path: self.script.clone(),
            });
        }

        let args = options.to_args();
        tracing::info!(
            shell = %self.shell,
            script = %self.script.display(),
            ?args,
            "running sync"
        );

        let status = Command::new(&self.shell)
            .arg(&self.script)
            .args(&args)
            .status()
            .map_err(|e| SkillTagsError::SyncLaunch {
                script: self.script.clone(),
                message: e.to_string(),
            })?;

        // killed by a signal: no code, report failure
        let code = status.code().unwrap_or(1);
        tracing::debug!(code, "sync finished");
        Ok(code)
    }
}

// ============================================================================
// Tests
// ============================================================================
