//! Session bootstrap: everything the wizard needs, loaded once.

use std::io::Write;

use crate::category::{CategoryClassifier, CategoryConfig, KeywordTable};
use crate::error::Result;
use crate::index::{load_index, SkillRecord};
use crate::scope::ScopePaths;
use crate::settings::Settings;
use crate::sync::{SyncOptions, SyncRunner};

/// State for one interactive session
pub struct Session {
    pub paths: ScopePaths,
    /// Parsed index, sorted by name; never modified during the session
    pub skills: Vec<SkillRecord>,
    pub classifier: CategoryClassifier,
    /// In-memory category config; only written back on save
    pub config: CategoryConfig,
}

impl Session {
    /// Load the skill index (running an initial sync if it does not exist
    /// yet), the keyword table and the category config.
    pub fn start<S, W>(
        paths: ScopePaths,
        settings: &Settings,
        sync: &mut S,
        out: &mut W,
    ) -> Result<Self>
    where
        S: SyncRunner + ?Sized,
        W: Write + ?Sized,
    {
        let index_name = paths.scope.index_file_name();

        if !paths.index_file.exists() {
            writeln!(out, "  {} not found, running initial sync...\n", index_name)?;
            let code = sync.run(&SyncOptions::for_scope(paths.scope))?;
            if code != 0 {
                tracing::warn!(code, "initial sync exited with non-zero status");
            }
        }

        writeln!(out, "  Loading skills from {}...", index_name)?;
        let skills = load_index(&paths.index_file)?;
        writeln!(out, "  Found {} skill(s)\n", skills.len())?;

        let table = KeywordTable::builtin().with_settings(settings);
        let classifier = CategoryClassifier::new(table)?;
        let config = CategoryConfig::load(&paths.config_file)?;

        tracing::info!(
            scope = %paths.scope,
            skills = skills.len(),
            categories = config.len(),
            "session started"
        );

        Ok(Self {
            paths,
            skills,
            classifier,
            config,
        })
    }

    /// Recompute a category's members from the index
    pub fn classify(&self, category: &str) -> Vec<String> {
        self.classifier.classify(category, &self.skills)
    }
}
