use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SkillTagsError {
    #[error("Skill index not found: {path} (the initial sync did not create it)")]
    IndexNotFound { path: PathBuf },

    #[error("Sync script not found: {path}")]
    SyncScriptNotFound { path: PathBuf },

    #[error("Failed to run sync script {script}: {message}")]
    SyncLaunch { script: PathBuf, message: String },

    #[error("Failed to parse settings {path}: {message}")]
    SettingsParse { path: PathBuf, message: String },

    #[error("Prompt failed: {0}")]
    Prompt(String),

    #[error("Home directory not found")]
    HomeNotFound,

    #[error("Invalid keyword pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SkillTagsError>;

impl SkillTagsError {
    /// Process exit code for a fatal error.
    ///
    /// A collaborator that ran and failed never reaches here; its own exit
    /// code is forwarded by the caller instead.
    pub fn exit_code(&self) -> i32 {
        1
    }
}
