pub mod category;
pub mod error;
pub mod index;
pub mod prompt;
pub mod scope;
pub mod session;
pub mod settings;
pub mod sync;
pub mod wizard;

pub use error::{Result, SkillTagsError};
pub use index::{load_index, parse_index, SkillRecord};
pub use prompt::{Prompt, Prompter};
pub use scope::{Scope, ScopePaths};
pub use session::Session;
pub use settings::Settings;
pub use sync::{ScriptSync, SyncOptions, SyncRunner};
pub use wizard::{Outcome, Wizard};

// Category system
pub use category::{
    normalize_category_name, title_case, CategoryClassifier, CategoryConfig, KeywordMatch,
    KeywordMatcher, KeywordTable, SkillMatch, BUILTIN_CATEGORIES,
};
