//! # Category Module
//!
//! Sorts skills from the index into categories by keyword.
//!
//! ## Module layout
//!
//! - `builtin`: predefined categories and their keyword lists
//! - `table`: builtins merged with settings overrides
//! - `matcher`: keyword → skill text matching
//! - `classifier`: per-category member lists
//! - `store`: the persisted category config file
//! - `name`: identifier normalization and display names
//!
//! ## Example
//!
//! ```rust
//! use skill_tags_core::category::{CategoryClassifier, CategoryConfig};
//! use skill_tags_core::index::parse_index;
//!
//! let skills = parse_index("### Tailwind\n`skills/tailwind-v4`\nTailwind CSS utilities.\n");
//! let classifier = CategoryClassifier::builtin().unwrap();
//!
//! let mut config = CategoryConfig::new();
//! config.insert("frontend", classifier.classify("frontend", &skills));
//! assert_eq!(config.get("frontend"), Some(&["tailwind-v4".to_string()][..]));
//! ```

mod builtin;
mod classifier;
mod matcher;
mod name;
mod store;
mod table;

// Re-exports
pub use builtin::{predefined_names, BuiltinCategory, CategoryRule, BUILTIN_CATEGORIES};
pub use classifier::{CategoryClassifier, SkillMatch};
pub use matcher::{keyword_pattern, KeywordMatch, KeywordMatcher, KEYWORD_SUFFIXES};
pub use name::{normalize_category_name, title_case};
pub use store::{CategoryConfig, CONFIG_HEADER};
pub use table::KeywordTable;
