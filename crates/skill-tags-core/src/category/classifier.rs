//! Category Classifier
//!
//! Computes the member list of a category from the skill index. The
//! category config is only ever a cache of this function's output.

use crate::error::Result;
use crate::index::SkillRecord;

use super::matcher::{KeywordMatch, KeywordMatcher};
use super::table::KeywordTable;

/// One skill placed in a category, with the keyword that placed it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillMatch {
    pub skill: String,
    pub keyword: String,
}

/// Category classifier
pub struct CategoryClassifier {
    table: KeywordTable,
    matcher: KeywordMatcher,
}

impl CategoryClassifier {
    pub fn new(table: KeywordTable) -> Result<Self> {
        let matcher = KeywordMatcher::new(&table)?;
        Ok(Self { table, matcher })
    }

    /// Classifier over builtin categories only
    pub fn builtin() -> Result<Self> {
        Self::new(KeywordTable::builtin())
    }

    pub fn table(&self) -> &KeywordTable {
        &self.table
    }

    /// Single skill against a single category
    pub fn match_skill(&self, skill: &SkillRecord, category: &str) -> Option<KeywordMatch> {
        self.matcher.match_skill(skill, category)
    }

    /// Names of every skill in `category`, in the order of `skills`.
    ///
    /// The result replaces whatever the category held before.
    pub fn classify(&self, category: &str, skills: &[SkillRecord]) -> Vec<String> {
        self.classify_detailed(category, skills)
            .into_iter()
            .map(|m| m.skill)
            .collect()
    }

    /// Like [`classify`](Self::classify), keeping the matched keyword
    pub fn classify_detailed(&self, category: &str, skills: &[SkillRecord]) -> Vec<SkillMatch> {
        if !self.matcher.has_keywords(category) {
            tracing::debug!(category, "category has no keywords");
            return Vec::new();
        }

        let matches: Vec<SkillMatch> = skills
            .iter()
            .filter_map(|skill| {
                self.matcher.match_skill(skill, category).map(|m| {
                    tracing::debug!(category, skill = %skill.name, keyword = %m.keyword, "matched");
                    SkillMatch {
                        skill: skill.name.clone(),
                        keyword: m.keyword,
                    }
                })
            })
            .collect();

        tracing::debug!(category, members = matches.len(), "classified");
        matches
    }
}
