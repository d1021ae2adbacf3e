//! Keyword Matcher
//!
//! Decides whether a skill belongs to a category by looking for any of the
//! category's keywords in the skill's normalized text. A keyword matches as
//! a whole word, optionally followed by one of a few English suffixes so
//! that `brainstorm` also finds `brainstorming` and `brainstormed`.

use std::collections::HashMap;

use regex::Regex;

use crate::error::Result;
use crate::index::{normalize_text, SkillRecord};

use super::table::KeywordTable;

/// Suffixes accepted directly after a keyword: plural, past tense, gerund,
/// agent noun, nominalization.
pub const KEYWORD_SUFFIXES: &[&str] = &["s", "es", "ed", "ing", "er", "ment"];

/// Which keyword put a skill into a category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordMatch {
    /// Keyword as declared (not normalized)
    pub keyword: String,
}

struct CompiledKeyword {
    keyword: String,
    pattern: Regex,
}

/// Compiled keyword patterns for every category in a [`KeywordTable`]
pub struct KeywordMatcher {
    compiled: HashMap<String, Vec<CompiledKeyword>>,
}

impl KeywordMatcher {
    pub fn new(table: &KeywordTable) -> Result<Self> {
        let mut compiled = HashMap::new();

        for rule in table.all() {
            let patterns = rule
                .keywords
                .iter()
                .map(|kw| {
                    Ok(CompiledKeyword {
                        keyword: kw.clone(),
                        pattern: keyword_pattern(kw)?,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            compiled.insert(rule.name.clone(), patterns);
        }

        Ok(Self { compiled })
    }

    /// First keyword of `category`, in declaration order, found in the
    /// skill's text. Categories without keywords never match.
    pub fn match_skill(&self, skill: &SkillRecord, category: &str) -> Option<KeywordMatch> {
        let keywords = self.compiled.get(category)?;

        keywords
            .iter()
            .find(|k| k.pattern.is_match(&skill.search_text))
            .map(|k| KeywordMatch {
                keyword: k.keyword.clone(),
            })
    }

    /// Whether the category has any keywords at all
    pub fn has_keywords(&self, category: &str) -> bool {
        self.compiled.get(category).is_some_and(|k| !k.is_empty())
    }
}

/// Word-bounded pattern for a keyword with the suffix allowance.
///
/// Boundaries are ASCII-only: a non-ASCII letter next to a keyword counts
/// as a separator.
pub fn keyword_pattern(keyword: &str) -> Result<Regex> {
    let escaped = regex::escape(&normalize_text(keyword));
    let suffixes = KEYWORD_SUFFIXES.join("|");
    Ok(Regex::new(&format!(
        r"(?-u:\b){}(?:{})?(?-u:\b)",
        escaped, suffixes
    ))?)
}
