//! Skill index parser.
//!
//! `skill-tags.md` is generated by the sync script and lists every
//! installed skill as a `### ` section:
//!
//! ```text
//! ### React Best Practices
//! `~/.cursor/skills/react-best-practices`
//! Patterns for React components and hooks.
//! <!-- keywords: react, hooks -->
//! ```
//!
//! The first line of a section is its title, the first inline-code line is
//! the skill path and the first plain line is the description. Sections
//! without a path are not skills and are dropped.

use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, SkillTagsError};

/// Section heading marker
pub const SECTION_MARKER: &str = "### ";

static SECTION_SPLIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("(?m)^{}", regex::escape(SECTION_MARKER)))
        .expect("section marker pattern is valid")
});

/// One skill entry from the index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillRecord {
    /// Last path segment of `path`
    pub name: String,
    pub path: String,
    pub title: String,
    pub description: String,
    /// Whole section text, lowercased, hyphens turned into spaces.
    /// Only used for keyword matching.
    pub search_text: String,
}

/// Read and parse the index file.
///
/// A missing file is a precondition failure: the caller is expected to run
/// the sync script first (see [`crate::Session::start`]).
pub fn load_index(path: &Path) -> Result<Vec<SkillRecord>> {
    if !path.exists() {
        return Err(SkillTagsError::IndexNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path)?;
    Ok(parse_index(&content))
}

/// Parse index text into skill records sorted by name
pub fn parse_index(content: &str) -> Vec<SkillRecord> {
    let mut segments = SECTION_SPLIT.split(content);

    // text before the first heading is preamble, not a section
    if !content.starts_with(SECTION_MARKER) {
        segments.next();
    }

    let mut skills: Vec<SkillRecord> = segments.filter_map(parse_section).collect();
    skills.sort_by(|a, b| locale_cmp(&a.name, &b.name));

    let before = skills.len();
    skills.dedup_by(|later, earlier| later.name == earlier.name);
    if skills.len() != before {
        tracing::debug!(dropped = before - skills.len(), "duplicate skill names in index");
    }

    skills
}

fn parse_section(section: &str) -> Option<SkillRecord> {
    if section.trim().is_empty() {
        return None;
    }

    let mut lines = section.lines();
    let title = lines.next().unwrap_or_default().trim();
    if title.is_empty() {
        return None;
    }

    let mut path: Option<&str> = None;
    let mut description: Option<&str> = None;

    for line in lines.map(str::trim) {
        if path.is_none() && is_code_span(line) {
            // An empty span is consumed but leaves the path unset
            let inner = &line[1..line.len() - 1];
            if !inner.is_empty() {
                path = Some(inner);
            }
        } else if description.is_none()
            && !line.is_empty()
            && !line.starts_with('#')
            && !line.starts_with("<!--")
        {
            description = Some(line);
        }
    }

    let Some(path) = path else {
        tracing::debug!(title, "index section has no skill path, skipping");
        return None;
    };
    let name = skill_name(path)?;

    Some(SkillRecord {
        name,
        path: path.to_string(),
        title: title.to_string(),
        description: description.unwrap_or_default().to_string(),
        search_text: normalize_text(section),
    })
}

fn is_code_span(line: &str) -> bool {
    line.len() >= 2 && line.starts_with('`') && line.ends_with('`')
}

fn skill_name(path: &str) -> Option<String> {
    Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .filter(|n| !n.is_empty())
}

/// Lowercase and turn hyphens into spaces.
///
/// Applied to both skill text and keywords so that `framer-motion`,
/// `framer motion` and `Framer-Motion` all compare equal.
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase().replace('-', " ")
}

/// Case-insensitive ordering with a case-sensitive tie-break, the way a
/// human-facing sorted listing expects names to appear.
///
/// Approximates locale collation only: punctuation and accented letters
/// compare by code point, so `a_b` sorts after `a1` and `é` after `z`.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const INDEX: &str = "\
# Skill Tags
Generated index. Do not edit.

### Terraform Deploy
`~/.cursor/skills/skill-b`
Ship infrastructure with Terraform deploy pipelines.

### React Components
<!-- generated -->
`~/.cursor/skills/skill-a`
Build React components with hooks.

### Broken Entry
No path here.

###\x20
`~/.cursor/skills/untitled`
";

    #[test]
    fn test_parse_basic_sections() {
        let skills = parse_index(INDEX);
        let names: Vec<_> = skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["skill-a", "skill-b"]);

        let a = &skills[0];
        assert_eq!(a.title, "React Components");
        assert_eq!(a.path, "~/.cursor/skills/skill-a");
        assert_eq!(a.description, "Build React components with hooks.");
        assert!(a.search_text.contains("react components"));
        assert!(a.search_text.contains("skill a"));
    }

    #[test]
    fn test_preamble_is_discarded() {
        let content = "Intro line\n`~/.cursor/skills/not-a-skill`\n### Real\n`skills/real`\n";
        let skills = parse_index(content);
        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].name, "real");
    }

    #[test]
    fn test_first_path_wins_and_second_code_line_is_description() {
        let content = "### Dup\n`a/first`\n`b/second`\n";
        let skills = parse_index(content);
        assert_eq!(skills[0].path, "a/first");
        assert_eq!(skills[0].description, "`b/second`");
    }

    #[test]
    fn test_description_skips_headings_and_comments() {
        let content = "### T\n#### sub\n<!-- hidden -->\n\n`p/x`\nVisible\n";
        let skills = parse_index(content);
        assert_eq!(skills[0].description, "Visible");
    }

    #[test]
    fn test_trailing_slash_path() {
        let skills = parse_index("### T\n`skills/slashy/`\n");
        assert_eq!(skills[0].name, "slashy");
    }

    #[test]
    fn test_lone_backtick_is_not_a_path() {
        assert!(parse_index("### T\n`\n").is_empty());
    }

    #[test]
    fn test_empty_code_span_does_not_claim_path() {
        let skills = parse_index("### T\n``\n`skills/real`\nReact hooks.\n");
        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].name, "real");
        assert_eq!(skills[0].path, "skills/real");
        assert_eq!(skills[0].description, "React hooks.");
    }

    #[test]
    fn test_search_text_normalized() {
        let skills = parse_index("### Framer-Motion Tips\n`s/fm`\nUse FRAMER-MOTION.\n");
        let text = &skills[0].search_text;
        assert!(text.contains("framer motion tips"));
        assert!(text.contains("use framer motion."));
        assert!(!text.contains('-'));
    }

    #[test]
    fn test_parse_is_idempotent() {
        assert_eq!(parse_index(INDEX), parse_index(INDEX));
    }

    #[test]
    fn test_sorted_by_name() {
        let content = "### a\n`x/zeta`\n### b\n`x/Alpha`\n### c\n`x/beta`\n### d\n`x/alpha`\n";
        let skills = parse_index(content);
        for pair in skills.windows(2) {
            assert_ne!(locale_cmp(&pair[0].name, &pair[1].name), Ordering::Greater);
        }
        assert_eq!(skills.last().unwrap().name, "zeta");
    }

    #[test]
    fn test_duplicate_names_keep_first() {
        let content = "### One\n`a/same`\n### Two\n`b/same`\n";
        let skills = parse_index(content);
        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].title, "One");
    }

    #[test]
    fn test_load_missing_index() {
        let tmp = TempDir::new().unwrap();
        let err = load_index(&tmp.path().join("skill-tags.md")).unwrap_err();
        assert!(matches!(err, SkillTagsError::IndexNotFound { .. }));
    }

    #[test]
    fn test_load_index_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("skill-tags.md");
        fs::write(&path, INDEX).unwrap();
        assert_eq!(load_index(&path).unwrap().len(), 2);
    }
}
