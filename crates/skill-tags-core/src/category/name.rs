use once_cell::sync::Lazy;
use regex::Regex;

static NON_IDENT: Lazy<Regex> =
    Lazy::new(|| Regex::new("[^a-z0-9]+").expect("identifier pattern is valid"));

/// Turn free-form input into a category identifier.
///
/// Lowercases, replaces every run of characters outside `[a-z0-9]` with a
/// single hyphen and strips hyphens at both ends. Returns an empty string
/// when nothing usable is left.
pub fn normalize_category_name(input: &str) -> String {
    let lower = input.trim().to_lowercase();
    NON_IDENT
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_string()
}

/// `ai-agents` → `Ai Agents`
pub fn title_case(category: &str) -> String {
    category
        .split(['-', '_'])
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_custom_name() {
        assert_eq!(normalize_category_name("My Custom!!Cat"), "my-custom-cat");
    }

    #[test]
    fn test_normalize_collapses_and_strips() {
        assert_eq!(normalize_category_name("--Rust__Tools--"), "rust-tools");
        assert_eq!(normalize_category_name("  web3 dApps "), "web3-dapps");
        assert_eq!(normalize_category_name("a---b"), "a-b");
    }

    #[test]
    fn test_normalize_nothing_left() {
        assert_eq!(normalize_category_name("!!!"), "");
        assert_eq!(normalize_category_name(""), "");
    }

    #[test]
    fn test_normalize_drops_non_ascii() {
        assert_eq!(normalize_category_name("Café Tools"), "caf-tools");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("ai-agents"), "Ai Agents");
        assert_eq!(title_case("frontend"), "Frontend");
        assert_eq!(title_case("my_custom-cat"), "My Custom Cat");
    }
}
