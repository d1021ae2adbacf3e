//! Builtin Category Definitions
//!
//! The predefined categories offered by the wizard. Keywords are tool names,
//! framework names, domain acronyms and specific compound terms; generic
//! English words (server, component, cache, query, test) are left out
//! because they match almost every skill.

/// Builtin category definitions, in menu order
pub const BUILTIN_CATEGORIES: &[BuiltinCategory] = &[
    BuiltinCategory {
        name: "frontend",
        keywords: &[
            "frontend",
            "react",
            "next",
            "nextjs",
            "vue",
            "nuxt",
            "svelte",
            "sveltekit",
            "angular",
            "tailwind",
            "css",
            "sass",
            "html",
            "jsx",
            "tsx",
            "shadcn",
            "radix",
            "vite",
            "webpack",
            "turbopack",
            "framer-motion",
            "container-query",
            "server-component",
            "rsc",
            "app-router",
        ],
    },
    BuiltinCategory {
        name: "backend",
        keywords: &[
            "graphql",
            "trpc",
            "expressjs",
            "fastify",
            "nestjs",
            "hono",
            "fastapi",
            "django",
            "laravel",
            "webhook",
            "websocket",
            "jwt",
            "oauth",
            "better-auth",
            "stripe",
            "payment",
            "serverless",
            "edge-function",
            "lambda",
        ],
    },
    BuiltinCategory {
        name: "database",
        keywords: &[
            "postgres",
            "postgresql",
            "mysql",
            "sqlite",
            "mongodb",
            "redis",
            "drizzle",
            "prisma",
            "knex",
            "supabase",
            "planetscale",
            "neon",
            "turso",
            "sql",
            "orm",
            "row-level-security",
            "rls",
        ],
    },
    BuiltinCategory {
        name: "testing",
        keywords: &[
            "vitest",
            "jest",
            "mocha",
            "playwright",
            "cypress",
            "puppeteer",
            "selenium",
            "test-driven",
            "tdd",
            "bdd",
            "e2e",
            "end-to-end",
            "webapp-testing",
            "browser-testing",
        ],
    },
    BuiltinCategory {
        name: "design",
        keywords: &[
            "figma",
            "sketch",
            "adobe-xd",
            "typography",
            "font-pairing",
            "glassmorphism",
            "neumorphism",
            "brutalism",
            "skeuomorphism",
            "flat-design",
            "dark-mode",
            "design-token",
            "design-system",
            "style-guide",
            "brand-guideline",
            "interface-design",
            "ux-audit",
            "ux-review",
            "web-design-guideline",
            "design-pattern",
        ],
    },
    BuiltinCategory {
        name: "accessibility",
        keywords: &[
            "accessibility",
            "a11y",
            "aria",
            "wcag",
            "screen-reader",
            "voiceover",
            "nvda",
            "jaws",
            "reduced-motion",
            "prefers-reduced-motion",
            "semantic-html",
            "keyboard-navigation",
            "focus-trap",
        ],
    },
    BuiltinCategory {
        name: "performance",
        keywords: &[
            "lighthouse",
            "web-vitals",
            "core-web-vitals",
            "lcp",
            "cls",
            "inp",
            "fcp",
            "ttfb",
            "lazy-load",
            "code-split",
            "tree-shake",
            "stale-while-revalidate",
            "isr",
            "webp",
            "avif",
            "bundle-size",
            "virtual-list",
            "react-doctor",
        ],
    },
    BuiltinCategory {
        name: "ai-agents",
        keywords: &[
            "subagent",
            "multi-agent",
            "parallel-agent",
            "skill-creator",
            "skill-install",
            "brainstorm",
            "mcp",
            "cursor",
            "claude-code",
            "claude-md",
            "cursor-rule",
            "browser-automation",
            "browser-use",
            "worktree",
            "code-review",
            "debugging",
            "verification",
            "llm",
            "openai",
            "anthropic",
            "gemini",
        ],
    },
    BuiltinCategory {
        name: "devops",
        keywords: &[
            "netlify",
            "railway",
            "fly-io",
            "heroku",
            "docker",
            "dockerfile",
            "docker-compose",
            "kubernetes",
            "k8s",
            "cicd",
            "github-actions",
            "gitlab-ci",
            "circleci",
            "terraform",
            "pulumi",
            "nginx",
            "caddy",
            "deploy",
            "deployment",
            "rollback",
        ],
    },
    BuiltinCategory {
        name: "marketing",
        keywords: &[
            "seo",
            "seo-audit",
            "meta-tag",
            "open-graph",
            "twitter-card",
            "json-ld",
            "schema-markup",
            "sitemap",
            "robots-txt",
            "structured-data",
            "google-analytics",
            "plausible",
            "posthog",
            "programmatic-seo",
            "copywriting",
            "a-b-test",
        ],
    },
    BuiltinCategory {
        name: "mobile",
        keywords: &[
            "react-native",
            "expo",
            "expo-router",
            "flutter",
            "dart",
            "swiftui",
            "kotlin",
            "jetpack-compose",
            "ios",
            "android",
            "eas-build",
            "eas-submit",
            "reanimated",
        ],
    },
    BuiltinCategory {
        name: "documentation",
        keywords: &[
            "markdown",
            "mdx",
            "readme",
            "changelog",
            "openapi",
            "swagger",
            "typedoc",
            "jsdoc",
            "docusaurus",
            "nextra",
            "mintlify",
            "gitbook",
            "vitepress",
            "github-flavored-markdown",
            "gfm",
        ],
    },
];

/// Static definition of a builtin category
#[derive(Debug, Clone)]
pub struct BuiltinCategory {
    /// Category identifier (kebab-case)
    pub name: &'static str,
    /// Keywords in match priority order
    pub keywords: &'static [&'static str],
}

/// Runtime category rule
///
/// Built from a [`BuiltinCategory`] or from `[categories.<name>]` in
/// `skill-tags.toml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRule {
    pub name: String,
    pub keywords: Vec<String>,
}

impl From<&BuiltinCategory> for CategoryRule {
    fn from(builtin: &BuiltinCategory) -> Self {
        Self {
            name: builtin.name.to_string(),
            keywords: builtin.keywords.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Names of the builtin categories, in menu order
pub fn predefined_names() -> impl Iterator<Item = &'static str> {
    BUILTIN_CATEGORIES.iter().map(|c| c.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_categories_exist() {
        assert_eq!(BUILTIN_CATEGORIES.len(), 12);
        assert!(BUILTIN_CATEGORIES.iter().any(|c| c.name == "frontend"));
        assert!(BUILTIN_CATEGORIES.iter().any(|c| c.name == "ai-agents"));
        assert!(BUILTIN_CATEGORIES.iter().all(|c| !c.keywords.is_empty()));
    }

    #[test]
    fn test_names_unique_and_kebab_case() {
        let names: HashSet<_> = predefined_names().collect();
        assert_eq!(names.len(), BUILTIN_CATEGORIES.len());
        for name in names {
            assert!(name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        }
    }

    #[test]
    fn test_rule_from_builtin() {
        let builtin = &BUILTIN_CATEGORIES[0];
        let rule = CategoryRule::from(builtin);
        assert_eq!(rule.name, builtin.name);
        assert_eq!(rule.keywords.len(), builtin.keywords.len());
    }
}
