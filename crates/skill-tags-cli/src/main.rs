use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;
use serde::Serialize;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use skill_tags_core::category::{title_case, CategoryClassifier, CategoryConfig, KeywordTable};
use skill_tags_core::{
    load_index, normalize_category_name, Result, Scope, ScopePaths, ScriptSync, Session,
    Settings, SkillTagsError, SyncOptions, SyncRunner, Wizard,
};

mod args;
use args::{Cli, Commands, Shell};

mod prompt;
use prompt::TerminalPrompter;

const SYNC_SCRIPT_ENV: &str = "SKILL_TAGS_SYNC_SCRIPT";

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let result = resolve_paths(cli.local, cli.sync_script).and_then(|paths| {
        match cli.command.unwrap_or(Commands::Categories) {
            Commands::Categories => handle_categories(paths),
            Commands::Sync => handle_sync(&paths),
            Commands::List => handle_list(&paths),
            Commands::Classify { category, json } => handle_classify(&paths, &category, json),
            Commands::Init => handle_init(&paths),
            Commands::Completions { shell } => {
                handle_completions(shell);
                Ok(0)
            }
        }
    });

    match result {
        Ok(code) => ExitCode::from((code & 0xff) as u8),
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directives = log_directives(verbose, quiet, env.as_deref());

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directives))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// `-v`/`-q` win over `RUST_LOG`; with neither, default to warn
fn log_directives(verbose: bool, quiet: bool, env: Option<&str>) -> String {
    let flag = if verbose {
        Some(Level::DEBUG)
    } else if quiet {
        Some(Level::ERROR)
    } else {
        None
    };

    match (flag, env.filter(|e| !e.trim().is_empty())) {
        (Some(level), Some(env)) => format!("{},{}", env, level.as_str().to_lowercase()),
        (Some(level), None) => level.as_str().to_lowercase(),
        (None, Some(env)) => env.to_string(),
        (None, None) => Level::WARN.as_str().to_lowercase(),
    }
}

fn resolve_paths(local: bool, cli_script: Option<PathBuf>) -> Result<ScopePaths> {
    let home = dirs::home_dir().ok_or(SkillTagsError::HomeNotFound)?;
    let cwd = std::env::current_dir()?;

    let sync_script = cli_script.or_else(|| std::env::var_os(SYNC_SCRIPT_ENV).map(PathBuf::from));

    Ok(ScopePaths::resolve(
        Scope::from_local_flag(local),
        &home,
        &cwd,
        sync_script,
    ))
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "skill-tags", &mut io::stdout());
}

fn handle_categories(paths: ScopePaths) -> Result<i32> {
    let settings = Settings::load(&paths.settings_file)?;
    let mut sync = ScriptSync::from_settings(&paths, &settings);
    let mut stdout = io::stdout();

    println!();
    println!(
        "  {} category wizard ({})",
        "skill-tags:".cyan().bold(),
        paths.scope
    );
    println!();

    let session = Session::start(paths, &settings, &mut sync, &mut stdout)?;
    let mut prompter = TerminalPrompter::new()?;
    let mut wizard = Wizard::new(session, &mut prompter, &mut sync, &mut stdout);

    let outcome = wizard.run()?;
    Ok(outcome.exit_code())
}

fn handle_sync(paths: &ScopePaths) -> Result<i32> {
    let settings = Settings::load(&paths.settings_file)?;
    let mut sync = ScriptSync::from_settings(paths, &settings);
    sync.run(&SyncOptions::for_scope(paths.scope))
}

fn handle_list(paths: &ScopePaths) -> Result<i32> {
    let config = CategoryConfig::load(&paths.config_file)?;

    if config.is_empty() {
        println!("No categories yet.");
        println!();
        println!("Add some with: skill-tags categories{}", local_suffix(paths));
        return Ok(0);
    }

    println!();
    for (category, skills) in config.iter() {
        println!(
            "  {} {}",
            title_case(category).cyan().bold(),
            format!("(@skills-{}.md, {} skills)", category, skills.len()).dimmed()
        );
        for skill in skills {
            println!("    {}", skill);
        }
        println!();
    }
    Ok(0)
}

#[derive(Serialize)]
struct ClassifyReport<'a> {
    scope: Scope,
    category: &'a str,
    keywords: &'a [String],
    matches: Vec<MatchEntry<'a>>,
}

#[derive(Serialize)]
struct MatchEntry<'a> {
    skill: &'a str,
    keyword: &'a str,
}

fn handle_classify(paths: &ScopePaths, category: &str, json: bool) -> Result<i32> {
    let category = normalize_category_name(category);
    let settings = Settings::load(&paths.settings_file)?;
    let skills = load_index(&paths.index_file)?;
    let classifier = CategoryClassifier::new(KeywordTable::builtin().with_settings(&settings))?;

    let keywords = classifier.table().keywords(&category);
    let matches = classifier.classify_detailed(&category, &skills);

    if json {
        let report = ClassifyReport {
            scope: paths.scope,
            category: &category,
            keywords,
            matches: matches
                .iter()
                .map(|m| MatchEntry {
                    skill: &m.skill,
                    keyword: &m.keyword,
                })
                .collect(),
        };
        let out = serde_json::to_string_pretty(&report).map_err(io::Error::from)?;
        println!("{}", out);
        return Ok(0);
    }

    println!();
    println!(
        "  {} {}",
        title_case(&category).cyan().bold(),
        format!("({} of {} skills)", matches.len(), skills.len()).dimmed()
    );
    if keywords.is_empty() {
        println!(
            "  {} no keywords for '{}'; add [categories.{}] to {}",
            "[WARN]".yellow(),
            category,
            category,
            paths.settings_file.display()
        );
    }
    for m in &matches {
        println!("    {:<40} {}", m.skill, m.keyword.dimmed());
    }
    println!();
    Ok(0)
}

fn handle_init(paths: &ScopePaths) -> Result<i32> {
    if Settings::init(&paths.settings_file)? {
        println!("{} {}", "Created:".green(), paths.settings_file.display());
    } else {
        println!(
            "{} {}",
            "Already exists:".yellow(),
            paths.settings_file.display()
        );
    }
    Ok(0)
}

fn local_suffix(paths: &ScopePaths) -> &'static str {
    match paths.scope {
        Scope::Global => "",
        Scope::Project => " --local",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directives_default_warn() {
        assert_eq!(log_directives(false, false, None), "warn");
        assert_eq!(log_directives(false, false, Some("  ")), "warn");
    }

    #[test]
    fn test_log_directives_rust_log_kept_without_flags() {
        assert_eq!(log_directives(false, false, Some("debug")), "debug");
        assert_eq!(
            log_directives(false, false, Some("skill_tags_core=trace")),
            "skill_tags_core=trace"
        );
    }

    #[test]
    fn test_log_directives_flags_override() {
        assert_eq!(log_directives(true, false, None), "debug");
        assert_eq!(log_directives(false, true, None), "error");
        assert_eq!(log_directives(true, false, Some("info")), "info,debug");
    }
}
