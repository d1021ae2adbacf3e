//! Category wizard.
//!
//! A menu loop over the in-memory [`CategoryConfig`]: add, edit and delete
//! categories, then either save (write config, run sync) or quit. Nothing
//! touches the config file before Save. A cancelled prompt anywhere ends the
//! session as a Quit.

use std::fs;
use std::io::{self, Write};

use crate::category::{normalize_category_name, predefined_names, title_case};
use crate::error::Result;
use crate::prompt::{Prompt, Prompter};
use crate::scope::artifact_file_name;
use crate::session::Session;
use crate::sync::{SyncOptions, SyncRunner};

/// Unwrap a prompt answer, or end the current action as cancelled
macro_rules! answer {
    ($prompt:expr) => {
        match $prompt {
            Prompt::Value(v) => v,
            Prompt::Cancelled => return Ok(Step::Cancelled),
        }
    };
}

/// Menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Edit,
    Delete,
    Save,
    Quit,
}

impl Action {
    pub const MENU: [Action; 5] = [
        Action::Add,
        Action::Edit,
        Action::Delete,
        Action::Save,
        Action::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Add => "Add categories",
            Self::Edit => "Edit a category (refresh its skills)",
            Self::Delete => "Delete a category",
            Self::Save => "Save changes",
            Self::Quit => "Quit without saving",
        }
    }
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Config written and sync run; carries the sync's exit code
    Saved { exit_code: i32 },
    /// Left without writing anything (Quit or a cancelled prompt)
    Quit,
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Saved { exit_code } => *exit_code,
            Self::Quit => 0,
        }
    }
}

/// Result of one menu action
#[derive(Debug)]
pub enum Step {
    /// Back to the menu
    Continue,
    /// The operator abandoned a prompt
    Cancelled,
    Finished(Outcome),
}

pub struct Wizard<'a, P: ?Sized, S: ?Sized, W: ?Sized> {
    session: Session,
    prompter: &'a mut P,
    sync: &'a mut S,
    out: &'a mut W,
}

impl<'a, P, S, W> Wizard<'a, P, S, W>
where
    P: Prompter + ?Sized,
    S: SyncRunner + ?Sized,
    W: Write + ?Sized,
{
    pub fn new(session: Session, prompter: &'a mut P, sync: &'a mut S, out: &'a mut W) -> Self {
        Self {
            session,
            prompter,
            sync,
            out,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run the menu loop until Save or Quit
    pub fn run(&mut self) -> Result<Outcome> {
        loop {
            self.print_current()?;

            let labels: Vec<String> = Action::MENU.iter().map(|a| a.label().to_string()).collect();
            let action = match self.prompter.select("What would you like to do?", &labels)? {
                Prompt::Value(i) => Action::MENU.get(i).copied().unwrap_or(Action::Quit),
                Prompt::Cancelled => return self.cancelled(),
            };
            tracing::debug!(?action, "menu action");

            let step = match action {
                Action::Add => self.add()?,
                Action::Edit => self.edit()?,
                Action::Delete => self.delete()?,
                Action::Save => self.save()?,
                Action::Quit => Step::Finished(Outcome::Quit),
            };

            match step {
                Step::Continue => continue,
                Step::Cancelled => return self.cancelled(),
                Step::Finished(outcome) => return Ok(outcome),
            }
        }
    }

    fn cancelled(&mut self) -> Result<Outcome> {
        tracing::info!("prompt cancelled, quitting without saving");
        writeln!(self.out)?;
        Ok(Outcome::Quit)
    }

    fn print_current(&mut self) -> io::Result<()> {
        let config = &self.session.config;
        if config.is_empty() {
            return writeln!(self.out, "  Categories: (none yet)\n");
        }
        writeln!(self.out, "  Current categories:")?;
        for (category, skills) in config.iter() {
            writeln!(self.out, "    • {}", label_with_count(category, skills.len()))?;
        }
        writeln!(self.out)
    }

    fn add(&mut self) -> Result<Step> {
        let config = &self.session.config;
        let available: Vec<&'static str> =
            predefined_names().filter(|c| !config.contains(c)).collect();

        let mut added: Vec<String> = Vec::new();
        if available.is_empty() {
            writeln!(self.out, "\n  All predefined categories already added.")?;
        } else {
            let labels: Vec<String> = available.iter().map(|c| title_case(c)).collect();
            let picked = answer!(self
                .prompter
                .multi_select("Select categories to add", &labels)?);
            added.extend(
                picked
                    .into_iter()
                    .filter_map(|i| available.get(i))
                    .map(|c| c.to_string()),
            );
        }

        let raw = answer!(self
            .prompter
            .input("Custom category name (leave blank to skip)")?);
        if !raw.trim().is_empty() {
            let name = normalize_category_name(&raw);
            if name.is_empty() {
                writeln!(
                    self.out,
                    "  '{}' has no usable characters (a-z, 0-9, -).",
                    raw.trim()
                )?;
            } else if self.session.config.contains(&name) || added.contains(&name) {
                writeln!(
                    self.out,
                    "  Category '{}' already exists. Use Edit to refresh it.",
                    name
                )?;
            } else {
                added.push(name);
            }
        }

        if added.is_empty() {
            writeln!(self.out, "  No categories selected.\n")?;
            return Ok(Step::Continue);
        }

        for category in added {
            let members = self.session.classify(&category);
            writeln!(self.out, "  + {}", label_with_count(&category, members.len()))?;
            self.note_if_no_keywords(&category)?;
            self.session.config.insert(&category, members);
        }
        writeln!(self.out)?;
        Ok(Step::Continue)
    }

    fn edit(&mut self) -> Result<Step> {
        let picked = answer!(self.pick_existing("Select a category to refresh")?);
        let Some(category) = picked else {
            return Ok(Step::Continue);
        };

        let before = self
            .session
            .config
            .get(&category)
            .map(|s| s.len())
            .unwrap_or_default();
        let members = self.session.classify(&category);
        writeln!(
            self.out,
            "  ~ {}: {} → {}\n",
            title_case(&category),
            before,
            plural_skills(members.len())
        )?;
        self.note_if_no_keywords(&category)?;
        self.session.config.insert(&category, members);
        Ok(Step::Continue)
    }

    fn delete(&mut self) -> Result<Step> {
        let picked = answer!(self.pick_existing("Select a category to delete")?);
        let Some(category) = picked else {
            return Ok(Step::Continue);
        };

        let message = format!(
            "Delete {}? This also removes @{}",
            title_case(&category),
            artifact_file_name(&category)
        );
        if !answer!(self.prompter.confirm(&message, false)?) {
            writeln!(self.out, "  Kept {}.\n", title_case(&category))?;
            return Ok(Step::Continue);
        }

        self.session.config.remove(&category);
        self.remove_artifact(&category);
        writeln!(self.out, "  - Removed: {}\n", title_case(&category))?;
        Ok(Step::Continue)
    }

    fn save(&mut self) -> Result<Step> {
        let categories: Vec<String> = self
            .session
            .config
            .names()
            .into_iter()
            .map(String::from)
            .collect();
        if categories.is_empty() {
            writeln!(self.out, "  No categories to save.\n")?;
            return Ok(Step::Continue);
        }

        let pad = categories
            .iter()
            .map(|c| title_case(c).chars().count())
            .max()
            .unwrap_or_default();

        writeln!(self.out)?;
        writeln!(self.out, "  ┌─ Matching skills to categories ─────────────────")?;
        for category in &categories {
            let members = self.session.classify(category);
            writeln!(
                self.out,
                "  │  ✓ {:<pad$}  {:>2} skill{}",
                title_case(category),
                members.len(),
                if members.len() == 1 { "" } else { "s" },
                pad = pad
            )?;
            self.session.config.insert(category, members);
        }
        writeln!(self.out, "  └─────────────────────────────────────────────────")?;

        let paths = &self.session.paths;
        self.session.config.save(&paths.config_file)?;

        writeln!(
            self.out,
            "\n  Syncing {} skills...\n",
            self.session.skills.len()
        )?;
        self.out.flush()?;
        let exit_code = self
            .sync
            .run(&SyncOptions::for_scope(paths.scope).quiet())?;

        writeln!(
            self.out,
            "  ✓ Config saved → {}",
            paths.display_config_path()
        )?;
        if exit_code == 0 {
            writeln!(
                self.out,
                "  ✓ {} category file{} generated",
                categories.len(),
                if categories.len() == 1 { "" } else { "s" }
            )?;
            for category in &categories {
                writeln!(self.out, "    @{}", artifact_file_name(category))?;
            }
            writeln!(
                self.out,
                "\n  Tip: type @skills-<category>.md in Cursor chat to use a category.\n"
            )?;
        } else {
            writeln!(self.out, "  ✗ Sync exited with code {}\n", exit_code)?;
        }

        Ok(Step::Finished(Outcome::Saved { exit_code }))
    }

    /// Ask for one of the categories currently in the config.
    /// `Value(None)` when there is nothing to pick.
    fn pick_existing(&mut self, message: &str) -> Result<Prompt<Option<String>>> {
        let config = &self.session.config;
        if config.is_empty() {
            writeln!(self.out, "  No categories yet. Add some first.\n")?;
            return Ok(Prompt::Value(None));
        }

        let names: Vec<String> = config.names().into_iter().map(String::from).collect();
        let labels: Vec<String> = config
            .iter()
            .map(|(c, skills)| label_with_count(c, skills.len()))
            .collect();

        Ok(self
            .prompter
            .select(message, &labels)?
            .map(|i| names.get(i).cloned()))
    }

    fn note_if_no_keywords(&mut self, category: &str) -> io::Result<()> {
        if self.session.classifier.table().keywords(category).is_empty() {
            writeln!(
                self.out,
                "    (no keywords for '{}': add [categories.{}] to {})",
                category,
                category,
                crate::scope::SETTINGS_FILE
            )?;
        }
        Ok(())
    }

    /// Delete the generated command file. Failures are not the operator's
    /// problem: a missing file is the common case.
    fn remove_artifact(&self, category: &str) {
        let path = self.session.paths.artifact_path(category);
        match fs::remove_file(&path) {
            Ok(()) => tracing::debug!(path = %path.display(), "removed category file"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no category file to remove")
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not remove category file")
            }
        }
    }
}

fn plural_skills(n: usize) -> String {
    format!("{} skill{}", n, if n == 1 { "" } else { "s" })
}

/// `Frontend (3 skills)`
pub fn label_with_count(category: &str, count: usize) -> String {
    format!("{} ({})", title_case(category), plural_skills(count))
}
