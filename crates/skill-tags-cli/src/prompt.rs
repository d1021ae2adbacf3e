//! Terminal prompts on top of rustyline.
//!
//! Ctrl-C and Ctrl-D at any prompt come back as `Prompt::Cancelled`.

use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use skill_tags_core::{Prompt, Prompter, Result, SkillTagsError};

pub struct TerminalPrompter {
    editor: DefaultEditor,
}

impl TerminalPrompter {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().map_err(prompt_error)?;
        Ok(Self { editor })
    }

    fn read(&mut self, prompt: &str) -> Result<Prompt<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Prompt::Value(line)),
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(Prompt::Cancelled),
            Err(e) => Err(prompt_error(e)),
        }
    }

    /// Read until `parse` accepts the line
    fn read_until<T>(
        &mut self,
        hint: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<Prompt<T>> {
        loop {
            let line = match self.read("  > ")? {
                Prompt::Value(line) => line,
                Prompt::Cancelled => return Ok(Prompt::Cancelled),
            };
            match parse(&line) {
                Some(value) => return Ok(Prompt::Value(value)),
                None => println!("  {} {}", "!".yellow().bold(), hint),
            }
        }
    }
}

fn prompt_error(e: ReadlineError) -> SkillTagsError {
    SkillTagsError::Prompt(e.to_string())
}

fn print_question(message: &str, items: &[String]) {
    println!("{} {}", "?".green().bold(), message.bold());
    for (i, item) in items.iter().enumerate() {
        println!("  {:>2}) {}", i + 1, item);
    }
}

impl Prompter for TerminalPrompter {
    fn select(&mut self, message: &str, items: &[String]) -> Result<Prompt<usize>> {
        print_question(message, items);
        let hint = format!("Enter a number from 1 to {}", items.len());
        let len = items.len();
        self.read_until(&hint, |line| parse_choice(line, len))
    }

    fn multi_select(&mut self, message: &str, items: &[String]) -> Result<Prompt<Vec<usize>>> {
        print_question(message, items);
        println!("  {}", "(numbers separated by commas or spaces, blank for none)".dimmed());
        let hint = format!("Use numbers from 1 to {}", items.len());
        let len = items.len();
        self.read_until(&hint, |line| parse_choices(line, len))
    }

    fn input(&mut self, message: &str) -> Result<Prompt<String>> {
        println!("{} {}", "?".green().bold(), message.bold());
        Ok(self.read("  > ")?.map(|line| line.trim().to_string()))
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<Prompt<bool>> {
        let options = if default { "[Y/n]" } else { "[y/N]" };
        println!("{} {} {}", "?".green().bold(), message.bold(), options.dimmed());
        self.read_until("Answer y or n", |line| parse_yes_no(line, default))
    }
}

/// 1-based number → 0-based index
fn parse_choice(line: &str, len: usize) -> Option<usize> {
    line.trim()
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=len).contains(n))
        .map(|n| n - 1)
}

fn parse_choices(line: &str, len: usize) -> Option<Vec<usize>> {
    let mut picked = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| parse_choice(s, len))
        .collect::<Option<Vec<_>>>()?;
    picked.sort_unstable();
    picked.dedup();
    Some(picked)
}

fn parse_yes_no(line: &str, default: bool) -> Option<bool> {
    match line.trim().to_lowercase().as_str() {
        "" => Some(default),
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}
