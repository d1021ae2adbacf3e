//! Operator input.
//!
//! The wizard asks questions through [`Prompter`]. Every question can be
//! abandoned by the operator (Ctrl-C, Ctrl-D); that comes back as
//! [`Prompt::Cancelled`], never as an error.

use crate::error::Result;

/// Answer to a prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt<T> {
    Value(T),
    Cancelled,
}

impl<T> Prompt<T> {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Prompt<U> {
        match self {
            Self::Value(v) => Prompt::Value(f(v)),
            Self::Cancelled => Prompt::Cancelled,
        }
    }
}

/// Interactive question asker
pub trait Prompter {
    /// Pick exactly one of `items`; returns its index
    fn select(&mut self, message: &str, items: &[String]) -> Result<Prompt<usize>>;

    /// Pick zero or more of `items`; returns their indices in ascending order
    fn multi_select(&mut self, message: &str, items: &[String]) -> Result<Prompt<Vec<usize>>>;

    /// Free-form line of text
    fn input(&mut self, message: &str) -> Result<Prompt<String>>;

    /// Yes/no question
    fn confirm(&mut self, message: &str, default: bool) -> Result<Prompt<bool>>;
}
