//! The two-word value shown as a name suggestion.

use crate::error::{NamerError, Result};
use std::fmt;

/// An immutable pair of words. Two pairs are equal when both words match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordPair {
    first: String,
    second: String,
}

impl WordPair {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Result<Self> {
        let first = first.into();
        let second = second.into();
        validate(&first)?;
        validate(&second)?;
        Ok(Self { first, second })
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }

    /// "CoolBreeze". This is the display form.
    pub fn as_pascal_case(&self) -> String {
        format!("{}{}", capitalize(&self.first), capitalize(&self.second))
    }

    /// "coolBreeze"
    pub fn as_camel_case(&self) -> String {
        format!("{}{}", self.first.to_lowercase(), capitalize(&self.second))
    }

    pub fn as_lower_case(&self) -> String {
        self.join("").to_lowercase()
    }

    pub fn as_upper_case(&self) -> String {
        self.join("").to_uppercase()
    }

    pub fn as_snake_case(&self) -> String {
        self.join("_").to_lowercase()
    }

    pub fn join(&self, separator: &str) -> String {
        format!("{}{}{}", self.first, separator, self.second)
    }
}

impl fmt::Display for WordPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_pascal_case())
    }
}

fn validate(word: &str) -> Result<()> {
    if word.is_empty() || word.chars().any(char::is_whitespace) {
        return Err(NamerError::InvalidWord(word.to_string()));
    }
    Ok(())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(head) => head
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
