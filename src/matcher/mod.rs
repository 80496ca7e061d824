mod expr;
mod token;

pub use expr::{pattern_to_regex, RegexMatcher};
pub use token::TokenMatcher;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::Pattern;

/// Trait for subject matchers
pub trait SubjectMatcher: Send + Sync {
    /// Check if the subject, read as a whole string, matches this matcher
    fn matches(&self, subject: &str) -> bool;
}

/// Lowering strategy for a parsed pattern
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Anchored, case-insensitive regular expression
    #[default]
    Regex,
    /// Token-by-token comparison without a regex engine
    Token,
}

/// Enum wrapper for all matcher types
#[derive(Debug, Clone)]
pub enum Matcher {
    Regex(RegexMatcher),
    Token(TokenMatcher),
}

impl Matcher {
    /// Lower a parsed pattern with the given backend
    pub fn build(pattern: &Pattern, backend: Backend) -> Result<Self> {
        Ok(match backend {
            Backend::Regex => Matcher::Regex(RegexMatcher::new(pattern)?),
            Backend::Token => Matcher::Token(TokenMatcher::new(pattern)?),
        })
    }

    pub fn backend(&self) -> Backend {
        match self {
            Matcher::Regex(_) => Backend::Regex,
            Matcher::Token(_) => Backend::Token,
        }
    }
}

impl SubjectMatcher for Matcher {
    fn matches(&self, subject: &str) -> bool {
        match self {
            Matcher::Regex(m) => m.matches(subject),
            Matcher::Token(m) => m.matches(subject),
        }
    }
}
