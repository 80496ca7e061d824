use regex::{Regex, RegexBuilder};

use super::SubjectMatcher;
use crate::error::Result;
use crate::parser::parse_pattern;
use crate::types::{Pattern, Token};

/// `*`: one token of `[A-Za-z0-9-]`. ASCII-only so case folding never widens the class.
const SINGLE_WILDCARD_EXPR: &str = r"(?-u:[a-zA-Z0-9\-]+)";

/// `>`: same class plus the delimiter, so it can span the remaining tokens.
const TRAILING_WILDCARD_EXPR: &str = r"(?-u:[a-zA-Z0-9\-\.]+)";

/// Convert a wildcard subject pattern into its anchored, case-insensitive
/// regular expression equivalent.
///
/// `europe-system.*` becomes `^europe\-system\.(?-u:[a-zA-Z0-9\-]+)$`.
pub fn pattern_to_regex(pattern: &str) -> Result<Regex> {
    let pattern = parse_pattern(pattern)?;
    build_regex(&pattern)
}

fn lower(pattern: &Pattern) -> String {
    let mut expr = String::with_capacity(pattern.as_str().len() * 2 + 2);
    expr.push('^');
    for (i, token) in pattern.tokens().iter().enumerate() {
        if i > 0 {
            expr.push_str(r"\.");
        }
        match token {
            Token::Literal(literal) => expr.push_str(&regex::escape(literal)),
            Token::SingleWildcard => expr.push_str(SINGLE_WILDCARD_EXPR),
            Token::TrailingWildcard => expr.push_str(TRAILING_WILDCARD_EXPR),
        }
    }
    expr.push('$');
    expr
}

fn build_regex(pattern: &Pattern) -> Result<Regex> {
    let regex = RegexBuilder::new(&lower(pattern))
        .case_insensitive(true)
        .build()?;
    Ok(regex)
}

/// Regex-backed subject matcher
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    regex: Regex,
}

impl RegexMatcher {
    pub fn new(pattern: &Pattern) -> Result<Self> {
        Ok(Self {
            regex: build_regex(pattern)?,
        })
    }

    /// The lowered expression
    pub fn as_regex(&self) -> &Regex {
        &self.regex
    }
}

impl SubjectMatcher for RegexMatcher {
    fn matches(&self, subject: &str) -> bool {
        self.regex.is_match(subject)
    }
}
