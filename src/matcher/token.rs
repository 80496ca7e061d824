use regex::{Regex, RegexBuilder};

use super::SubjectMatcher;
use crate::error::Result;
use crate::types::{Pattern, Token, DELIMITER};

/// One step of a lowered pattern
#[derive(Debug, Clone)]
enum Step {
    /// `text` compared ASCII-case-insensitively; `folded` decides any
    /// comparison involving non-ASCII text with Unicode simple case folding
    Literal { text: String, folded: Regex },
    Single,
    Trailing,
}

impl Step {
    fn literal(text: &str) -> Result<Self> {
        let folded = RegexBuilder::new(&format!("^{}$", regex::escape(text)))
            .case_insensitive(true)
            .build()?;
        Ok(Step::Literal {
            text: text.to_string(),
            folded,
        })
    }
}

/// Token-by-token subject matcher.
///
/// Accepts exactly what the regex backend accepts.
#[derive(Debug, Clone)]
pub struct TokenMatcher {
    steps: Vec<Step>,
}

impl TokenMatcher {
    pub fn new(pattern: &Pattern) -> Result<Self> {
        let steps = pattern
            .tokens()
            .iter()
            .map(|token| match token {
                Token::Literal(literal) => Step::literal(literal),
                Token::SingleWildcard => Ok(Step::Single),
                Token::TrailingWildcard => Ok(Step::Trailing),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { steps })
    }

    fn literal_eq(candidate: &str, text: &str, folded: &Regex) -> bool {
        // KELVIN SIGN and LONG S fold onto ASCII letters, so the fast path
        // needs both sides ASCII
        if candidate.is_ascii() && text.is_ascii() {
            candidate.eq_ignore_ascii_case(text)
        } else {
            folded.is_match(candidate)
        }
    }
}

impl SubjectMatcher for TokenMatcher {
    fn matches(&self, subject: &str) -> bool {
        let mut rest = subject;

        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                match rest.strip_prefix(DELIMITER) {
                    Some(r) => rest = r,
                    None => return false,
                }
            }

            let end = rest.find(DELIMITER).unwrap_or(rest.len());
            let (head, tail) = rest.split_at(end);
            let accepted = match step {
                Step::Literal { text, folded } => Self::literal_eq(head, text, folded),
                Step::Single => {
                    !head.is_empty() && head.chars().all(Token::is_single_wildcard_char)
                }
                Step::Trailing => {
                    return !rest.is_empty() && rest.chars().all(Token::is_trailing_wildcard_char)
                }
            };
            if !accepted {
                return false;
            }
            rest = tail;
        }

        rest.is_empty()
    }
}
