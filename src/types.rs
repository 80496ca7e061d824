use std::fmt;

/// Token delimiter in subjects and patterns
pub const DELIMITER: char = '.';

/// Matches exactly one token
pub const WILDCARD_SINGLE: &str = "*";

/// Matches one or more trailing tokens; final position only
pub const WILDCARD_MULTI: &str = ">";

/// A single pattern token after parsing
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// Matched verbatim (case-insensitive)
    Literal(String),
    /// `*` - exactly one token of `[A-Za-z0-9-]+`
    SingleWildcard,
    /// `>` - one or more trailing characters of `[A-Za-z0-9-.]+`
    TrailingWildcard,
}

impl Token {
    /// Characters accepted inside a `*` token
    pub fn is_single_wildcard_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '-'
    }

    /// Characters accepted by a trailing `>`, which may span delimiters
    pub fn is_trailing_wildcard_char(c: char) -> bool {
        Self::is_single_wildcard_char(c) || c == DELIMITER
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(s) => f.write_str(s),
            Token::SingleWildcard => f.write_str(WILDCARD_SINGLE),
            Token::TrailingWildcard => f.write_str(WILDCARD_MULTI),
        }
    }
}

/// A validated subject pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    pub(crate) source: String,
    pub(crate) tokens: Vec<Token>,
}

impl Pattern {
    /// The pattern text as given
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// True when the pattern contains no wildcards
    pub fn is_literal(&self) -> bool {
        self.tokens.iter().all(|t| matches!(t, Token::Literal(_)))
    }

    pub fn has_trailing_wildcard(&self) -> bool {
        matches!(self.tokens.last(), Some(Token::TrailingWildcard))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// A subscription before compilation: a handler name and its subject pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionRule {
    /// Handler name
    pub name: String,
    /// Subject pattern text
    pub pattern: String,
}

impl SubscriptionRule {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
        }
    }
}
