use thiserror::Error;

/// Classifies pattern validation failures for programmatic matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternErrorKind {
    /// Pattern string is empty
    Empty,
    /// A token between two delimiters is empty (`a..b`, `.a`, `a.`)
    EmptyToken,
    /// `>` appears before the final token
    MisplacedTrailingWildcard,
    /// A token mixes wildcard characters with other characters (`a*`, `>b`)
    EmbeddedWildcard,
}

/// Subject matcher error types
#[derive(Error, Debug)]
pub enum MatcherError {
    #[error("Invalid pattern '{pattern}': {kind:?}")]
    InvalidPattern {
        kind: PatternErrorKind,
        pattern: String,
    },

    #[error("Unknown handler: {0}")]
    UnknownHandler(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Regex error: {0}")]
    RegexError(#[from] regex::Error),
}

impl MatcherError {
    pub(crate) fn invalid_pattern(kind: PatternErrorKind, pattern: &str) -> Self {
        MatcherError::InvalidPattern {
            kind,
            pattern: pattern.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MatcherError>;
