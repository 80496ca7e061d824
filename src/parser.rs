use crate::error::{MatcherError, PatternErrorKind, Result};
use crate::types::{Pattern, Token, DELIMITER, WILDCARD_MULTI, WILDCARD_SINGLE};

/// Split a subject pattern into typed tokens and validate it.
///
/// Rejects empty patterns, empty tokens, `>` anywhere but the last
/// position, and tokens that embed `*` or `>` among other characters.
pub fn parse_pattern(pattern: &str) -> Result<Pattern> {
    if pattern.is_empty() {
        return Err(MatcherError::invalid_pattern(PatternErrorKind::Empty, pattern));
    }

    let parts: Vec<&str> = pattern.split(DELIMITER).collect();
    let last = parts.len() - 1;
    let mut tokens = Vec::with_capacity(parts.len());

    for (i, part) in parts.into_iter().enumerate() {
        let token = match part {
            "" => {
                return Err(MatcherError::invalid_pattern(
                    PatternErrorKind::EmptyToken,
                    pattern,
                ))
            }
            WILDCARD_SINGLE => Token::SingleWildcard,
            WILDCARD_MULTI if i == last => Token::TrailingWildcard,
            WILDCARD_MULTI => {
                return Err(MatcherError::invalid_pattern(
                    PatternErrorKind::MisplacedTrailingWildcard,
                    pattern,
                ))
            }
            literal if literal.contains(['*', '>']) => {
                return Err(MatcherError::invalid_pattern(
                    PatternErrorKind::EmbeddedWildcard,
                    pattern,
                ))
            }
            literal => Token::Literal(literal.to_string()),
        };
        tokens.push(token);
    }

    Ok(Pattern {
        source: pattern.to_string(),
        tokens,
    })
}
