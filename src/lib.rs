//! Subject Matcher - wildcard subject pattern matching for message buses
//!
//! This library compiles dot-delimited subject patterns into matchers and
//! routes concrete subjects to subscriptions:
//! - Literal tokens matched verbatim (case-insensitive, meta-characters escaped)
//! - `*` matching exactly one token
//! - `>` matching one or more trailing tokens
//! - Regex or token-by-token lowering with identical results
//! - Subscription tables with LRU caching
//!
//! # Example
//!
//! ```rust
//! use subject_matcher::compile;
//!
//! let matcher = compile("europe-system.*").unwrap();
//! assert!(matcher.test("europe-system.north"));
//! assert!(!matcher.test("europe-system.north.west"));
//!
//! let matcher = compile("europe-system.>").unwrap();
//! assert!(matcher.test("europe-system.north.west"));
//! ```
//!
//! # Subscriptions
//!
//! ```rust
//! use subject_matcher::{HandlerEntry, Router, RouterOptions, SubscriptionRule};
//!
//! let rules = [
//!     SubscriptionRule::new("store", "mongo-store.>"),
//!     SubscriptionRule::new("audit", "*.created"),
//! ];
//!
//! let handlers = vec![
//!     HandlerEntry::new("store", "STORE"),
//!     HandlerEntry::new("audit", "AUDIT"),
//! ];
//! let router = Router::new(&rules, handlers, RouterOptions::default()).unwrap();
//!
//! assert_eq!(router.route_first("mongo-store.find"), Some("STORE"));
//! ```
//!
//! ## Pattern Tokens
//!
//! | Token | Example | Matches |
//! |-------|---------|---------|
//! | Literal | `orders` | The token itself, any letter case |
//! | Single | `orders.*` | One token of `[A-Za-z0-9-]+` |
//! | Trailing | `orders.>` | One or more trailing characters of `[A-Za-z0-9-.]` |
//!
//! `>` is only valid as the last token. Empty patterns, empty tokens and
//! tokens mixing wildcards with other characters are rejected.

pub mod compile;
pub mod error;
pub mod matcher;
pub mod parser;
pub mod router;
pub mod types;

// Re-export commonly used items
pub use compile::{
    compile, compile_subscriptions, compile_with, CompiledMatcher, Subscription, SubscriptionTable,
};
pub use error::{MatcherError, PatternErrorKind, Result};
pub use matcher::{
    pattern_to_regex, Backend, Matcher, RegexMatcher, SubjectMatcher, TokenMatcher,
};
pub use parser::parse_pattern;
pub use types::{Pattern, SubscriptionRule, Token, DELIMITER, WILDCARD_MULTI, WILDCARD_SINGLE};

// Re-export router types
pub use router::{HandlerEntry, Router, RouterOptions, DEFAULT_CACHE_SIZE};
