use std::collections::HashMap;
use std::num::NonZeroUsize;

use parking_lot::Mutex;

use lru::LruCache;

use crate::error::{MatcherError, Result};
use crate::matcher::{Backend, Matcher, SubjectMatcher};
use crate::parser::parse_pattern;
use crate::types::{Pattern, SubscriptionRule};

/// A compiled subject pattern.
///
/// Immutable once built; safe to share across threads and to test
/// concurrently.
#[derive(Debug, Clone)]
pub struct CompiledMatcher {
    pattern: Pattern,
    matcher: Matcher,
}

impl CompiledMatcher {
    /// Returns true iff the whole subject satisfies every pattern token in order.
    /// Never fails: a subject that does not match simply yields false.
    pub fn test(&self, subject: &str) -> bool {
        self.matcher.matches(subject)
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn backend(&self) -> Backend {
        self.matcher.backend()
    }
}

impl SubjectMatcher for CompiledMatcher {
    fn matches(&self, subject: &str) -> bool {
        self.test(subject)
    }
}

/// Compile a subject pattern with the default (regex) backend
pub fn compile(pattern: &str) -> Result<CompiledMatcher> {
    compile_with(pattern, Backend::default())
}

/// Compile a subject pattern with an explicit backend
pub fn compile_with(pattern: &str, backend: Backend) -> Result<CompiledMatcher> {
    let pattern = parse_pattern(pattern)?;
    let matcher = Matcher::build(&pattern, backend)?;
    tracing::debug!(
        pattern = pattern.as_str(),
        ?backend,
        tokens = pattern.tokens().len(),
        "compiled subject pattern"
    );
    Ok(CompiledMatcher { pattern, matcher })
}

/// A compiled subscription
#[derive(Debug)]
pub struct Subscription<V> {
    /// Handler name as written in the rule
    pub name: String,
    /// The handler for this subscription
    pub handler: V,
    /// Compiled subject pattern
    pub matcher: CompiledMatcher,
}

/// Ordered subscription set with LRU caching
#[derive(Debug)]
pub struct SubscriptionTable<V: Clone> {
    subscriptions: Vec<Subscription<V>>,
    cache: Mutex<LruCache<String, Vec<V>>>,
}

impl<V: Clone> SubscriptionTable<V> {
    /// Create a new subscription table
    pub fn new(subscriptions: Vec<Subscription<V>>, cache_size: usize) -> Self {
        let cache_size = NonZeroUsize::new(cache_size).unwrap_or(NonZeroUsize::MIN);
        Self {
            subscriptions,
            cache: Mutex::new(LruCache::new(cache_size)),
        }
    }

    /// All handlers whose pattern matches the subject, in declaration order
    pub fn match_subject(&self, subject: &str) -> Vec<V> {
        // ASCII case never changes the outcome; Unicode lowercasing would merge
        // subjects like "a.k" and "a.\u{212A}" that the ASCII-only wildcard
        // classes tell apart
        let key = subject.to_ascii_lowercase();

        let mut cache = self.cache.lock();

        if let Some(cached) = cache.get(&key) {
            return cached.clone();
        }

        // Computed under the lock; matching is CPU-only
        tracing::trace!(subject, "subscription cache miss");
        let result: Vec<V> = self
            .subscriptions
            .iter()
            .filter(|s| s.matcher.test(subject))
            .map(|s| s.handler.clone())
            .collect();

        cache.put(key, result.clone());
        result
    }

    /// The first handler whose pattern matches the subject
    pub fn first_match(&self, subject: &str) -> Option<V> {
        self.match_subject(subject).into_iter().next()
    }

    /// Get the number of subscriptions
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    pub fn subscriptions(&self) -> &[Subscription<V>] {
        &self.subscriptions
    }

    /// Clear the cache
    pub fn clear_cache(&self) {
        self.cache.lock().clear();
    }
}

/// Compile subscription rules into a SubscriptionTable
pub fn compile_subscriptions<V: Clone>(
    rules: &[SubscriptionRule],
    handlers: &HashMap<String, V>,
    cache_size: usize,
    backend: Backend,
) -> Result<SubscriptionTable<V>> {
    let mut subscriptions = Vec::with_capacity(rules.len());

    for rule in rules {
        subscriptions.push(compile_rule(rule, handlers, backend)?);
    }

    Ok(SubscriptionTable::new(subscriptions, cache_size))
}

/// Compile a single rule
fn compile_rule<V: Clone>(
    rule: &SubscriptionRule,
    handlers: &HashMap<String, V>,
    backend: Backend,
) -> Result<Subscription<V>> {
    // Handler lookup is case-insensitive: Router lowercases map keys
    let handler = handlers
        .get(&rule.name.to_lowercase())
        .cloned()
        .ok_or_else(|| MatcherError::UnknownHandler(rule.name.clone()))?;

    let matcher = compile_with(&rule.pattern, backend)?;

    Ok(Subscription {
        name: rule.name.clone(),
        handler,
        matcher,
    })
}
