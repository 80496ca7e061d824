//! Router module.
//!
//! Routes concrete subjects to the handlers whose subscription patterns match.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::compile::{compile_subscriptions, SubscriptionTable};
use crate::error::{MatcherError, Result};
use crate::matcher::Backend;
use crate::types::SubscriptionRule;

/// Default LRU cache size
pub const DEFAULT_CACHE_SIZE: usize = 1024;

/// Router resolves subjects against a table of subscriptions.
///
/// Subscriptions are tried in declaration order. When nothing matches, the
/// `default` handler (if registered) is returned.
pub struct Router<V: Clone> {
    table: SubscriptionTable<V>,
    default_handler: Option<V>,
}

/// Named handler entry.
pub struct HandlerEntry<V> {
    /// Name of the handler (used in subscription rules)
    pub name: String,
    /// The handler value
    pub handler: V,
}

impl<V> HandlerEntry<V> {
    /// Create a new handler entry.
    pub fn new(name: impl Into<String>, handler: V) -> Self {
        Self {
            name: name.into(),
            handler,
        }
    }
}

/// Router builder options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterOptions {
    /// LRU cache size for subject matching results
    pub cache_size: usize,
    /// Pattern lowering backend
    pub backend: Backend,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            cache_size: DEFAULT_CACHE_SIZE,
            backend: Backend::default(),
        }
    }
}

impl RouterOptions {
    /// Create new router options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set cache size.
    pub fn with_cache_size(mut self, size: usize) -> Self {
        self.cache_size = size;
        self
    }

    /// Set pattern backend.
    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    /// Load options from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| MatcherError::ConfigError(format!("Invalid router options: {}", e)))
    }
}

impl<V: Clone> Router<V> {
    /// Create a new router from subscription rules.
    pub fn new(
        rules: &[SubscriptionRule],
        handlers: Vec<HandlerEntry<V>>,
        options: RouterOptions,
    ) -> Result<Self> {
        let mut handler_map = handlers_to_map(handlers);
        let default_handler = handler_map.remove("default");
        let table =
            compile_subscriptions(rules, &handler_map, options.cache_size, options.backend)?;

        tracing::debug!(
            subscriptions = table.len(),
            backend = ?options.backend,
            has_default = default_handler.is_some(),
            "router ready"
        );

        Ok(Self {
            table,
            default_handler,
        })
    }

    /// All matching handlers, or the default handler when none match.
    pub fn route(&self, subject: &str) -> Vec<V> {
        let matched = self.table.match_subject(subject);
        if matched.is_empty() {
            self.default_handler.iter().cloned().collect()
        } else {
            matched
        }
    }

    /// The first matching handler, falling back to the default handler.
    pub fn route_first(&self, subject: &str) -> Option<V> {
        self.table
            .first_match(subject)
            .or_else(|| self.default_handler.clone())
    }

    /// Get the number of subscriptions
    pub fn subscription_count(&self) -> usize {
        self.table.len()
    }

    /// Clear the match cache
    pub fn clear_cache(&self) {
        self.table.clear_cache();
    }
}

/// Convert handler entries to a map keyed by lowercased name.
fn handlers_to_map<V>(handlers: Vec<HandlerEntry<V>>) -> HashMap<String, V> {
    let mut map = HashMap::with_capacity(handlers.len());
    for entry in handlers {
        map.insert(entry.name.to_lowercase(), entry.handler);
    }
    map
}
