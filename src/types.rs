//! Type definitions for the template date formatter
//!
//! This module defines the segment sequence produced by the template
//! scanner, the resolver function type, the caller-supplied token table,
//! and the error raised when a token cannot be resolved.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use chrono::NaiveDateTime;

/// A function that renders one output fragment from a point in time
pub type TokenResolver = Arc<dyn Fn(&NaiveDateTime) -> String + Send + Sync>;

/// Represents a single segment scanned from a format template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSegment {
    /// Literal text emitted unchanged
    Literal(String),
    /// A `{name}` placeholder; holds the name between the braces
    Token(String),
}

/// Caller-supplied token resolvers, consulted before the built-in defaults
///
/// A table may introduce new token names or redefine built-in ones; it is
/// only read while a formatter is being compiled, so reusing or dropping
/// the table afterwards has no effect on formatters already built from it.
///
/// # Examples
/// ```
/// use date_format::TokenTable;
///
/// let tokens = TokenTable::new().with("EX", |_| "example".to_string());
/// assert!(tokens.contains("EX"));
/// ```
#[derive(Clone, Default)]
pub struct TokenTable {
    entries: HashMap<String, TokenResolver>,
}

impl TokenTable {
    /// Create an empty token table
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register a resolver under `name`, replacing any previous entry
    pub fn with<F>(mut self, name: impl Into<String>, resolver: F) -> Self
    where
        F: Fn(&NaiveDateTime) -> String + Send + Sync + 'static,
    {
        self.entries.insert(name.into(), Arc::new(resolver));
        self
    }

    /// Look up the resolver registered under `name`
    pub fn get(&self, name: &str) -> Option<&TokenResolver> {
        self.entries.get(name)
    }

    /// Check whether `name` has a registered resolver
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of registered resolvers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for TokenTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("TokenTable").field("tokens", &names).finish()
    }
}

/// Error raised during compilation when a template token matches neither
/// the custom table nor a built-in token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndefinedTokenError {
    /// The token name that failed to resolve
    pub name: String,
}

impl fmt::Display for UndefinedTokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Undefined key in format: {}", self.name)
    }
}

impl std::error::Error for UndefinedTokenError {}
