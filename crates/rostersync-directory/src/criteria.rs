//! Criteria filter model and flat-expression parsing.

use serde::Serialize;
use std::collections::HashMap;
use tracing::warn;

/// Selection predicate for directory queries.
///
/// Maps an attribute name to the set of acceptable values: a person matches
/// when, for every key, at least one of that key's values matches
/// (match-any per key, match-all across keys). Built once per run and
/// immutable thereafter.
///
/// Serializes as a plain JSON object, the shape the directory's attribute
/// query expects for its `criteria` field. An empty filter serializes as
/// `{}` and is passed through unchanged — whether that means "match all"
/// or an error is the directory's own call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CriteriaFilter {
    entries: HashMap<String, Vec<String>>,
}

impl CriteriaFilter {
    /// Create an empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a flat expression of comma-separated `key=value` pairs.
    ///
    /// Pairs sharing a key accumulate into that key's value set. A pair that
    /// does not split into exactly two non-empty parts is logged and
    /// discarded; parsing itself never fails, the run continues with
    /// whatever valid pairs remain. An empty expression yields an empty
    /// filter.
    #[must_use]
    pub fn parse(expr: &str) -> Self {
        let mut entries: HashMap<String, Vec<String>> = HashMap::new();
        if expr.is_empty() {
            return Self { entries };
        }

        for pair in expr.split(',') {
            let parts: Vec<&str> = pair.split('=').collect();
            match parts.as_slice() {
                [key, value] if !key.is_empty() && !value.is_empty() => {
                    entries
                        .entry((*key).to_string())
                        .or_default()
                        .push((*value).to_string());
                }
                _ => warn!(pair = %pair, "cannot split criteria pair, discarding"),
            }
        }

        Self { entries }
    }

    /// Add an acceptable value for a key (builder style).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries
            .entry(key.into())
            .or_default()
            .push(value.into());
        self
    }

    /// Get the acceptable values for a key.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the filter has no keys at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
