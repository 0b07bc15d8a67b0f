//! Global tag registry.
//!
//! Tag names are tracked both on each note and here, so the sidebar can
//! list tags that no note currently references. The registry is always a
//! superset of the tag names appearing on notes.

use serde::{Deserialize, Serialize};

/// Ordered, duplicate-free set of tag names.
///
/// Names match case-sensitively and are kept in insertion order for
/// display. Validation is centralized here: `add` trims its input and
/// rejects empty or whitespace-only names, so no caller has to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRegistry {
    names: Vec<String>,
}

impl TagRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry from the given names, applying the same
    /// normalization as `add`.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::new();
        for name in names {
            registry.add(&name.into());
        }
        registry
    }

    /// Adds a tag name if not already present.
    ///
    /// The name is trimmed first; empty and whitespace-only names are
    /// rejected. Returns `true` when the registry changed.
    pub fn add(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    /// Removes a tag name. Returns `true` when the name was present.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|n| n != name);
        self.names.len() != before
    }

    /// Returns true when the exact name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Registered names in insertion order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of registered names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true when no names are registered.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
