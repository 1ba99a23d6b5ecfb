//! Ordered set of names the user has asked to visualise.

use serde::{Deserialize, Serialize};

use super::names::normalize_name;

/// How two typed names are judged to be "the same" selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DedupePolicy {
    /// Raw string equality: "Alice" and "ALICE" are separate entries.
    #[default]
    Exact,
    /// Normalised equality: "Alice" and " alice " collide.
    CaseInsensitive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    Added,
    Duplicate,
    Blank,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    names: Vec<String>,
    policy: DedupePolicy,
}

impl SelectionSet {
    pub fn new(policy: DedupePolicy) -> Self {
        Self {
            names: Vec::new(),
            policy,
        }
    }

    pub fn policy(&self) -> DedupePolicy {
        self.policy
    }

    pub fn add(&mut self, name: &str) -> SelectionChange {
        if name.trim().is_empty() {
            return SelectionChange::Blank;
        }
        if self.contains(name) {
            return SelectionChange::Duplicate;
        }
        self.names.push(name.to_string());
        SelectionChange::Added
    }

    /// Removes by raw string equality. Returns whether anything was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.names.iter().position(|n| n == name) {
            Some(idx) => {
                self.names.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Whether `add(name)` would be rejected as a duplicate.
    pub fn contains(&self, name: &str) -> bool {
        match self.policy {
            DedupePolicy::Exact => self.names.iter().any(|n| n == name),
            DedupePolicy::CaseInsensitive => {
                let key = normalize_name(name);
                self.names.iter().any(|n| normalize_name(n) == key)
            }
        }
    }

    pub fn list(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn retain(&mut self, keep: impl FnMut(&String) -> bool) {
        self.names.retain(keep);
    }
}
