//! Read-only ID-to-name directories for mention resolution.
//!
//! The import pipeline populates these from the full workspace catalog
//! (including synthetic entries for system bots and a placeholder entry for
//! unauthorized or absent senders) before any render begins. They are
//! passed explicitly to the renderer and treated as immutable snapshots for
//! the duration of a render call, so independent renders can run
//! concurrently against independently refreshed directories.

use std::collections::HashMap;

use crate::error::Result;

/// Lookup table from user ID to display name.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    names: HashMap<String, String>,
}

impl UserDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user.
    pub fn insert(&mut self, id: impl Into<String>, display_name: impl Into<String>) {
        self.names.insert(id.into(), display_name.into());
    }

    /// Look up a user's display name. A missing ID is never an error;
    /// callers substitute a placeholder.
    pub fn display_name(&self, id: &str) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Number of registered users.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Load a directory from a JSON object mapping IDs to names.
    pub fn from_json(json: &str) -> Result<Self> {
        let names: HashMap<String, String> = serde_json::from_str(json)?;
        Ok(Self { names })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for UserDirectory {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            names: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Lookup table from channel ID to channel name.
#[derive(Debug, Clone, Default)]
pub struct ChannelDirectory {
    names: HashMap<String, String>,
}

impl ChannelDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a channel.
    pub fn insert(&mut self, id: impl Into<String>, name: impl Into<String>) {
        self.names.insert(id.into(), name.into());
    }

    /// Look up a channel name.
    pub fn name(&self, id: &str) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Number of registered channels.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Load a directory from a JSON object mapping IDs to names.
    pub fn from_json(json: &str) -> Result<Self> {
        let names: HashMap<String, String> = serde_json::from_str(json)?;
        Ok(Self { names })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ChannelDirectory {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            names: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
