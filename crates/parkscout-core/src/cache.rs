//! In-process memoization store for the three lookup stages.
//!
//! The store maps a string key to either the state index (under
//! [`STATE_INDEX_KEY`]) or one state's ordered site list (under the
//! lowercase state name). It lives for the session; an optional JSON
//! snapshot can seed it at startup and capture it again on clean exit.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::site::{Site, StateIndex};

/// Reserved key for the state-name → catalog-URL index entry.
pub const STATE_INDEX_KEY: &str = "state_index";

/// One stored value. Untagged: a JSON array is a site list, a JSON object
/// is the state index, matching the snapshot format on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CacheValue {
    Sites(Vec<Site>),
    Index(StateIndex),
}

/// Outcome of a snapshot load. Absent and malformed snapshots both yield
/// an empty store, but callers and tests can tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotStatus {
    Loaded(usize),
    Absent,
    Malformed,
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to serialize cache snapshot: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write cache snapshot: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Default)]
pub struct CacheStore {
    entries: HashMap<String, CacheValue>,
}

impl CacheStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a store from a JSON snapshot. Fail-soft: a missing or
    /// malformed snapshot yields an empty store and never an error, with
    /// the two cases distinguished in the returned [`SnapshotStatus`].
    #[must_use]
    pub fn load(path: &Path) -> (Self, SnapshotStatus) {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no cache snapshot; starting empty");
                return (Self::new(), SnapshotStatus::Absent);
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "cache snapshot unreadable; starting empty");
                return (Self::new(), SnapshotStatus::Malformed);
            }
        };

        match serde_json::from_str::<HashMap<String, CacheValue>>(&raw) {
            Ok(entries) => {
                tracing::info!(path = %path.display(), entries = entries.len(), "loaded cache snapshot");
                let status = SnapshotStatus::Loaded(entries.len());
                (Self { entries }, status)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "cache snapshot malformed; starting empty");
                (Self::new(), SnapshotStatus::Malformed)
            }
        }
    }

    /// Writes the store back to `path` as a JSON snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] if serialization or the filesystem write
    /// fails.
    pub fn save(&self, path: &Path) -> Result<(), SnapshotError> {
        let body = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(path, body)?;
        tracing::debug!(path = %path.display(), entries = self.entries.len(), "wrote cache snapshot");
        Ok(())
    }

    #[must_use]
    pub fn state_index(&self) -> Option<&StateIndex> {
        match self.entries.get(STATE_INDEX_KEY) {
            Some(CacheValue::Index(index)) => Some(index),
            _ => None,
        }
    }

    pub fn put_state_index(&mut self, index: StateIndex) {
        self.entries
            .insert(STATE_INDEX_KEY.to_owned(), CacheValue::Index(index));
    }

    /// The cached site list for a state, keyed by lowercase state name.
    #[must_use]
    pub fn sites(&self, state_key: &str) -> Option<&[Site]> {
        match self.entries.get(state_key) {
            Some(CacheValue::Sites(sites)) => Some(sites),
            _ => None,
        }
    }

    pub fn put_sites(&mut self, state_key: &str, sites: Vec<Site>) {
        self.entries
            .insert(state_key.to_owned(), CacheValue::Sites(sites));
    }

    #[must_use]
    pub fn site(&self, state_key: &str, index: usize) -> Option<&Site> {
        self.sites(state_key)?.get(index)
    }

    /// Attaches a nearby-places payload to site `index` of a cached state
    /// list. A no-op if the state or index is not cached, or if the site
    /// already carries a payload.
    pub fn set_nearby(&mut self, state_key: &str, index: usize, payload: Value) {
        if let Some(CacheValue::Sites(sites)) = self.entries.get_mut(state_key) {
            if let Some(site) = sites.get_mut(index) {
                site.set_nearby(payload);
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "cache_test.rs"]
mod tests;
