//! Persisted set of pinned station ids.

use log::error;
use std::collections::HashSet;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::watch;

use crate::kv::KeyValue;
use crate::signal::ChangeSignal;

/// Pinned station ids, insertion ordered for display.
///
/// Every mutation writes the full list through the backend before the
/// change becomes observable, so a crash right after a tap loses nothing.
/// A failing backend is logged and the in-memory set stays authoritative
/// for the rest of the session. Mutations that change nothing (adding a
/// present id, removing an absent one) neither persist nor signal.
pub struct FavoritesStore<B: KeyValue> {
    backend: B,
    key: String,
    ids: RwLock<Vec<String>>,
    signal: ChangeSignal,
}

impl<B: KeyValue> FavoritesStore<B> {
    /// Read the saved list from `backend` under `key`. A missing entry
    /// starts empty; duplicates keep their first occurrence.
    pub fn load(backend: B, key: impl Into<String>) -> Self {
        let key = key.into();
        let mut ids = match backend.get_list(&key) {
            Ok(ids) => ids,
            Err(err) => {
                error!("failed to load favorites ({key}): {err}");
                Vec::new()
            }
        };
        let mut seen = HashSet::new();
        ids.retain(|id| seen.insert(id.clone()));
        Self {
            backend,
            key,
            ids: RwLock::new(ids),
            signal: ChangeSignal::new(),
        }
    }

    fn read_ids(&self) -> RwLockReadGuard<'_, Vec<String>> {
        self.ids.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_ids(&self) -> RwLockWriteGuard<'_, Vec<String>> {
        self.ids.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn persist(&self, ids: &[String]) {
        if let Err(err) = self.backend.set_list(&self.key, ids) {
            error!("failed to persist favorites ({}): {}", self.key, err);
        }
    }

    /// Pin `id`. No-op when already pinned.
    pub fn add(&self, id: &str) {
        let mut ids = self.write_ids();
        if ids.iter().any(|existing| existing == id) {
            return;
        }
        ids.push(id.to_string());
        self.persist(&ids);
        drop(ids);
        self.signal.mark();
    }

    /// Unpin `id`. No-op when not pinned.
    pub fn remove(&self, id: &str) {
        let mut ids = self.write_ids();
        let Some(position) = ids.iter().position(|existing| existing == id) else {
            return;
        };
        ids.remove(position);
        self.persist(&ids);
        drop(ids);
        self.signal.mark();
    }

    /// Flip `id` and report whether it is pinned afterwards.
    pub fn toggle(&self, id: &str) -> bool {
        let mut ids = self.write_ids();
        let pinned = match ids.iter().position(|existing| existing == id) {
            Some(position) => {
                ids.remove(position);
                false
            }
            None => {
                ids.push(id.to_string());
                true
            }
        };
        self.persist(&ids);
        drop(ids);
        self.signal.mark();
        pinned
    }

    pub fn contains(&self, id: &str) -> bool {
        self.read_ids().iter().any(|existing| existing == id)
    }

    /// Pinned ids in insertion order.
    pub fn list(&self) -> Vec<String> {
        self.read_ids().clone()
    }

    pub fn len(&self) -> usize {
        self.read_ids().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_ids().is_empty()
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.signal.subscribe()
    }

    pub fn revision(&self) -> u64 {
        self.signal.revision()
    }
}
