//! The hymn collection: creation, edits, favorites and read-only views.
//!
//! The whole collection is one persisted value under [`HYMNS_KEY`]. Favorite
//! state lives only in [`Hymn::is_favorite`]; the favorites list is derived on
//! read, so there is no second key that could drift out of sync.
//!
//! Mutations build the next collection, persist it, and only then expose it.
//! Operations that name an unknown id do nothing and do not touch storage.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::debug;

use crate::category::{self, CategorySummary};
use crate::error::StorageError;
use crate::hymn::{Hymn, HymnDraft, HymnPatch};
use crate::persisted::PersistedValue;
use crate::storage::KeyValueStorage;

pub const HYMNS_KEY: &str = "hymns";

#[derive(Debug)]
pub struct HymnStore {
    hymns: PersistedValue<Vec<Hymn>>,
    defaults: Vec<Hymn>,
    last_id: i64,
}

impl HymnStore {
    /// Loads the collection from `storage`, or `defaults` when nothing usable
    /// is stored yet.
    pub fn load(storage: Arc<dyn KeyValueStorage>, defaults: Vec<Hymn>) -> Self {
        let hymns = PersistedValue::load(storage, HYMNS_KEY, defaults.clone());
        let last_id = highest_numeric_id(hymns.get());
        debug!("Loaded {} hymns", hymns.get().len());
        Self {
            hymns,
            defaults,
            last_id,
        }
    }

    /// Current snapshot, in insertion order.
    pub fn hymns(&self) -> &[Hymn] {
        self.hymns.get()
    }

    pub fn get(&self, id: &str) -> Option<&Hymn> {
        self.hymns().iter().find(|hymn| hymn.id == id)
    }

    pub fn len(&self) -> usize {
        self.hymns().len()
    }

    pub fn is_empty(&self) -> bool {
        self.hymns().is_empty()
    }

    /// Appends a new hymn built from `draft` and returns it.
    ///
    /// The draft is stored as given; validation belongs to the caller
    /// (see [`crate::hymn::HymnForm::validate`]).
    pub fn add(&mut self, draft: HymnDraft) -> Result<Hymn, StorageError> {
        let id = self.next_id();
        let hymn = Hymn::from_draft(id, draft, Utc::now());

        let mut next = self.hymns().to_vec();
        next.push(hymn.clone());
        self.hymns.set(next)?;
        if let Ok(issued) = hymn.id.parse::<i64>() {
            self.last_id = self.last_id.max(issued);
        }

        debug!("Added hymn {} ({})", hymn.id, hymn.title);
        Ok(hymn)
    }

    /// Merges `patch` into the hymn with `id` and refreshes `updated_at`.
    ///
    /// Returns the updated record, or `None` when no hymn has that id.
    pub fn update(&mut self, id: &str, patch: HymnPatch) -> Result<Option<Hymn>, StorageError> {
        let Some(index) = self.position(id) else {
            debug!("Ignoring update for unknown hymn {id}");
            return Ok(None);
        };

        if patch.is_empty() {
            debug!("Empty patch for hymn {id}, refreshing updatedAt only");
        }

        let mut next = self.hymns().to_vec();
        let hymn = &mut next[index];
        patch.apply_to(hymn);
        hymn.updated_at = refreshed(hymn.updated_at);
        let updated = hymn.clone();

        self.hymns.set(next)?;
        debug!("Updated hymn {id}");
        Ok(Some(updated))
    }

    /// Removes the hymn with `id`. Returns whether a record was removed.
    pub fn delete(&mut self, id: &str) -> Result<bool, StorageError> {
        let Some(index) = self.position(id) else {
            debug!("Ignoring delete for unknown hymn {id}");
            return Ok(false);
        };

        let mut next = self.hymns().to_vec();
        next.remove(index);
        self.hymns.set(next)?;
        debug!("Deleted hymn {id}");
        Ok(true)
    }

    /// Flips the favorite flag of `id` and returns the new value, or `None`
    /// when no hymn has that id.
    pub fn toggle_favorite(&mut self, id: &str) -> Result<Option<bool>, StorageError> {
        let Some(current) = self.get(id).map(|hymn| hymn.is_favorite) else {
            debug!("Ignoring favorite toggle for unknown hymn {id}");
            return Ok(None);
        };

        let patch = HymnPatch {
            is_favorite: Some(!current),
            ..HymnPatch::default()
        };
        Ok(self.update(id, patch)?.map(|hymn| hymn.is_favorite))
    }

    /// Hymns whose category equals `category` exactly.
    pub fn filter_by_category(&self, category: &str) -> Vec<&Hymn> {
        self.hymns()
            .iter()
            .filter(|hymn| hymn.category == category)
            .collect()
    }

    pub fn favorites(&self) -> Vec<&Hymn> {
        self.hymns().iter().filter(|hymn| hymn.is_favorite).collect()
    }

    /// Ids of favorite hymns, in collection order.
    pub fn favorite_ids(&self) -> Vec<&str> {
        self.favorites().into_iter().map(|hymn| hymn.id.as_str()).collect()
    }

    /// Substring search over title, number and lyrics.
    ///
    /// A blank query means "nothing searched yet" and returns no results.
    /// Matches keep collection order; there is no ranking.
    pub fn search(&self, query: &str) -> Vec<&Hymn> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let lower_query = query.to_lowercase();
        self.hymns()
            .iter()
            .filter(|hymn| hymn.matches_query(query, &lower_query))
            .collect()
    }

    /// The last `limit` hymns added, newest first.
    pub fn recent(&self, limit: usize) -> Vec<&Hymn> {
        self.hymns().iter().rev().take(limit).collect()
    }

    pub fn categories(&self) -> Vec<CategorySummary> {
        category::summaries(self.hymns())
    }

    /// Replaces the collection with the built-in defaults.
    pub fn restore_defaults(&mut self) -> Result<(), StorageError> {
        self.hymns.set(self.defaults.clone())?;
        self.last_id = highest_numeric_id(self.hymns());
        Ok(())
    }

    pub(crate) fn reload(&mut self) {
        self.hymns.reload();
        self.last_id = self.last_id.max(highest_numeric_id(self.hymns()));
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.hymns().iter().position(|hymn| hymn.id == id)
    }

    /// Millisecond timestamp, bumped past the last issued id and past any id
    /// already in the collection.
    ///
    /// Once the numeric range is exhausted a `-n` suffix is appended instead.
    fn next_id(&self) -> String {
        let mut candidate = Utc::now()
            .timestamp_millis()
            .max(self.last_id.saturating_add(1));
        while self.is_taken(&candidate.to_string()) {
            match candidate.checked_add(1) {
                Some(next) => candidate = next,
                None => break,
            }
        }

        let id = candidate.to_string();
        if !self.is_taken(&id) {
            return id;
        }
        let mut suffix = 1u64;
        loop {
            let suffixed = format!("{id}-{suffix}");
            if !self.is_taken(&suffixed) {
                return suffixed;
            }
            suffix += 1;
        }
    }

    fn is_taken(&self, id: &str) -> bool {
        self.position(id).is_some()
    }
}

fn highest_numeric_id(hymns: &[Hymn]) -> i64 {
    hymns
        .iter()
        .filter_map(|hymn| hymn.id.parse::<i64>().ok())
        .max()
        .unwrap_or(0)
}

/// `now`, unless the clock went backwards past `previous`.
fn refreshed(previous: DateTime<Utc>) -> DateTime<Utc> {
    Utc::now().max(previous)
}
