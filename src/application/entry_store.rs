//! Entry store: the authoritative list of diary entries and its persisted mirror

use crate::domain::{search, DiaryEntry, EntryPatch, NewEntry};
use crate::error::Result;
use crate::infrastructure::KeyValueStore;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Storage key holding the JSON array of entries
pub const ENTRIES_KEY: &str = "serene_diary_entries";

/// Owns the entry collection and writes the whole collection back to storage
/// after every mutation.
///
/// Entries are kept newest first. The in-memory list only changes once the
/// storage write has succeeded, so memory and storage always agree.
pub struct EntryStore<S: KeyValueStore> {
    storage: S,
    entries: Vec<DiaryEntry>,
}

impl<S: KeyValueStore> EntryStore<S> {
    /// Load entries from storage.
    ///
    /// A missing slot gives an empty store. Malformed data is logged and also
    /// gives an empty store; only a failing read is an error.
    pub fn open(storage: S) -> Result<Self> {
        let entries = match storage.get(ENTRIES_KEY)? {
            Some(blob) => decode_entries(&blob),
            None => Vec::new(),
        };
        log::info!("Loaded {} diary entries", entries.len());

        Ok(EntryStore { storage, entries })
    }

    /// All entries, newest first
    pub fn entries(&self) -> &[DiaryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose title, content or mood contain `query`, ignoring case
    pub fn search(&self, query: &str) -> Vec<&DiaryEntry> {
        search::filter_entries(&self.entries, query)
    }

    pub fn get(&self, id: &str) -> Option<&DiaryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Create an entry with a fresh id and the current time, and put it first
    pub fn add(&mut self, draft: NewEntry) -> Result<DiaryEntry> {
        let entry = draft.into_entry(self.fresh_id(), now_millis());

        let mut next = Vec::with_capacity(self.entries.len() + 1);
        next.push(entry.clone());
        next.extend(self.entries.iter().cloned());
        self.commit(next)?;

        log::info!("Added entry {}", entry.id);
        Ok(entry)
    }

    /// Replace the supplied fields of the entry with `id`.
    ///
    /// Returns `false` when no entry matches; the collection is still written back unchanged.
    pub fn update(&mut self, id: &str, patch: EntryPatch) -> Result<bool> {
        let mut next = self.entries.clone();
        let found = match next.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                patch.apply_to(entry);
                true
            }
            None => {
                log::warn!("Update of unknown entry {}", id);
                false
            }
        };
        self.commit(next)?;

        if found {
            log::info!("Updated entry {}", id);
        }
        Ok(found)
    }

    /// Remove the entry with `id`. Returns `false` when nothing was removed.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let mut next = self.entries.clone();
        next.retain(|e| e.id != id);
        let removed = next.len() != self.entries.len();
        self.commit(next)?;

        if removed {
            log::info!("Deleted entry {}", id);
        } else {
            log::warn!("Delete of unknown entry {}", id);
        }
        Ok(removed)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn commit(&mut self, next: Vec<DiaryEntry>) -> Result<()> {
        let blob = serde_json::to_string(&next)?;
        self.storage.set(ENTRIES_KEY, &blob)?;
        self.entries = next;
        Ok(())
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}

fn decode_entries(blob: &str) -> Vec<DiaryEntry> {
    match serde_json::from_str::<Vec<DiaryEntry>>(blob) {
        Ok(mut entries) => {
            sort_newest_first(&mut entries);
            entries
        }
        Err(e) => {
            log::error!("Failed to parse diary entries: {}", e);
            Vec::new()
        }
    }
}

/// Stable sort by date, newest first. Equal dates keep their stored order.
fn sort_newest_first(entries: &mut [DiaryEntry]) {
    entries.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Current time at millisecond precision, the resolution entries are stored with
fn now_millis() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
}
