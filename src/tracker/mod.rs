//! The log collection and everything needed to keep it persisted.
//!  - [Tracker] owns the collection for a session.
//!  - The collection lives under a single key of a [storage::KeyValueStore] as a JSON array.
//!  - Every mutation rewrites the whole array.

pub mod entities;
pub mod storage;

use anyhow::{bail, Context, Result};
use entities::LogEntry;
use storage::KeyValueStore;
use tracing::{debug, info, warn};

use crate::utils::clock::Clock;

/// Key the collection is stored under.
pub const STORAGE_KEY: &str = "procrasti_v1";

/// Session state: the ordered log collection plus the store it's persisted in.
/// Entries are never edited, the collection only grows, gets replaced or gets cleared.
pub struct Tracker<S: KeyValueStore> {
    store: S,
    entries: Vec<LogEntry>,
    clock: Box<dyn Clock>,
}

impl<S: KeyValueStore> Tracker<S> {
    /// Loads the collection from `store`. A missing or malformed value, including bytes that
    /// aren't UTF-8, is an empty collection. Failing to read the store at all is an error.
    pub fn load(store: S, clock: Box<dyn Clock>) -> Result<Self> {
        let entries = match store.get(STORAGE_KEY)? {
            Some(bytes) => match serde_json::from_slice::<Vec<LogEntry>>(&bytes) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Stored value under {STORAGE_KEY} is not a list of entries, starting empty: {e}");
                    vec![]
                }
            },
            None => vec![],
        };
        debug!("Loaded {} entries", entries.len());

        Ok(Self {
            store,
            entries,
            clock,
        })
    }

    /// Entries in chronological order.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    /// Appends a new entry stamped with the current time and persists. Blank `intended` or
    /// `actual` is ignored without touching the store, which is reported as [None].
    pub fn log(&mut self, intended: &str, actual: &str, minutes: u32) -> Result<Option<&LogEntry>> {
        let Some(entry) = LogEntry::new(intended, actual, minutes, self.clock.time()) else {
            debug!("Ignoring incomplete entry {intended:?} / {actual:?}");
            return Ok(None);
        };

        info!("Logging {entry:?}");
        self.entries.push(entry);
        self.save()?;
        Ok(self.entries.last())
    }

    /// Drops every entry. Callers are expected to have asked the user first.
    pub fn clear(&mut self) -> Result<()> {
        info!("Clearing {} entries", self.entries.len());
        self.entries.clear();
        self.save()
    }

    /// Replaces the collection with the array in `text`. Anything that isn't a JSON array is
    /// rejected and leaves the collection as it was. Returns the amount of imported entries.
    pub fn import_json(&mut self, text: &str) -> Result<usize> {
        let value = serde_json::from_str::<serde_json::Value>(text).context("Invalid JSON file")?;
        if !value.is_array() {
            bail!("Invalid JSON file: expected a list of entries");
        }
        let entries = serde_json::from_value::<Vec<LogEntry>>(value).context("Invalid JSON file")?;

        info!("Importing {} entries", entries.len());
        self.entries = entries;
        self.save()?;
        Ok(self.entries.len())
    }

    /// The whole collection as pretty printed JSON.
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }

    fn save(&self) -> Result<()> {
        let text = serde_json::to_string(&self.entries)?;
        self.store.set(STORAGE_KEY, &text)
    }
}
