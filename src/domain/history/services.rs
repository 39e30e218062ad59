use super::{entities::HistoryList, repositories::KeyValueStore};
use crate::domain::{
    errors::{HistoryError, HistoryResult, StorageError},
    logging::LogComponent,
    pricing::PricedResult,
};
use crate::{log_debug, log_warn};

/// Key the history has always been stored under.
pub const HISTORY_STORAGE_KEY: &str = "priceHistory";

/// Domain service - owns the in-memory history and its persisted copy.
///
/// `record` and `load` are the only mutators.
pub struct HistoryStore<S: KeyValueStore> {
    storage: S,
    key: String,
    entries: HistoryList,
}

impl<S: KeyValueStore> HistoryStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, HISTORY_STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            entries: HistoryList::new(),
        }
    }

    /// Prepend `result`, trim to capacity and persist the trimmed list.
    ///
    /// The in-memory list is updated even when persisting fails.
    pub fn record(&mut self, result: PricedResult) -> HistoryResult<()> {
        self.entries.prepend(result);

        let serialized = serde_json::to_string(&self.entries)
            .map_err(|e| HistoryError::Storage(StorageError::Write(e.to_string())))?;

        if let Err(e) = self.storage.set(&self.key, &serialized) {
            log_warn!(
                LogComponent::Domain("HistoryStore"),
                "could not persist {} entries: {}",
                self.entries.len(),
                e
            );
            return Err(HistoryError::Storage(e));
        }

        log_debug!(
            LogComponent::Domain("HistoryStore"),
            "persisted {} entries under '{}'",
            self.entries.len(),
            self.key
        );
        Ok(())
    }

    /// Replace the in-memory list with the persisted one.
    ///
    /// Absent key yields an empty list. On error the in-memory list is left
    /// as it was.
    pub fn load(&mut self) -> HistoryResult<&HistoryList> {
        let loaded = match self.storage.get(&self.key)? {
            None => HistoryList::new(),
            Some(raw) => {
                let stored: Vec<PricedResult> =
                    serde_json::from_str(&raw).map_err(|e| HistoryError::Corrupt(e.to_string()))?;
                HistoryList::from_entries(stored)
            }
        };

        log_debug!(
            LogComponent::Domain("HistoryStore"),
            "loaded {} entries from '{}'",
            loaded.len(),
            self.key
        );
        self.entries = loaded;
        Ok(&self.entries)
    }

    /// `load`, falling back to an empty history on corrupt or unreadable storage.
    pub fn load_or_default(&mut self) -> &HistoryList {
        let failure = self.load().err();
        if let Some(e) = failure {
            log_warn!(
                LogComponent::Domain("HistoryStore"),
                "discarding stored history: {}",
                e
            );
            self.entries = HistoryList::new();
        }
        &self.entries
    }

    pub fn entries(&self) -> &HistoryList {
        &self.entries
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Direct access to the backend, bypassing the in-memory list.
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}
