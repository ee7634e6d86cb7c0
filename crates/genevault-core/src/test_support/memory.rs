//! In-memory stand-in for the ledger execution environment.
//!
//! Ordered per-collection maps mirror the store's lexicographic key order.
//! Collections can be deny-listed to exercise access rejections, cursors
//! can be failed mid-scan, and open-cursor bookkeeping backs the leak
//! regressions. The rich-query path evaluates the common
//! `{"selector":{...}}` equality form so predicate tests have a working
//! engine to delegate to.

use crate::{
    ledger::{LedgerError, LedgerTransaction, StateEntry, StateIter},
    transient::TransientMap,
};
use std::{
    cell::Cell,
    collections::{BTreeMap, BTreeSet, VecDeque},
    rc::Rc,
};

///
/// MemoryLedger
///

pub(crate) struct MemoryLedger {
    transient: TransientMap,
    collections: BTreeMap<String, BTreeMap<String, Vec<u8>>>,
    denied: BTreeSet<String>,
    open_cursors: Rc<Cell<usize>>,
    cursor_fail_after: Option<usize>,
    last_query: Option<String>,
}

impl MemoryLedger {
    pub(crate) fn new() -> Self {
        Self {
            transient: TransientMap::new(),
            collections: BTreeMap::new(),
            denied: BTreeSet::new(),
            open_cursors: Rc::new(Cell::new(0)),
            cursor_fail_after: None,
            last_query: None,
        }
    }

    pub(crate) fn set_transient(&mut self, key: &str, payload: impl Into<Vec<u8>>) {
        self.transient.insert(key.to_string(), payload.into());
    }

    pub(crate) fn clear_transient(&mut self) {
        self.transient.clear();
    }

    /// Insert directly, bypassing access checks. Test seeding only.
    pub(crate) fn seed(&mut self, collection: &str, key: &str, value: &[u8]) {
        self.collections
            .entry(collection.to_string())
            .or_default()
            .insert(key.to_string(), value.to_vec());
    }

    pub(crate) fn deny(&mut self, collection: &str) {
        self.denied.insert(collection.to_string());
    }

    /// Error the next cursor after it has yielded `n` entries.
    pub(crate) fn fail_cursor_after(&mut self, n: usize) {
        self.cursor_fail_after = Some(n);
    }

    pub(crate) fn open_cursors(&self) -> usize {
        self.open_cursors.get()
    }

    pub(crate) fn entry_count(&self, collection: &str) -> usize {
        self.collections
            .get(collection)
            .map_or(0, BTreeMap::len)
    }

    pub(crate) fn raw(&self, collection: &str, key: &str) -> Option<Vec<u8>> {
        self.collections
            .get(collection)
            .and_then(|entries| entries.get(key))
            .cloned()
    }

    pub(crate) fn keys(&self, collection: &str) -> Vec<String> {
        self.collections
            .get(collection)
            .map(|entries| entries.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub(crate) fn last_query(&self) -> Option<&str> {
        self.last_query.as_deref()
    }

    fn check_access(&self, collection: &str) -> Result<(), LedgerError> {
        if self.denied.contains(collection) {
            return Err(LedgerError::AccessDenied {
                collection: collection.to_string(),
            });
        }
        Ok(())
    }

    fn open_cursor(&mut self, entries: VecDeque<StateEntry>) -> Box<dyn StateIter + '_> {
        self.open_cursors.set(self.open_cursors.get() + 1);

        Box::new(MemoryCursor {
            entries,
            open: Rc::clone(&self.open_cursors),
            fail_after: self.cursor_fail_after,
            yielded: 0,
            closed: false,
        })
    }
}

impl LedgerTransaction for MemoryLedger {
    fn transient(&self) -> &TransientMap {
        &self.transient
    }

    fn get_private_data(
        &mut self,
        collection: &str,
        key: &str,
    ) -> Result<Option<Vec<u8>>, LedgerError> {
        self.check_access(collection)?;

        Ok(self
            .collections
            .get(collection)
            .and_then(|entries| entries.get(key))
            .cloned())
    }

    fn put_private_data(
        &mut self,
        collection: &str,
        key: &str,
        value: Vec<u8>,
    ) -> Result<(), LedgerError> {
        self.check_access(collection)?;

        let entries = self.collections.entry(collection.to_string()).or_default();
        // The store defines an empty value as a delete, not a write.
        if value.is_empty() {
            entries.remove(key);
        } else {
            entries.insert(key.to_string(), value);
        }

        Ok(())
    }

    fn delete_private_data(&mut self, collection: &str, key: &str) -> Result<(), LedgerError> {
        self.check_access(collection)?;

        if let Some(entries) = self.collections.get_mut(collection) {
            entries.remove(key);
        }

        Ok(())
    }

    fn get_private_data_by_range(
        &mut self,
        collection: &str,
        start: &str,
        end: &str,
    ) -> Result<Box<dyn StateIter + '_>, LedgerError> {
        self.check_access(collection)?;

        let entries: VecDeque<StateEntry> = self
            .collections
            .get(collection)
            .map(|entries| {
                entries
                    .iter()
                    .filter(|(key, _)| start.is_empty() || key.as_str() >= start)
                    .filter(|(key, _)| end.is_empty() || key.as_str() < end)
                    .map(|(key, value)| StateEntry {
                        key: key.clone(),
                        value: value.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(self.open_cursor(entries))
    }

    fn get_private_data_query_result(
        &mut self,
        collection: &str,
        query: &str,
    ) -> Result<Box<dyn StateIter + '_>, LedgerError> {
        self.check_access(collection)?;
        self.last_query = Some(query.to_string());

        let parsed: serde_json::Value = serde_json::from_str(query)
            .map_err(|err| LedgerError::Backend(format!("invalid query: {err}")))?;
        let selector = parsed
            .get("selector")
            .and_then(serde_json::Value::as_object)
            .ok_or_else(|| LedgerError::Backend("query has no selector".to_string()))?
            .clone();

        let entries: VecDeque<StateEntry> = self
            .collections
            .get(collection)
            .map(|entries| {
                entries
                    .iter()
                    .filter(|(_, value)| {
                        // Non-document entries (index markers) are not
                        // indexed by the engine and never match.
                        let Ok(doc) = serde_json::from_slice::<serde_json::Value>(value) else {
                            return false;
                        };
                        selector
                            .iter()
                            .all(|(field, expected)| doc.get(field) == Some(expected))
                    })
                    .map(|(key, value)| StateEntry {
                        key: key.clone(),
                        value: value.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(self.open_cursor(entries))
    }
}

///
/// MemoryCursor
///

struct MemoryCursor {
    entries: VecDeque<StateEntry>,
    open: Rc<Cell<usize>>,
    fail_after: Option<usize>,
    yielded: usize,
    closed: bool,
}

impl StateIter for MemoryCursor {
    fn next_entry(&mut self) -> Result<Option<StateEntry>, LedgerError> {
        if self.closed {
            return Ok(None);
        }

        if let Some(limit) = self.fail_after {
            if self.yielded >= limit && !self.entries.is_empty() {
                return Err(LedgerError::Backend(
                    "injected cursor failure".to_string(),
                ));
            }
        }

        let entry = self.entries.pop_front();
        if entry.is_some() {
            self.yielded += 1;
        }

        Ok(entry)
    }

    fn close(&mut self) {
        if !self.closed {
            self.closed = true;
            self.open.set(self.open.get().saturating_sub(1));
        }
    }
}
