//! Collaborator boundary for the ledger execution environment.
//!
//! The runtime invokes one operation per transaction and supplies sandboxed
//! access to access-controlled state collections. Everything here is an
//! interface: commit/abort atomicity, collection membership rights, and
//! rich-query evaluation are owned by the runtime, not this crate.

use crate::transient::TransientMap;
use thiserror::Error as ThisError;

///
/// LedgerError
///
/// Failures surfaced by the runtime. Access rejections are distinct from
/// backend faults so callers can classify them.
///

#[derive(Debug, ThisError)]
pub enum LedgerError {
    #[error("access denied to collection {collection}")]
    AccessDenied { collection: String },

    #[error("ledger backend failure: {0}")]
    Backend(String),
}

///
/// StateEntry
///
/// One key/value pair yielded by a state cursor. The value holds the raw
/// document bytes exactly as stored.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StateEntry {
    pub key: String,
    pub value: Vec<u8>,
}

///
/// StateIter
///
/// Stateful handle over a sequence of query results, consumed
/// incrementally. `close` must run on every exit path; hold the iterator
/// through [`Cursor`] rather than using the box directly.
///

pub trait StateIter {
    /// Yield the next entry, or `None` once the sequence is exhausted.
    fn next_entry(&mut self) -> Result<Option<StateEntry>, LedgerError>;

    /// Release the underlying resource. Must be idempotent.
    fn close(&mut self);
}

///
/// LedgerTransaction
///
/// One atomic, transaction-scoped execution context. Writes are applied in
/// program order and become visible together at commit; the runtime
/// discards everything when the invocation aborts.
///

pub trait LedgerTransaction {
    /// Caller-supplied payloads that never enter the shared ledger history.
    fn transient(&self) -> &TransientMap;

    /// Read one key from a collection. Absence is `Ok(None)`, not an error.
    fn get_private_data(
        &mut self,
        collection: &str,
        key: &str,
    ) -> Result<Option<Vec<u8>>, LedgerError>;

    /// Write one key. An empty value is defined by the store as a delete.
    fn put_private_data(
        &mut self,
        collection: &str,
        key: &str,
        value: Vec<u8>,
    ) -> Result<(), LedgerError>;

    /// Delete one key. Deleting an absent key is not an error.
    fn delete_private_data(&mut self, collection: &str, key: &str) -> Result<(), LedgerError>;

    /// Lexicographic `[start, end)` scan over a collection's keys.
    /// An empty bound is unbounded on that side.
    fn get_private_data_by_range(
        &mut self,
        collection: &str,
        start: &str,
        end: &str,
    ) -> Result<Box<dyn StateIter + '_>, LedgerError>;

    /// Delegate a rich query to the runtime's query engine. The query
    /// string is opaque to this crate.
    fn get_private_data_query_result(
        &mut self,
        collection: &str,
        query: &str,
    ) -> Result<Box<dyn StateIter + '_>, LedgerError>;
}

///
/// Cursor
///
/// Scoped owner of a [`StateIter`]. Dropping the guard closes the
/// iterator, so normal completion, mid-scan errors, and early returns all
/// release the underlying cursor resource.
///

pub struct Cursor<'a> {
    iter: Box<dyn StateIter + 'a>,
}

impl<'a> Cursor<'a> {
    #[must_use]
    pub fn new(iter: Box<dyn StateIter + 'a>) -> Self {
        Self { iter }
    }

    pub fn next_entry(&mut self) -> Result<Option<StateEntry>, LedgerError> {
        self.iter.next_entry()
    }
}

impl Drop for Cursor<'_> {
    fn drop(&mut self) {
        self.iter.close();
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::Cell, rc::Rc};

    struct TrackedIter {
        remaining: usize,
        closed: Rc<Cell<bool>>,
    }

    impl StateIter for TrackedIter {
        fn next_entry(&mut self) -> Result<Option<StateEntry>, LedgerError> {
            if self.remaining == 0 {
                return Ok(None);
            }
            self.remaining -= 1;
            Ok(Some(StateEntry {
                key: "k".to_string(),
                value: b"{}".to_vec(),
            }))
        }

        fn close(&mut self) {
            self.closed.set(true);
        }
    }

    #[test]
    fn cursor_closes_on_drop_after_full_drain() {
        let closed = Rc::new(Cell::new(false));
        {
            let mut cursor = Cursor::new(Box::new(TrackedIter {
                remaining: 2,
                closed: Rc::clone(&closed),
            }));
            while cursor.next_entry().expect("next entry").is_some() {}
            assert!(!closed.get());
        }
        assert!(closed.get());
    }

    #[test]
    fn cursor_closes_on_early_exit() {
        let closed = Rc::new(Cell::new(false));
        {
            let mut cursor = Cursor::new(Box::new(TrackedIter {
                remaining: 10,
                closed: Rc::clone(&closed),
            }));
            let _ = cursor.next_entry().expect("next entry");
            // abandoned mid-scan
        }
        assert!(closed.get());
    }
}
