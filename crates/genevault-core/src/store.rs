//! Partitioned store adapter.
//!
//! Uniform get/put/delete against named collections. Absence is a valid,
//! non-error result distinct from a failed read. The adapter performs no
//! buffering: all writes within one invocation become visible together at
//! commit, or not at all, courtesy of the runtime's transaction.

use crate::{
    error::{ErrorClass, ErrorOrigin, InternalError},
    ledger::{LedgerError, LedgerTransaction},
};
use std::fmt::{self, Display};

///
/// Collection
///
/// Access-scoped partition names. The runtime associates caller membership
/// with per-collection rights; this adapter only names the partitions.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Collection {
    /// Public records and their index markers.
    Genes,
    /// Restricted-visibility detail documents.
    GenePrivateDetails,
}

impl Collection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Genes => "collectionGenes",
            Self::GenePrivateDetails => "collectionGenesPrivateDetails",
        }
    }
}

impl Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Map a collaborator failure into the internal taxonomy, keeping the
/// origin of the call site that hit it.
pub(crate) fn map_ledger_error(err: LedgerError, origin: ErrorOrigin) -> InternalError {
    match err {
        LedgerError::AccessDenied { collection } => InternalError::new(
            ErrorClass::AccessDenied,
            origin,
            format!("access denied to collection {collection}"),
        ),
        LedgerError::Backend(message) => InternalError::new(
            ErrorClass::Internal,
            origin,
            format!("ledger backend failure: {message}"),
        ),
    }
}

///
/// PartitionStore
///
/// Store-origin view over the transaction context. Handlers use this for
/// record and detail documents; index marker maintenance goes through the
/// index module so failures carry the index origin.
///

pub struct PartitionStore<'a, T: LedgerTransaction + ?Sized> {
    tx: &'a mut T,
}

impl<'a, T: LedgerTransaction + ?Sized> PartitionStore<'a, T> {
    pub fn new(tx: &'a mut T) -> Self {
        Self { tx }
    }

    /// Read one document. `None` means the key is absent.
    pub fn get(
        &mut self,
        collection: Collection,
        key: &str,
    ) -> Result<Option<Vec<u8>>, InternalError> {
        self.tx
            .get_private_data(collection.as_str(), key)
            .map_err(|err| map_ledger_error(err, ErrorOrigin::Store))
    }

    /// Write one document under its key.
    pub fn put(
        &mut self,
        collection: Collection,
        key: &str,
        value: Vec<u8>,
    ) -> Result<(), InternalError> {
        self.tx
            .put_private_data(collection.as_str(), key, value)
            .map_err(|err| map_ledger_error(err, ErrorOrigin::Store))
    }

    /// Delete one document by key.
    pub fn delete(&mut self, collection: Collection, key: &str) -> Result<(), InternalError> {
        self.tx
            .delete_private_data(collection.as_str(), key)
            .map_err(|err| map_ledger_error(err, ErrorOrigin::Store))
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MemoryLedger;

    #[test]
    fn get_distinguishes_absence_from_failure() {
        let mut ledger = MemoryLedger::new();
        let mut store = PartitionStore::new(&mut ledger);

        let value = store.get(Collection::Genes, "missing").expect("read absent key");
        assert!(value.is_none());
    }

    #[test]
    fn put_then_get_round_trips() {
        let mut ledger = MemoryLedger::new();
        let mut store = PartitionStore::new(&mut ledger);

        store
            .put(Collection::Genes, "Ron", b"{\"docType\":\"gene\"}".to_vec())
            .expect("put");
        let value = store.get(Collection::Genes, "Ron").expect("get");
        assert_eq!(value.as_deref(), Some(b"{\"docType\":\"gene\"}".as_slice()));
    }

    #[test]
    fn collections_are_isolated() {
        let mut ledger = MemoryLedger::new();
        let mut store = PartitionStore::new(&mut ledger);

        store
            .put(Collection::Genes, "Ron", b"public".to_vec())
            .expect("put public");

        let value = store
            .get(Collection::GenePrivateDetails, "Ron")
            .expect("read other collection");
        assert!(value.is_none());
    }

    #[test]
    fn access_rejection_maps_to_access_denied() {
        let mut ledger = MemoryLedger::new();
        ledger.deny(Collection::Genes.as_str());
        let mut store = PartitionStore::new(&mut ledger);

        let err = store.get(Collection::Genes, "Ron").unwrap_err();
        assert_eq!(err.class, ErrorClass::AccessDenied);
        assert_eq!(err.origin, ErrorOrigin::Store);
    }

    #[test]
    fn delete_of_absent_key_is_not_an_error() {
        let mut ledger = MemoryLedger::new();
        let mut store = PartitionStore::new(&mut ledger);

        store
            .delete(Collection::Genes, "missing")
            .expect("delete absent key");
    }
}
