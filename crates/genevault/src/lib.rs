//! Public surface for the GeneVault confidential record store.
//!
//! The crate validates transient gene payloads, splits them into public
//! and restricted projections persisted under separate access-controlled
//! collections, maintains a composite-key marker index, and answers range
//! and predicate queries. The ledger runtime that hosts an invocation
//! implements [`LedgerTransaction`]; everything else is this crate.
//!
//! Callers route operations through [`invoke`]; internal failures are
//! converted into the public [`Error`] taxonomy at this boundary.

mod error;

pub use error::{Error, ErrorKind, ErrorOrigin};
pub use genevault_core::{
    index::{CompositeKey, GENE_NAME_INDEX},
    ledger::{Cursor, LedgerError, LedgerTransaction, StateEntry, StateIter},
    model::{DocType, Gene, GenePrivateDetails},
    obs,
    transient::TransientMap,
};

use genevault_core::ops;

/// Route one named operation with positional arguments against the
/// caller's transaction context. Returns the response payload on success;
/// an empty payload means success with nothing to report.
pub fn invoke<T>(tx: &mut T, function: &str, args: &[String]) -> Result<Vec<u8>, Error>
where
    T: LedgerTransaction + ?Sized,
{
    ops::dispatch(tx, function, args).map_err(Error::from)
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        DocType, Error, ErrorKind, Gene, GenePrivateDetails, LedgerTransaction, TransientMap,
        invoke,
    };
}

///
/// TESTS
///
