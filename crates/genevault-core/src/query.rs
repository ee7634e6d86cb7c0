//! Query façade.
//!
//! Both query paths drain a state cursor into one JSON array response:
//! `{"Key":"<key>","Record":<raw-record-json>}` per entry, comma-separated.
//! The stored record bytes are embedded as-is, never re-encoded. The
//! cursor guard closes the underlying iterator on every exit path, whether
//! the loop completes, errors mid-scan, or the caller bails early.

use crate::{
    error::{ErrorOrigin, InternalError},
    ledger::{Cursor, LedgerTransaction},
    obs::{self, MetricsEvent},
    store::{Collection, map_ledger_error},
};

/// Inclusive-start/exclusive-end lexicographic key scan over a collection.
/// Empty bounds are unbounded. Index marker entries in the same collection
/// are visible to the scan; callers distinguish them by key shape.
pub fn get_by_range<T>(
    tx: &mut T,
    collection: Collection,
    start: &str,
    end: &str,
) -> Result<Vec<u8>, InternalError>
where
    T: LedgerTransaction + ?Sized,
{
    let iter = tx
        .get_private_data_by_range(collection.as_str(), start, end)
        .map_err(|err| map_ledger_error(err, ErrorOrigin::Query))?;

    drain_to_json_array(Cursor::new(iter))
}

/// Delegate a predicate query to the runtime's query engine and drain the
/// result cursor. Predicate evaluation is entirely the collaborator's;
/// this path only preserves cursor order and releases the cursor.
pub fn query_by_predicate<T>(
    tx: &mut T,
    collection: Collection,
    query: &str,
) -> Result<Vec<u8>, InternalError>
where
    T: LedgerTransaction + ?Sized,
{
    let iter = tx
        .get_private_data_query_result(collection.as_str(), query)
        .map_err(|err| map_ledger_error(err, ErrorOrigin::Query))?;

    drain_to_json_array(Cursor::new(iter))
}

/// Assemble the response array by incremental concatenation, one object
/// per entry. The guard owns the iterator, so an error return here still
/// closes it.
fn drain_to_json_array(mut cursor: Cursor<'_>) -> Result<Vec<u8>, InternalError> {
    let mut buffer = Vec::new();
    buffer.push(b'[');

    let mut rows: u64 = 0;
    while let Some(entry) = cursor
        .next_entry()
        .map_err(|err| map_ledger_error(err, ErrorOrigin::Query))?
    {
        if rows > 0 {
            buffer.push(b',');
        }
        buffer.extend_from_slice(b"{\"Key\":\"");
        buffer.extend_from_slice(entry.key.as_bytes());
        buffer.extend_from_slice(b"\",\"Record\":");
        buffer.extend_from_slice(&entry.value);
        buffer.push(b'}');
        rows += 1;
    }
    buffer.push(b']');

    obs::record(MetricsEvent::RowsStreamed { rows });

    Ok(buffer)
}

///
/// TESTS
///
