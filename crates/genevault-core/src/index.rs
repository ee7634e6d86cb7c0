//! Composite-key secondary index.
//!
//! Marker entries are ordinary key/value entries in the same collection as
//! the records they index: the key is a deterministic composition of the
//! index name and its parts, the value a single sentinel byte (an empty
//! value is defined by the store as a delete, so markers cannot be empty).
//! A range scan bounded by the category prefix yields every name under
//! that category in lexicographic order. Markers are never read for
//! content.

use crate::{
    error::{ErrorClass, ErrorOrigin, InternalError},
    ledger::LedgerTransaction,
    store::{Collection, map_ledger_error},
};
use std::fmt::{self, Display};
use thiserror::Error as ThisError;

/// Index name shared by the creation, transfer, and deletion paths.
/// All three must target the same key namespace or markers leak.
pub const GENE_NAME_INDEX: &str = "gene~name";

/// Delimiter between the namespace, index name, and each part. Also the
/// leading byte that keeps marker keys apart from record keys.
const DELIMITER: char = '\u{0}';

/// Sentinel marker payload.
pub const MARKER_VALUE: [u8; 1] = [0x00];

///
/// CompositeKeyError
///

#[derive(Debug, ThisError)]
pub enum CompositeKeyError {
    #[error("composite key part must not contain U+0000")]
    EmbeddedNul,
}

impl From<CompositeKeyError> for InternalError {
    fn from(err: CompositeKeyError) -> Self {
        Self::new(ErrorClass::Input, ErrorOrigin::Index, err.to_string())
    }
}

///
/// CompositeKey
///
/// Deterministic, order-sensitive composition of an index name and its
/// parts. Every part is delimiter-terminated, so distinct part lists can
/// never encode to the same key.
///

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct CompositeKey(String);

impl CompositeKey {
    pub fn new(index: &str, parts: &[&str]) -> Result<Self, CompositeKeyError> {
        if index.contains(DELIMITER) {
            return Err(CompositeKeyError::EmbeddedNul);
        }

        let mut key = String::with_capacity(
            2 + index.len() + parts.iter().map(|part| part.len() + 1).sum::<usize>(),
        );
        key.push(DELIMITER);
        key.push_str(index);
        key.push(DELIMITER);

        for part in parts {
            if part.contains(DELIMITER) {
                return Err(CompositeKeyError::EmbeddedNul);
            }
            key.push_str(part);
            key.push(DELIMITER);
        }

        Ok(Self(key))
    }

    /// Build the (category, name) pairing for one record. Order matters:
    /// category before name, so category-prefixed scans enumerate names.
    pub fn gene_name(gene: &str, name: &str) -> Result<Self, CompositeKeyError> {
        Self::new(GENE_NAME_INDEX, &[gene, name])
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Marker keys are recognizable by shape: they alone start with the
    /// namespace delimiter.
    #[must_use]
    pub fn is_marker_key(key: &str) -> bool {
        key.starts_with(DELIMITER)
    }

    /// Split a marker key back into its index name and parts. Returns
    /// `None` for keys that were not produced by [`CompositeKey::new`].
    #[must_use]
    pub fn parse(key: &str) -> Option<(&str, Vec<&str>)> {
        let rest = key.strip_prefix(DELIMITER)?;
        let mut segments: Vec<&str> = rest.split(DELIMITER).collect();

        // A well-formed key ends with a delimiter, leaving one empty tail.
        if segments.pop() != Some("") {
            return None;
        }
        if segments.is_empty() {
            return None;
        }

        let index = segments.remove(0);
        Some((index, segments))
    }
}

impl Display for CompositeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Self::parse(&self.0) {
            Some((index, parts)) => write!(f, "{index}({})", parts.join(", ")),
            None => write!(f, "<malformed composite key>"),
        }
    }
}

/// Write the marker entry alongside its record.
pub fn write_marker<T>(
    tx: &mut T,
    collection: Collection,
    key: &CompositeKey,
) -> Result<(), InternalError>
where
    T: LedgerTransaction + ?Sized,
{
    tx.put_private_data(collection.as_str(), key.as_str(), MARKER_VALUE.to_vec())
        .map_err(|err| map_ledger_error(err, ErrorOrigin::Index))
}

/// Remove the marker entry for a record being deleted or re-categorized.
pub fn remove_marker<T>(
    tx: &mut T,
    collection: Collection,
    key: &CompositeKey,
) -> Result<(), InternalError>
where
    T: LedgerTransaction + ?Sized,
{
    tx.delete_private_data(collection.as_str(), key.as_str())
        .map_err(|err| map_ledger_error(err, ErrorOrigin::Index))
}

///
/// TESTS
///
