//! Shared payload builders for operation tests.

use crate::{ops::dispatch, test_support::MemoryLedger, transient::CREATE_KEY};

/// Build a creation payload in the external wire shape.
pub(crate) fn gene_payload(
    id: i64,
    name: &str,
    population: &str,
    gene: &str,
    size: i64,
    age: i64,
    varient: &str,
    price: i64,
) -> Vec<u8> {
    serde_json::json!({
        "id": id,
        "name": name,
        "population": population,
        "gene": gene,
        "size": size,
        "age": age,
        "varient": varient,
        "price": price,
    })
    .to_string()
    .into_bytes()
}

/// The canonical sample record.
pub(crate) fn ron_payload() -> Vec<u8> {
    gene_payload(11, "Ron", "French", "ADRB2", 5, 40, "APOB", 99)
}

/// Create one gene through the dispatch surface, panicking on failure so
/// tests read as arrange-act-assert.
pub(crate) fn create_gene(ledger: &mut MemoryLedger, payload: &[u8]) {
    ledger.set_transient(CREATE_KEY, payload.to_vec());
    dispatch(ledger, "initGene", &[]).expect("create gene");
    ledger.clear_transient();
}
