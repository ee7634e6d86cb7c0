//! Dispatch routing and operation metrics.

use crate::{
    error::{ErrorClass, ErrorOrigin},
    obs::metrics,
    ops::dispatch,
    test_support::{MemoryLedger, create_gene, ron_payload},
};

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

#[test]
fn unknown_operation_is_rejected_without_touching_storage() {
    let mut ledger = MemoryLedger::new();

    let err = dispatch(&mut ledger, "initMarble", &[]).unwrap_err();

    assert_eq!(err.class, ErrorClass::UnknownOperation);
    assert_eq!(err.origin, ErrorOrigin::Dispatch);
    assert_eq!(ledger.entry_count("collectionGenes"), 0);
}

#[test]
fn arity_failures_are_input_class() {
    let mut ledger = MemoryLedger::new();

    let err = dispatch(&mut ledger, "readGene", &[]).unwrap_err();
    assert_eq!(err.class, ErrorClass::Input);

    let err = dispatch(&mut ledger, "readGene", &args(&["a", "b"])).unwrap_err();
    assert_eq!(err.class, ErrorClass::Input);
}

#[test]
fn dispatch_records_operation_metrics() {
    metrics::reset();

    let mut ledger = MemoryLedger::new();
    create_gene(&mut ledger, &ron_payload());
    dispatch(&mut ledger, "readGene", &args(&["Ron"])).expect("read gene");
    dispatch(&mut ledger, "getGenesByRange", &args(&["A", "Z"])).expect("range query");
    let _ = dispatch(&mut ledger, "nope", &[]);

    let counters = metrics::snapshot();
    assert_eq!(counters.creates, 1);
    assert_eq!(counters.reads, 1);
    assert_eq!(counters.range_queries, 1);
    assert_eq!(counters.unknown_operations, 1);
    assert_eq!(counters.index_inserts, 1);
    // The bounded scan streamed the one record between A and Z.
    assert_eq!(counters.rows_streamed, 1);

    metrics::reset();
}
