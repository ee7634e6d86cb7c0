//! Range and predicate queries over the dispatch surface.

use crate::{
    error::ErrorClass,
    index::CompositeKey,
    ops::dispatch,
    test_support::{MemoryLedger, create_gene, gene_payload},
};

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

fn seeded_ledger() -> MemoryLedger {
    let mut ledger = MemoryLedger::new();
    create_gene(
        &mut ledger,
        &gene_payload(1, "Ana", "Basque", "ADRB2", 2, 31, "APOB", 40),
    );
    create_gene(
        &mut ledger,
        &gene_payload(2, "Bob", "French", "TP53", 4, 52, "BRCA1", 75),
    );
    create_gene(
        &mut ledger,
        &gene_payload(3, "Cara", "French", "ADRB2", 6, 45, "APOE", 60),
    );
    ledger
}

#[test]
fn range_query_is_ordered_start_inclusive_end_exclusive() {
    let mut ledger = seeded_ledger();

    let result =
        dispatch(&mut ledger, "getGenesByRange", &args(&["Ana", "Cara"])).expect("range query");
    let parsed: serde_json::Value = serde_json::from_slice(&result).expect("response json");
    let entries = parsed.as_array().expect("response array");

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["Key"], "Ana");
    assert_eq!(entries[0]["Record"]["gene"], "ADRB2");
    assert_eq!(entries[1]["Key"], "Bob");
    assert_eq!(entries[1]["Record"]["gene"], "TP53");
}

#[test]
fn unbounded_range_covers_markers_distinguishable_by_key_shape() {
    let mut ledger = seeded_ledger();

    let result = dispatch(&mut ledger, "getGenesByRange", &args(&["", ""])).expect("range query");
    let text = String::from_utf8(result).expect("utf8");

    // Three records plus three markers; the response length tracks the
    // stored entries exactly.
    assert_eq!(text.matches(r#"{"Key":""#).count(), 6);

    // Markers are recognizable by their composite-key shape.
    let marker = CompositeKey::gene_name("ADRB2", "Ana").expect("marker key");
    assert!(text.contains(marker.as_str()));
    assert!(CompositeKey::is_marker_key(marker.as_str()));
}

#[test]
fn range_query_rejects_wrong_arity() {
    let mut ledger = seeded_ledger();

    let err = dispatch(&mut ledger, "getGenesByRange", &args(&["Ana"])).unwrap_err();
    assert_eq!(err.class, ErrorClass::Input);
}

#[test]
fn verbatim_query_string_is_delegated_and_preserves_cursor_order() {
    let mut ledger = seeded_ledger();

    let query = r#"{"selector":{"docType":"gene","population":"French"}}"#;
    let result =
        dispatch(&mut ledger, "queryLongetivityMapByGene", &args(&[query])).expect("rich query");
    let parsed: serde_json::Value = serde_json::from_slice(&result).expect("response json");
    let entries = parsed.as_array().expect("response array");

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["Key"], "Bob");
    assert_eq!(entries[1]["Key"], "Cara");

    assert_eq!(ledger.last_query(), Some(query));
    assert_eq!(ledger.open_cursors(), 0);
}

#[test]
fn category_query_builds_lowercased_selector() {
    let mut ledger = seeded_ledger();

    let result = dispatch(&mut ledger, "queryAgeingDrugs", &args(&["BOB"])).expect("rich query");

    // No gene document carries an owner field, so nothing matches; the
    // selector itself is what this operation owns.
    assert_eq!(result, b"[]");
    assert_eq!(
        ledger.last_query(),
        Some(r#"{"selector":{"docType":"gene","owner":"bob"}}"#)
    );
}

#[test]
fn rich_query_rejects_missing_argument() {
    let mut ledger = seeded_ledger();

    let err = dispatch(&mut ledger, "queryLongetivityMapByGene", &[]).unwrap_err();
    assert_eq!(err.class, ErrorClass::Input);

    let err = dispatch(&mut ledger, "queryAgeingDrugs", &[]).unwrap_err();
    assert_eq!(err.class, ErrorClass::Input);
}

#[test]
fn query_cursors_never_leak() {
    let mut ledger = seeded_ledger();

    dispatch(&mut ledger, "getGenesByRange", &args(&["", ""])).expect("range query");
    dispatch(
        &mut ledger,
        "queryLongetivityMapByGene",
        &args(&[r#"{"selector":{"docType":"gene"}}"#]),
    )
    .expect("rich query");

    ledger.fail_cursor_after(1);
    let err = dispatch(&mut ledger, "getGenesByRange", &args(&["", ""])).unwrap_err();
    assert_eq!(err.class, ErrorClass::Internal);

    assert_eq!(ledger.open_cursors(), 0);
}
