use crate::{
    error::InternalError,
    ledger::LedgerTransaction,
    ops::single_arg,
    query::{get_by_range, query_by_predicate},
    store::Collection,
};

/// Range scan over the gene collection: `[startKey, endKey)` in the
/// store's lexicographic key order. Index markers in the collection are
/// visible to the scan and distinguishable by their key shape.
pub(crate) fn get_genes_by_range<T>(tx: &mut T, args: &[String]) -> Result<Vec<u8>, InternalError>
where
    T: LedgerTransaction + ?Sized,
{
    let [start, end] = args else {
        return Err(InternalError::input(
            "incorrect number of arguments: expecting start and end keys",
        ));
    };

    get_by_range(tx, Collection::Genes, start, end)
}

/// Rich query by category owner. The selector targets public record
/// documents; evaluation belongs to the runtime's query engine.
pub(crate) fn query_ageing_drugs<T>(tx: &mut T, args: &[String]) -> Result<Vec<u8>, InternalError>
where
    T: LedgerTransaction + ?Sized,
{
    let owner = single_arg(args, "an owner to query by")?.to_lowercase();
    let query = format!(r#"{{"selector":{{"docType":"gene","owner":"{owner}"}}}}"#);

    query_by_predicate(tx, Collection::Genes, &query)
}

/// Rich query with a caller-supplied query string, passed through to the
/// runtime's query engine verbatim.
pub(crate) fn query_longetivity_map_by_gene<T>(
    tx: &mut T,
    args: &[String],
) -> Result<Vec<u8>, InternalError>
where
    T: LedgerTransaction + ?Sized,
{
    let query = single_arg(args, "a query string")?;

    query_by_predicate(tx, Collection::Genes, query)
}
