use crate::{
    error::InternalError,
    index::{self, CompositeKey},
    ledger::LedgerTransaction,
    obs::{self, MetricsEvent},
    ops::no_args,
    projection,
    store::{Collection, PartitionStore},
    transient::CreateGeneInput,
};

/// Create a gene record: both projections plus the index marker, all
/// within one transaction-scoped invocation. Validation and the duplicate
/// check complete before the first write.
pub(crate) fn init_gene<T>(tx: &mut T, args: &[String]) -> Result<Vec<u8>, InternalError>
where
    T: LedgerTransaction + ?Sized,
{
    no_args(args, "gene data")?;

    let input = CreateGeneInput::decode(tx.transient())?;
    let projected = projection::project(&input)?;

    let mut store = PartitionStore::new(tx);

    // Display names are unique per collection; duplicates are rejected
    // before any write.
    if store.get(Collection::Genes, &input.name)?.is_some() {
        return Err(InternalError::already_exists(&input.name));
    }

    store.put(Collection::Genes, &input.name, projected.gene_bytes)?;
    store.put(
        Collection::GenePrivateDetails,
        &input.name,
        projected.details_bytes,
    )?;

    // The marker pairs the record's current category with its name so
    // category-prefixed range scans enumerate names in order.
    let marker = CompositeKey::gene_name(&projected.gene.gene, &projected.gene.name)?;
    index::write_marker(tx, Collection::Genes, &marker)?;
    obs::record(MetricsEvent::IndexDelta {
        inserts: 1,
        removes: 0,
    });

    Ok(Vec::new())
}
