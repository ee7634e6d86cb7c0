use crate::{
    error::InternalError,
    index::{self, CompositeKey},
    ledger::LedgerTransaction,
    model::Gene,
    obs::{self, MetricsEvent},
    ops::no_args,
    serialize::{deserialize, serialize},
    store::{Collection, PartitionStore},
    transient::TransferGeneInput,
};

/// Reassign a record's category. Only the category field changes;
/// identifier, name, population, and size are rewritten as-is, and the
/// restricted details are untouched. The index marker moves with the
/// category so the (category, name) pairing always matches the stored
/// record.
pub(crate) fn transfer_gene<T>(tx: &mut T, args: &[String]) -> Result<Vec<u8>, InternalError>
where
    T: LedgerTransaction + ?Sized,
{
    no_args(args, "gene data")?;

    let input = TransferGeneInput::decode(tx.transient())?;

    let mut store = PartitionStore::new(tx);
    let bytes = store
        .get(Collection::Genes, &input.name)?
        .ok_or_else(|| InternalError::not_found(format!("gene does not exist: {}", input.name)))?;
    let mut gene: Gene = deserialize(&bytes)?;

    // Capture the old pairing before the category changes.
    let old_marker = CompositeKey::gene_name(&gene.gene, &gene.name)?;
    gene.gene = input.gene;
    let new_marker = CompositeKey::gene_name(&gene.gene, &gene.name)?;

    let bytes = serialize(&gene)?;
    store.put(Collection::Genes, &gene.name, bytes)?;

    if old_marker != new_marker {
        index::remove_marker(tx, Collection::Genes, &old_marker)?;
        index::write_marker(tx, Collection::Genes, &new_marker)?;
        obs::record(MetricsEvent::IndexDelta {
            inserts: 1,
            removes: 1,
        });
    }

    Ok(Vec::new())
}
