use crate::{
    error::InternalError,
    index::{self, CompositeKey},
    ledger::LedgerTransaction,
    model::Gene,
    obs::{self, MetricsEvent},
    ops::no_args,
    serialize::deserialize,
    store::{Collection, PartitionStore},
    transient::DeleteGeneInput,
};

/// Delete a record, its index marker, and its restricted details in one
/// invocation. The record is read first: the marker key needs the
/// category value current at deletion time.
pub(crate) fn delete_gene<T>(tx: &mut T, args: &[String]) -> Result<Vec<u8>, InternalError>
where
    T: LedgerTransaction + ?Sized,
{
    no_args(args, "gene name")?;

    let input = DeleteGeneInput::decode(tx.transient())?;

    let mut store = PartitionStore::new(tx);
    let bytes = store
        .get(Collection::Genes, &input.name)?
        .ok_or_else(|| InternalError::not_found(format!("gene does not exist: {}", input.name)))?;
    let gene: Gene = deserialize(&bytes)?;

    store.delete(Collection::Genes, &input.name)?;

    let marker = CompositeKey::gene_name(&gene.gene, &gene.name)?;
    index::remove_marker(tx, Collection::Genes, &marker)?;
    obs::record(MetricsEvent::IndexDelta {
        inserts: 0,
        removes: 1,
    });

    let mut store = PartitionStore::new(tx);
    store.delete(Collection::GenePrivateDetails, &input.name)?;

    Ok(Vec::new())
}
