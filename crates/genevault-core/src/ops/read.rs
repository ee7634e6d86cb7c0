use crate::{
    error::InternalError,
    ledger::LedgerTransaction,
    ops::single_arg,
    store::{Collection, PartitionStore},
};

/// Read the public record document by name, returning the stored bytes.
pub(crate) fn read_gene<T>(tx: &mut T, args: &[String]) -> Result<Vec<u8>, InternalError>
where
    T: LedgerTransaction + ?Sized,
{
    let name = single_arg(args, "name of the gene to query")?;

    PartitionStore::new(tx)
        .get(Collection::Genes, name)?
        .ok_or_else(|| InternalError::not_found(format!("gene does not exist: {name}")))
}

/// Read the restricted detail document by name. The runtime rejects the
/// read outright when the caller lacks rights to the details collection.
pub(crate) fn read_gene_private_details<T>(
    tx: &mut T,
    args: &[String],
) -> Result<Vec<u8>, InternalError>
where
    T: LedgerTransaction + ?Sized,
{
    let name = single_arg(args, "name of the gene to query")?;

    PartitionStore::new(tx)
        .get(Collection::GenePrivateDetails, name)?
        .ok_or_else(|| {
            InternalError::not_found(format!("gene private details does not exist: {name}"))
        })
}
