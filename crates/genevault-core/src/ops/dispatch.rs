use crate::{
    error::InternalError,
    ledger::LedgerTransaction,
    obs::{self, MetricsEvent, sink::OpKind},
    ops::{create, delete, query, read, transfer},
};

/// Route one named operation with positional arguments to its handler.
///
/// The mapping is fixed at compile time and queried immutably; dispatch
/// performs no validation of its own. An unknown name fails without
/// touching storage.
pub fn dispatch<T>(tx: &mut T, function: &str, args: &[String]) -> Result<Vec<u8>, InternalError>
where
    T: LedgerTransaction + ?Sized,
{
    let invoked = |kind: OpKind| obs::record(MetricsEvent::OpInvoked { kind });

    match function {
        "initGene" => {
            invoked(OpKind::Create);
            create::init_gene(tx, args)
        }
        "readGene" => {
            invoked(OpKind::Read);
            read::read_gene(tx, args)
        }
        "readGenePrivateDetails" => {
            invoked(OpKind::Read);
            read::read_gene_private_details(tx, args)
        }
        "transferGene" => {
            invoked(OpKind::Transfer);
            transfer::transfer_gene(tx, args)
        }
        "delete" => {
            invoked(OpKind::Delete);
            delete::delete_gene(tx, args)
        }
        "getGenesByRange" => {
            invoked(OpKind::RangeQuery);
            query::get_genes_by_range(tx, args)
        }
        "queryAgeingDrugs" => {
            invoked(OpKind::RichQuery);
            query::query_ageing_drugs(tx, args)
        }
        "queryLongetivityMapByGene" => {
            invoked(OpKind::RichQuery);
            query::query_longetivity_map_by_gene(tx, args)
        }
        _ => {
            obs::record(MetricsEvent::UnknownOperation);
            Err(InternalError::unknown_operation(function))
        }
    }
}
