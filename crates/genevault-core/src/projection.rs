//! Record projection.
//!
//! One validated creation input becomes two independently persistable
//! documents: the public record and the restricted details. Each is
//! serialized here so handlers write the exact bytes the projection
//! produced.

use crate::{
    error::InternalError,
    model::{DocType, Gene, GenePrivateDetails},
    serialize::serialize,
    transient::CreateGeneInput,
};

///
/// ProjectedRecord
///
/// Both projections of one creation input, each with its canonical
/// document bytes.
///

#[derive(Clone, Debug)]
pub struct ProjectedRecord {
    pub gene: Gene,
    pub details: GenePrivateDetails,
    pub gene_bytes: Vec<u8>,
    pub details_bytes: Vec<u8>,
}

/// Split a validated creation input into its public and restricted
/// projections. The only failure mode is serialization, which aborts the
/// operation.
pub fn project(input: &CreateGeneInput) -> Result<ProjectedRecord, InternalError> {
    let gene = Gene {
        doc_type: DocType::Gene,
        id: input.id,
        name: input.name.clone(),
        population: input.population.clone(),
        gene: input.gene.clone(),
        size: input.size,
    };

    let details = GenePrivateDetails {
        doc_type: DocType::GenePrivateDetails,
        name: input.name.clone(),
        age: input.age,
        varient: input.varient.clone(),
        price: input.price,
    };

    let gene_bytes = serialize(&gene)?;
    let details_bytes = serialize(&details)?;

    Ok(ProjectedRecord {
        gene,
        details,
        gene_bytes,
        details_bytes,
    })
}

///
/// TESTS
///
