//! Test-only collaborator doubles and fixtures.

mod fixtures;
mod memory;

pub(crate) use fixtures::{create_gene, gene_payload, ron_payload};
pub(crate) use memory::MemoryLedger;
