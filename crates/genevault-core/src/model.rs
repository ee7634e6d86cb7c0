//! Stored document shapes.
//!
//! Both projections of one logical record. They share the display name as
//! key but live in different collections; correlation is by key equality
//! only, never by structural pointer.

use serde::{Deserialize, Serialize};

///
/// DocType
///
/// Storage-polymorphism discriminator stamped on every stored document.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum DocType {
    #[serde(rename = "gene")]
    Gene,
    #[serde(rename = "genePrivateDetails")]
    GenePrivateDetails,
}

///
/// Gene
///
/// Public projection, persisted in the gene collection keyed by `name`.
/// `id` is immutable once set; `gene` (the category) is mutable via
/// transfer only.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Gene {
    #[serde(rename = "docType")]
    pub doc_type: DocType,
    pub id: i64,
    pub name: String,
    pub population: String,
    pub gene: String,
    pub size: i64,
}

///
/// GenePrivateDetails
///
/// Restricted projection, persisted in the private-details collection
/// under the same `name` key. `varient` is the spelling callers send on
/// the wire.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GenePrivateDetails {
    #[serde(rename = "docType")]
    pub doc_type: DocType,
    pub name: String,
    pub age: i64,
    pub varient: String,
    pub price: i64,
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialize::{deserialize, serialize};

    #[test]
    fn gene_serializes_with_doc_type_discriminator() {
        let gene = Gene {
            doc_type: DocType::Gene,
            id: 11,
            name: "Ron".to_string(),
            population: "French".to_string(),
            gene: "ADRB2".to_string(),
            size: 5,
        };

        let bytes = serialize(&gene).expect("serialize gene");
        assert_eq!(
            String::from_utf8(bytes).expect("utf8"),
            r#"{"docType":"gene","id":11,"name":"Ron","population":"French","gene":"ADRB2","size":5}"#
        );
    }

    #[test]
    fn private_details_serializes_with_doc_type_discriminator() {
        let details = GenePrivateDetails {
            doc_type: DocType::GenePrivateDetails,
            name: "Ron".to_string(),
            age: 40,
            varient: "APOB".to_string(),
            price: 99,
        };

        let bytes = serialize(&details).expect("serialize details");
        assert_eq!(
            String::from_utf8(bytes).expect("utf8"),
            r#"{"docType":"genePrivateDetails","name":"Ron","age":40,"varient":"APOB","price":99}"#
        );
    }

    #[test]
    fn gene_round_trips_through_stored_bytes() {
        let gene = Gene {
            doc_type: DocType::Gene,
            id: 7,
            name: "Ana".to_string(),
            population: "Basque".to_string(),
            gene: "TP53".to_string(),
            size: 3,
        };

        let bytes = serialize(&gene).expect("serialize gene");
        let decoded: Gene = deserialize(&bytes).expect("deserialize gene");
        assert_eq!(decoded, gene);
    }
}
