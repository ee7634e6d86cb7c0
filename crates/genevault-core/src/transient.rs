//! Transient input decode and validation.
//!
//! Operation payloads arrive as named byte blobs outside the shared ledger
//! history; only the access-restricted collections ever see their content.
//! Each operation decodes its required key into a typed input eagerly and
//! validates it before any storage access. Pure decode + validate, no side
//! effects.

use crate::error::InternalError;
use derive_more::{Deref, DerefMut};
use serde::{Deserialize, de::DeserializeOwned};
use std::collections::BTreeMap;

/// Transient key carrying the creation payload.
pub const CREATE_KEY: &str = "gene";
/// Transient key carrying the transfer payload.
pub const TRANSFER_KEY: &str = "gene_name";
/// Transient key carrying the deletion payload.
pub const DELETE_KEY: &str = "gene_delete";

///
/// TransientMap
///
/// Named byte payloads supplied by the caller for one invocation.
///

#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct TransientMap(BTreeMap<String, Vec<u8>>);

impl TransientMap {
    #[must_use]
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }
}

impl FromIterator<(String, Vec<u8>)> for TransientMap {
    fn from_iter<I: IntoIterator<Item = (String, Vec<u8>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

///
/// CreateGeneInput
///
/// Full creation payload. Public and restricted fields arrive together and
/// are split by the projection step after validation.
///

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateGeneInput {
    pub id: i64,
    pub name: String,
    pub population: String,
    pub gene: String,
    pub size: i64,
    pub age: i64,
    pub varient: String,
    pub price: i64,
}

impl CreateGeneInput {
    pub fn decode(map: &TransientMap) -> Result<Self, InternalError> {
        let input: Self = decode_payload(map, CREATE_KEY)?;
        input.validate()?;

        Ok(input)
    }

    fn validate(&self) -> Result<(), InternalError> {
        if self.id <= 0 {
            return Err(InternalError::input("id field must be a positive integer"));
        }
        if self.name.is_empty() {
            return Err(InternalError::input("name field must be a non-empty string"));
        }
        if self.population.is_empty() {
            return Err(InternalError::input(
                "population field must be a non-empty string",
            ));
        }
        if self.gene.is_empty() {
            return Err(InternalError::input("gene field must be a non-empty string"));
        }
        if self.size <= 0 {
            return Err(InternalError::input("size field must be a positive integer"));
        }
        if self.age <= 0 {
            return Err(InternalError::input("age field must be a positive integer"));
        }
        if self.varient.is_empty() {
            return Err(InternalError::input(
                "varient field must be a non-empty string",
            ));
        }
        if self.price <= 0 {
            return Err(InternalError::input("price field must be a positive integer"));
        }

        Ok(())
    }
}

///
/// TransferGeneInput
///
/// Category reassignment payload: the record to move and its new category.
///

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct TransferGeneInput {
    pub gene: String,
    pub name: String,
}

impl TransferGeneInput {
    pub fn decode(map: &TransientMap) -> Result<Self, InternalError> {
        let input: Self = decode_payload(map, TRANSFER_KEY)?;

        if input.gene.is_empty() {
            return Err(InternalError::input("gene field must be a non-empty string"));
        }
        if input.name.is_empty() {
            return Err(InternalError::input("name field must be a non-empty string"));
        }

        Ok(input)
    }
}

///
/// DeleteGeneInput
///

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct DeleteGeneInput {
    pub name: String,
}

impl DeleteGeneInput {
    pub fn decode(map: &TransientMap) -> Result<Self, InternalError> {
        let input: Self = decode_payload(map, DELETE_KEY)?;

        if input.name.is_empty() {
            return Err(InternalError::input("name field must be a non-empty string"));
        }

        Ok(input)
    }
}

/// Fetch a required transient payload, rejecting absent or empty values.
fn require_payload<'a>(map: &'a TransientMap, key: &str) -> Result<&'a [u8], InternalError> {
    let Some(payload) = map.get(key) else {
        return Err(InternalError::input(format!(
            "{key} must be a key in the transient map"
        )));
    };

    if payload.is_empty() {
        return Err(InternalError::input(format!(
            "{key} value in the transient map must be a non-empty JSON string"
        )));
    }

    Ok(payload)
}

/// Decode a required transient payload into its typed input. Decode
/// failures are input errors; storage is never touched on this path.
fn decode_payload<T>(map: &TransientMap, key: &str) -> Result<T, InternalError>
where
    T: DeserializeOwned,
{
    let payload = require_payload(map, key)?;

    serde_json::from_slice(payload).map_err(|_| {
        InternalError::input(format!(
            "failed to decode JSON of: {}",
            String::from_utf8_lossy(payload)
        ))
    })
}

///
/// TESTS
///
