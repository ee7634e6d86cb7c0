use crate::error::{ErrorClass, ErrorOrigin, InternalError};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error as ThisError;

///
/// SerializeError
///

#[derive(Debug, ThisError)]
pub enum SerializeError {
    #[error("serialize error: {0}")]
    Serialize(String),
    #[error("deserialize error: {0}")]
    Deserialize(String),
}

impl From<SerializeError> for InternalError {
    fn from(err: SerializeError) -> Self {
        Self::new(ErrorClass::Serialize, ErrorOrigin::Serialize, err.to_string())
    }
}

/// Serialize a document to the JSON bytes stored on the ledger.
///
/// Documents are kept as JSON so the collaborator's rich-query engine can
/// select on their fields and query responses can embed the stored bytes
/// without re-encoding.
pub fn serialize<T>(ty: &T) -> Result<Vec<u8>, SerializeError>
where
    T: Serialize,
{
    serde_json::to_vec(ty).map_err(|err| SerializeError::Serialize(err.to_string()))
}

/// Deserialize a document produced by [`serialize`].
pub fn deserialize<T>(bytes: &[u8]) -> Result<T, SerializeError>
where
    T: DeserializeOwned,
{
    serde_json::from_slice(bytes).map_err(|err| SerializeError::Deserialize(err.to_string()))
}
