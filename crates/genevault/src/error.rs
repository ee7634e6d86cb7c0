use genevault_core::error::{
    ErrorClass as CoreErrorClass, ErrorOrigin as CoreErrorOrigin, InternalError,
};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// Error
/// Public error type with a stable kind + origin taxonomy. This is the
/// structured failure response callers receive; the runtime discards any
/// partial writes when an invocation surfaces one.
///

#[derive(Debug, Deserialize, Serialize, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            kind,
            origin,
            message: message.into(),
        }
    }
}

impl From<InternalError> for Error {
    fn from(err: InternalError) -> Self {
        Self::new(err.class.into(), err.origin.into(), err.message)
    }
}

///
/// ErrorKind
/// Public error taxonomy for callers.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
    /// Missing, malformed, or empty required input.
    Input,

    /// Read, transfer, or delete target does not exist.
    NotFound,

    /// Creation collided with an existing display name.
    AlreadyExists,

    /// The ledger runtime rejected access to a collection.
    AccessDenied,

    /// Document encode/decode failure.
    Serialize,

    /// No handler is mapped to the operation name.
    UnknownOperation,

    /// The caller cannot remediate this.
    Internal,
}

impl From<CoreErrorClass> for ErrorKind {
    fn from(class: CoreErrorClass) -> Self {
        match class {
            CoreErrorClass::Input => Self::Input,
            CoreErrorClass::NotFound => Self::NotFound,
            CoreErrorClass::AlreadyExists => Self::AlreadyExists,
            CoreErrorClass::AccessDenied => Self::AccessDenied,
            CoreErrorClass::Serialize => Self::Serialize,
            CoreErrorClass::UnknownOperation => Self::UnknownOperation,
            CoreErrorClass::Internal => Self::Internal,
        }
    }
}

///
/// ErrorOrigin
/// Public origin taxonomy for callers.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ErrorOrigin {
    Transient,
    Store,
    Index,
    Query,
    Serialize,
    Dispatch,
}

impl From<CoreErrorOrigin> for ErrorOrigin {
    fn from(origin: CoreErrorOrigin) -> Self {
        match origin {
            CoreErrorOrigin::Transient => Self::Transient,
            CoreErrorOrigin::Store => Self::Store,
            CoreErrorOrigin::Index => Self::Index,
            CoreErrorOrigin::Query => Self::Query,
            CoreErrorOrigin::Serialize => Self::Serialize,
            CoreErrorOrigin::Dispatch => Self::Dispatch,
        }
    }
}

///
/// TESTS
///
