use std::fmt;
use thiserror::Error as ThisError;

///
/// InternalError
///
/// Structured runtime error with a stable internal classification.
/// Every failure surfaces immediately to the caller; the ledger runtime
/// discards any partial writes when the invocation aborts, so no handler
/// retries or recovers locally.
///

#[derive(Debug, ThisError)]
#[error("{message}")]
pub struct InternalError {
    pub class: ErrorClass,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl InternalError {
    pub fn new(class: ErrorClass, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            class,
            origin,
            message: message.into(),
        }
    }

    /// Construct a transient-origin input rejection.
    pub(crate) fn input(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::Input, ErrorOrigin::Transient, message)
    }

    /// Construct a store-origin missing-key error.
    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::NotFound, ErrorOrigin::Store, message)
    }

    /// Construct a store-origin duplicate-key conflict.
    pub(crate) fn already_exists(name: &str) -> Self {
        Self::new(
            ErrorClass::AlreadyExists,
            ErrorOrigin::Store,
            format!("this gene already exists: {name}"),
        )
    }

    /// Construct a dispatch-origin unknown-operation error.
    pub(crate) fn unknown_operation(function: &str) -> Self {
        Self::new(
            ErrorClass::UnknownOperation,
            ErrorOrigin::Dispatch,
            format!("received unknown function invocation: {function}"),
        )
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.class, ErrorClass::NotFound)
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}:{}: {}", self.origin, self.class, self.message)
    }
}

///
/// ErrorClass
/// Internal error taxonomy for runtime classification.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    /// Missing, malformed, or empty required input.
    Input,
    /// Read, transfer, or delete target is absent.
    NotFound,
    /// Creation collided with an existing key.
    AlreadyExists,
    /// The runtime rejected access to a collection.
    AccessDenied,
    /// Document encode/decode failure.
    Serialize,
    /// Dispatch found no handler for the operation name.
    UnknownOperation,
    /// Collaborator failure the caller cannot remediate.
    Internal,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Input => "input",
            Self::NotFound => "not_found",
            Self::AlreadyExists => "already_exists",
            Self::AccessDenied => "access_denied",
            Self::Serialize => "serialize",
            Self::UnknownOperation => "unknown_operation",
            Self::Internal => "internal",
        };
        write!(f, "{label}")
    }
}

///
/// ErrorOrigin
/// Internal origin taxonomy for runtime classification.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorOrigin {
    Transient,
    Store,
    Index,
    Query,
    Serialize,
    Dispatch,
}

impl fmt::Display for ErrorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Transient => "transient",
            Self::Store => "store",
            Self::Index => "index",
            Self::Query => "query",
            Self::Serialize => "serialize",
            Self::Dispatch => "dispatch",
        };
        write!(f, "{label}")
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_not_found_tracks_class() {
        let err = InternalError::not_found("gene does not exist: Ron");
        assert!(err.is_not_found());

        let err = InternalError::input("name field must be a non-empty string");
        assert!(!err.is_not_found());
    }

    #[test]
    fn display_with_class_formats_origin_and_class() {
        let err = InternalError::new(
            ErrorClass::AccessDenied,
            ErrorOrigin::Store,
            "access denied to collection collectionGenes",
        );

        assert_eq!(
            err.display_with_class(),
            "store:access_denied: access denied to collection collectionGenes"
        );
    }
}
