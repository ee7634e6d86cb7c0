//! Operation handlers and the dispatch entry point.
//!
//! Handlers own all validation and storage access; dispatch is thin
//! routing. Every handler returns the response payload bytes or fails the
//! whole invocation on first error.

mod create;
mod delete;
mod dispatch;
mod query;
mod read;
mod transfer;

#[cfg(test)]
mod tests;

pub use dispatch::dispatch;

use crate::error::InternalError;

/// Extract the single positional argument an operation expects.
pub(crate) fn single_arg<'a>(args: &'a [String], what: &str) -> Result<&'a str, InternalError> {
    match args {
        [value] => Ok(value),
        _ => Err(InternalError::input(format!(
            "incorrect number of arguments: expecting {what}"
        ))),
    }
}

/// Reject positional arguments on operations whose payload rides the
/// transient map so it never lands in the shared ledger history.
pub(crate) fn no_args(args: &[String], what: &str) -> Result<(), InternalError> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(InternalError::input(format!(
            "incorrect number of arguments: {what} must be passed in the transient map"
        )))
    }
}
