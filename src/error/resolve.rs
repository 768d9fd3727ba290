use std::error::Error as StdError;

use super::{Error, HttpError, Kind, ResponseError};

/// Searches `err` for the first error which can render itself as an HTTP response.
///
/// The search is depth-first:
///
/// * a renderable error is returned as is,
/// * a context continues with its single cause,
/// * a group tries each member in order and returns the first success,
/// * an opaque error follows its `source()` chain, resuming the search at any link
///   which is an `Error` and accepting any link which is a `ResponseError`.
///
/// `None` means the error is opaque all the way down.
pub fn resolve(err: &Error) -> Option<&dyn HttpError> {
    match err.kind {
        Kind::Http(ref e) => Some(&**e),
        Kind::Context { ref source, .. } => resolve(source),
        Kind::Multiple(ref errors) => errors.iter().find_map(resolve),
        Kind::Opaque(ref e) => resolve_source_chain(&**e),
    }
}

fn resolve_source_chain<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a dyn HttpError> {
    let mut link = err;
    loop {
        if let Some(err) = link.downcast_ref::<Error>() {
            return resolve(err);
        }
        if let Some(err) = link.downcast_ref::<ResponseError>() {
            return Some(err);
        }
        if let Some(err) = link.downcast_ref::<&'static ResponseError>() {
            return Some(err);
        }
        link = link.source()?;
    }
}
