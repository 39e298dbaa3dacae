//! Error kinds surfaced by `AssociativeArray`.

use thiserror::Error;

/// Returned by `set` when the key is absent.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("cannot set a value for a null key")]
pub struct NullKeyError;

/// Returned by `get` when no live slot holds the key.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("key not found")]
pub struct KeyNotFoundError;

/// Either failure, for callers that mix `set` and `get` behind one `?`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssocError {
    #[error(transparent)]
    NullKey(#[from] NullKeyError),
    #[error(transparent)]
    KeyNotFound(#[from] KeyNotFoundError),
}
