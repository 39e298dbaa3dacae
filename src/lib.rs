//! assoc-array: a generic associative array backed by an unsorted,
//! growable vector of slots instead of a hash table.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: the simplest possible map for any `K: Eq`, trading lookup speed
//!   for a storage layout that is easy to reason about.
//! - Layout: `Vec<Option<Entry<K, V>>>` plus a live-entry count. Each slot
//!   is live (`Some`) or empty (`None`). Empty slots are either unused
//!   trailing capacity or tombstones left by `remove`.
//! - One primitive: every operation is built on `locate`, a linear scan
//!   returning the index of the first live slot with an equal key.
//!
//! Constraints
//! - Keys are unique; `set` on an existing key overwrites in place.
//! - `len() <= capacity()`; `len()` equals the number of live slots.
//! - Capacity only grows, by doubling, and only when a new key meets a
//!   container with no empty slot. Growth appends empty slots and never
//!   moves an entry.
//! - New keys take the first empty slot in index order, so tombstones are
//!   reused before trailing capacity.
//! - Slot order carries no meaning beyond scan order; it is what `Display`
//!   and `Debug` print.
//!
//! Errors
//! - `set` rejects an absent key with `NullKeyError`.
//! - `get` reports a missing key with `KeyNotFoundError`.
//! - `contains_key` and `remove` never fail; `locate` returns `Option` and
//!   they branch on it.
//!
//! Threading
//! - No internal synchronization or interior mutability. The container is
//!   `Send`/`Sync` when `K` and `V` are; concurrent mutation needs external
//!   locking such as a `Mutex`.
//! - Scans call `K: Eq`. Read-only lookups from inside `eq` are fine; the
//!   borrow checker rules out mutation during a scan.
//!
//! Notes and non-goals
//! - No hashing, no sorting, no persistence.
//! - No public iterator; entries are walked only for `Clone`, `Debug` and
//!   `Display`.
//! - `Clone` preserves capacity and pairs but packs entries, so tombstones
//!   of the source are not reproduced.
//! - Diagnostics go through the `log` facade; nothing is logged unless the
//!   application installs a logger.

mod assoc_array;
mod assoc_array_proptest;
pub mod error;

// Public surface
pub use assoc_array::{AssociativeArray, DEFAULT_CAPACITY};
pub use error::{AssocError, KeyNotFoundError, NullKeyError};
