//! AssociativeArray: unsorted slot vector with linear-scan lookup.

use crate::error::{KeyNotFoundError, NullKeyError};
use core::borrow::Borrow;
use core::fmt;
use log::{debug, trace};

/// Number of slots a container created with `new` starts with.
pub const DEFAULT_CAPACITY: usize = 16;

#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// `None` is an empty slot: never used, or freed by `remove`.
type Slot<K, V> = Option<Entry<K, V>>;

/// A map from unique keys to values stored in an unsorted vector of slots.
///
/// Every lookup is a linear scan comparing keys with `Eq`; there is no
/// hashing and no ordering. Capacity doubles when a new key finds no empty
/// slot and never shrinks. Slots freed by `remove` are reused by later
/// inserts.
pub struct AssociativeArray<K, V> {
    slots: Vec<Slot<K, V>>,
    size: usize, // number of live slots
}

impl<K, V> AssociativeArray<K, V>
where
    K: Eq,
{
    /// Create an empty container with `DEFAULT_CAPACITY` slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty container with `capacity` slots. Growth doubles
    /// from here; a zero capacity becomes one slot on the first insert.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots,
            size: 0,
        }
    }

    /// Associate `value` with `key`, overwriting any previous value.
    ///
    /// An absent key (`None`) is rejected before anything else happens.
    /// A new key goes into the first empty slot, growing the container
    /// first if every slot is live.
    pub fn set(&mut self, key: impl Into<Option<K>>, value: V) -> Result<(), NullKeyError> {
        let key = key.into().ok_or(NullKeyError)?;

        if let Some(index) = self.locate(&key) {
            if let Some(entry) = self.slots[index].as_mut() {
                entry.value = value;
                trace!("overwrote value in slot {}", index);
                return Ok(());
            }
        }

        let index = match self.first_empty() {
            Some(index) => index,
            None => {
                // Every existing slot is live, so the first new one is free.
                let index = self.slots.len();
                self.grow();
                index
            }
        };
        self.slots[index] = Some(Entry { key, value });
        self.size += 1;
        trace!("placed new entry in slot {} ({} live)", index, self.size);
        Ok(())
    }

    /// The value associated with `key`.
    pub fn get<Q>(&self, key: &Q) -> Result<&V, KeyNotFoundError>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.locate(key)
            .and_then(|index| self.slots[index].as_ref())
            .map(|entry| &entry.value)
            .ok_or(KeyNotFoundError)
    }

    /// Whether a live slot holds `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.locate(key).is_some()
    }

    /// Remove `key` and hand back its value. A missing key is a no-op.
    /// The freed slot stays allocated and is reused by a later `set`.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        let index = self.locate(key)?;
        let entry = self.slots[index].take()?;
        self.size -= 1;
        trace!("freed slot {} ({} live)", index, self.size);
        Some(entry.value)
    }

    /// Index of the first live slot whose key equals `key`.
    fn locate<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.slots.iter().position(|slot| match slot {
            Some(entry) => entry.key.borrow() == key,
            None => false,
        })
    }

    fn first_empty(&self) -> Option<usize> {
        if self.size == self.slots.len() {
            return None;
        }
        self.slots.iter().position(Option::is_none)
    }

    /// Double the slot count. Existing slots keep their position.
    fn grow(&mut self) {
        let old = self.slots.len();
        let new = if old == 0 { 1 } else { old * 2 };
        self.slots.resize_with(new, || None);
        debug!(
            "associative array grew from {} to {} slots ({} live)",
            old, new, self.size
        );
    }
}

impl<K, V> AssociativeArray<K, V> {
    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of allocated slots, live or empty.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Live entries in slot order.
    pub(crate) fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.slots
            .iter()
            .flatten()
            .map(|entry| (&entry.key, &entry.value))
    }
}

impl<K, V> Default for AssociativeArray<K, V>
where
    K: Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

/// The copy has the same capacity and the same key/value pairs. Pairs are
/// re-inserted one by one, so they are packed into the leading slots and
/// tombstones in the source are not reproduced.
impl<K, V> Clone for AssociativeArray<K, V>
where
    K: Eq + Clone,
    V: Clone,
{
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.capacity());
        trace!("cloning {} entries into {} slots", self.size, copy.capacity());
        for (key, value) in self.entries() {
            // Keys are present and unique, so this neither fails nor grows.
            if let Err(e) = copy.set(key.clone(), value.clone()) {
                trace!("skipped entry while cloning: {}", e);
            }
        }
        copy
    }
}

impl<K, V> fmt::Debug for AssociativeArray<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries()).finish()
    }
}

/// Renders `{K0:V0, K1:V1, ..., Kn:Vn}` over live entries in slot order.
impl<K, V> fmt::Display for AssociativeArray<K, V>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.entries().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}:{}", key, value)?;
        }
        f.write_str("}")
    }
}
