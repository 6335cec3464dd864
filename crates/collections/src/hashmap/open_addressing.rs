use std::{fmt, iter::FusedIterator};

use log::{debug, trace};

use super::{
    DEFAULT_CAPACITY, HashFunction, OPEN_ADDRESSING_LOAD_LIMIT, StringMap, hash_function_1,
    prime::{is_prime, next_prime},
};

/// A key/value record stored in an open addressing slot.
///
/// Removal does not clear the slot, it flips `is_tombstone`
/// so that probe walks for other keys keep going past it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashEntry<V> {
    key: String,
    value: V,
    is_tombstone: bool,
}

impl<V> HashEntry<V> {
    pub fn new<S: Into<String>>(key: S, value: V) -> Self {
        Self {
            key: key.into(),
            value,
            is_tombstone: false,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn is_tombstone(&self) -> bool {
        self.is_tombstone
    }

    fn is_live_with(&self, key: &str) -> bool {
        !self.is_tombstone && self.key == key
    }
}

impl<V: fmt::Display> fmt::Display for HashEntry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "K: {} V: {} TS: {}",
            self.key, self.value, self.is_tombstone
        )
    }
}

#[derive(Debug, Clone)]
enum Slot<V> {
    /// Never written since the table was built or cleared
    Empty,
    Occupied(HashEntry<V>),
}

/// Quadratic probe sequence `(hash + j²) mod capacity` for `j = 0..capacity`.
///
/// On a prime capacity this visits `(capacity + 1) / 2` distinct slots
/// before the offsets start repeating.
#[derive(Debug, Clone)]
pub struct ProbeSequence {
    hash: usize,
    capacity: usize,
    attempt: usize,
}

impl ProbeSequence {
    pub fn new(hash: usize, capacity: usize) -> Self {
        Self {
            hash,
            capacity,
            attempt: 0,
        }
    }
}

impl Iterator for ProbeSequence {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.attempt >= self.capacity {
            return None;
        }
        let j = self.attempt as u128;
        let idx = (self.hash as u128 + j * j) % self.capacity as u128;
        self.attempt += 1;

        // idx < capacity, so it fits back into a usize
        Some(idx as usize)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.capacity.saturating_sub(self.attempt);
        (left, Some(left))
    }
}

impl ExactSizeIterator for ProbeSequence {}
impl FusedIterator for ProbeSequence {}

/// String keyed map resolving collisions with quadratic probing.
///
/// Deleted entries are tombstoned in place and only disappear when
/// the table is rebuilt by [`resize_table`](StringMap::resize_table)
/// or wiped by [`clear`](StringMap::clear).
#[derive(Debug)]
pub struct OpenAddressingMap<V> {
    buckets: Vec<Slot<V>>,
    size: usize,
    hash_function: HashFunction,
}

impl<V> Default for OpenAddressingMap<V> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, hash_function_1)
    }
}

impl<V> OpenAddressingMap<V> {
    /// Creates an empty map with `next_prime(capacity)` slots
    pub fn new(capacity: usize, hash_function: HashFunction) -> Self {
        Self {
            buckets: Self::empty_table(next_prime(capacity)),
            size: 0,
            hash_function,
        }
    }

    /// Cursor over the live entries in table order
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            buckets: &self.buckets,
            index: 0,
        }
    }

    /// The probe walk for `key` against the current capacity
    pub fn probe(&self, key: &str) -> ProbeSequence {
        ProbeSequence::new((self.hash_function)(key), self.capacity())
    }

    // [private]

    fn empty_table(capacity: usize) -> Vec<Slot<V>> {
        (0..capacity).map(|_| Slot::Empty).collect()
    }

    /// Index of the live slot holding `key`.
    /// Tombstones do not stop the walk, an `Empty` slot does.
    fn find(&self, key: &str) -> Option<usize> {
        for idx in self.probe(key) {
            match &self.buckets[idx] {
                Slot::Empty => return None,
                Slot::Occupied(entry) if entry.is_live_with(key) => return Some(idx),
                Slot::Occupied(_) => {}
            }
        }
        None
    }

    fn grow(&mut self) {
        let new_capacity = next_prime(self.capacity() * 2);
        trace!(target: "put", "load {:.2} at capacity {}, growing to {}", self.table_load(), self.capacity(), new_capacity);
        self.resize_table(new_capacity);
    }
}

impl<V> StringMap<V> for OpenAddressingMap<V> {
    /// Grows first if the load has reached one half, then walks the
    /// probe sequence. The walk passes through tombstones so an existing
    /// live entry further down is updated instead of duplicated. A new
    /// key lands in the first tombstone seen, or else the `Empty` slot
    /// that ended the walk.
    fn put(&mut self, key: &str, value: V) {
        if self.table_load() >= OPEN_ADDRESSING_LOAD_LIMIT {
            self.grow();
        }

        let mut free = None;
        for idx in self.probe(key) {
            match &mut self.buckets[idx] {
                Slot::Empty => {
                    free = free.or(Some(idx));
                    break;
                }
                Slot::Occupied(entry) if entry.is_tombstone => {
                    free = free.or(Some(idx));
                }
                Slot::Occupied(entry) if entry.key == key => {
                    entry.value = value;
                    return;
                }
                Slot::Occupied(_) => {}
            }
        }

        match free {
            Some(idx) => {
                self.buckets[idx] = Slot::Occupied(HashEntry::new(key, value));
                self.size += 1;
            }
            None => {
                // unreachable while the load limit holds, the walk covers
                // more distinct slots than there are live entries
                debug!(target: "put", "no free slot for {key:?} at capacity {}", self.capacity());
                self.grow();
                self.put(key, value);
            }
        }
    }

    fn get(&self, key: &str) -> Option<&V> {
        match &self.buckets[self.find(key)?] {
            Slot::Occupied(entry) => Some(&entry.value),
            Slot::Empty => None,
        }
    }

    fn contains_key(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Tombstones every live slot holding `key` until the walk hits
    /// an `Empty` slot
    fn remove(&mut self, key: &str) {
        for idx in self.probe(key) {
            match &mut self.buckets[idx] {
                Slot::Empty => break,
                Slot::Occupied(entry) if entry.is_live_with(key) => {
                    entry.is_tombstone = true;
                    self.size -= 1;
                }
                Slot::Occupied(_) => {}
            }
        }
    }

    fn clear(&mut self) {
        self.buckets.fill_with(|| Slot::Empty);
        self.size = 0;
    }

    /// Rebuilds the table and replays every live entry through `put`.
    /// Tombstones are not carried over. Ignored when the (prime rounded)
    /// capacity would not exceed the current size.
    fn resize_table(&mut self, new_capacity: usize) {
        let new_capacity = if is_prime(new_capacity) {
            new_capacity
        } else {
            next_prime(new_capacity)
        };

        if new_capacity <= self.size {
            debug!(target: "resize_table", "ignoring resize to {new_capacity}, map holds {} entries", self.size);
            return;
        }

        trace!(target: "resize_table", "rebuilding {} -> {} slots", self.capacity(), new_capacity);
        let old = std::mem::replace(&mut self.buckets, Self::empty_table(new_capacity));
        self.size = 0;

        for slot in old {
            if let Slot::Occupied(HashEntry {
                key,
                value,
                is_tombstone: false,
            }) = slot
            {
                self.put(&key, value);
            }
        }
    }

    fn size(&self) -> usize {
        self.size
    }

    fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// `capacity - size`: tombstoned slots read as empty here
    fn empty_buckets(&self) -> usize {
        self.capacity() - self.size
    }

    fn keys_and_values(&self) -> Vec<(&str, &V)> {
        self.iter()
            .map(|entry| (entry.key.as_str(), &entry.value))
            .collect()
    }
}

impl<V: fmt::Display> fmt::Display for OpenAddressingMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.buckets.iter().enumerate() {
            match slot {
                Slot::Empty => writeln!(f, "{i}: None")?,
                Slot::Occupied(entry) => writeln!(f, "{i}: {entry}")?,
            }
        }
        Ok(())
    }
}

impl<'a, V> IntoIterator for &'a OpenAddressingMap<V> {
    type Item = &'a HashEntry<V>;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Forward cursor over live entries, skipping `Empty` and tombstoned
/// slots. Borrowing the map keeps it from being mutated mid-walk.
#[derive(Debug)]
pub struct Iter<'a, V> {
    buckets: &'a [Slot<V>],
    index: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a HashEntry<V>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(slot) = self.buckets.get(self.index) {
            self.index += 1;
            match slot {
                Slot::Occupied(entry) if !entry.is_tombstone => return Some(entry),
                _ => continue,
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.buckets.len().saturating_sub(self.index)))
    }
}

impl<V> FusedIterator for Iter<'_, V> {}
