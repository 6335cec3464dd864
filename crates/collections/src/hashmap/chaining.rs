use std::{fmt, iter::FusedIterator};

use log::{debug, trace};

use super::{
    CHAINING_LOAD_LIMIT, DEFAULT_CAPACITY, HashFunction, StringMap, hash_function_1,
    prime::{is_prime, next_prime},
};
use crate::linked_list::{self, List, Node};

/// String keyed map resolving collisions with separate chaining:
/// every bucket is a singly linked [`List`] of the keys hashing to it.
#[derive(Debug)]
pub struct ChainedMap<V> {
    buckets: Vec<List<V>>,
    size: usize,
    hash_function: HashFunction,
}

impl<V> Default for ChainedMap<V> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, hash_function_1)
    }
}

impl<V> ChainedMap<V> {
    /// Creates a new, empty map with `next_prime(capacity)` buckets
    pub fn new(capacity: usize, hash_function: HashFunction) -> Self {
        Self {
            buckets: Self::empty_buckets_of(next_prime(capacity)),
            size: 0,
            hash_function,
        }
    }

    // [adapters]

    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            buckets: &self.buckets,
            cursor: None,
            bucket_idx: 0,
        }
    }

    // [private]

    fn empty_buckets_of(capacity: usize) -> Vec<List<V>> {
        (0..capacity).map(|_| List::new()).collect()
    }

    fn idx(&self, key: &str) -> usize {
        Self::idx_for((self.hash_function)(key), self.capacity())
    }

    fn idx_for(hash: usize, capacity: usize) -> usize {
        hash % capacity
    }
}

impl<V> StringMap<V> for ChainedMap<V> {
    /// Insert a key-value pair into the map. An existing node for
    /// `key` is unlinked and replaced, so the size only grows for new keys.
    fn put(&mut self, key: &str, value: V) {
        if self.table_load() >= CHAINING_LOAD_LIMIT {
            trace!(target: "put", "load {:.2} at capacity {}, growing", self.table_load(), self.capacity());
            self.resize_table(self.capacity() * 2);
        }

        let i = self.idx(key);
        let bucket = &mut self.buckets[i];
        if bucket.remove(key).is_none() {
            self.size += 1;
        }
        bucket.push(key, value);
    }

    fn get(&self, key: &str) -> Option<&V> {
        self.buckets[self.idx(key)].contains(key).map(Node::value)
    }

    fn contains_key(&self, key: &str) -> bool {
        self.buckets[self.idx(key)].contains(key).is_some()
    }

    fn remove(&mut self, key: &str) {
        let i = self.idx(key);
        if self.buckets[i].remove(key).is_some() {
            self.size -= 1;
        }
    }

    fn clear(&mut self) {
        self.buckets.fill_with(List::new);
        self.size = 0;
    }

    /// Rehashes every node into a fresh bucket array. The capacity is
    /// rounded up to a prime and doubled until the load is at most one.
    fn resize_table(&mut self, new_capacity: usize) {
        if new_capacity < 1 {
            debug!(target: "resize_table", "ignoring resize to {new_capacity}");
            return;
        }

        let mut new_capacity = if is_prime(new_capacity) {
            new_capacity
        } else {
            next_prime(new_capacity)
        };
        while self.size as f64 / new_capacity as f64 > CHAINING_LOAD_LIMIT {
            new_capacity = next_prime(new_capacity * 2);
        }

        trace!(target: "resize_table", "rehashing {} -> {} buckets", self.capacity(), new_capacity);
        let mut new_buckets = Self::empty_buckets_of(new_capacity);

        while let Some(bucket) = self.buckets.pop() {
            for node in bucket {
                let i = Self::idx_for((self.hash_function)(&node.key), new_capacity);
                let (key, value) = node.into_pair();
                new_buckets[i].push(key, value);
            }
        }

        // old buckets were drained by `pop`
        self.buckets = new_buckets;
    }

    fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of buckets, or "slots" of the map
    fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Scans for buckets with no nodes
    fn empty_buckets(&self) -> usize {
        self.buckets.iter().filter(|b| b.is_empty()).count()
    }

    fn keys_and_values(&self) -> Vec<(&str, &V)> {
        self.iter().map(|node| (node.key(), node.value())).collect()
    }
}

impl<V: fmt::Display> fmt::Display for ChainedMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, bucket) in self.buckets.iter().enumerate() {
            write!(f, "{i}:")?;
            for node in bucket {
                write!(f, " -> ({}: {})", node.key, node.value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<'a, V> IntoIterator for &'a ChainedMap<V> {
    type Item = &'a Node<V>;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Walks the buckets in order, and each bucket's list front to back
#[derive(Debug)]
pub struct Iter<'a, V> {
    buckets: &'a [List<V>],
    cursor: Option<linked_list::Iter<'a, V>>,
    bucket_idx: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a Node<V>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.cursor.as_mut().and_then(Iterator::next) {
                return Some(node);
            }
            let bucket = self.buckets.get(self.bucket_idx)?;
            self.bucket_idx += 1;
            self.cursor = Some(bucket.iter());
        }
    }
}

impl<V> FusedIterator for Iter<'_, V> {}
