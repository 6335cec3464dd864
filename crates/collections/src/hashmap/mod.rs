mod chaining;
mod hash_fn;
mod open_addressing;
pub mod prime;

pub use chaining::{ChainedMap, Iter as ChainedIter};
pub use hash_fn::{HashFunction, hash_function_1, hash_function_2};
pub use open_addressing::{HashEntry, Iter as OpenAddressingIter, OpenAddressingMap, ProbeSequence};

/// Capacity used by `Default` impls, before prime rounding
pub const DEFAULT_CAPACITY: usize = 11;

/// An open addressing map grows once its load reaches this
pub const OPEN_ADDRESSING_LOAD_LIMIT: f64 = 0.5;

/// A chained map grows once its load reaches this
pub const CHAINING_LOAD_LIMIT: f64 = 1.0;

/// The contract shared by both collision resolution strategies.
///
/// Lookups and removals of absent keys are never errors: `get`
/// reports `None`, `remove` does nothing.
pub trait StringMap<V> {
    /// Inserts `value` under `key`, overwriting any previous value.
    /// May grow the table before inserting.
    fn put(&mut self, key: &str, value: V);

    fn get(&self, key: &str) -> Option<&V>;

    fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    fn remove(&mut self, key: &str);

    /// Drops every entry, keeping the capacity
    fn clear(&mut self);

    /// Rebuilds the table with (at least) `new_capacity` buckets,
    /// rounded up to a prime. Requests the map cannot honour are ignored.
    fn resize_table(&mut self, new_capacity: usize);

    /// Number of live entries
    fn size(&self) -> usize;

    /// Number of buckets, always prime
    fn capacity(&self) -> usize;

    fn empty_buckets(&self) -> usize;

    fn keys_and_values(&self) -> Vec<(&str, &V)>;

    fn table_load(&self) -> f64 {
        self.size() as f64 / self.capacity() as f64
    }

    /// Shorthand for `self.size() == 0`
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

#[cfg(test)]
mod proptests;
