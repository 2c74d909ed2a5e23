use linked_hash_map::LinkedHashMap;
use std::hash::Hash;

use crate::stats::EvalStats;

/// A grow-only memo table.
///
/// Entries are kept in the order they were inserted, which for a recursive
/// evaluator is the order the terms were computed. Once a key is present its
/// value is never replaced and the key is never removed.
///
/// Example:
/// ```
/// use recurcache::MemoTable;
///
/// let mut table = MemoTable::new(4);
/// assert!(table.insert_if_absent(3u64, 2u64));
/// assert!(!table.insert_if_absent(3, 99));
/// assert_eq!(table.get(&3), Some(&2));
/// assert_eq!(table.stats().hits, 1);
/// ```
pub struct MemoTable<K: Eq + Hash, V> {
    entries: LinkedHashMap<K, V>,
    hits: u64,
    misses: u64,
}

impl<K: Eq + Hash, V> MemoTable<K, V> {
    pub fn new(capacity: usize) -> Self {
        let mut entries = LinkedHashMap::new();
        entries.reserve(capacity);
        MemoTable {
            entries,
            hits: 0,
            misses: 0,
        }
    }

    /// Look up a key, counting the lookup as a hit or a miss.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        match self.entries.get(key) {
            Some(value) => {
                self.hits += 1;
                Some(value)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Look up a key without touching the counters.
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Store `value` under `key` unless the key is already present.
    ///
    /// Returns `true` if the value was stored.
    pub fn insert_if_absent(&mut self, key: K, value: V) -> bool {
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, value);
        true
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.keys()
    }

    pub fn stats(&self) -> EvalStats {
        EvalStats {
            hits: self.hits,
            misses: self.misses,
            size: self.entries.len() as u64,
        }
    }
}
