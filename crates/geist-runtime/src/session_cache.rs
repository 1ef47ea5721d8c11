use std::hash::Hash;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// Keyed store that lives as long as one reader session. Entries are never
/// evicted or invalidated, and only successful loads are stored.
pub struct SessionCache<K, V> {
    entries: HashMap<K, V>,
    hits: u64,
    misses: u64,
}

impl<K: Eq + Hash, V> SessionCache<K, V> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// Records a hit or a miss for `key` and reports whether it is present.
    pub fn probe(&mut self, key: &K) -> bool {
        let present = self.entries.contains_key(key);
        if present {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        present
    }

    #[inline]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: K, value: V) -> &V {
        match self.entries.entry(key) {
            Entry::Occupied(mut slot) => {
                slot.insert(value);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(value),
        }
    }

    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.entries.len(),
        }
    }
}

impl<K: Eq + Hash, V> Default for SessionCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
