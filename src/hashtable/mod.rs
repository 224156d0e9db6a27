use std::{
    fmt::{self, Debug},
    iter::Flatten,
    mem, slice,
};

use tracing::trace;

use crate::{hash::HashFn, map::SequentialMap, some_or};

#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// Fixed-bucket hash table with chaining.
///
/// The bucket count and the hash strategy are fixed at construction; the table
/// never grows or shrinks its bucket array. Each bucket is a chain of entries
/// scanned linearly, so every operation costs the length of one chain.
///
/// Not synchronized. Wrap it in a lock to share it between threads.
pub struct HashTable<K, V> {
    hash: HashFn<K>,
    buckets: Vec<Vec<Entry<K, V>>>,
}

impl<K: Debug, V: Debug> Debug for HashTable<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashTable")
            .field("buckets", &self.buckets)
            .finish()
    }
}

impl<K: Eq, V> HashTable<K, V> {
    /// Create a table with `number_of_buckets` empty buckets.
    ///
    /// `hash(key, number_of_buckets)` must be deterministic and return an index
    /// in `[0, number_of_buckets)`.
    ///
    /// # Panics
    ///
    /// Panics if `number_of_buckets` is zero.
    pub fn new<F>(number_of_buckets: usize, hash: F) -> Self
    where
        F: Fn(&K, usize) -> usize + Send + Sync + 'static,
    {
        assert!(
            number_of_buckets > 0,
            "a hash table needs at least one bucket"
        );
        trace!(number_of_buckets, "create hash table");

        let mut buckets = Vec::with_capacity(number_of_buckets);
        buckets.resize_with(number_of_buckets, Vec::new);

        Self {
            hash: Box::new(hash),
            buckets,
        }
    }

    pub fn number_of_buckets(&self) -> usize {
        self.buckets.len()
    }

    /// The bucket `key` routes to.
    ///
    /// # Panics
    ///
    /// Panics if the hash strategy returns an index out of range.
    pub fn bucket_of(&self, key: &K) -> usize {
        let index = (self.hash)(key, self.buckets.len());
        assert!(
            index < self.buckets.len(),
            "hash function returned bucket {} for a table of {} buckets",
            index,
            self.buckets.len()
        );
        index
    }

    /// Number of entries chained in the bucket at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= number_of_buckets()`.
    pub fn bucket_len(&self, index: usize) -> usize {
        self.buckets[index].len()
    }

    /// Number of entries across all buckets, deleted-but-present keys included.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    pub fn load_factor(&self) -> f64 {
        self.len() as f64 / self.buckets.len() as f64
    }

    /// Insert (key, value).
    ///
    /// If the key is already chained in its bucket, the value is overwritten in
    /// place and the old one returned. Otherwise the entry is appended to the
    /// end of the bucket.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let index = self.bucket_of(&key);
        let bucket = &mut self.buckets[index];

        if let Some(entry) = bucket.iter_mut().find(|entry| entry.key == key) {
            trace!(bucket = index, "overwrite existing key");
            return Some(mem::replace(&mut entry.value, value));
        }

        bucket.push(Entry { key, value });
        None
    }

    /// Reset the value of `key` to `V::default()`.
    ///
    /// The entry itself stays in its bucket: `search` still finds the key and
    /// `keys` still lists it. Use `remove` to take the entry out.
    pub fn delete(&mut self, key: &K)
    where
        V: Default,
    {
        let index = self.bucket_of(key);
        let entry = some_or!(
            self.buckets[index].iter_mut().find(|entry| entry.key == *key),
            return
        );

        trace!(bucket = index, "reset value of deleted key");
        entry.value = V::default();
    }

    /// Return (value, true) if the key is present, or (V::default(), false).
    pub fn search(&self, key: &K) -> (V, bool)
    where
        V: Default + Clone,
    {
        match self.lookup(key) {
            Some(value) => (value.clone(), true),
            None => (V::default(), false),
        }
    }

    pub fn lookup(&self, key: &K) -> Option<&V> {
        let index = self.bucket_of(key);

        self.buckets[index]
            .iter()
            .find(|entry| entry.key == *key)
            .map(|entry| &entry.value)
    }

    pub fn lookup_mut(&mut self, key: &K) -> Option<&mut V> {
        let index = self.bucket_of(key);

        self.buckets[index]
            .iter_mut()
            .find(|entry| entry.key == *key)
            .map(|entry| &mut entry.value)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.lookup(key).is_some()
    }

    /// Take the entry of `key` out of its bucket.
    ///
    /// The remaining entries of the bucket keep their relative order.
    pub fn remove(&mut self, key: &K) -> Result<V, ()> {
        let index = self.bucket_of(key);
        let bucket = &mut self.buckets[index];
        let position = some_or!(
            bucket.iter().position(|entry| entry.key == *key),
            return Err(())
        );

        trace!(bucket = index, "remove key");
        Ok(bucket.remove(position).value)
    }

    /// Snapshot of every key, in bucket order and chain order within a bucket.
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        let mut keys = Vec::with_capacity(self.len());

        for bucket in &self.buckets {
            for entry in bucket {
                keys.push(entry.key.clone());
            }
        }

        keys
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.buckets.iter().flatten(),
        }
    }

    /// Drop every entry. The bucket count does not change.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
    }
}

/// Iterator over (&key, &value) in the same order as `HashTable::keys`.
pub struct Iter<'a, K, V> {
    inner: Flatten<slice::Iter<'a, Vec<Entry<K, V>>>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| (&entry.key, &entry.value))
    }
}

impl<'a, K: Eq, V> IntoIterator for &'a HashTable<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Eq + Clone, V> SequentialMap<K, V> for HashTable<K, V> {
    fn insert(&mut self, key: &K, value: V) -> Option<V> {
        HashTable::insert(self, key.clone(), value)
    }

    fn lookup(&self, key: &K) -> Option<&V> {
        HashTable::lookup(self, key)
    }

    fn remove(&mut self, key: &K) -> Result<V, ()> {
        HashTable::remove(self, key)
    }

    fn keys(&self) -> Vec<K> {
        HashTable::keys(self)
    }
}
