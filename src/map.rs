pub trait SequentialMap<K: Eq + Clone, V> {
    /// Insert (key, value) into the map.
    ///
    /// If the key is new, return None.
    /// If the key exists, overwrite its value in place and return Some(old value).
    fn insert(&mut self, key: &K, value: V) -> Option<V>;

    /// Lookup (key, value) from the map with the key.
    ///
    /// If success, return the reference of the value.
    /// If fail, return None.
    fn lookup(&self, key: &K) -> Option<&V>;

    /// Remove (key, value) from the map with the key.
    ///
    /// If success, return Ok(value) which is inserted before.
    /// If fail, return Err(()).
    fn remove(&mut self, key: &K) -> Result<V, ()>;

    /// Collect every key of the map into a new vector.
    fn keys(&self) -> Vec<K>;
}
