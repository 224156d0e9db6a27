//! Bucket hash strategies.
//!
//! A strategy maps a key and the bucket count `n` to a bucket index in `[0, n)`.
//! It must be deterministic: the same key always routes to the same bucket.

use std::{
    collections::hash_map::DefaultHasher,
    hash::{BuildHasher, BuildHasherDefault, Hash, Hasher},
};

/// The stored form of a hash strategy.
pub type HashFn<K> = Box<dyn Fn(&K, usize) -> usize + Send + Sync>;

/// Integer keys that reduce to a bucket index by their own value.
pub trait Modulo {
    fn modulo(&self, n: usize) -> usize;
}

macro_rules! impl_modulo {
    ($($t:ty),*) => {
        $(
            impl Modulo for $t {
                // rem_euclid keeps negative keys in [0, n)
                fn modulo(&self, n: usize) -> usize {
                    (*self as i128).rem_euclid(n as i128) as usize
                }
            }
        )*
    };
}

impl_modulo!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// `key mod n`, i.e. the identity hash over integer keys.
pub fn modulo<K: Modulo>(key: &K, n: usize) -> usize {
    key.modulo(n)
}

/// Hash with any `BuildHasher`, then reduce mod `n`.
///
/// The builder must produce hashers with a fixed seed (e.g. not `RandomState`
/// shared across processes) if bucket routing has to be reproducible outside
/// of one table.
pub fn build_hasher<K, S>(state: S) -> impl Fn(&K, usize) -> usize + Send + Sync + 'static
where
    K: Hash + 'static,
    S: BuildHasher + Send + Sync + 'static,
{
    move |key: &K, n: usize| {
        let mut hasher = state.build_hasher();
        key.hash(&mut hasher);
        (hasher.finish() % n as u64) as usize
    }
}

/// `build_hasher` over `DefaultHasher::new()`, whose SipHash keys are fixed at
/// zero, so routing is the same in every process.
pub fn default_hasher<K: Hash + 'static>() -> impl Fn(&K, usize) -> usize + Send + Sync + 'static {
    build_hasher(BuildHasherDefault::<DefaultHasher>::default())
}
