pub mod hash;
pub mod hashtable;
pub mod map;
pub mod util;

pub use hashtable::HashTable;
