// Durable local storage.
// Persists the session settings as a flat JSON key/value file per user.

pub mod paths;
pub mod store;

pub use store::{FileStore, KeyValueStore, MemoryStore};
