//! Key-Value persistence layer for TurboCommerce client state.
//!
//! A [`KvStore`] is a durable medium of named string slots. The cart store
//! writes its whole snapshot to one slot and reads it back at startup.
//!
//! # Example
//!
//! ```rust,ignore
//! use turbo_cache::{FileStore, KvStore};
//!
//! let store = FileStore::open("/var/lib/shop").await?;
//!
//! // Store a value
//! store.set("@GoMarkeplace", "[]").await?;
//!
//! // Retrieve a value
//! let snapshot: Option<String> = store.get("@GoMarkeplace").await?;
//!
//! // Delete a value
//! store.delete("@GoMarkeplace").await?;
//! ```

mod error;
mod file;
mod kv;
mod memory;

pub use error::CacheError;
pub use file::FileStore;
pub use kv::KvStore;
pub use memory::MemoryStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{CacheError, FileStore, KvStore, MemoryStore};
}
