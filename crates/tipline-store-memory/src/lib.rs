//! In-memory backend for the Tipline tip store.
//!
//! Keeps every tip in insertion order behind a single async `RwLock`. Nothing
//! survives a restart.

mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::MemoryStore;
