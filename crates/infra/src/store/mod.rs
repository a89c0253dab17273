//! Record storage abstractions.

pub mod in_memory;

pub use in_memory::{InMemoryStore, KeyedStore};
