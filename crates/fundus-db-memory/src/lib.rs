//! In-memory storage backend for the Fundus record store.
//!
//! Backed by lock-free `papaya` maps; suitable for tests and single-node
//! deployments. Implements the `fundus-storage` traits.

pub mod storage;

pub use storage::InMemoryStorage;
