//! Storage abstraction layer for the Fundus record store.
//!
//! Defines the traits a durable backend must implement for doctors and
//! patient records, together with the storage error taxonomy. The in-memory
//! backend lives in `fundus-db-memory`; a SQL adapter would implement the
//! same traits.

pub mod error;
pub mod traits;

pub use error::{ErrorCategory, StorageError};
pub use traits::{DoctorStorage, PatientStorage};
