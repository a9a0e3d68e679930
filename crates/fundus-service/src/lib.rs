//! # fundus-service
//!
//! Clinic-facing facade over the Fundus record store. Composes credential
//! management, owner-partitioned patient storage, and the query pipeline
//! into the operations a presentation layer calls:
//!
//! - `register` / `login`
//! - `add_patient` / `record_diagnosis`
//! - `query_patients` / `get_patient`
//!
//! The image classifier is a consumed boundary ([`FundusClassifier`]);
//! this crate never looks inside it.

pub mod classifier;
pub mod config;
pub mod error;
pub mod service;

pub use classifier::{Classification, FundusClassifier};
pub use config::ServiceConfig;
pub use error::ServiceError;
pub use service::{ClinicService, PatientIntake};
