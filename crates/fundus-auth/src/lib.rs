//! # fundus-auth
//!
//! Credential management for the Fundus record store.
//!
//! This crate provides:
//! - Argon2id password hashing and verification
//! - Doctor registration with unique-username enforcement
//! - Login verification with a uniform failure response (unknown username
//!   and wrong password are indistinguishable to the caller)
//! - Username to doctor-id resolution
//!
//! ## Modules
//!
//! - [`password`] - Argon2id hashing primitives
//! - [`credentials`] - The [`CredentialStore`] built on a `DoctorStorage`
//! - [`error`] - Error types

pub mod credentials;
pub mod error;
pub mod password;

pub use credentials::CredentialStore;
pub use error::{AuthError, AuthResult};
pub use password::{hash_password, verify_password};
