//! Doctor identity and profile types.
//!
//! A doctor is created once at registration and never mutated afterwards.
//! The password is held only as a salted one-way hash; the `Debug` impl
//! redacts it so it cannot leak through logs.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::id::DoctorId;

/// Medical specialty of a registered doctor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Specialty {
    Ophthalmologist,
    Optometrist,
    Other,
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ophthalmologist => write!(f, "Ophthalmologist"),
            Self::Optometrist => write!(f, "Optometrist"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// Registration profile supplied alongside the credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorProfile {
    pub specialty: Specialty,
    pub hospital: String,
    pub contact_email: String,
    pub contact_phone: String,
}

impl DoctorProfile {
    #[must_use]
    pub fn new(
        specialty: Specialty,
        hospital: impl Into<String>,
        contact_email: impl Into<String>,
        contact_phone: impl Into<String>,
    ) -> Self {
        Self {
            specialty,
            hospital: hospital.into(),
            contact_email: contact_email.into(),
            contact_phone: contact_phone.into(),
        }
    }
}

/// A registered doctor.
///
/// `password_hash` is a PHC-formatted Argon2id hash, never the plaintext.
/// When exposing a `Doctor` outside the storage layer, callers should not
/// forward the hash; the custom `Debug` impl keeps it out of trace output.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: DoctorId,
    /// Globally unique login name.
    pub username: String,
    pub password_hash: String,
    pub profile: DoctorProfile,
}

impl Doctor {
    #[must_use]
    pub fn new(
        id: DoctorId,
        username: impl Into<String>,
        password_hash: impl Into<String>,
        profile: DoctorProfile,
    ) -> Self {
        Self {
            id,
            username: username.into(),
            password_hash: password_hash.into(),
            profile,
        }
    }
}

impl fmt::Debug for Doctor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Doctor")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password_hash", &"<redacted>")
            .field("profile", &self.profile)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> DoctorProfile {
        DoctorProfile::new(
            Specialty::Ophthalmologist,
            "General Hospital",
            "dr@example.com",
            "+2348000000000",
        )
    }

    #[test]
    fn test_debug_redacts_password_hash() {
        let doctor = Doctor::new(DoctorId::new(1), "drA", "$argon2id$secret", profile());
        let debug = format!("{doctor:?}");
        assert!(debug.contains("drA"));
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("argon2id"));
    }

    #[test]
    fn test_specialty_display() {
        assert_eq!(Specialty::Ophthalmologist.to_string(), "Ophthalmologist");
        assert_eq!(Specialty::Other.to_string(), "Other");
    }

    #[test]
    fn test_serde_roundtrip() {
        let doctor = Doctor::new(DoctorId::new(2), "drB", "hash", profile());
        let json = serde_json::to_string(&doctor).unwrap();
        let back: Doctor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doctor);
    }
}
