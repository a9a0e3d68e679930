//! Patient record types.
//!
//! A record is created when a diagnosis workflow completes and is immutable
//! afterwards. Every record carries exactly one owning doctor id; the
//! storage layer partitions reads by that owner.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::id::{DoctorId, PatientId};
use crate::time::DiagnosedAt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "Male"),
            Self::Female => write!(f, "Female"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// The two class labels the fundus image classifier can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosisLabel {
    Glaucoma,
    NotGlaucoma,
}

impl fmt::Display for DiagnosisLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Glaucoma => write!(f, "Glaucoma"),
            Self::NotGlaucoma => write!(f, "Not Glaucoma"),
        }
    }
}

/// Record content as supplied by the caller, before identity assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientDraft {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub gender: Gender,
    pub diagnosis: DiagnosisLabel,
    pub diagnosed_at: DiagnosedAt,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub notes: String,
}

/// A persisted patient record, scoped to its owning doctor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub id: PatientId,
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub gender: Gender,
    pub diagnosis: DiagnosisLabel,
    pub diagnosed_at: DiagnosedAt,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub notes: String,
    /// Foreign reference to the owning doctor, not an owning pointer.
    pub doctor_id: DoctorId,
}

impl PatientRecord {
    /// Materializes a draft under a freshly assigned identity and owner.
    #[must_use]
    pub fn from_draft(id: PatientId, draft: PatientDraft, owner: DoctorId) -> Self {
        Self {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            age: draft.age,
            gender: draft.gender,
            diagnosis: draft.diagnosis,
            diagnosed_at: draft.diagnosed_at,
            email: draft.email,
            phone: draft.phone,
            notes: draft.notes,
            doctor_id: owner,
        }
    }

    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
