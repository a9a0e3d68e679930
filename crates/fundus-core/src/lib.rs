pub mod doctor;
pub mod error;
pub mod id;
pub mod patient;
pub mod time;

pub use doctor::{Doctor, DoctorProfile, Specialty};
pub use error::{CoreError, Result};
pub use id::{DoctorId, PatientId};
pub use patient::{DiagnosisLabel, Gender, PatientDraft, PatientRecord};
pub use time::{DiagnosedAt, now_utc};
