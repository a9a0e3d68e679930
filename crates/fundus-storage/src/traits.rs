//! Storage traits for doctors and patient records.
//!
//! Implementations must be thread-safe (`Send + Sync`); multiple doctor
//! sessions may hit the store concurrently. Writes are atomic per record:
//! a reader never observes a half-written doctor or patient.

use async_trait::async_trait;

use fundus_core::{Doctor, DoctorId, DoctorProfile, PatientDraft, PatientId, PatientRecord};

use crate::error::StorageError;

/// Persistence operations for registered doctors.
///
/// # Example
///
/// ```ignore
/// use fundus_storage::DoctorStorage;
///
/// async fn example(storage: &impl DoctorStorage) {
///     if let Some(doctor) = storage.find_by_username("drA").await? {
///         println!("registered as {}", doctor.id);
///     }
/// }
/// ```
#[async_trait]
pub trait DoctorStorage: Send + Sync {
    /// Persist a new doctor and assign a fresh identity.
    ///
    /// `password_hash` must already be a one-way hash; this layer never
    /// sees plaintext passwords.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::DuplicateUsername` if the username is taken,
    /// leaving the existing doctor (and its stored hash) unchanged.
    /// Returns an error if the storage operation fails.
    async fn create(
        &self,
        username: &str,
        password_hash: &str,
        profile: DoctorProfile,
    ) -> Result<Doctor, StorageError>;

    /// Find a doctor by username.
    ///
    /// Returns `None` if no doctor has that username.
    ///
    /// # Errors
    ///
    /// Returns an error only for infrastructure issues.
    async fn find_by_username(&self, username: &str) -> Result<Option<Doctor>, StorageError>;

    /// Find a doctor by identity.
    ///
    /// Returns `None` if the doctor doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error only for infrastructure issues.
    async fn find_by_id(&self, id: DoctorId) -> Result<Option<Doctor>, StorageError>;
}

/// Persistence operations for patient records, partitioned by owning doctor.
#[async_trait]
pub trait PatientStorage: Send + Sync {
    /// Persist a new record under `owner` and assign a fresh, monotonically
    /// increasing identity.
    ///
    /// The write is atomic: no partial record is ever visible.
    ///
    /// # Errors
    ///
    /// Returns an error only if the storage operation fails.
    async fn create(
        &self,
        draft: PatientDraft,
        owner: DoctorId,
    ) -> Result<PatientRecord, StorageError>;

    /// Look up a record by identity only.
    ///
    /// Ownership is NOT checked here; ids are expected to come from an
    /// already owner-filtered listing. A caller that accepts ids from an
    /// untrusted source must re-check `record.doctor_id` itself.
    ///
    /// # Errors
    ///
    /// Returns an error only for infrastructure issues, not for a missing
    /// record.
    async fn get_by_id(&self, id: PatientId) -> Result<Option<PatientRecord>, StorageError>;

    /// Every record owned by `owner`, in unspecified order.
    ///
    /// Must never contain a record created under a different doctor; query
    /// ordering is imposed downstream by the search pipeline.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    async fn list_by_owner(&self, owner: DoctorId) -> Result<Vec<PatientRecord>, StorageError>;

    /// Number of records owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    async fn count_by_owner(&self, owner: DoctorId) -> Result<usize, StorageError>;
}
