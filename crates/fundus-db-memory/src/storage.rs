use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use papaya::HashMap as PapayaHashMap;

use fundus_core::{Doctor, DoctorId, DoctorProfile, PatientDraft, PatientId, PatientRecord};
use fundus_storage::{DoctorStorage, PatientStorage, StorageError};

/// In-memory storage backend using papaya lock-free HashMaps.
///
/// This storage implementation provides:
/// - Lock-free concurrent access via papaya::HashMap
/// - Monotonically increasing integer identities from atomic sequences
/// - Atomic unique-username reservation for doctor registration
/// - Per-record atomic writes (a value is inserted fully built, so readers
///   never observe a partial record)
#[derive(Debug)]
pub struct InMemoryStorage {
    /// Doctors by numeric id.
    doctors: Arc<PapayaHashMap<u64, Doctor>>,
    /// Username index: username -> doctor id. The `try_insert` into this
    /// map is the uniqueness point for registration.
    usernames: Arc<PapayaHashMap<String, u64>>,
    /// Patient records by numeric id.
    patients: Arc<PapayaHashMap<u64, PatientRecord>>,
    /// Sequence for doctor ids.
    doctor_seq: AtomicU64,
    /// Sequence for patient ids.
    patient_seq: AtomicU64,
}

impl InMemoryStorage {
    /// Creates a new empty in-memory storage.
    pub fn new() -> Self {
        Self {
            doctors: Arc::new(PapayaHashMap::new()),
            usernames: Arc::new(PapayaHashMap::new()),
            patients: Arc::new(PapayaHashMap::new()),
            doctor_seq: AtomicU64::new(1),
            patient_seq: AtomicU64::new(1),
        }
    }

    /// Reserves the next doctor id.
    fn next_doctor_id(&self) -> u64 {
        self.doctor_seq.fetch_add(1, Ordering::SeqCst)
    }

    /// Reserves the next patient id.
    fn next_patient_id(&self) -> u64 {
        self.patient_seq.fetch_add(1, Ordering::SeqCst)
    }

    /// Number of registered doctors.
    pub fn doctor_count(&self) -> usize {
        self.doctors.pin().len()
    }

    /// Number of stored patient records across all doctors.
    pub fn patient_count(&self) -> usize {
        self.patients.pin().len()
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DoctorStorage for InMemoryStorage {
    async fn create(
        &self,
        username: &str,
        password_hash: &str,
        profile: DoctorProfile,
    ) -> Result<Doctor, StorageError> {
        let id = self.next_doctor_id();

        // The username index is claimed first; losing the race leaves the
        // existing doctor untouched. A skipped sequence number is fine,
        // ids only need to stay monotonic.
        let usernames = self.usernames.pin();
        if usernames.try_insert(username.to_string(), id).is_err() {
            return Err(StorageError::duplicate_username(username));
        }

        let doctor = Doctor::new(DoctorId::new(id), username, password_hash, profile);
        self.doctors.pin().insert(id, doctor.clone());
        Ok(doctor)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Doctor>, StorageError> {
        let usernames = self.usernames.pin();
        let Some(id) = usernames.get(username) else {
            return Ok(None);
        };
        Ok(self.doctors.pin().get(id).cloned())
    }

    async fn find_by_id(&self, id: DoctorId) -> Result<Option<Doctor>, StorageError> {
        Ok(self.doctors.pin().get(&id.get()).cloned())
    }
}

#[async_trait]
impl PatientStorage for InMemoryStorage {
    async fn create(
        &self,
        draft: PatientDraft,
        owner: DoctorId,
    ) -> Result<PatientRecord, StorageError> {
        let id = self.next_patient_id();
        let record = PatientRecord::from_draft(PatientId::new(id), draft, owner);
        self.patients.pin().insert(id, record.clone());
        Ok(record)
    }

    async fn get_by_id(&self, id: PatientId) -> Result<Option<PatientRecord>, StorageError> {
        Ok(self.patients.pin().get(&id.get()).cloned())
    }

    async fn list_by_owner(&self, owner: DoctorId) -> Result<Vec<PatientRecord>, StorageError> {
        let guard = self.patients.pin();
        Ok(guard
            .iter()
            .filter(|(_, record)| record.doctor_id == owner)
            .map(|(_, record)| record.clone())
            .collect())
    }

    async fn count_by_owner(&self, owner: DoctorId) -> Result<usize, StorageError> {
        let guard = self.patients.pin();
        Ok(guard
            .iter()
            .filter(|(_, record)| record.doctor_id == owner)
            .count())
    }
}
