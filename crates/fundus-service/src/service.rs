//! The clinic service facade.

use std::sync::Arc;

use fundus_auth::{AuthError, CredentialStore};
use fundus_core::{
    DiagnosisLabel, DoctorId, DoctorProfile, Gender, PatientDraft, PatientId, PatientRecord,
    now_utc,
};
use fundus_db_memory::InMemoryStorage;
use fundus_search::{PatientQuery, QueryPage};
use fundus_storage::{DoctorStorage, PatientStorage};

use crate::classifier::FundusClassifier;
use crate::config::ServiceConfig;
use crate::error::ServiceError;

/// Patient intake data collected before the classifier has run.
///
/// Diagnosis label and timestamp are filled in by the service when the
/// workflow completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientIntake {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub gender: Gender,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notes: String,
}

impl PatientIntake {
    fn into_draft(self, diagnosis: DiagnosisLabel) -> PatientDraft {
        PatientDraft {
            first_name: self.first_name,
            last_name: self.last_name,
            age: self.age,
            gender: self.gender,
            diagnosis,
            diagnosed_at: now_utc(),
            email: self.email,
            phone: self.phone,
            notes: self.notes,
        }
    }
}

/// The operations a presentation layer calls.
///
/// Holds the storage backends behind trait objects; any backend pair
/// implementing the `fundus-storage` traits works. Stateless across calls:
/// session identity and pagination cursors are owned by the caller.
#[derive(Clone)]
pub struct ClinicService {
    credentials: CredentialStore,
    patients: Arc<dyn PatientStorage>,
    config: ServiceConfig,
}

impl ClinicService {
    #[must_use]
    pub fn new(
        doctors: Arc<dyn DoctorStorage>,
        patients: Arc<dyn PatientStorage>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            credentials: CredentialStore::new(doctors),
            patients,
            config,
        }
    }

    /// Convenience constructor backed by a fresh in-memory store.
    #[must_use]
    pub fn in_memory(config: ServiceConfig) -> Self {
        let storage = Arc::new(InMemoryStorage::new());
        Self::new(storage.clone(), storage, config)
    }

    #[must_use]
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// A query preconfigured with the service's default page size.
    #[must_use]
    pub fn default_query(&self) -> PatientQuery {
        PatientQuery::new().with_page(0, self.config.page_size)
    }

    /// Registers a doctor. Returns `false` when the username is taken.
    ///
    /// # Errors
    ///
    /// Returns an error for storage or hashing failures; a taken username
    /// is an ordinary `Ok(false)`.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        profile: DoctorProfile,
    ) -> Result<bool, ServiceError> {
        match self.credentials.register(username, password, profile).await {
            Ok(_) => Ok(true),
            Err(AuthError::UsernameTaken { .. }) => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    /// Verifies credentials and returns the doctor identity on success.
    ///
    /// `None` covers both unknown usernames and wrong passwords; the
    /// caller cannot tell them apart.
    ///
    /// # Errors
    ///
    /// Returns an error only for storage failures or a corrupt stored hash.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<DoctorId>, ServiceError> {
        Ok(self.credentials.login(username, password).await?)
    }

    /// Persists a new patient record under `owner`.
    ///
    /// # Errors
    ///
    /// Returns an error only if the storage operation fails.
    pub async fn add_patient(
        &self,
        draft: PatientDraft,
        owner: DoctorId,
    ) -> Result<PatientId, ServiceError> {
        let record = self.patients.create(draft, owner).await?;
        tracing::info!(patient = %record.id, doctor = %owner, "patient record created");
        Ok(record.id)
    }

    /// Completes the diagnosis workflow: runs the opaque classifier over
    /// the image, stamps the current time, and persists the record under
    /// `owner`.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Classifier` if the model fails, otherwise
    /// only storage failures.
    pub async fn record_diagnosis(
        &self,
        classifier: &dyn FundusClassifier,
        image: &[u8],
        intake: PatientIntake,
        owner: DoctorId,
    ) -> Result<PatientId, ServiceError> {
        let classification = classifier.classify(image)?;
        self.add_patient(intake.into_draft(classification.label), owner)
            .await
    }

    /// Runs a query over the records owned by `owner`.
    ///
    /// Records of other doctors are excluded before the pipeline runs;
    /// empty pages (including those from inverted date ranges) are valid
    /// results, not errors.
    ///
    /// # Errors
    ///
    /// Returns an error only if listing from storage fails.
    pub async fn query_patients(
        &self,
        owner: DoctorId,
        query: &PatientQuery,
    ) -> Result<QueryPage, ServiceError> {
        let records = self.patients.list_by_owner(owner).await?;
        Ok(query.run(&records))
    }

    /// Fetches a record by identity only.
    ///
    /// Ownership is NOT re-checked here: ids are expected to come from a
    /// page that was already owner-filtered. A caller accepting ids from an
    /// untrusted source must compare `record.doctor_id` itself.
    ///
    /// # Errors
    ///
    /// Returns an error only for infrastructure failures; a missing record
    /// is `Ok(None)`.
    pub async fn get_patient(
        &self,
        id: PatientId,
    ) -> Result<Option<PatientRecord>, ServiceError> {
        Ok(self.patients.get_by_id(id).await?)
    }
}
