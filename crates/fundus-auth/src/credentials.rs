//! Doctor registration and login verification.
//!
//! The store never persists or logs a plaintext password. Registration
//! derives a fresh Argon2id hash per call; verification recomputes against
//! the stored PHC string.

use std::sync::Arc;

use fundus_core::{DoctorId, DoctorProfile};
use fundus_storage::DoctorStorage;

use crate::error::{AuthError, AuthResult};
use crate::password;

/// Credential store and doctor directory over a `DoctorStorage` backend.
#[derive(Clone)]
pub struct CredentialStore {
    doctors: Arc<dyn DoctorStorage>,
}

impl CredentialStore {
    #[must_use]
    pub fn new(doctors: Arc<dyn DoctorStorage>) -> Self {
        Self { doctors }
    }

    /// Registers a new doctor and returns the assigned identity.
    ///
    /// The password is hashed with a per-call random salt before it reaches
    /// storage, so two registrations of the same password never produce the
    /// same stored hash.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UsernameTaken` when the username already exists;
    /// the previously stored hash is left unchanged. Storage failures are
    /// propagated.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        profile: DoctorProfile,
    ) -> AuthResult<DoctorId> {
        let hash = password::hash_password(password)?;
        match self.doctors.create(username, &hash, profile).await {
            Ok(doctor) => {
                tracing::info!(username, id = %doctor.id, "doctor registered");
                Ok(doctor.id)
            }
            Err(err) if err.is_duplicate_username() => Err(AuthError::username_taken(username)),
            Err(err) => Err(err.into()),
        }
    }

    /// Verifies a login attempt.
    ///
    /// Returns `false` for an unknown username or a wrong password,
    /// indistinguishably. The password itself is never logged.
    ///
    /// # Errors
    ///
    /// Returns an error only for storage failures or a corrupt stored hash.
    pub async fn verify(&self, username: &str, password: &str) -> AuthResult<bool> {
        let Some(doctor) = self.doctors.find_by_username(username).await? else {
            return Ok(false);
        };
        let ok = password::verify_password(password, &doctor.password_hash)?;
        if !ok {
            tracing::warn!(username, "failed login attempt");
        }
        Ok(ok)
    }

    /// Resolves a username to its doctor identity.
    ///
    /// Pure lookup; meant to be called only after a successful `verify`.
    ///
    /// # Errors
    ///
    /// Returns an error only for storage failures.
    pub async fn resolve_id(&self, username: &str) -> AuthResult<Option<DoctorId>> {
        Ok(self
            .doctors
            .find_by_username(username)
            .await?
            .map(|doctor| doctor.id))
    }

    /// Verifies credentials and resolves the doctor identity in one step.
    ///
    /// # Errors
    ///
    /// Returns an error only for storage failures or a corrupt stored hash.
    pub async fn login(&self, username: &str, password: &str) -> AuthResult<Option<DoctorId>> {
        if !self.verify(username, password).await? {
            return Ok(None);
        }
        self.resolve_id(username).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fundus_core::Specialty;
    use fundus_db_memory::InMemoryStorage;

    fn test_profile() -> DoctorProfile {
        DoctorProfile::new(
            Specialty::Optometrist,
            "Eye Clinic",
            "dr@example.com",
            "+2348000000000",
        )
    }

    fn store() -> (CredentialStore, Arc<InMemoryStorage>) {
        let storage = Arc::new(InMemoryStorage::new());
        (CredentialStore::new(storage.clone()), storage)
    }

    #[tokio::test]
    async fn test_register_then_verify() {
        let (store, _) = store();

        let id = store.register("drA", "pw1", test_profile()).await.unwrap();
        assert!(store.verify("drA", "pw1").await.unwrap());
        assert!(!store.verify("drA", "wrong").await.unwrap());
        assert_eq!(store.resolve_id("drA").await.unwrap(), Some(id));
    }

    #[tokio::test]
    async fn test_unknown_username_is_uniform_false() {
        let (store, _) = store();
        assert!(!store.verify("ghost", "anything").await.unwrap());
        assert_eq!(store.resolve_id("ghost").await.unwrap(), None);
        assert_eq!(store.login("ghost", "anything").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_duplicate_registration_keeps_original_hash() {
        let (store, storage) = store();

        store.register("drA", "pw1", test_profile()).await.unwrap();
        let err = store
            .register("drA", "pw2", test_profile())
            .await
            .unwrap_err();
        assert!(err.is_username_taken());

        // Original credentials still work; the attempted replacement doesn't.
        assert!(store.verify("drA", "pw1").await.unwrap());
        assert!(!store.verify("drA", "pw2").await.unwrap());

        let stored = DoctorStorage::find_by_username(&*storage, "drA")
            .await
            .unwrap()
            .unwrap();
        assert!(crate::password::verify_password("pw1", &stored.password_hash).unwrap());
    }

    #[tokio::test]
    async fn test_same_password_two_doctors_distinct_hashes() {
        let (store, storage) = store();

        store
            .register("drA", "shared-pw", test_profile())
            .await
            .unwrap();
        store
            .register("drB", "shared-pw", test_profile())
            .await
            .unwrap();

        let a = DoctorStorage::find_by_username(&*storage, "drA")
            .await
            .unwrap()
            .unwrap();
        let b = DoctorStorage::find_by_username(&*storage, "drB")
            .await
            .unwrap()
            .unwrap();
        assert_ne!(a.password_hash, b.password_hash);
    }

    #[tokio::test]
    async fn test_login_resolves_identity() {
        let (store, _) = store();

        let id = store.register("drA", "pw1", test_profile()).await.unwrap();
        assert_eq!(store.login("drA", "pw1").await.unwrap(), Some(id));
        assert_eq!(store.login("drA", "wrong").await.unwrap(), None);
    }
}
