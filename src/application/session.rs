//! Session store: the signed-in identity and its persisted snapshot
//!
//! Two states only, anonymous and authenticated. The identity is mirrored
//! under its own storage key, separate from the users collection, and is
//! restored on boot without checking that the user still exists.

use crate::application::credentials::{CredentialVerifier, DemoCredentials, ProvisionedAccount};
use crate::domain::{fresh_id, seed, Role, SubscriptionStatus, User, UserPatch};
use crate::error::{PptvError, Result};
use crate::infrastructure::{snapshot, KeyValueStore, RecordStore, Repository};
use chrono::Utc;
use std::thread;
use std::time::Duration;

/// Storage key of the persisted identity
pub const SESSION_KEY: &str = "pptv_user";

pub struct SessionStore<S, V = DemoCredentials> {
    records: RecordStore<S>,
    verifier: V,
    latency: Duration,
    current: Option<User>,
}

impl<S: KeyValueStore + Clone> SessionStore<S> {
    /// Restore the persisted identity using the demo credential rules
    pub fn boot(store: S) -> Result<Self> {
        Self::boot_with(store, DemoCredentials)
    }
}

impl<S, V> SessionStore<S, V>
where
    S: KeyValueStore + Clone,
    V: CredentialVerifier,
{
    pub fn boot_with(store: S, verifier: V) -> Result<Self> {
        let current: Option<User> = snapshot::load(&store, SESSION_KEY)?;
        if let Some(user) = &current {
            log::debug!("restored session for {}", user.email);
        }

        Ok(SessionStore {
            records: RecordStore::new(store),
            verifier,
            latency: Duration::ZERO,
            current,
        })
    }

    /// Pause applied before login and registration resolve
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn records(&self) -> &RecordStore<S> {
        &self.records
    }

    pub fn current(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.current.as_ref().is_some_and(User::is_admin)
    }

    /// The signed-in user, or `NotAuthenticated`
    pub fn require_user(&self) -> Result<&User> {
        self.current.as_ref().ok_or(PptvError::NotAuthenticated)
    }

    /// Sign in by email.
    ///
    /// A stored account is accepted whenever the verifier approves it; with
    /// [`DemoCredentials`] that is always. Unknown emails fall back to the
    /// verifier's provisioned accounts.
    pub fn login(&mut self, email: &str, credential: &str) -> Result<&User> {
        self.simulate_latency();

        let now = Utc::now();
        let users = self.records.users();
        let existing = users.list()?.into_iter().find(|user| user.email == email);

        let user = match existing {
            Some(mut user) => {
                if !self.verifier.verify_existing(&user, credential) {
                    log::warn!("rejected credential for {}", email);
                    return Err(PptvError::InvalidCredentials);
                }
                user.last_login = Some(now);
                users.update(user.clone())?;
                user
            }
            None => match self.verifier.provision(email, credential, now) {
                Some(ProvisionedAccount::Stored(mut user)) => {
                    user.last_login = Some(now);
                    users.insert(user.clone())?;
                    log::info!("provisioned account {} for {}", user.id, email);
                    user
                }
                Some(ProvisionedAccount::Transient(mut user)) => {
                    user.last_login = Some(now);
                    user
                }
                None => {
                    log::warn!("failed login for {}", email);
                    return Err(PptvError::InvalidCredentials);
                }
            },
        };

        log::info!("signed in {} as {}", user.email, user.role());
        self.set_current(user)
    }

    /// Create a user account and sign it in
    pub fn register(&mut self, email: &str, credential: &str, name: &str) -> Result<&User> {
        self.simulate_latency();

        let users = self.records.users();
        let existing = users.list()?;
        if existing.iter().any(|user| user.email == email) {
            return Err(PptvError::EmailTaken(email.to_string()));
        }

        let now = Utc::now();
        let mut user = seed::demo_user();
        user.id = fresh_id("user", &existing, now);
        user.email = email.to_string();
        user.name = Some(name.to_string());
        user.role = Some(Role::User);
        user.subscription_plan = None;
        user.subscription_status = Some(SubscriptionStatus::Inactive);
        user.billing_info = None;
        user.created_at = Some(now);

        self.verifier.enroll(&user, credential)?;
        users.insert(user.clone())?;
        log::info!("registered {} as {}", email, user.id);

        self.set_current(user)
    }

    pub fn logout(&mut self) -> Result<()> {
        if let Some(user) = self.current.take() {
            log::info!("signed out {}", user.email);
        }
        self.records.store().remove(SESSION_KEY)
    }

    /// Merge `patch` into the signed-in identity and write it through to the
    /// users collection and the session snapshot.
    ///
    /// Returns `None` without writing anything when nobody is signed in.
    pub fn update_identity(&mut self, patch: UserPatch) -> Result<Option<&User>> {
        let Some(mut user) = self.current.clone() else {
            return Ok(None);
        };
        patch.apply(&mut user);
        self.records.users().update(user.clone())?;
        self.set_current(user).map(Some)
    }

    /// Replace the session identity if `user` is the one signed in
    pub fn sync_identity(&mut self, user: &User) -> Result<bool> {
        match &self.current {
            Some(current) if current.id == user.id => {
                self.set_current(user.clone())?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn set_current(&mut self, user: User) -> Result<&User> {
        snapshot::save(self.records.store(), SESSION_KEY, &user)?;
        Ok(&*self.current.insert(user))
    }

    fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            thread::sleep(self.latency);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Plan;
    use crate::infrastructure::MemoryStore;

    fn seeded() -> MemoryStore {
        let store = MemoryStore::new();
        RecordStore::new(store.clone()).initialize().unwrap();
        store
    }

    #[test]
    fn test_boot_without_snapshot_is_anonymous() {
        let session = SessionStore::boot(MemoryStore::new()).unwrap();
        assert!(!session.is_authenticated());
        assert!(!session.is_admin());
        assert!(matches!(
            session.require_user(),
            Err(PptvError::NotAuthenticated)
        ));
    }

    #[test]
    fn test_demo_admin_login_on_empty_store_seeds_admin() {
        let store = MemoryStore::new();
        let mut session = SessionStore::boot(store.clone()).unwrap();

        let user = session.login("admin@example.com", "admin123").unwrap();
        assert_eq!(user.role(), Role::Admin);
        assert!(user.last_login.is_some());
        assert!(session.is_admin());

        let users = RecordStore::new(store).users().list().unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].email, "admin@example.com");
    }

    #[test]
    fn test_demo_user_login_on_empty_store_is_not_stored() {
        let store = MemoryStore::new();
        let mut session = SessionStore::boot(store.clone()).unwrap();

        session.login("user@example.com", "password").unwrap();
        assert!(session.is_authenticated());
        assert!(!session.is_admin());
        assert_eq!(session.current().unwrap().plan_id(), Some("standard"));

        assert!(RecordStore::new(store).users().list().unwrap().is_empty());
    }

    #[test]
    fn test_admin_login_on_seeded_store() {
        let mut session = SessionStore::boot(seeded()).unwrap();
        let user = session.login("admin@example.com", "admin123").unwrap();
        assert_eq!(user.id, "admin-1");
        assert!(session.is_admin());
    }

    #[test]
    fn test_user_login_on_seeded_store_is_not_admin() {
        let mut session = SessionStore::boot(seeded()).unwrap();
        session.login("user@example.com", "password").unwrap();
        assert!(session.is_authenticated());
        assert!(!session.is_admin());
    }

    #[test]
    fn test_stored_account_accepts_any_credential() {
        let store = seeded();
        let mut session = SessionStore::boot(store.clone()).unwrap();

        let user = session.login("user@example.com", "not-the-password").unwrap();
        assert_eq!(user.id, "user1");

        let stored = RecordStore::new(store).users().get("user1").unwrap().unwrap();
        assert!(stored.last_login.is_some());
    }

    #[test]
    fn test_unknown_email_fails() {
        let mut session = SessionStore::boot(seeded()).unwrap();
        let err = session.login("nobody@example.com", "password").unwrap_err();
        assert!(matches!(err, PptvError::InvalidCredentials));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_demo_credentials_must_match_exactly_without_stored_account() {
        let mut session = SessionStore::boot(MemoryStore::new()).unwrap();
        assert!(session.login("admin@example.com", "password").is_err());
        assert!(session.login("user@example.com", "admin123").is_err());
    }

    #[test]
    fn test_register_creates_inactive_user() {
        let store = seeded();
        let mut session = SessionStore::boot(store.clone()).unwrap();

        let user = session
            .register("new@example.com", "secret", "New Viewer")
            .unwrap()
            .clone();

        assert!(user.id.starts_with("user-"));
        assert_eq!(user.role, Some(Role::User));
        assert_eq!(user.subscription_status, Some(SubscriptionStatus::Inactive));
        assert!(user.subscription_plan.is_none());
        assert!(user.billing_info.is_none());
        assert!(user.created_at.is_some());
        assert!(session.is_authenticated());

        let stored = RecordStore::new(store).users().get(&user.id).unwrap();
        assert_eq!(stored, Some(user));
    }

    #[test]
    fn test_register_existing_email_fails_and_leaves_users_unchanged() {
        let store = seeded();
        let records = RecordStore::new(store.clone());
        let before = records.users().list().unwrap();
        let mut session = SessionStore::boot(store).unwrap();

        let err = session
            .register("user@example.com", "secret", "Copycat")
            .unwrap_err();

        assert!(matches!(err, PptvError::EmailTaken(_)));
        assert_eq!(records.users().list().unwrap(), before);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_session_survives_reboot() {
        let store = seeded();
        let mut session = SessionStore::boot(store.clone()).unwrap();
        session.login("admin@example.com", "admin123").unwrap();

        let rebooted = SessionStore::boot(store).unwrap();
        assert!(rebooted.is_admin());
        assert_eq!(rebooted.current().unwrap().id, "admin-1");
    }

    #[test]
    fn test_boot_does_not_validate_against_users() {
        let store = seeded();
        let mut session = SessionStore::boot(store.clone()).unwrap();
        session.login("user@example.com", "password").unwrap();
        RecordStore::new(store.clone()).users().remove("user1").unwrap();

        let rebooted = SessionStore::boot(store).unwrap();
        assert_eq!(rebooted.current().unwrap().id, "user1");
    }

    #[test]
    fn test_logout_clears_session_and_snapshot() {
        let store = seeded();
        let mut session = SessionStore::boot(store.clone()).unwrap();
        session.login("user@example.com", "password").unwrap();

        session.logout().unwrap();

        assert!(!session.is_authenticated());
        assert_eq!(store.get(SESSION_KEY).unwrap(), None);
        assert!(!SessionStore::boot(store).unwrap().is_authenticated());
    }

    #[test]
    fn test_update_identity_writes_through() {
        let store = seeded();
        let mut session = SessionStore::boot(store.clone()).unwrap();
        session.login("user@example.com", "password").unwrap();

        let updated = session
            .update_identity(UserPatch {
                name: Some("Renamed".to_string()),
                ..Default::default()
            })
            .unwrap()
            .unwrap();
        assert_eq!(updated.name.as_deref(), Some("Renamed"));

        let stored = RecordStore::new(store.clone()).users().get("user1").unwrap().unwrap();
        assert_eq!(stored.name.as_deref(), Some("Renamed"));
        let restored = SessionStore::boot(store).unwrap();
        assert_eq!(restored.current().unwrap().name.as_deref(), Some("Renamed"));
    }

    #[test]
    fn test_update_identity_without_session_is_noop() {
        let store = seeded();
        let before = store.get("pptv_db_users").unwrap();
        let mut session = SessionStore::boot(store.clone()).unwrap();

        let result = session
            .update_identity(UserPatch {
                name: Some("Ghost".to_string()),
                ..Default::default()
            })
            .unwrap();

        assert!(result.is_none());
        assert_eq!(store.get("pptv_db_users").unwrap(), before);
        assert_eq!(store.get(SESSION_KEY).unwrap(), None);
    }

    #[test]
    fn test_update_identity_of_transient_demo_user_only_touches_session() {
        let store = MemoryStore::new();
        let mut session = SessionStore::boot(store.clone()).unwrap();
        session.login("user@example.com", "password").unwrap();

        session
            .update_identity(UserPatch {
                name: Some("Still Demo".to_string()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(
            session.current().unwrap().name.as_deref(),
            Some("Still Demo")
        );
        assert!(RecordStore::new(store).users().list().unwrap().is_empty());
    }

    #[test]
    fn test_sync_identity_only_replaces_matching_user() {
        let store = seeded();
        let mut session = SessionStore::boot(store).unwrap();
        session.login("admin@example.com", "admin123").unwrap();

        let mut other = seed::demo_user();
        other.name = Some("Other".to_string());
        assert!(!session.sync_identity(&other).unwrap());

        let mut me = session.current().unwrap().clone();
        me.name = Some("Root".to_string());
        assert!(session.sync_identity(&me).unwrap());
        assert_eq!(session.current().unwrap().name.as_deref(), Some("Root"));
    }

    struct StrictVerifier;

    impl CredentialVerifier for StrictVerifier {
        fn verify_existing(&self, _user: &User, credential: &str) -> bool {
            credential == "correct horse"
        }

        fn provision(
            &self,
            _email: &str,
            _credential: &str,
            _now: chrono::DateTime<Utc>,
        ) -> Option<ProvisionedAccount> {
            None
        }
    }

    #[test]
    fn test_custom_verifier_replaces_demo_rules() {
        let mut session = SessionStore::boot_with(seeded(), StrictVerifier).unwrap();

        assert!(matches!(
            session.login("user@example.com", "password"),
            Err(PptvError::InvalidCredentials)
        ));
        assert!(session.login("user@example.com", "correct horse").is_ok());

        let mut fresh = SessionStore::boot_with(MemoryStore::new(), StrictVerifier).unwrap();
        assert!(fresh.login("admin@example.com", "admin123").is_err());
    }

    #[test]
    fn test_latency_is_applied() {
        let mut session = SessionStore::boot(seeded())
            .unwrap()
            .with_latency(Duration::from_millis(20));
        let started = std::time::Instant::now();
        session.login("user@example.com", "password").unwrap();
        assert!(started.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn test_embedded_plan_is_a_snapshot() {
        let store = seeded();
        let records = RecordStore::new(store.clone());
        let mut session = SessionStore::boot(store).unwrap();
        session.login("user@example.com", "password").unwrap();

        let mut standard: Plan = records.plans().get("standard").unwrap().unwrap();
        standard.price = 99.0;
        records.plans().update(standard).unwrap();

        let user = records.users().get("user1").unwrap().unwrap();
        assert_eq!(user.subscription_plan.unwrap().price, 14.99);
    }
}
