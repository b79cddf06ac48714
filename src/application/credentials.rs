//! Credential checks used by the session store

use crate::domain::{seed, User};
use crate::error::Result;
use chrono::{DateTime, Utc};

pub const DEMO_ADMIN_EMAIL: &str = "admin@example.com";
pub const DEMO_ADMIN_PASSWORD: &str = "admin123";
pub const DEMO_USER_EMAIL: &str = "user@example.com";
pub const DEMO_USER_PASSWORD: &str = "password";

/// An account produced by a verifier for an email with no stored record
#[derive(Debug, Clone, PartialEq)]
pub enum ProvisionedAccount {
    /// Insert into the users collection before signing in
    Stored(User),
    /// Sign in without storing a record
    Transient(User),
}

/// Decides which credentials open a session
pub trait CredentialVerifier {
    /// Check a credential against an account found in the users collection
    fn verify_existing(&self, user: &User, credential: &str) -> bool;

    /// Account to sign in when no stored user has `email`
    fn provision(
        &self,
        email: &str,
        credential: &str,
        now: DateTime<Utc>,
    ) -> Option<ProvisionedAccount>;

    /// Record the credential of a newly registered account
    fn enroll(&self, _user: &User, _credential: &str) -> Result<()> {
        Ok(())
    }
}

/// Accepts any credential for stored accounts and knows the two demo logins.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoCredentials;

impl CredentialVerifier for DemoCredentials {
    fn verify_existing(&self, _user: &User, _credential: &str) -> bool {
        true
    }

    fn provision(
        &self,
        email: &str,
        credential: &str,
        now: DateTime<Utc>,
    ) -> Option<ProvisionedAccount> {
        match (email, credential) {
            (DEMO_ADMIN_EMAIL, DEMO_ADMIN_PASSWORD) => {
                Some(ProvisionedAccount::Stored(seed::admin_user(now)))
            }
            (DEMO_USER_EMAIL, DEMO_USER_PASSWORD) => {
                Some(ProvisionedAccount::Transient(seed::demo_user()))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_admin_is_stored() {
        match DemoCredentials.provision(DEMO_ADMIN_EMAIL, DEMO_ADMIN_PASSWORD, Utc::now()) {
            Some(ProvisionedAccount::Stored(user)) => assert!(user.is_admin()),
            other => panic!("Expected stored admin, got {:?}", other),
        }
    }

    #[test]
    fn test_demo_user_is_transient_clone() {
        match DemoCredentials.provision(DEMO_USER_EMAIL, DEMO_USER_PASSWORD, Utc::now()) {
            Some(ProvisionedAccount::Transient(user)) => {
                assert_eq!(user, seed::demo_user());
            }
            other => panic!("Expected transient demo user, got {:?}", other),
        }
    }

    #[test]
    fn test_demo_requires_exact_match() {
        let now = Utc::now();
        assert!(DemoCredentials
            .provision(DEMO_ADMIN_EMAIL, "password", now)
            .is_none());
        assert!(DemoCredentials
            .provision("ADMIN@example.com", DEMO_ADMIN_PASSWORD, now)
            .is_none());
        assert!(DemoCredentials
            .provision("someone@example.com", "secret", now)
            .is_none());
    }

    #[test]
    fn test_existing_accounts_are_not_checked() {
        let user = seed::demo_user();
        assert!(DemoCredentials.verify_existing(&user, ""));
        assert!(DemoCredentials.verify_existing(&user, "anything"));
    }
}
