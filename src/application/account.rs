//! Account management for the signed-in user

use crate::application::credentials::CredentialVerifier;
use crate::application::SessionStore;
use crate::domain::{BillingInfo, Plan, SubscriptionStatus, User, UserPatch};
use crate::error::{PptvError, Result};
use crate::infrastructure::{KeyValueStore, Repository};

/// Every operation needs a signed-in user and writes through the session
pub struct AccountService<'a, S, V> {
    session: &'a mut SessionStore<S, V>,
}

impl<'a, S, V> AccountService<'a, S, V>
where
    S: KeyValueStore + Clone,
    V: CredentialVerifier,
{
    pub fn new(session: &'a mut SessionStore<S, V>) -> Self {
        AccountService { session }
    }

    pub fn profile(&self) -> Result<&User> {
        self.session.require_user()
    }

    /// Change the display name and/or avatar; at least one must be given
    pub fn update_profile(&mut self, name: Option<String>, avatar: Option<String>) -> Result<User> {
        let patch = UserPatch {
            name,
            avatar,
            ..Default::default()
        };
        if patch.is_empty() {
            return Err(PptvError::Config(
                "Nothing to update: pass --name and/or --avatar".to_string(),
            ));
        }
        self.apply(patch)
    }

    pub fn update_billing(&mut self, billing: BillingInfo) -> Result<User> {
        self.apply(UserPatch {
            billing_info: Some(billing),
            ..Default::default()
        })
    }

    /// Embed a copy of the plan and mark the subscription active
    pub fn subscribe(&mut self, plan_id: &str) -> Result<User> {
        self.session.require_user()?;

        let plan: Plan = self
            .session
            .records()
            .plans()
            .get(plan_id)?
            .ok_or_else(|| PptvError::not_found("Plan", plan_id))?;
        if !plan.is_active() {
            return Err(PptvError::Forbidden(format!(
                "plan '{}' is no longer offered",
                plan_id
            )));
        }

        log::info!("subscribing to plan {}", plan.id);
        self.apply(UserPatch {
            subscription_plan: Some(Some(plan)),
            subscription_status: Some(SubscriptionStatus::Active),
            ..Default::default()
        })
    }

    /// Mark the subscription canceled; the embedded plan is kept for reference
    pub fn cancel(&mut self) -> Result<User> {
        let user = self.session.require_user()?;
        if user.subscription_plan.is_none() {
            return Err(PptvError::Config("No subscription to cancel".to_string()));
        }

        self.apply(UserPatch {
            subscription_status: Some(SubscriptionStatus::Canceled),
            ..Default::default()
        })
    }

    fn apply(&mut self, patch: UserPatch) -> Result<User> {
        self.session
            .update_identity(patch)?
            .cloned()
            .ok_or(PptvError::NotAuthenticated)
    }
}
