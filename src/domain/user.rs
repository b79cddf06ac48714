//! User accounts and the identity mirrored into the session

use crate::domain::{Plan, Record};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            _ => Err(format!("Invalid role: '{}'. Valid roles are: user, admin", s)),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Active,
    Inactive,
    Canceled,
}

impl FromStr for SubscriptionStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(SubscriptionStatus::Active),
            "inactive" => Ok(SubscriptionStatus::Inactive),
            "canceled" | "cancelled" => Ok(SubscriptionStatus::Canceled),
            _ => Err(format!(
                "Invalid subscription status: '{}'. Valid statuses are: active, inactive, canceled",
                s
            )),
        }
    }
}

impl fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubscriptionStatus::Active => write!(f, "active"),
            SubscriptionStatus::Inactive => write!(f, "inactive"),
            SubscriptionStatus::Canceled => write!(f, "canceled"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BillingInfo {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_last4: Option<String>,
}

/// A storefront account.
///
/// `subscription_plan` is a copy of the plan taken when the user subscribed.
/// Later edits to the plan record are not reflected here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_plan: Option<Plan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_status: Option<SubscriptionStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_info: Option<BillingInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
}

impl Record for User {
    const KIND: &'static str = "User";
    const STORAGE_KEY: &'static str = "pptv_db_users";

    fn id(&self) -> &str {
        &self.id
    }
}

impl User {
    /// Bare account with only the required fields set
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        User {
            id: id.into(),
            email: email.into(),
            name: None,
            avatar: None,
            role: None,
            subscription_plan: None,
            subscription_status: None,
            billing_info: None,
            created_at: None,
            last_login: None,
        }
    }

    pub fn role(&self) -> Role {
        self.role.unwrap_or_default()
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Role::Admin
    }

    /// Id of the embedded plan snapshot, if any
    pub fn plan_id(&self) -> Option<&str> {
        self.subscription_plan.as_ref().map(|plan| plan.id.as_str())
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

/// Fields merged into an existing account.
///
/// `subscription_plan` is doubly optional so an edit can clear the plan.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub email: Option<String>,
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub role: Option<Role>,
    pub subscription_plan: Option<Option<Plan>>,
    pub subscription_status: Option<SubscriptionStatus>,
    pub billing_info: Option<BillingInfo>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.name.is_none()
            && self.avatar.is_none()
            && self.role.is_none()
            && self.subscription_plan.is_none()
            && self.subscription_status.is_none()
            && self.billing_info.is_none()
    }

    pub fn apply(self, user: &mut User) {
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(name) = self.name {
            user.name = Some(name);
        }
        if let Some(avatar) = self.avatar {
            user.avatar = Some(avatar);
        }
        if let Some(role) = self.role {
            user.role = Some(role);
        }
        if let Some(plan) = self.subscription_plan {
            user.subscription_plan = plan;
        }
        if let Some(status) = self.subscription_status {
            user.subscription_status = Some(status);
        }
        if let Some(billing) = self.billing_info {
            user.billing_info = Some(billing);
        }
    }
}
