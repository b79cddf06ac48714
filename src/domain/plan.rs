//! Subscription plans

use crate::domain::Record;
use crate::error::{PptvError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How often a plan is billed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

impl FromStr for BillingCycle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "monthly" => Ok(BillingCycle::Monthly),
            "yearly" => Ok(BillingCycle::Yearly),
            _ => Err(format!(
                "Invalid billing cycle: '{}'. Valid cycles are: monthly, yearly",
                s
            )),
        }
    }
}

impl fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BillingCycle::Monthly => write!(f, "monthly"),
            BillingCycle::Yearly => write!(f, "yearly"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub billing_cycle: BillingCycle,
    #[serde(default)]
    pub features: Vec<String>,
    pub channel_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl Record for Plan {
    const KIND: &'static str = "Plan";
    const STORAGE_KEY: &'static str = "pptv_db_plans";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Plan {
    /// Plans without an explicit flag are offered
    pub fn is_active(&self) -> bool {
        self.is_active.unwrap_or(true)
    }

    /// Reject prices below zero and plans with no channels
    pub fn validate(&self) -> Result<()> {
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(PptvError::Config(format!(
                "Invalid price for plan '{}': {}",
                self.id, self.price
            )));
        }
        if self.channel_count == 0 {
            return Err(PptvError::Config(format!(
                "Plan '{}' must include at least one channel",
                self.id
            )));
        }
        Ok(())
    }
}

/// Split free-form feature text on newlines and commas, dropping blanks
pub fn parse_features(text: &str) -> Vec<String> {
    text.split(['\n', ','])
        .map(str::trim)
        .filter(|feature| !feature.is_empty())
        .map(str::to_string)
        .collect()
}

/// Partial edit applied by the admin console
#[derive(Debug, Clone, Default)]
pub struct PlanPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub billing_cycle: Option<BillingCycle>,
    pub features: Option<Vec<String>>,
    pub channel_count: Option<u32>,
    pub is_active: Option<bool>,
}

impl PlanPatch {
    pub fn apply(self, plan: &mut Plan) {
        if let Some(name) = self.name {
            plan.name = name;
        }
        if let Some(price) = self.price {
            plan.price = price;
        }
        if let Some(cycle) = self.billing_cycle {
            plan.billing_cycle = cycle;
        }
        if let Some(features) = self.features {
            plan.features = features;
        }
        if let Some(count) = self.channel_count {
            plan.channel_count = count;
        }
        if let Some(active) = self.is_active {
            plan.is_active = Some(active);
        }
    }
}
