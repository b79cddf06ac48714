//! Domain layer - Storefront records and catalog rules

pub mod catalog;
pub mod category;
pub mod channel;
pub mod plan;
pub mod record;
pub mod seed;
pub mod user;

pub use catalog::ChannelFilter;
pub use category::{Category, CategoryPatch};
pub use channel::{Channel, ChannelPatch, Program};
pub use plan::{BillingCycle, Plan, PlanPatch};
pub use record::{fresh_id, Record};
pub use user::{BillingInfo, Role, SubscriptionStatus, User, UserPatch};
