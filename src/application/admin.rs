//! Admin console: CRUD over users, plans, channels and categories
//!
//! Unknown ids are reported as `NotFound` here even though the underlying
//! repository treats them as silent no-ops.

use crate::application::credentials::CredentialVerifier;
use crate::application::SessionStore;
use crate::domain::{
    fresh_id, BillingCycle, Category, CategoryPatch, Channel, ChannelPatch, Plan, PlanPatch,
    Record, Role, SubscriptionStatus, User, UserPatch,
};
use crate::error::{PptvError, Result};
use crate::infrastructure::{KeyValueStore, Repository};
use chrono::Utc;

/// Fields for a user created from the console
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: Option<String>,
    pub role: Role,
    pub plan_id: Option<String>,
    pub subscription_status: Option<SubscriptionStatus>,
}

/// Console edit of a user; the plan is given by id and embedded on save
#[derive(Debug, Clone, Default)]
pub struct UserEdit {
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: Option<Role>,
    /// `Some(None)` clears the plan
    pub plan_id: Option<Option<String>>,
    pub subscription_status: Option<SubscriptionStatus>,
}

#[derive(Debug, Clone)]
pub struct NewPlan {
    pub name: String,
    pub price: f64,
    pub billing_cycle: BillingCycle,
    pub features: Vec<String>,
    pub channel_count: u32,
    pub is_active: bool,
}

pub struct AdminService<'a, S, V> {
    session: &'a mut SessionStore<S, V>,
}

impl<'a, S, V> AdminService<'a, S, V>
where
    S: KeyValueStore + Clone,
    V: CredentialVerifier,
{
    /// Open the console; only admins get in
    pub fn new(session: &'a mut SessionStore<S, V>) -> Result<Self> {
        let user = session.require_user()?;
        if !user.is_admin() {
            return Err(PptvError::Forbidden(format!(
                "{} is not an administrator",
                user.email
            )));
        }
        Ok(AdminService { session })
    }

    // Users

    pub fn list_users(&self) -> Result<Vec<User>> {
        self.session.records().users().list()
    }

    pub fn add_user(&mut self, new_user: NewUser) -> Result<User> {
        let plan = self.embedded_plan(new_user.plan_id.as_deref())?;
        let users = self.session.records().users();
        let existing = users.list()?;

        let now = Utc::now();
        let mut user = User::new(fresh_id("user", &existing, now), new_user.email);
        user.name = new_user.name;
        user.role = Some(new_user.role);
        user.subscription_plan = plan;
        user.subscription_status = new_user.subscription_status;
        user.created_at = Some(now);

        users.insert(user.clone())?;
        log::info!("admin created user {} ({})", user.id, user.email);
        Ok(user)
    }

    pub fn edit_user(&mut self, id: &str, edit: UserEdit) -> Result<User> {
        let users = self.session.records().users();
        let mut user = users.get(id)?.ok_or_else(|| PptvError::not_found(User::KIND, id))?;

        let subscription_plan = match edit.plan_id {
            Some(plan_id) => Some(self.embedded_plan(plan_id.as_deref())?),
            None => None,
        };
        UserPatch {
            email: edit.email,
            name: edit.name,
            avatar: None,
            role: edit.role,
            subscription_plan,
            subscription_status: edit.subscription_status,
            billing_info: None,
        }
        .apply(&mut user);

        self.save(&users, user.clone())?;
        self.session.sync_identity(&user)?;
        log::info!("admin updated user {}", user.id);
        Ok(user)
    }

    pub fn delete_user(&mut self, id: &str) -> Result<()> {
        self.remove(&self.session.records().users(), id)
    }

    // Plans

    /// Every plan, including ones no longer offered
    pub fn list_plans(&self) -> Result<Vec<Plan>> {
        self.session.records().plans().list()
    }

    pub fn add_plan(&mut self, new_plan: NewPlan) -> Result<Plan> {
        let plans = self.session.records().plans();
        let existing = plans.list()?;

        let plan = Plan {
            id: fresh_id("plan", &existing, Utc::now()),
            name: new_plan.name,
            price: new_plan.price,
            billing_cycle: new_plan.billing_cycle,
            features: new_plan.features,
            channel_count: new_plan.channel_count,
            is_active: Some(new_plan.is_active),
        };
        plan.validate()?;

        plans.insert(plan.clone())?;
        log::info!("admin created plan {} ({})", plan.id, plan.name);
        Ok(plan)
    }

    /// Edit a plan. Users keep the copy embedded when they subscribed.
    pub fn edit_plan(&mut self, id: &str, patch: PlanPatch) -> Result<Plan> {
        let plans = self.session.records().plans();
        let mut plan = plans.get(id)?.ok_or_else(|| PptvError::not_found(Plan::KIND, id))?;
        patch.apply(&mut plan);
        plan.validate()?;

        self.save(&plans, plan.clone())?;
        log::info!("admin updated plan {}", plan.id);
        Ok(plan)
    }

    pub fn delete_plan(&mut self, id: &str) -> Result<()> {
        self.remove(&self.session.records().plans(), id)
    }

    // Channels

    pub fn list_channels(&self) -> Result<Vec<Channel>> {
        self.session.records().channels().list()
    }

    pub fn edit_channel(&mut self, id: &str, patch: ChannelPatch) -> Result<Channel> {
        let channels = self.session.records().channels();
        let mut channel = channels
            .get(id)?
            .ok_or_else(|| PptvError::not_found(Channel::KIND, id))?;
        patch.apply(&mut channel);

        self.save(&channels, channel.clone())?;
        log::info!("admin updated channel {}", channel.id);
        Ok(channel)
    }

    // Categories

    pub fn list_categories(&self) -> Result<Vec<Category>> {
        self.session.records().categories().list()
    }

    pub fn edit_category(&mut self, id: &str, patch: CategoryPatch) -> Result<Category> {
        let categories = self.session.records().categories();
        let mut category = categories
            .get(id)?
            .ok_or_else(|| PptvError::not_found(Category::KIND, id))?;
        patch.apply(&mut category);

        self.save(&categories, category.clone())?;
        log::info!("admin updated category {}", category.id);
        Ok(category)
    }

    fn embedded_plan(&self, plan_id: Option<&str>) -> Result<Option<Plan>> {
        match plan_id {
            Some(id) => self
                .session
                .records()
                .plans()
                .get(id)?
                .map(Some)
                .ok_or_else(|| PptvError::not_found(Plan::KIND, id)),
            None => Ok(None),
        }
    }

    fn save<T: Record, R: Repository<T>>(&self, repo: &R, record: T) -> Result<()> {
        let id = record.id().to_string();
        if repo.update(record)? {
            Ok(())
        } else {
            Err(PptvError::not_found(T::KIND, id))
        }
    }

    fn remove<T: Record, R: Repository<T>>(&self, repo: &R, id: &str) -> Result<()> {
        if repo.remove(id)? {
            log::info!("admin deleted {} {}", T::KIND, id);
            Ok(())
        } else {
            Err(PptvError::not_found(T::KIND, id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{MemoryStore, RecordStore};

    fn session_as(email: &str, password: &str) -> SessionStore<MemoryStore> {
        let store = MemoryStore::new();
        RecordStore::new(store.clone()).initialize().unwrap();
        let mut session = SessionStore::boot(store).unwrap();
        session.login(email, password).unwrap();
        session
    }

    fn admin_session() -> SessionStore<MemoryStore> {
        session_as("admin@example.com", "admin123")
    }

    #[test]
    fn test_console_requires_admin() {
        let mut viewer = session_as("user@example.com", "password");
        assert!(matches!(
            AdminService::new(&mut viewer),
            Err(PptvError::Forbidden(_))
        ));

        let mut anonymous = SessionStore::boot(MemoryStore::new()).unwrap();
        assert!(matches!(
            AdminService::new(&mut anonymous),
            Err(PptvError::NotAuthenticated)
        ));
    }

    #[test]
    fn test_add_user_embeds_plan() {
        let mut session = admin_session();
        let mut admin = AdminService::new(&mut session).unwrap();

        let user = admin
            .add_user(NewUser {
                email: "kid@example.com".into(),
                name: Some("Kid".into()),
                role: Role::User,
                plan_id: Some("basic".into()),
                subscription_status: Some(SubscriptionStatus::Active),
            })
            .unwrap();

        assert!(user.id.starts_with("user-"));
        assert_eq!(user.plan_id(), Some("basic"));
        assert!(user.created_at.is_some());
        assert_eq!(admin.list_users().unwrap().len(), 3);
    }

    #[test]
    fn test_add_user_with_unknown_plan_fails() {
        let mut session = admin_session();
        let mut admin = AdminService::new(&mut session).unwrap();

        let err = admin
            .add_user(NewUser {
                email: "kid@example.com".into(),
                name: None,
                role: Role::User,
                plan_id: Some("gold".into()),
                subscription_status: None,
            })
            .unwrap_err();
        assert!(matches!(err, PptvError::NotFound { kind: "Plan", .. }));
        assert_eq!(admin.list_users().unwrap().len(), 2);
    }

    #[test]
    fn test_edit_user_changes_plan_and_status() {
        let mut session = admin_session();
        let mut admin = AdminService::new(&mut session).unwrap();

        let user = admin
            .edit_user(
                "user1",
                UserEdit {
                    plan_id: Some(Some("premium".into())),
                    subscription_status: Some(SubscriptionStatus::Canceled),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(user.plan_id(), Some("premium"));
        assert_eq!(user.subscription_status, Some(SubscriptionStatus::Canceled));

        let cleared = admin
            .edit_user(
                "user1",
                UserEdit {
                    plan_id: Some(None),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(cleared.subscription_plan.is_none());
    }

    #[test]
    fn test_editing_self_refreshes_session() {
        let mut session = admin_session();
        AdminService::new(&mut session)
            .unwrap()
            .edit_user(
                "admin-1",
                UserEdit {
                    name: Some("Root".into()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(session.current().unwrap().name.as_deref(), Some("Root"));
    }

    #[test]
    fn test_unknown_ids_are_not_found() {
        let mut session = admin_session();
        let mut admin = AdminService::new(&mut session).unwrap();

        assert!(matches!(
            admin.edit_user("ghost", UserEdit::default()),
            Err(PptvError::NotFound { kind: "User", .. })
        ));
        assert!(matches!(
            admin.delete_user("ghost"),
            Err(PptvError::NotFound { .. })
        ));
        assert!(matches!(
            admin.delete_plan("ghost"),
            Err(PptvError::NotFound { kind: "Plan", .. })
        ));
        assert!(matches!(
            admin.edit_channel("ghost", ChannelPatch::default()),
            Err(PptvError::NotFound { kind: "Channel", .. })
        ));
        assert!(matches!(
            admin.edit_category("ghost", CategoryPatch::default()),
            Err(PptvError::NotFound { kind: "Category", .. })
        ));
    }

    #[test]
    fn test_delete_user() {
        let mut session = admin_session();
        let mut admin = AdminService::new(&mut session).unwrap();
        admin.delete_user("user1").unwrap();

        let ids: Vec<String> = admin.list_users().unwrap().into_iter().map(|u| u.id).collect();
        assert_eq!(ids, vec!["admin-1"]);
    }

    #[test]
    fn test_add_plan_validates() {
        let mut session = admin_session();
        let mut admin = AdminService::new(&mut session).unwrap();

        let plan = admin
            .add_plan(NewPlan {
                name: "Annual".into(),
                price: 199.0,
                billing_cycle: BillingCycle::Yearly,
                features: vec!["Everything".into()],
                channel_count: 150,
                is_active: true,
            })
            .unwrap();
        assert!(plan.id.starts_with("plan-"));
        assert_eq!(admin.list_plans().unwrap().len(), 4);

        let err = admin
            .add_plan(NewPlan {
                name: "Free".into(),
                price: -1.0,
                billing_cycle: BillingCycle::Monthly,
                features: vec![],
                channel_count: 10,
                is_active: true,
            })
            .unwrap_err();
        assert!(matches!(err, PptvError::Config(_)));
        assert_eq!(admin.list_plans().unwrap().len(), 4);
    }

    #[test]
    fn test_edit_plan_leaves_embedded_snapshots() {
        let mut session = admin_session();
        let mut admin = AdminService::new(&mut session).unwrap();

        admin
            .edit_plan(
                "standard",
                PlanPatch {
                    price: Some(24.99),
                    ..Default::default()
                },
            )
            .unwrap();

        let demo = admin
            .list_users()
            .unwrap()
            .into_iter()
            .find(|u| u.id == "user1")
            .unwrap();
        assert_eq!(demo.subscription_plan.unwrap().price, 14.99);
    }

    #[test]
    fn test_edit_channel_and_category() {
        let mut session = admin_session();
        let mut admin = AdminService::new(&mut session).unwrap();

        let channel = admin
            .edit_channel(
                "ch4",
                ChannelPatch {
                    is_premium: Some(true),
                    category: Some(vec!["kids".into(), "movies".into()]),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(channel.is_premium);
        assert!(channel.in_category("movies"));

        let category = admin
            .edit_category(
                "kids",
                CategoryPatch {
                    name: Some("Family".into()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(category.name, "Family");
        assert_eq!(category.slug, "kids");
        assert_eq!(admin.list_channels().unwrap().len(), 12);
        assert_eq!(admin.list_categories().unwrap().len(), 7);
    }
}
