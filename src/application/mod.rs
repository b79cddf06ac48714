//! Application layer - Use cases and orchestration

pub mod account;
pub mod admin;
pub mod catalog;
pub mod credentials;
pub mod init;
pub mod manage_config;
pub mod session;

pub use account::AccountService;
pub use admin::{AdminService, NewPlan, NewUser, UserEdit};
pub use catalog::{CatalogService, PlayerView};
pub use credentials::{CredentialVerifier, DemoCredentials, ProvisionedAccount};
pub use manage_config::ConfigService;
pub use session::SessionStore;
