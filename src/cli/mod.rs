//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{
    AccountCommand, AdminCommand, BillingArgs, CategoryAdminCommand, ChannelAdminCommand, Cli,
    Commands, PlanAdminCommand, RemoteCommand, UserAdminCommand,
};
