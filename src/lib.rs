//! pptv - Command-line IPTV storefront
//!
//! A subscription storefront for live TV channels: browse the catalog, sign
//! in, manage a subscription, and administer users, plans and channels. All
//! state lives in versioned JSON snapshots inside a local workspace.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::PptvError;
