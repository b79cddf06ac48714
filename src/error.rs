//! Error types for pptv

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the pptv storefront
#[derive(Debug, Error)]
pub enum PptvError {
    #[error("Not a pptv directory: {0}")]
    NotPptvDirectory(PathBuf),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("An account with email '{0}' already exists")]
    EmailTaken(String),

    #[error("Not signed in")]
    NotAuthenticated,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Channel '{0}' requires the premium plan")]
    PremiumRequired(String),

    #[error("Snapshot '{key}' has unsupported version {version}")]
    UnsupportedSnapshotVersion { key: String, version: u32 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl PptvError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        PptvError::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            PptvError::NotPptvDirectory(_) => 2,
            PptvError::InvalidCredentials | PptvError::EmailTaken(_) => 3,
            PptvError::NotFound { .. } => 4,
            PptvError::NotAuthenticated
            | PptvError::Forbidden(_)
            | PptvError::PremiumRequired(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            PptvError::NotPptvDirectory(path) => {
                format!(
                    "Not a pptv directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'pptv init' in this directory to create a storefront workspace\n\
                    • Navigate to an existing pptv directory\n\
                    • Set PPTV_ROOT environment variable to your workspace path",
                    path.display()
                )
            }
            PptvError::InvalidCredentials => {
                "Invalid email or password\n\n\
                Demo accounts:\n\
                • admin@example.com / admin123\n\
                • user@example.com / password\n\n\
                Or create an account: pptv register <email> <password> <name>"
                    .to_string()
            }
            PptvError::EmailTaken(email) => {
                format!(
                    "An account with email '{}' already exists\n\n\
                    Suggestions:\n\
                    • Sign in instead: pptv login {} <password>\n\
                    • Register with a different email address",
                    email, email
                )
            }
            PptvError::NotAuthenticated => "Not signed in\n\n\
                Suggestions:\n\
                • Sign in: pptv login <email> <password>\n\
                • Create an account: pptv register <email> <password> <name>"
                .to_string(),
            PptvError::PremiumRequired(channel) => {
                format!(
                    "Channel '{}' requires the premium plan\n\n\
                    Suggestions:\n\
                    • See available plans: pptv plans\n\
                    • Upgrade: pptv account subscribe premium",
                    channel
                )
            }
            PptvError::UnsupportedSnapshotVersion { key, version } => {
                format!(
                    "{}\n\n\
                    The snapshot '{}' was written by a newer pptv (version {}).\n\
                    Upgrade pptv before opening this workspace.",
                    self, key, version
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using PptvError
pub type Result<T> = std::result::Result<T, PptvError>;
