//! Channels and the program currently on air

use crate::domain::Record;
use serde::{Deserialize, Serialize};

/// Embedded program; start and end times are free-form labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub id: String,
    pub name: String,
    pub description: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub id: String,
    pub name: String,
    pub logo: String,
    /// Category slugs
    #[serde(default)]
    pub category: Vec<String>,
    pub description: String,
    #[serde(default)]
    pub is_live: bool,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_program: Option<Program>,
}

impl Record for Channel {
    const KIND: &'static str = "Channel";
    const STORAGE_KEY: &'static str = "pptv_db_channels";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Channel {
    pub fn in_category(&self, slug: &str) -> bool {
        self.category.iter().any(|c| c == slug)
    }

    /// Case-insensitive substring match on name or description
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }

    pub fn shares_category_with(&self, other: &Channel) -> bool {
        self.category.iter().any(|slug| other.in_category(slug))
    }
}

/// Partial edit applied by the admin console
#[derive(Debug, Clone, Default)]
pub struct ChannelPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub category: Option<Vec<String>>,
    pub is_live: Option<bool>,
    pub is_premium: Option<bool>,
}

impl ChannelPatch {
    pub fn apply(self, channel: &mut Channel) {
        if let Some(name) = self.name {
            channel.name = name;
        }
        if let Some(description) = self.description {
            channel.description = description;
        }
        if let Some(logo) = self.logo {
            channel.logo = logo;
        }
        if let Some(category) = self.category {
            channel.category = category;
        }
        if let Some(live) = self.is_live {
            channel.is_live = live;
        }
        if let Some(premium) = self.is_premium {
            channel.is_premium = premium;
        }
    }
}
