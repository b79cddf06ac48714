//! Channel visibility and filtering rules

use crate::domain::{Channel, User};

/// How many related channels the player suggests
pub const RELATED_CHANNEL_LIMIT: usize = 4;

/// Filter options for browsing the channel grid
#[derive(Debug, Clone, Default)]
pub struct ChannelFilter {
    /// Category slug; `None` shows every category
    pub category: Option<String>,
    pub search: Option<String>,
}

impl ChannelFilter {
    pub fn category(mut self, slug: impl Into<String>) -> Self {
        self.category = Some(slug.into());
        self
    }

    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search = Some(query.into());
        self
    }

    fn matches(&self, channel: &Channel) -> bool {
        let category_match = self
            .category
            .as_deref()
            .is_none_or(|slug| channel.in_category(slug));
        let search_match = self
            .search
            .as_deref()
            .is_none_or(|query| channel.matches_search(query));
        category_match && search_match
    }
}

/// Premium channels are reserved for viewers whose embedded plan is the premium plan.
///
/// The check looks at the plan id only, never at the plan's features.
pub fn can_view(channel: &Channel, viewer: Option<&User>, premium_plan_id: &str) -> bool {
    !channel.is_premium || viewer.and_then(User::plan_id) == Some(premium_plan_id)
}

/// Channels matching the filter that the viewer is allowed to see, in collection order
pub fn filter_channels(
    channels: Vec<Channel>,
    filter: &ChannelFilter,
    viewer: Option<&User>,
    premium_plan_id: &str,
) -> Vec<Channel> {
    channels
        .into_iter()
        .filter(|channel| filter.matches(channel) && can_view(channel, viewer, premium_plan_id))
        .collect()
}

/// Other channels sharing at least one category with `channel`
pub fn related_channels(channel: &Channel, channels: &[Channel]) -> Vec<Channel> {
    channels
        .iter()
        .filter(|other| other.id != channel.id && other.shares_category_with(channel))
        .take(RELATED_CHANNEL_LIMIT)
        .cloned()
        .collect()
}
