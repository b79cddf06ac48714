//! Catalog browsing and the player lookup

use crate::domain::catalog::{can_view, filter_channels, related_channels};
use crate::domain::{Category, Channel, ChannelFilter, Plan, User};
use crate::error::{PptvError, Result};
use crate::infrastructure::{KeyValueStore, RecordStore, Repository};

/// What the player shows for a channel
#[derive(Debug, Clone)]
pub struct PlayerView {
    pub channel: Channel,
    pub related: Vec<Channel>,
}

pub struct CatalogService<S> {
    records: RecordStore<S>,
    premium_plan_id: String,
}

impl<S: KeyValueStore + Clone> CatalogService<S> {
    pub fn new(records: RecordStore<S>, premium_plan_id: impl Into<String>) -> Self {
        CatalogService {
            records,
            premium_plan_id: premium_plan_id.into(),
        }
    }

    /// Plans currently offered, in stored order
    pub fn list_plans(&self) -> Result<Vec<Plan>> {
        Ok(self
            .records
            .plans()
            .list()?
            .into_iter()
            .filter(Plan::is_active)
            .collect())
    }

    pub fn list_categories(&self) -> Result<Vec<Category>> {
        self.records.categories().list()
    }

    /// Channels the viewer may see that match `filter`
    pub fn browse_channels(
        &self,
        viewer: Option<&User>,
        filter: &ChannelFilter,
    ) -> Result<Vec<Channel>> {
        let channels = self.records.channels().list()?;
        Ok(filter_channels(
            channels,
            filter,
            viewer,
            &self.premium_plan_id,
        ))
    }

    /// Channel plus up to four related channels sharing a category
    pub fn watch(&self, viewer: Option<&User>, channel_id: &str) -> Result<PlayerView> {
        let channels = self.records.channels().list()?;
        let channel = channels
            .iter()
            .find(|c| c.id == channel_id)
            .cloned()
            .ok_or_else(|| PptvError::not_found("Channel", channel_id))?;

        if !can_view(&channel, viewer, &self.premium_plan_id) {
            return Err(PptvError::PremiumRequired(channel.id));
        }

        let related = related_channels(&channel, &channels);
        Ok(PlayerView { channel, related })
    }
}
