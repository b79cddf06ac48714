//! Identity and storage key shared by every stored collection

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A record that lives in one of the Record Store collections
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Human-readable name used in errors and logs
    const KIND: &'static str;

    /// Key of the whole-collection snapshot in durable storage
    const STORAGE_KEY: &'static str;

    /// Opaque identifier, unique within the collection by convention only
    fn id(&self) -> &str;
}

/// Timestamp-based id (`<prefix>-<unix millis>`) not used by any record in `existing`
pub fn fresh_id<T: Record>(prefix: &str, existing: &[T], now: DateTime<Utc>) -> String {
    let mut millis = now.timestamp_millis();
    loop {
        let id = format!("{}-{}", prefix, millis);
        if existing.iter().all(|record| record.id() != id) {
            return id;
        }
        millis += 1;
    }
}
