//! Versioned JSON envelope around every stored snapshot.
//!
//! Snapshots are written as `{"version": N, "data": ...}`. A value without
//! the envelope is the bare layout browser storage used and is read as
//! version 0, then migrated forward in memory. Nothing is rewritten on read;
//! the next save stores the current version.

use crate::error::{PptvError, Result};
use crate::infrastructure::KeyValueStore;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Version written by this build
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize)]
struct EnvelopeRef<'a, T> {
    version: u32,
    data: &'a T,
}

#[derive(Deserialize)]
struct Envelope {
    version: u32,
    data: Value,
}

pub fn encode<T: Serialize>(data: &T) -> Result<String> {
    let envelope = EnvelopeRef {
        version: SNAPSHOT_VERSION,
        data,
    };
    Ok(serde_json::to_string(&envelope)?)
}

pub fn decode<T: DeserializeOwned>(key: &str, raw: &str) -> Result<T> {
    let value: Value = serde_json::from_str(raw)?;

    let (version, data) = if is_envelope(&value) {
        let envelope: Envelope = serde_json::from_value(value)?;
        (envelope.version, envelope.data)
    } else {
        (0, value)
    };

    if version > SNAPSHOT_VERSION {
        return Err(PptvError::UnsupportedSnapshotVersion {
            key: key.to_string(),
            version,
        });
    }

    let data = migrate(key, version, data);
    Ok(serde_json::from_value(data)?)
}

fn is_envelope(value: &Value) -> bool {
    value.as_object().is_some_and(|object| {
        object.len() == 2
            && object.get("version").is_some_and(Value::is_u64)
            && object.contains_key("data")
    })
}

fn migrate(key: &str, version: u32, data: Value) -> Value {
    // Version 0 records already have the version 1 shape; only the envelope is new.
    if version < SNAPSHOT_VERSION {
        log::debug!(
            "migrating {} from version {} to {}",
            key,
            version,
            SNAPSHOT_VERSION
        );
    }
    data
}

/// Load and decode the snapshot under `key`
pub fn load<S, T>(store: &S, key: &str) -> Result<Option<T>>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    match store.get(key)? {
        Some(raw) => decode(key, &raw).map(Some),
        None => Ok(None),
    }
}

/// Encode `data` and store it under `key`, replacing any previous snapshot
pub fn save<S, T>(store: &S, key: &str, data: &T) -> Result<()>
where
    S: KeyValueStore + ?Sized,
    T: Serialize,
{
    store.set(key, &encode(data)?)
}
