//! Infrastructure layer - Storage, persistence and configuration

pub mod config;
pub mod record_store;
pub mod remote;
pub mod repository;
pub mod snapshot;
pub mod storage;
pub mod workspace;

pub use config::Config;
pub use record_store::RecordStore;
pub use remote::{ConnectionConfig, ConnectionConfigPatch, RemoteDatabase, RemoteRepository};
pub use repository::{Repository, SnapshotRepository};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use workspace::Workspace;
