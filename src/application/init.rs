//! Initialize storefront workspace use case

use crate::error::Result;
use crate::infrastructure::{Config, RecordStore, Workspace};
use std::fs;
use std::path::Path;

/// Initialize a new storefront workspace at the specified path.
///
/// Creates `.pptv/` with a default config and seeds every collection.
pub fn init(path: &Path) -> Result<Workspace> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let workspace = Workspace::new(path.to_path_buf());
    workspace.initialize()?;

    let config = Config::default();
    workspace.save_config(&config)?;

    RecordStore::new(workspace.store()).initialize()?;
    log::info!("initialized workspace at {}", path.display());

    println!("Initialized pptv storefront at {}", path.display());
    println!("Premium plan: {}", config.premium_plan_id);

    Ok(workspace)
}
