//! Storefront workspace on disk
//!
//! A workspace is any directory holding a `.pptv/` folder with `config.toml`
//! and a `data/` directory of snapshot files.

use crate::error::{PptvError, Result};
use crate::infrastructure::{Config, FileStore};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable pointing at the workspace root
pub const ROOT_ENV: &str = "PPTV_ROOT";

#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
}

impl Workspace {
    pub fn new(root: PathBuf) -> Self {
        Workspace { root }
    }

    /// Find the workspace root.
    /// First checks PPTV_ROOT, then walks up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_pptv_dir(&path) {
                return Ok(Workspace::new(path));
            } else {
                return Err(PptvError::Config(format!(
                    "PPTV_ROOT is set to '{}' but no .pptv directory found. \
                    Run 'pptv init' in that directory or unset PPTV_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Walk up from `start` until a directory with `.pptv/` is found
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_pptv_dir(&current) {
                return Ok(Workspace::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(PptvError::NotPptvDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_pptv_dir(path: &Path) -> bool {
        path.join(".pptv").is_dir()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_pptv_dir(&self.root)
    }

    /// Create `.pptv/` and its data directory; fails if already present
    pub fn initialize(&self) -> Result<()> {
        let pptv_dir = self.root.join(".pptv");

        if pptv_dir.exists() {
            return Err(PptvError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&pptv_dir)?;
        fs::create_dir(self.data_dir())?;
        Ok(())
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.join(".pptv").join("data")
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    /// Key-value store over the workspace's data directory
    pub fn store(&self) -> FileStore {
        FileStore::new(self.data_dir())
    }
}
