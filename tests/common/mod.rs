#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

pub fn pptv_cmd() -> Command {
    let mut cmd = Command::cargo_bin("pptv").unwrap();
    cmd.env_remove("PPTV_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd.env("PPTV_LATENCY_MS", "0");
    cmd
}

/// Command running inside the workspace at `root`
pub fn pptv_in(root: &Path) -> Command {
    let mut cmd = pptv_cmd();
    cmd.current_dir(root);
    cmd
}

/// A freshly initialized and seeded workspace
pub fn workspace() -> TempDir {
    let temp = TempDir::new().unwrap();
    pptv_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

pub fn login(root: &Path, email: &str, password: &str) {
    pptv_in(root)
        .args(["login", email, password])
        .assert()
        .success();
}
