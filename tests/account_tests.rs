//! Integration tests for account management

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;

mod common;
use common::{login, pptv_in, workspace};

#[test]
fn test_account_requires_sign_in() {
    let temp = workspace();

    pptv_in(temp.path())
        .args(["account", "profile"])
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("Not signed in"));
}

#[test]
fn test_profile_update_writes_through() {
    let temp = workspace();
    login(temp.path(), "user@example.com", "password");

    pptv_in(temp.path())
        .args(["account", "profile", "--name", "Jo Viewer"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile updated"));

    let users = fs::read_to_string(temp.path().join(".pptv/data/pptv_db_users.json")).unwrap();
    assert!(users.contains("Jo Viewer"));

    pptv_in(temp.path())
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Jo Viewer"));
}

#[test]
fn test_billing_update() {
    let temp = workspace();
    login(temp.path(), "user@example.com", "password");

    pptv_in(temp.path())
        .args([
            "account",
            "billing",
            "--name",
            "Jo",
            "--address",
            "1 High St",
            "--city",
            "Leeds",
            "--state",
            "WY",
            "--zip",
            "LS1",
            "--country",
            "UK",
            "--card-last4",
            "4242",
        ])
        .assert()
        .success();

    pptv_in(temp.path())
        .args(["account", "profile"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 High St"))
        .stdout(predicate::str::contains("**** 4242"));
}

#[test]
fn test_subscribe_and_cancel() {
    let temp = workspace();
    login(temp.path(), "user@example.com", "password");

    pptv_in(temp.path())
        .args(["account", "subscribe", "basic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Subscribed to Basic"));

    pptv_in(temp.path())
        .args(["account", "cancel"])
        .assert()
        .success();

    pptv_in(temp.path())
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Plan: Basic"))
        .stdout(predicate::str::contains("Status: canceled"));
}

#[test]
fn test_subscribe_unknown_plan() {
    let temp = workspace();
    login(temp.path(), "user@example.com", "password");

    pptv_in(temp.path())
        .args(["account", "subscribe", "gold"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Plan not found: gold"));
}
