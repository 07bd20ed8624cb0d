//! End-to-end CLI behavior that needs no running API server: session
//! restore/logout through the binary, and the auth gates on protected
//! commands.

use predicates::prelude::*;
use std::fs;
use std::path::Path;

mod common;
use common::{admin_token, setup_session_file, vm, volunteer_token};

#[test]
fn test_whoami_reports_anonymous_without_token() {
    let session_file = setup_session_file("cli_anon");

    vm().args(["--session-file", &session_file, "whoami"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Not logged in"));
}

#[test]
fn test_whoami_shows_identity_from_stored_token() {
    let session_file = setup_session_file("cli_whoami");
    fs::write(&session_file, volunteer_token()).unwrap();

    vm().args(["--session-file", &session_file, "whoami"])
        .assert()
        .success()
        .stdout(predicates::str::contains("vol@example.org"))
        .stdout(predicates::str::contains("volunteer"));
}

#[test]
fn test_whoami_purges_malformed_stored_token() {
    let session_file = setup_session_file("cli_purge");
    fs::write(&session_file, "corrupted-token").unwrap();

    vm().args(["--session-file", &session_file, "whoami"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Not logged in"));

    assert!(
        !Path::new(&session_file).exists(),
        "undecodable stored token must be deleted on restore"
    );
}

#[test]
fn test_logout_clears_token_and_is_idempotent() {
    let session_file = setup_session_file("cli_logout");
    fs::write(&session_file, volunteer_token()).unwrap();

    vm().args(["--session-file", &session_file, "logout"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Logged out"));

    assert!(!Path::new(&session_file).exists());

    // a second logout on the now-anonymous session still succeeds
    vm().args(["--session-file", &session_file, "logout"])
        .assert()
        .success();

    // and whoami confirms the anonymous state
    vm().args(["--session-file", &session_file, "whoami"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Not logged in"));
}

#[test]
fn test_protected_command_requires_login() {
    let session_file = setup_session_file("cli_gate");

    vm().args(["--session-file", &session_file, "task", "list"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Not logged in"));
}

#[test]
fn test_admin_command_refused_for_plain_volunteer() {
    let session_file = setup_session_file("cli_admin_gate");
    fs::write(&session_file, volunteer_token()).unwrap();

    // refused client-side before any request is attempted
    vm().args(["--session-file", &session_file, "role", "list"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("permission"));
}

#[test]
fn test_admin_token_passes_the_client_side_gate() {
    let session_file = setup_session_file("cli_admin_ok");
    fs::write(&session_file, admin_token()).unwrap();

    // the gate passes and the command proceeds to the (unreachable) API,
    // so the failure is a network error rather than a permission one
    vm().args([
        "--session-file",
        &session_file,
        "--api-url",
        "http://127.0.0.1:9", // discard port, connection refused
        "role",
        "list",
    ])
    .assert()
    .failure()
    .stderr(predicates::str::contains("permission").not());
}

#[test]
fn test_whoami_flags_admin_role() {
    let session_file = setup_session_file("cli_admin_flag");
    fs::write(&session_file, admin_token()).unwrap();

    vm().args(["--session-file", &session_file, "whoami"])
        .assert()
        .success()
        .stdout(predicates::str::contains("admin@example.org"))
        .stdout(predicates::str::contains("true"));
}

#[test]
fn test_config_print_shows_overridden_api_url() {
    vm().args(["--api-url", "http://example.test/api/v1", "config", "--print"])
        .assert()
        .success()
        .stdout(predicates::str::contains("http://example.test/api/v1"));
}
