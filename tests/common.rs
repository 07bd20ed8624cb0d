#![allow(dead_code)]
use assert_cmd::{cargo_bin_cmd, Command};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use std::env;
use std::path::PathBuf;

pub fn vm() -> Command {
    cargo_bin_cmd!("volmgr")
}

/// Create a unique session-file path inside the system temp dir and remove
/// any existing file
pub fn setup_session_file(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_volmgr.token", name));
    let p = path.to_string_lossy().to_string();
    std::fs::remove_file(&p).ok();
    p
}

/// Build an unsigned token whose claims segment is the given JSON payload.
/// The client never verifies signatures, so a placeholder third segment is
/// enough.
pub fn make_token(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let claims = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
    format!("{}.{}.signature", header, claims)
}

/// A token for a plain volunteer account
pub fn volunteer_token() -> String {
    make_token(&serde_json::json!({
        "sub": "vol@example.org",
        "full_name": "Vol Unteer",
        "roles": ["volunteer"],
        "exp": 4_102_444_800i64
    }))
}

/// A token carrying the administrator role
pub fn admin_token() -> String {
    make_token(&serde_json::json!({
        "sub": "admin@example.org",
        "roles": ["volunteer", "administrator"],
        "exp": 4_102_444_800i64
    }))
}
