//! Local decoding of the bearer token's claims segment.
//!
//! The token is only split and parsed, never verified: the server is the
//! trust boundary, the client merely reads out who it is acting as. Any
//! malformed input maps to the same generic decode error.

use crate::errors::{AppError, AppResult};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;

/// Claims carried in the token payload
#[derive(Debug, Clone, Deserialize)]
pub struct Claims {
    /// Subject identity (the account email)
    pub sub: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    /// Expiry as epoch seconds. Decoded but never checked client-side.
    #[serde(default)]
    pub exp: Option<i64>,
}

/// Split `header.payload.signature`, base64-decode the payload, and parse it
/// as JSON claims. Fails with a generic error on any malformed input.
pub fn decode_claims(token: &str) -> AppResult<Claims> {
    let payload = token.split('.').nth(1).ok_or(AppError::TokenDecode)?;

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.as_bytes())
        .map_err(|_| AppError::TokenDecode)?;

    serde_json::from_slice(&bytes).map_err(|_| AppError::TokenDecode)
}
