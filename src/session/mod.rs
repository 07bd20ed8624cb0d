//! Session and identity management.
//!
//! The session owns the bearer token and the identity decoded from it. It is
//! constructed once in `run()` and passed down to command handlers; durable
//! state is a single token file under the config directory. The pure state
//! accessors (`is_authenticated`, `is_admin`) are kept separate from the
//! effectful gates (`require_authenticated`, `require_admin`) that handlers
//! use to refuse work.

use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::PathBuf;

pub mod claims;

use claims::decode_claims;

/// Role name that unlocks the admin surfaces. Exact, case-sensitive match.
pub const ADMIN_ROLE: &str = "administrator";

/// Identity decoded from the token claims
#[derive(Debug, Clone)]
pub struct Identity {
    pub subject: String,
    pub full_name: Option<String>,
    pub roles: Vec<String>,
    /// Expiry as epoch seconds; exposed but never enforced client-side
    pub expires_at: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Before the first restore() pass
    Unknown,
    Anonymous,
    Authenticated,
}

/// File-backed durable storage for the raw token string.
/// Absence of the file means no session; an undecodable stored value is
/// treated as absence and the file is deleted.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> Option<String> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let token = raw.trim().to_string();
        if token.is_empty() { None } else { Some(token) }
    }

    pub fn save(&self, token: &str) -> AppResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&self.path, token)?;
        Ok(())
    }

    pub fn clear(&self) {
        let _ = fs::remove_file(&self.path);
    }
}

#[derive(Debug)]
pub struct Session {
    token: Option<String>,
    identity: Option<Identity>,
    state: SessionState,
    store: TokenStore,
}

impl Session {
    pub fn new(store: TokenStore) -> Self {
        Self {
            token: None,
            identity: None,
            state: SessionState::Unknown,
            store,
        }
    }

    /// Read the stored token (if any) and decode it. On success the session
    /// becomes authenticated; on absence or decode failure any stale stored
    /// token is purged and the session is anonymous. Never fails: failure
    /// only surfaces as "no session". Runs the Unknown -> Anonymous or
    /// Unknown -> Authenticated transition exactly once.
    pub fn restore(&mut self) {
        if let Some(stored) = self.store.load() {
            match decode_claims(&stored) {
                Ok(claims) => {
                    self.identity = Some(identity_from(claims));
                    self.token = Some(stored);
                    self.state = SessionState::Authenticated;
                    return;
                }
                Err(_) => {
                    // stale or corrupted token, drop it
                    self.store.clear();
                }
            }
        }
        self.state = SessionState::Anonymous;
    }

    /// Accept a freshly issued token. The token is decoded first; only on
    /// success is it committed to memory and durable storage. On failure the
    /// session is left exactly as it was.
    pub fn login(&mut self, token: &str) -> AppResult<()> {
        let claims = decode_claims(token)?;
        self.store.save(token)?;
        self.identity = Some(identity_from(claims));
        self.token = Some(token.to_string());
        self.state = SessionState::Authenticated;
        Ok(())
    }

    /// Clear memory and durable storage unconditionally. Idempotent.
    pub fn logout(&mut self) {
        self.store.clear();
        self.token = None;
        self.identity = None;
        self.state = SessionState::Anonymous;
    }

    /// True only before the first restore() pass has completed
    pub fn is_loading(&self) -> bool {
        self.state == SessionState::Unknown
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// A held token implies a successful decode already happened
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Never an error when anonymous, just false
    pub fn is_admin(&self) -> bool {
        self.identity
            .as_ref()
            .map(|id| id.roles.iter().any(|r| r == ADMIN_ROLE))
            .unwrap_or(false)
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// Gate for commands that need a signed-in user
    pub fn require_authenticated(&self) -> AppResult<&str> {
        self.token.as_deref().ok_or(AppError::NotLoggedIn)
    }

    /// Gate for admin-only commands. A client-side convenience only; the
    /// backend remains the enforcement point.
    pub fn require_admin(&self) -> AppResult<&str> {
        let token = self.require_authenticated()?;
        if self.is_admin() {
            Ok(token)
        } else {
            Err(AppError::Forbidden)
        }
    }
}

fn identity_from(claims: claims::Claims) -> Identity {
    Identity {
        subject: claims.sub,
        full_name: claims.full_name,
        roles: claims.roles,
        expires_at: claims.exp,
    }
}
