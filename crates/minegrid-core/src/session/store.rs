//! Session token storage.
//!
//! One slot holding the bearer token: set on successful login, cleared on
//! failed verification, read once at startup. The file-backed store gives
//! the token the reload-surviving durability of browser storage.

use crate::auth::SessionToken;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Storage for the session's bearer token.
///
/// Mutated only from discrete user or lifecycle events; absence means
/// "logged out". Storage failures never surface to callers, matching the
/// browser-storage behavior this models.
pub trait SessionStore: Send + Sync {
    /// The stored token, if any.
    fn token(&self) -> Option<SessionToken>;

    /// Replace the stored token.
    fn set_token(&self, token: SessionToken);

    /// Forget the stored token.
    fn clear(&self);
}

/// Volatile in-memory store, for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemorySessionStore {
    slot: Mutex<Option<SessionToken>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<SessionToken> {
        self.slot.lock().unwrap().clone()
    }

    fn set_token(&self, token: SessionToken) {
        *self.slot.lock().unwrap() = Some(token);
    }

    fn clear(&self) {
        self.slot.lock().unwrap().take();
    }
}

/// On-disk persisted form.
#[derive(Serialize, Deserialize)]
struct PersistedSession {
    token: SessionToken,
}

/// Durable store backed by a JSON file.
///
/// The file is read once when the store opens; afterwards the in-memory
/// slot is authoritative and writes go through to disk.
pub struct FileSessionStore {
    path: PathBuf,
    cached: Mutex<Option<SessionToken>>,
}

impl FileSessionStore {
    /// Open the store, loading any token persisted by a previous run.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let cached = Self::load(&path);
        Self { path, cached: Mutex::new(cached) }
    }

    fn load(path: &Path) -> Option<SessionToken> {
        let raw = fs::read_to_string(path).ok()?;
        match serde_json::from_str::<PersistedSession>(&raw) {
            Ok(persisted) => Some(persisted.token),
            Err(e) => {
                // Unreadable state is the same as no state.
                warn!("ignoring corrupt session file {}: {}", path.display(), e);
                None
            }
        }
    }
}

impl SessionStore for FileSessionStore {
    fn token(&self) -> Option<SessionToken> {
        self.cached.lock().unwrap().clone()
    }

    fn set_token(&self, token: SessionToken) {
        *self.cached.lock().unwrap() = Some(token.clone());

        match serde_json::to_string(&PersistedSession { token }) {
            Ok(payload) => {
                if let Err(e) = fs::write(&self.path, payload) {
                    warn!("failed to persist session to {}: {}", self.path.display(), e);
                }
            }
            Err(e) => warn!("failed to encode session: {}", e),
        }
    }

    fn clear(&self) {
        self.cached.lock().unwrap().take();

        if let Err(e) = fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!("failed to remove session file {}: {}", self.path.display(), e);
            }
        }
    }
}
