//! Device fingerprinting.
//!
//! The fingerprint binds a session token to the device that requested it.
//! It is computed once per process start and stays fixed for the lifetime
//! of the process; it is never persisted.

use sha2::{Digest, Sha256};

/// Source of the stable per-device identifier.
pub trait FingerprintProvider: Send + Sync {
    /// The device identifier, stable for the lifetime of the process.
    fn visitor_id(&self) -> String;
}

/// Fixed fingerprint for tests.
#[derive(Clone, Debug)]
pub struct FixedFingerprint(String);

impl FixedFingerprint {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl FingerprintProvider for FixedFingerprint {
    fn visitor_id(&self) -> String {
        self.0.clone()
    }
}

/// Fingerprint derived from stable facts about the host.
///
/// The digest covers the platform plus the host and user environment, so
/// the same machine and account keep the same identifier across restarts
/// while different machines diverge.
#[derive(Clone, Debug)]
pub struct MachineFingerprint {
    id: String,
}

impl MachineFingerprint {
    /// Compute the fingerprint for this host.
    pub fn detect() -> Self {
        let mut hasher = Sha256::new();
        hasher.update(b"minegrid-fingerprint-v1");
        hasher.update(std::env::consts::OS.as_bytes());
        hasher.update(std::env::consts::ARCH.as_bytes());
        for var in ["HOSTNAME", "COMPUTERNAME", "USER", "USERNAME", "HOME"] {
            if let Ok(value) = std::env::var(var) {
                hasher.update(var.as_bytes());
                hasher.update(value.as_bytes());
            }
        }
        Self { id: hex::encode(hasher.finalize()) }
    }
}

impl FingerprintProvider for MachineFingerprint {
    fn visitor_id(&self) -> String {
        self.id.clone()
    }
}
