//! Minegrid Core Library
//!
//! This crate provides the auth protocol types, session storage and route
//! guarding, device fingerprinting, and the grid selection logic shared by
//! the Minegrid services.

pub mod auth;
pub mod fingerprint;
pub mod predict;
pub mod session;

pub use auth::{
    AuthBackend, AuthError, ErrorBody, HttpAuthClient, LoginRequest, LoginResponse,
    MockAuthBackend, SessionToken, VerifyRequest,
};
pub use fingerprint::{FingerprintProvider, FixedFingerprint, MachineFingerprint};
pub use predict::{
    pick_count, predict, MineCount, MineCountError, PredictorState, RandomSource, SeedError,
    SequenceRandom, ServerSeed, ThreadRandom, GRID_SIZE, TOTAL_CELLS,
};
pub use session::{
    FileSessionStore, GuardState, MemorySessionStore, Route, RouteGuard, SessionStore,
};
