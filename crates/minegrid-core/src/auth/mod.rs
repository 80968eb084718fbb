//! Auth backend protocol: wire types, client trait, HTTP and mock implementations.

mod http;
mod mock;
mod traits;
mod types;

pub use http::HttpAuthClient;
pub use mock::MockAuthBackend;
pub use traits::{AuthBackend, AuthError, LOGIN_FAILED_MESSAGE};
pub use types::{ErrorBody, LoginRequest, LoginResponse, SessionToken, VerifyRequest};
