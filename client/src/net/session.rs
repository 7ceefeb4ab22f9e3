//! The hosted identity service as seen by page flows.
//!
//! Pages never call `api` directly for auth; they go through
//! [`SessionService`] so the submit flows in `util::auth` can be exercised
//! against an in-memory fake.

use super::api;
use super::types::User;

/// Sign-in, sign-up and sign-out against the hosted identity service.
///
/// Every method is a single attempt: no retries, no timeouts beyond the
/// transport's own.
#[allow(async_fn_in_trait)]
pub trait SessionService {
    /// Email + password sign-in.
    async fn sign_in(&self, email: &str, password: &str) -> Result<User, String>;

    /// Create an account and set its display name.
    async fn sign_up(&self, name: &str, email: &str, password: &str) -> Result<User, String>;

    /// Federated (OAuth popup) sign-in.
    async fn sign_in_federated(&self) -> Result<User, String>;

    /// End the current session.
    async fn sign_out(&self) -> Result<(), String>;
}

/// [`SessionService`] backed by the host's `/api/auth/*` endpoints.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpSessionService;

impl SessionService for HttpSessionService {
    async fn sign_in(&self, email: &str, password: &str) -> Result<User, String> {
        api::sign_in(email, password).await
    }

    async fn sign_up(&self, name: &str, email: &str, password: &str) -> Result<User, String> {
        api::sign_up(name, email, password).await
    }

    async fn sign_in_federated(&self) -> Result<User, String> {
        api::sign_in_with_popup().await
    }

    async fn sign_out(&self) -> Result<(), String> {
        api::logout().await
    }
}
