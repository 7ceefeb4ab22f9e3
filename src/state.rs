//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! identity provider sits behind a trait object so handler tests can swap in
//! a scripted fake. `None` means the host runs without identity settings and
//! the auth endpoints answer 503.

use std::sync::Arc;

use crate::services::google::GoogleConfig;
use crate::services::identity::IdentityProvider;
use crate::services::session::SessionStore;

/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    pub identity: Option<Arc<dyn IdentityProvider>>,
    pub google: Option<GoogleConfig>,
    /// Shared outbound client for the Google token exchange.
    pub http: reqwest::Client,
    pub cookie_secure: bool,
}

impl AppState {
    #[must_use]
    pub fn new(
        identity: Option<Arc<dyn IdentityProvider>>,
        google: Option<GoogleConfig>,
        cookie_secure: bool,
    ) -> Self {
        Self { sessions: SessionStore::new(), identity, google, http: reqwest::Client::new(), cookie_secure }
    }
}
