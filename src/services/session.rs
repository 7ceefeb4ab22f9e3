//! In-memory session store.
//!
//! ARCHITECTURE
//! ============
//! A session is an opaque random token (sent as an `HttpOnly` cookie) mapped
//! to the signed-in user. The map lives behind a tokio `RwLock` inside an
//! `Arc`, so `SessionStore` clones share one table across handlers.
//!
//! TRADE-OFFS
//! ==========
//! Sessions are not persisted: a host restart signs everyone out. The
//! identity platform remains the source of truth for accounts.

use std::collections::HashMap;
use std::fmt::Write;
use std::sync::Arc;

use client::net::types::User;
use rand::Rng;
use tokio::sync::RwLock;

use super::identity::IdentityAccount;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Map an identity account onto the wire user the browser sees.
#[must_use]
pub fn user_from_account(account: IdentityAccount) -> User {
    User { id: account.local_id, name: account.display_name, email: account.email, provider: account.provider }
}

#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, User>>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session for `user`, returning its token.
    pub async fn create(&self, user: User) -> String {
        let token = generate_token();
        self.inner.write().await.insert(token.clone(), user);
        token
    }

    /// Look up the user behind a token.
    pub async fn get(&self, token: &str) -> Option<User> {
        self.inner.read().await.get(token).cloned()
    }

    /// Remove a session. Returns whether it existed.
    pub async fn remove(&self, token: &str) -> bool {
        self.inner.write().await.remove(token).is_some()
    }

    /// Number of live sessions.
    pub async fn active_count(&self) -> usize {
        self.inner.read().await.len()
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
