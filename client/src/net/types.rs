//! Shared wire DTOs for the client/host boundary.
//!
//! DESIGN
//! ======
//! These mirror the JSON bodies of the host's `/api/auth/*` endpoints so
//! serde round-trips stay lossless.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by the `/api/auth/*` endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Identity-provider user id.
    pub id: String,
    /// Display name (may be empty for accounts created without one).
    #[serde(default)]
    pub name: String,
    /// Account email.
    #[serde(default)]
    pub email: String,
    /// How the session was created (`"password"` or `"google.com"`).
    #[serde(default = "default_provider")]
    pub provider: String,
}

fn default_provider() -> String {
    "password".to_owned()
}

/// Body of `POST /api/auth/sign-in`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/auth/sign-up`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Error body returned by the host on any non-2xx auth response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
