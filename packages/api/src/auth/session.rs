//! Session data types.

use serde::{Deserialize, Serialize};

/// Local-storage key holding the bearer token between page loads.
pub const TOKEN_STORAGE_KEY: &str = "auth.token";

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub nickname: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}
