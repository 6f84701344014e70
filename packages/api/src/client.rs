//! # REST client
//!
//! [`ApiClient`] wraps a [`reqwest::Client`] (the browser `fetch` API on WASM)
//! with the portal's base URL and an optional bearer token. Every method maps
//! a non-2xx response to [`ApiError::Status`], keeping the server's `detail`
//! so pages can show it inline.
//!
//! | Method | Endpoint |
//! |--------|----------|
//! | [`login`](ApiClient::login) | `POST /auth/login` |
//! | [`me`](ApiClient::me) | `GET /auth/me` |
//! | [`list_users`](ApiClient::list_users) | `GET /admin/users` |
//! | [`get_user`](ApiClient::get_user) | `GET /admin/users/:id` |
//! | [`create_user`](ApiClient::create_user) | `POST /admin/users` |
//! | [`update_user`](ApiClient::update_user) | `PATCH /admin/users/:id` |

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::auth::{LoginRequest, TokenResponse};
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::models::{AdminUser, NewUser, SessionUser, UserPatch};

#[derive(Deserialize)]
struct UserList {
    items: Vec<AdminUser>,
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            token: None,
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// Exchange credentials for an access token.
    pub async fn login(&self, nickname: &str, password: &str) -> Result<String, ApiError> {
        let body = LoginRequest {
            nickname: nickname.to_string(),
            password: password.to_string(),
        };
        let response = self
            .request(Method::POST, "/auth/login")
            .json(&body)
            .send()
            .await?;
        let token: TokenResponse = decode(response).await?;
        Ok(token.access_token)
    }

    pub async fn me(&self) -> Result<SessionUser, ApiError> {
        self.send_json(self.authed(Method::GET, "/auth/me")?).await
    }

    pub async fn list_users(&self) -> Result<Vec<AdminUser>, ApiError> {
        let list: UserList = self.send_json(self.authed(Method::GET, "/admin/users")?).await?;
        Ok(list.items)
    }

    pub async fn get_user(&self, id: &str) -> Result<AdminUser, ApiError> {
        let path = format!("/admin/users/{id}");
        self.send_json(self.authed(Method::GET, &path)?).await
    }

    pub async fn create_user(&self, user: &NewUser) -> Result<(), ApiError> {
        self.send_body(self.authed(Method::POST, "/admin/users")?, user)
            .await
    }

    pub async fn update_user(&self, id: &str, patch: &UserPatch) -> Result<(), ApiError> {
        let path = format!("/admin/users/{id}");
        self.send_body(self.authed(Method::PATCH, &path)?, patch)
            .await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.config.api_url(path))
    }

    fn authed(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let token = self.token.as_deref().ok_or(ApiError::MissingToken)?;
        Ok(self.request(method, path).bearer_auth(token))
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        decode(request.send().await?).await
    }

    async fn send_body<B: Serialize>(&self, request: RequestBuilder, body: &B) -> Result<(), ApiError> {
        let response = request.json(body).send().await?;
        check(response).await.map(|_| ())
    }
}

async fn check(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    tracing::debug!("API error {status}: {body}");
    Err(ApiError::from_status(status.as_u16(), &body))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    Ok(check(response).await?.json::<T>().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authed_requires_token() {
        let client = ApiClient::new(ClientConfig::from_origin("http://localhost"));
        assert!(matches!(
            client.authed(Method::GET, "/auth/me"),
            Err(ApiError::MissingToken)
        ));
    }

    #[tokio::test]
    async fn test_admin_calls_fail_fast_without_token() {
        let client = ApiClient::new(ClientConfig::from_origin("http://localhost"));
        assert!(matches!(client.me().await, Err(ApiError::MissingToken)));
        assert!(matches!(client.list_users().await, Err(ApiError::MissingToken)));
        assert!(matches!(client.get_user("1").await, Err(ApiError::MissingToken)));
    }

    #[test]
    fn test_requests_target_configured_base() {
        let client = ApiClient::new(ClientConfig::from_origin("http://localhost:3000"))
            .with_token(Some("tok".to_string()));

        let request = client
            .authed(Method::PATCH, "/admin/users/42")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(request.method(), Method::PATCH);
        assert_eq!(request.url().as_str(), "http://localhost:3000/api/admin/users/42");
        assert_eq!(
            request.headers().get("authorization").unwrap(),
            "Bearer tok"
        );
    }
}
