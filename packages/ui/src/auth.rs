//! Authentication context and hooks for the UI.
//!
//! The session is a bearer token kept in `localStorage` under
//! [`TOKEN_STORAGE_KEY`] plus the user returned by `GET /auth/me`.

use api::auth::TOKEN_STORAGE_KEY;
use api::{ApiClient, ApiError, ClientConfig, SessionUser};
use dioxus::prelude::*;
use store::KeyValueStore;

use crate::storage::make_store;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    /// True until the stored token has been checked on startup.
    pub loading: bool,
    pub token: Option<String>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
            token: None,
        }
    }
}

impl AuthState {
    fn signed_out() -> Self {
        Self {
            user: None,
            loading: false,
            token: None,
        }
    }

    /// An API client carrying this session's token.
    pub fn client(&self) -> ApiClient {
        api_client().with_token(self.token.clone())
    }
}

/// Read by host builds, which have no page origin.
#[cfg(not(target_arch = "wasm32"))]
const HOST_CONFIG_FILE: &str = "portal.toml";

/// Base URLs for the current page origin.
pub fn client_config() -> ClientConfig {
    #[cfg(target_arch = "wasm32")]
    {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        ClientConfig::resolve(&origin)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::fs::read_to_string(HOST_CONFIG_FILE)
            .ok()
            .and_then(|raw| match ClientConfig::from_toml(&raw) {
                Ok(config) => Some(config),
                Err(e) => {
                    tracing::warn!("Ignoring {HOST_CONFIG_FILE}: {e}");
                    None
                }
            })
            .unwrap_or_else(|| ClientConfig::resolve("http://localhost:8080"))
    }
}

/// An unauthenticated API client.
pub fn api_client() -> ApiClient {
    ApiClient::new(client_config())
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Exchange credentials for a token, then load the user behind it.
pub async fn login(
    mut auth: Signal<AuthState>,
    nickname: &str,
    password: &str,
) -> Result<(), ApiError> {
    let token = api_client().login(nickname, password).await?;
    let store = make_store();
    store.set(TOKEN_STORAGE_KEY, &token);

    match api_client().with_token(Some(token.clone())).me().await {
        Ok(user) => {
            tracing::info!("Signed in as {}", user.nickname);
            auth.set(AuthState {
                user: Some(user),
                loading: false,
                token: Some(token),
            });
            Ok(())
        }
        Err(e) => {
            store.remove(TOKEN_STORAGE_KEY);
            Err(e)
        }
    }
}

/// Forget the token and the user.
pub fn logout(mut auth: Signal<AuthState>) {
    make_store().remove(TOKEN_STORAGE_KEY);
    auth.set(AuthState::signed_out());
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Resolve the stored token on mount
    let _ = use_resource(move || async move {
        let store = make_store();
        let Some(token) = store.get(TOKEN_STORAGE_KEY) else {
            auth_state.set(AuthState::signed_out());
            return;
        };
        match api_client().with_token(Some(token.clone())).me().await {
            Ok(user) => {
                tracing::debug!("Restored session for {}", user.nickname);
                auth_state.set(AuthState {
                    user: Some(user),
                    loading: false,
                    token: Some(token),
                });
            }
            Err(e) => {
                tracing::warn!("Stored session rejected: {e}");
                store.remove(TOKEN_STORAGE_KEY);
                auth_state.set(AuthState::signed_out());
            }
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Sair".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let auth_state = use_auth();

    let onclick = move |_| {
        logout(auth_state);
        // Redirect to login
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
    };

    rsx! {
        button {
            class: "btn btn-outline {class}",
            title: "Sair",
            onclick: onclick,
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_loading() {
        let state = AuthState::default();
        assert!(state.loading);
        assert!(state.user.is_none());
        assert!(!AuthState::signed_out().loading);
    }

    #[test]
    fn test_host_config_points_at_dev_server() {
        let config = client_config();
        if option_env!("PORTAL_API_URL").is_none() {
            assert_eq!(config.api_base_url, "http://localhost:8080/api");
        }
        if option_env!("PORTAL_WS_URL").is_none() {
            assert_eq!(config.ws_base_url, "ws://localhost:8080/api");
        }
    }
}
