//! # Client configuration — where the REST API and sockets live
//!
//! ```toml
//! api_base_url = "https://portal.example.com/api"
//! ws_base_url = "wss://portal.example.com/api"
//! ```
//!
//! In the browser the portal is normally served behind the same origin as the
//! API, so [`ClientConfig::from_origin`] derives both URLs from
//! `window.location.origin` (`<origin>/api`, with `http` swapped for `ws`).
//! Builds can pin either URL at compile time with the `PORTAL_API_URL` and
//! `PORTAL_WS_URL` environment variables.

use serde::{Deserialize, Serialize};
use url::Url;

/// Path prefix the API is mounted under when served same-origin.
pub const API_PREFIX: &str = "/api";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub ws_base_url: String,
}

impl ClientConfig {
    pub fn new(api_base_url: impl Into<String>, ws_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: trim_slash(api_base_url.into()),
            ws_base_url: trim_slash(ws_base_url.into()),
        }
    }

    /// Same-origin deployment: `https://host` → `https://host/api`, `wss://host/api`.
    pub fn from_origin(origin: &str) -> Self {
        let api = format!("{}{API_PREFIX}", origin.trim_end_matches('/'));
        let ws = http_to_ws(&api);
        Self::new(api, ws)
    }

    /// Derive from the page origin, letting compile-time overrides win.
    pub fn resolve(origin: &str) -> Self {
        let derived = Self::from_origin(origin);
        Self::new(
            option_env!("PORTAL_API_URL")
                .map(str::to_string)
                .unwrap_or(derived.api_base_url),
            option_env!("PORTAL_WS_URL")
                .map(str::to_string)
                .unwrap_or(derived.ws_base_url),
        )
    }

    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<Self>(s).map(|c| Self::new(c.api_base_url, c.ws_base_url))
    }

    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}

/// `http` → `ws`, `https` → `wss`. Other schemes and unparsable input are
/// returned unchanged.
pub fn http_to_ws(url: &str) -> String {
    let Ok(mut parsed) = Url::parse(url) else {
        return url.to_string();
    };
    let scheme = match parsed.scheme() {
        "https" => "wss",
        "http" => "ws",
        _ => return url.to_string(),
    };
    match parsed.set_scheme(scheme) {
        Ok(()) => parsed.into(),
        Err(()) => url.to_string(),
    }
}

fn trim_slash(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_origin() {
        let config = ClientConfig::from_origin("https://portal.example.com/");
        assert_eq!(config.api_base_url, "https://portal.example.com/api");
        assert_eq!(config.ws_base_url, "wss://portal.example.com/api");

        let local = ClientConfig::from_origin("http://localhost:5173");
        assert_eq!(local.ws_base_url, "ws://localhost:5173/api");
        assert_eq!(local.api_url("/auth/me"), "http://localhost:5173/api/auth/me");
    }

    #[test]
    fn test_from_toml_trims_trailing_slash() {
        let config = ClientConfig::from_toml(
            "api_base_url = \"http://10.0.0.2:8000/api/\"\nws_base_url = \"ws://10.0.0.2:8000/api\"\n",
        )
        .unwrap();
        assert_eq!(config.api_base_url, "http://10.0.0.2:8000/api");
        assert_eq!(config.ws_base_url, "ws://10.0.0.2:8000/api");
    }

    #[test]
    fn test_http_to_ws() {
        assert_eq!(http_to_ws("http://a/api"), "ws://a/api");
        assert_eq!(http_to_ws("https://a:8443/api"), "wss://a:8443/api");
        assert_eq!(http_to_ws("wss://a/api"), "wss://a/api");
        assert_eq!(http_to_ws("HTTPS://Portal.Example.com/api"), "wss://portal.example.com/api");
        assert_eq!(http_to_ws("ftp://a/api"), "ftp://a/api");
        assert_eq!(http_to_ws("/api"), "/api");
    }
}
