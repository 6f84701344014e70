//! Errors returned by [`crate::ApiClient`].

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, DNS).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned {status}{}", .detail.as_ref().map(|d| format!(": {d}")).unwrap_or_default())]
    Status { status: u16, detail: Option<String> },

    /// The call needs a bearer token and none is stored.
    #[error("not authenticated")]
    MissingToken,
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

impl ApiError {
    /// Build a status error from a response body, keeping the server's
    /// `detail` message when it is a plain string.
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.detail.as_str().map(str::to_string));
        ApiError::Status { status, detail }
    }

    /// Text for an inline error: the server's `detail`, or `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_is_extracted() {
        let err = ApiError::from_status(409, r#"{"detail":"Nickname já existe"}"#);
        assert!(matches!(err, ApiError::Status { status: 409, .. }));
        assert_eq!(err.user_message("Falha ao criar usuário"), "Nickname já existe");
        assert_eq!(err.to_string(), "server returned 409: Nickname já existe");
    }

    #[test]
    fn test_structured_or_missing_detail_uses_fallback() {
        let validation = ApiError::from_status(422, r#"{"detail":[{"loc":["body"],"msg":"x"}]}"#);
        assert_eq!(validation.user_message("Falha ao salvar"), "Falha ao salvar");

        let html = ApiError::from_status(502, "<html>Bad Gateway</html>");
        assert_eq!(html.user_message("Falha ao salvar"), "Falha ao salvar");
        assert_eq!(html.to_string(), "server returned 502");

        assert_eq!(ApiError::MissingToken.user_message("x"), "x");
    }
}
