// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio: un request, una respuesta decodificada.
// El ciclo de vida (una vez por activación, timeout, respuestas tardías)
// vive en SessionViewModel.
// ============================================================================

use gloo_net::http::Request;
use web_sys::RequestCredentials;
use crate::config::{join_url, CONFIG};
use crate::models::{CurrentUserResponse, SessionContext, SessionError};
use crate::utils::constants::CURRENT_USER_PATH;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.backend_url())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }

    pub fn current_user_url(&self) -> String {
        join_url(&self.base_url, CURRENT_USER_PATH)
    }

    /// Estado de vinculación de cuentas del visitante
    pub async fn get_current_user(
        &self,
        context: &SessionContext,
    ) -> Result<CurrentUserResponse, SessionError> {
        let url = self.current_user_url();
        log::info!("👤 [API] Consultando sesión actual: {}", url);

        let credentials = if context.include_cookies() {
            RequestCredentials::Include
        } else {
            RequestCredentials::Omit
        };

        let mut request = Request::get(&url)
            .credentials(credentials)
            .header("Accept", "application/json");
        if let Some(authorization) = context.authorization_header() {
            request = request.header("Authorization", &authorization);
        }

        let response = request
            .send()
            .await
            .map_err(|e| SessionError::Fetch(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SessionError::Fetch(format!("Error leyendo respuesta: {}", e)))?;

        parse_current_user(status, &body)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Decodifica la respuesta de `/api/current-user.json`.
/// No-2xx y JSON inválido son errores de protocolo.
pub fn parse_current_user(status: u16, body: &str) -> Result<CurrentUserResponse, SessionError> {
    if !(200..300).contains(&status) {
        let snippet: String = body.chars().take(120).collect();
        let message = if snippet.trim().is_empty() {
            "Unknown error".to_string()
        } else {
            snippet
        };
        return Err(SessionError::Protocol { status, message });
    }

    serde_json::from_str::<CurrentUserResponse>(body).map_err(|e| SessionError::Protocol {
        status,
        message: format!("Parse error: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_successful_response() {
        let response = parse_current_user(
            200,
            r#"{"twitchDisplayName":"Alice","isTwitterAuth":true}"#,
        )
        .unwrap();
        assert_eq!(response.twitch_display_name.as_deref(), Some("Alice"));
        assert_eq!(response.is_twitter_auth, Some(true));
    }

    #[test]
    fn server_error_is_a_protocol_error() {
        let err = parse_current_user(500, "Internal Server Error").unwrap_err();
        assert_eq!(
            err,
            SessionError::Protocol {
                status: 500,
                message: "Internal Server Error".to_string(),
            }
        );
    }

    #[test]
    fn empty_error_body_gets_placeholder_message() {
        match parse_current_user(502, "   ") {
            Err(SessionError::Protocol { status, message }) => {
                assert_eq!(status, 502);
                assert_eq!(message, "Unknown error");
            }
            other => panic!("expected protocol error, got {:?}", other),
        }
    }

    #[test]
    fn malformed_body_is_a_protocol_error() {
        match parse_current_user(200, "<html>login</html>") {
            Err(SessionError::Protocol { status, message }) => {
                assert_eq!(status, 200);
                assert!(message.starts_with("Parse error"));
            }
            other => panic!("expected protocol error, got {:?}", other),
        }
    }

    #[test]
    fn builds_url_from_base() {
        let client = ApiClient::with_base_url("http://localhost:7000/");
        assert_eq!(client.current_user_url(), "http://localhost:7000/api/current-user.json");
    }
}
