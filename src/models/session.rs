use serde::{Deserialize, Serialize};

/// Datos de sesión una vez resuelta.
/// La ausencia de identidad es explícita: nombre vacío / `false`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
pub struct SessionData {
    pub streaming_display_name: String,
    pub social_account_linked: bool,
}

impl SessionData {
    pub fn new(streaming_display_name: impl Into<String>, social_account_linked: bool) -> Self {
        Self {
            streaming_display_name: streaming_display_name.into(),
            social_account_linked,
        }
    }

    pub fn has_streaming_identity(&self) -> bool {
        !self.streaming_display_name.trim().is_empty()
    }
}

/// Contexto explícito de credenciales para el fetch de sesión.
/// Reemplaza la dependencia implícita de las cookies del mismo origen.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SessionContext {
    token: Option<String>,
    include_cookies: bool,
}

impl SessionContext {
    /// Sólo cookies del navegador (comportamiento por defecto del backend)
    pub fn cookies() -> Self {
        Self {
            token: None,
            include_cookies: true,
        }
    }

    /// Token explícito, sin cookies
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            include_cookies: false,
        }
    }

    /// Contexto a partir de la configuración compilada
    pub fn from_config(config: &crate::config::AppConfig) -> Self {
        match &config.session_token {
            Some(token) => Self {
                token: Some(token.clone()),
                include_cookies: true,
            },
            None => Self::cookies(),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn include_cookies(&self) -> bool {
        self.include_cookies
    }

    /// Valor del header Authorization, si hay token
    pub fn authorization_header(&self) -> Option<String> {
        self.token().map(|token| format!("Bearer {}", token))
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::cookies()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn cookie_context_sends_no_authorization() {
        let context = SessionContext::cookies();
        assert!(context.include_cookies());
        assert_eq!(context.authorization_header(), None);
    }

    #[test]
    fn token_context_sends_bearer_header() {
        let context = SessionContext::with_token("abc123");
        assert!(!context.include_cookies());
        assert_eq!(context.authorization_header().as_deref(), Some("Bearer abc123"));
    }

    #[test]
    fn config_token_keeps_cookies() {
        let config = AppConfig {
            session_token: Some("abc123".to_string()),
            ..AppConfig::default()
        };
        let context = SessionContext::from_config(&config);
        assert!(context.include_cookies());
        assert_eq!(context.token(), Some("abc123"));
        assert_eq!(SessionContext::from_config(&AppConfig::default()), SessionContext::cookies());
    }
}
