use crate::utils::constants::{CURRENT_USER_PATH, TWITCH_LOGIN_PATH, TWITTER_AUTH_PATH};

const DEFAULT_BACKEND_URL_DEVELOPMENT: &str = "http://localhost:7000";
const DEFAULT_FETCH_TIMEOUT_SECONDS: u32 = 10;
const DEFAULT_CLIP_EMBED_PARENT: &str = "localhost";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub backend_url_development: String,
    /// Vacío = mismo origen que la página (rutas relativas)
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub fetch_timeout_seconds: u32,
    pub clip_embed_parent: String,
    pub session_token: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: DEFAULT_BACKEND_URL_DEVELOPMENT.to_string(),
            backend_url_production: String::new(),
            environment: "development".to_string(),
            enable_logging: true,
            fetch_timeout_seconds: DEFAULT_FETCH_TIMEOUT_SECONDS,
            clip_embed_parent: DEFAULT_CLIP_EMBED_PARENT.to_string(),
            session_token: None,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .unwrap_or(DEFAULT_BACKEND_URL_DEVELOPMENT).to_string(),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .unwrap_or("").to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            fetch_timeout_seconds: parse_timeout(option_env!("FETCH_TIMEOUT_SECONDS")),
            clip_embed_parent: option_env!("CLIP_EMBED_PARENT")
                .unwrap_or(DEFAULT_CLIP_EMBED_PARENT).to_string(),
            session_token: option_env!("SESSION_TOKEN")
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string()),
        }
    }

    /// Obtiene la URL del backend según el entorno actual
    pub fn backend_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    pub fn current_user_url(&self) -> String {
        join_url(self.backend_url(), CURRENT_USER_PATH)
    }

    /// Punto de entrada OAuth de Twitch (enlace, no fetch)
    pub fn twitch_login_url(&self) -> String {
        join_url(self.backend_url(), TWITCH_LOGIN_PATH)
    }

    /// Vinculación de la cuenta de Twitter
    pub fn twitter_auth_url(&self) -> String {
        join_url(self.backend_url(), TWITTER_AUTH_PATH)
    }
}

/// Un timeout de 0 dejaría la sesión colgada; se usa el valor por defecto
fn parse_timeout(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_FETCH_TIMEOUT_SECONDS)
}

/// Une base + path sin duplicar la barra. Base vacía = ruta relativa.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}", base, path)
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_uses_local_backend() {
        let config = AppConfig::default();
        assert_eq!(config.backend_url(), "http://localhost:7000");
        assert_eq!(config.current_user_url(), "http://localhost:7000/api/current-user.json");
        assert_eq!(config.twitch_login_url(), "http://localhost:7000/login/twitch");
    }

    #[test]
    fn production_with_empty_backend_is_same_origin() {
        let config = AppConfig {
            environment: "production".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.current_user_url(), "/api/current-user.json");
        assert_eq!(config.twitter_auth_url(), "/auth-twitter");
    }

    #[test]
    fn join_url_does_not_double_slashes() {
        assert_eq!(join_url("https://st.example/", "/log"), "https://st.example/log");
        assert_eq!(join_url("https://st.example", "log"), "https://st.example/log");
    }

    #[test]
    fn invalid_or_zero_timeout_falls_back_to_default() {
        assert_eq!(parse_timeout(None), DEFAULT_FETCH_TIMEOUT_SECONDS);
        assert_eq!(parse_timeout(Some("0")), DEFAULT_FETCH_TIMEOUT_SECONDS);
        assert_eq!(parse_timeout(Some("abc")), DEFAULT_FETCH_TIMEOUT_SECONDS);
        assert_eq!(parse_timeout(Some(" 25 ")), 25);
    }
}
