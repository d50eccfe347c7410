// Rutas del backend de Stream Tweeter

/// Estado de vinculación de cuentas del visitante
pub const CURRENT_USER_PATH: &str = "/api/current-user.json";

/// Entrada OAuth de Twitch
pub const TWITCH_LOGIN_PATH: &str = "/login/twitch";

/// Vinculación de la cuenta de Twitter
pub const TWITTER_AUTH_PATH: &str = "/auth-twitter";

pub const HOME_PATH: &str = "/";
pub const LOGOUT_PATH: &str = "/logout";
pub const LOG_PATH: &str = "/log";

/// Widget de embed de clips de Twitch
pub const CLIP_EMBED_BASE_URL: &str = "https://clips.twitch.tv/embed";

/// IDs de las secciones que se actualizan de forma incremental
pub const IDENTITY_SECTION_ID: &str = "identity-section";
pub const CLIP_SECTION_ID: &str = "clip-section";
pub const CLIP_IFRAME_ID: &str = "clip-embed";
