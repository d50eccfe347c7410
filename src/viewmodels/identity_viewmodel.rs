// ============================================================================
// IDENTITY VIEWMODEL - Bienvenida + conexión de Twitter
// ============================================================================
// Función pura de SessionStatus. Los dos estados son independientes.
// ============================================================================

use crate::config::AppConfig;
use crate::state::SessionStatus;

/// Destinos de los enlaces OAuth (navegación completa, sin handler en la app)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthLinks {
    pub login_url: String,
    pub link_url: String,
}

impl AuthLinks {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            login_url: config.twitch_login_url(),
            link_url: config.twitter_auth_url(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WelcomeState {
    Pending,
    LoggedIn(String),
    AnonymousPrompt { login_url: String },
    Unavailable { reason: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SocialLinkState {
    Pending,
    Linked,
    UnlinkedPrompt { link_url: String },
    Unavailable { reason: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentityView {
    pub welcome: WelcomeState,
    pub social: SocialLinkState,
}

impl IdentityView {
    pub fn derive(status: &SessionStatus, links: &AuthLinks) -> Self {
        match status {
            SessionStatus::Unresolved => Self {
                welcome: WelcomeState::Pending,
                social: SocialLinkState::Pending,
            },
            SessionStatus::Resolved(data) => {
                let welcome = if data.has_streaming_identity() {
                    WelcomeState::LoggedIn(data.streaming_display_name.trim().to_string())
                } else {
                    WelcomeState::AnonymousPrompt {
                        login_url: links.login_url.clone(),
                    }
                };
                let social = if data.social_account_linked {
                    SocialLinkState::Linked
                } else {
                    SocialLinkState::UnlinkedPrompt {
                        link_url: links.link_url.clone(),
                    }
                };
                Self { welcome, social }
            }
            SessionStatus::Failed(error) => {
                let reason = error.user_message().to_string();
                Self {
                    welcome: WelcomeState::Unavailable { reason: reason.clone() },
                    social: SocialLinkState::Unavailable { reason },
                }
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.welcome, WelcomeState::Pending)
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self.welcome, WelcomeState::Unavailable { .. })
    }
}
