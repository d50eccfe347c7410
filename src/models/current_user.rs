use serde::{Deserialize, Serialize};
use crate::models::session::SessionData;

/// Respuesta de `GET /api/current-user.json`
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUserResponse {
    #[serde(default)]
    pub twitch_display_name: Option<String>,
    #[serde(default)]
    pub is_twitter_auth: Option<bool>,
}

impl CurrentUserResponse {
    /// Los campos null pasan a ser ausencia explícita
    pub fn into_session_data(self) -> SessionData {
        SessionData {
            streaming_display_name: self
                .twitch_display_name
                .map(|name| name.trim().to_string())
                .unwrap_or_default(),
            social_account_linked: self.is_twitter_auth.unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_field_names() {
        let response: CurrentUserResponse =
            serde_json::from_str(r#"{"twitchDisplayName":"Alice","isTwitterAuth":true}"#).unwrap();
        assert_eq!(response.twitch_display_name.as_deref(), Some("Alice"));
        assert_eq!(response.is_twitter_auth, Some(true));
    }

    #[test]
    fn nulls_and_missing_fields_become_explicit_absence() {
        let response: CurrentUserResponse =
            serde_json::from_str(r#"{"twitchDisplayName":null}"#).unwrap();
        let data = response.into_session_data();
        assert_eq!(data, SessionData::new("", false));
        assert!(!data.has_streaming_identity());
    }
}
