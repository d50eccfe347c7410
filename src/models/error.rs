use thiserror::Error;

/// Errores del fetch de sesión (`/api/current-user.json`)
///
/// `Fetch`, `Protocol` y `Timeout` resuelven la sesión a `Failed`.
/// `StaleCallback` nunca se guarda: la respuesta llegó para una vista
/// que ya no está activa (o que ya estaba resuelta) y se descarta.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Network error: {0}")]
    Fetch(String),

    #[error("Protocol error (HTTP {status}): {message}")]
    Protocol { status: u16, message: String },

    #[error("Session lookup timed out after {seconds}s")]
    Timeout { seconds: u32 },

    #[error("Stale session response discarded")]
    StaleCallback,
}

impl SessionError {
    /// Mensaje corto para la UI
    pub fn user_message(&self) -> &'static str {
        match self {
            SessionError::Fetch(_) => "The server could not be reached.",
            SessionError::Protocol { .. } => "The server sent an unexpected response.",
            SessionError::Timeout { .. } => "The server took too long to answer.",
            SessionError::StaleCallback => "This page is no longer active.",
        }
    }
}
