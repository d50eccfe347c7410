// ============================================================================
// SESSION STATE - Resultado del lookup único de sesión
// ============================================================================

use crate::models::{SessionData, SessionError};
use crate::state::reactivity::ReactiveState;

/// Estado de resolución de la sesión.
/// Los datos sólo existen dentro de `Resolved`, así que "Unresolved implica
/// campos ausentes" no puede romperse.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum SessionStatus {
    #[default]
    Unresolved,
    Resolved(SessionData),
    Failed(SessionError),
}

impl SessionStatus {
    pub fn is_unresolved(&self) -> bool {
        matches!(self, SessionStatus::Unresolved)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_unresolved()
    }

    pub fn label(&self) -> &'static str {
        match self {
            SessionStatus::Unresolved => "unresolved",
            SessionStatus::Resolved(_) => "resolved",
            SessionStatus::Failed(_) => "failed",
        }
    }
}

/// Estado de sesión compartido (Rc) entre la vista y el fetch
#[derive(Clone)]
pub struct SessionState {
    status: ReactiveState<SessionStatus>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            status: ReactiveState::new(SessionStatus::Unresolved),
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status.get()
    }

    pub fn is_unresolved(&self) -> bool {
        self.status.with(SessionStatus::is_unresolved)
    }

    /// Nombre de Twitch; `None` mientras no esté resuelta
    pub fn streaming_display_name(&self) -> Option<String> {
        self.status.with(|status| match status {
            SessionStatus::Resolved(data) => Some(data.streaming_display_name.clone()),
            _ => None,
        })
    }

    /// Twitter vinculado; `None` mientras no esté resuelta
    pub fn social_account_linked(&self) -> Option<bool> {
        self.status.with(|status| match status {
            SessionStatus::Resolved(data) => Some(data.social_account_linked),
            _ => None,
        })
    }

    /// Unresolved -> Resolved. Sólo una vez por activación.
    pub fn resolve(&self, data: SessionData) -> Result<(), SessionError> {
        self.settle(SessionStatus::Resolved(data))
    }

    /// Unresolved -> Failed. Sólo una vez por activación.
    pub fn fail(&self, error: SessionError) -> Result<(), SessionError> {
        if error == SessionError::StaleCallback {
            // Una respuesta tardía nunca se guarda como fallo
            return Err(SessionError::StaleCallback);
        }
        self.settle(SessionStatus::Failed(error))
    }

    /// Nueva activación de la vista: vuelve a Unresolved
    pub fn reset(&self) {
        let changed = self.status.update_if(|status| {
            if status.is_unresolved() {
                return false;
            }
            *status = SessionStatus::Unresolved;
            true
        });
        if changed {
            log::debug!("🔄 [SESSION] Estado reiniciado para nueva activación");
        }
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.status.subscribe(callback);
    }

    fn settle(&self, next: SessionStatus) -> Result<(), SessionError> {
        let label = next.label();
        let mut next = Some(next);
        let applied = self.status.update_if(|status| {
            if status.is_terminal() {
                return false;
            }
            if let Some(next) = next.take() {
                *status = next;
            }
            true
        });

        if applied {
            log::info!("✅ [SESSION] Sesión {}", label);
            Ok(())
        } else {
            log::warn!("⚠️ [SESSION] Sesión ya resuelta, se ignora transición a {}", label);
            Err(SessionError::StaleCallback)
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn starts_unresolved_with_both_fields_absent() {
        let state = SessionState::new();
        assert!(state.is_unresolved());
        assert_eq!(state.streaming_display_name(), None);
        assert_eq!(state.social_account_linked(), None);
    }

    #[test]
    fn resolved_sets_both_fields_even_when_unlinked() {
        let state = SessionState::new();
        state.resolve(SessionData::new("", false)).unwrap();
        assert_eq!(state.streaming_display_name(), Some(String::new()));
        assert_eq!(state.social_account_linked(), Some(false));
    }

    #[test]
    fn settles_only_once() {
        let state = SessionState::new();
        state.resolve(SessionData::new("Alice", true)).unwrap();

        let second = state.fail(SessionError::Timeout { seconds: 10 });
        assert_eq!(second, Err(SessionError::StaleCallback));
        assert_eq!(state.status(), SessionStatus::Resolved(SessionData::new("Alice", true)));
    }

    #[test]
    fn failed_keeps_fields_absent() {
        let state = SessionState::new();
        state
            .fail(SessionError::Protocol { status: 500, message: "boom".into() })
            .unwrap();
        assert!(matches!(state.status(), SessionStatus::Failed(_)));
        assert_eq!(state.streaming_display_name(), None);
        assert_eq!(state.social_account_linked(), None);
    }

    #[test]
    fn stale_callback_is_never_stored() {
        let state = SessionState::new();
        assert_eq!(state.fail(SessionError::StaleCallback), Err(SessionError::StaleCallback));
        assert!(state.is_unresolved());
    }

    #[test]
    fn notifies_subscribers_on_settle_only() {
        let state = SessionState::new();
        let hits = Rc::new(Cell::new(0));
        let hits_cb = hits.clone();
        state.subscribe(move || hits_cb.set(hits_cb.get() + 1));

        state.reset();
        assert_eq!(hits.get(), 0);

        state.resolve(SessionData::new("Alice", false)).unwrap();
        let _ = state.resolve(SessionData::new("Bob", false));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn reset_returns_to_unresolved() {
        let state = SessionState::new();
        state.resolve(SessionData::new("Alice", true)).unwrap();
        state.reset();
        assert!(state.is_unresolved());
        assert_eq!(state.streaming_display_name(), None);
    }
}
