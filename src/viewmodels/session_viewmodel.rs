// ============================================================================
// SESSION VIEWMODEL - FETCH ÚNICO DE SESIÓN
// ============================================================================
// Un request por activación de la vista, sin reintentos ni polling.
// Cada activación entrega un FetchTicket; una respuesta con ticket viejo
// (vista desactivada o ya resuelta) se descarta sin tocar el estado.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use crate::config::AppConfig;
use crate::models::{CurrentUserResponse, SessionContext, SessionError};
use crate::services::ApiClient;
use crate::state::SessionState;

/// Identifica la activación que lanzó un fetch
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    activation: u64,
}

/// ViewModel de sesión - orquesta ApiClient + SessionState
#[derive(Clone)]
pub struct SessionViewModel {
    api_client: ApiClient,
    context: SessionContext,
    state: SessionState,
    timeout_seconds: u32,
    activation: Rc<Cell<u64>>,
    active: Rc<Cell<bool>>,
    timeout: Rc<RefCell<Option<Timeout>>>,
}

impl SessionViewModel {
    pub fn new(
        state: SessionState,
        api_client: ApiClient,
        context: SessionContext,
        timeout_seconds: u32,
    ) -> Self {
        Self {
            api_client,
            context,
            state,
            timeout_seconds,
            activation: Rc::new(Cell::new(0)),
            active: Rc::new(Cell::new(false)),
            timeout: Rc::new(RefCell::new(None)),
        }
    }

    pub fn from_config(state: SessionState, config: &AppConfig) -> Self {
        Self::new(
            state,
            ApiClient::with_base_url(config.backend_url()),
            SessionContext::from_config(config),
            config.fetch_timeout_seconds,
        )
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    /// Activar la vista. `None` si ya está activa (nunca dos fetch en vuelo).
    pub fn activate(&self) -> Option<FetchTicket> {
        if self.active.get() {
            log::warn!("⚠️ [SESSION] Vista ya activa, no se lanza otro fetch");
            return None;
        }

        let activation = self.activation.get() + 1;
        self.activation.set(activation);
        self.active.set(true);
        self.state.reset();

        log::debug!("🟢 [SESSION] Activación #{}", activation);
        Some(FetchTicket { activation })
    }

    /// Desactivar la vista: las respuestas pendientes pasan a ser tardías
    pub fn deactivate(&self) {
        if !self.active.replace(false) {
            return;
        }
        self.cancel_timeout();
        log::debug!("🔴 [SESSION] Activación #{} terminada", self.activation.get());
    }

    /// Aplicar el resultado del fetch para `ticket`.
    /// `Err(StaleCallback)` = respuesta descartada, estado intacto.
    pub fn complete(
        &self,
        ticket: FetchTicket,
        result: Result<CurrentUserResponse, SessionError>,
    ) -> Result<(), SessionError> {
        if !self.is_current(ticket) {
            log::debug!("⏭️ [SESSION] Respuesta de activación #{} descartada", ticket.activation);
            return Err(SessionError::StaleCallback);
        }

        match result {
            Ok(response) => self.state.resolve(response.into_session_data()),
            Err(SessionError::StaleCallback) => Err(SessionError::StaleCallback),
            Err(error) => {
                log::error!("❌ [SESSION] No se pudo determinar la sesión: {}", error);
                self.state.fail(error)
            }
        }
    }

    /// Activar y lanzar el fetch con timeout. `false` si ya estaba activa.
    pub fn start(&self) -> bool {
        let Some(ticket) = self.activate() else {
            return false;
        };

        let seconds = self.timeout_seconds;
        let on_timeout = self.clone();
        let timeout = Timeout::new(seconds.saturating_mul(1000), move || {
            if on_timeout.complete(ticket, Err(SessionError::Timeout { seconds })).is_ok() {
                log::warn!("⏱️ [SESSION] Timeout de {}s consultando la sesión", seconds);
            }
        });
        *self.timeout.borrow_mut() = Some(timeout);

        let vm = self.clone();
        spawn_local(async move {
            let result = vm.api_client.get_current_user(&vm.context).await;
            if vm.is_current(ticket) {
                vm.cancel_timeout();
            }
            // Tardía o duplicada: ya se registró en complete()
            let _ = vm.complete(ticket, result);
        });

        true
    }

    fn is_current(&self, ticket: FetchTicket) -> bool {
        self.active.get() && ticket.activation == self.activation.get()
    }

    fn cancel_timeout(&self) {
        // Drop de Timeout hace clearTimeout
        let pending = self.timeout.borrow_mut().take();
        drop(pending);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SessionData;
    use crate::services::parse_current_user;
    use crate::state::SessionStatus;

    fn view_model() -> SessionViewModel {
        SessionViewModel::new(
            SessionState::new(),
            ApiClient::with_base_url("http://localhost:7000"),
            SessionContext::cookies(),
            10,
        )
    }

    fn alice() -> Result<CurrentUserResponse, SessionError> {
        parse_current_user(200, r#"{"twitchDisplayName":"Alice","isTwitterAuth":true}"#)
    }

    #[test]
    fn only_one_fetch_per_activation() {
        let vm = view_model();
        assert!(vm.activate().is_some());
        assert!(vm.activate().is_none());
    }

    #[test]
    fn success_resolves_the_session() {
        let vm = view_model();
        let ticket = vm.activate().unwrap();
        vm.complete(ticket, alice()).unwrap();
        assert_eq!(
            vm.state().status(),
            SessionStatus::Resolved(SessionData::new("Alice", true))
        );
    }

    #[test]
    fn server_error_resolves_to_failed_not_unresolved() {
        let vm = view_model();
        let ticket = vm.activate().unwrap();
        vm.complete(ticket, parse_current_user(500, "oops")).unwrap();
        assert!(matches!(
            vm.state().status(),
            SessionStatus::Failed(SessionError::Protocol { status: 500, .. })
        ));
    }

    #[test]
    fn network_error_resolves_to_failed() {
        let vm = view_model();
        let ticket = vm.activate().unwrap();
        vm.complete(ticket, Err(SessionError::Fetch("connection refused".into())))
            .unwrap();
        assert!(matches!(vm.state().status(), SessionStatus::Failed(SessionError::Fetch(_))));
    }

    #[test]
    fn late_response_after_deactivation_is_discarded() {
        let vm = view_model();
        let ticket = vm.activate().unwrap();
        vm.deactivate();

        assert_eq!(vm.complete(ticket, alice()), Err(SessionError::StaleCallback));
        assert!(vm.state().is_unresolved());
        assert_eq!(vm.state().streaming_display_name(), None);
    }

    #[test]
    fn response_after_timeout_does_not_overwrite_failure() {
        let vm = view_model();
        let ticket = vm.activate().unwrap();
        vm.complete(ticket, Err(SessionError::Timeout { seconds: 10 })).unwrap();

        assert_eq!(vm.complete(ticket, alice()), Err(SessionError::StaleCallback));
        assert_eq!(
            vm.state().status(),
            SessionStatus::Failed(SessionError::Timeout { seconds: 10 })
        );
    }

    #[test]
    fn reactivation_ignores_previous_ticket() {
        let vm = view_model();
        let old = vm.activate().unwrap();
        vm.deactivate();
        let new = vm.activate().unwrap();

        assert_eq!(vm.complete(old, alice()), Err(SessionError::StaleCallback));
        assert!(vm.state().is_unresolved());

        vm.complete(new, alice()).unwrap();
        assert_eq!(vm.state().streaming_display_name(), Some("Alice".to_string()));
    }

    #[test]
    fn stale_callback_result_is_not_stored() {
        let vm = view_model();
        let ticket = vm.activate().unwrap();
        assert_eq!(
            vm.complete(ticket, Err(SessionError::StaleCallback)),
            Err(SessionError::StaleCallback)
        );
        assert!(vm.state().is_unresolved());
    }
}
