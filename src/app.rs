// ============================================================================
// APP - Aplicación principal
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use gloo_timers::callback::Timeout;
use crate::config::CONFIG;
use crate::dom::{append_child, current_hostname, get_element_by_id, set_inner_html};
use crate::dom::incremental::{update_clip_section, update_identity_section};
use crate::state::app_state::{AppState, IncrementalUpdate};
use crate::viewmodels::SessionViewModel;
use crate::views::render_app;

/// Aplicación principal
pub struct App {
    state: AppState,
    session: SessionViewModel,
    root: Option<Element>,
}

impl App {
    /// Crear nueva aplicación (no lanza el fetch: ver `activate`)
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let embed_parent = current_hostname().unwrap_or_else(|| CONFIG.clip_embed_parent.clone());
        let state = AppState::new(embed_parent);
        let session = SessionViewModel::from_config(state.session.clone(), &CONFIG);

        // Suscribirse a cambios de estado; Timeout(0) agrupa varios cambios seguidos
        state.subscribe_to_changes(|update| {
            Timeout::new(0, move || {
                crate::rerender_app_with_type(update);
            })
            .forget();
        });

        Ok(Self {
            state,
            session,
            root: Some(root),
        })
    }

    /// Vista activa: un único fetch de sesión
    pub fn activate(&self) -> bool {
        let started = self.session.start();
        if started {
            log::info!("👤 [APP] Consultando sesión del visitante...");
        }
        started
    }

    pub fn is_active(&self) -> bool {
        self.session.is_active()
    }

    /// Vista desactivada: respuestas pendientes se descartan
    pub fn deactivate(&self) {
        self.session.deactivate();
    }

    /// Renderizar aplicación completa
    pub fn render(&mut self) -> Result<(), JsValue> {
        if let Some(root) = &self.root {
            set_inner_html(root, "");
            let app_view = render_app(&self.state)?;
            append_child(root, &app_view)?;
            log::debug!("✅ [APP] Render completo (sesión {})", self.state.session.status().label());
        }
        Ok(())
    }

    /// Obtener referencia al estado
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Actualización incremental del DOM (solo la sección afectada)
    pub fn update_incremental(&self, update_type: IncrementalUpdate) -> Result<(), JsValue> {
        match update_type {
            IncrementalUpdate::Identity => update_identity_section(&self.state),
            IncrementalUpdate::Clip => update_clip_section(&self.state),
        }
    }
}
