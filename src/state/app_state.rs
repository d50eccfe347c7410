// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use crate::state::{ClipState, SessionState};

/// Tipo de actualización del DOM
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateType {
    /// Actualización incremental (solo una sección)
    Incremental(IncrementalUpdate),
    /// Re-render completo (primer render o sección no encontrada)
    FullRender,
}

/// Sección concreta a actualizar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IncrementalUpdate {
    /// Bienvenida + conexión de Twitter
    Identity,
    /// Contenedor del clip (iframe, spinner, visibilidad)
    Clip,
}

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub session: SessionState,
    pub clip: ClipState,
    /// Hostname que Twitch exige como `parent` del embed
    pub embed_parent: String,
}

impl AppState {
    pub fn new(embed_parent: impl Into<String>) -> Self {
        Self {
            session: SessionState::new(),
            clip: ClipState::new(false),
            embed_parent: embed_parent.into(),
        }
    }

    /// Suscribirse a cambios de cada sección por separado
    pub fn subscribe_to_changes<F>(&self, on_update: F)
    where
        F: Fn(UpdateType) + Clone + 'static,
    {
        let on_session = on_update.clone();
        self.session
            .subscribe(move || on_session(UpdateType::Incremental(IncrementalUpdate::Identity)));
        self.clip
            .subscribe(move || on_update(UpdateType::Incremental(IncrementalUpdate::Clip)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SessionData;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn routes_changes_to_their_section() {
        let state = AppState::new("localhost");
        let updates = Rc::new(RefCell::new(Vec::new()));
        let sink = updates.clone();
        state.subscribe_to_changes(move |update| sink.borrow_mut().push(update));

        state.clip.set_clip_slug(Some("abc".into()));
        state.session.resolve(SessionData::new("Alice", true)).unwrap();

        assert_eq!(
            *updates.borrow(),
            vec![
                UpdateType::Incremental(IncrementalUpdate::Clip),
                UpdateType::Incremental(IncrementalUpdate::Identity),
            ]
        );
    }
}
