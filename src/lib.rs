// ============================================================================
// STREAM TWEETER APP - FRONTEND MVVM (RUST PURO)
// ============================================================================
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Derivaciones puras + fetch único de sesión
// - Services: SOLO comunicación API
// - State: State Management con Rc<RefCell> + notificaciones
// - Models: Estructuras compartidas con backend
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod viewmodels;
pub mod state;
pub mod dom;
pub mod views;
pub mod utils;
pub mod app;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use crate::app::App;
use crate::config::CONFIG;
use crate::dom::incremental::NEEDS_FULL_RENDER;
use crate::dom::on_window_event;
use crate::state::app_state::UpdateType;

// Instancia global de App (single-thread WASM)
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("🚀 Stream Tweeter - Rust Puro + MVVM ({})", CONFIG.environment);

    let mut app = App::new()?;
    app.render()?;
    app.activate();

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    // Listeners globales: se registran UNA sola vez aquí
    on_window_event("pagehide", |_e| {
        log::debug!("👋 [MAIN] pagehide, desactivando vista");
        with_app(|app| app.deactivate());
    })?;
    // Volver desde el bfcache reactiva la vista (nuevo fetch)
    on_window_event("pageshow", |_e| {
        with_app(|app| {
            if !app.is_active() {
                app.activate();
            }
        });
    })?;

    Ok(())
}

fn with_app<F>(f: F)
where
    F: FnOnce(&App),
{
    APP.with(|app_cell| match app_cell.try_borrow() {
        Ok(app) => match app.as_ref() {
            Some(app) => f(app),
            None => log::warn!("⚠️ [MAIN] App no está inicializada"),
        },
        Err(_) => log::warn!("⚠️ [MAIN] App ocupada, evento ignorado"),
    });
}

/// Función pública para re-renderizar la app (re-render completo)
pub fn rerender_app() {
    rerender_app_with_type(UpdateType::FullRender);
}

/// Función pública para actualizar la app con tipo específico
pub fn rerender_app_with_type(update_type: UpdateType) {
    APP.with(|app_cell| {
        let needs_full_render = match update_type {
            UpdateType::Incremental(inc_type) => match app_cell.borrow().as_ref() {
                Some(app) => match app.update_incremental(inc_type) {
                    Ok(()) => false,
                    Err(e) => {
                        let error_str = format!("{:?}", e);
                        if error_str.contains(NEEDS_FULL_RENDER) {
                            log::debug!("🔄 [UPDATE] {:?} requiere re-render completo", inc_type);
                        } else {
                            log::error!("❌ Error en actualización incremental: {:?}", e);
                        }
                        true
                    }
                },
                None => {
                    log::warn!("⚠️ [UPDATE] App no está inicializada");
                    false
                }
            },
            UpdateType::FullRender => true,
        };

        if needs_full_render {
            if let Some(app) = app_cell.borrow_mut().as_mut() {
                if let Err(e) = app.render() {
                    web_sys::console::error_1(&JsValue::from_str(&format!("❌ Error re-renderizando: {:?}", e)));
                }
            }
        }
    });
}

/// Re-render completo (llamable desde JavaScript)
#[wasm_bindgen]
pub fn rerender_app_wasm() {
    rerender_app();
}

/// Selección de clip desde el exterior. `None`/vacío vuelve a Idle.
#[wasm_bindgen]
pub fn set_clip_slug(slug: Option<String>) {
    with_app(|app| {
        app.state().clip.set_clip_slug(slug);
    });
}

/// Visibilidad del clip controlada por el contenedor padre
#[wasm_bindgen]
pub fn set_clip_hidden(hidden: bool) {
    with_app(|app| {
        app.state().clip.set_hidden(hidden);
    });
}

/// Señal de carga del widget de embed para `slug`
#[wasm_bindgen]
pub fn notify_clip_loaded(slug: String) {
    with_app(|app| {
        app.state().clip.on_embed_loaded(&slug);
    });
}
