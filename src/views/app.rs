// ============================================================================
// APP VIEW - Página única del dashboard
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::state::app_state::AppState;
use crate::views::{render_clip_section, render_identity_section, render_nav_bar};

/// Renderizar aplicación completa
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let main = ElementBuilder::new("main")?
        .class("dashboard")
        .child(render_identity_section(state)?)?
        .child(render_clip_section(state)?)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("app")
        .child(render_nav_bar()?)?
        .child(main)?
        .build())
}
