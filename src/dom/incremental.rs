// ============================================================================
// INCREMENTAL DOM UPDATES - Actualización incremental del DOM
// ============================================================================
// Solo actualiza la sección que cambió, sin re-renderizar todo.
// Error "needs full render" = la sección no existe todavía en el DOM.
// ============================================================================

use wasm_bindgen::prelude::*;
use crate::dom::{get_attribute, get_element_by_id, replace_element, set_class, set_class_name};
use crate::state::app_state::AppState;
use crate::utils::constants::{CLIP_IFRAME_ID, CLIP_SECTION_ID, IDENTITY_SECTION_ID};
use crate::viewmodels::ClipEmbedConfig;
use crate::views::clip::SPINNER_CLASS;
use crate::views::{render_clip_section, render_identity_section};

pub const NEEDS_FULL_RENDER: &str = "Section not found, needs full render";

/// Reemplazar la sección de identidad (bienvenida + Twitter)
pub fn update_identity_section(state: &AppState) -> Result<(), JsValue> {
    let current = get_element_by_id(IDENTITY_SECTION_ID)
        .ok_or_else(|| JsValue::from_str(NEEDS_FULL_RENDER))?;
    let fresh = render_identity_section(state)?;
    replace_element(&current, &fresh)?;
    log::debug!("✅ [UPDATE] Sección de identidad actualizada");
    Ok(())
}

/// Actualizar el clip. Con el mismo slug sólo se tocan clases, así el
/// iframe no se recarga al ocultar/mostrar.
pub fn update_clip_section(state: &AppState) -> Result<(), JsValue> {
    let section = get_element_by_id(CLIP_SECTION_ID)
        .ok_or_else(|| JsValue::from_str(NEEDS_FULL_RENDER))?;

    let lifecycle = state.clip.lifecycle();
    let config = ClipEmbedConfig::derive(&lifecycle, &state.embed_parent);

    let rendered_slug = get_element_by_id(CLIP_IFRAME_ID)
        .and_then(|iframe| get_attribute(&iframe, "data-slug"));
    let wanted_slug = config.embed_url.as_ref().and(config.clip_slug.clone());

    if rendered_slug != wanted_slug {
        log::debug!("🔄 [UPDATE] Slug {:?} -> {:?}, recreando embed", rendered_slug, wanted_slug);
        let fresh = render_clip_section(state)?;
        return replace_element(&section, &fresh);
    }

    if let Some(clip) = section.first_element_child() {
        set_class_name(&clip, config.phase_class(lifecycle.loaded()));
        set_class(&clip, "hidden", config.hidden)?;
    }
    if let Some(spinner) = section.get_elements_by_class_name(SPINNER_CLASS).item(0) {
        set_class(&spinner, "hidden", !config.show_spinner)?;
    }

    log::debug!("✅ [UPDATE] Clip actualizado sin recrear iframe");
    Ok(())
}
