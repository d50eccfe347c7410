// ============================================================================
// CLIP VIEW - Contenedor del clip embebido
// ============================================================================
// El iframe de Twitch es el widget externo: su evento `load` es la señal
// onEmbedLoaded. Cambiar `hidden` NO recrea el iframe (ver dom::incremental).
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{on_event, ElementBuilder};
use crate::state::app_state::AppState;
use crate::state::ClipState;
use crate::utils::constants::{CLIP_IFRAME_ID, CLIP_SECTION_ID};
use crate::viewmodels::ClipEmbedConfig;

pub const SPINNER_CLASS: &str = "clip-spinner";

pub fn render_clip_section(state: &AppState) -> Result<Element, JsValue> {
    let lifecycle = state.clip.lifecycle();
    let config = ClipEmbedConfig::derive(&lifecycle, &state.embed_parent);

    let clip = ElementBuilder::new("div")?
        .class(config.phase_class(lifecycle.loaded()))
        .build();
    if config.hidden {
        clip.class_list().add_1("hidden")?;
    }

    let spinner = ElementBuilder::new("div")?
        .class(SPINNER_CLASS)
        .attr("role", "status")?
        .text("Loading clip...")
        .build();
    if !config.show_spinner {
        spinner.class_list().add_1("hidden")?;
    }
    crate::dom::append_child(&clip, &spinner)?;

    if let (Some(slug), Some(url)) = (&config.clip_slug, &config.embed_url) {
        let iframe = render_clip_iframe(&state.clip, slug, url)?;
        crate::dom::append_child(&clip, &iframe)?;
    }

    Ok(ElementBuilder::new("section")?
        .id(CLIP_SECTION_ID)?
        .class("clip-container")
        .child(clip)?
        .build())
}

fn render_clip_iframe(clip_state: &ClipState, slug: &str, url: &str) -> Result<Element, JsValue> {
    let iframe = ElementBuilder::new("iframe")?
        .id(CLIP_IFRAME_ID)?
        .attr("src", url)?
        .attr("data-slug", slug)?
        .attr("title", "Twitch clip")?
        .attr("allowfullscreen", "true")?
        .attr("frameborder", "0")?
        .build();

    let clip_state = clip_state.clone();
    let slug = slug.to_string();
    on_event(&iframe, "load", move |_e| {
        clip_state.on_embed_loaded(&slug);
    })?;

    Ok(iframe)
}
