// ============================================================================
// IDENTITY VIEW - Bienvenida (Twitch) + conexión de Twitter
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::{link, ElementBuilder};
use crate::state::app_state::AppState;
use crate::utils::constants::IDENTITY_SECTION_ID;
use crate::viewmodels::{AuthLinks, IdentityView, SocialLinkState, WelcomeState};

/// Sección completa; se reemplaza entera en cada actualización incremental
pub fn render_identity_section(state: &AppState) -> Result<Element, JsValue> {
    let view = IdentityView::derive(&state.session.status(), &AuthLinks::from_config(&CONFIG));

    Ok(ElementBuilder::new("section")?
        .id(IDENTITY_SECTION_ID)?
        .class("identity")
        .attr("aria-busy", if view.is_pending() { "true" } else { "false" })?
        .child(render_welcome(&view.welcome)?)?
        .child(render_connect_twitter(&view.social)?)?
        .build())
}

pub fn render_welcome(welcome: &WelcomeState) -> Result<Element, JsValue> {
    let heading = ElementBuilder::new("h2")?;

    let heading = match welcome {
        WelcomeState::LoggedIn(name) => heading
            .class("welcome welcome--user")
            // Texto plano: el nombre viene del backend
            .text(&format!("Welcome, {}!", name)),
        WelcomeState::AnonymousPrompt { login_url } => heading
            .class("welcome welcome--anonymous")
            .append_text("Welcome! ")?
            .child(link(login_url, "Log in with Twitch", "login-link")?)?
            .append_text(" to get started!")?,
        WelcomeState::Pending => heading
            .class("welcome welcome--pending")
            .text("Welcome! Checking your session..."),
        WelcomeState::Unavailable { reason } => heading
            .class("welcome welcome--error")
            .attr("role", "alert")?
            .text(&format!("We were unable to determine your session. {} Reload the page to try again.", reason)),
    };

    Ok(heading.build())
}

pub fn render_connect_twitter(social: &SocialLinkState) -> Result<Element, JsValue> {
    let paragraph = ElementBuilder::new("p")?;

    let paragraph = match social {
        SocialLinkState::Linked => paragraph
            .class("twitter twitter--linked")
            .append_text("Your Twitter account is connected!")?
            .child(ElementBuilder::new("br")?.build())?
            .append_text("Let's make some Tweets!")?,
        SocialLinkState::UnlinkedPrompt { link_url } => paragraph
            .class("twitter twitter--unlinked")
            .append_text("To get started, please connect your Twitter account:")?
            .child(ElementBuilder::new("br")?.build())?
            .child(link(link_url, "Connect Twitter", "twitter-link")?)?,
        SocialLinkState::Pending => paragraph
            .class("twitter twitter--pending")
            .text("Checking your Twitter connection..."),
        SocialLinkState::Unavailable { .. } => paragraph
            .class("twitter twitter--error")
            .text("Twitter connection status is unavailable right now."),
    };

    Ok(paragraph.build())
}
