// ============================================================================
// NAV BAR VIEW - Navegación estática (sin dependencia de estado)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::{join_url, CONFIG};
use crate::dom::{link, ElementBuilder};
use crate::utils::constants::{HOME_PATH, LOG_PATH, LOGOUT_PATH, TWITCH_LOGIN_PATH};

pub fn render_nav_bar() -> Result<Element, JsValue> {
    let backend = CONFIG.backend_url();

    let brand = link(HOME_PATH, "Stream Tweeter", "navbar-brand")?;

    let items = ElementBuilder::new("ul")?
        .class("navbar-nav")
        .child(nav_item(&join_url(backend, TWITCH_LOGIN_PATH), "Login")?)?
        .child(nav_item(&join_url(backend, LOGOUT_PATH), "Logout")?)?
        .child(nav_item(LOG_PATH, "View Log")?)?
        .build();

    let help = ElementBuilder::new("ul")?
        .class("navbar-nav navbar-right")
        .child(nav_item("#", "Help")?)?
        .build();

    Ok(ElementBuilder::new("nav")?
        .class("navbar")
        .child(brand)?
        .child(items)?
        .child(help)?
        .build())
}

fn nav_item(href: &str, text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("li")?
        .class("nav-item")
        .child(link(href, text, "nav-link")?)?
        .build())
}
