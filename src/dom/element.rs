// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Crear elemento
pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

/// Establecer class name (reemplaza todas las clases)
pub fn set_class_name(element: &Element, class: &str) {
    element.set_class_name(class);
}

/// Agregar o quitar una clase según `on`
pub fn set_class(element: &Element, class: &str, on: bool) -> Result<(), JsValue> {
    if on {
        element.class_list().add_1(class)
    } else {
        element.class_list().remove_1(class)
    }
}

/// Establecer text content (escapa HTML, usar para datos del backend)
pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Agregar un nodo de texto al final
pub fn append_text(element: &Element, text: &str) -> Result<(), JsValue> {
    let node = document()
        .ok_or_else(|| JsValue::from_str("No document"))?
        .create_text_node(text);
    element.append_child(&node).map(|_| ())
}

/// Establecer inner HTML
pub fn set_inner_html(element: &Element, html: &str) {
    element.set_inner_html(html);
}

/// Agregar hijo
pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

/// Reemplazar `old` por `new` en su padre
pub fn replace_element(old: &Element, new: &Element) -> Result<(), JsValue> {
    old.replace_with_with_node_1(new)
}

/// Establecer atributo
pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// Obtener atributo
pub fn get_attribute(element: &Element, name: &str) -> Option<String> {
    element.get_attribute(name)
}

/// Hostname de la página (para el `parent` del embed de Twitch)
pub fn current_hostname() -> Option<String> {
    window()?.location().hostname().ok().filter(|h| !h.is_empty())
}
