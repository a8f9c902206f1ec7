//! Thin helpers over `web_sys` DOM access.
//!
//! Every lookup is optional: a missing element means the caller skips its
//! update. Only listener registration can fail, and that error is returned.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// `document.querySelectorAll(selector)` as a Vec. Invalid selectors and a
/// missing document both yield an empty list.
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(doc) = document() else {
        return Vec::new();
    };
    let Ok(list) = doc.query_selector_all(selector) else {
        return Vec::new();
    };
    collect_elements(&list)
}

/// `querySelectorAll` scoped to an element.
pub fn query_all_within(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    collect_elements(&list)
}

fn collect_elements(list: &web_sys::NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok()?
}

/// Set `textContent` of the element with `id`, if present.
pub fn set_text_by_id(id: &str, text: &str) {
    if let Some(el) = by_id(id) {
        el.set_text_content(Some(text));
    }
}

pub fn add_class(el: &Element, class: &str) {
    // Only fails for invalid tokens, which our constants never are.
    let _ = el.class_list().add_1(class);
}

pub fn remove_class(el: &Element, class: &str) {
    let _ = el.class_list().remove_1(class);
}

pub fn toggle_class(el: &Element, class: &str) {
    let _ = el.class_list().toggle(class);
}

/// Register a long-lived listener. The closure is leaked on purpose: page
/// listeners live as long as the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::wrap(Box::new(handler));
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Whether the page global `name` exists (feature detection).
pub fn has_global(name: &str) -> bool {
    match window() {
        Some(w) => js_sys::Reflect::has(&w, &JsValue::from_str(name)).unwrap_or(false),
        None => false,
    }
}

/// `document.readyState == "loading"`.
pub fn is_loading(document: &Document) -> bool {
    js_sys::Reflect::get(document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|state| state.as_string())
        .map(|state| state == "loading")
        .unwrap_or(false)
}
