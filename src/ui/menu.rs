//! Mobile navigation menu.

use wasm_bindgen::JsValue;

use crate::config::{HIDDEN_CLASS, MOBILE_MENU, MOBILE_MENU_BUTTON};
use crate::dom;

/// The button toggles the menu; following any menu link closes it.
pub fn init() -> Result<(), JsValue> {
    let (Some(button), Some(menu)) = (dom::by_id(MOBILE_MENU_BUTTON), dom::by_id(MOBILE_MENU))
    else {
        return Ok(());
    };

    {
        let menu = menu.clone();
        dom::listen(&button, "click", move |_| {
            dom::toggle_class(&menu, HIDDEN_CLASS);
        })?;
    }

    for link in dom::query_all_within(&menu, "a") {
        let menu = menu.clone();
        dom::listen(&link, "click", move |_| {
            dom::add_class(&menu, HIDDEN_CLASS);
        })?;
    }
    Ok(())
}
