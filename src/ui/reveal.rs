//! Scroll reveal: `[data-scroll-fade]` elements fade in once on first view.

use wasm_bindgen::JsValue;

use crate::config::{SiteConfig, FADED_IN_CLASS, SCROLL_FADE_SELECTOR};
use crate::dom;
use crate::visibility::{self, ObserveOptions};

pub fn observe_options(config: &SiteConfig) -> ObserveOptions {
    ObserveOptions {
        threshold: config.reveal_threshold,
        root_margin: Some(config.reveal_root_margin.clone()),
    }
}

/// Without `IntersectionObserver` every element is revealed at once.
pub fn init(config: &SiteConfig) -> Result<(), JsValue> {
    let targets = dom::query_all(SCROLL_FADE_SELECTOR);
    let observed = visibility::observe_once(&targets, &observe_options(config), |el| {
        dom::add_class(el, FADED_IN_CLASS);
    })?;
    if !observed {
        for el in &targets {
            dom::add_class(el, FADED_IN_CLASS);
        }
    }
    Ok(())
}
