//! One-shot viewport visibility triggers on top of `IntersectionObserver`.

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom;

#[derive(Clone, Debug, PartialEq)]
pub struct ObserveOptions {
    /// Visible fraction that counts as "seen".
    pub threshold: f64,
    /// CSS-style margin applied to the viewport, e.g. `0px 0px -15% 0px`.
    pub root_margin: Option<String>,
}

/// Whether the browser provides `IntersectionObserver`.
pub fn is_supported() -> bool {
    dom::has_global("IntersectionObserver")
}

/// Call `on_visible` for each target the first time it becomes visible,
/// then stop observing that target.
///
/// Returns `Ok(false)` without observing anything when the browser lacks
/// `IntersectionObserver`; the caller picks its own fallback.
pub fn observe_once<F>(
    targets: &[Element],
    options: &ObserveOptions,
    mut on_visible: F,
) -> Result<bool, JsValue>
where
    F: FnMut(&Element) + 'static,
{
    if !is_supported() {
        return Ok(false);
    }

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::wrap(Box::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    on_visible(&target);
                    observer.unobserve(&target);
                }
            }
        },
    ));

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    if let Some(margin) = &options.root_margin {
        init.set_root_margin(margin);
    }
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();

    for target in targets {
        observer.observe(target);
    }
    Ok(true)
}
