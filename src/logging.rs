//! Logger and panic hook setup.

/// Route `log` records and panics to the browser console.
#[cfg(target_arch = "wasm32")]
pub fn init() {
    console_error_panic_hook::set_once();
    // Already initialized is fine (e.g. hot reload re-running main).
    let _ = console_log::init_with_level(log::Level::Debug);
}

/// Host builds (tests) run without a logger; records are discarded.
#[cfg(not(target_arch = "wasm32"))]
pub fn init() {
    console_error_panic_hook::set_once();
}
