mod booking;
mod charts;
mod config;
mod dom;
mod logging;
mod market;
mod pricing;
mod region;
mod ui;
mod visibility;

use std::{cell::RefCell, rc::Rc};

use wasm_bindgen::JsValue;

use booking::state::BookingFlow;
use booking::SharedFlow;
use config::SiteConfig;
use region::state::SelectionState;
use region::SharedSelection;

/// Run one page initializer; a failure is logged and does not stop the rest.
fn init_part(name: &str, init: impl FnOnce() -> Result<(), JsValue>) {
    if let Err(e) = init() {
        log::error!("{} init failed: {:?}", name, e);
    }
}

fn start() {
    let config = SiteConfig::load();
    let selection: SharedSelection = Rc::new(RefCell::new(SelectionState::default()));
    let flow: SharedFlow = Rc::new(RefCell::new(BookingFlow::new()));

    init_part("mobile menu", || {
        ui::menu::init()?;
        region::init_mobile_select(&selection)
    });
    init_part("region selector", || region::init_selector(&selection));
    init_part("scroll reveal", || ui::reveal::init(&config));
    init_part("charts", || charts::init(&config));
    init_part("booking flow", || booking::init_flow(&flow));
    init_part("typing effect", || ui::typing::init(&config));
    region::spawn_detection(&selection);

    log::info!("page behaviour ready");
}

fn main() {
    logging::init();

    let Some(document) = dom::document() else {
        log::error!("no document; nothing to wire");
        return;
    };

    if dom::is_loading(&document) {
        let mut started = false;
        let registered = dom::listen(&document, "DOMContentLoaded", move |_| {
            if !started {
                started = true;
                start();
            }
        });
        if let Err(e) = registered {
            log::error!("could not wait for DOMContentLoaded: {:?}", e);
        }
    } else {
        start();
    }
}
