//! Region / currency selector wiring.

pub mod detect;
pub mod logic;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlSelectElement};

use crate::config::{
    CURRENCY_SYMBOL_SELECTOR, HIDDEN_CLASS, MOBILE_REGION_SELECT, PRICE_BASE_ATTR,
    PRICE_SELECTOR, PRICING_CURRENCY, REGION_BUTTON, REGION_DROPDOWN, REGION_FLAG, REGION_NAME,
    REGION_OPTION_SELECTOR, USER_TIMEZONE,
};
use crate::dom;
use crate::market::Region;

use detect::{apply_detection, detect, resolve_timezone, timezone_city};
use logic::{parse_base_amount, select_region, RegionView};
use state::{Selection, SelectionState};

pub type SharedSelection = Rc<RefCell<SelectionState>>;

/// `RegionView` over the live document.
pub struct DomRegionView;

impl RegionView for DomRegionView {
    fn show_region(&mut self, name: &str, flag: &str) {
        dom::set_text_by_id(REGION_NAME, name);
        dom::set_text_by_id(REGION_FLAG, flag);
    }

    fn rewrite_prices(&mut self, render: &dyn Fn(f64) -> String) {
        for el in dom::query_all(PRICE_SELECTOR) {
            let raw = el.get_attribute(PRICE_BASE_ATTR).unwrap_or_default();
            match parse_base_amount(&raw) {
                Some(base) => el.set_text_content(Some(&render(base))),
                None => log::debug!("price node with unusable {}={:?}", PRICE_BASE_ATTR, raw),
            }
        }
    }

    fn show_currency_symbol(&mut self, symbol: &str) {
        for el in dom::query_all(CURRENCY_SYMBOL_SELECTOR) {
            el.set_text_content(Some(symbol));
        }
    }

    fn show_pricing_label(&mut self, label: &str) {
        dom::set_text_by_id(PRICING_CURRENCY, label);
    }
}

/// Apply a selection against the document.
pub fn change_region(selection: &SharedSelection, request: Selection) {
    select_region(&mut selection.borrow_mut(), request, &mut DomRegionView);
}

/// Header dropdown: toggle on the button, close on any outside click,
/// select on an option click.
pub fn init_selector(selection: &SharedSelection) -> Result<(), JsValue> {
    let (Some(button), Some(dropdown)) = (dom::by_id(REGION_BUTTON), dom::by_id(REGION_DROPDOWN))
    else {
        return Ok(());
    };

    {
        let dropdown = dropdown.clone();
        dom::listen(&button, "click", move |event| {
            event.stop_propagation();
            dom::toggle_class(&dropdown, HIDDEN_CLASS);
        })?;
    }

    if let Some(document) = dom::document() {
        let dropdown = dropdown.clone();
        dom::listen(&document, "click", move |_| {
            dom::add_class(&dropdown, HIDDEN_CLASS);
        })?;
    }

    for option in dom::query_all(REGION_OPTION_SELECTOR) {
        let selection = selection.clone();
        let dropdown = dropdown.clone();
        let target = option.clone();
        dom::listen(&option, "click", move |_| {
            change_region(&selection, option_selection(&target));
            dom::add_class(&dropdown, HIDDEN_CLASS);
        })?;
    }

    Ok(())
}

fn option_selection(option: &Element) -> Selection {
    let region = option.get_attribute("data-region");
    let currency = option.get_attribute("data-currency");
    let symbol = option.get_attribute("data-symbol");
    let flag = option.get_attribute("data-flag");
    Selection::from_option_data(
        region.as_deref(),
        currency.as_deref(),
        symbol.as_deref(),
        flag.as_deref(),
    )
}

/// Mobile `<select>`: the chosen region with its table currency.
pub fn init_mobile_select(selection: &SharedSelection) -> Result<(), JsValue> {
    let Some(select) = dom::by_id(MOBILE_REGION_SELECT) else {
        return Ok(());
    };
    let selection = selection.clone();
    dom::listen(&select, "change", move |event| {
        let Some(select) = event
            .target()
            .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
        else {
            return;
        };
        let region = Region::from_code(&select.value());
        change_region(
            &selection,
            Selection::new(region).currency(region.currency_or_base()),
        );
    })
}

/// `new Intl.DateTimeFormat().resolvedOptions().timeZone`, built through
/// `Reflect` so a missing `Intl` or a throwing constructor comes back as
/// `Err` instead of escaping as a JS exception.
fn lookup_timezone() -> Result<Option<String>, JsValue> {
    let intl = Reflect::get(&js_sys::global(), &JsValue::from_str("Intl"))?;
    let constructor = Reflect::get(&intl, &JsValue::from_str("DateTimeFormat"))?
        .dyn_into::<Function>()?;
    let format = Reflect::construct(&constructor, &Array::new())?;
    let resolved_options = Reflect::get(&format, &JsValue::from_str("resolvedOptions"))?
        .dyn_into::<Function>()?;
    let options = resolved_options.call0(&format)?;
    Ok(Reflect::get(&options, &JsValue::from_str("timeZone"))?.as_string())
}

/// One-shot detection, deferred to a microtask so startup is not held up.
pub fn spawn_detection(selection: &SharedSelection) {
    let selection = selection.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let timezone = resolve_timezone(lookup_timezone());
        let detection = detect(timezone.as_deref());
        apply_detection(&mut selection.borrow_mut(), &detection, &mut DomRegionView);
        dom::set_text_by_id(USER_TIMEZONE, &timezone_city(timezone.as_deref()));
    });
}
