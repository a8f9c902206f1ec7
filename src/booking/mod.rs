//! Booking wizard wiring: step panels, indicators, form submit and the
//! `nextStep` / `prevStep` page globals used by inline button handlers.

pub mod logic;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlInputElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::config::{
    BOOKING_SECTION, BOOKING_STEP_SELECTOR, CONF_EMAIL, CONF_FOCUS, CONF_NAME, CONF_SCHEDULE,
    CONTACT_EMAIL, CONTACT_NAME, DETAILS_FORM, FOCUS_CHECKED_SELECTOR, HIDDEN_CLASS,
    SCHEDULE_CHECKED_SELECTOR, SCHEDULE_TIME_SELECTOR,
};
use crate::dom;

use logic::{go_next, go_previous, show, submit, BookingView};
use state::{BookingFlow, Confirmation, Step, Submission};

pub type SharedFlow = Rc<RefCell<BookingFlow>>;

// Indicator styling: label span and connector line.
const TEXT_REACHED: &str = "text-purple-accent";
const TEXT_PENDING: &str = "text-gray-500";
const LINE_REACHED: &str = "bg-purple-accent";
const LINE_PENDING: &str = "bg-gray-700";

fn step_panel_id(step: Step) -> String {
    format!("step-{}", step.number())
}

fn step_indicator_id(step: Step) -> String {
    format!("step-{}-indicator", step.number())
}

/// `BookingView` over the live document.
pub struct DomBookingView;

impl BookingView for DomBookingView {
    fn hide_all_steps(&mut self) {
        for el in dom::query_all(BOOKING_STEP_SELECTOR) {
            dom::add_class(&el, HIDDEN_CLASS);
        }
    }

    fn show_step(&mut self, step: Step) {
        if let Some(el) = dom::by_id(&step_panel_id(step)) {
            dom::remove_class(&el, HIDDEN_CLASS);
        }
    }

    fn mark_indicator(&mut self, index: Step, reached: bool) {
        let Some(indicator) = dom::by_id(&step_indicator_id(index)) else {
            return;
        };
        let (text_on, text_off, line_on, line_off) = if reached {
            (TEXT_REACHED, TEXT_PENDING, LINE_REACHED, LINE_PENDING)
        } else {
            (TEXT_PENDING, TEXT_REACHED, LINE_PENDING, LINE_REACHED)
        };
        if let Ok(Some(span)) = indicator.query_selector("span") {
            dom::remove_class(&span, text_off);
            dom::add_class(&span, text_on);
        }
        if let Ok(Some(line)) = indicator.query_selector("div") {
            dom::remove_class(&line, line_off);
            dom::add_class(&line, line_on);
        }
    }

    fn scroll_to_booking(&mut self) {
        if let Some(section) = dom::by_id(BOOKING_SECTION) {
            let opts = ScrollIntoViewOptions::new();
            opts.set_behavior(ScrollBehavior::Smooth);
            opts.set_block(ScrollLogicalPosition::Start);
            section.scroll_into_view_with_scroll_into_view_options(&opts);
        }
    }

    fn read_submission(&self) -> Submission {
        let schedule = dom::query(SCHEDULE_CHECKED_SELECTOR)
            .and_then(|radio| radio.parent_element())
            .and_then(|parent| parent.query_selector(SCHEDULE_TIME_SELECTOR).ok().flatten())
            .and_then(|label| label.text_content());
        Submission {
            name: input_value_by_id(CONTACT_NAME),
            email: input_value_by_id(CONTACT_EMAIL),
            focus: dom::query(FOCUS_CHECKED_SELECTOR).and_then(|el| input_value(&el)),
            schedule,
        }
    }

    fn show_confirmation(&mut self, confirmation: &Confirmation) {
        dom::set_text_by_id(CONF_NAME, &confirmation.name);
        dom::set_text_by_id(CONF_EMAIL, &confirmation.email);
        dom::set_text_by_id(CONF_FOCUS, &confirmation.focus);
        dom::set_text_by_id(CONF_SCHEDULE, &confirmation.schedule);
    }
}

fn input_value(el: &web_sys::Element) -> Option<String> {
    el.dyn_ref::<HtmlInputElement>().map(|input| input.value())
}

fn input_value_by_id(id: &str) -> Option<String> {
    dom::by_id(id).and_then(|el| input_value(&el))
}

/// Show step 1, bind the details form and publish the step globals.
pub fn init_flow(flow: &SharedFlow) -> Result<(), JsValue> {
    show(&mut flow.borrow_mut(), Step::Choose, &mut DomBookingView);

    if let Some(form) = dom::by_id(DETAILS_FORM) {
        let flow = flow.clone();
        dom::listen(&form, "submit", move |event| {
            event.prevent_default();
            submit(&mut flow.borrow_mut(), &mut DomBookingView);
        })?;
    }

    expose_step_global("nextStep", flow, go_next)?;
    expose_step_global("prevStep", flow, go_previous)?;
    Ok(())
}

type Transition = fn(&mut BookingFlow, Step, &mut dyn BookingView);

/// `window[name] = (n) => transition(n)`.
fn expose_step_global(name: &str, flow: &SharedFlow, transition: Transition) -> Result<(), JsValue> {
    let Some(window) = dom::window() else {
        return Ok(());
    };
    let flow = flow.clone();
    let label = name.to_string();
    let closure = Closure::<dyn FnMut(JsValue)>::wrap(Box::new(move |arg: JsValue| {
        let number = arg
            .as_f64()
            .or_else(|| arg.as_string().and_then(|s| s.trim().parse().ok()))
            .unwrap_or(f64::NAN);
        match Step::from_number(number) {
            Ok(step) => transition(&mut flow.borrow_mut(), step, &mut DomBookingView),
            Err(e) => log::warn!("{}: {}", label, e),
        }
    }));
    js_sys::Reflect::set(&window, &JsValue::from_str(name), closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
