//! Hero headline typing effect: one character per timer tick.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

use crate::config::{SiteConfig, TYPING_TARGET};
use crate::dom;

/// Reveals a text one character at a time.
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
        }
    }

    /// Reveal the next character and return the visible text, or `None`
    /// once everything is shown.
    pub fn advance(&mut self) -> Option<String> {
        if self.is_done() {
            return None;
        }
        self.shown += 1;
        Some(self.visible())
    }

    pub fn visible(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.chars.len()
    }
}

/// Write the next character; returns whether more remain.
fn type_next(target: &Element, writer: &mut Typewriter) -> bool {
    if let Some(text) = writer.advance() {
        target.set_text_content(Some(&text));
    }
    !writer.is_done()
}

/// Clear `#typing-text` and start typing. The first character appears
/// immediately, the rest every `typing_speed_ms`.
pub fn init(config: &SiteConfig) -> Result<(), JsValue> {
    let Some(target) = dom::by_id(TYPING_TARGET) else {
        return Ok(());
    };
    let Some(window) = dom::window() else {
        return Ok(());
    };

    target.set_text_content(Some(""));
    let mut writer = Typewriter::new(&config.typing_text);
    if !type_next(&target, &mut writer) {
        return Ok(());
    }

    let speed = config.typing_speed_ms;
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let reschedule = tick.clone();
    let timer_window = window.clone();

    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !type_next(&target, &mut writer) {
            return;
        }
        if let Some(callback) = reschedule.borrow().as_ref() {
            let scheduled = timer_window.set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                speed,
            );
            if let Err(e) = scheduled {
                log::warn!("typing effect stopped: {:?}", e);
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(callback) = tick.borrow().as_ref() {
        window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            speed,
        )?;
    }
    Ok(())
}
