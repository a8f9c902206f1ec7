//! Chart rendering through the page's global `Chart` constructor.
//!
//! Rendering is lazy: each canvas is drawn the first time half of it is on
//! screen. Missing canvases, a missing library or a missing 2D context all
//! make a render a silent no-op.

pub mod definition;

use js_sys::{Array, Function, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlCanvasElement, HtmlElement};

use crate::config::SiteConfig;
use crate::dom;
use crate::visibility::{self, ObserveOptions};

use definition::{ChartDefinition, DEFAULT_BORDER_COLOR, DEFAULT_COLOR};

const LIBRARY_GLOBAL: &str = "Chart";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    TalentPool,
    SkillDemand,
}

impl ChartKind {
    pub fn all() -> &'static [ChartKind] {
        &[ChartKind::TalentPool, ChartKind::SkillDemand]
    }

    pub fn canvas_id(&self) -> &'static str {
        match self {
            ChartKind::TalentPool => "pieChart",
            ChartKind::SkillDemand => "barChart",
        }
    }

    pub fn from_canvas_id(id: &str) -> Option<ChartKind> {
        ChartKind::all().iter().copied().find(|k| k.canvas_id() == id)
    }

    pub fn definition(&self) -> ChartDefinition {
        match self {
            ChartKind::TalentPool => definition::talent_pool_pie(),
            ChartKind::SkillDemand => definition::skill_demand_bar(),
        }
    }

    /// Pie slices switch the cursor to a pointer while hovered.
    fn has_hover_cursor(&self) -> bool {
        matches!(self, ChartKind::TalentPool)
    }
}

/// Cursor for the pie canvas given whether a slice is under the pointer.
pub fn hover_cursor(over_element: bool) -> &'static str {
    if over_element {
        "pointer"
    } else {
        "default"
    }
}

fn library() -> Option<Function> {
    let window = dom::window()?;
    Reflect::get(&window, &JsValue::from_str(LIBRARY_GLOBAL))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

/// `Chart.defaults.color` / `borderColor` for the dark theme.
fn apply_library_defaults(library: &Function) -> Result<(), JsValue> {
    let defaults = Reflect::get(library, &JsValue::from_str("defaults"))?;
    if defaults.is_object() {
        Reflect::set(&defaults, &"color".into(), &DEFAULT_COLOR.into())?;
        Reflect::set(&defaults, &"borderColor".into(), &DEFAULT_BORDER_COLOR.into())?;
    }
    Ok(())
}

fn definition_to_js(definition: &ChartDefinition) -> Result<JsValue, JsValue> {
    let json = serde_json::to_string(definition)
        .map_err(|e| JsValue::from_str(&format!("chart definition: {e}")))?;
    js_sys::JSON::parse(&json)
}

/// Attach the pie chart's `onHover(event, elements)` callback.
fn attach_hover_cursor(definition: &JsValue) -> Result<(), JsValue> {
    let options = Reflect::get(definition, &"options".into())?;
    let on_hover = Closure::<dyn FnMut(JsValue, JsValue)>::wrap(Box::new(
        |event: JsValue, elements: JsValue| {
            let over = Reflect::get(&elements, &JsValue::from(0))
                .map(|first| first.is_truthy())
                .unwrap_or(false);
            let canvas = Reflect::get(&event, &"native".into())
                .and_then(|native| Reflect::get(&native, &"target".into()));
            if let Ok(canvas) = canvas {
                if let Some(el) = canvas.dyn_ref::<HtmlElement>() {
                    if let Err(e) = el.style().set_property("cursor", hover_cursor(over)) {
                        log::debug!("pie cursor not updated: {:?}", e);
                    }
                }
            }
        },
    ));
    Reflect::set(&options, &"onHover".into(), on_hover.as_ref())?;
    // Lives as long as the chart, i.e. the page.
    on_hover.forget();
    Ok(())
}

/// Draw one chart. Calling twice creates a second chart instance.
pub fn render(kind: ChartKind) -> Result<(), JsValue> {
    let Some(canvas) = dom::by_id(kind.canvas_id())
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
    else {
        return Ok(());
    };
    let Some(context) = canvas.get_context("2d")? else {
        return Ok(());
    };
    let Some(library) = library() else {
        return Ok(());
    };

    let definition = definition_to_js(&kind.definition())?;
    if kind.has_hover_cursor() {
        attach_hover_cursor(&definition)?;
    }
    Reflect::construct(&library, &Array::of2(&context, &definition))?;
    log::debug!("rendered chart #{}", kind.canvas_id());
    Ok(())
}

fn render_logged(kind: ChartKind) {
    if let Err(e) = render(kind) {
        log::warn!("chart #{} failed: {:?}", kind.canvas_id(), e);
    }
}

/// Set library defaults and schedule each present canvas for lazy render.
pub fn init(config: &SiteConfig) -> Result<(), JsValue> {
    if let Some(library) = library() {
        apply_library_defaults(&library)?;
    }

    let canvases: Vec<Element> = ChartKind::all()
        .iter()
        .filter_map(|kind| dom::by_id(kind.canvas_id()))
        .collect();

    let options = ObserveOptions {
        threshold: config.chart_visibility_threshold,
        root_margin: None,
    };
    let observed = visibility::observe_once(&canvases, &options, |canvas| {
        if let Some(kind) = ChartKind::from_canvas_id(&canvas.id()) {
            render_logged(kind);
        }
    })?;

    if !observed {
        for canvas in &canvases {
            if let Some(kind) = ChartKind::from_canvas_id(&canvas.id()) {
                render_logged(kind);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_ids_round_trip() {
        for kind in ChartKind::all() {
            assert_eq!(ChartKind::from_canvas_id(kind.canvas_id()), Some(*kind));
        }
        assert_eq!(ChartKind::from_canvas_id("lineChart"), None);
    }

    #[test]
    fn definitions_match_kind() {
        assert_eq!(ChartKind::TalentPool.definition().chart_type, "pie");
        assert_eq!(ChartKind::SkillDemand.definition().chart_type, "bar");
    }

    #[test]
    fn only_pie_changes_cursor() {
        assert!(ChartKind::TalentPool.has_hover_cursor());
        assert!(!ChartKind::SkillDemand.has_hover_cursor());
        assert_eq!(hover_cursor(true), "pointer");
        assert_eq!(hover_cursor(false), "default");
    }
}
