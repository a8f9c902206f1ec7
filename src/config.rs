//! ページ設定: DOM の id / セレクタ定数と、いくつかの調整値。
//!
//! 調整値のデフォルトは現行ページの挙動と同じ。`window.ORIGENNT_CONFIG`
//! オブジェクトがあれば、その中のフィールドだけを上書きする（部分指定可）。

use serde::Deserialize;
use thiserror::Error;

// ── Header / region selector ────────────────────────────────────
pub const REGION_BUTTON: &str = "region-btn";
pub const REGION_DROPDOWN: &str = "region-dropdown";
pub const REGION_OPTION_SELECTOR: &str = ".region-option";
pub const REGION_NAME: &str = "region-name";
pub const REGION_FLAG: &str = "region-flag";
pub const MOBILE_REGION_SELECT: &str = "mobile-region-select";

// ── Pricing ─────────────────────────────────────────────────────
pub const PRICE_SELECTOR: &str = ".price";
pub const PRICE_BASE_ATTR: &str = "data-inr";
pub const CURRENCY_SYMBOL_SELECTOR: &str = ".currency-symbol";
pub const PRICING_CURRENCY: &str = "pricing-currency";

// ── Mobile menu ─────────────────────────────────────────────────
pub const MOBILE_MENU_BUTTON: &str = "mobile-menu-button";
pub const MOBILE_MENU: &str = "mobile-menu";

// ── Booking ─────────────────────────────────────────────────────
pub const BOOKING_SECTION: &str = "booking";
pub const BOOKING_STEP_SELECTOR: &str = ".booking-step";
pub const DETAILS_FORM: &str = "details-form";
pub const CONTACT_NAME: &str = "contact-name";
pub const CONTACT_EMAIL: &str = "contact-email";
pub const FOCUS_CHECKED_SELECTOR: &str = "input[name=\"focus\"]:checked";
pub const SCHEDULE_CHECKED_SELECTOR: &str = "input[name=\"schedule\"]:checked";
pub const SCHEDULE_TIME_SELECTOR: &str = ".schedule-time";
pub const CONF_NAME: &str = "conf-name";
pub const CONF_EMAIL: &str = "conf-email";
pub const CONF_FOCUS: &str = "conf-focus";
pub const CONF_SCHEDULE: &str = "conf-schedule";
pub const USER_TIMEZONE: &str = "user-timezone";

// ── Misc ────────────────────────────────────────────────────────
pub const TYPING_TARGET: &str = "typing-text";
pub const SCROLL_FADE_SELECTOR: &str = "[data-scroll-fade]";

/// 共通の CSS クラス名。
pub const HIDDEN_CLASS: &str = "hidden";
pub const FADED_IN_CLASS: &str = "faded-in";

/// 上書き設定を置くページグローバル名（任意）。
pub const CONFIG_GLOBAL: &str = "ORIGENNT_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config global is not JSON-serializable")]
    NotSerializable,
    #[error("invalid config: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// ヒーロー見出しのタイピング演出で表示する文字列。
    pub typing_text: String,
    /// 1 文字ごとの間隔 (ms)。
    pub typing_speed_ms: i32,
    /// チャート canvas がこの割合だけ見えたら描画する。
    pub chart_visibility_threshold: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            typing_text: "Applying Predictive Talent Science to Global Markets.".into(),
            typing_speed_ms: 50,
            chart_visibility_threshold: 0.5,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -15% 0px".into(),
        }
    }
}

impl SiteConfig {
    /// JSON から上書き設定をデコードする。欠けたフィールドはデフォルト値のまま。
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// `window.ORIGENNT_CONFIG` を読み込む。
    /// 未設定・不正な場合はデフォルト値にフォールバックする。
    pub fn load() -> Self {
        match read_global_json(CONFIG_GLOBAL) {
            None => Self::default(),
            Some(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::debug!("loaded {} overrides", CONFIG_GLOBAL);
                    config
                }
                Err(e) => {
                    log::warn!("ignoring {}: {}", CONFIG_GLOBAL, e);
                    Self::default()
                }
            },
        }
    }
}

/// `JSON.stringify(window[name])`。未設定なら `None`。
fn read_global_json(name: &str) -> Option<String> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &name.into()).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    match js_sys::JSON::stringify(&value) {
        Ok(s) => s.as_string(),
        Err(_) => {
            log::warn!("{}", ConfigError::NotSerializable);
            None
        }
    }
}
