//! Region selection: state update and price re-render.

use crate::market::GLOBAL_FLAG;
use crate::pricing::render_price;

use super::state::{Selection, SelectionState};

/// Everything a region change writes to. Implementations skip targets that
/// are missing from the page.
pub trait RegionView {
    /// Header button: region name and flag glyph.
    fn show_region(&mut self, name: &str, flag: &str);

    /// Rewrite each price node from its base-currency amount.
    fn rewrite_prices(&mut self, render: &dyn Fn(f64) -> String);

    /// Rewrite every currency-symbol placeholder.
    fn show_currency_symbol(&mut self, symbol: &str);

    /// Pricing section label, e.g. `USD ($)`.
    fn show_pricing_label(&mut self, label: &str);
}

/// Apply a selection to the state and re-render the view.
///
/// The region is always taken from the request. The currency comes from the
/// request, else the region's table currency; `Global` without an explicit
/// currency keeps the current one.
pub fn select_region(state: &mut SelectionState, selection: Selection, view: &mut dyn RegionView) {
    let Selection {
        region,
        currency,
        symbol,
        flag,
    } = selection;

    state.region = region;
    state.currency = currency.or(region.currency()).unwrap_or(state.currency);
    state.symbol = symbol.unwrap_or_else(|| state.currency.symbol().to_string());

    let flag = flag.unwrap_or_else(|| GLOBAL_FLAG.to_string());
    view.show_region(region.display_name(), &flag);

    let currency = state.currency;
    view.rewrite_prices(&|base| render_price(base, currency));
    view.show_currency_symbol(&state.symbol);
    view.show_pricing_label(&pricing_label(state));

    log::info!("Region changed to: {} ({})", region, state.currency);
}

pub fn pricing_label(state: &SelectionState) -> String {
    format!("{} ({})", state.currency.code(), state.symbol)
}

/// Parse a price node's base amount attribute.
pub fn parse_base_amount(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::market::{Currency, Region};

    /// In-memory page: price nodes hold an optional base amount.
    #[derive(Default)]
    pub(crate) struct FakeRegionView {
        pub region_name: Option<String>,
        pub flag: Option<String>,
        pub prices: Vec<(Option<f64>, String)>,
        pub symbols: Vec<String>,
        pub pricing_label: Option<String>,
    }

    impl FakeRegionView {
        pub(crate) fn with_prices(bases: &[Option<f64>]) -> Self {
            Self {
                prices: bases.iter().map(|b| (*b, String::new())).collect(),
                symbols: vec![String::new(); 2],
                ..Self::default()
            }
        }

        pub(crate) fn price_texts(&self) -> Vec<&str> {
            self.prices.iter().map(|(_, t)| t.as_str()).collect()
        }
    }

    impl RegionView for FakeRegionView {
        fn show_region(&mut self, name: &str, flag: &str) {
            self.region_name = Some(name.to_string());
            self.flag = Some(flag.to_string());
        }

        fn rewrite_prices(&mut self, render: &dyn Fn(f64) -> String) {
            for (base, text) in &mut self.prices {
                if let Some(b) = base {
                    *text = render(*b);
                }
            }
        }

        fn show_currency_symbol(&mut self, symbol: &str) {
            for s in &mut self.symbols {
                *s = symbol.to_string();
            }
        }

        fn show_pricing_label(&mut self, label: &str) {
            self.pricing_label = Some(label.to_string());
        }
    }

    #[test]
    fn select_us_updates_prices() {
        let mut state = SelectionState::default();
        let mut view = FakeRegionView::with_prices(&[Some(100.0), Some(250_000.0)]);
        select_region(
            &mut state,
            Selection::new(Region::UnitedStates).currency(Currency::Usd),
            &mut view,
        );

        assert_eq!(state.region, Region::UnitedStates);
        assert_eq!(state.currency, Currency::Usd);
        assert_eq!(state.symbol, "$");
        // 100 * 0.012 = 1.2 -> "1"; 250,000 * 0.012 = 3,000
        assert_eq!(view.price_texts(), vec!["1", "3,000"]);
        assert_eq!(view.symbols, vec!["$", "$"]);
        assert_eq!(view.pricing_label.as_deref(), Some("USD ($)"));
        assert_eq!(view.region_name.as_deref(), Some("United States"));
    }

    #[test]
    fn supplied_symbol_and_flag_win() {
        let mut state = SelectionState::default();
        let mut view = FakeRegionView::default();
        let mut sel = Selection::new(Region::Singapore).currency(Currency::Sgd);
        sel.symbol = Some("SGD$".into());
        sel.flag = Some("🇸🇬".into());
        select_region(&mut state, sel, &mut view);

        assert_eq!(state.symbol, "SGD$");
        assert_eq!(view.flag.as_deref(), Some("🇸🇬"));
        assert_eq!(view.pricing_label.as_deref(), Some("SGD (SGD$)"));
    }

    #[test]
    fn missing_flag_shows_globe() {
        let mut state = SelectionState::default();
        let mut view = FakeRegionView::default();
        select_region(&mut state, Selection::new(Region::Europe), &mut view);
        assert_eq!(view.flag.as_deref(), Some(GLOBAL_FLAG));
        assert_eq!(state.currency, Currency::Eur);
        assert_eq!(state.symbol, "€");
    }

    #[test]
    fn global_region_keeps_currency() {
        let mut state = SelectionState::default();
        let mut view = FakeRegionView::default();
        select_region(
            &mut state,
            Selection::new(Region::UnitedKingdom).currency(Currency::Gbp),
            &mut view,
        );
        select_region(&mut state, Selection::new(Region::Global), &mut view);

        assert_eq!(state.region, Region::Global);
        assert_eq!(state.currency, Currency::Gbp);
        assert_eq!(view.region_name.as_deref(), Some("Global"));
    }

    #[test]
    fn global_region_with_explicit_currency() {
        let mut state = SelectionState::default();
        let mut view = FakeRegionView::default();
        select_region(
            &mut state,
            Selection::new(Region::Global).currency(Currency::Aud),
            &mut view,
        );
        assert_eq!(state.currency, Currency::Aud);
        assert_eq!(state.symbol, "A$");
    }

    #[test]
    fn explicit_currency_overrides_region_default() {
        let mut state = SelectionState::default();
        let mut view = FakeRegionView::with_prices(&[Some(1000.0)]);
        select_region(
            &mut state,
            Selection::new(Region::India).currency(Currency::Eur),
            &mut view,
        );
        assert_eq!(state.region, Region::India);
        assert_eq!(state.currency, Currency::Eur);
        assert_eq!(view.price_texts(), vec!["11"]);
    }

    #[test]
    fn unparseable_price_nodes_untouched() {
        let mut state = SelectionState::default();
        let mut view = FakeRegionView::with_prices(&[None, Some(5000.0)]);
        select_region(&mut state, Selection::with_defaults(Region::India), &mut view);
        assert_eq!(view.price_texts(), vec!["", "5,000"]);
    }

    #[test]
    fn repeated_selection_renders_from_base() {
        // Prices always derive from the immutable base amount, never from
        // the previously displayed value.
        let mut state = SelectionState::default();
        let mut view = FakeRegionView::with_prices(&[Some(10_000.0)]);
        select_region(&mut state, Selection::with_defaults(Region::UnitedStates), &mut view);
        assert_eq!(view.price_texts(), vec!["120"]);
        select_region(&mut state, Selection::with_defaults(Region::India), &mut view);
        assert_eq!(view.price_texts(), vec!["10,000"]);
    }

    #[test]
    fn unknown_option_currency_keeps_label_consistent() {
        let mut state = SelectionState::default();
        let mut view = FakeRegionView::default();
        let sel = Selection::from_option_data(Some("US"), Some("JPY"), Some("¥"), None);
        select_region(&mut state, sel, &mut view);
        assert_eq!(state.currency, Currency::Usd);
        assert_eq!(view.pricing_label.as_deref(), Some("USD ($)"));
    }

    #[test]
    fn parse_base_amount_cases() {
        assert_eq!(parse_base_amount("4999"), Some(4999.0));
        assert_eq!(parse_base_amount(" 12.5 "), Some(12.5));
        assert_eq!(parse_base_amount(""), None);
        assert_eq!(parse_base_amount("abc"), None);
        assert_eq!(parse_base_amount("inf"), None);
    }
}
