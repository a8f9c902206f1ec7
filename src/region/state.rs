//! Region selection state and selection requests.

use crate::market::{Currency, Region};

/// The page's current market. One instance lives for the page session and
/// is overwritten wholesale on every selection.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionState {
    pub region: Region,
    pub currency: Currency,
    pub symbol: String,
}

impl Default for SelectionState {
    fn default() -> Self {
        let region = Region::India;
        let currency = region.currency_or_base();
        Self {
            region,
            currency,
            symbol: currency.symbol().to_string(),
        }
    }
}

/// A request to switch region. Unset fields are derived from the tables.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    pub region: Region,
    pub currency: Option<Currency>,
    pub symbol: Option<String>,
    pub flag: Option<String>,
}

impl Selection {
    pub fn new(region: Region) -> Self {
        Self {
            region,
            currency: None,
            symbol: None,
            flag: None,
        }
    }

    /// Region with its table currency, symbol and flag filled in.
    pub fn with_defaults(region: Region) -> Self {
        let currency = region.currency_or_base();
        Self {
            region,
            currency: Some(currency),
            symbol: Some(currency.symbol().to_string()),
            flag: Some(region.flag().to_string()),
        }
    }

    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }

    /// Build a request from a region option's `data-*` attributes.
    ///
    /// A missing region code becomes `Global`. An unknown currency code is
    /// dropped (logged) so the region's own currency applies, and the
    /// option's symbol goes with it so it is never paired with the
    /// substituted currency. Empty symbol or flag strings count as absent.
    pub fn from_option_data(
        region: Option<&str>,
        currency: Option<&str>,
        symbol: Option<&str>,
        flag: Option<&str>,
    ) -> Self {
        let region = Region::from_code(region.unwrap_or_default());
        let mut symbol = non_empty(symbol);
        let currency = currency.and_then(|code| match code.parse::<Currency>() {
            Ok(c) => Some(c),
            Err(e) => {
                log::warn!("region option {}: {}", region, e);
                symbol = None;
                None
            }
        });
        Self {
            region,
            currency,
            symbol,
            flag: non_empty(flag),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|s| !s.is_empty()).map(str::to_string)
}
