//! Static market tables: regions, currencies, symbols and exchange rates.
//!
//! Rates are fixed multipliers against the base currency (INR = 1.0).

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The currency every exchange rate is expressed against.
pub const BASE_CURRENCY: Currency = Currency::Inr;

/// Flag shown when a selection does not carry its own glyph.
pub const GLOBAL_FLAG: &str = "🌐";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MarketError {
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),
}

/// A coarse market a visitor can be shown prices for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    India,
    UnitedStates,
    UnitedKingdom,
    Europe,
    MiddleEast,
    Singapore,
    Australia,
    /// Any code outside the table.
    Global,
}

impl Region {
    /// Parse a region code. Unlisted codes collapse to `Global`.
    pub fn from_code(code: &str) -> Region {
        match code {
            "IN" => Region::India,
            "US" => Region::UnitedStates,
            "GB" => Region::UnitedKingdom,
            "EU" => Region::Europe,
            "AE" => Region::MiddleEast,
            "SG" => Region::Singapore,
            "AU" => Region::Australia,
            _ => Region::Global,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Region::India => "IN",
            Region::UnitedStates => "US",
            Region::UnitedKingdom => "GB",
            Region::Europe => "EU",
            Region::MiddleEast => "AE",
            Region::Singapore => "SG",
            Region::Australia => "AU",
            Region::Global => "GLOBAL",
        }
    }

    /// Name shown in the header region button.
    pub fn display_name(&self) -> &'static str {
        match self {
            Region::India => "India",
            Region::UnitedStates => "United States",
            Region::UnitedKingdom => "United Kingdom",
            Region::Europe => "Europe",
            Region::MiddleEast => "Middle East",
            Region::Singapore => "Singapore/APAC",
            Region::Australia => "Australia",
            Region::Global => "Global",
        }
    }

    /// Default currency, `None` for `Global`.
    pub fn currency(&self) -> Option<Currency> {
        match self {
            Region::India => Some(Currency::Inr),
            Region::UnitedStates => Some(Currency::Usd),
            Region::UnitedKingdom => Some(Currency::Gbp),
            Region::Europe => Some(Currency::Eur),
            Region::MiddleEast => Some(Currency::Aed),
            Region::Singapore => Some(Currency::Sgd),
            Region::Australia => Some(Currency::Aud),
            Region::Global => None,
        }
    }

    /// Default currency with the page-wide INR fallback applied.
    pub fn currency_or_base(&self) -> Currency {
        self.currency().unwrap_or(BASE_CURRENCY)
    }

    pub fn flag(&self) -> &'static str {
        match self {
            Region::India => "🇮🇳",
            Region::UnitedStates => "🇺🇸",
            Region::UnitedKingdom => "🇬🇧",
            Region::Europe => "🇪🇺",
            Region::MiddleEast => "🇦🇪",
            Region::Singapore => "🇸🇬",
            Region::Australia => "🇦🇺",
            Region::Global => GLOBAL_FLAG,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Currency {
    Inr,
    Usd,
    Gbp,
    Eur,
    Aed,
    Sgd,
    Aud,
}

impl Currency {
    pub fn all() -> &'static [Currency] {
        &[
            Currency::Inr,
            Currency::Usd,
            Currency::Gbp,
            Currency::Eur,
            Currency::Aed,
            Currency::Sgd,
            Currency::Aud,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Inr => "INR",
            Currency::Usd => "USD",
            Currency::Gbp => "GBP",
            Currency::Eur => "EUR",
            Currency::Aed => "AED",
            Currency::Sgd => "SGD",
            Currency::Aud => "AUD",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Inr => "₹",
            Currency::Usd => "$",
            Currency::Gbp => "£",
            Currency::Eur => "€",
            Currency::Aed => "AED",
            Currency::Sgd => "S$",
            Currency::Aud => "A$",
        }
    }

    /// Units of this currency per one unit of the base currency.
    pub fn rate(&self) -> f64 {
        match self {
            Currency::Inr => 1.0,
            Currency::Usd => 0.012,
            Currency::Gbp => 0.0096,
            Currency::Eur => 0.011,
            Currency::Aed => 0.044,
            Currency::Sgd => 0.016,
            Currency::Aud => 0.018,
        }
    }
}

impl FromStr for Currency {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::all()
            .iter()
            .copied()
            .find(|c| c.code() == s)
            .ok_or_else(|| MarketError::UnknownCurrency(s.to_string()))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
