//! Region auto-detection from the browser's resolved IANA timezone.
//!
//! Rules are checked in order and the first match wins, so specific zones
//! (`Europe/London`) must precede the broad ones (`Europe/`).

use std::fmt::Debug;

use crate::market::Region;

use super::logic::{select_region, RegionView};
use super::state::{Selection, SelectionState};

/// Shown in the booking section when the timezone has no city segment.
pub const TIMEZONE_PLACEHOLDER: &str = "your timezone";

struct TimezoneRule {
    /// Any of these substrings matches.
    patterns: &'static [&'static str],
    region: Region,
}

const RULES: &[TimezoneRule] = &[
    TimezoneRule {
        patterns: &["Asia/Kolkata", "Asia/Calcutta"],
        region: Region::India,
    },
    TimezoneRule {
        patterns: &["America/"],
        region: Region::UnitedStates,
    },
    TimezoneRule {
        patterns: &["Europe/London"],
        region: Region::UnitedKingdom,
    },
    TimezoneRule {
        patterns: &["Europe/"],
        region: Region::Europe,
    },
    TimezoneRule {
        patterns: &["Asia/Dubai"],
        region: Region::MiddleEast,
    },
    TimezoneRule {
        patterns: &["Asia/Singapore"],
        region: Region::Singapore,
    },
    TimezoneRule {
        patterns: &["Australia/"],
        region: Region::Australia,
    },
];

/// Outcome of one detection run.
#[derive(Clone, Debug, PartialEq)]
pub enum Detection {
    Matched(Region),
    /// Timezone known but no rule applies.
    Unmatched,
    /// The runtime could not report a timezone.
    Unavailable,
}

pub fn match_timezone(timezone: &str) -> Option<Region> {
    RULES
        .iter()
        .find(|rule| rule.patterns.iter().any(|p| timezone.contains(p)))
        .map(|rule| rule.region)
}

pub fn detect(timezone: Option<&str>) -> Detection {
    match timezone {
        None => Detection::Unavailable,
        Some(tz) => match match_timezone(tz) {
            Some(region) => Detection::Matched(region),
            None => Detection::Unmatched,
        },
    }
}

/// Collapse a timezone lookup into the value `detect` takes. A lookup that
/// threw (no `Intl`, broken `resolvedOptions`) counts as unavailable.
pub fn resolve_timezone<E: Debug>(lookup: Result<Option<String>, E>) -> Option<String> {
    match lookup {
        Ok(timezone) => timezone,
        Err(e) => {
            log::info!("Timezone lookup failed: {:?}", e);
            None
        }
    }
}

/// Second `/` segment of the timezone (`Asia/Kolkata` -> `Kolkata`).
pub fn timezone_city(timezone: Option<&str>) -> String {
    timezone
        .and_then(|tz| tz.split('/').nth(1))
        .filter(|city| !city.is_empty())
        .unwrap_or(TIMEZONE_PLACEHOLDER)
        .to_string()
}

/// Apply a detection outcome.
///
/// A match selects that region with its table currency, symbol and flag.
/// An unavailable timezone re-applies the India default. An unmatched
/// timezone leaves the state alone.
pub fn apply_detection(
    state: &mut SelectionState,
    detection: &Detection,
    view: &mut dyn RegionView,
) {
    match detection {
        Detection::Matched(region) => {
            select_region(state, Selection::with_defaults(*region), view);
        }
        Detection::Unavailable => {
            log::info!("Could not detect region; defaulting to {}", Region::India);
            select_region(state, Selection::with_defaults(Region::India), view);
        }
        Detection::Unmatched => {
            log::debug!("No region rule for timezone; keeping {}", state.region);
        }
    }
}
