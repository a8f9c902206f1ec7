//! Booking wizard state: steps, the submitted form and its confirmation.

use thiserror::Error;

/// Confirmation focus label for `focus=enterprise`.
pub const ENTERPRISE_LABEL: &str = "ENTERPRISE STRATEGY (B2B)";
/// Confirmation focus label for every other focus value.
pub const INDIVIDUAL_LABEL: &str = "CAREER BLUEPRINTING (B2C)";
/// Focus value recorded when no focus option is checked.
pub const NO_FOCUS: &str = "N/A";
/// Schedule label when no slot is checked.
pub const NO_SCHEDULE: &str = "TBD";

const ENTERPRISE_FOCUS: &str = "enterprise";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum BookingError {
    #[error("no booking step {0} (expected 1..=3)")]
    InvalidStep(i64),
    #[error("not a booking step number: {0}")]
    NotAStep(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    /// Pick a focus and a slot.
    Choose = 1,
    /// Contact details form.
    Details = 2,
    /// Read-only confirmation.
    Confirmation = 3,
}

impl Step {
    pub fn all() -> &'static [Step] {
        &[Step::Choose, Step::Details, Step::Confirmation]
    }

    pub fn number(self) -> u8 {
        self as u8
    }

    /// Step from a page-supplied number (inline `nextStep(2)` handlers).
    pub fn from_number(n: f64) -> Result<Step, BookingError> {
        if !n.is_finite() || n.fract() != 0.0 {
            return Err(BookingError::NotAStep(n.to_string()));
        }
        Step::try_from(n as i64)
    }
}

impl TryFrom<i64> for Step {
    type Error = BookingError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Step::Choose),
            2 => Ok(Step::Details),
            3 => Ok(Step::Confirmation),
            _ => Err(BookingError::InvalidStep(n)),
        }
    }
}

/// The wizard's position. Exactly one step is active at a time.
#[derive(Clone, Debug, PartialEq)]
pub struct BookingFlow {
    pub current: Step,
}

impl BookingFlow {
    pub fn new() -> Self {
        Self {
            current: Step::Choose,
        }
    }
}

impl Default for BookingFlow {
    fn default() -> Self {
        Self::new()
    }
}

/// Raw form values read at submit time. Nothing is validated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Submission {
    pub name: Option<String>,
    pub email: Option<String>,
    /// Value of the checked focus option.
    pub focus: Option<String>,
    /// Label text next to the checked schedule option.
    pub schedule: Option<String>,
}

/// Text written into the confirmation step.
#[derive(Clone, Debug, PartialEq)]
pub struct Confirmation {
    pub name: String,
    pub email: String,
    pub focus: String,
    pub schedule: String,
}

impl Submission {
    pub fn focus_value(&self) -> &str {
        self.focus.as_deref().unwrap_or(NO_FOCUS)
    }

    pub fn confirmation(&self) -> Confirmation {
        Confirmation {
            name: self.name.clone().unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
            focus: focus_label(self.focus_value()).to_string(),
            schedule: self
                .schedule
                .clone()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| NO_SCHEDULE.to_string()),
        }
    }
}

pub fn focus_label(focus: &str) -> &'static str {
    if focus == ENTERPRISE_FOCUS {
        ENTERPRISE_LABEL
    } else {
        INDIVIDUAL_LABEL
    }
}
