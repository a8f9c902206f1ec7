//! Booking wizard transitions and submission.
//!
//! Both transitions are unconditional jumps: the caller names the target
//! step and nothing checks adjacency or completion of earlier steps.

use super::state::{BookingFlow, Confirmation, Step, Submission};

pub trait BookingView {
    fn hide_all_steps(&mut self);
    fn show_step(&mut self, step: Step);
    /// Style indicator `index` as reached or not reached.
    fn mark_indicator(&mut self, index: Step, reached: bool);
    /// Smooth-scroll the booking section to the top of the viewport.
    fn scroll_to_booking(&mut self);
    fn read_submission(&self) -> Submission;
    fn show_confirmation(&mut self, confirmation: &Confirmation);
}

/// Make `target` the only visible step and restyle the indicators.
pub fn show(flow: &mut BookingFlow, target: Step, view: &mut dyn BookingView) {
    view.hide_all_steps();
    view.show_step(target);
    for &index in Step::all() {
        view.mark_indicator(index, index <= target);
    }
    flow.current = target;
}

pub fn go_next(flow: &mut BookingFlow, target: Step, view: &mut dyn BookingView) {
    show(flow, target, view);
    view.scroll_to_booking();
}

pub fn go_previous(flow: &mut BookingFlow, target: Step, view: &mut dyn BookingView) {
    show(flow, target, view);
}

/// Copy the form into the confirmation view and jump to the last step.
/// Reachable from any step; the page only offers it on step 2.
pub fn submit(flow: &mut BookingFlow, view: &mut dyn BookingView) -> Confirmation {
    let submission = view.read_submission();
    let confirmation = submission.confirmation();
    view.show_confirmation(&confirmation);

    log::info!(
        "Booking submitted: name={:?} email={:?} focus={} schedule={:?}",
        submission.name,
        submission.email,
        submission.focus_value(),
        submission.schedule
    );

    go_next(flow, Step::Confirmation, view);
    confirmation
}
