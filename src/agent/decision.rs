//! Decide whether to keep researching or move on to drafting.

use super::directive::COMPLETE_MARKER;
use super::state::AgentState;

/// Where the loop goes next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Research,
    Draft,
}

/// Pure routing predicate: keep researching while the iteration cap has not
/// been reached and the latest trail entry does not carry the completion
/// marker. An empty trail never carries the marker.
pub fn decide(state: &AgentState, max_iterations: u32) -> Route {
    let concluded = state
        .last_entry()
        .map(|entry| entry.contains(COMPLETE_MARKER))
        .unwrap_or(false);

    if state.iterations < max_iterations && !concluded {
        Route::Research
    } else {
        Route::Draft
    }
}
