// --- File: crates/slotbot_scheduling/src/conflict.rs ---
use slotbot_common::{Booking, Event};

/// Returns the first event in `events` that overlaps `candidate` on the same
/// environment and service.
///
/// Intervals are half-open, so a booking that starts exactly when an event ends (or
/// the other way round) is not a conflict. The scan follows input order; the result is
/// the first hit, not necessarily the earliest-starting one.
pub fn find_conflict<'a>(candidate: &Booking, events: &'a [Event]) -> Option<&'a Event> {
    let start = candidate.start;
    let end = candidate.end();

    events
        .iter()
        .filter(|event| event.targets(&candidate.environment, &candidate.service))
        .find(|event| event.start < end && event.end > start)
}
