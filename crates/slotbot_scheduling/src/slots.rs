// --- File: crates/slotbot_scheduling/src/slots.rs ---
use chrono::{DateTime, Duration, Utc};
use slotbot_common::Event;
use tracing::debug;

/// Earliest instant, at or after now, where `duration` fits for `environment`/`service`.
///
/// `events` must be sorted ascending by start (the calendar API returns them that
/// way). Entries for other targets are skipped; the remaining ones are trusted as
/// given and are not sorted again.
pub fn find_next_slot(
    environment: &str,
    service: &str,
    duration: Duration,
    events: &[Event],
) -> DateTime<Utc> {
    find_next_slot_at(Utc::now(), environment, service, duration, events)
}

/// [`find_next_slot`] with an explicit `now`.
///
/// 1. no relevant events: `now`
/// 2. first relevant event starts at or after `now + duration`: `now`
/// 3. first gap between consecutive events, measured from `max(end, now)`, that is at
///    least `duration` long: its start
/// 4. otherwise `max(last end, now)`
pub fn find_next_slot_at(
    now: DateTime<Utc>,
    environment: &str,
    service: &str,
    duration: Duration,
    events: &[Event],
) -> DateTime<Utc> {
    let relevant: Vec<&Event> = events
        .iter()
        .filter(|event| event.targets(environment, service))
        .collect();

    let (first, last) = match (relevant.first(), relevant.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return now,
    };

    if first.start - now >= duration {
        return now;
    }

    for pair in relevant.windows(2) {
        let gap_start = pair[0].end.max(now);
        if pair[1].start - gap_start >= duration {
            debug!(
                "free gap for {}/{} from {} to {}",
                environment, service, gap_start, pair[1].start
            );
            return gap_start;
        }
    }

    last.end.max(now)
}
