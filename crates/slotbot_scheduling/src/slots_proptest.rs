#[cfg(test)]
mod tests {
    use crate::conflict::find_conflict;
    use crate::slots::find_next_slot_at;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use proptest::prelude::*;
    use slotbot_common::{Booking, Event};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap()
    }

    // Sorted, non-overlapping bookings built from (gap, length) pairs in minutes.
    fn build_events(offset: i64, spans: &[(i64, i64)]) -> Vec<Event> {
        let mut cursor = now() + Duration::minutes(offset);
        spans
            .iter()
            .map(|(gap, len)| {
                let start = cursor + Duration::minutes(*gap);
                let end = start + Duration::minutes(*len);
                cursor = end;
                Event {
                    title: "staging | auth".to_string(),
                    start,
                    end,
                    environment: "staging".to_string(),
                    service: "auth".to_string(),
                }
            })
            .collect()
    }

    proptest! {
        #[test]
        fn test_suggested_slot_is_free_and_not_in_past(
            offset in -300i64..300,
            spans in prop::collection::vec((0i64..180, 5i64..120), 0..8),
            duration_minutes in 5i64..=120,
        ) {
            let events = build_events(offset, &spans);
            let duration = Duration::minutes(duration_minutes);
            let slot = find_next_slot_at(now(), "staging", "auth", duration, &events);

            prop_assert!(slot >= now());

            let booking = Booking {
                environment: "staging".to_string(),
                service: "auth".to_string(),
                ticket: "OPS-1".to_string(),
                start: slot,
                duration,
                requester: "prop".to_string(),
            };
            prop_assert!(find_conflict(&booking, &events).is_none());
        }
    }
}
