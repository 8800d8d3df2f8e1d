#[cfg(test)]
mod tests {
    use crate::slots::{find_next_slot, find_next_slot_at};
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use slotbot_common::Event;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, 6, 9, 0, 0).unwrap()
    }

    fn event_at(base: DateTime<Utc>, env: &str, service: &str, from: i64, to: i64) -> Event {
        Event {
            title: format!("{env} | {service}"),
            start: base + Duration::minutes(from),
            end: base + Duration::minutes(to),
            environment: env.to_string(),
            service: service.to_string(),
        }
    }

    fn two_bookings(base: DateTime<Utc>) -> Vec<Event> {
        vec![
            event_at(base, "staging", "auth", 30, 90),
            event_at(base, "staging", "auth", 120, 180),
        ]
    }

    #[test]
    fn test_short_slot_fits_before_first_event() {
        let events = two_bookings(now());
        let slot = find_next_slot_at(now(), "staging", "auth", Duration::minutes(15), &events);
        assert_eq!(slot, now());
    }

    #[test]
    fn test_slot_in_gap_between_events() {
        let events = two_bookings(now());
        // One second later the 30 minutes before the first event no longer fit.
        let later = now() + Duration::seconds(1);
        let slot = find_next_slot_at(later, "staging", "auth", Duration::minutes(30), &events);
        assert_eq!(slot, now() + Duration::minutes(90));
    }

    #[test]
    fn test_slot_after_last_event() {
        let events = two_bookings(now());
        let slot = find_next_slot_at(now(), "staging", "auth", Duration::hours(2), &events);
        assert_eq!(slot, now() + Duration::hours(3));
    }

    #[test]
    fn test_exact_fit_before_first_event() {
        let events = two_bookings(now());
        let slot = find_next_slot_at(now(), "staging", "auth", Duration::minutes(30), &events);
        assert_eq!(slot, now());
    }

    #[test]
    fn test_no_relevant_events_returns_now() {
        let events = vec![event_at(now(), "qa", "auth", 0, 600)];
        let slot = find_next_slot_at(now(), "staging", "auth", Duration::hours(1), &events);
        assert_eq!(slot, now());
        assert_eq!(
            find_next_slot_at(now(), "staging", "auth", Duration::hours(1), &[]),
            now()
        );
    }

    #[test]
    fn test_other_targets_do_not_block() {
        let events = vec![
            event_at(now(), "staging", "auth", 0, 60),
            event_at(now(), "staging", "payments", 60, 300),
            event_at(now(), "STAGING", "Auth", 120, 180),
        ];
        let slot = find_next_slot_at(now(), "staging", "auth", Duration::minutes(45), &events);
        assert_eq!(slot, now() + Duration::minutes(60));
    }

    #[test]
    fn test_past_events_are_clamped_to_now() {
        let events = vec![
            event_at(now(), "demo", "web", -120, -60),
            event_at(now(), "demo", "web", 30, 60),
        ];
        // gap measured from now, not from the old end
        let slot = find_next_slot_at(now(), "demo", "web", Duration::minutes(30), &events);
        assert_eq!(slot, now());

        let ended = vec![event_at(now(), "demo", "web", -120, -60)];
        let slot = find_next_slot_at(now(), "demo", "web", Duration::hours(2), &ended);
        assert_eq!(slot, now());
    }

    #[test]
    fn test_ongoing_event_pushes_slot_to_its_end() {
        let events = vec![event_at(now(), "qa", "api", -30, 45)];
        let slot = find_next_slot_at(now(), "qa", "api", Duration::minutes(10), &events);
        assert_eq!(slot, now() + Duration::minutes(45));
    }

    #[test]
    fn test_first_qualifying_gap_wins() {
        let events = vec![
            event_at(now(), "qa", "api", 0, 60),
            event_at(now(), "qa", "api", 120, 150),
            event_at(now(), "qa", "api", 180, 200),
        ];
        let slot = find_next_slot_at(now(), "qa", "api", Duration::minutes(30), &events);
        assert_eq!(slot, now() + Duration::minutes(60));
    }

    #[test]
    fn test_wall_clock_variant_is_close_to_now() {
        let base = Utc::now();
        let events = two_bookings(base);
        let tolerance = Duration::seconds(1);

        let slot = find_next_slot("staging", "auth", Duration::minutes(15), &events);
        assert!((slot - base).abs() <= tolerance, "got {slot}, expected ~{base}");

        let slot = find_next_slot("staging", "auth", Duration::minutes(30), &events);
        let expected = base + Duration::minutes(90);
        assert!((slot - expected).abs() <= tolerance);

        let slot = find_next_slot("staging", "auth", Duration::hours(2), &events);
        let expected = base + Duration::hours(3);
        assert!((slot - expected).abs() <= tolerance);
    }
}
