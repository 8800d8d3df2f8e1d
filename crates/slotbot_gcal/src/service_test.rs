#[cfg(test)]
mod tests {
    use crate::service::{parse_title, to_calendar_event, to_domain_event};
    use chrono::{Duration, NaiveDate, TimeZone, Utc};
    use chrono_tz::Europe::Zurich;
    use google_calendar3::api::{Event as GcalEvent, EventDateTime};
    use slotbot_common::Booking;

    fn timed(summary: &str) -> GcalEvent {
        let start = Utc.with_ymd_and_hms(2025, 3, 10, 14, 0, 0).unwrap();
        GcalEvent {
            summary: Some(summary.to_string()),
            start: Some(EventDateTime {
                date_time: Some(start),
                ..Default::default()
            }),
            end: Some(EventDateTime {
                date_time: Some(start + Duration::hours(1)),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_title() {
        assert_eq!(
            parse_title(" Staging | Auth | OPS-1 | alice"),
            Some(("staging".to_string(), "auth".to_string()))
        );
        assert_eq!(
            parse_title("qa|search"),
            Some(("qa".to_string(), "search".to_string()))
        );
        assert_eq!(parse_title("Team lunch"), None);
    }

    #[test]
    fn test_to_domain_event() {
        let event = to_domain_event(&timed("DEMO | Web | OPS-3 | bob")).unwrap();
        assert_eq!(event.environment, "demo");
        assert_eq!(event.service, "web");
        assert_eq!(event.title, "DEMO | Web | OPS-3 | bob");
        assert_eq!(event.end - event.start, Duration::hours(1));
    }

    #[test]
    fn test_foreign_and_all_day_items_are_skipped() {
        assert!(to_domain_event(&timed("Standup")).is_none());
        assert!(to_domain_event(&GcalEvent::default()).is_none());

        let all_day = GcalEvent {
            summary: Some("qa | api".to_string()),
            start: Some(EventDateTime {
                date: NaiveDate::from_ymd_opt(2025, 3, 10),
                ..Default::default()
            }),
            end: Some(EventDateTime {
                date: NaiveDate::from_ymd_opt(2025, 3, 11),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(to_domain_event(&all_day).is_none());
    }

    #[test]
    fn test_to_calendar_event() {
        let start = Utc.with_ymd_and_hms(2025, 3, 10, 8, 15, 0).unwrap();
        let booking = Booking {
            environment: "QA".to_string(),
            service: "Payments".to_string(),
            ticket: "pay-12".to_string(),
            start,
            duration: Duration::minutes(90),
            requester: "frank".to_string(),
        };
        let item = to_calendar_event(&booking, Zurich);
        assert_eq!(item.summary.as_deref(), Some("qa | payments | PAY-12 | frank"));
        assert_eq!(item.description.as_deref(), Some("Managed by SlotBot"));
        let start_dt = item.start.unwrap();
        assert_eq!(start_dt.date_time, Some(start));
        assert_eq!(start_dt.time_zone.as_deref(), Some("Europe/Zurich"));
        assert_eq!(item.end.unwrap().date_time, Some(start + Duration::minutes(90)));

        // the stored title parses back to the same target
        let round = to_domain_event(&to_calendar_event(&booking, Zurich)).unwrap();
        assert_eq!((round.environment.as_str(), round.service.as_str()), ("qa", "payments"));
    }
}
