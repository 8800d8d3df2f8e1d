// --- File: crates/slotbot_gcal/src/service.rs ---
//! Google Calendar implementation of [`EventSource`].
//!
//! Reservations are plain calendar events whose title encodes the target:
//! `env | service | TICKET | requester`.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use google_calendar3::api::{Event as GcalEvent, EventDateTime};
use slotbot_common::services::BoxFuture;
use slotbot_common::{Booking, Event, EventSource};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

use crate::auth::HubType;

const EVENT_DESCRIPTION: &str = "Managed by SlotBot";

/// Errors that can occur when interacting with Google Calendar.
#[derive(Error, Debug)]
pub enum GcalServiceError {
    #[error("Google API Error: {0}")]
    ApiError(#[from] google_calendar3::Error),
    #[error("Created event has no link")]
    MissingEventLink,
}

/// Event source backed by one Google calendar.
pub struct GoogleCalendarEventSource {
    calendar_hub: Arc<HubType>,
    calendar_id: String,
    timezone: Tz,
}

impl GoogleCalendarEventSource {
    pub fn new(calendar_hub: Arc<HubType>, calendar_id: impl Into<String>, timezone: Tz) -> Self {
        Self {
            calendar_hub,
            calendar_id: calendar_id.into(),
            timezone,
        }
    }
}

impl EventSource for GoogleCalendarEventSource {
    type Error = GcalServiceError;

    /// Lists single (expanded) events between `start` and `end`, ordered by start time.
    /// Events whose title does not carry at least `env | service` are skipped.
    fn list_events(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> BoxFuture<'_, Vec<Event>, Self::Error> {
        let calendar_hub = self.calendar_hub.clone();
        let calendar_id = self.calendar_id.clone();

        Box::pin(async move {
            let (_response, events_list) = calendar_hub
                .events()
                .list(&calendar_id)
                .time_min(start)
                .time_max(end)
                .show_deleted(false)
                .single_events(true)
                .order_by("startTime")
                .doit()
                .await?;

            let items = events_list.items.unwrap_or_default();
            let total = items.len();
            let events: Vec<Event> = items.iter().filter_map(to_domain_event).collect();
            debug!(
                "listed {} reservations ({} calendar items) in {}",
                events.len(),
                total,
                calendar_id
            );
            Ok(events)
        })
    }

    fn create_event(&self, booking: &Booking) -> BoxFuture<'_, String, Self::Error> {
        let calendar_hub = self.calendar_hub.clone();
        let calendar_id = self.calendar_id.clone();
        let new_event = to_calendar_event(booking, self.timezone);

        Box::pin(async move {
            let (_response, created_event) = calendar_hub
                .events()
                .insert(new_event, &calendar_id)
                .doit()
                .await?;

            info!("created calendar event {:?}", created_event.id);
            created_event
                .html_link
                .ok_or(GcalServiceError::MissingEventLink)
        })
    }
}

/// Splits `env | service | ...` into lower-cased, trimmed environment and service.
pub fn parse_title(summary: &str) -> Option<(String, String)> {
    let mut parts = summary.split('|');
    let environment = parts.next()?.trim().to_lowercase();
    let service = parts.next()?.trim().to_lowercase();
    Some((environment, service))
}

/// Converts a calendar item into a reservation; `None` for foreign or all-day items.
pub fn to_domain_event(item: &GcalEvent) -> Option<Event> {
    let title = item.summary.as_deref()?;
    let Some((environment, service)) = parse_title(title) else {
        debug!("skipping calendar item with foreign title: {title}");
        return None;
    };

    let start = item.start.as_ref().and_then(|s| s.date_time);
    let end = item.end.as_ref().and_then(|e| e.date_time);
    let (Some(start), Some(end)) = (start, end) else {
        debug!("skipping calendar item without start/end time: {title}");
        return None;
    };

    Some(Event {
        title: title.to_string(),
        start,
        end,
        environment,
        service,
    })
}

/// Builds the calendar item stored for an accepted booking.
pub fn to_calendar_event(booking: &Booking, timezone: Tz) -> GcalEvent {
    GcalEvent {
        summary: Some(booking.title()),
        description: Some(EVENT_DESCRIPTION.to_string()),
        start: Some(EventDateTime {
            date_time: Some(booking.start),
            time_zone: Some(timezone.name().to_string()),
            ..Default::default()
        }),
        end: Some(EventDateTime {
            date_time: Some(booking.end()),
            time_zone: Some(timezone.name().to_string()),
            ..Default::default()
        }),
        ..Default::default()
    }
}
