// --- File: crates/slotbot_slack/src/logic.rs ---
//! Command flows: the scheduling engine driven against an [`EventSource`].
//!
//! Nothing in here knows about HTTP or Slack payloads; handlers turn the outcomes into
//! replies.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use slotbot_common::{BoxedError, Booking, Event, EventSource};
use slotbot_scheduling::{
    find_conflict, find_next_slot_at, round_to_quarter_hour, validate, ValidationError,
};
use thiserror::Error;
use tracing::{debug, info};

use crate::commands::BookCommand;

pub type DynEventSource = dyn EventSource<Error = BoxedError>;

/// Window searched for a free slot when suggesting one.
pub const SEARCH_HORIZON_DAYS: i64 = 7;
/// Padding around a requested booking when looking for overlaps.
pub const CONFLICT_PADDING_HOURS: i64 = 24;

#[derive(Error, Debug)]
pub enum LogicError {
    #[error("failed to check calendar: {0}")]
    CalendarUnavailable(#[source] BoxedError),
    #[error("failed to create calendar event: {0}")]
    CreateFailed(#[source] BoxedError),
}

#[derive(Debug)]
pub enum BookOutcome {
    Booked {
        booking: Booking,
        link: String,
    },
    Rejected(ValidationError),
    Conflict {
        booking: Booking,
        existing: Event,
        next_slot: Option<DateTime<Utc>>,
    },
}

/// Builds the booking for a parsed `/book` command. The start defaults to `now` and is
/// snapped to the nearest quarter hour.
pub fn booking_from_command(
    command: BookCommand,
    requester: &str,
    now: DateTime<Utc>,
) -> Booking {
    Booking {
        environment: command.environment,
        service: command.service,
        ticket: command.ticket,
        start: round_to_quarter_hour(command.start.unwrap_or(now)),
        duration: command.duration,
        requester: requester.to_string(),
    }
}

async fn upcoming(
    source: &DynEventSource,
    now: DateTime<Utc>,
) -> Result<Vec<Event>, LogicError> {
    source
        .list_events(now, now + Duration::days(SEARCH_HORIZON_DAYS))
        .await
        .map_err(LogicError::CalendarUnavailable)
}

pub async fn book(
    source: &DynEventSource,
    booking: Booking,
    now: DateTime<Utc>,
) -> Result<BookOutcome, LogicError> {
    if let Err(err) = validate(&booking) {
        debug!("rejected booking {}: {}", booking.title(), err);
        return Ok(BookOutcome::Rejected(err));
    }

    let padding = Duration::hours(CONFLICT_PADDING_HOURS);
    let nearby = source
        .list_events(booking.start - padding, booking.end() + padding)
        .await
        .map_err(LogicError::CalendarUnavailable)?;

    if let Some(existing) = find_conflict(&booking, &nearby) {
        let existing = existing.clone();
        info!(
            "conflict for {}: overlaps {} ({} - {})",
            booking.title(),
            existing.title,
            existing.start,
            existing.end
        );

        // A failing lookup only costs the suggestion, the conflict is still reported.
        let next_slot = match upcoming(source, now).await {
            Ok(events) => Some(find_next_slot_at(
                now,
                &booking.environment,
                &booking.service,
                booking.duration,
                &events,
            )),
            Err(err) => {
                debug!("no slot suggestion: {}", err);
                None
            }
        };

        return Ok(BookOutcome::Conflict {
            booking,
            existing,
            next_slot,
        });
    }

    let link = source
        .create_event(&booking)
        .await
        .map_err(LogicError::CreateFailed)?;
    info!(
        "booking created: {} at {} ({})",
        booking.title(),
        booking.start,
        link
    );

    Ok(BookOutcome::Booked { booking, link })
}

pub async fn next_slot(
    source: &DynEventSource,
    environment: &str,
    service: &str,
    duration: Duration,
    now: DateTime<Utc>,
) -> Result<DateTime<Utc>, LogicError> {
    let events = upcoming(source, now).await?;
    Ok(find_next_slot_at(now, environment, service, duration, &events))
}

fn local_midnight(date: NaiveDate, tz: Tz) -> Option<DateTime<Utc>> {
    tz.from_local_datetime(&date.and_time(NaiveTime::MIN))
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

/// `[start, end)` of the calendar day containing `now` in `tz`.
pub fn day_bounds(now: DateTime<Utc>, tz: Tz) -> (DateTime<Utc>, DateTime<Utc>) {
    let today = now.with_timezone(&tz).date_naive();
    let start = local_midnight(today, tz).unwrap_or(now);
    let end = today
        .succ_opt()
        .and_then(|tomorrow| local_midnight(tomorrow, tz))
        .unwrap_or(start + Duration::days(1));
    (start, end)
}

/// Today's events, optionally only those of one environment.
pub async fn todays_bookings(
    source: &DynEventSource,
    environment: Option<&str>,
    now: DateTime<Utc>,
    tz: Tz,
) -> Result<Vec<Event>, LogicError> {
    let (start, end) = day_bounds(now, tz);
    let events = source
        .list_events(start, end)
        .await
        .map_err(LogicError::CalendarUnavailable)?;

    Ok(events
        .into_iter()
        .filter(|event| {
            environment.map_or(true, |env| event.environment.eq_ignore_ascii_case(env))
        })
        .collect())
}
