// --- File: crates/slotbot_slack/src/reply.rs ---
//! Slack response bodies.
//!
//! Slack renders `text` of an ephemeral JSON response to the invoking user only.

use axum::Json;
use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use slotbot_common::{Booking, Event};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlackReply {
    pub response_type: &'static str,
    pub text: String,
}

impl SlackReply {
    pub fn ephemeral(text: impl Into<String>) -> Self {
        Self {
            response_type: "ephemeral",
            text: text.into(),
        }
    }

    pub fn json(text: impl Into<String>) -> Json<Self> {
        Json(Self::ephemeral(text))
    }
}

pub const CALENDAR_NOT_CONFIGURED: &str =
    "❌ Calendar not configured. Please set up Google Calendar credentials.";
pub const CALENDAR_UNAVAILABLE: &str = "❌ Failed to check calendar";
pub const CREATE_FAILED: &str = "❌ Failed to create calendar event";

fn clock(instant: DateTime<Utc>, tz: Tz) -> String {
    instant.with_timezone(&tz).format("%H:%M").to_string()
}

fn human_duration(duration: Duration) -> String {
    let hours = duration.num_hours();
    let minutes = duration.num_minutes() % 60;
    match (hours, minutes) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h{m}m"),
    }
}

pub fn validation_failed(message: &str) -> String {
    format!("❌ Validation error: {message}")
}

pub fn command_failed(message: &str) -> String {
    format!("❌ {message}")
}

pub fn booked(booking: &Booking, link: &str, tz: Tz) -> String {
    format!(
        "✅ Booked {} / {}\n{} - {}\nLink: {}",
        booking.environment,
        booking.service,
        clock(booking.start, tz),
        clock(booking.end(), tz),
        link
    )
}

pub fn conflict(existing: &Event, suggestion: Option<DateTime<Utc>>, tz: Tz) -> String {
    let mut text = format!(
        "❌ Conflict detected!\n{} | {} already booked\n{} - {}\n{}",
        existing.environment,
        existing.service,
        clock(existing.start, tz),
        clock(existing.end, tz),
        existing.title
    );
    if let Some(slot) = suggestion {
        text.push_str(&format!(
            "\n👉 Next free slot: {}",
            slot.with_timezone(&tz).format("%a, %d %b %H:%M")
        ));
    }
    text
}

pub fn next_slot(
    environment: &str,
    service: &str,
    duration: Duration,
    slot: DateTime<Utc>,
    tz: Tz,
) -> String {
    format!(
        "🔍 Next available slot for {} / {} ({}):\n👉 {}",
        environment,
        service,
        human_duration(duration),
        slot.with_timezone(&tz).format("%a, %d %b %H:%M")
    )
}

pub fn bookings(events: &[Event], filter: Option<&str>, tz: Tz) -> String {
    if events.is_empty() {
        return match filter {
            Some(env) => format!("📅 No bookings for {env} today"),
            None => "📅 No bookings for today".to_string(),
        };
    }

    let mut text = format!("📅 Bookings for today ({}):\n\n", events.len());
    for event in events {
        text.push_str(&format!("• {} | {}\n", event.environment, event.service));
        text.push_str(&format!(
            "  {} - {}\n",
            clock(event.start, tz),
            clock(event.end, tz)
        ));
        text.push_str(&format!("  {}\n\n", event.title));
    }
    text
}
