// --- File: crates/slotbot_common/src/models.rs ---

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A reservation request parsed from a chat command.
///
/// Lives for one request only; once accepted the event source turns it into an
/// [`Event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    /// Target environment, compared case-insensitively.
    pub environment: String,
    /// Service within the environment, compared case-insensitively.
    pub service: String,
    /// Ticket reference such as `PROJ-123`.
    pub ticket: String,
    pub start: DateTime<Utc>,
    pub duration: Duration,
    /// Chat user that asked for the booking.
    pub requester: String,
}

impl Booking {
    /// End of the half-open interval `[start, start + duration)`.
    pub fn end(&self) -> DateTime<Utc> {
        self.start + self.duration
    }

    /// Calendar title: `env | service | TICKET | requester`.
    pub fn title(&self) -> String {
        format!(
            "{} | {} | {} | {}",
            self.environment.to_lowercase(),
            self.service.to_lowercase(),
            self.ticket.to_uppercase(),
            self.requester
        )
    }

    /// True when `environment`/`service` name the same target, ignoring case.
    pub fn targets(&self, environment: &str, service: &str) -> bool {
        same_target(&self.environment, &self.service, environment, service)
    }
}

/// An existing reservation as reported by the event source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub environment: String,
    pub service: String,
}

impl Event {
    pub fn targets(&self, environment: &str, service: &str) -> bool {
        same_target(&self.environment, &self.service, environment, service)
    }
}

fn same_target(env_a: &str, svc_a: &str, env_b: &str, svc_b: &str) -> bool {
    env_a.to_lowercase() == env_b.to_lowercase() && svc_a.to_lowercase() == svc_b.to_lowercase()
}
