// --- File: crates/slotbot_slack/src/commands.rs ---
//! Parsing of slash command text.
//!
//! ```text
//! /env-book <env> <service> <TICKET> [start | duration] [duration]
//! /env-next <env> <service> [duration]
//! /env-bookings [env]
//! ```

use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

pub const BOOK_USAGE: &str = "Usage: /env-book <env> <service> <jira> [start] [duration]";
pub const NEXT_USAGE: &str = "Usage: /env-next <env> <service> [duration]";

/// Jira-style ticket id, e.g. `PROJ-123`. Compiled once per process.
pub static TICKET_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]+-\d+$").expect("ticket pattern is a valid regex"));

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("{0}")]
    Usage(&'static str),
    #[error("Invalid Jira ticket format. Must be like PROJ-123")]
    InvalidTicket,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookCommand {
    pub environment: String,
    pub service: String,
    pub ticket: String,
    /// `None` means "now".
    pub start: Option<DateTime<Utc>>,
    pub duration: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextCommand {
    pub environment: String,
    pub service: String,
    pub duration: Duration,
}

pub fn default_duration() -> Duration {
    Duration::hours(1)
}

/// Parses `30m`, `1h30m`, `2h` and friends.
pub fn parse_duration(raw: &str) -> Option<Duration> {
    humantime::parse_duration(raw)
        .ok()
        .and_then(|d| Duration::from_std(d).ok())
}

fn parse_start(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

pub fn parse_book(text: &str) -> Result<BookCommand, CommandError> {
    let args: Vec<&str> = text.split_whitespace().collect();
    if args.len() < 3 {
        return Err(CommandError::Usage(BOOK_USAGE));
    }

    let ticket = args[2];
    if !TICKET_PATTERN.is_match(ticket) {
        return Err(CommandError::InvalidTicket);
    }

    let mut start = None;
    let mut duration = default_duration();

    // The fourth argument is either a start time or, when that fails, a duration.
    // Anything else is ignored and the defaults stay.
    if let Some(raw) = args.get(3) {
        if let Some(parsed) = parse_start(raw) {
            start = Some(parsed);
        } else if let Some(parsed) = parse_duration(raw) {
            duration = parsed;
        }
    }
    if let Some(parsed) = args.get(4).and_then(|raw| parse_duration(raw)) {
        duration = parsed;
    }

    Ok(BookCommand {
        environment: args[0].to_string(),
        service: args[1].to_string(),
        ticket: ticket.to_string(),
        start,
        duration,
    })
}

pub fn parse_next(text: &str) -> Result<NextCommand, CommandError> {
    let args: Vec<&str> = text.split_whitespace().collect();
    if args.len() < 2 {
        return Err(CommandError::Usage(NEXT_USAGE));
    }

    let duration = args
        .get(2)
        .and_then(|raw| parse_duration(raw))
        .unwrap_or_else(default_duration);

    Ok(NextCommand {
        environment: args[0].to_string(),
        service: args[1].to_string(),
        duration,
    })
}

/// Optional environment filter for the listing, lower-cased.
pub fn parse_list(text: &str) -> Option<String> {
    text.split_whitespace().next().map(str::to_lowercase)
}
