// --- File: crates/slotbot_slack/src/handlers.rs ---
use axum::{
    extract::{rejection::FormRejection, State},
    Form, Json,
};
use chrono::Utc;
use chrono_tz::Tz;
use serde::Deserialize;
use slotbot_common::SlotbotError;
use slotbot_scheduling::validate;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::commands::{parse_book, parse_list, parse_next};
use crate::logic::{self, BookOutcome, DynEventSource, LogicError};
use crate::reply::{self, SlackReply};

/// Shared state for the slash command handlers.
#[derive(Clone)]
pub struct SlackState {
    /// `None` when no calendar is configured; commands then answer with a hint
    /// instead of failing.
    pub event_source: Option<Arc<DynEventSource>>,
    /// Zone used for "today" and for rendering times.
    pub timezone: Tz,
}

impl SlackState {
    pub fn new(event_source: Option<Arc<DynEventSource>>, timezone: Tz) -> Self {
        Self {
            event_source,
            timezone,
        }
    }
}

/// The fields of a Slack slash command payload that SlotBot reads. Slack sends more;
/// the rest is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlashCommand {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub user_name: String,
}

type SlackResult = Result<Json<SlackReply>, SlotbotError>;

fn extract(
    form: Result<Form<SlashCommand>, FormRejection>,
) -> Result<SlashCommand, SlotbotError> {
    form.map(|Form(command)| command).map_err(|rejection| {
        warn!("malformed slash command body: {}", rejection);
        SlotbotError::ParseError(rejection.body_text())
    })
}

fn calendar_failure(err: LogicError) -> Json<SlackReply> {
    error!("calendar error: {}", err);
    match err {
        LogicError::CalendarUnavailable(_) => SlackReply::json(reply::CALENDAR_UNAVAILABLE),
        LogicError::CreateFailed(_) => SlackReply::json(reply::CREATE_FAILED),
    }
}

/// `POST /slack/book`
pub async fn book_handler(
    State(state): State<Arc<SlackState>>,
    form: Result<Form<SlashCommand>, FormRejection>,
) -> SlackResult {
    let command = extract(form)?;
    let parsed = match parse_book(&command.text) {
        Ok(parsed) => parsed,
        Err(err) => return Ok(SlackReply::json(reply::command_failed(&err.to_string()))),
    };

    let now = Utc::now();
    let booking = logic::booking_from_command(parsed, &command.user_name, now);
    // Policy violations are reported even when no calendar is configured.
    if let Err(err) = validate(&booking) {
        return Ok(SlackReply::json(reply::validation_failed(&err.to_string())));
    }
    let Some(source) = state.event_source.as_deref() else {
        return Ok(SlackReply::json(reply::CALENDAR_NOT_CONFIGURED));
    };

    let text = match logic::book(source, booking, now).await {
        Ok(BookOutcome::Booked { booking, link }) => {
            reply::booked(&booking, &link, state.timezone)
        }
        Ok(BookOutcome::Rejected(err)) => reply::validation_failed(&err.to_string()),
        Ok(BookOutcome::Conflict {
            existing,
            next_slot,
            ..
        }) => reply::conflict(&existing, next_slot, state.timezone),
        Err(err) => return Ok(calendar_failure(err)),
    };
    Ok(SlackReply::json(text))
}

/// `POST /slack/next`
pub async fn next_handler(
    State(state): State<Arc<SlackState>>,
    form: Result<Form<SlashCommand>, FormRejection>,
) -> SlackResult {
    let command = extract(form)?;
    let parsed = match parse_next(&command.text) {
        Ok(parsed) => parsed,
        Err(err) => return Ok(SlackReply::json(reply::command_failed(&err.to_string()))),
    };
    let Some(source) = state.event_source.as_deref() else {
        return Ok(SlackReply::json(reply::CALENDAR_NOT_CONFIGURED));
    };

    let now = Utc::now();
    let slot = logic::next_slot(
        source,
        &parsed.environment,
        &parsed.service,
        parsed.duration,
        now,
    )
    .await;
    match slot {
        Ok(slot) => {
            info!(
                "next slot for {}/{} requested by {}: {}",
                parsed.environment, parsed.service, command.user_name, slot
            );
            Ok(SlackReply::json(reply::next_slot(
                &parsed.environment,
                &parsed.service,
                parsed.duration,
                slot,
                state.timezone,
            )))
        }
        Err(err) => Ok(calendar_failure(err)),
    }
}

/// `POST /slack/bookings`
pub async fn bookings_handler(
    State(state): State<Arc<SlackState>>,
    form: Result<Form<SlashCommand>, FormRejection>,
) -> SlackResult {
    let command = extract(form)?;
    let filter = parse_list(&command.text);
    let Some(source) = state.event_source.as_deref() else {
        return Ok(SlackReply::json(reply::CALENDAR_NOT_CONFIGURED));
    };

    let listed =
        logic::todays_bookings(source, filter.as_deref(), Utc::now(), state.timezone).await;
    match listed {
        Ok(events) => Ok(SlackReply::json(reply::bookings(
            &events,
            filter.as_deref(),
            state.timezone,
        ))),
        Err(err) => Ok(calendar_failure(err)),
    }
}
