// --- File: crates/slotbot_gcal/src/lib.rs ---
pub mod auth;
pub mod service;
#[cfg(test)]
mod service_test;

pub use auth::{create_calendar_hub, GcalAuthError, HubType};
pub use service::{GcalServiceError, GoogleCalendarEventSource};
