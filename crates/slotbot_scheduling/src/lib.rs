// --- File: crates/slotbot_scheduling/src/lib.rs ---
//! The booking scheduling engine.
//!
//! Every function here is pure: data in, data out, no shared state. They are safe to
//! call from any number of concurrent requests.

pub mod conflict;
pub mod slots;
#[cfg(test)]
mod slots_proptest;
#[cfg(test)]
mod slots_test;
pub mod time;
pub mod validate;
#[cfg(test)]
mod validate_test;

pub use conflict::find_conflict;
pub use slots::{find_next_slot, find_next_slot_at};
pub use time::round_to_quarter_hour;
pub use validate::{
    validate, ValidationError, ALLOWED_ENVIRONMENTS, MAX_DURATION_MINUTES, MIN_DURATION_MINUTES,
};
