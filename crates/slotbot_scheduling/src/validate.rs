// --- File: crates/slotbot_scheduling/src/validate.rs ---
use chrono::Duration;
use slotbot_common::Booking;
use thiserror::Error;

/// Environments that may be reserved, lower-case.
pub const ALLOWED_ENVIRONMENTS: [&str; 3] = ["staging", "qa", "demo"];
pub const MIN_DURATION_MINUTES: i64 = 5;
pub const MAX_DURATION_MINUTES: i64 = 120;

/// Policy violations reported back to the requester verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid environment: {0}. Must be staging, qa, or demo")]
    InvalidEnvironment(String),
    #[error("maximum booking duration is 2 hours")]
    DurationTooLong,
    #[error("minimum booking duration is 5 minutes")]
    DurationTooShort,
}

/// Checks a booking against the reservation policy.
///
/// The environment is checked before the duration and only the first failure is
/// reported. Both duration bounds are inclusive.
pub fn validate(booking: &Booking) -> Result<(), ValidationError> {
    let environment = booking.environment.to_lowercase();
    if !ALLOWED_ENVIRONMENTS.contains(&environment.as_str()) {
        return Err(ValidationError::InvalidEnvironment(
            booking.environment.clone(),
        ));
    }

    if booking.duration > Duration::minutes(MAX_DURATION_MINUTES) {
        return Err(ValidationError::DurationTooLong);
    }

    if booking.duration < Duration::minutes(MIN_DURATION_MINUTES) {
        return Err(ValidationError::DurationTooShort);
    }

    Ok(())
}
