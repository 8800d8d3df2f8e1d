// --- File: crates/slotbot_scheduling/src/time.rs ---
use chrono::{DateTime, Duration, TimeZone, Timelike};

const QUARTER_MINUTES: u32 = 15;

/// Rounds an instant to the nearest quarter hour, half-up at 7.5 minutes.
///
/// `rounded = floor((minute + 7) / 15) * 15`; seconds and sub-seconds are dropped.
/// A result of 60 minutes lands on the start of the next hour. The carry into the next
/// day, month or year comes from instant arithmetic on the truncated hour, so
/// 2024-12-31 23:53 becomes 2025-01-01 00:00.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use slotbot_scheduling::round_to_quarter_hour;
///
/// let t = Utc.with_ymd_and_hms(2025, 4, 3, 9, 38, 12).unwrap();
/// assert_eq!(round_to_quarter_hour(t), Utc.with_ymd_and_hms(2025, 4, 3, 9, 45, 0).unwrap());
/// ```
pub fn round_to_quarter_hour<Tz: TimeZone>(instant: DateTime<Tz>) -> DateTime<Tz> {
    let minute = instant.minute();
    let rounded = (minute + 7) / QUARTER_MINUTES * QUARTER_MINUTES;

    let into_hour = Duration::minutes(i64::from(minute))
        + Duration::seconds(i64::from(instant.second()))
        + Duration::nanoseconds(i64::from(instant.nanosecond()));
    let hour_start = instant - into_hour;

    hour_start + Duration::minutes(i64::from(rounded))
}
