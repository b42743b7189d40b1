//! Timestamp keys for requesting radar products.
//!
//! The radar service publishes a product every 10 minutes and lags real
//! time by up to 20 minutes, so the newest product that is reliably
//! available is the 10-minute slot at or before "now minus 20 minutes".

use chrono::{Duration, Local, NaiveDateTime, Timelike};

/// How far behind the clock the newest available product is.
pub const RADAR_DELAY_MINUTES: i64 = 20;

/// Product slot length in minutes.
const SLOT_MINUTES: u32 = 10;

/// `YYYYMMDDHHmm` key of the newest product available at `now`.
pub fn radar_time_key(now: NaiveDateTime) -> String {
    let delayed = now - Duration::minutes(RADAR_DELAY_MINUTES);
    let slot_minute = delayed.minute() / SLOT_MINUTES * SLOT_MINUTES;
    format!("{}{:02}", delayed.format("%Y%m%d%H"), slot_minute)
}

/// [`radar_time_key`] for the local wall clock.
pub fn radar_time_key_now() -> String {
    radar_time_key(Local::now().naive_local())
}
