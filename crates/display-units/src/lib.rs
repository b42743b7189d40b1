//! Display formatting for dashboard measurements.
//!
//! Pure helpers that turn raw numbers (seconds, meters, square meters,
//! clock readings) into the short labels shown next to map tools and radar
//! layers.

pub mod elapsed;
pub mod measure;
pub mod time_key;

pub use elapsed::{format_elapsed, ElapsedTime};
pub use measure::{
    format_area, format_circle, format_km_or_m, format_length, format_measured_length, AreaUnit,
    CircleMeasurement, LengthUnit, Measurement,
};
pub use time_key::{radar_time_key, radar_time_key_now, RADAR_DELAY_MINUTES};
