//! Presentation helpers
//!
//! Converts tracker values (meters, seconds) into short display strings.
//! The tracker never calls these; they are applied where state is shown.

use core::fmt::Write;

use heapless::String;
use libm::{floor, round};

use crate::coordinate::PLACEHOLDER;

/// Capacity of a formatted distance or duration
pub const DISPLAY_STR_LEN: usize = 32;

const METERS_PER_KM: f64 = 1000.0;
const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Format a distance: `850 m` below one kilometer, `1.2 km` above
pub fn format_distance(meters: f64) -> String<DISPLAY_STR_LEN> {
    let mut out = String::new();
    if !meters.is_finite() || meters < 0.0 {
        let _ = out.push_str(PLACEHOLDER);
        return out;
    }
    let _ = if round(meters) < METERS_PER_KM {
        write!(out, "{:.0} m", meters)
    } else {
        write!(out, "{:.1} km", meters / METERS_PER_KM)
    };
    out
}

/// Format a duration: `45 s`, `12 min` or `2 h 5 min`
pub fn format_duration(seconds: f64) -> String<DISPLAY_STR_LEN> {
    let mut out = String::new();
    if !seconds.is_finite() || seconds < 0.0 {
        let _ = out.push_str(PLACEHOLDER);
        return out;
    }
    let _ = if seconds < SECONDS_PER_MINUTE {
        write!(out, "{} s", floor(seconds) as u64)
    } else if seconds < SECONDS_PER_HOUR {
        write!(out, "{} min", floor(seconds / SECONDS_PER_MINUTE) as u64)
    } else {
        let hours = floor(seconds / SECONDS_PER_HOUR);
        let minutes = floor((seconds - hours * SECONDS_PER_HOUR) / SECONDS_PER_MINUTE);
        write!(out, "{} h {} min", hours as u64, minutes as u64)
    };
    out
}
