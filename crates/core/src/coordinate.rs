//! Coordinate formatting
//!
//! Converts decimal degrees into sexagesimal display strings such as
//! `40° 42' 46" N`. Each unit is truncated with `floor`; seconds never
//! round up into minutes and minutes never round up into degrees.
//!
//! Input is not range-checked: out-of-range values are formatted the same
//! way as valid ones. Non-finite values render as [`PLACEHOLDER`].

use core::fmt::{self, Write};

use heapless::String;
use libm::{fabs, floor};

/// Capacity of a single formatted coordinate
pub const COORDINATE_STR_LEN: usize = 40;

/// Capacity of a formatted `lat, lng` pair
pub const LOCATION_STR_LEN: usize = 2 * COORDINATE_STR_LEN + 2;

/// Text rendered for NaN or infinite input
pub const PLACEHOLDER: &str = "--";

/// Hemisphere suffix for a coordinate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    /// Pick the hemisphere for a value. Zero counts as non-negative (N/E).
    pub fn of(value: f64, is_latitude: bool) -> Self {
        let negative = value < 0.0;
        match (is_latitude, negative) {
            (true, false) => Hemisphere::North,
            (true, true) => Hemisphere::South,
            (false, false) => Hemisphere::East,
            (false, true) => Hemisphere::West,
        }
    }

    /// Single-letter suffix
    pub fn suffix(self) -> char {
        match self {
            Hemisphere::North => 'N',
            Hemisphere::South => 'S',
            Hemisphere::East => 'E',
            Hemisphere::West => 'W',
        }
    }
}

/// Degrees/minutes/seconds decomposition of a decimal angle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sexagesimal {
    /// Whole degrees of the absolute value
    pub degrees: u64,
    /// Whole minutes (0-59)
    pub minutes: u8,
    /// Whole seconds (0-59)
    pub seconds: u8,
    /// Direction suffix
    pub hemisphere: Hemisphere,
}

impl Sexagesimal {
    /// Decompose a decimal value
    ///
    /// Returns `None` for NaN or infinite input.
    pub fn from_decimal(value: f64, is_latitude: bool) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }

        let absolute = fabs(value);
        let degrees = floor(absolute);
        let minutes_total = (absolute - degrees) * 60.0;
        let minutes = floor(minutes_total);
        let seconds = floor((minutes_total - minutes) * 60.0);

        Some(Self {
            // Float-to-int casts saturate for huge values
            degrees: degrees as u64,
            minutes: (minutes as u8).min(59),
            seconds: (seconds as u8).min(59),
            hemisphere: Hemisphere::of(value, is_latitude),
        })
    }
}

impl fmt::Display for Sexagesimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}° {}' {}\" {}",
            self.degrees,
            self.minutes,
            self.seconds,
            self.hemisphere.suffix()
        )
    }
}

/// Format a decimal latitude or longitude as `D° M' S" H`
pub fn format_coordinate(value: f64, is_latitude: bool) -> String<COORDINATE_STR_LEN> {
    let mut out = String::new();
    write_coordinate(&mut out, value, is_latitude);
    out
}

/// Format a latitude/longitude pair as `lat, lng`
pub fn format_location(lat: f64, lng: f64) -> String<LOCATION_STR_LEN> {
    let mut out = String::new();
    write_coordinate(&mut out, lat, true);
    let _ = out.push_str(", ");
    write_coordinate(&mut out, lng, false);
    out
}

fn write_coordinate<W: Write>(out: &mut W, value: f64, is_latitude: bool) {
    // Buffer capacity covers the longest possible rendering
    let _ = match Sexagesimal::from_decimal(value, is_latitude) {
        Some(dms) => write!(out, "{}", dms),
        None => out.write_str(PLACEHOLDER),
    };
}
