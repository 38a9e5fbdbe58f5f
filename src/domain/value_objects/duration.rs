//! Wall-clock exam duration and its canonical text format.
//!
//! Durations travel in JSON payloads as `"HH:MM:SS"` strings: minutes and
//! seconds are exactly two digits in `[0, 59]`, the hour field is two digits
//! or as many as the magnitude requires. The serde implementations on
//! [`ExamDuration`] are the codec registration: only duration-typed fields
//! route through this format.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::DurationFormatError;

/// Regular expression for the canonical duration format
/// One or more hour digits, then two-digit minutes and seconds in [0, 59]
static DURATION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+):([0-5]\d):([0-5]\d)$").unwrap()
});

/// Non-negative wall-clock span with second resolution
///
/// Stored as a total second count; the textual form carries no day
/// component and no fractional seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExamDuration {
    secs: u64,
}

impl ExamDuration {
    /// The zero-length span, `"00:00:00"` on the wire
    pub const ZERO: Self = Self { secs: 0 };

    /// Build from an hours/minutes/seconds triple
    ///
    /// Saturates at the maximum representable span.
    pub fn new(hours: u64, minutes: u64, seconds: u64) -> Self {
        let secs = hours
            .saturating_mul(3600)
            .saturating_add(minutes.saturating_mul(60))
            .saturating_add(seconds);
        Self { secs }
    }

    /// Build from a total second count
    pub fn from_secs(secs: u64) -> Self {
        Self { secs }
    }

    /// Whole hours in the span
    pub fn hours(&self) -> u64 {
        self.secs / 3600
    }

    /// Minute component, in `[0, 59]`
    pub fn minutes(&self) -> u64 {
        self.secs % 3600 / 60
    }

    /// Second component, in `[0, 59]`
    pub fn seconds(&self) -> u64 {
        self.secs % 60
    }

    /// Total length of the span in seconds
    pub fn total_seconds(&self) -> u64 {
        self.secs
    }

    pub fn is_zero(&self) -> bool {
        self.secs == 0
    }
}

impl FromStr for ExamDuration {
    type Err = DurationFormatError;

    /// Parse the canonical `H+:MM:SS` form
    ///
    /// Anything else (wrong separator count, non-numeric characters,
    /// out-of-range or single-digit minute/second fields) is rejected;
    /// partially valid input is never accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = DURATION_REGEX
            .captures(s)
            .ok_or_else(|| DurationFormatError::new(s))?;

        let hours: u64 = caps[1].parse().map_err(|_| DurationFormatError::new(s))?;
        let minutes: u64 = caps[2].parse().map_err(|_| DurationFormatError::new(s))?;
        let seconds: u64 = caps[3].parse().map_err(|_| DurationFormatError::new(s))?;

        hours
            .checked_mul(3600)
            .and_then(|h| h.checked_add(minutes * 60 + seconds))
            .map(Self::from_secs)
            .ok_or_else(|| DurationFormatError::new(s))
    }
}

impl fmt::Display for ExamDuration {
    /// Render the canonical form: minutes and seconds zero-padded to two
    /// digits, the hour field growing past two digits as needed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours(),
            self.minutes(),
            self.seconds()
        )
    }
}

impl Serialize for ExamDuration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ExamDuration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DurationVisitor;

        impl Visitor<'_> for DurationVisitor {
            type Value = ExamDuration;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a duration string in HH:MM:SS format")
            }

            fn visit_str<E>(self, value: &str) -> Result<ExamDuration, E>
            where
                E: de::Error,
            {
                value.parse().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(DurationVisitor)
    }
}
