// crates/lumen-core/src/time.rs
//
// Duration parsing/formatting for genesis JSON, plus the seconds-per-year
// constant the release formula prorates against.
//
// Durations are persisted as compact suffix strings ("86400s", "24h", "7d")
// so a genesis file stays human-editable. Parsing accepts a single integer
// with one of the suffixes s/m/h/d; formatting picks the largest suffix
// that divides evenly.

use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::LumenError;

/// Seconds in a (non-leap) year: 365 * 24 * 3600. The annualized release
/// rate is prorated against this.
pub const SECONDS_PER_YEAR: u64 = 31_536_000;

/// Parse a compact duration string like `86400s`, `90m`, `24h`, or `365d`.
pub fn parse_duration(s: &str) -> Result<Duration, LumenError> {
    let s = s.trim();
    let (digits, unit) = match s.char_indices().last() {
        Some((i, c)) if c.is_ascii_alphabetic() => (&s[..i], &s[i..]),
        _ => {
            return Err(LumenError::Validation(format!(
                "duration '{}' is missing a unit suffix (s/m/h/d)",
                s
            )))
        }
    };

    let value: u64 = digits.parse().map_err(|_| {
        LumenError::Validation(format!("duration '{}' has a non-integer value", s))
    })?;

    let seconds = match unit {
        "s" => value,
        "m" => value * 60,
        "h" => value * 3_600,
        "d" => value * 86_400,
        other => {
            return Err(LumenError::Validation(format!(
                "unknown duration unit '{}' (expected s/m/h/d)",
                other
            )))
        }
    };

    Ok(Duration::from_secs(seconds))
}

/// Format a duration with the largest unit that divides it evenly.
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    if secs > 0 && secs % 86_400 == 0 {
        format!("{}d", secs / 86_400)
    } else if secs > 0 && secs % 3_600 == 0 {
        format!("{}h", secs / 3_600)
    } else if secs > 0 && secs % 60 == 0 {
        format!("{}m", secs / 60)
    } else {
        format!("{}s", secs)
    }
}

/// Serde adapter for `Duration` fields persisted as duration strings.
/// Usage: `#[serde(with = "lumen_core::time::duration_string")]`.
pub mod duration_string {
    use super::*;

    pub fn serialize<S: Serializer>(d: &Duration, ser: S) -> Result<S::Ok, S::Error> {
        format_duration(*d).serialize(ser)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Duration, D::Error> {
        let s = String::deserialize(de)?;
        parse_duration(&s).map_err(serde::de::Error::custom)
    }
}
