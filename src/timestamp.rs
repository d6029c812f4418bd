//! ISO-8601 timestamp normalization.
//!
//! Callers send due dates in whatever ISO-8601 flavor their tooling emits:
//! with a `Z` suffix, with a numeric offset, or with no offset at all. The
//! canonical internal representation is an absolute instant (`DateTime<Utc>`);
//! offset-less input is treated as already-UTC. Output always carries an
//! explicit `+00:00` offset so consumers never have to guess the timezone.

use anyhow::bail;
use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

/// Parses an ISO-8601 timestamp into a UTC instant.
///
/// Input carrying an offset is converted to UTC; offset-less input is
/// interpreted as UTC. Anything else is an error.
pub fn parse_iso8601(input: &str) -> anyhow::Result<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(input) {
        return Ok(instant.with_timezone(&Utc));
    }

    if let Ok(naive) = input.parse::<NaiveDateTime>() {
        return Ok(naive.and_utc());
    }

    bail!("malformed ISO-8601 timestamp: {:?}", input)
}

/// Renders a UTC instant as an ISO-8601 string with an explicit `+00:00`
/// offset. Fractional seconds are emitted only when nonzero.
pub fn format(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::AutoSi, false)
}
