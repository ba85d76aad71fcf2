//! Display Formatting
//!
//! Shared text helpers: backend timestamp parsing, relative "time ago"
//! stamps, and the `--` placeholder policy for missing values.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Parse a backend timestamp.
///
/// Accepts RFC 3339 as well as the bare ISO-8601 form the backend emits
/// (`2026-05-01T12:30:00`, no offset), which is taken as UTC. A space
/// separator is tolerated for older database rows.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}

/// Human "how long ago" text: seconds under a minute, then minutes, hours,
/// days. A timestamp from the future displays as `0s ago`.
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds().max(0);

    if seconds < 60 {
        format!("{seconds}s ago")
    } else if seconds < 3_600 {
        format!("{}m ago", seconds / 60)
    } else if seconds < 86_400 {
        format!("{}h ago", seconds / 3_600)
    } else {
        format!("{}d ago", seconds / 86_400)
    }
}

/// [`time_ago`] for a raw backend timestamp; `--` when absent or unparseable.
pub fn time_ago_label(raw: Option<&str>, now: DateTime<Utc>) -> String {
    raw.and_then(parse_timestamp)
        .map(|then| time_ago(then, now))
        .unwrap_or_else(|| "--".to_string())
}

/// One-decimal display for an optional value, `--` when missing.
pub fn fmt_opt(value: Option<f64>) -> String {
    value
        .map(|v| format!("{v:.1}"))
        .unwrap_or_else(|| "--".to_string())
}

/// Thousands-grouped count, `--` when missing.
pub fn fmt_count(value: Option<u64>) -> String {
    match value {
        Some(v) => group_thousands(v),
        None => "--".to_string(),
    }
}

fn group_thousands(v: u64) -> String {
    let digits = v.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_parses_rfc3339_and_bare_iso() {
        let rfc = parse_timestamp("2026-05-01T12:30:00Z").unwrap();
        let bare = parse_timestamp("2026-05-01T12:30:00").unwrap();
        let spaced = parse_timestamp("2026-05-01 12:30:00.250").unwrap();

        assert_eq!(rfc, bare);
        assert_eq!(spaced.timestamp_subsec_millis(), 250);
        assert!(parse_timestamp("yesterday-ish").is_none());
    }

    #[test]
    fn test_time_ago_tiers() {
        let now = at(1_000_000);
        assert_eq!(time_ago(at(1_000_000 - 45), now), "45s ago");
        assert_eq!(time_ago(at(1_000_000 - 300), now), "5m ago");
        assert_eq!(time_ago(at(1_000_000 - 7_200), now), "2h ago");
        assert_eq!(time_ago(at(1_000_000 - 200_000), now), "2d ago");
    }

    #[test]
    fn test_future_timestamps_clamp_to_zero() {
        let now = at(1_000_000);
        assert_eq!(time_ago(at(1_000_100), now), "0s ago");
    }

    #[test]
    fn test_missing_timestamp_shows_placeholder() {
        let now = at(1_000_000);
        assert_eq!(time_ago_label(None, now), "--");
        assert_eq!(time_ago_label(Some("garbage"), now), "--");
    }

    #[test]
    fn test_optional_values_show_one_decimal_or_placeholder() {
        assert_eq!(fmt_opt(Some(42.25)), "42.2");
        assert_eq!(fmt_opt(None), "--");
    }

    #[test]
    fn test_counts_are_thousands_grouped() {
        assert_eq!(fmt_count(Some(999)), "999");
        assert_eq!(fmt_count(Some(1_000)), "1,000");
        assert_eq!(fmt_count(Some(1_234_567)), "1,234,567");
        assert_eq!(fmt_count(None), "--");
    }
}
