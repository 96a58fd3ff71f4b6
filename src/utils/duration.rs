//! Duration utilities: parsing duration expressions ("30m", "2h30m",
//! "1.5h") and formatting them back to compact text ("1h30m0s").

use chrono::Duration;
use regex::Regex;

/// Parse a duration expression: optional sign followed by one or more
/// `<decimal><unit>` terms, units `h`, `m`, `s`, `ms`. Returns None when
/// the grammar rejects the text (including bare numbers with no unit).
pub fn parse_duration(s: &str) -> Option<Duration> {
    let shape = Regex::new(r"^[+-]?(\d+(\.\d+)?(ms|h|m|s))+$").unwrap();
    if !shape.is_match(s) {
        return None;
    }

    let negative = s.starts_with('-');

    let term = Regex::new(r"(\d+(?:\.\d+)?)(ms|h|m|s)").unwrap();
    let mut total_ms: f64 = 0.0;
    for cap in term.captures_iter(s) {
        let magnitude: f64 = cap[1].parse().ok()?;
        let unit_ms = match &cap[2] {
            "h" => 3_600_000.0,
            "m" => 60_000.0,
            "s" => 1_000.0,
            "ms" => 1.0,
            _ => return None,
        };
        total_ms += magnitude * unit_ms;
    }

    if negative {
        total_ms = -total_ms;
    }

    Duration::try_milliseconds(total_ms.trunc() as i64)
}

/// Whole minutes of a duration, truncated toward zero.
pub fn duration2whole_minutes(d: Duration) -> i64 {
    d.num_minutes()
}

/// Compact rendering of a whole-second duration: "1h30m0s", "30m0s",
/// "45s", "0s". Lower units are always printed once a higher unit is.
pub fn duration2compact(d: Duration) -> String {
    let total = d.num_seconds();
    let sign = if total < 0 { "-" } else { "" };
    let t = total.abs();

    let hours = t / 3600;
    let minutes = (t % 3600) / 60;
    let seconds = t % 60;

    if hours > 0 {
        format!("{}{}h{}m{}s", sign, hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}{}m{}s", sign, minutes, seconds)
    } else {
        format!("{}{}s", sign, seconds)
    }
}

/// Compact rendering of a minute total, e.g. 90 → "1h30m0s".
pub fn mins2compact(mins: i64) -> String {
    duration2compact(Duration::minutes(mins))
}
