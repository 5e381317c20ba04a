//! Human readable formatting of server statistics

use std::time::Duration;

const UNITS: [(u64, &str); 5] = [
    (1 << 50, "P"),
    (1 << 40, "T"),
    (1 << 30, "G"),
    (1 << 20, "M"),
    (1 << 10, "K"),
];

/// Formats a count with a binary unit suffix, e.g. `1536` as `1.50K`.
///
/// Values under ten units keep two decimals, under a hundred one, and none
/// above that. Values below 1024 are printed as is.
pub fn format_number(n: u64) -> String {
    for (unit, suffix) in UNITS {
        if n >= unit {
            let value = n as f64 / unit as f64;
            let scaled = if n < 10 * unit {
                format!("{:.2}", value)
            } else if n < 100 * unit {
                format!("{:.1}", value)
            } else {
                format!("{:.0}", value)
            };
            return format!("{}{}", scaled, suffix);
        }
    }
    n.to_string()
}

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const WEEK: u64 = 7 * DAY;
const YEAR: u64 = 365 * DAY;

/// Formats an uptime in the largest unit it exceeds, e.g. `3 days`.
pub fn format_uptime(uptime: Duration) -> String {
    let secs = uptime.as_secs();
    let (count, unit) = if secs > YEAR {
        (secs / YEAR, "year")
    } else if secs > WEEK {
        (secs / WEEK, "week")
    } else if secs > DAY {
        (secs / DAY, "day")
    } else if secs > HOUR {
        (secs / HOUR, "hour")
    } else if secs > MINUTE {
        (secs / MINUTE, "minute")
    } else {
        (secs, "second")
    };
    let plural = if count > 1 { "s" } else { "" };
    format!("{} {}{}", count, unit, plural)
}
