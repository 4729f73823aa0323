//! Display formatting for table cells: Indonesian Rupiah and local dates.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};

/// Format an amount as Indonesian Rupiah: `.` thousands separator, no
/// fraction digits. `150000.0` → `"Rp150.000"`.
pub fn rupiah(amount: f64) -> String {
    if !amount.is_finite() {
        return "Rp-".to_string();
    }
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let grouped = group_thousands(&digits);
    if rounded < 0.0 {
        format!("-Rp{grouped}")
    } else {
        format!("Rp{grouped}")
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Render a backend date as `d/m/yyyy`.
///
/// Accepts ISO dates, ISO date-times (with or without offset) and the
/// RFC 2822 form Flask's `jsonify` emits. Timestamps carrying an offset are
/// shifted to the viewer's timezone first. Anything else is returned as-is.
pub fn local_date(raw: &str) -> String {
    match parse_date(raw.trim()) {
        Some(date) => format!("{}/{}/{}", date.day(), date.month(), date.year()),
        None => raw.to_string(),
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Local).date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.date())
}
