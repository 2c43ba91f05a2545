//! Display formatting for backend ISO 8601 timestamps.
//!
//! The backend sends local date-times such as `2024-03-01T10:20:30.123`.
//! Anything that does not look like that is shown unchanged.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

/// `YYYY-MM-DD` part of a timestamp.
pub fn format_date(iso: &str) -> String {
    match iso.split_once('T') {
        Some((date, _)) if looks_like_date(date) => date.to_owned(),
        _ => iso.to_owned(),
    }
}

/// `YYYY-MM-DD HH:MM` form of a timestamp.
pub fn format_date_time(iso: &str) -> String {
    let Some((date, time)) = iso.split_once('T') else {
        return format_date(iso);
    };
    match time.get(..5) {
        Some(hh_mm) if looks_like_date(date) => format!("{date} {hh_mm}"),
        _ => iso.to_owned(),
    }
}

fn looks_like_date(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit())
}
