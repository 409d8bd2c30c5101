use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// Generic `{ message }` body returned by the platform API, both for
/// success acknowledgements and for non-2xx error responses.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: String,
}

/// Extract the calendar day from a backend timestamp.
///
/// The API emits RFC 3339 timestamps ("2025-09-01T00:00:00Z") but older
/// records carry bare dates ("2025-09-01"); both are accepted.
pub fn parse_day(value: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    let date_part = value.split('T').next().unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_day_accepts_rfc3339_and_bare_dates() {
        assert_eq!(
            parse_day("2025-09-01T00:00:00Z"),
            NaiveDate::from_ymd_opt(2025, 9, 1)
        );
        assert_eq!(
            parse_day("2025-08-31T23:59:59Z"),
            NaiveDate::from_ymd_opt(2025, 8, 31)
        );
        assert_eq!(parse_day("2025-09-15"), NaiveDate::from_ymd_opt(2025, 9, 15));
        assert_eq!(parse_day("not a date"), None);
    }
}
