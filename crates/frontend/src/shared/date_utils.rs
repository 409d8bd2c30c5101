//! Date/time display formatting.

/// Format an ISO datetime string as DD/MM/YYYY HH:MM.
/// Example: "2025-09-15T14:02:26.123Z" -> "15/09/2025 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        if let Some((year, rest)) = date_part.split_once('-') {
            if let Some((month, day)) = rest.split_once('-') {
                let hhmm: String = time_part.chars().take(5).collect();
                return format!("{}/{}/{} {}", day, month, year, hhmm);
            }
        }
    }
    datetime_str.to_string()
}

/// Format an ISO date or datetime string as DD/MM/YYYY.
/// Example: "2025-09-15" or "2025-09-15T14:02:26Z" -> "15/09/2025"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Display form with a placeholder for missing values.
pub fn format_date_or(date_str: &str, placeholder: &str) -> String {
    if date_str.is_empty() {
        placeholder.to_string()
    } else {
        format_date(date_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2025-09-15T14:02:26.123Z"),
            "15/09/2025 14:02"
        );
        assert_eq!(format_datetime("2025-12-31T23:59:59Z"), "31/12/2025 23:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-09-15"), "15/09/2025");
        assert_eq!(format_date("2025-09-15T14:02:26.123Z"), "15/09/2025");
    }

    #[test]
    fn test_invalid_input_passes_through() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_date_or("", "-"), "-");
    }
}
