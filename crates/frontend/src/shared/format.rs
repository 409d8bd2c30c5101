//! Money formatting for tables and exports.

/// Two decimals with thousands separators: 81234.5 -> "81,234.50".
pub fn format_amount(value: f64) -> String {
    let negative = value < 0.0;
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::new();
    let digits: Vec<char> = int_part.chars().collect();
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

/// Rupee display used across the dashboard.
pub fn format_money(value: f64) -> String {
    format!("Rs. {}", format_amount(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_and_rounds() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(80.0), "80.00");
        assert_eq!(format_amount(1234.5), "1,234.50");
        assert_eq!(format_amount(1234567.891), "1,234,567.89");
        assert_eq!(format_amount(-1000.0), "-1,000.00");
    }

    #[test]
    fn money_prefix() {
        assert_eq!(format_money(80.0), "Rs. 80.00");
    }
}
