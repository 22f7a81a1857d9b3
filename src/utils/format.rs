//! Display formatting for currency amounts and dates.
//!
//! Pure helpers used by the top-N table and text summaries.

use chrono::NaiveDate;

/// Format an amount as whole dollars with thousands separators
///
/// **Public** - used by the aggregator and text output
///
/// # Example
/// ```
/// use event_lens::utils::format::format_currency;
/// assert_eq!(format_currency(1234567.6), "$1,234,568");
/// ```
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "$0".to_string();
    }

    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    format!("{}${}", sign, group_thousands(&digits))
}

/// Format a date as a short month/day/year string, e.g. "Jan 05, 2024"
///
/// **Public** - used by the aggregator and text output
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

/// Insert a comma every three digits from the right
///
/// **Private** - internal utility
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_grouping() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(999.0), "$999");
        assert_eq!(format_currency(1000.0), "$1,000");
        assert_eq!(format_currency(1234567.0), "$1,234,567");
    }

    #[test]
    fn test_format_currency_rounds_to_whole_units() {
        assert_eq!(format_currency(1499.49), "$1,499");
        assert_eq!(format_currency(1499.5), "$1,500");
        assert_eq!(format_currency(0.4), "$0");
    }

    #[test]
    fn test_format_currency_negative_and_non_finite() {
        assert_eq!(format_currency(-2500.0), "-$2,500");
        assert_eq!(format_currency(f64::NAN), "$0");
        assert_eq!(format_currency(f64::INFINITY), "$0");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date(date), "Jan 05, 2024");

        let date = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap();
        assert_eq!(format_date(date), "Dec 25, 2023");
    }
}
