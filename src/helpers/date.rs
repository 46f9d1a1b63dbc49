//! Date helper functions

use chrono::{DateTime, Datelike, FixedOffset, TimeZone};

use crate::i18n::Locale;

/// Parse a publication timestamp as the content service emits it
///
/// Accepts ISO 8601 with compact offsets (`2021-03-25T19:25:30+0000`) as
/// well as RFC 3339 (`2021-03-25T19:25:30+00:00`, trailing `Z`).
pub fn parse_publication_date(value: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%z")
        .or_else(|_| DateTime::parse_from_rfc3339(value))
        .ok()
}

/// Format a date using a date-fns-compatible format string
///
/// # Examples
/// ```ignore
/// format_date(&date, "dd MMM yyyy", &i18n::PT_BR) // -> "25 mar 2021"
/// ```
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>, pattern: &str, locale: &Locale) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let chrono_format = datefns_to_chrono_format(pattern, date, locale);
    date.format(&chrono_format).to_string()
}

/// Parse and format a raw publication timestamp in one step
///
/// Returns `None` when the raw value is not a recognizable timestamp. The
/// date is rendered in the timestamp's own offset, never shifted to a local
/// or UTC zone.
pub fn format_publication_date(raw: &str, pattern: &str, locale: &Locale) -> Option<String> {
    let date = parse_publication_date(raw)?;
    Some(format_date(&date, pattern, locale))
}

/// Convert a date-fns format string to a chrono format string
///
/// Numeric tokens map onto chrono specifiers. Name tokens (months,
/// weekdays) are substituted with the locale's own names, since chrono only
/// knows the English ones.
fn datefns_to_chrono_format<Tz: TimeZone>(
    pattern: &str,
    date: &DateTime<Tz>,
    locale: &Locale,
) -> String {
    let month = date.month();
    let weekday = date.weekday().num_days_from_sunday();

    // Process from longest to shortest so shorter tokens never split longer ones
    let replacements = [
        // Year
        ("yyyy", "%Y".to_string()),
        ("yy", "%y".to_string()),
        // Month
        ("MMMM", locale.month_full(month).to_string()),
        ("MMM", locale.month_abbrev(month).to_string()),
        ("MM", "%m".to_string()),
        // Weekday
        ("EEEE", locale.weekday_full(weekday).to_string()),
        ("EEE", locale.weekday_abbrev(weekday).to_string()),
        // Day of month
        ("dd", "%d".to_string()),
        // Hour 24h / 12h
        ("HH", "%H".to_string()),
        ("hh", "%I".to_string()),
        // Minute
        ("mm", "%M".to_string()),
        // Second
        ("ss", "%S".to_string()),
    ];

    let mut result = pattern.to_string();
    for (from, to) in replacements {
        result = result.replace(from, &to);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n;

    #[test]
    fn test_parse_publication_date() {
        assert!(parse_publication_date("2021-03-25T19:25:30+0000").is_some());
        assert!(parse_publication_date("2021-03-25T19:25:30+00:00").is_some());
        assert!(parse_publication_date("2021-03-25T19:25:30Z").is_some());
        assert!(parse_publication_date("not a date").is_none());
        assert!(parse_publication_date("").is_none());
    }

    #[test]
    fn test_format_date_numeric() {
        let date = parse_publication_date("2021-03-25T19:25:30+0000").unwrap();
        assert_eq!(format_date(&date, "yyyy-MM-dd", &i18n::EN), "2021-03-25");
        assert_eq!(format_date(&date, "dd/MM/yyyy", &i18n::PT_BR), "25/03/2021");
        assert_eq!(format_date(&date, "HH:mm:ss", &i18n::EN), "19:25:30");
    }

    #[test]
    fn test_format_publication_date_pt_br() {
        assert_eq!(
            format_publication_date("2021-03-25T19:25:30+0000", "dd MMM yyyy", &i18n::PT_BR),
            Some("25 mar 2021".to_string())
        );
    }

    #[test]
    fn test_format_publication_date_en() {
        assert_eq!(
            format_publication_date("2021-03-25T19:25:30+0000", "dd MMM yyyy", &i18n::EN),
            Some("25 Mar 2021".to_string())
        );
        assert_eq!(
            format_publication_date("2021-12-01T00:00:00+0000", "MMMM dd, yyyy", &i18n::EN),
            Some("December 01, 2021".to_string())
        );
    }

    #[test]
    fn test_format_keeps_own_offset() {
        // 23:25 at -03:00 is already the 26th in UTC; the display day must
        // stay the 25th.
        assert_eq!(
            format_publication_date("2021-03-25T23:25:30-0300", "dd MMM yyyy", &i18n::PT_BR),
            Some("25 mar 2021".to_string())
        );
    }

    #[test]
    fn test_format_publication_date_invalid() {
        assert_eq!(
            format_publication_date("soon", "dd MMM yyyy", &i18n::PT_BR),
            None
        );
    }
}
