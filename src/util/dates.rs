//! Calendar date helpers for content timestamps.

use time::{Date, format_description::FormatItem, macros::format_description};

const ISO_DATE: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");
const DISPLAY_DATE: &[FormatItem<'static>] =
    format_description!("[month repr:short] [day padding:none], [year]");

/// Extract the calendar date from an ISO-8601 date or date-time.
///
/// The date is taken as written, in whatever offset the API reported it.
pub fn parse_calendar_date(value: &str) -> Option<Date> {
    let date_part = value.trim().get(..10)?;
    Date::parse(date_part, ISO_DATE).ok()
}

/// Render an ISO-8601 timestamp as a short US-English date, e.g. `Mar 5, 2024`.
///
/// Values that are not ISO dates are returned unchanged.
pub fn format_display_date(value: &str) -> String {
    parse_calendar_date(value)
        .and_then(|date| date.format(DISPLAY_DATE).ok())
        .unwrap_or_else(|| value.trim().to_string())
}

/// Like [`format_display_date`] but for optional fields; absent or blank values render nothing.
pub fn format_optional_date(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(format_display_date)
}

/// Machine-readable `YYYY-MM-DD` form for `<time datetime>` attributes.
pub fn iso_date(value: &str) -> Option<String> {
    parse_calendar_date(value).and_then(|date| date.format(ISO_DATE).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_plain_dates_and_datetimes() {
        assert_eq!(format_display_date("2024-03-05"), "Mar 5, 2024");
        assert_eq!(
            format_display_date("2024-11-21T09:15:00.123456+05:30"),
            "Nov 21, 2024"
        );
        assert_eq!(format_display_date("2023-12-31T23:59:59Z"), "Dec 31, 2023");
    }

    #[test]
    fn unparseable_values_pass_through() {
        assert_eq!(format_display_date("next spring"), "next spring");
        assert_eq!(format_display_date(""), "");
    }

    #[test]
    fn optional_dates_skip_blank_values() {
        assert_eq!(format_optional_date(None), None);
        assert_eq!(format_optional_date(Some("  ")), None);
        assert_eq!(
            format_optional_date(Some("2025-01-09")).as_deref(),
            Some("Jan 9, 2025")
        );
    }

    #[test]
    fn iso_date_normalises_datetime() {
        assert_eq!(
            iso_date("2024-03-05T10:00:00Z").as_deref(),
            Some("2024-03-05")
        );
        assert_eq!(iso_date("garbage"), None);
    }
}
