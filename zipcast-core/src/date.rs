//! Display formatting for dates and weekdays.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

const DATE_FORMAT: &str = "%m/%d/%Y";

/// Today in the local time zone, as `MM/DD/YYYY`.
pub fn current_date() -> String {
    format_date(Local::now().date_naive())
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Full weekday name ("Monday") of a unix timestamp in the local time zone.
pub fn weekday_name(timestamp: i64) -> String {
    weekday_name_in(timestamp, &Local)
}

pub fn weekday_name_in<Tz: TimeZone>(timestamp: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    // out-of-range timestamps fall back to the epoch
    let utc = DateTime::<Utc>::from_timestamp(timestamp, 0).unwrap_or_default();
    utc.with_timezone(tz).format("%A").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn format_date_zero_pads() {
        let date = NaiveDate::from_ymd_opt(2021, 6, 3).unwrap();
        assert_eq!(format_date(date), "06/03/2021");
    }

    #[test]
    fn current_date_has_display_shape() {
        let s = current_date();
        let bytes = s.as_bytes();

        assert_eq!(s.len(), 10);
        assert_eq!(bytes[2], b'/');
        assert_eq!(bytes[5], b'/');
        assert!(s.chars().filter(|c| *c != '/').all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn weekday_for_known_timestamp() {
        // 2021-06-13T00:00:00Z
        assert_eq!(weekday_name_in(1_623_542_400, &Utc), "Sunday");
        assert_eq!(weekday_name_in(1_623_542_400 + 86_400, &Utc), "Monday");
    }

    #[test]
    fn weekday_depends_on_time_zone() {
        let west = FixedOffset::west_opt(5 * 3600).unwrap();
        assert_eq!(weekday_name_in(1_623_542_400, &west), "Saturday");
    }

    #[test]
    fn out_of_range_timestamp_does_not_panic() {
        assert_eq!(weekday_name_in(i64::MAX, &Utc), "Thursday");
    }
}
