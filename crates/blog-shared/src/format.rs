//! Date formats shown on post pages.

use std::fmt::Display;

use chrono::{DateTime, Locale, SecondsFormat, TimeZone, Utc};

/// ISO-8601 in UTC with millisecond precision, e.g. `2024-01-15T03:04:05.678Z`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Long Korean date in `tz`, e.g. `2024년 1월 15일 월요일`.
pub fn korean_long_date<Tz>(at: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.with_timezone(tz)
        .format_localized("%Y년 %-m월 %-d일 %A", Locale::ko_KR)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Asia::Seoul;

    fn instant(raw: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(raw).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_iso_timestamp_has_millis_and_z() {
        let at = instant("2024-01-15T03:04:05.678Z");
        assert_eq!(iso_timestamp(at), "2024-01-15T03:04:05.678Z");
    }

    #[test]
    fn test_korean_long_date() {
        let at = instant("2024-01-15T03:04:05.678Z");
        assert_eq!(korean_long_date(at, &Seoul), "2024년 1월 15일 월요일");
    }

    #[test]
    fn test_korean_long_date_uses_display_zone() {
        // 20:00 UTC is already the next day in Seoul.
        let at = instant("2024-01-15T20:00:00Z");
        assert_eq!(korean_long_date(at, &Seoul), "2024년 1월 16일 화요일");
        assert_eq!(korean_long_date(at, &Utc), "2024년 1월 15일 월요일");
    }
}
