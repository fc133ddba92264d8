use chrono::{Datelike, NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::DateError;

// Sunday-first so the index matches `num_days_from_sunday`
pub const DAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

// date (extended or basic), then optional time with optional zone
fn iso_regex() -> &'static Regex {
    static REGEX: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?P<y>\d{4})(?P<s1>-?)(?P<m>\d{2})(?P<s2>-?)(?P<d>\d{2})(?:[T ](?P<hh>\d{2})(?::?(?P<mm>\d{2})(?::?(?P<ss>\d{2})(?:[.,]\d+)?)?)?(?:Z|[+-]\d{2}(?::?\d{2})?)?)?$",
        )
        .expect("static ISO-8601 regex")
    });
    &REGEX
}

/// Parse an ISO-8601 string into the calendar date it names.
///
/// Accepts extended (`2025-05-17`) and basic (`20250517`) dates, optionally
/// followed by `T` or a space and a time of `HH`, `HH:MM` or `HH:MM:SS[.f]`
/// (colons optional) with an optional `Z` or `+HH[:MM]` offset. Month and day
/// need two digits. With an offset the date is the one written in the
/// string, not converted to UTC.
pub fn parse_wedding_date(input: &str) -> Result<NaiveDate, DateError> {
    let invalid = || DateError::Invalid(input.to_string());
    let caps = iso_regex().captures(input.trim()).ok_or_else(invalid)?;
    // both separators present or both absent
    if caps["s1"] != caps["s2"] {
        return Err(invalid());
    }
    let num = |name: &str| -> u32 {
        caps.name(name)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0)
    };
    let year: i32 = caps["y"].parse().map_err(|_| invalid())?;
    let date = NaiveDate::from_ymd_opt(year, num("m"), num("d")).ok_or_else(invalid)?;
    if caps.name("hh").is_some() {
        NaiveTime::from_hms_opt(num("hh"), num("mm"), num("ss")).ok_or_else(invalid)?;
    }
    Ok(date)
}

/// `yy.MM.dd`, e.g. 2025-05-17 -> "25.05.17".
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%y.%m.%d").to_string()
}

pub fn weekday_label(date: NaiveDate) -> &'static str {
    DAYS[date.weekday().num_days_from_sunday() as usize]
}

/// Base class followed by the caller's extra classes, if any.
pub fn class_names(base: &str, extra: Option<&str>) -> String {
    match extra.map(str::trim) {
        Some(extra) if !extra.is_empty() => format!("{base} {extra}"),
        _ => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_reference_date() {
        let d = parse_wedding_date("2025-05-17").unwrap();
        assert_eq!(format_short_date(d), "25.05.17");
        assert_eq!(weekday_label(d), "Saturday");
    }

    #[test]
    fn weekday_follows_calendar_for_a_whole_year() {
        let mut d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        // 2024-01-01 was a Monday
        let mut expected = 1usize;
        while d.year() == 2024 {
            let iso = d.format("%Y-%m-%d").to_string();
            let parsed = parse_wedding_date(&iso).unwrap();
            assert_eq!(weekday_label(parsed), DAYS[expected], "{iso}");
            expected = (expected + 1) % 7;
            d = d.succ_opt().unwrap();
        }
    }

    #[test]
    fn accepts_date_times() {
        let expected = NaiveDate::from_ymd_opt(2025, 5, 17).unwrap();
        for s in [
            "2025-05-17T13:30:00",
            "2025-05-17T13:30",
            "2025-05-17T13:30:00.250",
            "2025-05-17T23:30:00+09:00",
            "2025-05-17T00:10:00Z",
            "2025-05-17T13:30:00+0900",
            "2025-05-17T13:30:00-05",
            "2025-05-17 13:30:00",
            "2025-05-17 13:30",
            "2025-05-17T13",
            "2025-05-17T133000",
            "20250517",
            "20250517T1330",
        ] {
            assert_eq!(parse_wedding_date(s), Ok(expected), "{s}");
        }
    }

    #[test]
    fn keeps_the_written_date_for_offsets() {
        // 01:00 in Seoul is still the previous day in UTC
        let d = parse_wedding_date("2025-05-18T01:00:00+09:00").unwrap();
        assert_eq!(format_short_date(d), "25.05.18");
        assert_eq!(weekday_label(d), "Sunday");
    }

    #[test]
    fn rejects_garbage() {
        for s in [
            "",
            "next saturday",
            "2025-13-01",
            "2025-02-30",
            "17.05.2025",
            "2025-5-7",
            "2025-05-7",
            "2025-0517",
            "202505-17",
            "2025-05-17T25:00",
            "2025-05-17T13:61",
            "2025-05-17T",
            "2025-05-17Z",
            "2025-05-17T13:30:00+09:00:00",
        ] {
            assert_eq!(
                parse_wedding_date(s),
                Err(DateError::Invalid(s.to_string())),
                "{s}"
            );
        }
    }

    #[test]
    fn class_names_joins_optional_extra() {
        assert_eq!(class_names("section", None), "section");
        assert_eq!(class_names("section", Some("")), "section");
        assert_eq!(class_names("section", Some("foo")), "section foo");
        assert_eq!(class_names("section", Some(" foo bar ")), "section foo bar");
    }
}
