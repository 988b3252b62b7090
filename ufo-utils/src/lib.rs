//! Shared utility functions for UFO crates.

/// Date utility functions
pub mod dates {
    use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime};

    /// ISO layouts tried, in order, for timestamps that carry a time of day.
    const DATETIME_FORMATS: &[&str] = &[
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ];

    /// ISO layouts tried for date-only values (interpreted as midnight).
    const DATE_FORMATS: &[&str] = &["%Y-%m-%d"];

    /// `M/D/YYYY`, the layout used by the NUFORC export.
    ///
    /// Any day from 1 to 31 is accepted and overflow rolls into the next
    /// month, so `2/31/2013` is March 3rd.
    fn parse_us_date(s: &str) -> Option<NaiveDate> {
        let mut parts = s.split('/');
        let month: u32 = parts.next()?.trim().parse().ok()?;
        let day: u32 = parts.next()?.trim().parse().ok()?;
        let year: i32 = parts.next()?.trim().parse().ok()?;
        if parts.next().is_some() || !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, 1)?.checked_add_days(Days::new(u64::from(day - 1)))
    }

    /// `H:MM[:SS]` on `date`. `24:00` is midnight at the end of the day.
    fn at_clock(date: NaiveDate, clock: &str) -> Option<NaiveDateTime> {
        let mut parts = clock.split(':');
        let hour: u32 = parts.next()?.parse().ok()?;
        let minute: u32 = parts.next()?.parse().ok()?;
        let second: u32 = match parts.next() {
            Some(p) => p.parse().ok()?,
            None => 0,
        };
        if parts.next().is_some() {
            return None;
        }
        if (hour, minute, second) == (24, 0, 0) {
            return date.succ_opt()?.and_hms_opt(0, 0, 0);
        }
        date.and_hms_opt(hour, minute, second)
    }

    /// Parse a date-only string in any of the accepted layouts.
    pub fn parse_date(s: &str) -> Option<NaiveDate> {
        let s = s.trim();
        parse_us_date(s).or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        })
    }

    /// Parse a sighting timestamp.
    ///
    /// Returns `None` for anything unparseable; callers treat that as the
    /// "invalid date" and drop the record from year-keyed grouping.
    /// Offsets (RFC 3339) are normalized to UTC.
    pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
        let s = raw.trim();
        if s.is_empty() {
            return None;
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.naive_utc());
        }
        if let Some(dt) = DATETIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        {
            return Some(dt);
        }

        match s.split_once(' ') {
            Some((date_part, clock)) => at_clock(parse_date(date_part)?, clock.trim()),
            None => parse_date(s)?.and_hms_opt(0, 0, 0),
        }
    }

    /// Calendar year of a timestamp, `None` for the invalid date.
    pub fn year_of(timestamp: Option<&NaiveDateTime>) -> Option<i32> {
        timestamp.map(|dt| dt.year())
    }

    /// Format a timestamp as ISO-8601 UTC with millisecond precision,
    /// e.g. `1949-10-10T20:30:00.000Z`.
    pub fn format_iso(dt: &NaiveDateTime) -> String {
        dt.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::{NaiveDate, Timelike};

        #[test]
        fn test_parse_nuforc_layout() {
            let dt = parse_timestamp("10/10/1949 20:30").unwrap();
            assert_eq!(dt.date(), NaiveDate::from_ymd_opt(1949, 10, 10).unwrap());
            assert_eq!(dt.hour(), 20);
            assert_eq!(dt.minute(), 30);

            let dt = parse_timestamp("1/5/2003 7:05").unwrap();
            assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2003, 1, 5).unwrap());
            assert_eq!(dt.hour(), 7);
        }

        #[test]
        fn test_parse_iso_layouts() {
            let a = parse_timestamp("2004-05-06 21:00:00").unwrap();
            let b = parse_timestamp("2004-05-06T21:00:00").unwrap();
            let c = parse_timestamp("2004-05-06T21:00:00.250").unwrap();
            assert_eq!(a, b);
            assert_eq!(c.nanosecond(), 250_000_000);

            let date_only = parse_timestamp("2004-05-06").unwrap();
            assert_eq!(date_only.hour(), 0);
        }

        #[test]
        fn test_parse_rfc3339_normalizes_to_utc() {
            let dt = parse_timestamp("2004-05-06T21:00:00-07:00").unwrap();
            assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2004, 5, 7).unwrap());
            assert_eq!(dt.hour(), 4);
        }

        #[test]
        fn test_parse_24_00_rolls_over() {
            let dt = parse_timestamp("10/11/2006 24:00").unwrap();
            assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2006, 10, 12).unwrap());
            assert_eq!(dt.hour(), 0);

            let dt = parse_timestamp("12/31/1999 24:00").unwrap();
            assert_eq!(year_of(Some(&dt)), Some(2000));

            assert!(parse_timestamp("10/11/2006 24:30").is_none());
        }

        #[test]
        fn test_parse_invalid() {
            assert!(parse_timestamp("").is_none());
            assert!(parse_timestamp("   ").is_none());
            assert!(parse_timestamp("not a date").is_none());
            assert!(parse_timestamp("13/40/2001 10:00").is_none());
            assert!(parse_timestamp("0/10/2001 10:00").is_none());
            assert!(parse_timestamp("2/32/2001 10:00").is_none());
            assert!(parse_timestamp("2/0/2001").is_none());
            assert!(parse_timestamp("1/2/3/2001").is_none());
            assert!(parse_timestamp("1/5/2003 7:05:00:00").is_none());
        }

        #[test]
        fn test_parse_day_overflow_rolls_into_next_month() {
            let dt = parse_timestamp("2/31/2013 21:00").unwrap();
            assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2013, 3, 3).unwrap());
            assert_eq!(dt.hour(), 21);

            assert_eq!(
                parse_date("2/30/2001"),
                NaiveDate::from_ymd_opt(2001, 3, 2)
            );
            assert_eq!(
                parse_date("4/31/1999"),
                NaiveDate::from_ymd_opt(1999, 5, 1)
            );
            // 2000 is a leap year, 2001 is not
            assert_eq!(parse_date("2/29/2000"), NaiveDate::from_ymd_opt(2000, 2, 29));
            assert_eq!(parse_date("2/29/2001"), NaiveDate::from_ymd_opt(2001, 3, 1));

            let dt = parse_timestamp("12/31/1999 24:00").unwrap();
            assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
            let dt = parse_timestamp("2/31/2013 24:00").unwrap();
            assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2013, 3, 4).unwrap());
        }

        #[test]
        fn test_parse_iso_24_00() {
            let dt = parse_timestamp("2004-05-06 24:00").unwrap();
            assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2004, 5, 7).unwrap());
        }

        #[test]
        fn test_year_of() {
            let dt = parse_timestamp("7/4/1976 22:15").unwrap();
            assert_eq!(year_of(Some(&dt)), Some(1976));
            assert_eq!(year_of(None), None);
        }

        #[test]
        fn test_format_iso() {
            let dt = parse_timestamp("10/10/1949 20:30").unwrap();
            assert_eq!(format_iso(&dt), "1949-10-10T20:30:00.000Z");
        }
    }
}

/// Numeric coercion with JavaScript unary-plus semantics.
///
/// The raw dataset stores every numeric column as text; charts coerce lazily
/// at the point of use so a malformed cell degrades to NaN instead of
/// rejecting the whole row.
pub mod numbers {
    /// Coerce a raw cell to a number.
    ///
    /// - surrounding whitespace is ignored
    /// - an empty cell is `0.0`
    /// - `Infinity` / `-Infinity` (case-sensitive) are infinite
    /// - `0x`, `0o`, `0b` prefixes parse as unsigned integers
    /// - anything else that is not a decimal literal is NaN
    pub fn coerce_number(raw: &str) -> f64 {
        let s = raw.trim();
        if s.is_empty() {
            return 0.0;
        }
        match s {
            "Infinity" | "+Infinity" => return f64::INFINITY,
            "-Infinity" => return f64::NEG_INFINITY,
            _ => {}
        }

        let radix = match s.get(..2) {
            Some("0x") | Some("0X") => Some(16),
            Some("0o") | Some("0O") => Some(8),
            Some("0b") | Some("0B") => Some(2),
            _ => None,
        };
        if let Some(radix) = radix {
            return u64::from_str_radix(&s[2..], radix)
                .map(|v| v as f64)
                .unwrap_or(f64::NAN);
        }

        // `str::parse::<f64>` also accepts "inf" and "nan", which JS does not.
        if s
            .bytes()
            .any(|b| b.is_ascii_alphabetic() && b != b'e' && b != b'E')
        {
            return f64::NAN;
        }
        s.parse::<f64>().unwrap_or(f64::NAN)
    }

}
