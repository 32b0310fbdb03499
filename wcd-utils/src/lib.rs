//! Shared parsing helpers for WCD crates.

/// Date utility functions
pub mod dates {
    use chrono::{Datelike, NaiveDate, NaiveDateTime};

    /// Dutch month abbreviations, indexed by month number minus one.
    /// These are the labels the chart front end displays.
    pub const MONTH_ABBREVIATIONS: [&str; 12] = [
        "Jan", "Feb", "Mrt", "Apr", "Mei", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dec",
    ];

    /// Date formats the observation exports have been seen to use.
    /// Tried in order by `parse_date_lenient`.
    const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%d-%m-%Y", "%d/%m/%Y", "%Y/%m/%d"];

    /// Datetime formats that occasionally show up in the same column.
    const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s, "%Y-%m-%d")?)
    }

    /// Best-effort date parsing over the known export formats.
    ///
    /// Returns `None` for anything that matches no format; callers treat
    /// that as a missing date rather than an error.
    pub fn parse_date_lenient(s: &str) -> Option<NaiveDate> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }
        for format in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(s, format) {
                return Some(date);
            }
        }
        for format in DATETIME_FORMATS {
            if let Ok(datetime) = NaiveDateTime::parse_from_str(s, format) {
                return Some(datetime.date());
            }
        }
        None
    }

    /// First day of the month containing `date`.
    pub fn month_start(date: NaiveDate) -> NaiveDate {
        NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
            .expect("day 1 exists in every month")
    }

    /// Dutch abbreviation for a 1-based month number.
    pub fn month_abbreviation(month: u32) -> &'static str {
        MONTH_ABBREVIATIONS[(month as usize).clamp(1, 12) - 1]
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        #[test]
        fn test_parse_date_lenient_formats() {
            let expected = NaiveDate::from_ymd_opt(2020, 3, 5).unwrap();
            assert_eq!(parse_date_lenient("2020-03-05"), Some(expected));
            assert_eq!(parse_date_lenient("05-03-2020"), Some(expected));
            assert_eq!(parse_date_lenient("05/03/2020"), Some(expected));
            assert_eq!(parse_date_lenient("2020/03/05"), Some(expected));
            assert_eq!(parse_date_lenient(" 2020-03-05 12:30:00 "), Some(expected));
        }

        #[test]
        fn test_parse_date_lenient_rejects_garbage() {
            assert_eq!(parse_date_lenient(""), None);
            assert_eq!(parse_date_lenient("not a date"), None);
            assert_eq!(parse_date_lenient("2020-13-40"), None);
        }

        #[test]
        fn test_month_start() {
            let date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
            assert_eq!(
                month_start(date),
                NaiveDate::from_ymd_opt(2023, 6, 1).unwrap()
            );
        }

        #[test]
        fn test_month_abbreviation_is_dutch() {
            assert_eq!(month_abbreviation(3), "Mrt");
            assert_eq!(month_abbreviation(5), "Mei");
            assert_eq!(month_abbreviation(10), "Okt");
        }

        #[test]
        fn test_format_and_parse() {
            let date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
            let formatted = format_date(&date);
            assert_eq!(formatted, "2023-06-15");
            let parsed = parse_date(&formatted).unwrap();
            assert_eq!(parsed, date);
        }
    }
}

/// Numeric parsing and coordinate rounding
pub mod numbers {
    /// Scale used to snap coordinates to 5 decimal places (~1.1 m at
    /// mid-latitudes). Two raw points whose scaled values are equal are
    /// treated as the same survey point.
    pub const COORDINATE_SCALE: f64 = 1e5;

    /// Best-effort numeric parsing for export fields.
    ///
    /// Tolerates surrounding whitespace and a decimal comma ("4,8" parses
    /// as 4.8). Anything unparsable or non-finite is `None`; callers treat
    /// that as a missing value rather than an error.
    pub fn parse_number_lenient(s: &str) -> Option<f64> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }
        let parsed = s.parse::<f64>().ok().or_else(|| {
            if s.contains(',') && !s.contains('.') {
                s.replace(',', ".").parse::<f64>().ok()
            } else {
                None
            }
        })?;
        parsed.is_finite().then_some(parsed)
    }

    /// Snap a coordinate to 5 decimal places, represented as an integer
    /// count of 1e-5 degree units so key comparisons are exact.
    pub fn scale_coordinate(value: f64) -> i64 {
        (value * COORDINATE_SCALE).round() as i64
    }

    /// Inverse of `scale_coordinate`: the rounded coordinate in degrees.
    pub fn unscale_coordinate(scaled: i64) -> f64 {
        scaled as f64 / COORDINATE_SCALE
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parse_number_lenient() {
            assert_eq!(parse_number_lenient("3"), Some(3.0));
            assert_eq!(parse_number_lenient(" 52.10001 "), Some(52.10001));
            assert_eq!(parse_number_lenient("4,8"), Some(4.8));
            assert_eq!(parse_number_lenient(""), None);
            assert_eq!(parse_number_lenient("n/a"), None);
            assert_eq!(parse_number_lenient("NaN"), None);
        }

        #[test]
        fn test_scale_coordinate_merges_within_tolerance() {
            assert_eq!(scale_coordinate(52.10), scale_coordinate(52.10000));
            assert_eq!(scale_coordinate(52.100001), scale_coordinate(52.10));
            assert_ne!(scale_coordinate(52.10001), scale_coordinate(52.10));
        }

        #[test]
        fn test_unscale_round_trips_rounded_values() {
            let scaled = scale_coordinate(4.80001);
            assert!((unscale_coordinate(scaled) - 4.80001).abs() < 1e-9);
        }
    }
}
