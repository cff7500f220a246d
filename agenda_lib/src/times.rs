use crate::errors::Error;
use chrono::{DateTime, NaiveDateTime};
use itertools::Itertools;

/// Format used when displaying timestamps as ISO-8601
pub const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Accepted formats for timestamps without an offset.  "%.f" also matches
/// when there is no fraction.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO-8601 timestamp.
/// Timestamps with an explicit offset ("2016-11-15T05:42:00-08:00") keep
/// their wall-clock time, and the offset itself is dropped: appointments are
/// always expressed in local time.
/// The date and time may be separated by 'T' or a space.  Seconds, and
/// fractions of seconds, are optional.
pub fn parse_iso(text: &str) -> Result<NaiveDateTime, Error> {
    let text = text.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Ok(ts.naive_local());
    }
    NAIVE_FORMATS
        .iter()
        .map(|format| NaiveDateTime::parse_from_str(text, format))
        .find_or_first(Result::is_ok)
        .ok_or_else(|| Error::Parse(format!("Invalid timestamp {text:?}")))?
        .map_err(Error::from)
}

#[must_use]
pub fn format_iso(ts: &NaiveDateTime) -> String {
    ts.format(ISO_FORMAT).to_string()
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{Duration, NaiveDate, NaiveTime};

    fn ts(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2016, 11, 15)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(h, m, 0).unwrap())
    }

    #[test]
    fn test_parse_iso() {
        assert_eq!(parse_iso("2016-11-15T05:42:00").unwrap(), ts(5, 42));
        assert_eq!(parse_iso("2016-11-15T18:00").unwrap(), ts(18, 0));
        assert_eq!(parse_iso("2016-11-15T05:42:00-08:00").unwrap(), ts(5, 42));
        assert_eq!(parse_iso(" 2016-11-15T05:42:00Z ").unwrap(), ts(5, 42));
        assert!(parse_iso("11/15/2016 5:42am").is_err());
        assert!(parse_iso("").is_err());
    }

    #[test]
    fn test_parse_iso_variants() {
        // As produced by python's isoformat() when there are microseconds
        assert_eq!(
            parse_iso("2016-11-15T05:42:00.123456").unwrap(),
            ts(5, 42) + Duration::microseconds(123_456)
        );
        assert_eq!(
            parse_iso("2016-11-15T05:42:00.123456-08:00").unwrap(),
            ts(5, 42) + Duration::microseconds(123_456)
        );

        // Space instead of 'T'
        assert_eq!(parse_iso("2016-11-15 05:42:00").unwrap(), ts(5, 42));
        assert_eq!(parse_iso("2016-11-15 18:00").unwrap(), ts(18, 0));
        assert_eq!(
            parse_iso("2016-11-15 05:42:00.5").unwrap(),
            ts(5, 42) + Duration::milliseconds(500)
        );
    }

    #[test]
    fn test_format_iso() {
        assert_eq!(format_iso(&ts(5, 42)), "2016-11-15T05:42:00");
        assert_eq!(parse_iso(&format_iso(&ts(23, 59))).unwrap(), ts(23, 59));
    }
}
