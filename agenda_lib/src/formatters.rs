//! The canonical text form of appointments:
//!
//! ```text
//!     2012.10.31 13:00 13:50 | CIS 210 lecture
//! ```
//!
//! It is designed to be easily divided into parts: split on '|', then
//! split on whitespace, then split the date on '.' and times on ':'.

use crate::errors::Error;
use crate::intervals::Interval;
use chrono::{NaiveDate, NaiveTime};
use itertools::Itertools;

pub const DATE_FORMAT: &str = "%Y.%m.%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// Only hours and minutes are written: seconds are truncated.  An
/// appointment that does not start and end on whole minutes is therefore
/// not read back identically, and one shorter than a minute might not be
/// read back at all (its begin and end print the same).
#[must_use]
pub fn format_interval(appt: &Interval) -> String {
    format!(
        "{} {} {} | {}",
        appt.begin().format(DATE_FORMAT),
        appt.begin().format(TIME_FORMAT),
        appt.end().format(TIME_FORMAT),
        appt.description(),
    )
}

/// Parse one appointment, the reverse of [`format_interval`].
/// Dates and times need not be zero-padded ("2012.12.1 8:00 9:30 | ...").
pub fn parse_interval(text: &str) -> Result<Interval, Error> {
    let (timespec, desc) = match text.split('|').collect_tuple::<(&str, &str)>() {
        Some(fields) => fields,
        None => Err(Error::Parse(format!(
            "Appt literal requires exactly one '|' before description: {text:?}"
        )))?,
    };

    let fields: Vec<&str> = timespec.split_whitespace().collect();
    let (day, begin, end) = match fields.as_slice() {
        [day, begin, end] => (
            parse_date(day)?,
            NaiveTime::parse_from_str(begin, TIME_FORMAT)?,
            NaiveTime::parse_from_str(end, TIME_FORMAT)?,
        ),
        _ => Err(Error::Parse(format!(
            "Appt literal must start with date, time, time, separated by blanks: {text:?}"
        )))?,
    };

    Interval::new(day, begin, end, desc.trim())
}

/// Dates are Year.Month.Day
fn parse_date(text: &str) -> Result<NaiveDate, Error> {
    let invalid = || {
        Error::Parse(format!(
            "Date in Appt literal should be 9999.99.99 (Year.Month.Day): {text:?}"
        ))
    };
    let (year, month, day) = text
        .split('.')
        .map(|f| f.trim().parse::<u32>())
        .collect_tuple()
        .ok_or_else(invalid)?;
    let year = i32::try_from(year.map_err(|_| invalid())?)
        .map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(
        year,
        month.map_err(|_| invalid())?,
        day.map_err(|_| invalid())?,
    )
    .ok_or_else(invalid)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::interval_sets::IntervalSet;

    #[test]
    fn test_format() {
        let appt = parse_interval("2012.10.31 14:30 15:45 | from text").unwrap();
        assert_eq!(format_interval(&appt), "2012.10.31 14:30 15:45 | from text");
        assert_eq!(appt.to_string(), format_interval(&appt));
    }

    #[test]
    fn test_format_truncates_seconds() {
        let short = Interval::from_iso("2016-11-15T10:00:10", "2016-11-15T10:00:50", "short")
            .unwrap();
        assert_eq!(format_interval(&short), "2016.11.15 10:00 10:00 | short");
        assert!(matches!(
            parse_interval(&format_interval(&short)),
            Err(Error::InvalidRange { .. })
        ));

        // Reading an agenda skips the lines it cannot parse
        let agenda: IntervalSet = [short].into_iter().collect();
        let back: IntervalSet = agenda.to_string().parse().unwrap();
        assert_eq!(agenda.len(), 1);
        assert!(back.is_empty());

        let long = Interval::from_iso("2016-11-15T10:00:10", "2016-11-15T11:30:50", "long")
            .unwrap();
        let back = parse_interval(&format_interval(&long)).unwrap();
        assert_eq!(back.to_string(), "2016.11.15 10:00 11:30 | long");
        assert!(!back.same_span(&long));
    }

    #[test]
    fn test_parse_padding() {
        let appt = parse_interval("  2012.12.1  8:00 9:30  |  Possible breakfast ")
            .unwrap();
        assert_eq!(
            appt.to_string(),
            "2012.12.01 08:00 09:30 | Possible breakfast"
        );

        let empty = parse_interval("2012.12.01 08:00 09:30 |").unwrap();
        assert_eq!(empty.description(), "");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            parse_interval("2012.10.31 14:30 15:45 from text"),
            Err(Error::Parse(_))
        ));
        assert!(matches!(
            parse_interval("2012.10.31 14:30 15:45 | a | b"),
            Err(Error::Parse(_))
        ));
        assert!(matches!(
            parse_interval("2012.10.31 14:30 | short"),
            Err(Error::Parse(_))
        ));
        assert!(matches!(
            parse_interval("2012/10/31 14:30 15:45 | slashes"),
            Err(Error::Parse(_))
        ));
        assert!(matches!(
            parse_interval("2012.13.31 14:30 15:45 | no such month"),
            Err(Error::Parse(_))
        ));
        assert!(matches!(
            parse_interval("2012.10.31 14h30 15:45 | bad time"),
            Err(Error::ChronoParse(_))
        ));
        assert!(matches!(
            parse_interval("2012.10.31 15:45 14:30 | time traveler"),
            Err(Error::InvalidRange { .. })
        ));
    }
}
