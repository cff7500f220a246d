use crate::errors::Error;
use crate::formatters::{format_interval, parse_interval};
use crate::times::{format_iso, parse_iso};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use std::cmp::{max, min};

/// A single appointment, starting on a particular date and time, and ending
/// at a later time the same day.
///
/// The interval is left-closed, right-open: `[begin, end)`.  As a result,
/// an appointment that ends at 10:00 does not overlap one that starts at
/// 10:00.
///
/// Appointments are only partially ordered (two overlapping appointments
/// are neither before nor after each other), so this type does not
/// implement `PartialOrd`.  Use [`Interval::precedes`] and
/// [`Interval::follows`] to compare them, and [`Interval::begin`] as the
/// key when sorting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Interval {
    begin: NaiveDateTime,
    end: NaiveDateTime,
    description: String,
}

impl Interval {
    /// Create an appointment on `day`, from `begin` to `end`.
    ///
    /// Returns [`Error::InvalidRange`] unless `begin < end`.
    ///
    /// ```
    /// # use agenda_lib::Interval;
    /// # use chrono::{NaiveDate, NaiveTime};
    /// let day = NaiveDate::from_ymd_opt(2012, 12, 1).unwrap();
    /// let appt = Interval::new(
    ///     day,
    ///     NaiveTime::from_hms_opt(16, 30, 0).unwrap(),
    ///     NaiveTime::from_hms_opt(17, 45, 0).unwrap(),
    ///     "tea",
    /// ).unwrap();
    /// assert_eq!(appt.to_string(), "2012.12.01 16:30 17:45 | tea");
    /// ```
    pub fn new(
        day: NaiveDate,
        begin: NaiveTime,
        end: NaiveTime,
        description: impl Into<String>,
    ) -> Result<Self, Error> {
        let begin = day.and_time(begin);
        let end = day.and_time(end);
        if begin >= end {
            return Err(Error::InvalidRange { begin, end });
        }
        Ok(Self {
            begin,
            end,
            description: description.into(),
        })
    }

    /// Create an appointment from two timestamps, which must be on the same
    /// calendar day.
    pub fn from_timestamps(
        begin: NaiveDateTime,
        end: NaiveDateTime,
        description: impl Into<String>,
    ) -> Result<Self, Error> {
        if begin.date() != end.date() {
            return Err(Error::CrossDay { begin, end });
        }
        Self::new(begin.date(), begin.time(), end.time(), description)
    }

    /// Create an appointment from a pair of ISO-8601 timestamps, as sent by
    /// the web front end.
    pub fn from_iso(
        start: &str,
        finish: &str,
        description: impl Into<String>,
    ) -> Result<Self, Error> {
        Self::from_timestamps(parse_iso(start)?, parse_iso(finish)?, description)
    }

    /// Build an interval whose bounds are already known to be valid, e.g.
    /// clipped from other intervals.
    pub(crate) fn new_unchecked(
        begin: NaiveDateTime,
        end: NaiveDateTime,
        description: String,
    ) -> Self {
        debug_assert!(
            begin < end && begin.date() == end.date(),
            "Invalid interval {begin} -> {end}"
        );
        Self {
            begin,
            end,
            description,
        }
    }

    /// The day on which the appointment occurs
    #[must_use]
    pub fn day(&self) -> NaiveDate {
        self.begin.date()
    }

    #[must_use]
    pub fn begin(&self) -> NaiveDateTime {
        self.begin
    }

    #[must_use]
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Always strictly positive
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.end.signed_duration_since(self.begin)
    }

    #[must_use]
    pub fn start_isoformat(&self) -> String {
        format_iso(&self.begin)
    }

    #[must_use]
    pub fn end_isoformat(&self) -> String {
        format_iso(&self.end)
    }

    /// Whether self is done by the time other begins.
    #[must_use]
    pub fn precedes(&self, other: &Interval) -> bool {
        self.end <= other.begin
    }

    /// Whether other is done by the time self begins.
    #[must_use]
    pub fn follows(&self, other: &Interval) -> bool {
        other.precedes(self)
    }

    /// Whether there is a non-zero duration common to both appointments.
    #[must_use]
    pub fn overlaps(&self, other: &Interval) -> bool {
        !(self.precedes(other) || self.follows(other))
    }

    /// The period common to self and other.
    /// The description is copied from self, unless one is given.
    ///
    /// # Panics
    ///
    /// Requires `self.overlaps(other)`.  See [`Interval::try_intersect`]
    /// for a version that checks.
    #[must_use]
    pub fn intersect(&self, other: &Interval, description: Option<&str>) -> Interval {
        assert!(
            self.overlaps(other),
            "intersect requires overlapping intervals: {self} / {other}"
        );
        Interval::new_unchecked(
            max(self.begin, other.begin),
            min(self.end, other.end),
            description.map_or_else(|| self.description.clone(), str::to_string),
        )
    }

    /// The period spanning both self and other.
    /// The description is the concatenation of both descriptions, unless one
    /// is given.
    ///
    /// # Panics
    ///
    /// Requires `self.overlaps(other)`.  See [`Interval::try_union`] for a
    /// version that checks.
    #[must_use]
    pub fn union(&self, other: &Interval, description: Option<&str>) -> Interval {
        assert!(
            self.overlaps(other),
            "union requires overlapping intervals: {self} / {other}"
        );
        Interval::new_unchecked(
            min(self.begin, other.begin),
            max(self.end, other.end),
            description.map_or_else(
                || format!("{} {}", self.description, other.description),
                str::to_string,
            ),
        )
    }

    /// Same as [`Interval::intersect`], but reports non-overlapping operands
    /// as [`Error::PreconditionViolated`] instead of panicking.
    pub fn try_intersect(
        &self,
        other: &Interval,
        description: Option<&str>,
    ) -> Result<Interval, Error> {
        self.check_overlaps(other, "intersect")?;
        Ok(self.intersect(other, description))
    }

    /// Same as [`Interval::union`], but reports non-overlapping operands
    /// as [`Error::PreconditionViolated`] instead of panicking.
    pub fn try_union(
        &self,
        other: &Interval,
        description: Option<&str>,
    ) -> Result<Interval, Error> {
        self.check_overlaps(other, "union")?;
        Ok(self.union(other, description))
    }

    fn check_overlaps(&self, other: &Interval, op: &str) -> Result<(), Error> {
        if self.overlaps(other) {
            Ok(())
        } else {
            Err(Error::PreconditionViolated(format!(
                "{op} requires overlapping intervals: {self} / {other}"
            )))
        }
    }

    /// Whether both appointments cover the same period, regardless of their
    /// descriptions.
    #[must_use]
    pub fn same_span(&self, other: &Interval) -> bool {
        self.begin == other.begin && self.end == other.end
    }
}

impl std::fmt::Display for Interval {
    /// Example:  `2012.10.31 13:00 13:50 | CIS 210 lecture`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_interval(self))
    }
}

impl std::str::FromStr for Interval {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_interval(s)
    }
}
