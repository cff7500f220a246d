use crate::errors::Error;
use crate::intervals::Interval;
use chrono::NaiveDateTime;
use itertools::Itertools;
use log::{debug, trace, warn};
use serde::Serialize;

/// An agenda: a list of appointments.
///
/// Appointments are kept in insertion order, and may overlap, until the
/// agenda is normalized.  After [`IntervalSet::normalize`], the agenda is
/// sorted by start time and no two appointments overlap.
///
/// Two agendas compare equal when they contain the same periods of time in
/// the same order, regardless of the descriptions.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct IntervalSet {
    intervals: Vec<Interval>,
}

impl IntervalSet {
    /// An empty agenda
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an appointment at the end of the agenda.  No check is done for
    /// overlaps or order.
    pub fn append(&mut self, appt: Interval) {
        self.intervals.push(appt);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.intervals.iter()
    }

    /// The start of the first appointment in the agenda
    #[must_use]
    pub fn first_date(&self) -> Option<NaiveDateTime> {
        self.intervals.first().map(Interval::begin)
    }

    /// The periods common to appointments of self and appointments of other.
    ///
    /// Each overlapping pair contributes one appointment, in the order of
    /// self then other.  The result is not normalized, and might contain
    /// overlapping or duplicate periods.  Descriptions are copied from the
    /// appointment in self, unless one is given.
    #[must_use]
    pub fn intersect(&self, other: &IntervalSet, description: Option<&str>) -> IntervalSet {
        let result: IntervalSet = self
            .iter()
            .cartesian_product(other.iter())
            .filter(|(a, b)| a.overlaps(b))
            .map(|(a, b)| a.intersect(b, description))
            .collect();
        debug!(
            "intersect: {} x {} appointments -> {}",
            self.len(),
            other.len(),
            result.len()
        );
        result
    }

    /// A sorted copy of self in which overlapping appointments have been
    /// merged.  Appointments that merely touch are kept separate.
    #[must_use]
    pub fn normalized(&self) -> IntervalSet {
        let result: IntervalSet = self
            .iter()
            .sorted_by_key(|a| a.begin())
            .cloned()
            .coalesce(|current, appt| {
                if appt.follows(&current) {
                    trace!("normalize: gap, emitting {current}");
                    Err((current, appt))
                } else {
                    trace!("normalize: merging {current} with {appt}");
                    Ok(current.union(&appt, None))
                }
            })
            .collect();
        debug!("normalize: {} appointments -> {}", self.len(), result.len());
        result
    }

    /// Sort and merge overlapping appointments in place.  See
    /// [`IntervalSet::normalized`].
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// The periods of `window` not covered by any appointment of self.
    ///
    /// All returned appointments have the description of `window`.  The
    /// result is sorted and has no overlaps.
    #[must_use]
    pub fn complement(&self, window: &Interval) -> IntervalSet {
        let mut result = IntervalSet::new();
        let mut gap = |from: NaiveDateTime, to: NaiveDateTime| {
            trace!("complement: free from {from} to {to}");
            result.append(Interval::new_unchecked(
                from,
                to,
                window.description().to_string(),
            ));
        };

        let mut cursor = window.begin();
        for appt in self.normalized().iter() {
            if appt.precedes(window) {
                continue;
            }
            if appt.follows(window) {
                break;
            }
            if cursor < appt.begin() {
                gap(cursor, appt.begin());
            }
            cursor = cursor.max(appt.end());
        }
        if cursor < window.end() {
            gap(cursor, window.end());
        }

        debug!(
            "complement: {} appointments within {window} -> {} free",
            self.len(),
            result.len()
        );
        result
    }
}

impl PartialEq for IntervalSet {
    /// Equal blocks of time, ignoring descriptions
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(mine, theirs)| mine.same_span(theirs))
    }
}

impl FromIterator<Interval> for IntervalSet {
    fn from_iter<I: IntoIterator<Item = Interval>>(iter: I) -> Self {
        IntervalSet {
            intervals: iter.into_iter().collect(),
        }
    }
}

impl Extend<Interval> for IntervalSet {
    fn extend<I: IntoIterator<Item = Interval>>(&mut self, iter: I) {
        self.intervals.extend(iter);
    }
}

impl IntoIterator for IntervalSet {
    type Item = Interval;
    type IntoIter = std::vec::IntoIter<Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.into_iter()
    }
}

impl<'a> IntoIterator for &'a IntervalSet {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

impl std::fmt::Display for IntervalSet {
    /// One appointment per line, no trailing newline
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.iter().join("\n"))
    }
}

impl std::str::FromStr for IntervalSet {
    type Err = Error;

    /// Read an agenda, one appointment per line.
    /// Blank lines and lines starting with '#' are ignored.  Lines that
    /// cannot be parsed are reported and skipped, so this never fails.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut result = IntervalSet::new();
        for (num, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match line.parse::<Interval>() {
                Ok(appt) => result.append(appt),
                Err(e) => warn!("Failed on line {}: {line:?}: {e}", num + 1),
            }
        }
        Ok(result)
    }
}
