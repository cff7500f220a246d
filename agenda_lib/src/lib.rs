//! Appointments and agendas.
//!
//! An [`Interval`] is an appointment: a span of time on a single calendar
//! day, closed at its start and open at its end, with a free-text
//! description.  An [`IntervalSet`] (an agenda) is an ordered list of such
//! appointments, on which we can compute:
//!
//! ```text
//!     agenda A:    [--- a1 ---]      [-- a2 --]
//!     agenda B:          [------ b1 ------]
//!
//!     A & B:             [-a1-]      [-a2-]        intersect
//!     normalize(A|B):[---------- merged ------]
//!     free in W:   W=[------------------------------]
//!                  [gap]                      [gap]   complement
//! ```
//!
//! Two appointments that only touch (one ends exactly when the other
//! starts) do not overlap, and are never merged.

pub mod errors;
pub mod formatters;
pub mod importers;
pub mod interval_sets;
pub mod intervals;
pub mod times;

pub use crate::errors::Error;
pub use crate::interval_sets::IntervalSet;
pub use crate::intervals::Interval;
