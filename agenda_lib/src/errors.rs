use chrono::NaiveDateTime;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Appointment end must be after begin ({begin} -> {end})")]
    InvalidRange {
        begin: NaiveDateTime,
        end: NaiveDateTime,
    },

    #[error("The start and finish should have the same dates ({begin} -> {end})")]
    CrossDay {
        begin: NaiveDateTime,
        end: NaiveDateTime,
    },

    #[error("Precondition violated: {0}")]
    PreconditionViolated(String),

    #[error("{0}")]
    Parse(String),

    #[error("{0}")]
    ChronoParse(#[from] chrono::ParseError),
}

impl Error {
    /// Whether the error reports malformed bounds for an appointment.  A
    /// start and finish on different days is a special case of this.
    #[must_use]
    pub fn is_invalid_range(&self) -> bool {
        matches!(self, Error::InvalidRange { .. } | Error::CrossDay { .. })
    }
}
