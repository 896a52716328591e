use chrono::NaiveDate;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// The academic year around a date cannot be represented.
    ///
    /// Only happens for dates at the edge of the supported calendar range. Results in
    /// a 500 Internal Server Error with a generic message returned to client.
    #[error("Cannot compute the academic year containing {date}")]
    AcademicYearOutOfRange {
        /// The reference date
        date: NaiveDate,
    },
}
