use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A NOT NULL timestamp column came back blank.
    ///
    /// Blank text normalizes to "no value", which is correct for nullable
    /// columns but means a required column holds an unreadable row. Results
    /// in a 500 Internal Server Error with a generic message returned to
    /// the client.
    #[error("Required timestamp column {entity}.{column} is blank")]
    MissingTimestamp {
        /// Entity whose row was being rehydrated
        entity: &'static str,
        /// The blank column
        column: &'static str,
    },
    /// A seat row holds status text outside the known set.
    ///
    /// Seat statuses are written exclusively through the seat service, so an
    /// unknown value means the row was tampered with or a variant was removed
    /// without a migration.
    #[error("Unknown seat status '{value}' stored in the database")]
    UnknownSeatStatus {
        /// The unrecognized status text
        value: String,
    },
}
