use thiserror::Error;

/// Timestamp text that matched none of the accepted layouts.
///
/// Raised by `server::util::datetime::normalize` once every accepted layout
/// has been tried. Carries the offending text exactly as it was received so
/// the bad row or request value can be found again, plus the number of
/// layouts that were attempted.
///
/// How this maps to an HTTP response is the caller's decision: rehydrating a
/// stored row converts it into `AppError::Timestamp` (500, logged), while
/// request validation maps it to `AppError::BadRequest` (400).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unable to parse timestamp '{raw}' after {attempts} attempts")]
pub struct MalformedTimestamp {
    /// The input text as received, untrimmed.
    pub raw: String,
    /// Number of layout attempts made before giving up.
    pub attempts: usize,
}
