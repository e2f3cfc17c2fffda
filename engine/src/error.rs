use thiserror::Error;

use crate::TrackId;

/// Everything the repository and the queries can report.
///
/// - `Parse`: the source could not be fetched or decoded
/// - `Duplicate`: not really a failure, the URL is already stored under `id`
/// - `NotFound`, `UnknownField`: nothing matches
/// - `InvalidId`, `InvalidField`: malformed input, rejected before any lookup
/// - `Store`: the actor owning the tracks is gone
///
#[derive(Debug, Error, PartialEq)]
pub enum TrackError {
    #[error("Can not get track from {0}: {1}")]
    Parse(String, String),
    #[error("Track from {url} already stored as {id}")]
    Duplicate { id: TrackId, url: String },
    #[error("Track {0} not found")]
    NotFound(TrackId),
    #[error("Field {0} not found")]
    UnknownField(String),
    #[error("Invalid track id {0:?}")]
    InvalidId(String),
    #[error("Invalid field name {0:?}")]
    InvalidField(String),
    #[error("Track store unavailable: {0}")]
    Store(String),
}

impl TrackError {
    /// Nothing matched the query.
    ///
    pub fn is_not_found(&self) -> bool {
        matches!(self, TrackError::NotFound(_) | TrackError::UnknownField(_))
    }

    /// Input was rejected before looking anything up.
    ///
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, TrackError::InvalidId(_) | TrackError::InvalidField(_))
    }
}
