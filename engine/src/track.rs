//! What we keep about an ingested track.
//!

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;
use serde_with::{DeserializeFromStr, SerializeDisplay};

use igcinfo_formats::{Fix, Track};

use crate::{total_distance, FieldProjection, TrackError};

/// Identifier allocated by the repository, rendered as decimal text.
///
#[derive(
    Clone, Copy, Debug, DeserializeFromStr, Eq, Hash, Ord, PartialEq, PartialOrd, SerializeDisplay,
)]
pub struct TrackId(u64);

impl TrackId {
    pub(crate) fn new(id: u64) -> Self {
        TrackId(id)
    }
}

impl Display for TrackId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Only ASCII digits are accepted, no sign, no spaces.
///
impl FromStr for TrackId {
    type Err = TrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TrackError::InvalidId(s.to_string()));
        }
        let id = s
            .parse::<u64>()
            .map_err(|_| TrackError::InvalidId(s.to_string()))?;
        Ok(TrackId(id))
    }
}

/// A track as stored in the repository.  Never modified once inserted.
///
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StoredTrack {
    /// Allocated at insertion time
    pub id: TrackId,
    /// Where it was fetched from, unique in the repository
    pub url: String,
    /// Fixes in flight order, never empty
    pub points: Vec<Fix>,
    pub pilot: String,
    pub glider_type: String,
    pub glider_id: String,
    /// Flight date from the header
    pub date: NaiveDate,
}

impl StoredTrack {
    pub(crate) fn new(id: TrackId, url: String, track: Track) -> Self {
        let Track { header, fixes } = track;
        StoredTrack {
            id,
            url,
            points: fixes,
            pilot: header.pilot,
            glider_type: header.glider_type,
            glider_id: header.glider_id,
            date: header.date,
        }
    }

    /// Total path length in km.
    ///
    #[inline]
    pub fn track_length(&self) -> f64 {
        total_distance(&self.points)
    }

    /// All queryable fields.
    ///
    #[inline]
    pub fn project(&self) -> FieldProjection {
        FieldProjection::from(self)
    }
}

/// Result of an ingestion as reported to clients.  For a duplicate, `id` is the existing one.
///
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IngestReport {
    pub id: TrackId,
    pub url: String,
}
