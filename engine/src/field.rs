//! Queryable fields of a stored track.
//!
//! This is a closed set: adding a field means adding a variant to `Field`, everything else
//! follows from the exhaustive `match`.
//!

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::EnumString;

use crate::{StoredTrack, TrackError};

/// Field names, matched case-insensitively.
///
#[derive(
    Clone, Copy, Debug, EnumString, Eq, Hash, Ord, PartialEq, PartialOrd, strum::Display, strum::VariantNames,
)]
#[strum(ascii_case_insensitive)]
pub enum Field {
    /// Pilot in charge
    #[strum(to_string = "pilot")]
    Pilot,
    /// Glider type
    #[strum(to_string = "glider")]
    Glider,
    /// Glider registration
    #[strum(to_string = "glider_id")]
    GliderId,
    /// Path length in km, 4 decimals
    #[strum(to_string = "track_length")]
    TrackLength,
    /// Flight date
    #[strum(to_string = "h_date")]
    HDate,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Pilot,
        Field::Glider,
        Field::GliderId,
        Field::TrackLength,
        Field::HDate,
    ];

    /// Field names are `[A-Za-z_]+`, nothing else is ever looked up.
    ///
    pub fn check_syntax(name: &str) -> Result<(), TrackError> {
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic() || c == '_') {
            return Err(TrackError::InvalidField(name.to_string()));
        }
        Ok(())
    }

    /// Check the syntax then look the name up.
    ///
    pub fn parse_name(name: &str) -> Result<Field, TrackError> {
        Field::check_syntax(name)?;
        Field::from_str(name).map_err(|_| TrackError::UnknownField(name.to_string()))
    }

    /// String value of this field for `track`.
    ///
    pub fn value_of(&self, track: &StoredTrack) -> String {
        match self {
            Field::Pilot => track.pilot.clone(),
            Field::Glider => track.glider_type.clone(),
            Field::GliderId => track.glider_id.clone(),
            Field::TrackLength => format!("{:.4}", track.track_length()),
            Field::HDate => track.date.format("%Y-%m-%d").to_string(),
        }
    }
}

/// All fields of a track, computed on demand and never stored.
///
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct FieldProjection {
    pub pilot: String,
    pub glider: String,
    pub glider_id: String,
    pub track_length: String,
    pub h_date: String,
}

impl FieldProjection {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Pilot => &self.pilot,
            Field::Glider => &self.glider,
            Field::GliderId => &self.glider_id,
            Field::TrackLength => &self.track_length,
            Field::HDate => &self.h_date,
        }
    }
}

impl From<&StoredTrack> for FieldProjection {
    fn from(track: &StoredTrack) -> Self {
        FieldProjection {
            pilot: Field::Pilot.value_of(track),
            glider: Field::Glider.value_of(track),
            glider_id: Field::GliderId.value_of(track),
            track_length: Field::TrackLength.value_of(track),
            h_date: Field::HDate.value_of(track),
        }
    }
}

/// Value of the field called `name` for `track`.
///
#[tracing::instrument(skip(track), fields(id = %track.id))]
pub fn resolve_field(track: &StoredTrack, name: &str) -> Result<String, TrackError> {
    let field = Field::parse_name(name)?;
    Ok(field.value_of(track))
}
