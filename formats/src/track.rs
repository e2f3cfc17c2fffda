use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One GPS fix from a `B` record.
///
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Fix {
    /// timestamp (header date + time of fix)
    pub time: DateTime<Utc>,
    /// Latitude in decimal degrees, negative is South
    pub latitude: f64,
    /// Longitude in decimal degrees, negative is West
    pub longitude: f64,
    /// GNSS altitude in meters, pressure altitude if the receiver gave none
    pub elevation: f64,
    /// Barometric altitude in meters (ICAO ISA)
    pub pressure_alt: i32,
    /// `A` (3D fix) or `V` (2D or no fix)
    pub validity: Validity,
}

/// Fix validity flag
///
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize, strum::Display)]
pub enum Validity {
    /// 3D fix
    #[strum(to_string = "A")]
    A,
    /// 2D fix or no GPS data
    #[default]
    #[strum(to_string = "V")]
    V,
}

/// What we keep from the `H` records.
///
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Header {
    /// Pilot in charge (HFPLT)
    pub pilot: String,
    /// Glider model (HFGTY)
    pub glider_type: String,
    /// Registration or competition id (HFGID)
    pub glider_id: String,
    /// Flight date (HFDTE)
    pub date: NaiveDate,
}

/// A complete parsed IGC file.
///
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Track {
    pub header: Header,
    /// Fixes, in flight order
    pub fixes: Vec<Fix>,
}
