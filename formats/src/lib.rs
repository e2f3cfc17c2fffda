//! Definition of the IGC data format
//!
//! IGC is the flight recorder format defined by the FAI International Gliding Commission.
//! A file is a sequence of single-letter records, one per line.  We only care about two
//! of them:
//!
//! - `H` records carry the header (date, pilot, glider type and registration)
//! - `B` records are the fixes themselves (time, position, altitudes)
//!
//! Everything else (`A`, `I`, `L`, `G`, etc.) is silently skipped.
//!
//! Reference: <https://xp-soaring.github.io/igc_file_format/igc_format_2008.html>
//!

pub use error::*;
pub use igc::*;
pub use track::*;

mod error;
mod igc;
mod track;

pub fn version() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
