//! Core of `igcinfo`: stored tracks, their identifiers and the queries we can run on them.
//!
//! - `Repository` ingests a track from a URL (through a `TrackParser`), refuses duplicates and
//!   gives back a `TrackId`.  The collection itself is owned by a single actor so that the
//!   duplicate check and the insertion can never interleave.
//! - `total_distance()` computes the path length of a track.
//! - `Field` and `FieldProjection` expose the fixed set of queryable fields.
//!

pub use actors::*;
pub use distance::*;
pub use error::*;
pub use field::*;
pub use parser::*;
pub use repository::*;
pub use track::*;

mod actors;
mod distance;
mod error;
mod field;
mod parser;
mod repository;
mod track;

const NAME: &str = env!("CARGO_PKG_NAME");
const EVERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version() -> String {
    format!("{}/{}", NAME, EVERSION)
}
