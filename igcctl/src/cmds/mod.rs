pub use ingest::*;
pub use list::*;
pub use track::*;

mod ingest;
mod list;
mod track;
