//! Library part of the `igcctl` utility.
//!
//! The commands themselves only drive an `igcinfo_engine::Repository`, everything here is about
//! calling it in the right order and displaying the results.
//!

pub use cli::*;
pub use cmds::*;

mod cli;
mod cmds;
