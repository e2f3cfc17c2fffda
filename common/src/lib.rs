//! This library is there to share some common code amongst all igcinfo modules.
//!

mod config;
mod logging;
mod macros;
mod meta;
mod uptime;

use clap::{crate_name, crate_version};
pub use config::*;
pub use logging::*;
pub use meta::*;
pub use uptime::*;

const NAME: &str = crate_name!();
const VERSION: &str = crate_version!();

pub fn version() -> String {
    format!("{}/{}", NAME, VERSION)
}
