//! module for all actors in the engine.
//!

pub use tracks::*;

mod tracks;
