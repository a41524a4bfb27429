//! Thin functions over the builder API, as used by the command line.

mod capacity;
mod hide;
mod unveil;

pub use capacity::*;
pub use hide::*;
pub use unveil::*;
