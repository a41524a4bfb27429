//! Builder style API for hiding and unveiling, the place to start for most users.

pub mod hide;
pub mod shared;
pub mod unveil;

pub use shared::*;
