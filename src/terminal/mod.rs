//! Shared terminal utilities.
//!
//! Box drawing and styled messages.

mod output;

pub use output::*;
