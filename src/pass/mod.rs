//! Password generation and output.

mod budget;
pub mod charset;
mod generate;
mod length;
pub mod output;

use thiserror::Error;

pub use budget::Budget;
pub use generate::{generate, generate_spec};
pub use length::LengthSpec;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(
        "Invalid length: {length}. Length must be between {} and {}.",
        LengthSpec::MIN,
        LengthSpec::MAX
    )]
    InvalidLength { length: usize },

    #[error("Invalid number: {0}")]
    NotANumber(String),
}
