//! Config module

mod constants;
mod env;

pub use constants::{DEFAULT_BIND_ADDR, DEFAULT_MAX_LINE_WEIGHT, MAX_TEXT_LENGTH};
pub use env::Config;
