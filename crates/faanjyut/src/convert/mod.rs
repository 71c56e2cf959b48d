//! convert module
pub mod annotate;
pub mod pipeline;
pub mod substitute;

/// Re-export the conversion entry points
pub use annotate::annotate;
pub use pipeline::{Converter, Mode};
pub use substitute::substitute;
