// Purpose - external interfaces, format conversions

pub mod converter;
pub mod output;

pub use converter::{to_i32, write_i32};
pub use output::AudioOutput;
