pub mod timestamp;
pub mod wire;

pub use timestamp::{Timestamp, is_unset, unset};
pub use wire::{TimestampParseError, WIRE_FORMAT};
