//! Input module - terminal key events to application commands

pub mod map;

pub use map::{map_key, AppCommand};
