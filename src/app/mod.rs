//! Application state and input handling

pub mod state;

pub use state::{App, Tone};
