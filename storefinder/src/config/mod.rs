//! Configuration and dependency wiring for the store finder.

mod dependencies;
mod settings;

pub use dependencies::Dependencies;
pub use settings::{LogFormat, Settings};
