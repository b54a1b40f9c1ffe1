//! Command-line interface.

mod args;
pub mod common;
pub mod generate;
pub mod preview;
pub mod validate;

pub use args::{Cli, Commands, CommonArgs};
