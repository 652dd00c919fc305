// Command-line front end
mod commands;
pub mod render;

pub use commands::{Cli, Commands, run};
