//! Contact directory CLI library exports.
//!
//! # Modules
//!
//! - `cli`: Command-line argument parsing with clap
//! - `commands`: Command implementations against a `ContactStore`
//! - `seed`: Reading and writing the JSON seed file

pub mod cli;
pub mod commands;
pub mod seed;

pub use cli::{Cli, Commands, SearchCommands, UpdateField};
pub use commands::{execute, run};
