//! Contact directory CLI
//!
//! Loads a seed file of contacts into an in-memory store and runs one
//! query or mutation against it.
//!
//! # Usage
//!
//! ```bash
//! contacts [--seed FILE] list
//! contacts search first Kevin
//! contacts --write-back update 1111111111 phone "555-0100"
//! ```
//!
//! # Configuration
//!
//! Configuration is loaded in order (later sources override earlier):
//! 1. Built-in defaults
//! 2. Config file (~/.config/contact-directory/config.toml)
//! 3. Environment variables (CONTACTS_*)
//! 4. CLI flags

use anyhow::Result;
use clap::Parser;

use contact_cli::{run, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}
