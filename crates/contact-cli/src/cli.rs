//! CLI argument parsing for the contact directory.
//!
//! CLI flags override every other config source.

use clap::{Parser, Subcommand, ValueEnum};

/// Contact directory
///
/// Query and edit an in-memory address book loaded from a JSON seed file.
#[derive(Parser, Debug)]
#[command(name = "contacts")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides default ~/.config/contact-directory/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// Seed file of contacts (JSON array)
    #[arg(short, long, global = true)]
    pub seed: Option<String>,

    /// Print contacts as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Save the store back to the seed file after a successful mutation
    #[arg(short, long, global = true)]
    pub write_back: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Directory commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List every contact
    List,

    /// Show the number of contacts
    Count,

    /// Show index sizes
    Stats,

    /// Show one contact
    Get {
        /// Contact ID
        id: String,
    },

    /// Search contacts
    Search {
        #[command(subcommand)]
        by: SearchCommands,
    },

    /// Add a contact
    Add {
        /// First name
        first_name: String,

        /// Last name
        last_name: String,

        /// Contact ID (generated when omitted)
        #[arg(long)]
        id: Option<String>,

        /// Phone number
        #[arg(short, long)]
        phone: Option<String>,

        /// Street address
        #[arg(short, long)]
        address: Option<String>,
    },

    /// Delete a contact
    Delete {
        /// Contact ID
        id: String,
    },

    /// Change one field of a contact
    Update {
        /// Contact ID
        id: String,

        /// Field to change
        #[arg(value_enum)]
        field: UpdateField,

        /// New value
        value: String,
    },
}

/// Search subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum SearchCommands {
    /// Exact first-name match (case and spacing ignored)
    First { name: String },

    /// Exact last-name match (case and spacing ignored)
    Last { name: String },

    /// Phone number match on digits only
    Phone { number: String },

    /// Address substring match
    Address { term: String },

    /// Substring match on first or last name
    Partial { term: String },
}

/// Updatable contact fields
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateField {
    First,
    Last,
    Phone,
    Address,
}
