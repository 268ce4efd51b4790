//! # contact-types
//!
//! Shared types for the contact directory.
//!
//! This crate defines the pieces every other crate agrees on:
//! - Normalization: canonical comparison keys for names, addresses and phones
//! - Settings: layered configuration for the `contacts` binary
//! - Errors: configuration failures
//!
//! ## Usage
//!
//! ```rust
//! use contact_types::{normalize_phone, normalize_text};
//!
//! assert_eq!(normalize_text("  Mary   ANN "), "mary ann");
//! assert_eq!(normalize_phone("(555) 010-2000"), "5550102000");
//! ```

pub mod config;
pub mod error;
pub mod normalize;

pub use config::Settings;
pub use error::ContactsError;
pub use normalize::{is_blank, normalize_phone, normalize_text};
