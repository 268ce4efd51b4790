//! In-memory contact store for the contact directory.
//!
//! Provides:
//! - Primary storage keyed by contact ID
//! - Secondary indexes on normalized first name, last name and phone digits
//! - Validated mutations with typed failure reasons
//! - Exact, substring and partial-name search
//!
//! The store is a plain value with no internal locking. Mutations take
//! `&mut self`; callers sharing a store across threads wrap it themselves.

pub mod contact;
pub mod error;
mod index;
pub mod store;

pub use contact::{Contact, ContactId};
pub use error::StoreError;
pub use store::{ContactStore, IndexStats, LoadReport};
