//! Store error types.

use thiserror::Error;

use crate::contact::ContactId;

/// Reasons a store mutation was rejected.
///
/// A rejected mutation never changes the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No contact with this ID is stored
    #[error("Contact not found: {0}")]
    NotFound(ContactId),

    /// A contact with this ID is already stored
    #[error("Duplicate contact ID: {0}")]
    DuplicateId(ContactId),

    /// The normalized phone digits already belong to another contact
    #[error("Phone number {0} is already assigned to another contact")]
    DuplicatePhone(String),

    /// A required argument was blank; holds the field name
    #[error("Invalid argument: {0} must not be blank")]
    InvalidArgument(&'static str),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }

    /// True for either uniqueness violation (ID or phone).
    pub fn is_conflict(&self) -> bool {
        matches!(self, StoreError::DuplicateId(_) | StoreError::DuplicatePhone(_))
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, StoreError::InvalidArgument(_))
    }
}
