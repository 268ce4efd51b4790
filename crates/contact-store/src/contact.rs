//! Contact record and its identifier.
//!
//! A contact is identified by its ID alone: two records with the same ID
//! are the same entity whatever their other fields hold.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Unique, immutable contact identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(String);

impl ContactId {
    /// Generate a fresh ULID-based identifier.
    pub fn generate() -> Self {
        Self(ulid::Ulid::new().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the ID is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        contact_types::is_blank(&self.0)
    }
}

impl From<&str> for ContactId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ContactId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for ContactId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A contact record.
///
/// Fields are read through accessors. Once a contact is inside a
/// [`ContactStore`](crate::ContactStore) it only changes through the
/// store's update operations, which keep the indexes in step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    contact_id: ContactId,

    #[serde(default)]
    first_name: String,

    #[serde(default)]
    last_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    phone_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    address: Option<String>,
}

impl Contact {
    /// Create a contact with no phone number or address.
    pub fn new(
        contact_id: impl Into<ContactId>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            contact_id: contact_id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone_number: None,
            address: None,
        }
    }

    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn contact_id(&self) -> &ContactId {
        &self.contact_id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub(crate) fn set_first_name(&mut self, first_name: String) {
        self.first_name = first_name;
    }

    pub(crate) fn set_last_name(&mut self, last_name: String) {
        self.last_name = last_name;
    }

    /// Replace the phone number, returning the previous one.
    pub(crate) fn replace_phone_number(&mut self, phone_number: String) -> Option<String> {
        self.phone_number.replace(phone_number)
    }

    pub(crate) fn set_address(&mut self, address: String) {
        self.address = Some(address);
    }
}

impl PartialEq for Contact {
    fn eq(&self, other: &Self) -> bool {
        self.contact_id == other.contact_id
    }
}

impl Eq for Contact {}

impl Hash for Contact {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.contact_id.hash(state);
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} {} | {} | {}",
            self.contact_id,
            self.first_name,
            self.last_name,
            self.phone_number.as_deref().unwrap_or("-"),
            self.address.as_deref().unwrap_or("-"),
        )
    }
}
