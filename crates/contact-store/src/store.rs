//! The contact store: primary storage plus secondary indexes.
//!
//! Every mutation validates first and only then touches state, so a
//! rejected call leaves the store exactly as it was.

use std::collections::{HashMap, HashSet};

use contact_types::{is_blank, normalize_phone, normalize_text};
use tracing::debug;

use crate::contact::{Contact, ContactId};
use crate::error::StoreError;
use crate::index::{ContactIndexes, IndexOp};

/// In-memory directory of contacts.
#[derive(Debug, Default)]
pub struct ContactStore {
    contacts: HashMap<ContactId, Contact>,
    indexes: ContactIndexes,
}

/// Index sizes, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexStats {
    pub contacts: usize,
    pub first_name_keys: usize,
    pub last_name_keys: usize,
    pub phone_keys: usize,
}

/// Outcome of loading a batch of contacts.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Number of contacts added
    pub accepted: usize,
    /// Contacts that were refused, with the reason
    pub rejected: Vec<(ContactId, StoreError)>,
}

fn require(value: &str, field: &'static str) -> Result<(), StoreError> {
    if is_blank(value) {
        return Err(StoreError::InvalidArgument(field));
    }
    Ok(())
}

/// A phone number must carry at least one ASCII digit to be indexable.
fn require_digits(phone_number: &str) -> Result<(), StoreError> {
    if normalize_phone(phone_number).is_empty() {
        return Err(StoreError::InvalidArgument("phone_number"));
    }
    Ok(())
}

impl ContactStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store by adding each contact in order.
    ///
    /// Contacts the store refuses are listed in the report rather than
    /// aborting the load.
    pub fn from_contacts(contacts: impl IntoIterator<Item = Contact>) -> (Self, LoadReport) {
        let mut store = Self::new();
        let mut report = LoadReport::default();
        for contact in contacts {
            let id = contact.contact_id().clone();
            match store.add(contact) {
                Ok(()) => report.accepted += 1,
                Err(e) => report.rejected.push((id, e)),
            }
        }
        (store, report)
    }

    /// Add a new contact.
    ///
    /// Fails on a blank ID, an ID already stored, a phone number with no
    /// digits, or a phone number whose digits already belong to another
    /// contact.
    pub fn add(&mut self, contact: Contact) -> Result<(), StoreError> {
        let id = contact.contact_id();
        if id.is_blank() {
            return Err(StoreError::InvalidArgument("contact_id"));
        }

        if self.contacts.contains_key(id) {
            debug!("Rejected add: contact {} already exists", id);
            return Err(StoreError::DuplicateId(id.clone()));
        }

        if let Some(phone) = contact.phone_number() {
            require_digits(phone)?;
            if self.indexes.phone.owner(phone).is_some() {
                debug!("Rejected add of {}: phone {} already assigned", id, phone);
                return Err(StoreError::DuplicatePhone(normalize_phone(phone)));
            }
        }

        self.indexes.reindex(&contact, IndexOp::Insert);
        debug!("Added contact {}", id);
        self.contacts.insert(id.clone(), contact);
        Ok(())
    }

    /// Remove a contact and every index entry pointing at it.
    pub fn delete(&mut self, contact_id: &str) -> Result<(), StoreError> {
        require(contact_id, "contact_id")?;

        let contact = self
            .contacts
            .remove(contact_id)
            .ok_or_else(|| StoreError::NotFound(ContactId::from(contact_id)))?;

        self.indexes.reindex(&contact, IndexOp::Remove);
        debug!("Deleted contact {}", contact_id);
        Ok(())
    }

    /// Rename a contact, moving it to the new first-name key.
    pub fn update_first_name(
        &mut self,
        contact_id: &str,
        first_name: &str,
    ) -> Result<(), StoreError> {
        require(contact_id, "contact_id")?;
        require(first_name, "first_name")?;

        let contact = self
            .contacts
            .get_mut(contact_id)
            .ok_or_else(|| StoreError::NotFound(ContactId::from(contact_id)))?;

        let id = contact.contact_id().clone();
        self.indexes.first_name.remove(contact.first_name(), &id);
        contact.set_first_name(first_name.to_string());
        self.indexes.first_name.insert(contact.first_name(), &id);

        debug!("Updated first name of {}", id);
        Ok(())
    }

    /// Change a contact's last name, moving it to the new last-name key.
    pub fn update_last_name(
        &mut self,
        contact_id: &str,
        last_name: &str,
    ) -> Result<(), StoreError> {
        require(contact_id, "contact_id")?;
        require(last_name, "last_name")?;

        let contact = self
            .contacts
            .get_mut(contact_id)
            .ok_or_else(|| StoreError::NotFound(ContactId::from(contact_id)))?;

        let id = contact.contact_id().clone();
        self.indexes.last_name.remove(contact.last_name(), &id);
        contact.set_last_name(last_name.to_string());
        self.indexes.last_name.insert(contact.last_name(), &id);

        debug!("Updated last name of {}", id);
        Ok(())
    }

    /// Change a contact's phone number.
    ///
    /// Succeeds when the new digits are free or already belong to this
    /// contact; fails when another contact holds them or the number has no
    /// digits at all.
    pub fn update_phone_number(
        &mut self,
        contact_id: &str,
        phone_number: &str,
    ) -> Result<(), StoreError> {
        require(contact_id, "contact_id")?;
        require(phone_number, "phone_number")?;
        require_digits(phone_number)?;

        let contact = self
            .contacts
            .get_mut(contact_id)
            .ok_or_else(|| StoreError::NotFound(ContactId::from(contact_id)))?;

        if let Some(owner) = self.indexes.phone.owner(phone_number) {
            if owner != contact.contact_id() {
                debug!(
                    "Rejected phone update of {}: number held by {}",
                    contact_id, owner
                );
                return Err(StoreError::DuplicatePhone(normalize_phone(phone_number)));
            }
        }

        // The old key comes from the stored value before it is overwritten
        let id = contact.contact_id().clone();
        if let Some(old) = contact.replace_phone_number(phone_number.to_string()) {
            self.indexes.phone.remove(&old);
        }
        self.indexes.phone.insert(phone_number, &id);

        debug!("Updated phone number of {}", id);
        Ok(())
    }

    /// Change a contact's address. Addresses are not indexed.
    pub fn update_address(&mut self, contact_id: &str, address: &str) -> Result<(), StoreError> {
        require(contact_id, "contact_id")?;
        require(address, "address")?;

        let contact = self
            .contacts
            .get_mut(contact_id)
            .ok_or_else(|| StoreError::NotFound(ContactId::from(contact_id)))?;
        contact.set_address(address.to_string());

        debug!("Updated address of {}", contact_id);
        Ok(())
    }

    /// Look up a contact by ID.
    pub fn get(&self, contact_id: &str) -> Option<&Contact> {
        self.contacts.get(contact_id)
    }

    /// True when a contact with this ID is stored.
    pub fn contains(&self, contact_id: &str) -> bool {
        self.contacts.contains_key(contact_id)
    }

    /// Contacts whose normalized first name equals the normalized query.
    pub fn search_by_first_name(&self, first_name: &str) -> Vec<&Contact> {
        if is_blank(first_name) {
            return Vec::new();
        }
        self.resolve(self.indexes.first_name.get(first_name))
    }

    /// Contacts whose normalized last name equals the normalized query.
    pub fn search_by_last_name(&self, last_name: &str) -> Vec<&Contact> {
        if is_blank(last_name) {
            return Vec::new();
        }
        self.resolve(self.indexes.last_name.get(last_name))
    }

    /// The contact holding these phone digits, if any.
    pub fn search_by_phone_number(&self, phone_number: &str) -> Option<&Contact> {
        if is_blank(phone_number) {
            return None;
        }
        self.indexes
            .phone
            .owner(phone_number)
            .and_then(|id| self.contacts.get(id))
    }

    /// Contacts whose normalized address contains the normalized term.
    ///
    /// Addresses are unindexed, so this scans every contact.
    pub fn search_by_address(&self, term: &str) -> Vec<&Contact> {
        if is_blank(term) {
            return Vec::new();
        }
        let needle = normalize_text(term);
        self.contacts
            .values()
            .filter(|c| {
                c.address()
                    .is_some_and(|address| normalize_text(address).contains(&needle))
            })
            .collect()
    }

    /// Contacts with a first or last name containing the normalized term.
    ///
    /// A contact matching on both names appears once.
    pub fn search_by_name_partial(&self, term: &str) -> HashSet<&Contact> {
        if is_blank(term) {
            return HashSet::new();
        }
        let needle = normalize_text(term);
        self.indexes
            .first_name
            .matching(&needle)
            .chain(self.indexes.last_name.matching(&needle))
            .filter_map(|id| self.contacts.get(id))
            .collect()
    }

    /// All stored contacts, in no particular order.
    pub fn get_all(&self) -> Vec<&Contact> {
        self.contacts.values().collect()
    }

    /// Number of stored contacts.
    pub fn count(&self) -> usize {
        self.contacts.len()
    }

    /// True when no contacts are stored.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Drop every contact and index entry.
    pub fn clear(&mut self) {
        self.contacts.clear();
        self.indexes.clear();
        debug!("Cleared contact store");
    }

    /// Contact count and key count of each index.
    pub fn index_stats(&self) -> IndexStats {
        IndexStats {
            contacts: self.contacts.len(),
            first_name_keys: self.indexes.first_name.key_count(),
            last_name_keys: self.indexes.last_name.key_count(),
            phone_keys: self.indexes.phone.len(),
        }
    }

    /// Resolve IDs to stored contacts, skipping any that no longer resolve.
    fn resolve(&self, ids: &[ContactId]) -> Vec<&Contact> {
        ids.iter().filter_map(|id| self.contacts.get(id)).collect()
    }
}
