//! Secondary indexes over stored contacts.
//!
//! Keys are normalized values (see `contact_types::normalize`). Callers pass
//! raw field values; normalization happens here so every call site derives
//! keys the same way. Name keys that normalize to the empty string are
//! never stored. Phone numbers are checked for digits by the store before
//! they reach the index.

use std::collections::HashMap;

use contact_types::{normalize_phone, normalize_text};
use tracing::debug;

use crate::contact::{Contact, ContactId};

/// Normalized name -> IDs sharing that name, in insertion order.
#[derive(Debug, Default)]
pub(crate) struct NameIndex {
    entries: HashMap<String, Vec<ContactId>>,
}

impl NameIndex {
    pub(crate) fn insert(&mut self, name: &str, id: &ContactId) {
        let key = normalize_text(name);
        if key.is_empty() {
            return;
        }
        self.entries.entry(key).or_default().push(id.clone());
    }

    /// Remove one occurrence of `id` under `name`, dropping the key once empty.
    pub(crate) fn remove(&mut self, name: &str, id: &ContactId) {
        let key = normalize_text(name);
        let Some(ids) = self.entries.get_mut(&key) else {
            return;
        };
        if let Some(pos) = ids.iter().position(|existing| existing == id) {
            ids.remove(pos);
        }
        if ids.is_empty() {
            self.entries.remove(&key);
        }
    }

    /// IDs stored under the normalized form of `name`.
    pub(crate) fn get(&self, name: &str) -> &[ContactId] {
        self.entries
            .get(&normalize_text(name))
            .map_or(&[], Vec::as_slice)
    }

    /// IDs under every key containing `needle`. `needle` must already be normalized.
    pub(crate) fn matching<'a>(&'a self, needle: &'a str) -> impl Iterator<Item = &'a ContactId> {
        self.entries
            .iter()
            .filter(move |(key, _)| key.contains(needle))
            .flat_map(|(_, ids)| ids.iter())
    }

    #[cfg(test)]
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&String, &Vec<ContactId>)> {
        self.entries.iter()
    }

    pub(crate) fn key_count(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Normalized phone digits -> the single owning ID.
#[derive(Debug, Default)]
pub(crate) struct PhoneIndex {
    entries: HashMap<String, ContactId>,
}

impl PhoneIndex {
    pub(crate) fn owner(&self, phone: &str) -> Option<&ContactId> {
        self.entries.get(&normalize_phone(phone))
    }

    pub(crate) fn insert(&mut self, phone: &str, id: &ContactId) {
        self.entries.insert(normalize_phone(phone), id.clone());
    }

    /// Remove the key derived from `phone`, whoever holds it.
    pub(crate) fn remove(&mut self, phone: &str) -> Option<ContactId> {
        self.entries.remove(&normalize_phone(phone))
    }

    #[cfg(test)]
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&String, &ContactId)> {
        self.entries.iter()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IndexOp {
    Insert,
    Remove,
}

/// All secondary indexes of a store.
#[derive(Debug, Default)]
pub(crate) struct ContactIndexes {
    pub(crate) first_name: NameIndex,
    pub(crate) last_name: NameIndex,
    pub(crate) phone: PhoneIndex,
}

impl ContactIndexes {
    /// Insert or remove every index entry derived from `contact`'s current fields.
    pub(crate) fn reindex(&mut self, contact: &Contact, op: IndexOp) {
        let id = contact.contact_id();
        match op {
            IndexOp::Insert => {
                self.first_name.insert(contact.first_name(), id);
                self.last_name.insert(contact.last_name(), id);
                if let Some(phone) = contact.phone_number() {
                    self.phone.insert(phone, id);
                }
            }
            IndexOp::Remove => {
                self.first_name.remove(contact.first_name(), id);
                self.last_name.remove(contact.last_name(), id);
                if let Some(phone) = contact.phone_number() {
                    self.phone.remove(phone);
                }
            }
        }
        debug!("Reindexed contact {} ({:?})", id, op);
    }

    pub(crate) fn clear(&mut self) {
        self.first_name.clear();
        self.last_name.clear();
        self.phone.clear();
    }
}
