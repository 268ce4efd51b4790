//! End-to-end test infrastructure for the contact directory.
//!
//! Provides a shared TestHarness and sample data for tests covering the
//! seed-file -> store -> command pipeline.

use std::path::PathBuf;

use contact_cli::seed::{read_seed, write_seed};
use contact_store::{Contact, ContactStore, LoadReport};

/// Shared test harness for E2E tests.
///
/// Owns a temp directory holding a seed file.
pub struct TestHarness {
    /// Keeps temp dir alive for the lifetime of the harness
    pub _temp_dir: tempfile::TempDir,
    /// Path of the JSON seed file (may not exist yet)
    pub seed_path: PathBuf,
}

impl TestHarness {
    /// Create a new test harness with an empty temp directory.
    pub fn new() -> Self {
        let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let seed_path = temp_dir.path().join("contacts.json");
        Self {
            _temp_dir: temp_dir,
            seed_path,
        }
    }

    /// Create a harness whose seed file holds `contacts`.
    pub fn with_seed(contacts: &[Contact]) -> Self {
        let harness = Self::new();
        let refs: Vec<&Contact> = contacts.iter().collect();
        write_seed(&harness.seed_path, &refs).expect("Failed to write seed file");
        harness
    }

    /// Load the seed file into a fresh store.
    pub fn load_store(&self) -> (ContactStore, LoadReport) {
        let contacts = read_seed(&self.seed_path).expect("Failed to read seed file");
        ContactStore::from_contacts(contacts)
    }

    /// Persist a store back to the seed file.
    pub fn save_store(&self, store: &ContactStore) {
        write_seed(&self.seed_path, &store.get_all()).expect("Failed to write seed file");
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Three contacts, two of them named Kevin.
pub fn sample_contacts() -> Vec<Contact> {
    vec![
        Contact::new("1111111111", "Kevin", "Caverly")
            .with_phone_number("1234567890")
            .with_address("123 Main St"),
        Contact::new("2222222222", "Kevin", "Smith")
            .with_phone_number("0987654321")
            .with_address("456 Oak St"),
        Contact::new("3333333333", "John", "Doe")
            .with_phone_number("5555555555")
            .with_address("789 Pine St"),
    ]
}

/// Sorted IDs of a result set, for order-independent comparison.
pub fn sorted_ids<'a>(contacts: impl IntoIterator<Item = &'a Contact>) -> Vec<String> {
    let mut ids: Vec<String> = contacts
        .into_iter()
        .map(|c| c.contact_id().to_string())
        .collect();
    ids.sort();
    ids
}
