//! Directory behavior tests across the public store API.
//!
//! Each test drives a store through a realistic sequence of operations and
//! checks what callers can observe: lookups, searches and counts.

use pretty_assertions::assert_eq;

use contact_store::{Contact, ContactStore, StoreError};
use e2e_tests::{sample_contacts, sorted_ids};

fn sample_store() -> ContactStore {
    let (store, report) = ContactStore::from_contacts(sample_contacts());
    assert_eq!(report.accepted, 3);
    store
}

#[test]
fn test_shared_first_name_returns_both_contacts() {
    let store = sample_store();

    let results = store.search_by_first_name("Kevin");
    assert_eq!(results.len(), 2);
    assert_eq!(sorted_ids(results), vec!["1111111111", "2222222222"]);
}

#[test]
fn test_added_contact_is_retrievable() {
    let mut store = ContactStore::new();
    let contact = Contact::new("4444444444", "Grace", "Hopper")
        .with_phone_number("+1 (202) 555-0143")
        .with_address("1 Navy Yard");

    store.add(contact.clone()).unwrap();
    let stored = store.get("4444444444").unwrap();
    assert_eq!(stored, &contact);
    assert_eq!(stored.phone_number(), Some("+1 (202) 555-0143"));
}

#[test]
fn test_rejected_adds_leave_store_unchanged() {
    let mut store = sample_store();

    let dup_id = Contact::new("1111111111", "Other", "Person").with_phone_number("111");
    assert_eq!(
        store.add(dup_id).unwrap_err(),
        StoreError::DuplicateId("1111111111".into())
    );

    let dup_phone = Contact::new("9", "Other", "Person").with_phone_number("555 555 5555");
    assert_eq!(
        store.add(dup_phone).unwrap_err(),
        StoreError::DuplicatePhone("5555555555".to_string())
    );

    assert_eq!(store.count(), 3);
    assert!(store.search_by_first_name("other").is_empty());
    assert!(store.search_by_phone_number("111").is_none());
    assert!(store.get("9").is_none());
}

#[test]
fn test_deleted_contact_disappears_from_every_search() {
    let mut store = sample_store();
    store.delete("2222222222").unwrap();

    assert!(store.get("2222222222").is_none());
    assert_eq!(sorted_ids(store.search_by_first_name("kevin")), vec!["1111111111"]);
    assert!(store.search_by_last_name("smith").is_empty());
    assert!(store.search_by_phone_number("0987654321").is_none());
    assert!(store.search_by_address("oak").is_empty());
    assert!(store.search_by_name_partial("smi").is_empty());

    // The freed phone number can be reused
    store
        .add(Contact::new("5", "Zoe", "Smith").with_phone_number("098.765.4321"))
        .unwrap();
    assert_eq!(
        store.search_by_phone_number("0987654321").map(|c| c.first_name()),
        Some("Zoe")
    );
}

#[test]
fn test_rename_moves_contact_between_searches() {
    let mut store = sample_store();
    store.update_first_name("1111111111", "John").unwrap();

    assert_eq!(sorted_ids(store.search_by_first_name("kevin")), vec!["2222222222"]);
    assert_eq!(
        sorted_ids(store.search_by_first_name("JOHN")),
        vec!["1111111111", "3333333333"]
    );

    let renamed = store.get("1111111111").unwrap();
    assert_eq!(renamed.last_name(), "Caverly");
    assert_eq!(renamed.phone_number(), Some("1234567890"));
    assert_eq!(renamed.address(), Some("123 Main St"));
    assert_eq!(store.count(), 3);
}

#[test]
fn test_phone_reassignment_rules() {
    let mut store = sample_store();

    // Held by another live contact
    let err = store.update_phone_number("1111111111", "555-555-5555").unwrap_err();
    assert!(err.is_conflict());
    assert_eq!(store.get("1111111111").unwrap().phone_number(), Some("1234567890"));

    // Own number in a different format
    store.update_phone_number("1111111111", "123 456 7890").unwrap();
    assert_eq!(
        store.search_by_phone_number("1234567890").map(|c| c.contact_id().as_str()),
        Some("1111111111")
    );

    // Free number
    store.update_phone_number("1111111111", "2025550143").unwrap();
    assert!(store.search_by_phone_number("1234567890").is_none());
    assert_eq!(
        store.search_by_phone_number("(202) 555-0143").map(|c| c.contact_id().as_str()),
        Some("1111111111")
    );
}

#[test]
fn test_partial_search_returns_each_contact_once() {
    let mut store = sample_store();
    store.add(Contact::new("6", "Dora", "Doe")).unwrap();

    // "do" hits both names of contact 6 and the last name of contact 3
    let results = store.search_by_name_partial("DO");
    assert_eq!(sorted_ids(results), vec!["3333333333", "6"]);

    assert!(store.search_by_name_partial("zzz").is_empty());
}

#[test]
fn test_address_search_scans_all_contacts() {
    let mut store = sample_store();
    store.update_address("3333333333", "12  Main   Street").unwrap();

    assert_eq!(
        sorted_ids(store.search_by_address("main st")),
        vec!["1111111111", "3333333333"]
    );
    assert_eq!(sorted_ids(store.search_by_address(" 456 ")), vec!["2222222222"]);
}

#[test]
fn test_count_follows_successful_adds_and_deletes() {
    let mut store = ContactStore::new();
    let mut adds = 0;
    let mut deletes = 0;

    let mut attempt_add = |store: &mut ContactStore, contact: Contact| {
        if store.add(contact).is_ok() {
            adds += 1;
        }
    };
    for contact in sample_contacts() {
        attempt_add(&mut store, contact);
    }
    attempt_add(&mut store, Contact::new("1111111111", "Dup", "Id"));
    attempt_add(&mut store, Contact::new(" ", "Blank", "Id"));
    assert_eq!(store.count(), 3);

    for id in ["3333333333", "3333333333", "", "nope", "1111111111"] {
        if store.delete(id).is_ok() {
            deletes += 1;
        }
        assert_eq!(store.count(), adds - deletes);
    }
    assert_eq!(store.count(), 1);
    assert_eq!(sorted_ids(store.get_all()), vec!["2222222222"]);
}

#[test]
fn test_all_failure_reasons_are_distinguishable() {
    let mut store = sample_store();

    assert!(matches!(
        store.update_last_name("missing", "X"),
        Err(StoreError::NotFound(_))
    ));
    assert!(matches!(
        store.add(Contact::new("1111111111", "A", "B")),
        Err(StoreError::DuplicateId(_))
    ));
    assert!(matches!(
        store.update_phone_number("3333333333", "1234567890"),
        Err(StoreError::DuplicatePhone(_))
    ));
    assert!(matches!(
        store.update_address("3333333333", "   "),
        Err(StoreError::InvalidArgument("address"))
    ));
}

#[test]
fn test_reads_on_unknown_ids_never_fail() {
    let store = sample_store();

    assert!(store.get("unknown").is_none());
    assert!(store.get("").is_none());
    assert!(store.search_by_first_name("nobody").is_empty());
    assert!(store.search_by_phone_number("000").is_none());
}
