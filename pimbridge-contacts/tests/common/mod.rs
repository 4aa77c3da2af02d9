//! Shared test helpers for contacts tests.

#![allow(dead_code)]

use std::sync::Arc;

use pimbridge_contacts::{Contacts, ContactsConfig};
use pimbridge_model::{Contact, ContactAddress, ContactField, ContactId, ContactName};
use pimbridge_store::{
    BoundedContactRecord, ContactStore, FilterExpression, MemoryContactStore, PhotoStore,
    ResultLimit, SortSpec, StoreError, StoreResult,
};

/// Service over a fresh in-memory store, which also serves as photo store.
pub fn memory_service() -> (Contacts, Arc<MemoryContactStore>) {
    memory_service_with(ContactsConfig::default())
}

pub fn memory_service_with(config: ContactsConfig) -> (Contacts, Arc<MemoryContactStore>) {
    let store = Arc::new(MemoryContactStore::new());
    let contacts = Contacts::new(store.clone(), store.clone(), config);
    (contacts, store)
}

/// Service whose store fails every call.
pub fn failing_service() -> Contacts {
    let store = Arc::new(FailingStore);
    Contacts::new(store.clone(), store, ContactsConfig::default())
}

pub struct FailingStore;

impl ContactStore for FailingStore {
    fn find(
        &self,
        _filter: Option<&FilterExpression>,
        _sort: Option<&SortSpec>,
        _limit: ResultLimit,
    ) -> StoreResult<Vec<BoundedContactRecord>> {
        Err(StoreError::Backend("store offline".into()))
    }

    fn persist(&self, _record: BoundedContactRecord) -> StoreResult<BoundedContactRecord> {
        Err(StoreError::Backend("store offline".into()))
    }

    fn remove(&self, _uid: &ContactId) -> StoreResult<()> {
        Err(StoreError::Backend("store offline".into()))
    }
}

impl PhotoStore for FailingStore {
    fn set_picture(&self, _uid: &ContactId, _encoding: Option<&str>, _value: &str) -> StoreResult<()> {
        Err(StoreError::Photo("picture rejected".into()))
    }
}

pub fn phone(kind: &str, value: &str) -> ContactField {
    ContactField::typed(kind, value)
}

pub fn address(kind: Option<&str>, street: &str, city: &str) -> ContactAddress {
    ContactAddress {
        kind: kind.map(str::to_string),
        street_address: Some(street.into()),
        locality: Some(city.into()),
        ..ContactAddress::default()
    }
}

/// A contact with a name, two phones, one email and one address.
pub fn jane() -> Contact {
    Contact {
        display_name: Some("Jane".into()),
        name: Some(ContactName {
            given_name: Some("Jane".into()),
            family_name: Some("Doe".into()),
            honorific_prefix: Some("Dr.".into()),
            ..ContactName::default()
        }),
        phone_numbers: Some(vec![phone("home", "555-0100"), phone("mobile", "555-0199")]),
        emails: Some(vec![ContactField::untyped("jane@example.com")]),
        addresses: Some(vec![address(Some("home"), "1 Main St", "Springfield")]),
        note: Some("met at the conference".into()),
        ..Contact::default()
    }
}
