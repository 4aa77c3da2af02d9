use pimbridge_model::ContactId;
use pimbridge_store::{
    AddressPart, BoundedContactRecord, ContactStore, FilterExpression, MemoryContactStore,
    NativeAddress, NativeField, PhotoStore, ResultLimit, SortOrder, SortSpec, StoreError,
};
use pretty_assertions::assert_eq;

fn make_record(first: &str, last: &str) -> BoundedContactRecord {
    BoundedContactRecord {
        first_name: first.into(),
        last_name: last.into(),
        ..BoundedContactRecord::default()
    }
}

fn seeded() -> MemoryContactStore {
    let store = MemoryContactStore::new();
    store.persist(make_record("Bob", "Smith")).unwrap();
    store.persist(make_record("Alice", "Jones")).unwrap();
    store.persist(make_record("Carol", "Bobson")).unwrap();
    store
}

// ── Persist ──────────────────────────────────────────────────────

#[test]
fn persist_assigns_identity() {
    let store = MemoryContactStore::new();
    let saved = store.persist(make_record("Bob", "Smith")).unwrap();
    assert!(saved.uid.is_some());
    assert_eq!(store.len().unwrap(), 1);
}

#[test]
fn persist_with_identity_overwrites() {
    let store = MemoryContactStore::new();
    let mut saved = store.persist(make_record("Bob", "Smith")).unwrap();
    let uid = saved.uid.clone().unwrap();

    saved.first_name = "Robert".into();
    store.persist(saved).unwrap();

    assert_eq!(store.len().unwrap(), 1);
    let found = store.find_by_uid(&uid).unwrap().unwrap();
    assert_eq!(found.first_name, "Robert");
}

#[test]
fn empty_identity_is_replaced() {
    let store = MemoryContactStore::new();
    let record = BoundedContactRecord {
        uid: Some(ContactId::new("")),
        ..BoundedContactRecord::default()
    };
    let saved = store.persist(record).unwrap();
    assert!(!saved.uid.unwrap().is_empty());
}

// ── Lookup and removal ───────────────────────────────────────────

#[test]
fn find_by_uid_missing_is_none() {
    let store = seeded();
    assert!(store.find_by_uid(&ContactId::new("nope")).unwrap().is_none());
}

#[test]
fn remove_deletes_record() {
    let store = MemoryContactStore::new();
    let uid = store.persist(make_record("Bob", "Smith")).unwrap().uid.unwrap();
    store.remove(&uid).unwrap();
    assert!(store.is_empty().unwrap());
}

#[test]
fn remove_missing_is_not_found() {
    let store = MemoryContactStore::new();
    let err = store.remove(&ContactId::new("ghost")).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == "ghost"));
}

// ── Find ─────────────────────────────────────────────────────────

#[test]
fn find_without_filter_returns_everything() {
    let store = seeded();
    let all = store.find(None, None, ResultLimit::Unbounded).unwrap();
    assert_eq!(all.len(), 3);
}

#[test]
fn find_respects_limit() {
    let store = seeded();
    let one = store.find(None, None, ResultLimit::AtMost(1)).unwrap();
    assert_eq!(one.len(), 1);
}

#[test]
fn regex_must_match_whole_value() {
    let store = seeded();
    let filter = FilterExpression::regex(NativeField::FirstName, "Bo");
    assert!(store.find(Some(&filter), None, ResultLimit::Unbounded).unwrap().is_empty());

    let filter = FilterExpression::regex(NativeField::FirstName, "Bo.*");
    let found = store.find(Some(&filter), None, ResultLimit::Unbounded).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].first_name, "Bob");
}

#[test]
fn regex_is_case_sensitive() {
    let store = seeded();
    let filter = FilterExpression::regex(NativeField::FirstName, ".*bob.*");
    assert!(store.find(Some(&filter), None, ResultLimit::Unbounded).unwrap().is_empty());
}

#[test]
fn or_matches_either_side() {
    let store = seeded();
    let filter = FilterExpression::regex(NativeField::FirstName, ".*[bB][oO][bB].*")
        .or(FilterExpression::regex(NativeField::LastName, ".*[bB][oO][bB].*"));
    let mut names: Vec<_> = store
        .find(Some(&filter), None, ResultLimit::Unbounded)
        .unwrap()
        .into_iter()
        .map(|r| r.first_name)
        .collect();
    names.sort();
    assert_eq!(names, vec!["Bob", "Carol"]);
}

#[test]
fn equality_on_uid() {
    let store = seeded();
    let target = store.persist(make_record("Dan", "Brown")).unwrap();
    let uid = target.uid.clone().unwrap();
    let filter = FilterExpression::equals(NativeField::Uid, uid.as_str());
    let found = store.find(Some(&filter), None, ResultLimit::Unbounded).unwrap();
    assert_eq!(found, vec![target]);
}

#[test]
fn categories_match_any_label() {
    let store = MemoryContactStore::new();
    store
        .persist(BoundedContactRecord {
            categories: vec!["family".into(), "Work".into()],
            ..BoundedContactRecord::default()
        })
        .unwrap();
    let filter = FilterExpression::regex(NativeField::Categories, ".*[wW][oO][rR][kK].*");
    assert_eq!(store.find(Some(&filter), None, ResultLimit::Unbounded).unwrap().len(), 1);
}

#[test]
fn absent_address_never_matches() {
    let store = MemoryContactStore::new();
    store
        .persist(BoundedContactRecord {
            home_address: Some(NativeAddress {
                city: "Springfield".into(),
                ..NativeAddress::default()
            }),
            ..BoundedContactRecord::default()
        })
        .unwrap();
    let home = FilterExpression::regex(NativeField::HomeAddress(AddressPart::City), ".*field.*");
    let work = FilterExpression::regex(NativeField::WorkAddress(AddressPart::City), ".*");
    assert_eq!(store.find(Some(&home), None, ResultLimit::Unbounded).unwrap().len(), 1);
    assert!(store.find(Some(&work), None, ResultLimit::Unbounded).unwrap().is_empty());
}

#[test]
fn invalid_pattern_is_reported() {
    let store = seeded();
    let filter = FilterExpression::regex(NativeField::Note, "([unclosed");
    let err = store.find(Some(&filter), None, ResultLimit::Unbounded).unwrap_err();
    assert!(matches!(err, StoreError::InvalidFilter(_)));
}

#[test]
fn sort_orders_results() {
    let store = seeded();
    let asc = SortSpec {
        field: NativeField::LastName,
        order: SortOrder::Ascending,
    };
    let names: Vec<_> = store
        .find(None, Some(&asc), ResultLimit::Unbounded)
        .unwrap()
        .into_iter()
        .map(|r| r.last_name)
        .collect();
    assert_eq!(names, vec!["Bobson", "Jones", "Smith"]);

    let desc = SortSpec {
        order: SortOrder::Descending,
        ..asc
    };
    let first = store.find(None, Some(&desc), ResultLimit::AtMost(1)).unwrap();
    assert_eq!(first[0].last_name, "Smith");
}

// ── Default lookup through find ──────────────────────────────────

/// Store that only implements the required methods, exercising the
/// default identity lookup.
struct FindOnly(MemoryContactStore);

impl ContactStore for FindOnly {
    fn find(
        &self,
        filter: Option<&FilterExpression>,
        sort: Option<&SortSpec>,
        limit: ResultLimit,
    ) -> pimbridge_store::StoreResult<Vec<BoundedContactRecord>> {
        self.0.find(filter, sort, limit)
    }

    fn persist(
        &self,
        record: BoundedContactRecord,
    ) -> pimbridge_store::StoreResult<BoundedContactRecord> {
        self.0.persist(record)
    }

    fn remove(&self, uid: &ContactId) -> pimbridge_store::StoreResult<()> {
        self.0.remove(uid)
    }
}

#[test]
fn default_find_by_uid_uses_equality_filter() {
    let store = FindOnly(seeded());
    let saved = store.persist(make_record("Eve", "Adams")).unwrap();
    let uid = saved.uid.clone().unwrap();
    assert_eq!(store.find_by_uid(&uid).unwrap(), Some(saved));
    assert_eq!(store.find_by_uid(&ContactId::new("")).unwrap(), None);
}

// ── Photos ───────────────────────────────────────────────────────

#[test]
fn set_picture_stores_base64() {
    let store = MemoryContactStore::new();
    let uid = store.persist(make_record("Bob", "Smith")).unwrap().uid.unwrap();
    store.set_picture(&uid, Some("base64"), "iVBORw0KGgo=").unwrap();
    assert_eq!(store.find_by_uid(&uid).unwrap().unwrap().picture, "iVBORw0KGgo=");
}

#[test]
fn set_picture_rejects_unsupported_encoding() {
    let store = MemoryContactStore::new();
    let uid = store.persist(make_record("Bob", "Smith")).unwrap().uid.unwrap();
    let err = store
        .set_picture(&uid, Some("url"), "http://example.com/p.png")
        .unwrap_err();
    assert!(matches!(err, StoreError::Photo(_)));
    assert!(store.find_by_uid(&uid).unwrap().unwrap().picture.is_empty());
}

#[test]
fn set_picture_for_missing_record() {
    let store = MemoryContactStore::new();
    let err = store
        .set_picture(&ContactId::new("ghost"), None, "abcd")
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}
