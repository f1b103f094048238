use super::*;
use crate::blog::BlogPosts;
use crate::schema::{HomeContent, ServicesContent};
use crate::sections::SectionOrder;
use crate::theme::ThemeColors;

fn store() -> (ContentStore<MemoryStorage>, MemoryStorage) {
    let backend = MemoryStorage::new();
    (ContentStore::new(backend.clone()), backend)
}

#[test]
fn load_absent_returns_default() {
    let (store, backend) = store();
    assert_eq!(store.load::<HomeContent>(), HomeContent::default());
    assert_eq!(store.load::<BlogPosts>(), BlogPosts::default());
    assert!(backend.is_empty());
}

#[test]
fn save_then_load_returns_saved_value() {
    let (store, backend) = store();
    let mut home = HomeContent::default();
    home.headline.main = "Own Your Niche".to_owned();
    store.save(&home).unwrap();

    assert_eq!(store.load::<HomeContent>(), home);
    assert!(backend.raw("homeContent").unwrap().contains("Own Your Niche"));
}

#[test]
fn domains_do_not_interfere() {
    let (store, _) = store();
    let mut services = ServicesContent::default();
    services.heading = "What We Do".to_owned();
    store.save(&services).unwrap();

    assert_eq!(store.load::<HomeContent>(), HomeContent::default());
    assert_eq!(store.load::<ServicesContent>().heading, "What We Do");
}

#[test]
fn malformed_json_falls_back_to_default() {
    let (store, backend) = store();
    backend.insert_raw("homeContent", "{not json");
    backend.insert_raw("sectionOrder", "\"just a string\"");

    assert_eq!(store.load::<HomeContent>(), HomeContent::default());
    assert_eq!(store.load::<SectionOrder>(), SectionOrder::default());
    // The corrupt value stays until the next save.
    assert_eq!(backend.raw("homeContent").as_deref(), Some("{not json"));
}

#[test]
fn partial_object_keeps_present_fields() {
    let (store, backend) = store();
    backend.insert_raw("themeColors", r##"{"primary":"#123456"}"##);

    let theme = store.load::<ThemeColors>();
    assert_eq!(theme.primary, "#123456");
    assert_eq!(theme.secondary, ThemeColors::default().secondary);
}

#[test]
fn reset_writes_default_and_is_idempotent() {
    let (store, backend) = store();
    let mut home = HomeContent::default();
    home.subtitle = "changed".to_owned();
    store.save(&home).unwrap();

    store.reset::<HomeContent>().unwrap();
    let once = backend.raw("homeContent");
    store.reset::<HomeContent>().unwrap();

    assert_eq!(backend.raw("homeContent"), once);
    assert_eq!(store.load::<HomeContent>(), HomeContent::default());
    assert!(store.is_customized(ContentDomain::Home));
}

#[test]
fn is_customized_tracks_presence() {
    let (store, _) = store();
    assert!(!store.is_customized(ContentDomain::Theme));
    store.save(&ThemeColors::default()).unwrap();
    assert!(store.is_customized(ContentDomain::Theme));
    assert!(store.load_raw(ContentDomain::Theme).is_some());
    assert!(store.load_raw(ContentDomain::Footer).is_none());
}

#[test]
fn unavailable_backend_reads_defaults_and_rejects_writes() {
    let store = ContentStore::new(MemoryStorage::unavailable());
    assert_eq!(store.load::<HomeContent>(), HomeContent::default());
    assert_eq!(store.save(&HomeContent::default()), Err(StoreError::Unavailable));
    assert!(!store.is_customized(ContentDomain::Home));
}

#[test]
fn quota_exceeded_keeps_previous_value() {
    let backend = MemoryStorage::with_quota(2_000);
    let store = ContentStore::new(backend.clone());
    let home = HomeContent::default();
    store.save(&home).unwrap();

    let mut big = home.clone();
    big.subtitle = "x".repeat(4_000);
    let err = store.save(&big).unwrap_err();

    assert_eq!(err, StoreError::QuotaExceeded { key: "homeContent".to_owned() });
    assert_eq!(store.load::<HomeContent>(), home);
}

#[test]
fn quota_ignores_the_value_being_replaced() {
    let backend = MemoryStorage::with_quota(30);
    backend.set_item("k", &"a".repeat(20)).unwrap();
    assert!(backend.set_item("k", &"b".repeat(25)).is_ok());
    assert!(backend.set_item("other", &"c".repeat(10)).is_err());
}
