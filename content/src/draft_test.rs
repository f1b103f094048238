use super::*;
use crate::lens;
use crate::schema::HomeContent;
use crate::store::MemoryStorage;

#[test]
fn load_seeds_clean_draft() {
    let store = ContentStore::new(MemoryStorage::new());
    let draft = Draft::<HomeContent>::load(&store);
    assert_eq!(draft.value(), &HomeContent::default());
    assert!(!draft.is_dirty());
}

#[test]
fn set_returns_new_draft_and_leaves_old_one() {
    let draft = Draft::<HomeContent>::default();
    let roi = lens!(HomeContent, stats.roi);
    let edited = draft.set(roi, "900%".to_owned());

    assert_eq!(edited.get(roi), "900%");
    assert!(edited.is_dirty());
    assert_eq!(draft.get(roi), "500%");
    assert!(!draft.is_dirty());
}

#[test]
fn setting_same_value_stays_clean() {
    let draft = Draft::<HomeContent>::default();
    let edited = draft.set(lens!(HomeContent, stats.roi), "500%".to_owned());
    assert!(!edited.is_dirty());
}

#[test]
fn try_with_propagates_refusal() {
    let draft = Draft::<HomeContent>::default();
    let result: Result<Draft<HomeContent>, &str> = draft.try_with(|_| Err("refused"));
    assert_eq!(result.unwrap_err(), "refused");
}

#[test]
fn reset_is_dirty_until_saved() {
    let store = ContentStore::new(MemoryStorage::new());
    let mut home = HomeContent::default();
    home.subtitle = "custom".to_owned();
    store.save(&home).unwrap();

    let mut draft = Draft::<HomeContent>::load(&store).reset_to_default();
    assert!(draft.is_dirty());
    assert_eq!(store.load::<HomeContent>().subtitle, "custom");

    draft.save(&store).unwrap();
    assert!(!draft.is_dirty());
    assert_eq!(store.load::<HomeContent>(), HomeContent::default());
}

#[test]
fn failed_save_keeps_edits() {
    let store = ContentStore::new(MemoryStorage::unavailable());
    let mut draft = Draft::<HomeContent>::default().set(lens!(HomeContent, subtitle), "kept".to_owned());

    assert_eq!(draft.save(&store), Err(StoreError::Unavailable));
    assert!(draft.is_dirty());
    assert_eq!(draft.value().subtitle, "kept");
}

#[test]
fn replace_swaps_whole_value() {
    let mut other = HomeContent::default();
    other.badge.text = "Imported".to_owned();
    let draft = Draft::<HomeContent>::default().replace(other.clone());
    assert_eq!(draft.into_value(), other);
}
