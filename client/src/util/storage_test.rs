use super::*;

#[test]
fn quota_exception_names_map_to_quota_exceeded() {
    for name in ["QuotaExceededError", "NS_ERROR_DOM_QUOTA_REACHED"] {
        assert_eq!(
            write_error("homeContent", Some(name), ""),
            StoreError::QuotaExceeded { key: "homeContent".to_owned() }
        );
    }
}

#[test]
fn security_error_means_unavailable() {
    assert_eq!(write_error("k", Some("SecurityError"), ""), StoreError::Unavailable);
}

#[test]
fn other_failures_keep_their_description() {
    assert_eq!(
        write_error("k", Some("InvalidStateError"), "ignored"),
        StoreError::Write { key: "k".to_owned(), message: "InvalidStateError".to_owned() }
    );
    assert_eq!(
        write_error("k", None, "JsValue(\"boom\")"),
        StoreError::Write { key: "k".to_owned(), message: "JsValue(\"boom\")".to_owned() }
    );
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn store_outside_browser_reads_defaults_and_refuses_writes() {
    use content::ContentStore;
    use content::schema::HomeContent;

    let store = ContentStore::new(BrowserStorage);
    assert_eq!(store.load::<HomeContent>(), HomeContent::default());
    assert_eq!(store.save(&HomeContent::default()), Err(StoreError::Unavailable));
}
