use super::*;

#[test]
fn storage_keys_match_persisted_layout() {
    let keys: Vec<&str> = ContentDomain::ALL.iter().map(|d| d.storage_key()).collect();
    assert_eq!(
        keys,
        [
            "homeContent",
            "servicesContent",
            "portfolioContent",
            "aboutContent",
            "contactContent",
            "blogPosts",
            "footerContent",
            "themeColors",
            "sectionOrder",
        ]
    );
}

#[test]
fn storage_keys_are_unique() {
    for (i, a) in ContentDomain::ALL.iter().enumerate() {
        for (j, b) in ContentDomain::ALL.iter().enumerate() {
            if i != j {
                assert_ne!(a.storage_key(), b.storage_key());
                assert_ne!(a.admin_path(), b.admin_path());
            }
        }
    }
}

#[test]
fn from_storage_key_round_trips() {
    for domain in ContentDomain::ALL {
        assert_eq!(ContentDomain::from_storage_key(domain.storage_key()), Some(domain));
    }
    assert_eq!(ContentDomain::from_storage_key("siteContent"), None);
}

#[test]
fn schema_types_bind_their_domain() {
    assert_eq!(HomeContent::DOMAIN, ContentDomain::Home);
    assert_eq!(ServicesContent::DOMAIN, ContentDomain::Services);
    assert_eq!(PortfolioContent::DOMAIN, ContentDomain::Portfolio);
    assert_eq!(AboutContent::DOMAIN, ContentDomain::About);
    assert_eq!(ContactContent::DOMAIN, ContentDomain::Contact);
    assert_eq!(FooterContent::DOMAIN, ContentDomain::Footer);
    assert_eq!(ThemeColors::DOMAIN, ContentDomain::Theme);
    assert_eq!(BlogPosts::DOMAIN, ContentDomain::BlogPosts);
    assert_eq!(SectionOrder::DOMAIN, ContentDomain::SectionOrder);
}

#[test]
fn default_json_shapes() {
    assert!(ContentDomain::Home.default_json().is_object());
    assert!(ContentDomain::Theme.default_json().is_object());
    assert_eq!(ContentDomain::BlogPosts.default_json().as_array().map(Vec::len), Some(3));
    assert_eq!(ContentDomain::SectionOrder.default_json().as_array().map(Vec::len), Some(6));
    assert_eq!(
        ContentDomain::Home.default_json()["headline"]["main"],
        serde_json::json!("Dominate Your Market")
    );
}
