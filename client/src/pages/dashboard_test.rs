use super::*;

#[test]
fn badge_reflects_customization() {
    let status = DomainStatus { domain: ContentDomain::Home, customized: true };
    assert_eq!(status.badge(), "Customized");
    let status = DomainStatus { domain: ContentDomain::Home, customized: false };
    assert_eq!(status.badge(), "Default");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn statuses_outside_browser_report_defaults() {
    let store = SiteStore::default();
    let statuses = domain_statuses(&store);
    assert_eq!(statuses.len(), ContentDomain::ALL.len());
    assert!(statuses.iter().all(|s| !s.customized));
    assert_eq!(statuses[0].domain, ContentDomain::Home);
}
