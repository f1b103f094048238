use super::rules::{self, FooterColumn};
use crate::error::EditError;
use crate::schema::{FooterContent, PortfolioContent, ServicesContent};

#[test]
fn add_service_appends_placeholder_with_fresh_id() {
    let field = rules::service_entries();
    let mut services = ServicesContent::default();
    field.add(&mut services);

    assert_eq!(services.services.len(), 3);
    let added = &services.services[2];
    assert_eq!(added.id, "3");
    assert_eq!(added.title, "New Service");
    assert_eq!(added.features, ["Feature 1", "Feature 2"]);
}

#[test]
fn remove_refuses_last_service() {
    let field = rules::service_entries();
    let mut services = ServicesContent::default();
    field.remove(&mut services, 0).unwrap();
    assert!(!field.can_remove(&services));

    let err = field.remove(&mut services, 0).unwrap_err();
    assert_eq!(err, EditError::BelowMinimum { field: "services", min: 1 });
    assert_eq!(services.services.len(), 1);
}

#[test]
fn remove_rejects_bad_index_before_minimum() {
    let field = rules::portfolio_clients();
    let mut portfolio = PortfolioContent::default();
    let err = field.remove(&mut portfolio, 9).unwrap_err();
    assert_eq!(err, EditError::IndexOutOfRange { index: 9, len: 4 });
}

#[test]
fn update_touches_only_one_entry() {
    let field = rules::portfolio_clients();
    let mut portfolio = PortfolioContent::default();
    field.update(&mut portfolio, 1, "ACME".to_owned()).unwrap();

    assert_eq!(portfolio.clients, ["NUCLEAR", "ACME", "Kidult India", "PVR CINEMAS"]);
    assert!(field.update(&mut portfolio, 4, "nope".to_owned()).is_err());
}

#[test]
fn service_features_keep_one() {
    let field = rules::service_features();
    let mut service = ServicesContent::default().services.remove(0);
    while field.can_remove(&service) {
        field.remove(&mut service, 0).unwrap();
    }
    assert_eq!(service.features.len(), 1);
    field.add(&mut service);
    assert_eq!(service.features.last().map(String::as_str), Some("New Feature"));
}

#[test]
fn footer_columns_are_independent() {
    let mut footer = FooterContent::default();
    let company = rules::footer_column(FooterColumn::Company);
    company.add(&mut footer);

    assert_eq!(footer.sections.company.len(), 7);
    assert_eq!(footer.sections.services.len(), 6);
    assert_eq!(footer.sections.company[6], "New Item");

    for column in FooterColumn::ALL {
        let field = rules::footer_column(column);
        assert_eq!(field.min_len(), 1);
        assert_eq!(field.name(), column.title().to_lowercase());
    }
}

#[test]
fn next_numeric_id_skips_non_numeric() {
    assert_eq!(rules::next_numeric_id(["1", "7", "abc"].into_iter()), "8");
    assert_eq!(rules::next_numeric_id(std::iter::empty()), "1");
}
