use serde_json::json;

use super::*;

#[test]
fn home_serializes_camel_case() {
    let value = serde_json::to_value(HomeContent::default()).unwrap();
    assert_eq!(value["stats"]["launchTime"], json!("48H"));
    assert_eq!(value["badge"]["icon"], json!("Zap"));
    assert!(value["stats"].get("launch_time").is_none());
}

#[test]
fn missing_fields_fill_from_default() {
    let home: HomeContent = serde_json::from_value(json!({
        "badge": { "text": "Go Live" },
        "headline": { "main": "X", "highlighted": "Y" }
    }))
    .unwrap();
    assert_eq!(home.badge.text, "Go Live");
    assert_eq!(home.badge.icon, "Zap");
    assert_eq!(home.headline.main, "X");
    assert_eq!(home.subtitle, HomeContent::default().subtitle);
    assert_eq!(home.stats, HeroStats::default());
}

#[test]
fn wrong_field_type_fails_decoding() {
    let result = serde_json::from_value::<HomeContent>(json!({ "headline": "flat string" }));
    assert!(result.is_err());
}

#[test]
fn services_default_has_two_entries_with_features() {
    let services = ServicesContent::default();
    assert_eq!(services.services.len(), 2);
    assert!(services.services.iter().all(|s| !s.features.is_empty()));
    assert_eq!(services.services[0].id, "1");
}

#[test]
fn portfolio_wire_names() {
    let value = serde_json::to_value(PortfolioContent::default()).unwrap();
    assert_eq!(value["featuredCase"]["revenueGrowth"], json!("850%"));
    assert_eq!(value["stats"]["clientRating"], json!("4.9★"));
    assert_eq!(value["clients"].as_array().map(Vec::len), Some(4));
}

#[test]
fn about_and_contact_wire_names() {
    let about = serde_json::to_value(AboutContent::default()).unwrap();
    assert_eq!(about["ctaButtonText"], json!("Start Your Transformation"));
    assert_eq!(about["stats"]["brandsTransformed"], json!("140+"));

    let contact = serde_json::to_value(ContactContent::default()).unwrap();
    assert_eq!(contact["contactInfo"]["phoneDescription"], json!("Mon-Fri 9AM-6PM IST"));
    assert_eq!(contact["responseGuarantee"]["title"], json!("24-Hour Response Guarantee"));
}

#[test]
fn footer_background_image_is_optional() {
    let value = serde_json::to_value(FooterContent::default()).unwrap();
    assert!(value["styling"].get("backgroundImage").is_none());

    let mut footer = FooterContent::default();
    footer.styling.background_image = Some("https://cdn.example/bg.png".to_owned());
    let decoded: FooterContent = serde_json::from_str(&serde_json::to_string(&footer).unwrap()).unwrap();
    assert_eq!(decoded, footer);
}

#[test]
fn footer_columns_default_to_six_links() {
    let sections = FooterSections::default();
    assert_eq!(sections.services.len(), 6);
    assert_eq!(sections.company.len(), 6);
    assert_eq!(sections.resources.len(), 6);
}
