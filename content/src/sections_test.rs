use super::*;

fn ids(order: &SectionOrder) -> Vec<&str> {
    order.items().iter().map(|item| item.id.as_str()).collect()
}

#[test]
fn default_resolves_all_six_in_order() {
    assert_eq!(SectionOrder::default().resolve(), SectionKind::ALL.to_vec());
}

#[test]
fn move_swaps_neighbors() {
    let mut order = SectionOrder::default();
    assert!(order.move_item(2, Direction::Up));
    assert_eq!(ids(&order), ["hero", "portfolio", "services", "about", "blog", "contact"]);
    assert!(order.move_item(0, Direction::Down));
    assert_eq!(ids(&order)[..2], ["portfolio", "hero"]);
}

#[test]
fn move_at_boundaries_is_noop() {
    let mut order = SectionOrder::default();
    assert!(!order.move_item(0, Direction::Up));
    assert!(!order.move_item(5, Direction::Down));
    assert!(!order.move_item(17, Direction::Up));
    assert_eq!(order, SectionOrder::default());
}

#[test]
fn toggle_hides_without_removing() {
    let mut order = SectionOrder::default();
    assert!(order.toggle(4));
    assert_eq!(order.len(), 6);
    assert!(!order.items()[4].enabled);
    assert!(!order.resolve().contains(&SectionKind::Blog));
    assert!(order.toggle(4));
    assert!(order.items()[4].enabled);
    assert!(!order.toggle(6));
}

#[test]
fn toggle_changes_only_the_addressed_entry() {
    let mut order = SectionOrder::default();
    order.move_item(3, Direction::Up);
    for index in 0..order.len() {
        let before = order.clone();
        assert!(order.toggle(index));

        let mut expected = before.items().to_vec();
        expected[index].enabled = !expected[index].enabled;
        assert_eq!(order.items(), expected.as_slice());
    }
    let before = order.clone();
    assert!(!order.toggle(order.len()));
    assert_eq!(order, before);
}

#[test]
fn wire_format_uses_component_names() {
    let value = serde_json::to_value(SectionOrder::default()).unwrap();
    assert_eq!(
        value[0],
        serde_json::json!({ "id": "hero", "name": "Hero Section", "component": "Hero", "enabled": true })
    );
}

#[test]
fn unknown_component_round_trips_and_is_skipped() {
    let raw = r#"[
        {"id":"hero","name":"Hero Section","component":"Hero","enabled":true},
        {"id":"promo","name":"Promo","component":"PromoBanner","enabled":true},
        {"id":"contact","name":"Contact","component":"Contact","enabled":true}
    ]"#;
    let order: SectionOrder = serde_json::from_str(raw).unwrap();

    assert_eq!(order.items()[1].component, ComponentRef::Unknown("PromoBanner".to_owned()));
    assert_eq!(order.resolve(), [SectionKind::Hero, SectionKind::Contact]);

    let reencoded = serde_json::to_value(&order).unwrap();
    assert_eq!(reencoded[1]["component"], serde_json::json!("PromoBanner"));
}

#[test]
fn empty_list_renders_nothing() {
    let order = SectionOrder(Vec::new());
    assert!(order.is_empty());
    assert!(order.resolve().is_empty());
}

#[test]
fn anchors_and_names_are_distinct() {
    for kind in SectionKind::ALL {
        assert_eq!(SectionKind::from_name(kind.name()), Some(kind));
        assert_eq!(SectionKind::ALL.iter().filter(|k| k.anchor() == kind.anchor()).count(), 1);
    }
}
