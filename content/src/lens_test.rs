use crate::schema::{FooterContent, HomeContent, ServiceItem};

#[test]
fn nested_lens_reads_and_writes_one_field() {
    let lens = crate::lens!(HomeContent, headline.highlighted);
    let mut home = HomeContent::default();
    let before = home.clone();

    lens.set(&mut home, "That Sells".to_owned());

    assert_eq!(lens.get(&home), "That Sells");
    assert_eq!(home.headline.main, before.headline.main);
    assert_eq!(home.stats, before.stats);
}

#[test]
fn get_mut_edits_in_place() {
    let lens = crate::lens!(FooterContent, sections.company);
    let mut footer = FooterContent::default();
    lens.get_mut(&mut footer).push("Press".to_owned());
    assert_eq!(footer.sections.company.last().map(String::as_str), Some("Press"));
}

#[test]
fn lens_is_copy() {
    let lens = crate::lens!(ServiceItem, title);
    let copy = lens;
    let item = ServiceItem::default();
    assert_eq!(lens.get(&item), copy.get(&item));
}
