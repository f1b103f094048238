//! Admin-writes / public-reads flows against a shared in-memory backend.

use crate::blog::{BlogPost, BlogPosts};
use crate::display::{featured_slot, regular_posts};
use crate::lens;
use crate::schema::HomeContent;
use crate::sections::{Direction, SectionKind, SectionOrder};
use crate::{ContentStore, Draft, MemoryStorage};

fn admin_and_public() -> (ContentStore<MemoryStorage>, ContentStore<MemoryStorage>) {
    let backend = MemoryStorage::new();
    (ContentStore::new(backend.clone()), ContentStore::new(backend))
}

#[test]
fn saved_hero_copy_shows_on_public_page() {
    let (admin, public) = admin_and_public();

    let mut draft = Draft::<HomeContent>::load(&admin)
        .set(lens!(HomeContent, badge.text), "Go Live".to_owned())
        .set(lens!(HomeContent, headline.main), "X".to_owned())
        .set(lens!(HomeContent, headline.highlighted), "Y".to_owned());
    assert_eq!(public.load::<HomeContent>(), HomeContent::default());

    draft.save(&admin).unwrap();

    let home = public.load::<HomeContent>();
    assert_eq!(home.headline.main, "X");
    assert_eq!(home.headline.highlighted, "Y");
    assert_eq!(home.badge.text, "Go Live");
    assert_eq!(home.badge.icon, "Zap");
}

#[test]
fn newest_featured_post_takes_the_slot() {
    let (admin, public) = admin_and_public();
    let new_post = |id: &str, title: &str| BlogPost {
        id: id.to_owned(),
        title: title.to_owned(),
        excerpt: "e".to_owned(),
        content: "c".to_owned(),
        author: "a".to_owned(),
        publish_date: "2024-05-01".to_owned(),
        read_time: "1 min read".to_owned(),
        category: "Design".to_owned(),
        tags: Vec::new(),
        featured: true,
        image: None,
    };

    let mut posts = admin.load::<BlogPosts>();
    posts.upsert(new_post("42", "T"));
    admin.save(&posts).unwrap();

    let shown = public.load::<BlogPosts>();
    assert_eq!(featured_slot(&shown, "All").map(|p| p.title.as_str()), Some("T"));

    let mut posts = admin.load::<BlogPosts>();
    posts.upsert(new_post("43", "U"));
    admin.save(&posts).unwrap();

    let shown = public.load::<BlogPosts>();
    assert_eq!(featured_slot(&shown, "All").map(|p| p.title.as_str()), Some("U"));
    assert_eq!(shown.posts().iter().filter(|p| p.featured).count(), 1);
    assert!(regular_posts(&shown, "All").iter().any(|p| p.id == "42"));
}

#[test]
fn disabled_section_is_omitted_in_order() {
    let (admin, public) = admin_and_public();

    let mut order = admin.load::<SectionOrder>();
    order.move_item(5, Direction::Up);
    let index = order.items().iter().position(|item| item.id == "services").unwrap();
    order.toggle(index);
    admin.save(&order).unwrap();

    assert_eq!(
        public.load::<SectionOrder>().resolve(),
        [SectionKind::Hero, SectionKind::Portfolio, SectionKind::About, SectionKind::Contact, SectionKind::Blog]
    );
}
