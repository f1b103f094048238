use super::*;

fn post(id: &str, category: &str, featured: bool) -> BlogPost {
    BlogPost {
        id: id.to_owned(),
        title: format!("Post {id}"),
        excerpt: "excerpt".to_owned(),
        content: "body".to_owned(),
        author: "Dana".to_owned(),
        publish_date: "2024-02-01".to_owned(),
        read_time: "3 min read".to_owned(),
        category: category.to_owned(),
        tags: Vec::new(),
        featured,
        image: None,
    }
}

#[test]
fn default_has_one_featured_post() {
    let posts = BlogPosts::default();
    assert_eq!(posts.posts().len(), 3);
    assert_eq!(posts.featured().map(|p| p.id.as_str()), Some("1"));
    assert_eq!(posts.posts().iter().filter(|p| p.featured).count(), 1);
}

#[test]
fn wire_format_is_camel_case() {
    let value = serde_json::to_value(BlogPosts::default()).unwrap();
    assert_eq!(value[0]["publishDate"], serde_json::json!("2024-01-15"));
    assert_eq!(value[0]["readTime"], serde_json::json!("5 min read"));
}

#[test]
fn image_is_optional_on_the_wire() {
    let raw = serde_json::to_string(&post("9", "Design", false)).unwrap();
    assert!(!raw.contains("image"));
    let decoded: BlogPost = serde_json::from_str(&raw).unwrap();
    assert_eq!(decoded.image, None);
}

#[test]
fn set_featured_unflags_others() {
    let mut posts = BlogPosts::default();
    posts.set_featured("3", true).unwrap();
    assert_eq!(posts.featured().map(|p| p.id.as_str()), Some("3"));
    assert_eq!(posts.posts().iter().filter(|p| p.featured).count(), 1);
}

#[test]
fn toggle_featured_can_clear_the_slot() {
    let mut posts = BlogPosts::default();
    posts.toggle_featured("1").unwrap();
    assert!(posts.featured().is_none());
    assert_eq!(posts.toggle_featured("nope"), Err(EditError::NotFound { id: "nope".to_owned() }));
}

#[test]
fn upsert_replaces_or_appends() {
    let mut posts = BlogPosts::default();
    let mut edited = posts.get("2").cloned().unwrap();
    edited.title = "Renamed".to_owned();
    posts.upsert(edited);
    assert_eq!(posts.posts().len(), 3);
    assert_eq!(posts.get("2").map(|p| p.title.as_str()), Some("Renamed"));

    posts.upsert(post("10", "Design", true));
    assert_eq!(posts.posts().len(), 4);
    assert_eq!(posts.featured().map(|p| p.id.as_str()), Some("10"));
    assert!(!posts.get("1").unwrap().featured);
}

#[test]
fn remove_by_id() {
    let mut posts = BlogPosts::default();
    let removed = posts.remove("1").unwrap();
    assert_eq!(removed.id, "1");
    assert!(posts.featured().is_none());
    assert!(posts.remove("1").is_err());
}

#[test]
fn normalize_keeps_first_flagged() {
    let mut posts = BlogPosts(vec![post("a", "X", false), post("b", "X", true), post("c", "X", true)]);
    posts.normalize_featured();
    assert_eq!(posts.featured().map(|p| p.id.as_str()), Some("b"));
    assert!(!posts.get("c").unwrap().featured);
}

#[test]
fn next_post_id_avoids_collisions() {
    let posts = BlogPosts(vec![post("1700000000000", "X", false)]);
    assert_eq!(next_post_id(&posts, 1_700_000_000_000), "1700000000001");
    assert_eq!(next_post_id(&posts, 42), "42");
}

#[test]
fn parse_tags_trims_and_drops_blanks() {
    assert_eq!(parse_tags(" SEO, ,Growth ,, AI"), ["SEO", "Growth", "AI"]);
    assert!(parse_tags("").is_empty());
}

#[test]
fn form_requires_title_excerpt_and_author() {
    let form = BlogPostForm { title: "T".to_owned(), ..BlogPostForm::new_post("2024-03-01") };
    let err = form.into_post("5".to_owned()).unwrap_err();
    assert_eq!(err, FormError::MissingRequired { fields: vec!["excerpt", "author"] });
    assert_eq!(err.to_string(), "Please fill in all required fields");
}

#[test]
fn new_form_builds_post_with_new_id() {
    let form = BlogPostForm {
        title: "Hello".to_owned(),
        excerpt: "Short".to_owned(),
        author: "Dana".to_owned(),
        tag_input: "a, b".to_owned(),
        image: "  ".to_owned(),
        ..BlogPostForm::new_post("2024-03-01")
    };
    let built = form.into_post("77".to_owned()).unwrap();
    assert_eq!(built.id, "77");
    assert_eq!(built.category, "Strategy");
    assert_eq!(built.read_time, "5 min read");
    assert_eq!(built.publish_date, "2024-03-01");
    assert_eq!(built.tags, ["a", "b"]);
    assert_eq!(built.image, None);
}

#[test]
fn edit_form_keeps_id() {
    let original = BlogPosts::default().posts()[1].clone();
    let form = BlogPostForm::from_post(&original);
    assert_eq!(form.tag_input, "Branding, Storytelling, Authority");
    let rebuilt = form.into_post("ignored".to_owned()).unwrap();
    assert_eq!(rebuilt, original);
}
