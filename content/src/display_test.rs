use super::*;
use crate::blog::BlogPosts;

#[test]
fn leading_split() {
    assert_eq!(
        split_heading_leading("Empires We've Built & Conquered", 2),
        ("Empires We've".to_owned(), "Built & Conquered".to_owned())
    );
    assert_eq!(split_heading_leading("One", 2), ("One".to_owned(), String::new()));
}

#[test]
fn trailing_split() {
    assert_eq!(
        split_heading_trailing("Let's Build Your Content Empire", 2),
        ("Let's Build Your".to_owned(), "Content Empire".to_owned())
    );
    assert_eq!(split_heading_trailing("", 2), (String::new(), String::new()));
}

#[test]
fn hero_stats_follow_content() {
    let mut home = crate::schema::HomeContent::default();
    home.stats.roi = "900%".to_owned();
    let stats = hero_stats(&home);
    assert_eq!(stats[0], ("900%", "Average ROI Increase"));
    assert_eq!(stats[2], ("48H", "Launch Time"));
}

#[test]
fn categories_start_with_all_in_first_seen_order() {
    assert_eq!(blog_categories(&BlogPosts::default()), ["All", "Strategy", "Branding", "Analytics"]);
    assert_eq!(blog_categories(&BlogPosts(Vec::new())), ["All"]);
}

#[test]
fn featured_slot_only_without_filter() {
    let posts = BlogPosts::default();
    assert_eq!(featured_slot(&posts, "All").map(|p| p.id.as_str()), Some("1"));
    assert!(featured_slot(&posts, "Strategy").is_none());
}

#[test]
fn regular_posts_exclude_featured() {
    let posts = BlogPosts::default();
    let all: Vec<&str> = regular_posts(&posts, "All").iter().map(|p| p.id.as_str()).collect();
    assert_eq!(all, ["2", "3"]);
    assert!(regular_posts(&posts, "Strategy").is_empty());
    assert_eq!(filter_by_category(&posts, "Strategy").len(), 1);
}

#[test]
fn publish_date_formatting() {
    assert_eq!(format_publish_date("2024-01-15"), "Jan 15, 2024");
    assert_eq!(format_publish_date("2023-12-05"), "Dec 5, 2023");
    assert_eq!(format_publish_date("2024-13-01"), "2024-13-01");
    assert_eq!(format_publish_date("soon"), "soon");
}

#[test]
fn footer_style_applies_colors() {
    let styling = crate::schema::FooterStyling::default();
    assert_eq!(footer_style(&styling), "background-color: #1a1a1a; color: #ffffff;");
}

#[test]
fn footer_style_adds_background_image_when_set() {
    let mut styling = crate::schema::FooterStyling::default();
    styling.background_image = Some("https://cdn.example/bg \"x\".png".to_owned());
    let style = footer_style(&styling);
    assert!(style.ends_with(
        " background-image: url(\"https://cdn.example/bg %22x%22.png\"); background-size: cover; background-position: center;"
    ));

    styling.background_image = Some("   ".to_owned());
    assert!(!footer_style(&styling).contains("background-image"));
}
