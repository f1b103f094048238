//! Pure derivations used by the display sections.
//!
//! Every function here depends only on the loaded content value and UI-local
//! selection state, never on the compiled-in defaults.

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

use crate::blog::{ALL_CATEGORIES, BlogPost, BlogPosts};
use crate::schema::{FooterStyling, HomeContent};

/// Split a heading after its first `n` words: `(lead, rest)`.
#[must_use]
pub fn split_heading_leading(heading: &str, n: usize) -> (String, String) {
    let words: Vec<&str> = heading.split_whitespace().collect();
    let at = n.min(words.len());
    (words[..at].join(" "), words[at..].join(" "))
}

/// Split a heading before its last `n` words: `(lead, tail)`.
#[must_use]
pub fn split_heading_trailing(heading: &str, n: usize) -> (String, String) {
    let words: Vec<&str> = heading.split_whitespace().collect();
    let at = words.len().saturating_sub(n);
    (words[..at].join(" "), words[at..].join(" "))
}

/// Hero statistics as `(value, label)` pairs in display order.
#[must_use]
pub fn hero_stats(home: &HomeContent) -> [(&str, &'static str); 3] {
    [
        (home.stats.roi.as_str(), "Average ROI Increase"),
        (home.stats.audience.as_str(), "Audience Reached"),
        (home.stats.launch_time.as_str(), "Launch Time"),
    ]
}

/// Filter buttons: `"All"` followed by each distinct category in order of
/// first appearance.
#[must_use]
pub fn blog_categories(posts: &BlogPosts) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORIES.to_owned()];
    for post in posts.posts() {
        if !categories.iter().any(|c| c == &post.category) {
            categories.push(post.category.clone());
        }
    }
    categories
}

/// Posts in `selected` category (every post for `"All"`).
#[must_use]
pub fn filter_by_category<'a>(posts: &'a BlogPosts, selected: &str) -> Vec<&'a BlogPost> {
    posts
        .posts()
        .iter()
        .filter(|post| selected == ALL_CATEGORIES || post.category == selected)
        .collect()
}

/// Featured slot content: shown only while no category filter is active.
#[must_use]
pub fn featured_slot<'a>(posts: &'a BlogPosts, selected: &str) -> Option<&'a BlogPost> {
    if selected == ALL_CATEGORIES { posts.featured() } else { None }
}

/// Grid posts: the filtered list minus the featured post.
#[must_use]
pub fn regular_posts<'a>(posts: &'a BlogPosts, selected: &str) -> Vec<&'a BlogPost> {
    filter_by_category(posts, selected)
        .into_iter()
        .filter(|post| !post.featured)
        .collect()
}

/// `YYYY-MM-DD` rendered as `Jan 15, 2024`; other input is returned as is.
#[must_use]
pub fn format_publish_date(date: &str) -> String {
    parse_ymd(date)
        .map(|(year, month, day)| format!("{month} {day}, {year}"))
        .unwrap_or_else(|| date.to_owned())
}

fn parse_ymd(date: &str) -> Option<(u32, &'static str, u32)> {
    const MONTHS: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];
    let mut parts = date.trim().splitn(3, '-');
    let year: u32 = parts.next()?.parse().ok()?;
    let month: usize = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    if !(1..=31).contains(&day) {
        return None;
    }
    let name = MONTHS.get(month.checked_sub(1)?)?;
    Some((year, name, day))
}

/// Inline style for the footer container from its styling settings.
#[must_use]
pub fn footer_style(styling: &FooterStyling) -> String {
    let mut style = format!("background-color: {}; color: {};", styling.background_color, styling.text_color);
    if let Some(image) = styling.background_image.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        let image = image.replace('"', "%22");
        style.push_str(&format!(
            " background-image: url(\"{image}\"); background-size: cover; background-position: center;"
        ));
    }
    style
}
