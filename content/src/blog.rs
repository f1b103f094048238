//! Blog post collection and the post editing form.
//!
//! DESIGN
//! ======
//! At most one post is featured. [`BlogPosts::set_featured`] enforces this on
//! every edit (the most recently featured post wins); values loaded from
//! storage that predate the rule are normalized by keeping the first flagged
//! post.

#[cfg(test)]
#[path = "blog_test.rs"]
mod blog_test;

use serde::{Deserialize, Serialize};

use crate::domain::{Content, ContentDomain};
use crate::error::EditError;

/// Categories offered by the post editor.
pub const BLOG_CATEGORIES: [&str; 6] = ["Strategy", "Branding", "Analytics", "Content", "Marketing", "Design"];

/// Pseudo-category that disables filtering.
pub const ALL_CATEGORIES: &str = "All";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    /// `YYYY-MM-DD`.
    pub publish_date: String,
    pub read_time: String,
    pub category: String,
    pub tags: Vec<String>,
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Ordered post list persisted under [`ContentDomain::BlogPosts`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlogPosts(pub Vec<BlogPost>);

impl Content for BlogPosts {
    const DOMAIN: ContentDomain = ContentDomain::BlogPosts;
}

impl Default for BlogPosts {
    fn default() -> Self {
        let post = |id: &str, title: &str, excerpt: &str, author: &str, date: &str, read: &str, cat: &str, tags: [&str; 3]| {
            BlogPost {
                id: id.to_owned(),
                title: title.to_owned(),
                excerpt: excerpt.to_owned(),
                content: "Full article content here...".to_owned(),
                author: author.to_owned(),
                publish_date: date.to_owned(),
                read_time: read.to_owned(),
                category: cat.to_owned(),
                tags: tags.iter().map(|t| (*t).to_owned()).collect(),
                featured: false,
                image: Some("/placeholder.svg".to_owned()),
            }
        };
        let mut first = post(
            "1",
            "The Future of Content Marketing: AI-Driven Strategies",
            "Discover how artificial intelligence is revolutionizing content marketing and what it means for \
             your brand's growth strategy.",
            "Alex Morgan",
            "2024-01-15",
            "5 min read",
            "Strategy",
            ["AI", "Content Marketing", "Strategy"],
        );
        first.featured = true;
        Self(vec![
            first,
            post(
                "2",
                "Building Brand Authority Through Authentic Storytelling",
                "Learn how to craft compelling brand narratives that resonate with your audience and build \
                 lasting trust.",
                "Sarah Chen",
                "2024-01-10",
                "7 min read",
                "Branding",
                ["Branding", "Storytelling", "Authority"],
            ),
            post(
                "3",
                "Performance Marketing Metrics That Actually Matter",
                "Cut through the noise and focus on the KPIs that drive real business growth in digital \
                 marketing.",
                "Mike Rodriguez",
                "2024-01-05",
                "6 min read",
                "Analytics",
                ["Metrics", "Performance", "ROI"],
            ),
        ])
    }
}

impl BlogPosts {
    #[must_use]
    pub fn posts(&self) -> &[BlogPost] {
        &self.0
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&BlogPost> {
        self.0.iter().find(|p| p.id == id)
    }

    /// Replace the post with the same id, or append it.
    ///
    /// A featured post clears the flag on every other post.
    pub fn upsert(&mut self, post: BlogPost) {
        let id = post.id.clone();
        let featured = post.featured;
        match self.0.iter_mut().find(|p| p.id == id) {
            Some(existing) => *existing = post,
            None => self.0.push(post),
        }
        if featured {
            self.clear_featured_except(&id);
        }
    }

    /// Remove a post by id.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::NotFound`] when no post has `id`.
    pub fn remove(&mut self, id: &str) -> Result<BlogPost, EditError> {
        let index = self
            .0
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| EditError::NotFound { id: id.to_owned() })?;
        Ok(self.0.remove(index))
    }

    /// Set or clear the featured flag. Featuring a post un-features all others.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::NotFound`] when no post has `id`.
    pub fn set_featured(&mut self, id: &str, featured: bool) -> Result<(), EditError> {
        let post = self
            .0
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| EditError::NotFound { id: id.to_owned() })?;
        post.featured = featured;
        if featured {
            self.clear_featured_except(id);
        }
        Ok(())
    }

    /// Flip the featured flag of one post.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::NotFound`] when no post has `id`.
    pub fn toggle_featured(&mut self, id: &str) -> Result<(), EditError> {
        let current = self
            .get(id)
            .map(|p| p.featured)
            .ok_or_else(|| EditError::NotFound { id: id.to_owned() })?;
        self.set_featured(id, !current)
    }

    /// Keep only the first flagged post featured.
    pub fn normalize_featured(&mut self) {
        let mut seen = false;
        for post in &mut self.0 {
            if post.featured {
                if seen {
                    post.featured = false;
                }
                seen = true;
            }
        }
    }

    /// The featured post, if any.
    #[must_use]
    pub fn featured(&self) -> Option<&BlogPost> {
        self.0.iter().find(|p| p.featured)
    }

    fn clear_featured_except(&mut self, id: &str) {
        for post in self.0.iter_mut().filter(|p| p.id != id) {
            post.featured = false;
        }
    }
}

/// Timestamp-based id for a new post, bumped past any id already in use.
#[must_use]
pub fn next_post_id(posts: &BlogPosts, now_ms: u64) -> String {
    let mut candidate = now_ms;
    while posts.get(&candidate.to_string()).is_some() {
        candidate += 1;
    }
    candidate.to_string()
}

/// Split comma-separated tag input into trimmed, non-empty tags.
#[must_use]
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Invalid post form submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please fill in all required fields")]
    MissingRequired { fields: Vec<&'static str> },
}

/// Editable form state behind the post dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlogPostForm {
    /// Id of the post being edited; `None` for a new post.
    pub editing: Option<String>,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub publish_date: String,
    pub read_time: String,
    pub category: String,
    /// Comma-separated tags as typed.
    pub tag_input: String,
    pub featured: bool,
    pub image: String,
}

impl BlogPostForm {
    /// Blank form for a new post published on `today` (`YYYY-MM-DD`).
    #[must_use]
    pub fn new_post(today: &str) -> Self {
        Self {
            publish_date: today.to_owned(),
            read_time: "5 min read".to_owned(),
            category: BLOG_CATEGORIES[0].to_owned(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn from_post(post: &BlogPost) -> Self {
        Self {
            editing: Some(post.id.clone()),
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            content: post.content.clone(),
            author: post.author.clone(),
            publish_date: post.publish_date.clone(),
            read_time: post.read_time.clone(),
            category: post.category.clone(),
            tag_input: post.tags.join(", "),
            featured: post.featured,
            image: post.image.clone().unwrap_or_default(),
        }
    }

    /// Build the post. New posts take `new_id`; edits keep their id.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::MissingRequired`] when title, excerpt, or author
    /// is blank.
    pub fn into_post(self, new_id: String) -> Result<BlogPost, FormError> {
        let missing: Vec<&'static str> = [("title", &self.title), ("excerpt", &self.excerpt), ("author", &self.author)]
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
            .collect();
        if !missing.is_empty() {
            return Err(FormError::MissingRequired { fields: missing });
        }
        let image = self.image.trim();
        Ok(BlogPost {
            id: self.editing.unwrap_or(new_id),
            tags: parse_tags(&self.tag_input),
            image: if image.is_empty() { None } else { Some(image.to_owned()) },
            title: self.title,
            excerpt: self.excerpt,
            content: self.content,
            author: self.author,
            publish_date: self.publish_date,
            read_time: self.read_time,
            category: self.category,
            featured: self.featured,
        })
    }
}
