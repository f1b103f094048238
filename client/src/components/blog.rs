//! Blog section: category filter, featured post, post grid.
//!
//! The selected category is local UI state and is never persisted.

use content::blog::{ALL_CATEGORIES, BlogPost, BlogPosts};
use content::display::{blog_categories, featured_slot, format_publish_date, regular_posts};
use leptos::prelude::*;

use crate::state::content::use_content;

#[component]
pub fn Blog() -> impl IntoView {
    let stored = use_content::<BlogPosts>();
    let posts = Memo::new(move |_| {
        let mut posts = stored.get();
        posts.normalize_featured();
        posts
    });
    let selected = RwSignal::new(ALL_CATEGORIES.to_owned());

    let featured = move || posts.with(|p| featured_slot(p, &selected.get()).cloned());
    let grid = move || {
        posts.with(|p| regular_posts(p, &selected.get()).into_iter().cloned().collect::<Vec<_>>())
    };

    view! {
        <section id="blog" class="section">
            <div class="container">
                <div class="section__header">
                    <span class="badge badge--outline">"Latest Insights"</span>
                    <h2 class="section__title">"Industry " <span class="text-primary">"Insights"</span></h2>
                    <p class="section__lead">
                        "Stay ahead of the curve with our latest thoughts on content marketing, brand strategy, and digital transformation."
                    </p>
                </div>

                <div class="blog__filters">
                    {move || {
                        posts
                            .with(blog_categories)
                            .into_iter()
                            .map(|category| {
                                let value = category.clone();
                                let label = category.clone();
                                view! {
                                    <button
                                        class="btn"
                                        class:btn--primary={
                                            let category = category.clone();
                                            move || selected.get() == category
                                        }
                                        class:btn--outline={
                                            let category = category.clone();
                                            move || selected.get() != category
                                        }
                                        on:click=move |_| selected.set(value.clone())
                                    >
                                        {label}
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>

                {move || featured().map(|post| view! { <FeaturedPost post/> })}

                <div class="blog__grid">
                    {move || grid().into_iter().map(|post| view! { <PostCard post/> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeaturedPost(post: BlogPost) -> impl IntoView {
    view! {
        <article class="card blog-featured">
            <div class="blog-featured__image">
                {post.image.map(|src| view! { <img src=src alt=""/> })}
            </div>
            <div class="blog-featured__body">
                <span class="badge">{post.category}</span>
                <h3 class="card__title">{post.title}</h3>
                <p class="card__description">{post.excerpt}</p>
                <PostMeta author=post.author date=post.publish_date read_time=post.read_time/>
                <button class="btn btn--primary">"Read Article"</button>
            </div>
        </article>
    }
}

#[component]
fn PostCard(post: BlogPost) -> impl IntoView {
    view! {
        <article class="card blog-card">
            <div class="blog-card__image">
                {post.image.map(|src| view! { <img src=src alt=""/> })}
            </div>
            <span class="badge badge--outline">{post.category}</span>
            <h3 class="card__title">{post.title}</h3>
            <p class="card__description">{post.excerpt}</p>
            <div class="blog-card__tags">
                {post.tags.into_iter().map(|tag| view! { <span class="tag">{tag}</span> }).collect_view()}
            </div>
            <PostMeta author=post.author date=post.publish_date read_time=post.read_time/>
        </article>
    }
}

#[component]
fn PostMeta(author: String, date: String, read_time: String) -> impl IntoView {
    view! {
        <div class="post-meta">
            <span>{author}</span>
            <span>{format_publish_date(&date)}</span>
            <span>{read_time}</span>
        </div>
    }
}
