//! Blog post manager.
//!
//! DESIGN
//! ======
//! Unlike the section editors there is no draft here: every create, update,
//! delete, and featured toggle is written through the store immediately and
//! reported in the notice tray. A failed write leaves the in-memory list as
//! it was before the operation.

use content::blog::{BlogPost, BlogPostForm, BlogPosts, next_post_id};
use content::display::format_publish_date;
use leptos::prelude::*;

use crate::components::blog_post_dialog::BlogPostDialog;
use crate::state::content::SiteStore;
use crate::state::notice::{NoticeLevel, NoticeState, notify};
use crate::util::file::{now_ms, today_iso};

#[component]
pub fn BlogEditorPage() -> impl IntoView {
    let store = expect_context::<SiteStore>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let posts = RwSignal::new(BlogPosts(Vec::new()));
    let form = RwSignal::new(None::<BlogPostForm>);
    Effect::new(move || {
        let mut loaded = store.load::<BlogPosts>();
        loaded.normalize_featured();
        posts.set(loaded);
    });

    // Apply `change` to a copy, persist it, and only then publish it.
    let commit = move |title: &str, message: String, change: Box<dyn FnOnce(&mut BlogPosts) -> Result<(), String>>| {
        let mut next = posts.get_untracked();
        if let Err(e) = change(&mut next) {
            notify(notices, NoticeLevel::Error, "Error", &e);
            return false;
        }
        match store.save(&next) {
            Ok(()) => {
                log::info!("{title}: {message}");
                posts.set(next);
                notify(notices, NoticeLevel::Success, title, &message);
                true
            }
            Err(e) => {
                log::error!("saving blog posts failed: {e}");
                notify(notices, NoticeLevel::Error, "Save failed", &e.to_string());
                false
            }
        }
    };

    let on_save = Callback::new(move |draft: BlogPostForm| {
        let creating = draft.editing.is_none();
        let new_id = next_post_id(&posts.get_untracked(), now_ms());
        let post = match draft.into_post(new_id) {
            Ok(post) => post,
            Err(e) => {
                notify(notices, NoticeLevel::Error, "Error", &e.to_string());
                return;
            }
        };
        let (title, message) = if creating {
            ("Post created", "New blog post has been created successfully.")
        } else {
            ("Post updated", "Blog post has been updated successfully.")
        };
        if commit(
            title,
            message.to_owned(),
            Box::new(move |list| {
                list.upsert(post);
                Ok(())
            }),
        ) {
            form.set(None);
        }
    });

    let delete = Callback::new(move |id: String| {
        if !confirm("Are you sure you want to delete this post?") {
            return;
        }
        commit(
            "Post deleted",
            "Blog post has been deleted successfully.".to_owned(),
            Box::new(move |list| list.remove(&id).map(|_| ()).map_err(|e| e.to_string())),
        );
    });

    let toggle_featured = Callback::new(move |id: String| {
        commit(
            "Featured updated",
            "Featured post has been updated.".to_owned(),
            Box::new(move |list| list.toggle_featured(&id).map_err(|e| e.to_string())),
        );
    });

    view! {
        <div class="admin-page">
            <header class="editor-header">
                <div>
                    <h1 class="editor-header__title">"Blog Posts"</h1>
                    <p class="editor-header__summary">"Create, edit, and feature articles."</p>
                </div>
                <div class="editor-header__actions">
                    <button
                        type="button"
                        class="btn btn--primary"
                        on:click=move |_| form.set(Some(BlogPostForm::new_post(&today_iso())))
                    >
                        "New Post"
                    </button>
                </div>
            </header>
            <div class="post-list">
                {move || {
                    posts
                        .get()
                        .0
                        .into_iter()
                        .map(|post| view! { <PostRow post form delete toggle_featured/> })
                        .collect_view()
                }}
            </div>
            <Show when=move || form.with(Option::is_some)>
                <BlogPostDialog form on_save/>
            </Show>
        </div>
    }
}

#[component]
fn PostRow(
    post: BlogPost,
    form: RwSignal<Option<BlogPostForm>>,
    delete: Callback<String>,
    toggle_featured: Callback<String>,
) -> impl IntoView {
    let edit_form = BlogPostForm::from_post(&post);
    let id_delete = post.id.clone();
    let id_feature = post.id.clone();
    let featured = post.featured;

    view! {
        <article class="card post-row">
            <div class="post-row__body">
                <div class="post-row__meta">
                    <span class="badge badge--outline">{post.category}</span>
                    {featured.then(|| view! { <span class="badge badge--primary">"Featured"</span> })}
                </div>
                <h3 class="post-row__title">{post.title}</h3>
                <p class="post-row__excerpt">{post.excerpt}</p>
                <p class="post-row__byline">
                    {post.author} " · " {format_publish_date(&post.publish_date)} " · " {post.read_time}
                </p>
            </div>
            <div class="post-row__actions">
                <button
                    type="button"
                    class="btn btn--small"
                    on:click=move |_| toggle_featured.run(id_feature.clone())
                >
                    {if featured { "Unfeature" } else { "Feature" }}
                </button>
                <button type="button" class="btn btn--small" on:click=move |_| form.set(Some(edit_form.clone()))>
                    "Edit"
                </button>
                <button type="button" class="btn btn--small btn--danger" on:click=move |_| delete.run(id_delete.clone())>
                    "Delete"
                </button>
            </div>
        </article>
    }
}

/// Ask the operator to confirm a destructive action. Always `false` outside
/// the browser.
fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().is_some_and(|w| w.confirm_with_message(message).unwrap_or(false))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}
