//! Modal dialog for creating or editing one blog post.

use content::blog::{BLOG_CATEGORIES, BlogPostForm};
use leptos::prelude::*;

type Getter = fn(&BlogPostForm) -> &String;
type Setter = fn(&mut BlogPostForm, String);

/// Dialog shown while `form` holds a post being edited.
#[component]
pub fn BlogPostDialog(form: RwSignal<Option<BlogPostForm>>, on_save: Callback<BlogPostForm>) -> impl IntoView {
    let value = move |get: Getter| move || form.with(|f| f.as_ref().map(|f| get(f).clone()).unwrap_or_default());
    let input = move |set: Setter| {
        move |ev: leptos::ev::Event| {
            let text = event_target_value(&ev);
            form.update(|f| {
                if let Some(f) = f {
                    set(f, text);
                }
            });
        }
    };
    let title = move || {
        if form.with(|f| f.as_ref().is_some_and(|f| f.editing.is_some())) { "Edit Post" } else { "Create New Post" }
    };
    let close = move || form.set(None);
    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(current) = form.get_untracked() {
            on_save.run(current);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| close()>
            <form class="dialog dialog--blog-post" on:click=move |ev| ev.stop_propagation() on:submit=submit>
                <h2 class="dialog__title">{title}</h2>
                <label class="dialog__label">
                    "Title *"
                    <input
                        class="field__input"
                        type="text"
                        prop:value=value(|f| &f.title)
                        on:input=input(|f, v| f.title = v)
                    />
                </label>
                <label class="dialog__label">
                    "Excerpt *"
                    <textarea
                        class="field__input"
                        rows="2"
                        prop:value=value(|f| &f.excerpt)
                        on:input=input(|f, v| f.excerpt = v)
                    ></textarea>
                </label>
                <label class="dialog__label">
                    "Content"
                    <textarea
                        class="field__input"
                        rows="8"
                        prop:value=value(|f| &f.content)
                        on:input=input(|f, v| f.content = v)
                    ></textarea>
                </label>
                <div class="dialog__row">
                    <label class="dialog__label">
                        "Author *"
                        <input
                            class="field__input"
                            type="text"
                            prop:value=value(|f| &f.author)
                            on:input=input(|f, v| f.author = v)
                        />
                    </label>
                    <label class="dialog__label">
                        "Publish Date"
                        <input
                            class="field__input"
                            type="date"
                            prop:value=value(|f| &f.publish_date)
                            on:input=input(|f, v| f.publish_date = v)
                        />
                    </label>
                </div>
                <div class="dialog__row">
                    <label class="dialog__label">
                        "Read Time"
                        <input
                            class="field__input"
                            type="text"
                            prop:value=value(|f| &f.read_time)
                            on:input=input(|f, v| f.read_time = v)
                        />
                    </label>
                    <label class="dialog__label">
                        "Category"
                        <select
                            class="field__input"
                            prop:value=value(|f| &f.category)
                            on:change=input(|f, v| f.category = v)
                        >
                            {BLOG_CATEGORIES
                                .into_iter()
                                .map(|category| view! { <option value=category>{category}</option> })
                                .collect_view()}
                        </select>
                    </label>
                </div>
                <label class="dialog__label">
                    "Tags (comma-separated)"
                    <input
                        class="field__input"
                        type="text"
                        placeholder="Strategy, SEO, Growth"
                        prop:value=value(|f| &f.tag_input)
                        on:input=input(|f, v| f.tag_input = v)
                    />
                </label>
                <label class="dialog__label">
                    "Image URL"
                    <input
                        class="field__input"
                        type="url"
                        placeholder="https://..."
                        prop:value=value(|f| &f.image)
                        on:input=input(|f, v| f.image = v)
                    />
                </label>
                <label class="dialog__checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.as_ref().is_some_and(|f| f.featured))
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            form.update(|f| {
                                if let Some(f) = f {
                                    f.featured = checked;
                                }
                            });
                        }
                    />
                    "Featured post"
                </label>
                <div class="dialog__actions">
                    <button type="button" class="btn" on:click=move |_| close()>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn--primary">
                        {move || if form.with(|f| f.as_ref().is_some_and(|f| f.editing.is_some())) { "Update Post" } else { "Create Post" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
