//! Toast tray rendering the shared notice state.

use leptos::prelude::*;

use crate::state::notice::NoticeState;

#[component]
pub fn NoticeTray() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="notice-tray" role="status" aria-live="polite">
            <For
                each=move || notices.get().items
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class=format!("notice {}", notice.level.class())>
                            <div class="notice__body">
                                <strong class="notice__title">{notice.title}</strong>
                                <p class="notice__message">{notice.message}</p>
                            </div>
                            <button
                                class="notice__close"
                                aria-label="Dismiss"
                                on:click=move |_| notices.update(|n| n.dismiss(id))
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
