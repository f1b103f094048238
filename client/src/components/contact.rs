//! Contact section: visitor inquiry form and contact details.
//!
//! The form is local state only. Submitting confirms with a notice and
//! clears the fields; nothing is transmitted.

use content::display::split_heading_leading;
use content::schema::ContactContent;
use leptos::prelude::*;

use crate::state::content::use_content;
use crate::state::notice::{NoticeLevel, NoticeState, notify};

#[component]
pub fn Contact() -> impl IntoView {
    let content = use_content::<ContactContent>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let heading = move || content.with(|c| split_heading_leading(&c.heading, 2));
    let info = move || content.with(|c| c.contact_info.clone());

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let details = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if [full_name, email, details].iter().any(|field| field.get_untracked().trim().is_empty()) {
            notify(notices, NoticeLevel::Error, "Missing information", "Please fill in all required fields.");
            return;
        }
        notify(
            notices,
            NoticeLevel::Success,
            "Message Sent!",
            "We'll get back to you within 24 hours to discuss your empire-building mission.",
        );
        full_name.set(String::new());
        email.set(String::new());
        details.set(String::new());
    };

    view! {
        <section id="contact" class="section section--tinted">
            <div class="container">
                <div class="section__header">
                    <span class="badge badge--primary">"Ready to Dominate?"</span>
                    <h2 class="section__title">
                        {move || heading().0}
                        <br/>
                        <span class="text-primary">{move || heading().1}</span>
                    </h2>
                    <p class="section__lead">{move || content.with(|c| c.subheading.clone())}</p>
                </div>

                <div class="contact__grid">
                    <form class="card contact-form" on:submit=on_submit>
                        <h3 class="card__title text-primary">{move || content.with(|c| c.form_title.clone())}</h3>
                        <label class="field">
                            <span class="field__label">"Full Name *"</span>
                            <input
                                class="field__input"
                                type="text"
                                placeholder="Your name"
                                required
                                prop:value=move || full_name.get()
                                on:input=move |ev| full_name.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span class="field__label">"Email Address *"</span>
                            <input
                                class="field__input"
                                type="email"
                                placeholder="your@email.com"
                                required
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span class="field__label">"Project Details *"</span>
                            <textarea
                                class="field__input"
                                rows="5"
                                placeholder="Tell us about your goals, challenges, and how we can help you dominate your market..."
                                required
                                prop:value=move || details.get()
                                on:input=move |ev| details.set(event_target_value(&ev))
                            ></textarea>
                        </label>
                        <button class="btn btn--primary btn--block" type="submit">"Send Message"</button>
                    </form>

                    <div class="contact__info">
                        <p class="section__lead">{move || content.with(|c| c.description.clone())}</p>
                        <div class="contact-item">
                            <a href=move || format!("mailto:{}", info().email)>{move || info().email}</a>
                            <p>{move || info().email_description}</p>
                        </div>
                        <div class="contact-item">
                            <a href=move || format!("tel:{}", info().phone.replace(' ', ""))>{move || info().phone}</a>
                            <p>{move || info().phone_description}</p>
                        </div>
                        <div class="contact-item">
                            <span>{move || info().location}</span>
                            <p>{move || info().location_description}</p>
                        </div>
                        <div class="card guarantee">
                            <h4>{move || content.with(|c| c.response_guarantee.title.clone())}</h4>
                            <p>{move || content.with(|c| c.response_guarantee.description.clone())}</p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
