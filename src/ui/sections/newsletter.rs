use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::form::{FieldErrors, NewsletterForm, messages};
use crate::ui::api::use_api;
use crate::ui::common::StatusBanner;
use crate::ui::form::FormHandle;

/// Email capture shown above the footer
#[component]
pub fn NewsletterSignup() -> impl IntoView {
    let api = use_api();
    let form = FormHandle::transient();
    let email = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let request = match (NewsletterForm {
            email: email.get_untracked(),
        })
        .validate()
        {
            Ok(request) => request,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FieldErrors::default());

        let Some(ticket) = form.begin() else {
            return;
        };
        let api = api.clone();
        spawn_local(async move {
            let result = api.subscribe(&request).await;
            let subscribed =
                form.complete(ticket, result, Some(messages::SUBSCRIBED), messages::SUBSCRIBE_FAILED);
            if subscribed.is_some() {
                email.set(String::new());
            }
        });
    };

    view! {
        <section class="newsletter">
            <div class="container newsletter-inner">
                <div>
                    <h3 class="newsletter-title">"Stay in the loop"</h3>
                    <p class="text-muted">
                        "Get course launches, internship openings and career tips in your inbox."
                    </p>
                </div>
                <form class="newsletter-form" on:submit=on_submit novalidate>
                    <input
                        type="email"
                        name="email"
                        class="input-base"
                        class:input-invalid=move || errors.with(|e| e.get("email").is_some())
                        placeholder="Enter your email"
                        aria-label="Email address"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                        disabled=move || form.is_submitting()
                    />
                    <button type="submit" class="btn-primary" disabled=move || form.is_submitting()>
                        {move || if form.is_submitting() { "Subscribing..." } else { "Subscribe" }}
                    </button>
                </form>
                <p class="field-error" class:hidden=move || errors.with(|e| e.is_empty())>
                    {move || errors.with(|e| e.get("email").unwrap_or_default())}
                </p>
                <StatusBanner form=form/>
            </div>
        </section>
    }
}
