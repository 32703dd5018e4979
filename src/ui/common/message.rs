//! Inline success and error banners

use crate::ui::form::FormHandle;
use crate::ui::{Icon, icons};
use leptos::prelude::*;

/// Shows `error` while it is `Some`
#[component]
pub fn ErrorMessage(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="error-message" role="alert">
                <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                <span>{move || error.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

/// Shows `message` while it is `Some`
#[component]
pub fn SuccessMessage(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="success-message" role="status">
                <Icon name=icons::CHECK class="icon-text"/>
                <span>{move || message.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

/// Result banner of a form submission
#[component]
pub fn StatusBanner(form: FormHandle) -> impl IntoView {
    view! {
        <SuccessMessage message=Signal::derive(move || form.success_message())/>
        <ErrorMessage error=Signal::derive(move || form.error_message())/>
    }
}
