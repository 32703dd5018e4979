//! Labelled inputs bound to a string signal
//!
//! Every field takes an optional error signal; while it holds a message the
//! input is outlined and the message renders underneath.

use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

fn field_error(error: Option<Signal<Option<&'static str>>>) -> impl IntoView {
    move || {
        error.and_then(|e| e.get()).map(|err| {
            view! {
                <div class="field-error">
                    <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                    <span>{err}</span>
                </div>
            }
        })
    }
}

#[component]
fn FieldLabel(label: &'static str, required: bool, #[prop(into)] for_id: String) -> impl IntoView {
    view! {
        <label class="label" for=for_id>
            {label}
            {required.then(|| view! { <span class="required-mark">"*"</span> })}
        </label>
    }
}

#[component]
pub fn FormField(
    label: &'static str,
    /// Input `name` and `id`
    name: &'static str,
    #[prop(default = false)]
    required: bool,
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    value: RwSignal<String>,
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    #[prop(optional, into)]
    error: Option<Signal<Option<&'static str>>>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <FieldLabel label=label required=required for_id=name/>
            <input
                id=name
                name=name
                type=input_type
                class="input-base"
                class:input-invalid=move || error.and_then(|e| e.get()).is_some()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                disabled=move || disabled.get()
            />
            {field_error(error)}
        </div>
    }
}

#[component]
pub fn TextAreaField(
    label: &'static str,
    name: &'static str,
    #[prop(default = false)]
    required: bool,
    #[prop(default = "")]
    placeholder: &'static str,
    value: RwSignal<String>,
    #[prop(default = 4)]
    rows: u32,
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    #[prop(optional, into)]
    error: Option<Signal<Option<&'static str>>>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <FieldLabel label=label required=required for_id=name/>
            <textarea
                id=name
                name=name
                class="input-base resize-none"
                class:input-invalid=move || error.and_then(|e| e.get()).is_some()
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                disabled=move || disabled.get()
            />
            {field_error(error)}
        </div>
    }
}

/// `options` are `(value, text)` pairs
#[component]
pub fn SelectField(
    label: &'static str,
    name: &'static str,
    #[prop(default = false)]
    required: bool,
    value: RwSignal<String>,
    options: Vec<(String, String)>,
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    #[prop(optional, into)]
    error: Option<Signal<Option<&'static str>>>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <FieldLabel label=label required=required for_id=name/>
            <select
                id=name
                name=name
                class="select-base"
                class:input-invalid=move || error.and_then(|e| e.get()).is_some()
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
                disabled=move || disabled.get()
            >
                {options
                    .into_iter()
                    .map(|(val, text)| view! { <option value=val>{text}</option> })
                    .collect_view()}
            </select>
            {field_error(error)}
        </div>
    }
}
