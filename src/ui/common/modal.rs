use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::JsCast;

/// Dialog shell. Closes on Escape, the close button or a backdrop click.
#[component]
pub fn BaseModal(
    #[prop(into)]
    title: Signal<String>,
    #[prop(optional)]
    subtitle: Option<String>,
    #[prop(into)]
    is_open: Signal<bool>,
    on_close: Callback<()>,
    children: ChildrenFn,
    #[prop(default = "max-w-2xl")]
    max_width: &'static str,
) -> impl IntoView {
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.get_untracked() {
                on_close.run(());
            }
        });
        on_cleanup(move || drop(handle));
    }

    let children = StoredValue::new(children);

    view! {
        <Show when=move || is_open.get()>
            <div
                class="modal-backdrop"
                role="dialog"
                aria-modal="true"
                on:click=move |e| {
                    #[cfg(not(feature = "ssr"))]
                    {
                        let on_backdrop = e
                            .target()
                            .and_then(|t| t.dyn_ref::<web_sys::Element>().map(|el| el.class_list().contains("modal-backdrop")))
                            .unwrap_or(false);
                        if on_backdrop {
                            on_close.run(());
                        }
                    }
                    #[cfg(feature = "ssr")]
                    {
                        let _ = e;
                    }
                }
            >
                <div class=format!("modal-card w-full {max_width}")>
                    <div class="modal-header">
                        <div>
                            <h3 class="modal-title">{move || title.get()}</h3>
                            {subtitle.clone().map(|s| view! { <p class="modal-subtitle">{s}</p> })}
                        </div>
                        <button
                            class="btn-icon"
                            on:click=move |_| on_close.run(())
                            title="Close"
                            aria-label="Close dialog"
                        >
                            <Icon name=icons::X class="icon-standalone"/>
                        </button>
                    </div>
                    <div class="modal-body">{children.with_value(|c| c())}</div>
                </div>
            </div>
        </Show>
    }
}

/// Yes/no dialog. Confirming also closes it.
#[component]
pub fn ConfirmDialog(
    #[prop(into)]
    title: String,
    #[prop(into)]
    message: Signal<String>,
    #[prop(into)]
    is_open: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(default = "Delete")]
    confirm_text: &'static str,
) -> impl IntoView {
    view! {
        <BaseModal title=title is_open=is_open on_close=on_cancel max_width="max-w-md">
            <div class="space-y-4">
                <p class="text-muted">{move || message.get()}</p>
                <div class="modal-actions">
                    <button class="btn-secondary" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn-danger"
                        on:click=move |_| {
                            on_confirm.run(());
                            on_cancel.run(());
                        }
                    >
                        {confirm_text}
                    </button>
                </div>
            </div>
        </BaseModal>
    }
}
