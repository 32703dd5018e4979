//! Admin sign-in. Redirects to the dashboard on success or when a
//! session is already stored.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::core::api::ApiError;
use crate::core::form::{FieldErrors, LoginForm, messages};
use crate::core::routes::ADMIN_DASHBOARD_PATH;
use crate::ui::api::use_api;
use crate::ui::common::{ErrorMessage, FormField};
use crate::ui::form::FormHandle;
use crate::ui::motion::FadeIn;
use crate::ui::session::{SessionState, use_session};
use crate::ui::{Icon, icons};

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let api = StoredValue::new(use_api());
    let session = use_session();
    let navigate = use_navigate();
    let form = FormHandle::persistent();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let busy = Signal::derive(move || form.is_submitting());

    Effect::new(move |_| {
        if session.state.get() == SessionState::SignedIn {
            navigate(ADMIN_DASHBOARD_PATH, Default::default());
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let draft = LoginForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let request = match draft.validate() {
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
        let api = api.get_value();
        spawn_local(async move {
            // A session that cannot be stored fails the login like a rejection
            let result = api.login(&request).await.and_then(|login| {
                session
                    .sign_in(&login)
                    .map_err(|e| ApiError::Rejected { message: Some(e) })
            });
            // The redirect effect takes over once the session flips
            form.complete(ticket, result, None, messages::LOGIN_FAILED);
        });
    };

    view! {
        <div class="admin-login">
            <FadeIn class="admin-login-card card">
                <div class="center">
                    <span class="admin-login-badge">
                        <Icon name=icons::USERS class="icon-standalone"/>
                    </span>
                    <h1 class="section-title">"Admin Login"</h1>
                    <p class="text-muted">"Sign in to manage job postings and the team"</p>
                </div>
                <form class="admin-login-form" on:submit=on_submit novalidate>
                    <ErrorMessage error=Signal::derive(move || form.error_message())/>
                    <FormField
                        label="Email"
                        name="email"
                        input_type="email"
                        required=true
                        placeholder="admin@edutalks.in"
                        value=email
                        disabled=busy
                        error=Signal::derive(move || errors.with(|e| e.get("email")))
                    />
                    <FormField
                        label="Password"
                        name="password"
                        input_type="password"
                        required=true
                        value=password
                        disabled=busy
                        error=Signal::derive(move || errors.with(|e| e.get("password")))
                    />
                    <button type="submit" class="btn-primary btn-block" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <A href="/" attr:class="btn-link">"Back to website"</A>
            </FadeIn>
        </div>
    }
}
