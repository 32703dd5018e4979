use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::routes::Page;
use crate::ui::motion::{Floating, ScaleIn};

/// Shown for any path no route matches
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="section not-found">
            <ScaleIn class="container center">
                <Floating duration=3.0 distance=12.0>
                    <h1 class="not-found-code">"404"</h1>
                </Floating>
                <h2 class="section-title">"Page Not Found"</h2>
                <p class="section-lead">
                    "The page you're looking for doesn't exist or has been moved."
                </p>
                <div class="hero-actions">
                    <A href="/" attr:class="btn-primary">"Go Home"</A>
                    <A href=Page::Contact.path() attr:class="btn-secondary">"Contact Us"</A>
                </div>
            </ScaleIn>
        </section>
    }
}
