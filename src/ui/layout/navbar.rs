use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::core::routes::{Page, RouteKey};
use super::MAGNETIC_LINK;
use crate::ui::motion::{MagneticBox, use_scroll_metrics};
use crate::ui::{Icon, icons};

/// Scroll offset after which the bar gets its solid background
const SOLID_AFTER_PX: f64 = 20.0;

#[component]
pub fn Navbar() -> impl IntoView {
    let location = use_location();
    let current = Memo::new(move |_| RouteKey::from(location.pathname.get()).page());
    let menu_open = RwSignal::new(false);
    let metrics = use_scroll_metrics();
    let scrolled = Memo::new(move |_| metrics.get().scroll_top > SOLID_AFTER_PX);

    // Close the mobile menu after navigating
    Effect::new(move |_| {
        location.pathname.track();
        menu_open.set(false);
    });

    let links = move |class: &'static str| {
        Page::NAV
            .into_iter()
            .map(|page| {
                view! {
                    <A
                        href=page.path()
                        attr:class=class
                        attr:aria-current=move || (current.get() == page).then_some("page")
                    >
                        {page.label()}
                    </A>
                }
            })
            .collect_view()
    };

    view! {
        <header class="navbar" class:navbar-solid=move || scrolled.get()>
            <nav class="navbar-inner container">
                <A href="/" attr:class="navbar-brand">
                    <span class="brand-mark">"E"</span>
                    <span class="brand-name">"Edutalks"</span>
                </A>

                <div class="navbar-links">{links("nav-link")}</div>

                <MagneticBox strength=MAGNETIC_LINK class="navbar-cta-wrap">
                    <A href=Page::Contact.path() attr:class="btn-primary navbar-cta">
                        "Get Started"
                    </A>
                </MagneticBox>

                <button
                    class="navbar-toggle btn-icon"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || {
                        if menu_open.get() {
                            view! { <Icon name=icons::X class="icon-standalone"/> }
                        } else {
                            view! { <Icon name=icons::MENU class="icon-standalone"/> }
                        }
                    }}
                </button>
            </nav>

            <Show when=move || menu_open.get()>
                <div class="navbar-mobile">{links("nav-link-mobile")}</div>
            </Show>
        </header>
    }
}
