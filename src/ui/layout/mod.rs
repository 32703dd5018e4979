//! Chrome around the marketing pages

mod footer;
mod navbar;

pub use footer::Footer;
pub use navbar::Navbar;

use leptos::prelude::*;

use crate::ui::motion::{BackToTopButton, PageTransition, ScrollProgress};
use crate::ui::pages::render_page;

/// Pull of the magnetic navbar CTA and social links
const MAGNETIC_LINK: f64 = 0.2;

/// Navbar, transitioning page body, footer and scroll indicators.
///
/// The nested routes only decide that the layout is shown; which page
/// renders is decided by the transition so the outgoing page can finish
/// its exit first.
#[component]
pub fn SiteLayout() -> impl IntoView {
    view! {
        <div class="site">
            <ScrollProgress/>
            <Navbar/>
            <main class="site-main">
                <PageTransition render=render_page/>
            </main>
            <Footer/>
            <BackToTopButton/>
        </div>
    }
}
