//! Routed pages
//!
//! Site pages render inside [`SiteLayout`](crate::ui::layout::SiteLayout)
//! through [`render_page`]; the admin pages stand alone.

mod about;
mod admin_dashboard;
mod admin_login;
mod careers;
mod contact;
mod home;
mod internships;
mod not_found;
mod privacy;
mod products;
mod services;

pub use about::AboutPage;
pub use admin_dashboard::AdminDashboardPage;
pub use admin_login::AdminLoginPage;
pub use careers::CareersPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use internships::InternshipsPage;
pub use not_found::NotFoundPage;
pub use privacy::PrivacyPolicyPage;
pub use products::ProductsPage;
pub use services::ServicesPage;

use leptos::prelude::*;

use crate::core::routes::Page;

/// View for a site page
pub fn render_page(page: Page) -> AnyView {
    match page {
        Page::Home => view! { <HomePage/> }.into_any(),
        Page::About => view! { <AboutPage/> }.into_any(),
        Page::Services => view! { <ServicesPage/> }.into_any(),
        Page::Internships => view! { <InternshipsPage/> }.into_any(),
        Page::Careers => view! { <CareersPage/> }.into_any(),
        Page::Contact => view! { <ContactPage/> }.into_any(),
        Page::Products => view! { <ProductsPage/> }.into_any(),
        Page::PrivacyPolicy => view! { <PrivacyPolicyPage/> }.into_any(),
        Page::NotFound => view! { <NotFoundPage/> }.into_any(),
    }
}
