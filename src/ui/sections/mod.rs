//! Content blocks shared between pages

mod faq;
mod newsletter;
mod team;
mod tech_stack;
mod testimonials;

pub use faq::FaqSection;
pub use newsletter::NewsletterSignup;
pub use team::TeamSection;
pub use tech_stack::TechStackSection;
pub use testimonials::TestimonialCarousel;

use leptos::prelude::*;

use crate::ui::motion::FadeIn;

/// Eyebrow, title and lead paragraph above a section
#[component]
pub fn SectionHeading(
    #[prop(optional)] eyebrow: Option<&'static str>,
    title: &'static str,
    #[prop(optional)] lead: Option<&'static str>,
) -> impl IntoView {
    view! {
        <FadeIn class="section-heading">
            {eyebrow.map(|e| view! { <span class="eyebrow">{e}</span> })}
            <h2 class="section-title">{title}</h2>
            {lead.map(|l| view! { <p class="section-lead">{l}</p> })}
        </FadeIn>
    }
}
