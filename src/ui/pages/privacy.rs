use leptos::prelude::*;

use crate::core::content::{COMPANY_NAME, PRIVACY_EMAIL, PRIVACY_POLICY};
use crate::ui::motion::{CircularProgress, FadeIn, FloatingOrbs};

#[component]
pub fn PrivacyPolicyPage() -> impl IntoView {
    view! {
        <section class="section page-intro">
            <FloatingOrbs count=2/>
            <div class="container container-narrow">
                <FadeIn>
                    <h1 class="page-title">"Privacy Policy"</h1>
                    <p class="text-muted">
                        {format!(
                            "{COMPANY_NAME} respects your privacy. This policy explains what we \
                             collect, how we use it and the choices you have."
                        )}
                    </p>
                </FadeIn>
                <FadeIn delay=0.2 class="policy">
                    {PRIVACY_POLICY
                        .iter()
                        .enumerate()
                        .map(|(i, section)| {
                            view! {
                                <article class="policy-section">
                                    <h2 class="policy-heading">{format!("{}. {}", i + 1, section.title)}</h2>
                                    <p>{section.body}</p>
                                    {(!section.items.is_empty()).then(|| view! {
                                        <ul class="policy-list">
                                            {section.items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                                        </ul>
                                    })}
                                </article>
                            }
                        })
                        .collect_view()}
                    <p class="policy-contact">
                        "Questions about this policy? Write to "
                        <a href=format!("mailto:{PRIVACY_EMAIL}")>{PRIVACY_EMAIL}</a>
                        "."
                    </p>
                </FadeIn>
            </div>
            <div class="reading-progress">
                <CircularProgress/>
            </div>
        </section>
    }
}
