use leptos::prelude::*;

use crate::core::content::PRODUCTS;
use crate::ui::motion::{FadeIn, MagneticBox, StaggerContainer, StaggerItem};
use crate::ui::{Icon, icons};

#[component]
pub fn ProductsPage() -> impl IntoView {
    view! {
        <section class="section page-intro">
            <div class="container">
                <FadeIn class="center">
                    <span class="eyebrow">"Our Products"</span>
                    <h1 class="page-title">"Tools Built for Learners"</h1>
                    <p class="section-lead">
                        "Platforms we build and run to make practice measurable."
                    </p>
                </FadeIn>
                <StaggerContainer class="card-grid card-grid-2">
                    {PRODUCTS
                        .iter()
                        .map(|product| {
                            view! {
                                <StaggerItem class="card card-hover product-card">
                                    <h2 class="card-title">{product.name}</h2>
                                    <p class="text-muted">{product.description}</p>
                                    <MagneticBox>
                                        <a
                                            href=product.url
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="btn-primary"
                                        >
                                            "Visit"
                                            <Icon name=icons::ARROW_RIGHT class="icon-text"/>
                                        </a>
                                    </MagneticBox>
                                </StaggerItem>
                            }
                        })
                        .collect_view()}
                </StaggerContainer>
            </div>
        </section>
    }
}
