use leptos::prelude::*;

use crate::core::content::{TECH_CATEGORIES, tech_in};
use crate::ui::motion::{ScaleIn, StaggerContainer, StaggerItem};
use crate::ui::sections::SectionHeading;

#[component]
pub fn TechStackSection() -> impl IntoView {
    view! {
        <section class="section section-muted">
            <div class="container">
                <SectionHeading
                    eyebrow="Technologies"
                    title="Tools You Will Master"
                    lead="Industry-standard technologies used by top companies worldwide"
                />
                <div class="tech-grid">
                    {TECH_CATEGORIES
                        .iter()
                        .enumerate()
                        .map(|(i, category)| {
                            view! {
                                <ScaleIn delay={i as f64 * 0.1} class="tech-category card">
                                    <h3 class="card-title">{*category}</h3>
                                    <StaggerContainer increment=0.05 class="tech-chips">
                                        {tech_in(category)
                                            .map(|tech| {
                                                view! {
                                                    <StaggerItem class="tech-chip">{tech.name}</StaggerItem>
                                                }
                                            })
                                            .collect_view()}
                                    </StaggerContainer>
                                </ScaleIn>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
