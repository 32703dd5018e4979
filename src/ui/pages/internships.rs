use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::content::{INTERNSHIP_BENEFITS, INTERNSHIP_STATS, INTERNSHIP_STEPS};
use crate::core::routes::Page;
use crate::ui::motion::{
    CountUpNumber, FadeIn, Floating, FloatingOrbs, MagneticBox, StaggerContainer, StaggerItem,
};
use crate::ui::sections::SectionHeading;
use crate::ui::{Icon, icons};

#[component]
pub fn InternshipsPage() -> impl IntoView {
    view! {
        <section class="section page-intro">
            <FloatingOrbs count=3/>
            <FadeIn class="container center">
                <Floating duration=2.0 distance=5.0 class="eyebrow">
                    <Icon name=icons::BRIEFCASE class="icon-text"/>
                    "Internship Program"
                </Floating>
                <h1 class="page-title">"Launch Your Career With Real Experience"</h1>
                <p class="section-lead">
                    "Work on live products alongside mentors from the industry and graduate with a \
                     portfolio employers notice."
                </p>
                <MagneticBox>
                    <A href=Page::Careers.path() attr:class="btn-primary btn-lg">
                        "View Open Positions"
                        <Icon name=icons::ARROW_RIGHT class="icon-text"/>
                    </A>
                </MagneticBox>
                <StaggerContainer class="stats-inline">
                    {INTERNSHIP_STATS
                        .iter()
                        .enumerate()
                        .map(|(i, stat)| {
                            view! {
                                <StaggerItem class="stat">
                                    <CountUpNumber
                                        end=stat.value
                                        suffix=stat.suffix
                                        delay_ms={500.0 + i as f64 * 200.0}
                                        class="stat-value"
                                    />
                                    <p class="stat-label">{stat.label}</p>
                                </StaggerItem>
                            }
                        })
                        .collect_view()}
                </StaggerContainer>
            </FadeIn>
        </section>

        <section class="section section-muted">
            <div class="container">
                <SectionHeading title="What You Get" lead="More than a certificate"/>
                <StaggerContainer increment=0.15 class="card-grid card-grid-4">
                    {INTERNSHIP_BENEFITS
                        .iter()
                        .map(|benefit| {
                            view! {
                                <StaggerItem class="card card-hover">
                                    <h3 class="card-title">{benefit.title}</h3>
                                    <p class="text-muted">{benefit.description}</p>
                                </StaggerItem>
                            }
                        })
                        .collect_view()}
                </StaggerContainer>
            </div>
        </section>

        <section class="section">
            <div class="container">
                <SectionHeading title="How to Apply" lead="Four steps from application to first commit"/>
                <StaggerContainer class="steps">
                    {INTERNSHIP_STEPS
                        .iter()
                        .enumerate()
                        .map(|(i, step)| {
                            view! {
                                <StaggerItem class="step">
                                    <span class="step-number">{i + 1}</span>
                                    <h3 class="card-title">{step.title}</h3>
                                    <p class="text-muted">{step.description}</p>
                                </StaggerItem>
                            }
                        })
                        .collect_view()}
                </StaggerContainer>
            </div>
        </section>
    }
}
