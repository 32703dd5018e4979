use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::content::{COURSES, HOME_STATS, INTERNSHIP_BENEFITS, PARTNERS, PILLARS, STORY};
use crate::core::motion::Direction;
use crate::core::routes::Page;
use crate::ui::motion::{
    CountUpNumber, FadeIn, Floating, FloatingOrbs, MagneticBox, Parallax, Pulse, SlideIn, StaggerContainer,
    StaggerItem, TextReveal, TypewriterText,
};
use crate::ui::sections::{FaqSection, SectionHeading, TechStackSection, TestimonialCarousel};
use crate::ui::{Icon, icons};

const MAGNETIC_CTA: f64 = 0.2;

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <Parallax speed=0.3 class="hero-backdrop">
                <Pulse duration=4.0 scale=1.2 class="hero-orb hero-orb-left"><span></span></Pulse>
                <Pulse duration=5.0 scale=1.2 delay=1.0 class="hero-orb hero-orb-right"><span></span></Pulse>
            </Parallax>
            <FloatingOrbs count=4/>

            <div class="container hero-content">
                <h1 class="hero-title">
                    <TextReveal text="Where Education Meets" delay=0.2/>
                    <span class="hero-accent">"Conversation"</span>
                </h1>
                <p class="hero-lead">
                    <TypewriterText
                        text="Knowledge shared through dialogue, mentorship and practical experience."
                        delay=0.6
                    />
                </p>
                <div class="hero-actions">
                    <MagneticBox strength=MAGNETIC_CTA>
                        <A href=Page::Products.path() attr:class="btn-outline-light">
                            "Products"
                        </A>
                    </MagneticBox>
                    <MagneticBox strength=MAGNETIC_CTA>
                        <A href=Page::Internships.path() attr:class="btn-primary">
                            "Internships"
                            <Icon name=icons::ARROW_RIGHT class="icon-text"/>
                        </A>
                    </MagneticBox>
                    <MagneticBox strength=MAGNETIC_CTA>
                        <A href=Page::Contact.path() attr:class="btn-ghost-light">
                            "Contact Us"
                        </A>
                    </MagneticBox>
                </div>
            </div>

            <Floating duration=1.5 distance=10.0 class="hero-scroll-hint">
                <Icon name=icons::CHEVRON_DOWN class="icon-standalone"/>
            </Floating>
        </section>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero/>

        <section class="section stats">
            <StaggerContainer class="container stats-grid">
                {HOME_STATS
                    .iter()
                    .enumerate()
                    .map(|(i, stat)| {
                        view! {
                            <StaggerItem class="stat">
                                <CountUpNumber
                                    end=stat.value
                                    suffix=stat.suffix
                                    delay_ms={i as f64 * 200.0}
                                    class="stat-value"
                                />
                                <p class="stat-label">{stat.label}</p>
                            </StaggerItem>
                        }
                    })
                    .collect_view()}
            </StaggerContainer>
        </section>

        <section class="section">
            <div class="container">
                <SectionHeading
                    eyebrow="Why Edutalks"
                    title="Learning Built Around Conversation"
                    lead="Four pillars that turn learners into professionals"
                />
                <StaggerContainer class="card-grid card-grid-4">
                    {PILLARS
                        .iter()
                        .map(|pillar| {
                            view! {
                                <StaggerItem class="card card-hover">
                                    <h3 class="card-title">{pillar.title}</h3>
                                    <p class="text-muted">{pillar.description}</p>
                                </StaggerItem>
                            }
                        })
                        .collect_view()}
                </StaggerContainer>
            </div>
        </section>

        <section class="section section-muted">
            <div class="container">
                <SectionHeading
                    eyebrow="Programs"
                    title="Courses That Get You Hired"
                    lead="Industry-aligned programs designed with hiring partners"
                />
                <StaggerContainer class="card-grid card-grid-3">
                    {COURSES
                        .iter()
                        .take(6)
                        .map(|course| {
                            view! {
                                <StaggerItem class="card card-hover">
                                    <h3 class="card-title">{course.title}</h3>
                                    <p class="text-muted">{course.description}</p>
                                </StaggerItem>
                            }
                        })
                        .collect_view()}
                </StaggerContainer>
                <FadeIn delay=0.4 class="center">
                    <A href=Page::Services.path() attr:class="btn-primary">
                        "Explore All Programs"
                        <Icon name=icons::ARROW_RIGHT class="icon-text"/>
                    </A>
                </FadeIn>
            </div>
        </section>

        <section class="section">
            <div class="container">
                <SectionHeading
                    eyebrow="Internships"
                    title="Learn By Building Real Products"
                    lead="Hands-on internships with mentorship from working engineers"
                />
                <StaggerContainer increment=0.15 class="card-grid card-grid-4">
                    {INTERNSHIP_BENEFITS
                        .iter()
                        .map(|benefit| {
                            view! {
                                <StaggerItem class="card">
                                    <h3 class="card-title">{benefit.title}</h3>
                                    <p class="text-muted">{benefit.description}</p>
                                </StaggerItem>
                            }
                        })
                        .collect_view()}
                </StaggerContainer>
            </div>
        </section>

        <section class="section section-muted">
            <div class="container split">
                <SlideIn direction=Direction::Left>
                    <span class="eyebrow">"About Us"</span>
                    <h2 class="section-title">"Education Should Be a Conversation"</h2>
                    {STORY.iter().map(|p| view! { <p class="text-muted">{*p}</p> }).collect_view()}
                    <A href=Page::About.path() attr:class="btn-link">
                        "Learn more about us"
                        <Icon name=icons::ARROW_RIGHT class="icon-text"/>
                    </A>
                </SlideIn>
                <SlideIn direction=Direction::Right delay=0.2>
                    <Floating duration=4.0 distance=15.0 class="about-visual card">
                        <Icon name=icons::USERS class="about-visual-icon"/>
                    </Floating>
                </SlideIn>
            </div>
        </section>

        <section class="section">
            <div class="container">
                <SectionHeading title="Where Our Learners Work" lead="Alumni at leading technology companies"/>
                <div class="marquee">
                    <div class="marquee-track">
                        {PARTNERS
                            .iter()
                            .chain(PARTNERS.iter())
                            .map(|name| view! { <span class="marquee-item">{*name}</span> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>

        <TestimonialCarousel/>
        <TechStackSection/>
        <FaqSection/>

        <section class="section">
            <FadeIn class="container cta card">
                <h2 class="section-title">"Ready to Start Your Journey?"</h2>
                <p class="section-lead">
                    "Join thousands of learners building careers with Edutalks."
                </p>
                <MagneticBox proximity=true>
                    <A href=Page::Contact.path() attr:class="btn-primary btn-lg">
                        "Get in Touch"
                    </A>
                </MagneticBox>
            </FadeIn>
        </section>
    }
}
