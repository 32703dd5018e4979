use leptos::prelude::*;

use crate::core::content::{ABOUT_STATS, MISSION, STORY, VALUES, VISION};
use crate::core::motion::Direction;
use crate::ui::motion::{
    CountUpNumber, FadeIn, Floating, FloatingOrbs, ScaleIn, SlideIn, StaggerContainer, StaggerItem,
};
use crate::ui::sections::TeamSection;
use crate::ui::{Icon, icons};

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="section page-intro">
            <FloatingOrbs count=3/>
            <div class="container split">
                <SlideIn direction=Direction::Left>
                    <span class="eyebrow">"Our Story"</span>
                    <h1 class="page-title">"Education Should Be a Conversation"</h1>
                    {STORY.iter().map(|p| view! { <p class="text-muted">{*p}</p> }).collect_view()}
                </SlideIn>
                <SlideIn direction=Direction::Right delay=0.3>
                    <div class="about-visual card">
                        <Floating duration=4.0 distance=15.0 class="about-badge about-badge-top">
                            <Icon name=icons::STAR class="icon-text"/>
                            "Since 2024"
                        </Floating>
                        <Floating duration=5.0 distance=20.0 delay=1.0 class="about-badge about-badge-bottom">
                            <Icon name=icons::USERS class="icon-text"/>
                            "Mentor-led"
                        </Floating>
                    </div>
                </SlideIn>
            </div>
        </section>

        <section class="section stats stats-accent">
            <StaggerContainer class="container stats-grid">
                {ABOUT_STATS
                    .iter()
                    .enumerate()
                    .map(|(i, stat)| {
                        view! {
                            <StaggerItem class="stat">
                                <CountUpNumber
                                    end=stat.value
                                    suffix=stat.suffix
                                    delay_ms={i as f64 * 100.0}
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
            <div class="container card-grid card-grid-2">
                <ScaleIn class="card">
                    <h3 class="card-title">"Our Mission"</h3>
                    <p class="text-muted">{MISSION}</p>
                </ScaleIn>
                <ScaleIn delay=0.2 class="card">
                    <h3 class="card-title">"Our Vision"</h3>
                    <p class="text-muted">{VISION}</p>
                </ScaleIn>
            </div>
            <FadeIn class="container values">
                {VALUES.iter().map(|v| view! { <span class="value-chip">{*v}</span> }).collect_view()}
            </FadeIn>
        </section>

        <TeamSection/>
    }
}
