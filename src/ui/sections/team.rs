use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::content::{TeamProfile, fallback_team, team_profiles};
use crate::ui::api::use_api;
use crate::ui::common::Spinner;
use crate::ui::motion::{StaggerContainer, StaggerItem};
use crate::ui::sections::SectionHeading;

#[component]
fn TeamCard(profile: TeamProfile) -> impl IntoView {
    view! {
        <StaggerItem class="team-card card">
            <img src=profile.image alt=profile.name.clone() class="team-photo" loading="lazy"/>
            <h3 class="card-title">{profile.name}</h3>
            <p class="team-role">{profile.role}</p>
            <p class="text-muted">{profile.bio}</p>
        </StaggerItem>
    }
}

/// Team members from the API, or the built-in team when it has none.
/// A failed request also falls back so the section is never empty.
#[component]
pub fn TeamSection() -> impl IntoView {
    let api = use_api();
    // None while loading
    let profiles = RwSignal::new(None::<Vec<TeamProfile>>);

    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            let loaded = match api.list_team().await {
                Ok(list) => team_profiles(&list.data),
                Err(e) => {
                    warn!("Team request failed, showing defaults: {e}");
                    fallback_team()
                }
            };
            profiles.try_set(Some(loaded));
        });
    });

    view! {
        <section class="section">
            <div class="container">
                <SectionHeading
                    eyebrow="Our Team"
                    title="Meet the People Behind Edutalks"
                    lead="Educators, engineers and mentors dedicated to your growth"
                />
                {move || match profiles.get() {
                    None => view! { <Spinner centered=true label="Loading team..."/> }.into_any(),
                    Some(list) => view! {
                        <StaggerContainer class="team-grid">
                            {list
                                .into_iter()
                                .map(|profile| view! { <TeamCard profile=profile/> })
                                .collect_view()}
                        </StaggerContainer>
                    }
                    .into_any(),
                }}
            </div>
        </section>
    }
}
