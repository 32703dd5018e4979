use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::api::models::{Job, format_posted_date};
use crate::core::content::{RECRUITER_EMAIL, application_mailto};
use crate::ui::api::use_api;
use crate::ui::common::{Spinner, SpinnerSize};
use crate::ui::motion::{FadeIn, FloatingOrbs, MagneticBox, StaggerContainer, StaggerItem};
use crate::ui::{Icon, icons};

#[component]
fn JobCard(job: Job) -> impl IntoView {
    let apply = application_mailto(&job.title);
    let posted = job.created_at.as_deref().map(format_posted_date);

    view! {
        <StaggerItem class="card card-hover job-card">
            <div class="job-header">
                <h3 class="card-title">{job.title}</h3>
                <span class="job-type">{String::from(job.job_type)}</span>
            </div>
            <div class="job-meta">
                <span>
                    <Icon name=icons::BRIEFCASE class="icon-text"/>
                    {job.department}
                </span>
                <span>
                    <Icon name=icons::MAP_PIN class="icon-text"/>
                    {job.location}
                </span>
                {posted.map(|p| view! { <span class="job-posted">{format!("Posted {p}")}</span> })}
            </div>
            <p class="text-muted">{job.description}</p>
            <a href=apply class="btn-primary">
                "Apply Now"
                <Icon name=icons::ARROW_RIGHT class="icon-text"/>
            </a>
        </StaggerItem>
    }
}

#[component]
pub fn CareersPage() -> impl IntoView {
    let api = use_api();
    // None while loading
    let jobs = RwSignal::new(None::<Vec<Job>>);

    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            let loaded = match api.list_jobs().await {
                Ok(list) => list.jobs,
                Err(e) => {
                    warn!("Failed to load job postings: {e}");
                    Vec::new()
                }
            };
            jobs.try_set(Some(loaded));
        });
    });

    let general_application = format!("mailto:{RECRUITER_EMAIL}?subject=General%20Application");

    view! {
        <section class="section page-intro">
            <FloatingOrbs count=4/>
            <FadeIn class="container center">
                <span class="eyebrow">"Careers"</span>
                <h1 class="page-title">"Build the Future of Learning"</h1>
                <p class="section-lead">
                    "Join a team that turns conversations into careers."
                </p>
            </FadeIn>
        </section>

        <section class="section">
            <div class="container">
                <h2 class="section-title">"Open Positions"</h2>
                {move || match jobs.get() {
                    None => view! { <Spinner size=SpinnerSize::Large label="Loading positions..." centered=true/> }
                        .into_any(),
                    Some(list) if list.is_empty() => view! {
                        <div class="empty-state">
                            <Icon name=icons::BRIEFCASE class="icon-standalone"/>
                            <p>"No open positions at the moment."</p>
                        </div>
                    }
                    .into_any(),
                    Some(list) => view! {
                        <StaggerContainer class="job-list">
                            {list.into_iter().map(|job| view! { <JobCard job=job/> }).collect_view()}
                        </StaggerContainer>
                    }
                    .into_any(),
                }}
            </div>
        </section>

        <section class="section cta">
            <FadeIn class="container center">
                <h2 class="section-title">"Don't see the right role?"</h2>
                <p class="section-lead">
                    "Send us your resume and we'll reach out when something fits."
                </p>
                <MagneticBox>
                    <a href=general_application class="btn-primary btn-lg">
                        <Icon name=icons::MAIL class="icon-text"/>
                        "Send a General Application"
                    </a>
                </MagneticBox>
            </FadeIn>
        </section>
    }
}
