use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::content::{COURSE_BENEFITS, COURSES, Course, LEARNING_STEPS};
use crate::core::form::{ENQUIRY_CLOSE_MS, EnquiryForm, FieldErrors};
use crate::core::routes::Page;
use crate::ui::common::{BaseModal, FormField};
use crate::ui::motion::{FadeIn, FloatingOrbs, MagneticBox, ScaleIn, StaggerContainer, StaggerItem};
use crate::ui::sections::SectionHeading;
use crate::ui::timer::TimerSlot;
use crate::ui::{Icon, icons};

/// State of the course dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DialogView {
    Closed,
    Curriculum(usize),
    Enquiry(usize),
    Received(usize),
}

impl DialogView {
    fn course(&self) -> Option<&'static Course> {
        match *self {
            DialogView::Closed => None,
            DialogView::Curriculum(i) | DialogView::Enquiry(i) | DialogView::Received(i) => {
                COURSES.get(i)
            }
        }
    }
}

#[component]
fn CurriculumView(course: &'static Course, on_enroll: Callback<()>) -> impl IntoView {
    view! {
        <p class="text-muted">{course.description}</p>
        <h4 class="modal-section-title">"Curriculum"</h4>
        <ul class="curriculum">
            {course
                .curriculum
                .iter()
                .map(|topic| {
                    view! {
                        <li>
                            <Icon name=icons::CHECK class="icon-text icon-accent"/>
                            {*topic}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
        <div class="modal-actions">
            <button class="btn-primary" on:click=move |_| on_enroll.run(())>
                "Enroll Now"
                <Icon name=icons::ARROW_RIGHT class="icon-text"/>
            </button>
        </div>
    }
}

#[component]
fn EnquiryView(course: &'static Course, on_received: Callback<()>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());

    let error_for = move |field: &'static str| Signal::derive(move || errors.with(|e| e.get(field)));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = EnquiryForm {
            name: name.get_untracked(),
            phone: phone.get_untracked(),
            email: email.get_untracked(),
            course: course.title.to_string(),
        };
        match form.validate() {
            Ok(()) => {
                errors.set(FieldErrors::default());
                on_received.run(());
            }
            Err(e) => errors.set(e),
        }
    };

    view! {
        <form class="enquiry-form" on:submit=on_submit novalidate>
            <FormField label="Full Name" name="name" required=true value=name error=error_for("name")/>
            <FormField
                label="Phone"
                name="phone"
                input_type="tel"
                required=true
                value=phone
                error=error_for("phone")
            />
            <FormField
                label="Email"
                name="email"
                input_type="email"
                required=true
                value=email
                error=error_for("email")
            />
            <div class="form-field">
                <span class="label">"Course"</span>
                <p class="readonly-value">{course.title}</p>
            </div>
            <div class="modal-actions">
                <button type="submit" class="btn-primary">"Submit Interest"</button>
            </div>
        </form>
    }
}

#[component]
pub fn ServicesPage() -> impl IntoView {
    let dialog = RwSignal::new(DialogView::Closed);
    // Pending auto-close; dropped whenever the dialog opens or closes
    let auto_close = TimerSlot::new();

    let open = move |index: usize| {
        auto_close.cancel();
        dialog.set(DialogView::Curriculum(index));
    };
    let close = Callback::new(move |_| {
        auto_close.cancel();
        dialog.set(DialogView::Closed);
    });

    let on_enroll = Callback::new(move |_| {
        if let DialogView::Curriculum(i) = dialog.get_untracked() {
            dialog.set(DialogView::Enquiry(i));
        }
    });

    let on_received = Callback::new(move |_| {
        let DialogView::Enquiry(i) = dialog.get_untracked() else {
            return;
        };
        dialog.set(DialogView::Received(i));
        auto_close.schedule(ENQUIRY_CLOSE_MS, move || {
            dialog.try_set(DialogView::Closed);
        });
    });

    let title = Signal::derive(move || {
        dialog.with(|d| match d {
            DialogView::Enquiry(_) => "Enroll Interest".to_string(),
            _ => d.course().map(|c| c.title.to_string()).unwrap_or_default(),
        })
    });

    view! {
        <section class="section page-intro">
            <FloatingOrbs count=3/>
            <FadeIn class="container center">
                <span class="eyebrow">"Our Programs"</span>
                <h1 class="page-title">"Courses That Lead to Careers"</h1>
                <p class="section-lead">
                    "Industry-aligned programs taught by practitioners, with projects you can show."
                </p>
            </FadeIn>
        </section>

        <section class="section">
            <StaggerContainer class="container card-grid card-grid-3">
                {COURSES
                    .iter()
                    .enumerate()
                    .map(|(i, course)| {
                        view! {
                            <StaggerItem class="card card-hover course-card">
                                <h3 class="card-title">{course.title}</h3>
                                <p class="text-muted">{course.description}</p>
                                <button class="btn-link" on:click=move |_| open(i)>
                                    "View Curriculum"
                                    <Icon name=icons::ARROW_RIGHT class="icon-text"/>
                                </button>
                            </StaggerItem>
                        }
                    })
                    .collect_view()}
            </StaggerContainer>
        </section>

        <section class="section section-muted">
            <div class="container split">
                <div>
                    <SectionHeading title="Why Learn With Us"/>
                    <StaggerContainer class="benefit-list">
                        {COURSE_BENEFITS
                            .iter()
                            .map(|benefit| {
                                view! {
                                    <StaggerItem class="benefit">
                                        <Icon name=icons::CHECK class="icon-text icon-accent"/>
                                        <span>{*benefit}</span>
                                    </StaggerItem>
                                }
                            })
                            .collect_view()}
                    </StaggerContainer>
                </div>
                <div>
                    <SectionHeading title="How You Learn"/>
                    <div class="steps steps-vertical">
                        {LEARNING_STEPS
                            .iter()
                            .enumerate()
                            .map(|(i, step)| {
                                view! {
                                    <ScaleIn delay={i as f64 * 0.1} class="step">
                                        <span class="step-number">{i + 1}</span>
                                        <h3 class="card-title">{step.title}</h3>
                                        <p class="text-muted">{step.description}</p>
                                    </ScaleIn>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>

        <section class="section cta">
            <FadeIn class="container center">
                <h2 class="section-title">"Not sure where to start?"</h2>
                <p class="section-lead">"Talk to a counsellor and find the right track."</p>
                <MagneticBox>
                    <A href=Page::Contact.path() attr:class="btn-primary btn-lg">"Talk to Us"</A>
                </MagneticBox>
            </FadeIn>
        </section>

        <BaseModal
            title=title
            is_open=Signal::derive(move || dialog.get() != DialogView::Closed)
            on_close=close
        >
            {move || match dialog.get() {
                DialogView::Closed => ().into_any(),
                DialogView::Curriculum(i) => match COURSES.get(i) {
                    Some(course) => view! { <CurriculumView course=course on_enroll=on_enroll/> }.into_any(),
                    None => ().into_any(),
                },
                DialogView::Enquiry(i) => match COURSES.get(i) {
                    Some(course) => view! { <EnquiryView course=course on_received=on_received/> }.into_any(),
                    None => ().into_any(),
                },
                DialogView::Received(_) => view! {
                    <div class="enquiry-received center">
                        <Icon name=icons::CHECK class="icon-standalone icon-accent"/>
                        <h3 class="card-title">"Interest Received!"</h3>
                        <p class="text-muted">"Our team will reach out to you shortly."</p>
                    </div>
                }.into_any(),
            }}
        </BaseModal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Dialog state
    // ========================================================================

    #[test]
    fn test_dialog_course_lookup() {
        assert!(DialogView::Closed.course().is_none());
        assert_eq!(
            DialogView::Enquiry(0).course().map(|c| c.title),
            COURSES.first().map(|c| c.title)
        );
        assert!(DialogView::Curriculum(COURSES.len()).course().is_none());
    }
}
