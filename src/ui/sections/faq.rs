use leptos::prelude::*;

use crate::core::content::FAQ;
use crate::core::widgets::Accordion;
use crate::ui::motion::{StaggerContainer, StaggerItem};
use crate::ui::sections::SectionHeading;
use crate::ui::{Icon, icons};

/// Accordion of common questions, one open at a time
#[component]
pub fn FaqSection() -> impl IntoView {
    let accordion = RwSignal::new(Accordion::default());

    view! {
        <section class="section">
            <div class="container container-narrow">
                <SectionHeading
                    eyebrow="FAQ"
                    title="Frequently Asked Questions"
                    lead="Everything you need to know about our programs and internships"
                />
                <StaggerContainer class="faq-list">
                    {FAQ
                        .iter()
                        .enumerate()
                        .map(|(i, entry)| {
                            let open = move || accordion.with(|a| a.is_open(i));
                            view! {
                                <StaggerItem class="faq-item">
                                    <button
                                        class="faq-question"
                                        aria-expanded=move || open().to_string()
                                        on:click=move |_| accordion.update(|a| a.toggle(i))
                                    >
                                        <span class="faq-category">{entry.category}</span>
                                        <span class="faq-text">{entry.question}</span>
                                        <span class="faq-chevron" class:faq-chevron-open=open>
                                            <Icon name=icons::CHEVRON_DOWN class="icon-text"/>
                                        </span>
                                    </button>
                                    <div class="faq-answer" class:faq-answer-open=open>
                                        <p>{entry.answer}</p>
                                    </div>
                                </StaggerItem>
                            }
                        })
                        .collect_view()}
                </StaggerContainer>
            </div>
        </section>
    }
}
