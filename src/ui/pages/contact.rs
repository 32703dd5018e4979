use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::content::{CONTACT_ADDRESS, CONTACT_EMAIL, CONTACT_PHONE};
use crate::core::form::{ContactForm, FieldErrors, FormStatus, messages};
use crate::ui::api::use_api;
use crate::ui::common::{ErrorMessage, FormField, TextAreaField};
use crate::ui::form::FormHandle;
use crate::ui::motion::{FadeIn, FloatingOrbs, MagneticBox, ScaleIn, SlideIn};
use crate::ui::{Icon, icons};

struct InfoCard {
    icon: &'static str,
    title: &'static str,
    value: &'static str,
    href: String,
}

fn info_cards() -> [InfoCard; 3] {
    [
        InfoCard {
            icon: icons::MAP_PIN,
            title: "Visit Us",
            value: CONTACT_ADDRESS,
            href: format!("https://maps.google.com/?q={}", CONTACT_ADDRESS.replace(' ', "")),
        },
        InfoCard {
            icon: icons::PHONE,
            title: "Call Us",
            value: CONTACT_PHONE,
            href: tel_href(CONTACT_PHONE),
        },
        InfoCard {
            icon: icons::MAIL,
            title: "Email Us",
            value: CONTACT_EMAIL,
            href: format!("mailto:{CONTACT_EMAIL}"),
        },
    ]
}

/// `tel:` link keeping only the leading `+` and digits
fn tel_href(phone: &str) -> String {
    let digits: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{digits}")
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let api = StoredValue::new(use_api());
    let form = FormHandle::transient();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());

    let error_for = move |field: &'static str| Signal::derive(move || errors.with(|e| e.get(field)));
    let busy = Signal::derive(move || form.is_submitting());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let draft = ContactForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            message: message.get_untracked(),
        };
        let request = match draft.validate() {
            Ok(request) => request,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FieldErrors::default());

        let Some(ticket) = form.begin() else {
            return;
        };
        let api = api.get_value();
        spawn_local(async move {
            let result = api.submit_contact(&request).await;
            let sent =
                form.complete(ticket, result, Some(messages::CONTACT_SENT), messages::CONTACT_FAILED);
            if sent.is_some() {
                for field in [name, email, phone, message] {
                    field.set(String::new());
                }
            }
        });
    };

    view! {
        <section class="section page-intro">
            <FloatingOrbs count=3/>
            <FadeIn class="container center">
                <span class="eyebrow">"Get in Touch"</span>
                <h1 class="page-title">"Let's Start a Conversation"</h1>
                <p class="section-lead">
                    "Questions about a course, an internship or a partnership? We reply within a day."
                </p>
            </FadeIn>
        </section>

        <section class="section">
            <div class="container contact-grid">
                <SlideIn direction=crate::core::motion::Direction::Left class="contact-info">
                    {info_cards()
                        .into_iter()
                        .enumerate()
                        .map(|(i, card)| {
                            view! {
                                <ScaleIn delay={i as f64 * 0.1}>
                                    <a href=card.href class="card card-hover info-card" target="_blank" rel="noopener noreferrer">
                                        <span class="info-icon"><Icon name=card.icon/></span>
                                        <div>
                                            <h3 class="card-title">{card.title}</h3>
                                            <p class="text-muted">{card.value}</p>
                                        </div>
                                    </a>
                                </ScaleIn>
                            }
                        })
                        .collect_view()}
                </SlideIn>

                <SlideIn direction=crate::core::motion::Direction::Right class="card contact-card">
                    <Show
                        when=move || form.status() != FormStatus::Success
                        fallback=move || view! {
                            <div class="contact-success center">
                                <Icon name=icons::CHECK class="icon-standalone icon-accent"/>
                                <h3 class="card-title">"Message Sent!"</h3>
                                <p class="text-muted">{move || form.success_message()}</p>
                            </div>
                        }
                    >
                        <form class="contact-form" on:submit=on_submit novalidate>
                            <ErrorMessage error=Signal::derive(move || form.error_message())/>
                            <div class="form-row">
                                <FormField
                                    label="Name"
                                    name="name"
                                    required=true
                                    placeholder="Your name"
                                    value=name
                                    disabled=busy
                                    error=error_for("name")
                                />
                                <FormField
                                    label="Email"
                                    name="email"
                                    input_type="email"
                                    required=true
                                    placeholder="you@example.com"
                                    value=email
                                    disabled=busy
                                    error=error_for("email")
                                />
                            </div>
                            <FormField
                                label="Phone"
                                name="phone"
                                input_type="tel"
                                placeholder="+91"
                                value=phone
                                disabled=busy
                            />
                            <TextAreaField
                                label="Message"
                                name="message"
                                required=true
                                placeholder="How can we help?"
                                rows=5
                                value=message
                                disabled=busy
                                error=error_for("message")
                            />
                            <MagneticBox strength=0.15>
                                <button type="submit" class="btn-primary btn-block" disabled=move || busy.get()>
                                    {move || if busy.get() { "Sending..." } else { "Send Message" }}
                                    <Icon name=icons::ARROW_RIGHT class="icon-text"/>
                                </button>
                            </MagneticBox>
                        </form>
                    </Show>
                </SlideIn>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tel_href_strips_formatting() {
        assert_eq!(tel_href("+91 98765 43210"), "tel:+919876543210");
    }

    #[test]
    fn test_info_cards_link_targets() {
        let cards = info_cards();
        assert!(cards[0].href.starts_with("https://maps.google.com/?q="));
        assert!(cards[1].href.starts_with("tel:"));
        assert_eq!(cards[2].href, format!("mailto:{CONTACT_EMAIL}"));
    }
}
