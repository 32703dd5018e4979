use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::content::{
    COMPANY_NAME, CONTACT_ADDRESS, CONTACT_EMAIL, CONTACT_PHONE, COURSES, SOCIAL_LINKS,
};
use super::MAGNETIC_LINK;
use crate::core::routes::Page;
use crate::ui::motion::MagneticBox;
use crate::ui::sections::NewsletterSignup;
use crate::ui::{Icon, icons};

const COPYRIGHT_YEAR: u16 = 2025;

#[component]
pub fn Footer() -> impl IntoView {
    let company_links = [
        Page::About,
        Page::Careers,
        Page::Internships,
        Page::Contact,
        Page::PrivacyPolicy,
    ];

    view! {
        <footer class="footer">
            <NewsletterSignup/>

            <div class="container footer-grid">
                <div class="footer-about">
                    <A href="/" attr:class="navbar-brand">
                        <span class="brand-mark">"E"</span>
                        <span class="brand-name">"Edutalks"</span>
                    </A>
                    <p class="text-muted">
                        "Empowering learners with industry-ready skills through mentorship, \
                         hands-on projects and real internships."
                    </p>
                    <div class="footer-social">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|(name, url)| {
                                view! {
                                    <MagneticBox strength=MAGNETIC_LINK>
                                        <a href=*url target="_blank" rel="noopener noreferrer" class="social-link">
                                            {*name}
                                        </a>
                                    </MagneticBox>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div>
                    <h4 class="footer-heading">"Company"</h4>
                    <ul class="footer-list">
                        {company_links
                            .into_iter()
                            .map(|page| view! { <li><A href=page.path()>{page.label()}</A></li> })
                            .collect_view()}
                    </ul>
                </div>

                <div>
                    <h4 class="footer-heading">"Programs"</h4>
                    <ul class="footer-list">
                        {COURSES
                            .iter()
                            .take(5)
                            .map(|course| {
                                view! { <li><A href=Page::Services.path()>{course.title}</A></li> }
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div>
                    <h4 class="footer-heading">"Contact"</h4>
                    <ul class="footer-list footer-contact">
                        <li>
                            <Icon name=icons::MAP_PIN class="icon-text"/>
                            <span>{CONTACT_ADDRESS}</span>
                        </li>
                        <li>
                            <Icon name=icons::PHONE class="icon-text"/>
                            <a href=format!("tel:{}", CONTACT_PHONE.replace(' ', ""))>{CONTACT_PHONE}</a>
                        </li>
                        <li>
                            <Icon name=icons::MAIL class="icon-text"/>
                            <a href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a>
                        </li>
                    </ul>
                </div>
            </div>

            <div class="container footer-bottom">
                <p>{format!("© {COPYRIGHT_YEAR} {COMPANY_NAME}. All rights reserved.")}</p>
                <A href=Page::PrivacyPolicy.path()>"Privacy Policy"</A>
            </div>
        </footer>
    }
}
