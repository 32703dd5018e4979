use leptos::prelude::*;

use crate::core::content::{TESTIMONIALS, Testimonial, avatar_url};
use crate::core::widgets::{CAROUSEL_INTERVAL_MS, Carousel};
use crate::ui::sections::SectionHeading;
use crate::ui::timer::TimerSlot;
use crate::ui::{Icon, icons};

fn stars(rating: u8) -> impl IntoView {
    (0..rating.min(5))
        .map(|_| view! { <Icon name=icons::STAR class="star"/> })
        .collect_view()
}

fn card(t: &'static Testimonial, direction: i8) -> impl IntoView {
    let enter = match direction {
        d if d > 0 => "slide-from-right",
        d if d < 0 => "slide-from-left",
        _ => "",
    };
    view! {
        <figure class=format!("testimonial-card card {enter}")>
            <div class="testimonial-stars">{stars(t.rating)}</div>
            <blockquote class="testimonial-quote">{t.quote}</blockquote>
            <figcaption class="testimonial-author">
                <img src=avatar_url(t.name) alt=t.name class="avatar"/>
                <div>
                    <div class="testimonial-name">{t.name}</div>
                    <div class="text-muted">{format!("{} at {}", t.role, t.company)}</div>
                </div>
            </figcaption>
        </figure>
    }
}

/// Student quotes that advance on their own every few seconds.
/// Any manual move restarts the countdown.
#[component]
pub fn TestimonialCarousel() -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(TESTIMONIALS.len()));

    // Each move replaces the pending advance, restarting the countdown
    let autoplay = TimerSlot::new();
    Effect::new(move |_| {
        carousel.track();
        autoplay.schedule(CAROUSEL_INTERVAL_MS as f64, move || {
            carousel.try_update(|c| c.next());
        });
    });

    view! {
        <section class="section">
            <div class="container container-narrow">
                <SectionHeading
                    title="What Our Students Say"
                    lead="Real stories from real people who transformed their careers with us"
                />
                <div class="carousel">
                    {move || {
                        let (index, direction) = carousel.with(|c| (c.index(), c.direction()));
                        TESTIMONIALS.get(index).map(|t| card(t, direction))
                    }}
                    <button
                        class="carousel-nav carousel-prev btn-icon"
                        aria-label="Previous testimonial"
                        on:click=move |_| carousel.update(|c| c.prev())
                    >
                        <Icon name=icons::CHEVRON_LEFT class="icon-standalone"/>
                    </button>
                    <button
                        class="carousel-nav carousel-next btn-icon"
                        aria-label="Next testimonial"
                        on:click=move |_| carousel.update(|c| c.next())
                    >
                        <Icon name=icons::CHEVRON_RIGHT class="icon-standalone"/>
                    </button>
                </div>
                <div class="carousel-dots">
                    {(0..TESTIMONIALS.len())
                        .map(|i| {
                            view! {
                                <button
                                    class="carousel-dot"
                                    class:carousel-dot-active=move || carousel.with(|c| c.index() == i)
                                    aria-label=format!("Show testimonial {}", i + 1)
                                    on:click=move |_| carousel.update(|c| c.go_to(i))
                                ></button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
