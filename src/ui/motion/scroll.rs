//! Scroll-driven indicators: progress bar, back-to-top button, progress ring

use leptos::prelude::*;

use crate::core::motion::scroll::percent_label;
use crate::core::motion::{BACK_TO_TOP_THRESHOLD, BackToTop, ProgressRing, ScrollMetrics};
use crate::ui::{Icon, icons};

/// Scroll metrics refreshed on every scroll and resize.
/// Listeners are removed when the calling component unmounts.
pub fn use_scroll_metrics() -> ReadSignal<ScrollMetrics> {
    let (metrics, set_metrics) = signal(ScrollMetrics::default());

    #[cfg(not(feature = "ssr"))]
    {
        use crate::ui::platform::{on_window_scroll, scroll_metrics};
        use leptos::ev::resize;

        set_metrics.set(scroll_metrics());
        on_window_scroll(move || set_metrics.set(scroll_metrics()));
        let on_resize = window_event_listener(resize, move |_| set_metrics.set(scroll_metrics()));
        on_cleanup(move || drop(on_resize));
    }
    #[cfg(feature = "ssr")]
    let _ = set_metrics;

    metrics
}

/// Thin bar across the top of the viewport
#[component]
pub fn ScrollProgress() -> impl IntoView {
    let metrics = use_scroll_metrics();

    view! {
        <div class="scroll-progress" aria-hidden="true">
            <div
                class="scroll-progress-bar"
                style=move || format!("transform: scaleX({});", metrics.get().fraction())
            ></div>
        </div>
    }
}

const RING_RADIUS: f64 = 20.0;

/// Floating button that appears past the threshold and scrolls home
#[component]
pub fn BackToTopButton(#[prop(default = BACK_TO_TOP_THRESHOLD)] threshold: f64) -> impl IntoView {
    let metrics = use_scroll_metrics();
    let state = Memo::new(move |_| BackToTop::compute(metrics.get(), threshold));
    let ring = ProgressRing::with_radius(RING_RADIUS);

    view! {
        <button
            class="back-to-top"
            class:back-to-top-visible=move || state.get().visible
            aria-label="Back to top"
            on:click=move |_| crate::ui::platform::scroll_to_top(true)
        >
            <svg class="back-to-top-ring" viewBox="0 0 48 48" aria-hidden="true">
                <circle class="ring-track" cx="24" cy="24" r=RING_RADIUS></circle>
                <circle
                    class="ring-fill"
                    cx="24"
                    cy="24"
                    r=RING_RADIUS
                    stroke-dasharray=ring.circumference
                    stroke-dashoffset=move || ring.dash_offset(state.get().fraction)
                ></circle>
            </svg>
            <Icon name=icons::ARROW_UP class="back-to-top-icon"/>
        </button>
    }
}

/// Fixed ring showing how far the page is read, with a percentage label
#[component]
pub fn CircularProgress(
    #[prop(default = 24.0)] radius: f64,
    #[prop(default = 4.0)] stroke_width: f64,
) -> impl IntoView {
    let metrics = use_scroll_metrics();
    let fraction = Memo::new(move |_| metrics.get().fraction());
    let ring = ProgressRing::with_radius(radius);
    let size = (radius + stroke_width) * 2.0;
    let center = size / 2.0;

    view! {
        <div class="circular-progress" role="progressbar" aria-valuemin="0" aria-valuemax="100">
            <svg width=size height=size viewBox=format!("0 0 {size} {size}")>
                <circle class="ring-track" cx=center cy=center r=radius stroke-width=stroke_width></circle>
                <circle
                    class="ring-fill"
                    cx=center
                    cy=center
                    r=radius
                    stroke-width=stroke_width
                    stroke-dasharray=ring.circumference
                    stroke-dashoffset=move || ring.dash_offset(fraction.get())
                    transform=format!("rotate(-90 {center} {center})")
                ></circle>
            </svg>
            <span class="circular-progress-label">{move || percent_label(fraction.get())}</span>
        </div>
    }
}
