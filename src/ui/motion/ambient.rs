//! Looping decorative motion. Pure CSS keyframes, nothing runs per frame.

use leptos::prelude::*;
use leptos_meta::Style;

use crate::core::motion::{TransitionVariant, orb_layout};

const KEYFRAMES: &str = "\
@keyframes edu-float { 0%, 100% { transform: translateY(0); } 50% { transform: translateY(var(--edu-float-distance, -20px)); } }
@keyframes edu-pulse { 0%, 100% { transform: scale(1); } 50% { transform: scale(var(--edu-pulse-scale, 1.05)); } }
@keyframes edu-drift { 0%, 100% { transform: translate(0, 0) scale(1); } 33% { transform: translate(100px, -80px) scale(1.2); } 66% { transform: translate(-50px, 60px) scale(0.9); } }
@media (prefers-reduced-motion: reduce) { .edu-float, .edu-pulse, .edu-drift { animation: none !important; } }
";

/// Keyframes for the ambient loops and the page transition variants
#[component]
pub fn MotionStyles() -> impl IntoView {
    let transitions: String = [
        TransitionVariant::Lift,
        TransitionVariant::Slide,
        TransitionVariant::Fade,
        TransitionVariant::Scale,
    ]
    .iter()
    .map(TransitionVariant::stylesheet)
    .collect();

    view! { <Style id="edu-motion">{format!("{KEYFRAMES}{transitions}")}</Style> }
}

/// Bobs its children up and down forever
#[component]
pub fn Floating(
    /// Seconds per cycle
    #[prop(default = 3.0)]
    duration: f64,
    /// Peak lift in px
    #[prop(default = 20.0)]
    distance: f64,
    #[prop(default = 0.0)] delay: f64,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    let style = format!(
        "--edu-float-distance: {}px; animation: edu-float {duration}s ease-in-out {delay}s infinite;",
        -distance
    );
    view! {
        <div class=format!("edu-float {class}") style=style>
            {children()}
        </div>
    }
}

#[component]
pub fn Pulse(
    #[prop(default = 2.0)] duration: f64,
    /// Peak scale factor
    #[prop(default = 1.05)]
    scale: f64,
    #[prop(default = 0.0)] delay: f64,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    let style = format!(
        "--edu-pulse-scale: {scale}; animation: edu-pulse {duration}s ease-in-out {delay}s infinite;"
    );
    view! {
        <div class=format!("edu-pulse {class}") style=style>
            {children()}
        </div>
    }
}

/// Soft blurred orbs drifting behind a page header
#[component]
pub fn FloatingOrbs(
    #[prop(default = 3)] count: usize,
    #[prop(default = "")] class: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("floating-orbs {class}") aria-hidden="true">
            {orb_layout(count)
                .into_iter()
                .map(|orb| {
                    let style = format!(
                        "width: {size}px; height: {size}px; left: {}%; top: {}%; animation: edu-drift {}s ease-in-out {}s infinite;",
                        orb.left_pct,
                        orb.top_pct,
                        orb.duration_s,
                        orb.delay_s,
                        size = orb.size_px,
                    );
                    view! { <div class="floating-orb edu-drift" style=style></div> }
                })
                .collect_view()}
        </div>
    }
}
