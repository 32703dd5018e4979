//! Entrance components: fade, slide, scale, staggered groups and word reveal

use leptos::html::Div;
use leptos::prelude::*;

use super::in_view::use_in_view;
use crate::core::motion::entrance::{inline_style, word_delays};
use crate::core::motion::{
    Direction, Easing, EntranceSpec, FADE_MARGIN_PX, Reveal, SLIDE_MARGIN_PX, StaggerGroup,
    VisibilityOptions,
};

/// Wrapper that plays `spec` the first time it scrolls into view
#[component]
fn RevealBox(
    spec: EntranceSpec,
    options: VisibilityOptions,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let reveal = RwSignal::new(Reveal::new(spec, options.trigger_once));
    let in_view = use_in_view(node, options);

    Effect::new(move |_| {
        let hit = in_view.get();
        reveal.maybe_update(|r| r.observe(hit));
    });

    view! {
        <div node_ref=node class=class style=move || reveal.with(|r| r.css())>
            {children()}
        </div>
    }
}

fn timed(spec: EntranceSpec, delay: f64, duration: Option<f64>) -> EntranceSpec {
    let spec = spec.with_delay(delay);
    match duration {
        Some(d) => spec.with_duration(d),
        None => spec,
    }
}

#[component]
pub fn FadeIn(
    #[prop(default = Direction::Up)] direction: Direction,
    /// Seconds
    #[prop(default = 0.0)]
    delay: f64,
    #[prop(optional)] duration: Option<f64>,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <RevealBox
            spec=timed(EntranceSpec::fade(direction), delay, duration)
            options=VisibilityOptions::with_margin(FADE_MARGIN_PX)
            class=class
        >
            {children()}
        </RevealBox>
    }
}

/// Slides in from `direction`, a longer distance than [`FadeIn`]
#[component]
pub fn SlideIn(
    #[prop(default = Direction::Left)] direction: Direction,
    #[prop(default = 0.0)] delay: f64,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <RevealBox
            spec=EntranceSpec::slide(direction).with_delay(delay)
            options=VisibilityOptions::with_margin(SLIDE_MARGIN_PX)
            class=class
        >
            {children()}
        </RevealBox>
    }
}

#[component]
pub fn ScaleIn(
    #[prop(default = 0.0)] delay: f64,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <RevealBox
            spec=EntranceSpec::scale().with_delay(delay)
            options=VisibilityOptions::with_margin(FADE_MARGIN_PX)
            class=class
        >
            {children()}
        </RevealBox>
    }
}

#[derive(Clone, Copy)]
struct StaggerContext {
    visible: Signal<bool>,
    group: StaggerGroup,
    next_index: StoredValue<usize>,
}

/// Reveals its [`StaggerItem`] children one after another in DOM order
#[component]
pub fn StaggerContainer(
    /// Delay between children, seconds
    #[prop(optional)]
    increment: Option<f64>,
    #[prop(default = 0.0)] delay_children: f64,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let visible = use_in_view(node, VisibilityOptions::with_margin(FADE_MARGIN_PX));

    let group = StaggerGroup {
        delay_children: delay_children.max(0.0),
        ..increment.map(StaggerGroup::new).unwrap_or_default()
    };
    provide_context(StaggerContext {
        visible,
        group,
        next_index: StoredValue::new(0),
    });

    view! {
        <div node_ref=node class=class>
            {children()}
        </div>
    }
}

/// Child of a [`StaggerContainer`]. Outside one it renders without motion.
#[component]
pub fn StaggerItem(
    #[prop(default = Direction::Up)] direction: Direction,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    let Some(ctx) = use_context::<StaggerContext>() else {
        return view! { <div class=class>{children()}</div> }.into_any();
    };

    let index = ctx.next_index.get_value();
    ctx.next_index.set_value(index + 1);
    let spec = ctx
        .group
        .child_spec(index, EntranceSpec::stagger_item(direction));
    let visible = ctx.visible;

    view! {
        <div
            class=class
            style=move || inline_style(&spec, visible.get())
        >
            {children()}
        </div>
    }
    .into_any()
}

/// Slides each word up from below its line box in turn
#[component]
pub fn TextReveal(
    text: &'static str,
    #[prop(default = 0.0)] delay: f64,
    #[prop(default = "")] class: &'static str,
) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let visible = use_in_view(node, VisibilityOptions::default());

    let easing = Easing::Entrance.css();
    let words = word_delays(text, delay)
        .into_iter()
        .map(|(word, word_delay)| {
            let easing = easing.clone();
            let style = move || {
                let shift = if visible.get() { "0" } else { "100%" };
                format!(
                    "display: inline-block; transform: translateY({shift}); \
                     transition: transform 0.5s {easing} {word_delay}s;"
                )
            };
            view! {
                <span class="word-mask">
                    <span style=style>{word}</span>
                </span>
                " "
            }
        })
        .collect_view();

    view! {
        <div node_ref=node class=class>
            {words}
        </div>
    }
}
