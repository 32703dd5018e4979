use leptos::html::Div;
use leptos::prelude::*;

use super::in_view::use_in_view;
use crate::core::motion::{COUNT_UP_DURATION_MS, CountUp, VisibilityOptions};

/// Counts up to `end` the first time it scrolls into view
#[component]
pub fn CountUpNumber(
    end: f64,
    #[prop(default = 0.0)] start: f64,
    #[prop(default = COUNT_UP_DURATION_MS)] duration_ms: f64,
    #[prop(default = 0.0)] delay_ms: f64,
    #[prop(default = 0)] decimals: usize,
    #[prop(default = "")] prefix: &'static str,
    #[prop(default = "")] suffix: &'static str,
    #[prop(default = "")] class: &'static str,
) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let in_view = use_in_view(node, VisibilityOptions::default());

    let counter = CountUp::new(end)
        .starting_at(start)
        .duration_ms(duration_ms)
        .delay_ms(delay_ms)
        .decimals(decimals)
        .prefix(prefix)
        .suffix(suffix);
    let display = RwSignal::new(counter.format_value(start));
    let counter = StoredValue::new(counter);

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        use super::frame::animation_loop;
        use crate::ui::platform::now_ms;

        if !in_view.get() {
            return;
        }
        // Second visibility events do not restart the count
        if counter.try_update_value(|c| c.trigger(now_ms())) != Some(true) {
            return;
        }
        animation_loop(move |_| {
            let now = now_ms();
            let Some((text, finished)) =
                counter.try_with_value(|c| (c.format_at(now), c.is_finished(now)))
            else {
                return false;
            };
            display.try_set(text).is_none() && !finished
        });
    });

    #[cfg(feature = "ssr")]
    let _ = (in_view, counter);

    view! {
        <div node_ref=node class=class>
            {move || display.get()}
        </div>
    }
}
