use leptos::prelude::*;

use crate::core::motion::{TYPEWRITER_INTERVAL_MS, Typewriter};
use crate::ui::platform::now_ms;
use crate::ui::timer::TimerSlot;

fn type_next(
    typewriter: RwSignal<Typewriter>,
    ticker: TimerSlot,
    tick_ms: f64,
    on_complete: Option<Callback<()>>,
) {
    ticker.schedule(tick_ms, move || {
        let Some(step) = typewriter.try_update(|t| t.advance(now_ms())) else {
            return;
        };
        if !step.just_completed {
            type_next(typewriter, ticker, tick_ms, on_complete);
        } else if let Some(cb) = on_complete {
            cb.run(());
        }
    });
}

/// Types `text` out one character at a time. `on_complete` fires once.
#[component]
pub fn TypewriterText(
    text: &'static str,
    /// Seconds before the first character
    #[prop(default = 0.0)]
    delay: f64,
    #[prop(default = TYPEWRITER_INTERVAL_MS)] interval_ms: f64,
    #[prop(optional)] on_complete: Option<Callback<()>>,
    #[prop(default = "")] class: &'static str,
) -> impl IntoView {
    let typewriter = RwSignal::new(Typewriter::new(text, delay * 1000.0, interval_ms));

    let ticker = TimerSlot::new();
    Effect::new(move |_| {
        if typewriter.try_update(|t| t.start(now_ms())) == Some(true) {
            type_next(typewriter, ticker, interval_ms.max(16.0), on_complete);
        }
    });

    view! {
        <span class=class aria-label=text>
            {move || typewriter.with(|t| t.text())}
            <span class="typewriter-caret" class:hidden=move || typewriter.with(|t| t.is_complete())>
                "|"
            </span>
        </span>
    }
}
