//! Routed view wrapper driven by [`PageTransitionController`]

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::core::motion::{PageTransitionController, PhaseTimer, TransitionVariant};
use crate::core::routes::{Page, RouteKey};
use crate::ui::platform::now_ms;
use crate::ui::timer::TimerSlot;

/// Arm the next phase timer; each firing arms the one after it until the
/// chain ends. Navigation replaces whatever is pending.
fn schedule_phase(
    controller: RwSignal<PageTransitionController>,
    slot: TimerSlot,
    timer: PhaseTimer,
) {
    slot.schedule(timer.delay_ms, move || {
        if let Some(Some(next)) = controller.try_update(|c| c.on_timer(timer.generation, now_ms())) {
            schedule_phase(controller, slot, next);
        }
    });
}

/// Renders the page for the current location.
///
/// On navigation the mounted page plays its exit animation first; the next
/// page is mounted only when that finishes, so two pages are never on
/// screen together. Each newly mounted page starts scrolled to the top.
#[component]
pub fn PageTransition(
    #[prop(default = TransitionVariant::Lift)] variant: TransitionVariant,
    render: fn(Page) -> AnyView,
) -> impl IntoView {
    let location = use_location();
    let initial = RouteKey::from(location.pathname.get_untracked());
    let (controller, first) = PageTransitionController::new(initial, variant, now_ms());
    let controller = RwSignal::new(controller);
    let phases = TimerSlot::new();
    schedule_phase(controller, phases, first);

    Effect::new(move |_| {
        let route = RouteKey::from(location.pathname.get());
        if let Some(timer) = controller
            .try_update(|c| c.navigate(route, now_ms()))
            .flatten()
        {
            schedule_phase(controller, phases, timer);
        }
    });

    let mounted = Memo::new(move |_| controller.with(|c| c.mounted().clone()));

    Effect::new(move |previous: Option<RouteKey>| {
        let current = mounted.get();
        if previous.is_some_and(|p| p != current) {
            crate::ui::platform::scroll_to_top(false);
        }
        current
    });

    view! {
        <div class=move || format!("page-transition {}", controller.with(|c| c.phase_class()))>
            {move || render(mounted.get().page())}
        </div>
    }
}
