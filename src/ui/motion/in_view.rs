//! Viewport visibility hook backed by `IntersectionObserver`

use leptos::html::Div;
use leptos::prelude::*;

use crate::core::motion::{VisibilityOptions, VisibilityState};

/// Track whether `node` is in view.
///
/// With `trigger_once` the observer disconnects after the first entry.
/// Without observer support the element counts as visible immediately.
pub fn use_in_view(node: NodeRef<Div>, options: VisibilityOptions) -> Signal<bool> {
    let state = RwSignal::new(VisibilityState::new(options.trigger_once));

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::logging::warn;
        use wasm_bindgen::JsCast;
        use wasm_bindgen::prelude::Closure;
        use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

        type Callback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

        let observer = StoredValue::new_local(None::<(IntersectionObserver, Callback)>);

        Effect::new(move |_| {
            let Some(element) = node.get() else {
                return;
            };
            if observer.with_value(|o| o.is_some()) {
                return;
            }

            let trigger_once = options.trigger_once;
            let callback: Callback = Closure::new(
                move |entries: js_sys::Array, obs: IntersectionObserver| {
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                            continue;
                        };
                        let hit = entry.is_intersecting();
                        state.maybe_update(|s| s.observe(hit));
                    }
                    if trigger_once && state.with_untracked(|s| s.is_settled()) {
                        obs.disconnect();
                    }
                },
            );

            let init = IntersectionObserverInit::new();
            init.set_threshold(&wasm_bindgen::JsValue::from_f64(options.threshold));
            init.set_root_margin(&options.root_margin);

            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                Ok(obs) => {
                    obs.observe(&element);
                    observer.set_value(Some((obs, callback)));
                }
                Err(e) => {
                    warn!("IntersectionObserver unavailable, showing content: {e:?}");
                    state.set(VisibilityState::always_visible());
                }
            }
        });

        on_cleanup(move || {
            observer.try_update_value(|o| {
                if let Some((obs, _callback)) = o.take() {
                    obs.disconnect();
                }
            });
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (node, options);
    }

    Memo::new(move |_| state.with(|s| s.is_visible())).into()
}
