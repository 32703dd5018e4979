//! Thin wrappers over browser globals. On the server they return neutral
//! values so components render their initial state.

use crate::core::motion::ScrollMetrics;

/// Wall clock in milliseconds
pub fn now_ms() -> f64 {
    #[cfg(not(feature = "ssr"))]
    {
        js_sys::Date::now()
    }
    #[cfg(feature = "ssr")]
    {
        0.0
    }
}

/// Current scroll position and document/viewport heights
pub fn scroll_metrics() -> ScrollMetrics {
    #[cfg(not(feature = "ssr"))]
    {
        let Some(window) = web_sys::window() else {
            return ScrollMetrics::default();
        };
        let scroll_top = window.scroll_y().unwrap_or(0.0);
        let viewport_height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let document_height = window
            .document()
            .and_then(|d| d.document_element())
            .map(|el| el.scroll_height() as f64)
            .unwrap_or(0.0);
        ScrollMetrics {
            scroll_top,
            document_height,
            viewport_height,
        }
    }
    #[cfg(feature = "ssr")]
    {
        ScrollMetrics::default()
    }
}

/// Scroll the window to the top, smoothly or at once
pub fn scroll_to_top(smooth: bool) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(if smooth {
                web_sys::ScrollBehavior::Smooth
            } else {
                web_sys::ScrollBehavior::Instant
            });
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = smooth;
    }
}

/// Content of `<meta name="...">` in the current document
pub fn meta_content(name: &str) -> Option<String> {
    #[cfg(not(feature = "ssr"))]
    {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()?.document()?;
        let element = document
            .query_selector(&format!("meta[name=\"{name}\"]"))
            .ok()??;
        let meta = element.dyn_into::<web_sys::HtmlMetaElement>().ok()?;
        Some(meta.content()).filter(|c| !c.trim().is_empty())
    }
    #[cfg(feature = "ssr")]
    {
        let _ = name;
        None
    }
}

/// Run `handler` on every window scroll through a passive listener.
/// The listener is removed when the calling owner is cleaned up.
pub fn on_window_scroll(handler: impl Fn() + 'static) {
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::prelude::{StoredValue, on_cleanup};
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(window) = web_sys::window() else {
            return;
        };
        let callback = Closure::<dyn Fn()>::new(handler);
        let options = web_sys::AddEventListenerOptions::new();
        options.set_passive(true);
        if window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .is_err()
        {
            return;
        }

        let callback = StoredValue::new_local(Some(callback));
        on_cleanup(move || {
            let Some(Some(callback)) = callback.try_update_value(|c| c.take()) else {
                return;
            };
            if let Some(window) = web_sys::window() {
                let _ = window
                    .remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
            }
        });
    }
    #[cfg(feature = "ssr")]
    {
        let _ = handler;
    }
}
