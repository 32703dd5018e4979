//! Magnetic hover and parallax wrappers

use leptos::html::Div;
use leptos::prelude::*;

use crate::core::motion::{MAGNETIC_RADIUS, MAGNETIC_STRENGTH, Magnetic, PARALLAX_SPEED};

#[cfg(not(feature = "ssr"))]
fn client_rect(node: NodeRef<Div>) -> Option<crate::core::motion::Rect> {
    let rect = node.get_untracked()?.get_bounding_client_rect();
    Some(crate::core::motion::Rect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    })
}

/// Pulls its children toward the pointer.
///
/// With `proximity` the pointer is tracked across the whole window and the
/// pull only applies within a fixed radius of the centre.
#[component]
pub fn MagneticBox(
    #[prop(default = MAGNETIC_STRENGTH)] strength: f64,
    #[prop(default = false)] proximity: bool,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let magnetic = RwSignal::new(if proximity {
        Magnetic::with_radius(strength, MAGNETIC_RADIUS)
    } else {
        Magnetic::new(strength)
    });

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::mousemove;

        if proximity {
            let handle = window_event_listener(mousemove, move |ev| {
                if let Some(rect) = client_rect(node) {
                    let pointer = (ev.client_x() as f64, ev.client_y() as f64);
                    magnetic.update(|m| {
                        m.pointer_move(pointer, rect);
                    });
                }
            });
            on_cleanup(move || drop(handle));
        }
    }

    let on_move = move |ev: leptos::ev::MouseEvent| {
        #[cfg(not(feature = "ssr"))]
        {
            if let (false, Some(rect)) = (proximity, client_rect(node)) {
                let pointer = (ev.client_x() as f64, ev.client_y() as f64);
                magnetic.update(|m| {
                    m.pointer_move(pointer, rect);
                });
            }
        }
        #[cfg(feature = "ssr")]
        let _ = ev;
    };

    view! {
        <div
            node_ref=node
            class=format!("magnetic {class}")
            style=move || {
                format!(
                    "{} transition: transform 0.3s ease-out;",
                    magnetic.with(|m| m.offset().css())
                )
            }
            on:mousemove=on_move
            on:mouseleave=move |_| {
                magnetic.update(|m| {
                    m.pointer_leave();
                });
            }
        >
            {children()}
        </div>
    }
}

/// Shifts its children vertically with the scroll position.
///
/// The outer wrapper stays in place and is the one measured; only the inner
/// layer carries the transform.
#[component]
pub fn Parallax(
    #[prop(default = PARALLAX_SPEED)] speed: f64,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    let wrapper = NodeRef::<Div>::new();
    let offset = RwSignal::new(0.0_f64);

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::motion::parallax_from_rect;
        use crate::ui::platform::{on_window_scroll, scroll_metrics};

        let recompute = move || {
            let Some(element) = wrapper.get_untracked() else {
                return;
            };
            let top = element.get_bounding_client_rect().top();
            offset.try_set(parallax_from_rect(scroll_metrics(), top, speed));
        };

        Effect::new(move |_| {
            if wrapper.get().is_some() {
                recompute();
            }
        });
        on_window_scroll(recompute);
    }

    #[cfg(feature = "ssr")]
    let _ = speed;

    view! {
        <div node_ref=wrapper class=format!("parallax {class}")>
            <div
                class="parallax-layer"
                style=move || format!("transform: translate3d(0, {}px, 0); will-change: transform;", offset.get())
            >
                {children()}
            </div>
        </div>
    }
}
