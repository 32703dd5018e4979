//! `requestAnimationFrame` loop

/// Call `step` with the frame timestamp once per animation frame until it
/// returns false. Steps should return false once their signals are
/// disposed so the loop ends with the component.
#[cfg(not(feature = "ssr"))]
pub fn animation_loop(mut step: impl FnMut(f64) -> bool + 'static) {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::Closure;

    let Some(window) = web_sys::window() else {
        return;
    };

    let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let frame_inner = frame.clone();

    *frame.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
        if !step(timestamp) {
            // Break the cycle so the closure is freed
            let _ = frame_inner.borrow_mut().take();
            return;
        }
        if let (Some(window), Some(closure)) = (web_sys::window(), frame_inner.borrow().as_ref()) {
            let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        }
    }));

    if let Some(closure) = frame.borrow().as_ref() {
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    }
}
