//! One-shot timers owned by a component
//!
//! A [`TimerSlot`] holds at most one pending timeout. Scheduling replaces
//! (and so cancels) the previous one, and whatever is still pending is
//! cancelled when the owning component is cleaned up.

use leptos::prelude::*;

/// At most one live handle. Dropping a handle cancels its timer.
#[cfg_attr(feature = "ssr", allow(dead_code))]
#[derive(Debug)]
struct Pending<H> {
    handle: Option<H>,
}

impl<H> Default for Pending<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

#[cfg_attr(feature = "ssr", allow(dead_code))]
impl<H> Pending<H> {
    fn replace(&mut self, handle: H) {
        self.handle = Some(handle);
    }

    fn clear(&mut self) {
        self.handle = None;
    }
}

#[derive(Clone, Copy)]
pub struct TimerSlot {
    #[cfg(not(feature = "ssr"))]
    pending: StoredValue<Pending<gloo_timers::callback::Timeout>, LocalStorage>,
}

impl Default for TimerSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerSlot {
    pub fn new() -> Self {
        #[cfg(not(feature = "ssr"))]
        {
            let pending = StoredValue::new_local(Pending::default());
            on_cleanup(move || {
                pending.try_update_value(Pending::clear);
            });
            Self { pending }
        }
        #[cfg(feature = "ssr")]
        {
            Self {}
        }
    }

    /// Run `f` after `delay_ms`, dropping any timer already waiting
    pub fn schedule(&self, delay_ms: f64, f: impl FnOnce() + 'static) {
        #[cfg(not(feature = "ssr"))]
        {
            let timeout = gloo_timers::callback::Timeout::new(delay_ms.max(0.0) as u32, f);
            self.pending.try_update_value(|p| p.replace(timeout));
        }
        #[cfg(feature = "ssr")]
        {
            let _ = (delay_ms, f);
        }
    }

    pub fn cancel(&self) {
        #[cfg(not(feature = "ssr"))]
        self.pending.try_update_value(Pending::clear);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts drops, standing in for a browser timeout
    struct Handle(Rc<Cell<u32>>);

    impl Drop for Handle {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    // ====================================================================
    // Pending tests
    // ====================================================================

    #[test]
    fn test_replacing_cancels_previous_timer() {
        let cancelled = Rc::new(Cell::new(0));
        let mut pending = Pending::default();

        for _ in 0..3 {
            pending.replace(Handle(cancelled.clone()));
        }
        // Only the newest is still live
        assert_eq!(cancelled.get(), 2);
        assert!(pending.handle.is_some());
    }

    #[test]
    fn test_clear_cancels_live_timer() {
        let cancelled = Rc::new(Cell::new(0));
        let mut pending = Pending::default();
        pending.replace(Handle(cancelled.clone()));

        pending.clear();
        assert_eq!(cancelled.get(), 1);
        assert!(pending.handle.is_none());

        pending.clear();
        assert_eq!(cancelled.get(), 1);
    }

    #[test]
    fn test_dropping_owner_cancels_live_timer() {
        let cancelled = Rc::new(Cell::new(0));
        {
            let mut pending = Pending::default();
            pending.replace(Handle(cancelled.clone()));
        }
        assert_eq!(cancelled.get(), 1);
    }
}
