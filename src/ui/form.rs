//! Reactive wrapper around [`FormMachine`]
//!
//! Components call `begin`, run the request, then `complete`. Results
//! with a reset deadline schedule a timer that returns the form to idle.

use leptos::logging::warn;
use leptos::prelude::*;

use crate::core::api::ApiError;
use crate::core::form::{FormMachine, FormStatus};
use crate::ui::platform::now_ms;
use crate::ui::timer::TimerSlot;

#[derive(Clone, Copy)]
pub struct FormHandle {
    machine: RwSignal<FormMachine>,
    reset: TimerSlot,
}

impl FormHandle {
    /// Banner clears itself after the reset delay
    pub fn transient() -> Self {
        Self {
            machine: RwSignal::new(FormMachine::transient()),
            reset: TimerSlot::new(),
        }
    }

    /// Result stays until the next submit
    pub fn persistent() -> Self {
        Self {
            machine: RwSignal::new(FormMachine::persistent()),
            reset: TimerSlot::new(),
        }
    }

    pub fn status(&self) -> FormStatus {
        self.machine.with(|m| m.status())
    }

    pub fn is_submitting(&self) -> bool {
        self.status() == FormStatus::Submitting
    }

    pub fn message(&self) -> Option<String> {
        self.machine.with(|m| m.message().map(str::to_string))
    }

    /// Message of a successful submission
    pub fn success_message(&self) -> Option<String> {
        (self.status() == FormStatus::Success)
            .then(|| self.message())
            .flatten()
    }

    pub fn error_message(&self) -> Option<String> {
        (self.status() == FormStatus::Error)
            .then(|| self.message())
            .flatten()
    }

    pub fn begin(&self) -> Option<u64> {
        let ticket = self.machine.try_update(|m| m.begin()).flatten()?;
        self.reset.cancel();
        Some(ticket)
    }

    /// Settle the submission and hand back the payload on success
    pub fn complete<T>(
        &self,
        ticket: u64,
        result: Result<T, ApiError>,
        success_message: Option<&str>,
        fallback_error: &str,
    ) -> Option<T> {
        if let Err(e) = &result {
            warn!("Form submission failed: {e}");
        }
        let value = self
            .machine
            .try_update(|m| m.complete(ticket, result, success_message, fallback_error, now_ms()))
            .flatten();
        self.schedule_reset();
        value
    }

    /// Settle with an error that never reached the network
    pub fn fail(&self, ticket: u64, message: impl Into<String>) {
        let message = message.into();
        self.machine.update(|m| {
            m.fail(ticket, message, now_ms());
        });
        self.schedule_reset();
    }

    fn schedule_reset(&self) {
        let Some(at) = self.machine.try_with_untracked(|m| m.reset_at()).flatten() else {
            return;
        };
        let machine = self.machine;
        self.reset.schedule(at - now_ms(), move || {
            machine.try_update(|m| m.tick(now_ms()));
        });
    }
}
