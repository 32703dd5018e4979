//! Submission lifecycle shared by every form.
//!
//! `Idle -> Submitting -> Success | Error`, then back to `Idle` once the
//! reset deadline passes (or never, for forms whose result is the whole
//! page). Each submission gets a ticket; results for an outdated ticket
//! are dropped.

pub mod fields;

pub use fields::{
    ContactForm, EnquiryForm, FieldErrors, JobForm, LoginForm, MemberForm, NewsletterForm,
};

use crate::core::api::ApiError;

/// Delay before transient banners disappear
pub const RESET_DELAY_MS: f64 = 5000.0;

/// Delay before the course enquiry dialog closes after submitting
pub const ENQUIRY_CLOSE_MS: f64 = 3000.0;

/// Banner text per form. Failures prefer the server's own message.
pub mod messages {
    pub const CONTACT_SENT: &str = "Thank you for reaching out. Our team will contact you shortly.";
    pub const CONTACT_FAILED: &str = "Failed to send message. Please try again.";
    pub const SUBSCRIBED: &str = "Thank you for subscribing! Check your email for confirmation.";
    pub const SUBSCRIBE_FAILED: &str = "Failed to subscribe. Please try again.";
    pub const LOGIN_FAILED: &str = "Login failed. Please try again.";
    pub const SAVE_FAILED: &str = "Failed to save. Please try again.";
    pub const DELETE_FAILED: &str = "Failed to delete. Please try again.";
    pub const LOAD_FAILED: &str = "Failed to load data. Please refresh the page.";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ResetPolicy {
    /// Return to idle this many ms after the result arrives
    After(f64),
    /// Keep the result until the next submit
    #[default]
    Persist,
}

impl ResetPolicy {
    pub fn transient() -> Self {
        ResetPolicy::After(RESET_DELAY_MS)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormMachine {
    status: FormStatus,
    message: Option<String>,
    policy: ResetPolicy,
    reset_at: Option<f64>,
    ticket: u64,
}

impl FormMachine {
    pub fn new(policy: ResetPolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    pub fn transient() -> Self {
        Self::new(ResetPolicy::transient())
    }

    pub fn persistent() -> Self {
        Self::new(ResetPolicy::Persist)
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    /// When `tick` will next change the status, if ever
    pub fn reset_at(&self) -> Option<f64> {
        self.reset_at
    }

    /// Start a submission. Returns `None` while one is already in flight.
    pub fn begin(&mut self) -> Option<u64> {
        if self.is_submitting() {
            return None;
        }
        self.ticket += 1;
        self.status = FormStatus::Submitting;
        self.message = None;
        self.reset_at = None;
        Some(self.ticket)
    }

    pub fn succeed(&mut self, ticket: u64, message: Option<String>, now_ms: f64) -> bool {
        self.settle(ticket, FormStatus::Success, message, now_ms)
    }

    pub fn fail(&mut self, ticket: u64, message: String, now_ms: f64) -> bool {
        self.settle(ticket, FormStatus::Error, Some(message), now_ms)
    }

    /// Settle with an API result. The payload is handed back on success so
    /// the caller can clear fields or store a token.
    pub fn complete<T>(
        &mut self,
        ticket: u64,
        result: Result<T, ApiError>,
        success_message: Option<&str>,
        fallback_error: &str,
        now_ms: f64,
    ) -> Option<T> {
        match result {
            Ok(value) => self
                .succeed(ticket, success_message.map(str::to_string), now_ms)
                .then_some(value),
            Err(e) => {
                self.fail(ticket, e.user_message(fallback_error), now_ms);
                None
            }
        }
    }

    /// Apply the reset deadline. Returns true if the status changed.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        match self.reset_at {
            Some(at) if now_ms >= at => {
                self.status = FormStatus::Idle;
                self.message = None;
                self.reset_at = None;
                true
            }
            _ => false,
        }
    }

    fn settle(
        &mut self,
        ticket: u64,
        status: FormStatus,
        message: Option<String>,
        now_ms: f64,
    ) -> bool {
        if ticket != self.ticket || !self.is_submitting() {
            return false;
        }
        self.status = status;
        self.message = message;
        self.reset_at = match self.policy {
            ResetPolicy::After(delay) => Some(now_ms + delay),
            ResetPolicy::Persist => None,
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::NETWORK_ERROR_MESSAGE;
    use crate::core::api::client::stub::StubTransport;
    use crate::core::api::models::{ContactRequest, LoginRequest, NewsletterRequest};
    use crate::core::api::ApiClient;
    use crate::core::session::{AdminGuard, AdminSession, MemoryStore};

    // ========================================================================
    // State machine
    // ========================================================================

    #[test]
    fn test_success_resets_after_delay() {
        let mut form = FormMachine::transient();
        let ticket = form.begin().unwrap();
        assert_eq!(form.status(), FormStatus::Submitting);

        assert!(form.succeed(ticket, Some("Thanks".to_string()), 1000.0));
        assert_eq!(form.status(), FormStatus::Success);
        assert_eq!(form.reset_at(), Some(6000.0));

        assert!(!form.tick(5999.0));
        assert_eq!(form.status(), FormStatus::Success);
        assert!(form.tick(6000.0));
        assert_eq!(form.status(), FormStatus::Idle);
        assert!(form.message().is_none());
    }

    #[test]
    fn test_error_also_resets() {
        let mut form = FormMachine::transient();
        let ticket = form.begin().unwrap();
        form.fail(ticket, "Failed".to_string(), 0.0);
        assert_eq!(form.message(), Some("Failed"));
        assert!(form.tick(RESET_DELAY_MS));
        assert_eq!(form.status(), FormStatus::Idle);
    }

    #[test]
    fn test_persistent_never_resets() {
        let mut form = FormMachine::persistent();
        let ticket = form.begin().unwrap();
        form.fail(ticket, "Bad password".to_string(), 0.0);
        assert!(!form.tick(1e9));
        assert_eq!(form.status(), FormStatus::Error);

        // Next submit clears it
        form.begin().unwrap();
        assert_eq!(form.status(), FormStatus::Submitting);
        assert!(form.message().is_none());
    }

    #[test]
    fn test_double_submit_is_refused() {
        let mut form = FormMachine::transient();
        assert!(form.begin().is_some());
        assert!(form.begin().is_none());
    }

    #[test]
    fn test_old_deadline_does_not_reset_new_submission() {
        let mut form = FormMachine::transient();
        let first = form.begin().unwrap();
        form.succeed(first, None, 0.0);
        let second = form.begin().unwrap();
        // First banner's timer fires while the second request is in flight
        assert!(!form.tick(RESET_DELAY_MS));
        assert_eq!(form.status(), FormStatus::Submitting);
        form.fail(second, "x".to_string(), 100.0);
        assert!(!form.tick(RESET_DELAY_MS));
        assert!(form.tick(RESET_DELAY_MS + 100.0));
    }

    #[test]
    fn test_stale_ticket_ignored() {
        let mut form = FormMachine::persistent();
        let ticket = form.begin().unwrap();
        form.fail(ticket, "x".to_string(), 0.0);
        assert!(!form.succeed(ticket, None, 1.0));
        assert_eq!(form.status(), FormStatus::Error);
    }

    // ========================================================================
    // Against the API
    // ========================================================================

    #[tokio::test]
    async fn test_newsletter_success_flow() {
        let stub = StubTransport::new().reply(200, r#"{"success":true}"#);
        let client = ApiClient::new(&stub, "http://api");
        let mut form = FormMachine::transient();

        let ticket = form.begin().unwrap();
        let result = client
            .subscribe(&NewsletterRequest {
                email: "a@b.co".to_string(),
            })
            .await;
        let ack = form.complete(ticket, result, Some("Subscribed"), "Failed to subscribe", 0.0);
        assert!(ack.is_some());
        assert_eq!(form.status(), FormStatus::Success);
        assert_eq!(form.message(), Some("Subscribed"));
    }

    #[tokio::test]
    async fn test_contact_success_clears_fields_and_resets() {
        let stub = StubTransport::new().reply(200, r#"{"success":true}"#);
        let client = ApiClient::new(&stub, "http://api");
        let mut form = FormMachine::transient();
        let mut input = ContactForm {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            phone: String::new(),
            message: "Hi".to_string(),
        };
        assert_eq!(form.status(), FormStatus::Idle);

        let request = input.validate().unwrap();
        let ticket = form.begin().unwrap();
        assert_eq!(form.status(), FormStatus::Submitting);

        let result = client.submit_contact(&request).await;
        if form
            .complete(ticket, result, Some(messages::CONTACT_SENT), messages::CONTACT_FAILED, 0.0)
            .is_some()
        {
            input = ContactForm::default();
        }
        assert_eq!(form.status(), FormStatus::Success);
        assert_eq!(input, ContactForm::default());

        assert!(!form.tick(4999.0));
        assert!(form.tick(5000.0));
        assert_eq!(form.status(), FormStatus::Idle);
    }

    #[tokio::test]
    async fn test_rejected_contact_uses_fallback_without_server_text() {
        let stub = StubTransport::new().reply(200, r#"{"success":false}"#);
        let client = ApiClient::new(&stub, "http://api");
        let mut form = FormMachine::transient();

        let ticket = form.begin().unwrap();
        let request = ContactRequest {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            phone: String::new(),
            message: "Hi".to_string(),
        };
        let result = client.submit_contact(&request).await;
        form.complete(ticket, result, None, messages::CONTACT_FAILED, 0.0);
        assert_eq!(form.message(), Some(messages::CONTACT_FAILED));
    }

    #[tokio::test]
    async fn test_network_failure_maps_to_error() {
        let stub = StubTransport::new().fail("timeout");
        let client = ApiClient::new(&stub, "http://api");
        let mut form = FormMachine::transient();

        let ticket = form.begin().unwrap();
        let result = client
            .subscribe(&NewsletterRequest {
                email: "a@b.co".to_string(),
            })
            .await;
        assert!(form.complete(ticket, result, None, "Failed", 0.0).is_none());
        assert_eq!(form.status(), FormStatus::Error);
        assert_eq!(form.message(), Some(NETWORK_ERROR_MESSAGE));
        assert!(form.tick(RESET_DELAY_MS));
        assert_eq!(form.status(), FormStatus::Idle);
    }

    #[tokio::test]
    async fn test_failed_login_stores_no_token() {
        let stub =
            StubTransport::new().reply(200, r#"{"success":false,"message":"Invalid credentials"}"#);
        let client = ApiClient::new(&stub, "http://api");
        let session = AdminSession::new(MemoryStore::new());
        let mut form = FormMachine::persistent();

        let ticket = form.begin().unwrap();
        let result = client
            .login(&LoginRequest {
                email: "admin@edutalks.in".to_string(),
                password: "wrong".to_string(),
            })
            .await;
        if let Some(login) = form.complete(ticket, result, None, "Login failed", 0.0) {
            session.sign_in(&login).unwrap();
        }

        assert_eq!(form.status(), FormStatus::Error);
        assert_eq!(form.message(), Some("Invalid credentials"));
        assert_eq!(session.guard(), AdminGuard::RedirectToLogin);
    }

    #[tokio::test]
    async fn test_successful_login_stores_token() {
        let stub = StubTransport::new().reply(
            200,
            r#"{"success":true,"token":"jwt","admin":{"id":1,"email":"admin@edutalks.in"}}"#,
        );
        let client = ApiClient::new(&stub, "http://api");
        let session = AdminSession::new(MemoryStore::new());
        let mut form = FormMachine::persistent();

        let ticket = form.begin().unwrap();
        let result = client
            .login(&LoginRequest {
                email: "admin@edutalks.in".to_string(),
                password: "right".to_string(),
            })
            .await;
        let login = form.complete(ticket, result, None, "Login failed", 0.0).unwrap();
        let token = session.sign_in(&login).unwrap();
        assert_eq!(session.guard(), AdminGuard::Allow(token));
    }
}
