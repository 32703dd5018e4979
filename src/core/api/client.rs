//! Typed operations over the external REST API.
//!
//! `ApiClient` builds requests and decodes responses; moving bytes is the
//! job of a [`Transport`]. The browser uses a `gloo-net` transport, tests
//! use an in-memory stub.

use std::future::Future;

use serde::Serialize;

use super::error::{ApiError, decode_response};
use super::models::{
    Ack, ContactRequest, JobInput, JobList, LoginRequest, LoginSuccess, NewsletterRequest,
    TeamList, TeamMemberInput,
};
use crate::core::session::AuthToken;

/// Used when no base URL is configured
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Method {
    #[display("GET")]
    Get,
    #[display("POST")]
    Post,
    #[display("PUT")]
    Put,
    #[display("DELETE")]
    Delete,
}

/// A fully resolved request, ready for a transport
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// JSON body
    pub body: Option<String>,
    pub bearer: Option<AuthToken>,
}

/// Status and body of whatever came back
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Carries a request to the API and returns the raw response.
///
/// Only failures where no response arrived at all are errors here; HTTP
/// error statuses come back as a `RawResponse`.
pub trait Transport {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<RawResponse, ApiError>>;
}

/// Join a base URL and an endpoint path with exactly one slash
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    transport: T,
    base: String,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, base: impl Into<String>) -> Self {
        Self {
            transport,
            base: base.into(),
        }
    }

    // ========================================================================
    // Public forms
    // ========================================================================

    pub async fn submit_contact(&self, request: &ContactRequest) -> Result<Ack, ApiError> {
        self.call(Method::Post, "/contact", Some(request), None).await
    }

    pub async fn subscribe(&self, request: &NewsletterRequest) -> Result<Ack, ApiError> {
        self.call(Method::Post, "/newsletter", Some(request), None)
            .await
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginSuccess, ApiError> {
        self.call(Method::Post, "/admin/login", Some(request), None)
            .await
    }

    // ========================================================================
    // Jobs
    // ========================================================================

    /// Active postings shown on the careers page
    pub async fn list_jobs(&self) -> Result<JobList, ApiError> {
        self.call::<(), _>(Method::Get, "/jobs", None, None).await
    }

    /// Every posting, including inactive ones
    pub async fn list_all_jobs(&self, token: &AuthToken) -> Result<JobList, ApiError> {
        self.call::<(), _>(Method::Get, "/jobs/admin/all", None, Some(token))
            .await
    }

    pub async fn create_job(&self, token: &AuthToken, job: &JobInput) -> Result<Ack, ApiError> {
        self.call(Method::Post, "/jobs", Some(job), Some(token))
            .await
    }

    pub async fn update_job(
        &self,
        token: &AuthToken,
        id: i64,
        job: &JobInput,
    ) -> Result<Ack, ApiError> {
        self.call(Method::Put, &format!("/jobs/{id}"), Some(job), Some(token))
            .await
    }

    pub async fn delete_job(&self, token: &AuthToken, id: i64) -> Result<Ack, ApiError> {
        self.call::<(), _>(Method::Delete, &format!("/jobs/{id}"), None, Some(token))
            .await
    }

    // ========================================================================
    // Team
    // ========================================================================

    pub async fn list_team(&self) -> Result<TeamList, ApiError> {
        self.call::<(), _>(Method::Get, "/team", None, None).await
    }

    pub async fn create_member(
        &self,
        token: &AuthToken,
        member: &TeamMemberInput,
    ) -> Result<Ack, ApiError> {
        self.call(Method::Post, "/team", Some(member), Some(token))
            .await
    }

    pub async fn update_member(
        &self,
        token: &AuthToken,
        id: i64,
        member: &TeamMemberInput,
    ) -> Result<Ack, ApiError> {
        self.call(Method::Put, &format!("/team/{id}"), Some(member), Some(token))
            .await
    }

    pub async fn delete_member(&self, token: &AuthToken, id: i64) -> Result<Ack, ApiError> {
        self.call::<(), _>(Method::Delete, &format!("/team/{id}"), None, Some(token))
            .await
    }

    async fn call<B, R>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        bearer: Option<&AuthToken>,
    ) -> Result<R, ApiError>
    where
        B: Serialize,
        R: serde::de::DeserializeOwned,
    {
        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        let request = ApiRequest {
            method,
            url: join_url(&self.base, path),
            body,
            bearer: bearer.cloned(),
        };

        let response = self.transport.send(request).await?;
        decode_response(response.status, &response.body)
    }
}

#[cfg(test)]
pub(crate) mod stub {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;

    /// Replays queued responses and records what was sent
    #[derive(Debug, Default)]
    pub struct StubTransport {
        responses: RefCell<VecDeque<Result<RawResponse, ApiError>>>,
        pub sent: RefCell<Vec<ApiRequest>>,
    }

    impl StubTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn reply(self, status: u16, body: &str) -> Self {
            self.responses.borrow_mut().push_back(Ok(RawResponse {
                status,
                body: body.to_string(),
            }));
            self
        }

        pub fn fail(self, reason: &str) -> Self {
            self.responses
                .borrow_mut()
                .push_back(Err(ApiError::Network(reason.to_string())));
            self
        }

        pub fn last(&self) -> ApiRequest {
            self.sent.borrow().last().cloned().unwrap()
        }
    }

    impl Transport for &StubTransport {
        fn send(&self, request: ApiRequest) -> impl Future<Output = Result<RawResponse, ApiError>> {
            self.sent.borrow_mut().push(request);
            let next = self
                .responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Network("no stubbed response".to_string())));
            std::future::ready(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::stub::StubTransport;
    use super::*;
    use crate::core::api::models::JobType;

    fn token() -> AuthToken {
        AuthToken::new("tok-123")
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://h/api/", "/jobs"), "http://h/api/jobs");
        assert_eq!(join_url("http://h/api", "team/4"), "http://h/api/team/4");
    }

    // ========================================================================
    // Request shape
    // ========================================================================

    #[tokio::test]
    async fn test_contact_request_shape() {
        let stub = StubTransport::new().reply(200, r#"{"success":true,"message":"Thanks"}"#);
        let client = ApiClient::new(&stub, DEFAULT_API_BASE);

        let ack = client
            .submit_contact(&ContactRequest {
                name: "Asha".to_string(),
                email: "asha@example.com".to_string(),
                phone: String::new(),
                message: "Hello".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(ack.message.as_deref(), Some("Thanks"));

        let sent = stub.last();
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.url, "http://localhost:5000/api/contact");
        assert!(sent.bearer.is_none());
        let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["email"], "asha@example.com");
        assert_eq!(body["phone"], "");
    }

    #[tokio::test]
    async fn test_admin_calls_carry_bearer() {
        let stub = StubTransport::new()
            .reply(200, r#"{"success":true,"jobs":[]}"#)
            .reply(200, r#"{"success":true}"#)
            .reply(200, r#"{"success":true}"#);
        let client = ApiClient::new(&stub, "http://api");

        client.list_all_jobs(&token()).await.unwrap();
        assert_eq!(stub.last().url, "http://api/jobs/admin/all");
        assert_eq!(stub.last().bearer, Some(token()));

        let job = JobInput {
            title: "Mentor".to_string(),
            job_type: JobType::Contract,
            ..Default::default()
        };
        client.update_job(&token(), 7, &job).await.unwrap();
        assert_eq!(stub.last().method, Method::Put);
        assert_eq!(stub.last().url, "http://api/jobs/7");

        client.delete_member(&token(), 3).await.unwrap();
        let sent = stub.last();
        assert_eq!(sent.method, Method::Delete);
        assert_eq!(sent.url, "http://api/team/3");
        assert!(sent.body.is_none());
    }

    // ========================================================================
    // Outcomes
    // ========================================================================

    #[tokio::test]
    async fn test_network_failure_is_an_error_value() {
        let stub = StubTransport::new().fail("connection refused");
        let client = ApiClient::new(&stub, "http://api");
        let err = client.list_jobs().await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }

    #[tokio::test]
    async fn test_login_rejected() {
        let stub =
            StubTransport::new().reply(401, r#"{"success":false,"message":"Invalid credentials"}"#);
        let client = ApiClient::new(&stub, "http://api");
        let err = client
            .login(&LoginRequest {
                email: "a@b.c".to_string(),
                password: "nope".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.user_message("Login failed"), "Invalid credentials");
    }

    #[tokio::test]
    async fn test_team_listing() {
        let stub = StubTransport::new().reply(
            200,
            r#"{"success":true,"data":[{"id":1,"name":"Ravi","role":"Founder"}]}"#,
        );
        let client = ApiClient::new(&stub, "http://api");
        let team = client.list_team().await.unwrap();
        assert_eq!(team.data[0].name, "Ravi");
        assert_eq!(stub.last().method, Method::Get);
    }
}
