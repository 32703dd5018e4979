//! API error taxonomy and response decoding
//!
//! Responses are decoded once, here, into `Result<T, ApiError>`. Callers
//! never look at the wire-level `success` flag.

use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Shown whenever no response arrived at all
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection and try again.";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// No response: connection refused, timeout, CORS failure
    #[error("Network failure: {0}")]
    Network(String),

    /// Well-formed response declaring `success: false`
    #[error("Request rejected: {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { message: Option<String> },

    /// 401/403 from an authenticated endpoint
    #[error("Not authorized")]
    Unauthorized { message: Option<String> },

    /// Response body was not the expected shape
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text for a banner. Server messages are shown verbatim; otherwise
    /// the form's own fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Network(_) => NETWORK_ERROR_MESSAGE.to_string(),
            ApiError::Rejected { message } | ApiError::Unauthorized { message } => message
                .as_deref()
                .filter(|m| !m.trim().is_empty())
                .unwrap_or(fallback)
                .to_string(),
            ApiError::Decode(_) => fallback.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

/// Decode a raw HTTP response into the payload type or an error
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    let value: serde_json::Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => {
            return Err(match status {
                401 | 403 => ApiError::Unauthorized { message: None },
                200..=299 => ApiError::Decode(e.to_string()),
                _ => ApiError::Rejected { message: None },
            });
        }
    };

    let envelope = Envelope::deserialize(&value).map_err(|e| ApiError::Decode(e.to_string()))?;

    if status == 401 || status == 403 {
        return Err(ApiError::Unauthorized {
            message: envelope.message,
        });
    }

    if !envelope.success {
        return Err(ApiError::Rejected {
            message: envelope.message,
        });
    }

    T::deserialize(value).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::models::{Ack, JobList, LoginSuccess};

    #[test]
    fn test_success_payload() {
        let list: JobList = decode_response(
            200,
            r#"{"success":true,"jobs":[{"id":1,"title":"Mentor","type":"Part-time"}]}"#,
        )
        .unwrap();
        assert_eq!(list.jobs.len(), 1);
        assert_eq!(list.jobs[0].title, "Mentor");
    }

    #[test]
    fn test_success_false_is_rejected_with_message() {
        let err = decode_response::<LoginSuccess>(
            200,
            r#"{"success":false,"message":"Invalid credentials"}"#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ApiError::Rejected {
                message: Some("Invalid credentials".to_string())
            }
        );
        assert_eq!(err.user_message("Login failed"), "Invalid credentials");
    }

    #[test]
    fn test_error_status_with_body_keeps_server_message() {
        let err = decode_response::<Ack>(400, r#"{"success":false,"message":"Email already subscribed"}"#)
            .unwrap_err();
        assert_eq!(err.user_message("x"), "Email already subscribed");
    }

    #[test]
    fn test_missing_success_flag_is_rejection() {
        let err = decode_response::<Ack>(200, r#"{"message":""}"#).unwrap_err();
        assert_eq!(err.user_message("Failed to subscribe"), "Failed to subscribe");
    }

    #[test]
    fn test_unauthorized() {
        let err = decode_response::<JobList>(401, r#"{"success":false,"message":"Token expired"}"#)
            .unwrap_err();
        assert!(err.is_unauthorized());
        assert!(decode_response::<JobList>(403, "Forbidden").unwrap_err().is_unauthorized());
    }

    #[test]
    fn test_non_json_bodies() {
        assert!(matches!(
            decode_response::<Ack>(200, "<html>"),
            Err(ApiError::Decode(_))
        ));
        assert_eq!(
            decode_response::<Ack>(502, "Bad Gateway"),
            Err(ApiError::Rejected { message: None })
        );
    }

    #[test]
    fn test_success_with_wrong_shape_is_decode_error() {
        let err = decode_response::<LoginSuccess>(200, r#"{"success":true}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        assert_eq!(err.user_message("Login failed"), "Login failed");
    }

    #[test]
    fn test_network_message_is_generic() {
        let err = ApiError::Network("TypeError: Failed to fetch".to_string());
        assert_eq!(err.user_message("ignored"), NETWORK_ERROR_MESSAGE);
    }
}
