use reqwest::StatusCode;
use serde::Deserialize;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Failure of a call against the voyage backend.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a usable response (connection refused,
    /// malformed JSON, ...).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The backend answered with a non-2xx status. `message` is what the
    /// backend said, if anything.
    #[error("{}", describe_status(.status, .message))]
    Status {
        status: StatusCode,
        message: Option<String>,
    },
}

fn describe_status(status: &StatusCode, message: &Option<String>) -> String {
    match message {
        Some(message) => message.clone(),
        None => format!("request failed with status {}", status.as_u16()),
    }
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status(),
        }
    }

    /// The human-readable message supplied by the backend, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            ApiError::Transport(_) => None,
        }
    }

    /// Build a status error from a response body, preferring the backend's
    /// `error` field, then `message`.
    pub(crate) fn from_body(status: StatusCode, body: &str) -> Self {
        #[derive(Deserialize)]
        struct ErrorBody {
            error: Option<String>,
            message: Option<String>,
        }

        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error.or(b.message))
            .filter(|m| !m.trim().is_empty());

        ApiError::Status { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefers_error_field() {
        let err = ApiError::from_body(
            StatusCode::UNAUTHORIZED,
            r#"{"error":"Invalid credentials","message":"ignored"}"#,
        );
        assert_eq!(err.to_string(), "Invalid credentials");
        assert_eq!(err.server_message(), Some("Invalid credentials"));
        assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
    }

    #[test]
    fn test_falls_back_to_message_field() {
        let err = ApiError::from_body(StatusCode::BAD_REQUEST, r#"{"message":"vesselName is required"}"#);
        assert_eq!(err.to_string(), "vesselName is required");
    }

    #[test]
    fn test_falls_back_to_status() {
        let err = ApiError::from_body(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>");
        assert_eq!(err.to_string(), "request failed with status 500");
        assert_eq!(err.server_message(), None);
    }
}
