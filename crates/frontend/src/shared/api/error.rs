use contracts::shared::ErrorBody;
use thiserror::Error;

/// Failure of a backend call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx response. `message` is the backend's own text, if it sent one.
    #[error("request failed with status {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },
    #[error("unexpected response shape: {0}")]
    Decode(String),
    #[error("failed to encode request: {0}")]
    Encode(String),
    #[error("not authenticated")]
    Unauthenticated,
}

impl ApiError {
    pub fn from_status(status: u16, body: &str) -> Self {
        ApiError::Status {
            status,
            message: ErrorBody::message_from(body),
        }
    }

    /// Text for a notification: the backend's message when it has one,
    /// otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Unauthenticated => "Not authenticated".to_string(),
            _ => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_uses_backend_message() {
        let err = ApiError::from_status(400, r#"{"name": ["This field is required."]}"#);
        assert_eq!(
            err.user_message("Failed to save"),
            "name: This field is required."
        );
    }

    #[test]
    fn test_status_without_body_falls_back() {
        let err = ApiError::from_status(500, "<html>Server Error</html>");
        assert_eq!(
            err,
            ApiError::Status {
                status: 500,
                message: None
            }
        );
        assert_eq!(err.user_message("Failed to save"), "Failed to save");
    }

    #[test]
    fn test_network_and_decode_fall_back() {
        assert_eq!(
            ApiError::Network("offline".into()).user_message("Failed to fetch"),
            "Failed to fetch"
        );
        assert_eq!(
            ApiError::Decode("missing field `id`".into()).user_message("Failed to fetch"),
            "Failed to fetch"
        );
    }
}
