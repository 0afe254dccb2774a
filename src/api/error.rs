//! Typed error for the storefront API boundary

use thiserror::Error;

/// Failure reported by the API layer.
///
/// `Transport` covers connection and decode failures raised by the HTTP
/// client; `Server` is a non-2xx response with whatever the backend put
/// in its error body. Callers match on the tag instead of probing
/// optional response fields.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned status {status}")]
    Server {
        status: u16,
        /// Top-level `message` from the error body, when present
        message: Option<String>,
        /// Server-side validation message for the domain field
        domain: Option<String>,
    },
}

impl ApiError {
    /// Human-readable message: the server-supplied one when present,
    /// otherwise the given fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Server {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }

    /// Server-side validation error attributable to the domain field
    pub fn domain_message(&self) -> Option<&str> {
        match self {
            Self::Server {
                domain: Some(domain),
                ..
            } => Some(domain),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ApiError::Server {
            status: 400,
            message: Some("Domain already registered".to_string()),
            domain: None,
        };
        assert_eq!(err.user_message("fallback"), "Domain already registered");
    }

    #[test]
    fn test_user_message_falls_back_when_body_was_empty() {
        let err = ApiError::Server {
            status: 500,
            message: None,
            domain: None,
        };
        assert_eq!(err.user_message("fallback"), "fallback");
    }

    #[test]
    fn test_domain_message_only_for_field_errors() {
        let err = ApiError::Server {
            status: 422,
            message: Some("validation failed".to_string()),
            domain: Some("Domain is taken".to_string()),
        };
        assert_eq!(err.domain_message(), Some("Domain is taken"));

        let err = ApiError::Server {
            status: 422,
            message: Some("validation failed".to_string()),
            domain: None,
        };
        assert_eq!(err.domain_message(), None);
    }
}
