//! Errors returned by the generation client.

use thiserror::Error;

/// Errors that can occur while generating an image.
///
/// The `Display` text is what the user sees in the error banner.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// No API key in the config or the environment.
    #[error("No API key configured. Set {env_var} or add api_key to the config file.")]
    MissingApiKey { env_var: String },

    /// The HTTP client could not be built.
    #[error("Could not set up the HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The service could not be reached (DNS, connect, TLS, timeout).
    #[error("Could not reach the generation service: {0}")]
    Unreachable(#[source] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("{}", rejection_text(.status, .message))]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    /// The prompt was blocked by the service's safety filters.
    #[error("{0}")]
    Blocked(String),

    /// The response contained no image.
    #[error("{}", no_image_text(.detail))]
    NoImage { detail: Option<String> },

    /// The response could not be parsed or the payload is not base64.
    #[error("The generation service returned a malformed response: {0}")]
    Malformed(String),
}

impl GenerationError {
    /// Text to surface to the user, if the failure carries any.
    ///
    /// A rejection without a message body has no description; the caller
    /// substitutes its generic fallback.
    pub fn description(&self) -> Option<String> {
        match self {
            Self::Rejected { message, .. } => message
                .as_deref()
                .map(str::trim)
                .filter(|text| !text.is_empty())
                .map(str::to_string),
            other => Some(other.to_string()),
        }
    }
}

fn rejection_text(status: &u16, message: &Option<String>) -> String {
    match message.as_deref() {
        Some(text) if !text.trim().is_empty() => text.trim().to_string(),
        _ => format!("The generation service rejected the request (HTTP {status})"),
    }
}

fn no_image_text(detail: &Option<String>) -> String {
    match detail.as_deref() {
        Some(text) if !text.trim().is_empty() => {
            format!("The model did not return an image: {}", text.trim())
        }
        _ => "The model did not return an image. Try a different description.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_shows_service_message() {
        let err = GenerationError::Rejected {
            status: 429,
            message: Some("quota exceeded".to_string()),
        };
        assert_eq!(err.to_string(), "quota exceeded");
        assert_eq!(err.description().as_deref(), Some("quota exceeded"));
    }

    #[test]
    fn rejection_without_message_has_no_description() {
        let err = GenerationError::Rejected {
            status: 500,
            message: None,
        };
        assert!(err.description().is_none());
        assert!(err.to_string().contains("HTTP 500"));

        let blank = GenerationError::Rejected {
            status: 502,
            message: Some("  ".to_string()),
        };
        assert!(blank.description().is_none());
    }

    #[test]
    fn missing_key_names_variable() {
        let err = GenerationError::MissingApiKey {
            env_var: "GEMINI_API_KEY".to_string(),
        };
        assert!(err.description().unwrap().contains("GEMINI_API_KEY"));
    }

    #[test]
    fn no_image_includes_model_text() {
        let err = GenerationError::NoImage {
            detail: Some("I can only draw animals".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "The model did not return an image: I can only draw animals"
        );
    }
}
