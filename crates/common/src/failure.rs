use serde::{Deserialize, Serialize};

/// A request the backend answered with `success: false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct Failure {
    pub message: String,
}

impl Failure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The backend omitted `error`; fall back to a generic message.
    pub fn from_error_field(error: Option<String>) -> Self {
        match error {
            Some(message) if !message.trim().is_empty() => Self::new(message),
            _ => Self::new("Unknown error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_error_field_keeps_message() {
        let failure = Failure::from_error_field(Some("Invalid account".to_string()));
        assert_eq!(failure.to_string(), "Invalid account");
    }

    #[test]
    fn test_from_error_field_blank_is_unknown() {
        assert_eq!(Failure::from_error_field(None).message, "Unknown error");
        assert_eq!(
            Failure::from_error_field(Some("  ".to_string())).message,
            "Unknown error"
        );
    }

    #[test]
    fn test_serializes_message_only() {
        let json = serde_json::to_value(Failure::new("Quota exceeded")).unwrap();
        assert_eq!(json, serde_json::json!({ "message": "Quota exceeded" }));
    }
}
