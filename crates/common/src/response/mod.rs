use crate::Failure;
use serde::{Deserialize, Deserializer, Serialize};

pub mod asset_response;
pub mod campaign_response;

pub use asset_response::{AssetKind, AssetRecord, AssetsResponse};
pub use campaign_response::{AdsetSummary, AdsetsResponse, CampaignSummary, CampaignsResponse};

/// Every backend reply carries `success` and, on failure, `error`.
pub trait Envelope {
    type Payload;

    fn into_result(self) -> Result<Self::Payload, Failure>;
}

/// Reply of the mutating asset endpoints (`update-text`, `regenerate`, `resubmit`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl Envelope for ActionResponse {
    type Payload = Option<String>;

    fn into_result(self) -> Result<Self::Payload, Failure> {
        if self.success {
            Ok(self.message)
        } else {
            Err(Failure::from_error_field(self.error))
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Text(String),
    Int(i64),
    Uint(u64),
}

/// Ad platform ids arrive as JSON strings or numbers depending on the endpoint.
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match IdRepr::deserialize(deserializer)? {
        IdRepr::Text(s) => s,
        IdRepr::Int(n) => n.to_string(),
        IdRepr::Uint(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_response_success() {
        let response: ActionResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert_eq!(response.into_result(), Ok(None));
    }

    #[test]
    fn test_action_response_failure_carries_error() {
        let response: ActionResponse =
            serde_json::from_str(r#"{"success": false, "error": "Asset is locked"}"#).unwrap();
        let failure = response.into_result().unwrap_err();
        assert_eq!(failure.message, "Asset is locked");
    }

    #[test]
    fn test_missing_success_is_failure() {
        let response: ActionResponse = serde_json::from_str("{}").unwrap();
        assert!(response.into_result().is_err());
    }
}
