use super::{deserialize_id, Envelope};
use crate::Failure;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignSummary {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdsetSummary {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub campaigns: Vec<CampaignSummary>,
    #[serde(default)]
    pub error: Option<String>,
}

impl Envelope for CampaignsResponse {
    type Payload = Vec<CampaignSummary>;

    fn into_result(self) -> Result<Self::Payload, Failure> {
        if self.success {
            Ok(self.campaigns)
        } else {
            Err(Failure::from_error_field(self.error))
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdsetsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub adsets: Vec<AdsetSummary>,
    #[serde(default)]
    pub error: Option<String>,
}

impl Envelope for AdsetsResponse {
    type Payload = Vec<AdsetSummary>;

    fn into_result(self) -> Result<Self::Payload, Failure> {
        if self.success {
            Ok(self.adsets)
        } else {
            Err(Failure::from_error_field(self.error))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_campaign_ids_accept_numbers_and_strings() {
        let json = r#"{
            "success": true,
            "campaigns": [
                {"id": 120208, "name": "Spring Launch"},
                {"id": "1784", "name": "Retargeting", "status": "ACTIVE"}
            ]
        }"#;
        let campaigns = serde_json::from_str::<CampaignsResponse>(json)
            .unwrap()
            .into_result()
            .unwrap();
        assert_eq!(campaigns[0].id, "120208");
        assert_eq!(campaigns[1].id, "1784");
        assert_eq!(campaigns[1].status.as_deref(), Some("ACTIVE"));
    }

    #[test]
    fn test_adsets_failure() {
        let json = r#"{"success": false, "error": "Token expired"}"#;
        let failure = serde_json::from_str::<AdsetsResponse>(json)
            .unwrap()
            .into_result()
            .unwrap_err();
        assert_eq!(failure.message, "Token expired");
    }
}
