use super::client::get_envelope;
use super::{APICaller, ApiError};
use common::response::{AdsetSummary, AdsetsResponse, CampaignSummary, CampaignsResponse};
use common::Platform;

impl APICaller {
    pub async fn list_campaigns(&self, platform: Platform, account_id: &str) -> Result<Vec<CampaignSummary>, ApiError> {
        let url = self.url(&format!("/api/{}/campaigns", platform.slug()));
        get_envelope::<CampaignsResponse>(&url, &[(platform.account_param(), account_id)]).await
    }

    pub async fn list_adsets(
        &self,
        platform: Platform,
        account_id: &str,
        campaign_id: &str,
    ) -> Result<Vec<AdsetSummary>, ApiError> {
        let url = self.url(&format!("/api/{}/adsets", platform.slug()));
        get_envelope::<AdsetsResponse>(
            &url,
            &[("campaign_id", campaign_id), (platform.account_param(), account_id)],
        )
        .await
    }
}
