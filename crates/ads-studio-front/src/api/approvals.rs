use super::client::get_envelope;
use super::{APICaller, ApiError};
use crate::models::approval::Approval;
use common::response::AssetsResponse;

impl APICaller {
    pub async fn list_approvals(&self) -> Result<Vec<Approval>, ApiError> {
        let records = get_envelope::<AssetsResponse>(&self.url("/api/approvals"), &[]).await?;
        Ok(records.into_iter().map(Approval::from).collect())
    }
}
