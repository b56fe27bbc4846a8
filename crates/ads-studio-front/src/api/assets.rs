use super::client::{get_envelope, get_json, post_envelope};
use super::{APICaller, ApiError};
use crate::config::AppConfig;
use crate::models::library::LibrarySource;
use crate::models::Asset;
use common::request::UpdateTextRequest;
use common::response::{ActionResponse, AssetRecord, AssetsResponse};

impl APICaller {
    /// Loads the asset library. Any failure of the library endpoint falls
    /// back to the configured file list under the uploads folder.
    pub async fn load_library_assets(&self, config: &AppConfig) -> (Vec<Asset>, LibrarySource) {
        let url = self.url(&config.library_endpoint);
        match get_envelope::<AssetsResponse>(&url, &[]).await {
            Ok(records) => {
                log::info!("Loaded {} library assets", records.len());
                (records.into_iter().map(Asset::from).collect(), LibrarySource::Api)
            }
            Err(e) => {
                log::warn!("Asset library unavailable ({}), using uploads fallback", e);
                let assets = config
                    .fallback_files
                    .iter()
                    .map(|name| Asset::from_upload(&config.uploads_path, name))
                    .collect();
                (assets, LibrarySource::Fallback)
            }
        }
    }

    pub async fn get_asset(&self, id: &str) -> Result<AssetRecord, ApiError> {
        get_json(&self.url(&format!("/api/assets/{}", id))).await
    }

    pub async fn update_asset_text(&self, id: &str, request: &UpdateTextRequest) -> Result<Option<String>, ApiError> {
        let url = self.url(&format!("/api/assets/{}/update-text", id));
        post_envelope::<ActionResponse, _>(&url, Some(request)).await
    }

    pub async fn regenerate_asset(&self, id: &str) -> Result<Option<String>, ApiError> {
        let url = self.url(&format!("/api/assets/{}/regenerate", id));
        post_envelope::<ActionResponse, ()>(&url, None).await
    }

    pub async fn resubmit_asset(&self, id: &str) -> Result<Option<String>, ApiError> {
        let url = self.url(&format!("/api/assets/{}/resubmit", id));
        post_envelope::<ActionResponse, ()>(&url, None).await
    }
}
