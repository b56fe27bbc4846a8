use common::response::{AssetKind, AssetRecord};
use serde::{Deserialize, Serialize};

pub type AssetId = String;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub id: AssetId,
    pub kind: AssetKind,
    pub name: String,
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub description: Option<String>,
}

impl From<AssetRecord> for Asset {
    fn from(record: AssetRecord) -> Self {
        let name = if record.name.is_empty() {
            record.url.rsplit('/').next().unwrap_or_default().to_string()
        } else {
            record.name
        };
        Self {
            id: record.id,
            kind: record.kind,
            name,
            url: record.url,
            width: record.width,
            height: record.height,
            description: record.description,
        }
    }
}

impl Asset {
    /// Builds an asset from a bare file name under the uploads directory.
    pub fn from_upload(uploads_path: &str, file_name: &str) -> Self {
        Self {
            id: file_name.to_string(),
            kind: AssetKind::from_file_name(file_name),
            name: file_name.to_string(),
            url: format!("{}{}", uploads_path, file_name),
            width: 0,
            height: 0,
            description: None,
        }
    }

    pub fn is_video(&self) -> bool {
        self.kind == AssetKind::Video
    }

    pub fn has_dimensions(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Case-insensitive substring match over name and description.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(needle)
            || self
                .description
                .as_deref()
                .map(|d| d.to_lowercase().contains(needle))
                .unwrap_or(false)
    }
}

#[cfg(test)]
pub(crate) fn sample_asset(id: &str) -> Asset {
    Asset::from_upload("/static/uploads/", &format!("{}.jpg", id))
}
