use super::{deserialize_id, Envelope};
use crate::Failure;
use serde::{Deserialize, Serialize};
use serde_with::formats::PreferMany;
use serde_with::{serde_as, OneOrMany};

const VIDEO_EXTENSIONS: [&str; 5] = ["mp4", "mov", "webm", "avi", "mkv"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    #[default]
    Image,
    Video,
}

impl AssetKind {
    /// Guesses the kind from a file name or URL extension.
    pub fn from_file_name(name: &str) -> Self {
        let ext = name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            AssetKind::Video
        } else {
            AssetKind::Image
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AssetKind::Image => "image",
            AssetKind::Video => "video",
        }
    }
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRecord {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(rename = "type", default)]
    pub kind: AssetKind,

    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub width: u32,

    #[serde(default)]
    pub height: u32,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub headline: Option<String>,

    #[serde(default)]
    pub tc_text: Option<String>,

    #[serde_as(as = "OneOrMany<_, PreferMany>")]
    #[serde(default)]
    pub rejection_reasons: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub assets: Vec<AssetRecord>,
    #[serde(default)]
    pub error: Option<String>,
}

impl Envelope for AssetsResponse {
    type Payload = Vec<AssetRecord>;

    fn into_result(self) -> Result<Self::Payload, Failure> {
        if self.success {
            Ok(self.assets)
        } else {
            Err(Failure::from_error_field(self.error))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("clip.MP4", AssetKind::Video)]
    #[case("/static/uploads/teaser.webm", AssetKind::Video)]
    #[case("banner.png", AssetKind::Image)]
    #[case("no-extension", AssetKind::Image)]
    fn test_kind_from_file_name(#[case] name: &str, #[case] expected: AssetKind) {
        assert_eq!(AssetKind::from_file_name(name), expected);
    }

    #[test]
    fn test_rejection_reasons_accept_single_string() {
        let json = r#"{"id": 7, "type": "video", "rejection_reasons": "Text covers too much of the frame"}"#;
        let record: AssetRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "7");
        assert_eq!(record.kind, AssetKind::Video);
        assert_eq!(record.rejection_reasons, vec!["Text covers too much of the frame"]);
    }

    #[test]
    fn test_asset_record_defaults() {
        let record: AssetRecord = serde_json::from_str(r#"{"id": "a1"}"#).unwrap();
        assert_eq!(record.kind, AssetKind::Image);
        assert_eq!((record.width, record.height), (0, 0));
        assert!(record.rejection_reasons.is_empty());
        assert!(record.headline.is_none());
    }
}
