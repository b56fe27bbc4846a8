use super::asset::{Asset, AssetId};
use super::assignment::ZoneKey;
use common::response::AssetKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const MIME_JSON: &str = "application/json";
pub const MIME_TEXT: &str = "text/plain";

/// What travels in a drag's data transfer. Written to both the JSON and
/// plain-text slots since some drop targets only read one of them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragPayload {
    pub id: AssetId,
    #[serde(rename = "type")]
    pub kind: AssetKind,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    /// Set when the drag starts inside a drop zone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_zone: Option<ZoneKey>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PayloadError {
    #[error("drop carried no asset data")]
    Empty,
    #[error("drop data is not an asset: {0}")]
    Malformed(String),
}

impl DragPayload {
    pub fn from_asset(asset: &Asset) -> Self {
        Self {
            id: asset.id.clone(),
            kind: asset.kind,
            name: asset.name.clone(),
            url: asset.url.clone(),
            width: asset.width,
            height: asset.height,
            from_zone: None,
        }
    }

    pub fn with_zone(mut self, zone: ZoneKey) -> Self {
        self.from_zone = Some(zone);
        self
    }

    pub fn encode(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Decodes drop data, preferring the JSON slot and falling back to the
    /// plain-text one when the former is missing or unreadable.
    pub fn decode(json_slot: Option<&str>, text_slot: Option<&str>) -> Result<Self, PayloadError> {
        let candidates: Vec<&str> = [json_slot, text_slot]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        if candidates.is_empty() {
            return Err(PayloadError::Empty);
        }
        let mut last_error = String::new();
        for raw in candidates {
            match serde_json::from_str::<DragPayload>(raw) {
                Ok(payload) if !payload.id.is_empty() => return Ok(payload),
                Ok(_) => last_error = "missing id".to_string(),
                Err(e) => last_error = e.to_string(),
            }
        }
        Err(PayloadError::Malformed(last_error))
    }
}

/// Video dimensions probed in the background, reused on later drags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DimensionCache {
    known: HashMap<AssetId, (u32, u32)>,
}

impl DimensionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Videos without dimensions that have not been probed yet.
    pub fn needs_probe(&self, asset: &Asset) -> bool {
        asset.is_video() && !asset.has_dimensions() && !self.known.contains_key(&asset.id)
    }

    pub fn record(&mut self, id: &str, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.known.insert(id.to_string(), (width, height));
        }
    }

    pub fn get(&self, id: &str) -> Option<(u32, u32)> {
        self.known.get(id).copied()
    }

    /// Payload for a drag, filled with cached dimensions when available.
    pub fn payload_for(&self, asset: &Asset) -> DragPayload {
        let mut payload = DragPayload::from_asset(asset);
        if !asset.has_dimensions() {
            if let Some((w, h)) = self.get(&asset.id) {
                payload.width = w;
                payload.height = h;
            }
        }
        payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::Platform;

    fn video() -> Asset {
        Asset::from_upload("/static/uploads/", "promo.mp4")
    }

    #[test]
    fn test_json_slot_wins() {
        let json = DragPayload::from_asset(&video()).encode();
        let other = DragPayload::from_asset(&Asset::from_upload("/u/", "x.jpg")).encode();
        let payload = DragPayload::decode(Some(json.as_str()), Some(other.as_str())).unwrap();
        assert_eq!(payload.id, "promo.mp4");
        assert_eq!(payload.kind, AssetKind::Video);
    }

    #[test]
    fn test_falls_back_to_text_slot() {
        let text = DragPayload::from_asset(&video()).encode();
        assert_eq!(DragPayload::decode(None, Some(text.as_str())).unwrap().id, "promo.mp4");
        assert_eq!(DragPayload::decode(Some("{oops"), Some(text.as_str())).unwrap().id, "promo.mp4");
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(DragPayload::decode(None, Some("  ")), Err(PayloadError::Empty));
        assert!(matches!(
            DragPayload::decode(Some("hello"), None),
            Err(PayloadError::Malformed(_))
        ));
        assert!(matches!(
            DragPayload::decode(Some(r#"{"id":"","type":"image","name":"","url":""}"#), None),
            Err(PayloadError::Malformed(_))
        ));
    }

    #[test]
    fn test_zone_origin_survives_encoding() {
        let zone = ZoneKey::new(Platform::TikTok, "778");
        let encoded = DragPayload::from_asset(&video()).with_zone(zone.clone()).encode();
        assert!(encoded.contains("\"type\":\"video\""));
        let decoded = DragPayload::decode(Some(encoded.as_str()), None).unwrap();
        assert_eq!(decoded.from_zone, Some(zone));
    }

    #[test]
    fn test_dimension_cache() {
        let mut cache = DimensionCache::new();
        let asset = video();
        assert!(cache.needs_probe(&asset));
        assert_eq!(cache.payload_for(&asset).width, 0);

        cache.record(&asset.id, 1080, 1920);
        assert!(!cache.needs_probe(&asset));
        let payload = cache.payload_for(&asset);
        assert_eq!((payload.width, payload.height), (1080, 1920));
    }

    #[test]
    fn test_images_are_never_probed() {
        let cache = DimensionCache::new();
        assert!(!cache.needs_probe(&Asset::from_upload("/u/", "still.png")));
    }
}
