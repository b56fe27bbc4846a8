use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Meta,
    #[serde(rename = "tiktok")]
    TikTok,
}

impl Platform {
    pub const ALL: [Platform; 2] = [Platform::Meta, Platform::TikTok];

    /// Path segment used by the backend routes (`/api/{slug}/...`).
    pub fn slug(self) -> &'static str {
        match self {
            Platform::Meta => "meta",
            Platform::TikTok => "tiktok",
        }
    }

    /// Query parameter carrying the advertiser account on this platform.
    pub fn account_param(self) -> &'static str {
        match self {
            Platform::Meta => "account_id",
            Platform::TikTok => "advertiser_id",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Platform::Meta => "Meta",
            Platform::TikTok => "TikTok",
        }
    }

    /// Name of the advertiser id field in the campaign form.
    pub fn account_field(self) -> &'static str {
        match self {
            Platform::Meta => "meta_account_id",
            Platform::TikTok => "tiktok_advertiser_id",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown platform: {0}")]
pub struct UnknownPlatform(pub String);

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "meta" | "facebook" => Ok(Platform::Meta),
            "tiktok" => Ok(Platform::TikTok),
            other => Err(UnknownPlatform(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("meta", Platform::Meta)]
    #[case("Facebook", Platform::Meta)]
    #[case(" TikTok ", Platform::TikTok)]
    fn test_parse_platform(#[case] input: &str, #[case] expected: Platform) {
        assert_eq!(input.parse::<Platform>().unwrap(), expected);
    }

    #[test]
    fn test_parse_unknown_platform() {
        assert!("snapchat".parse::<Platform>().is_err());
    }

    #[test]
    fn test_serde_uses_route_slug() {
        assert_eq!(serde_json::to_string(&Platform::TikTok).unwrap(), "\"tiktok\"");
        let parsed: Platform = serde_json::from_str("\"meta\"").unwrap();
        assert_eq!(parsed, Platform::Meta);
    }
}
