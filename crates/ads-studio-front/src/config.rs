use serde::{Deserialize, Serialize};

/// Id of the inline `<script type="application/json">` the hosting page may
/// provide to override defaults.
pub const CONFIG_ELEMENT_ID: &str = "ads-studio-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u32,

    #[serde(default = "default_library_endpoint")]
    pub library_endpoint: String,

    #[serde(default = "default_uploads_path")]
    pub uploads_path: String,

    #[serde(default = "default_fallback_files")]
    pub fallback_files: Vec<String>,

    #[serde(default = "default_form_action")]
    pub form_action: String,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            toast_duration_ms: default_toast_duration_ms(),
            library_endpoint: default_library_endpoint(),
            uploads_path: default_uploads_path(),
            fallback_files: default_fallback_files(),
            form_action: default_form_action(),
            log_level: default_log_level(),
        }
    }
}

fn default_page_size() -> usize {
    20
}

fn default_toast_duration_ms() -> u32 {
    3000
}

fn default_library_endpoint() -> String {
    "/api/assets".to_string()
}

fn default_uploads_path() -> String {
    "/static/uploads/".to_string()
}

fn default_fallback_files() -> Vec<String> {
    [
        "summer_sale_banner.jpg",
        "product_showcase.mp4",
        "brand_story.mp4",
        "holiday_promo.png",
        "app_install_square.jpg",
        "testimonial_cut.mov",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_form_action() -> String {
    "/campaigns/create".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Parses the page-provided JSON; missing keys keep their defaults,
    /// unparsable input yields the full default config.
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<AppConfig>(raw) {
            Ok(config) => config.normalized(),
            Err(e) => {
                log::warn!("Ignoring invalid config block: {}", e);
                Self::default()
            }
        }
    }

    fn normalized(mut self) -> Self {
        if self.page_size == 0 {
            self.page_size = default_page_size();
        }
        if !self.uploads_path.ends_with('/') {
            self.uploads_path.push('/');
        }
        self
    }

    pub fn log_level(&self) -> log::Level {
        match self.log_level.to_ascii_lowercase().as_str() {
            "trace" => log::Level::Trace,
            "debug" => log::Level::Debug,
            "warn" => log::Level::Warn,
            "error" => log::Level::Error,
            _ => log::Level::Info,
        }
    }

    /// Reads the config block from the current document, if any.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content())
            .map(|raw| Self::from_json(&raw))
            .unwrap_or_default()
    }
}

/// Config provided by the app root.
#[cfg(target_arch = "wasm32")]
#[yew::hook]
pub fn use_config() -> AppConfig {
    yew::use_context::<AppConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = AppConfig::from_json(r#"{ "page_size": 12, "uploads_path": "/media" }"#);
        assert_eq!(config.page_size, 12);
        assert_eq!(config.uploads_path, "/media/");
        assert_eq!(config.toast_duration_ms, 3000);
        assert_eq!(config.library_endpoint, "/api/assets");
    }

    #[test]
    fn test_invalid_json_falls_back() {
        assert_eq!(AppConfig::from_json("not json"), AppConfig::default());
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        assert_eq!(AppConfig::from_json(r#"{ "page_size": 0 }"#).page_size, 20);
    }

    #[test]
    fn test_log_level() {
        assert_eq!(AppConfig::from_json(r#"{ "log_level": "DEBUG" }"#).log_level(), log::Level::Debug);
        assert_eq!(AppConfig::default().log_level(), log::Level::Info);
    }
}
