pub mod approvals;
pub mod assets;
pub mod campaigns;
pub mod client;

use common::Failure;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error: status {status} - {text}")]
    Http { status: u16, text: String },

    #[error("JSON parse error: {0}")]
    Decode(String),

    #[error("{0}")]
    Rejected(#[from] Failure),
}

#[derive(Clone, PartialEq)]
pub struct APICaller {
    pub base_url: String,
}

impl APICaller {
    pub fn new() -> Self {
        Self {
            base_url: client::get_base_url(),
        }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for APICaller {
    fn default() -> Self {
        Self::new()
    }
}
