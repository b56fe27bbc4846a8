use serde::{Deserialize, Serialize};

/// Body of `POST /api/assets/{id}/update-text`. Only edited fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTextRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tc_text: Option<String>,
}

impl UpdateTextRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.headline.is_none() && self.tc_text.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unedited_fields_are_omitted() {
        let request = UpdateTextRequest {
            headline: Some("Summer sale".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({ "headline": "Summer sale" }));
        assert!(!request.is_empty());
        assert!(UpdateTextRequest::default().is_empty());
    }
}
