use super::assignment::AssignmentBoard;
use super::operation::OperationType;
use common::Platform;
use std::collections::{BTreeMap, BTreeSet};

/// One hidden `<input>` of the campaign form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HiddenField {
    pub name: String,
    pub value: String,
}

impl HiddenField {
    fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Top-level choices of the campaign builder form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CampaignForm {
    pub operation: OperationType,
    pub platforms: BTreeSet<Platform>,
    pub accounts: BTreeMap<Platform, String>,
}

impl CampaignForm {
    pub fn account(&self, platform: Platform) -> &str {
        self.accounts.get(&platform).map(String::as_str).unwrap_or("")
    }

    /// Platforms that are ticked and have an advertiser account.
    pub fn ready_platforms(&self) -> Vec<Platform> {
        self.platforms
            .iter()
            .copied()
            .filter(|p| !self.account(*p).trim().is_empty())
            .collect()
    }

    /// Fields posted with the native form submission, derived from the board.
    pub fn hidden_fields(&self, board: &AssignmentBoard) -> Vec<HiddenField> {
        let mut fields = vec![HiddenField::new("operationType", self.operation.to_string())];

        for platform in &self.platforms {
            fields.push(HiddenField::new("platforms[]", platform.slug()));
            let account = self.account(*platform).trim();
            if !account.is_empty() {
                fields.push(HiddenField::new(platform.account_field(), account));
            }
        }

        for zone in board.zones() {
            let platform = zone.key.platform.slug();
            let adset = &zone.key.adset_id;
            fields.push(HiddenField::new(format!("selected_adsets[{}][]", platform), adset.clone()));
            fields.push(HiddenField::new(
                format!("ad_names[{}][{}]", platform, adset),
                zone.ad_name.clone(),
            ));
            for asset in board.zone_assets(&zone.key) {
                fields.push(HiddenField::new(
                    format!("asset_assignments[{}][{}][]", platform, adset),
                    asset.id.clone(),
                ));
            }
        }

        for asset in board.preview() {
            fields.push(HiddenField::new("library_assets[]", asset.id.clone()));
        }

        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::asset::sample_asset;
    use crate::models::assignment::{DropZone, ZoneKey};

    #[test]
    fn test_hidden_fields() {
        let mut form = CampaignForm::default();
        form.platforms.insert(Platform::Meta);
        form.platforms.insert(Platform::TikTok);
        form.accounts.insert(Platform::Meta, " act_42 ".to_string());

        let mut board = AssignmentBoard::new();
        board.add_assets(vec![sample_asset("a"), sample_asset("b")]);
        let key = ZoneKey::new(Platform::Meta, "9001");
        board.open_zone(DropZone::new(key.clone(), "c1", "Lookalikes"));
        board.assign("a.jpg", &key).unwrap();

        let fields: Vec<(String, String)> = form
            .hidden_fields(&board)
            .into_iter()
            .map(|f| (f.name, f.value))
            .collect();
        let expected: Vec<(&str, &str)> = vec![
            ("operationType", "1"),
            ("platforms[]", "meta"),
            ("meta_account_id", "act_42"),
            ("platforms[]", "tiktok"),
            ("selected_adsets[meta][]", "9001"),
            ("ad_names[meta][9001]", "Lookalikes Ad"),
            ("asset_assignments[meta][9001][]", "a.jpg"),
            ("library_assets[]", "a.jpg"),
            ("library_assets[]", "b.jpg"),
        ];
        let expected: Vec<(String, String)> =
            expected.into_iter().map(|(n, v)| (n.to_string(), v.to_string())).collect();
        assert_eq!(fields, expected);
    }

    #[test]
    fn test_ready_platforms_need_account() {
        let mut form = CampaignForm::default();
        form.platforms.insert(Platform::Meta);
        form.platforms.insert(Platform::TikTok);
        form.accounts.insert(Platform::TikTok, "adv_1".to_string());
        assert_eq!(form.ready_platforms(), vec![Platform::TikTok]);
    }
}
