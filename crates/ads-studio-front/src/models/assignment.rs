//! Asset → adset assignment state for the campaign builder.
//!
//! The board owns the preview list (assets picked for this submission), one
//! drop zone per selected adset, and two mirrored indexes:
//! `zone → assets` and `asset → zones`. Every mutation updates both.

use super::asset::{Asset, AssetId};
use super::operation::OperationType;
use crate::utils::validation::validate_ad_name;
use common::Platform;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ZoneKey {
    pub platform: Platform,
    pub adset_id: String,
}

impl ZoneKey {
    pub fn new(platform: Platform, adset_id: impl Into<String>) -> Self {
        Self {
            platform,
            adset_id: adset_id.into(),
        }
    }
}

impl fmt::Display for ZoneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.platform, self.adset_id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropZone {
    pub key: ZoneKey,
    pub campaign_id: String,
    pub adset_name: String,
    pub ad_name: String,
}

impl DropZone {
    pub fn new(key: ZoneKey, campaign_id: impl Into<String>, adset_name: impl Into<String>) -> Self {
        let adset_name = adset_name.into();
        Self {
            ad_name: format!("{} Ad", adset_name),
            key,
            campaign_id: campaign_id.into(),
            adset_name,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Badge {
    Assigned,
    NotAssigned,
}

impl Badge {
    pub fn label(self) -> &'static str {
        match self {
            Badge::Assigned => "Assigned",
            Badge::NotAssigned => "Not Assigned",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Badge::Assigned => "badge badge-assigned",
            Badge::NotAssigned => "badge badge-unassigned",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssignError {
    #[error("Asset {0} is not in the preview")]
    UnknownAsset(AssetId),
    #[error("Ad set {0} is not selected")]
    UnknownZone(ZoneKey),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("Please select at least one ad set")]
    NoAdsetSelected,
    #[error("Ad set \"{0}\" has no assets assigned")]
    AdsetWithoutAsset(String),
    #[error("Please add at least one asset")]
    NoAssets,
    #[error("Asset \"{0}\" is not assigned to any ad set")]
    UnassignedAsset(String),
    #[error("{adset}: {message}")]
    InvalidAdName { adset: String, message: String },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssignmentBoard {
    preview: Vec<Asset>,
    zones: Vec<DropZone>,
    by_zone: BTreeMap<ZoneKey, BTreeSet<AssetId>>,
    by_asset: BTreeMap<AssetId, BTreeSet<ZoneKey>>,
}

impl AssignmentBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preview(&self) -> &[Asset] {
        &self.preview
    }

    pub fn zones(&self) -> &[DropZone] {
        &self.zones
    }

    pub fn asset(&self, id: &str) -> Option<&Asset> {
        self.preview.iter().find(|a| a.id == id)
    }

    pub fn zone(&self, key: &ZoneKey) -> Option<&DropZone> {
        self.zones.iter().find(|z| &z.key == key)
    }

    /// Adds assets to the preview, skipping ids already present.
    /// Returns how many were added.
    pub fn add_assets(&mut self, assets: impl IntoIterator<Item = Asset>) -> usize {
        let mut added = 0;
        for asset in assets {
            if self.asset(&asset.id).is_none() {
                self.preview.push(asset);
                added += 1;
            }
        }
        added
    }

    /// Updates cached dimensions of a preview asset.
    pub fn set_dimensions(&mut self, id: &str, width: u32, height: u32) {
        if let Some(asset) = self.preview.iter_mut().find(|a| a.id == id) {
            asset.width = width;
            asset.height = height;
        }
    }

    /// Removes an asset from the preview and from every zone holding it.
    pub fn remove_asset(&mut self, id: &str) -> Option<Asset> {
        let pos = self.preview.iter().position(|a| a.id == id)?;
        if let Some(zones) = self.by_asset.remove(id) {
            for key in zones {
                if let Some(assets) = self.by_zone.get_mut(&key) {
                    assets.remove(id);
                }
            }
        }
        Some(self.preview.remove(pos))
    }

    /// Opens a drop zone for a newly selected adset. No-op when present.
    pub fn open_zone(&mut self, zone: DropZone) -> bool {
        if self.zone(&zone.key).is_some() {
            return false;
        }
        self.by_zone.insert(zone.key.clone(), BTreeSet::new());
        self.zones.push(zone);
        true
    }

    /// Closes a zone; its assets go back to the unassigned pool.
    /// Returns the ids that were assigned to it.
    pub fn close_zone(&mut self, key: &ZoneKey) -> Vec<AssetId> {
        self.zones.retain(|z| &z.key != key);
        let released: Vec<AssetId> = self
            .by_zone
            .remove(key)
            .map(|set| set.into_iter().collect())
            .unwrap_or_default();
        for id in &released {
            if let Some(zones) = self.by_asset.get_mut(id) {
                zones.remove(key);
                if zones.is_empty() {
                    self.by_asset.remove(id);
                }
            }
        }
        released
    }

    /// Closes every zone of a platform, e.g. when it is deselected.
    pub fn close_platform(&mut self, platform: Platform) {
        let keys: Vec<ZoneKey> = self
            .zones
            .iter()
            .filter(|z| z.key.platform == platform)
            .map(|z| z.key.clone())
            .collect();
        for key in keys {
            self.close_zone(&key);
        }
    }

    pub fn rename_ad(&mut self, key: &ZoneKey, ad_name: impl Into<String>) {
        if let Some(zone) = self.zones.iter_mut().find(|z| &z.key == key) {
            zone.ad_name = ad_name.into();
        }
    }

    /// Assigns an asset to a zone. `Ok(false)` when it was already there.
    pub fn assign(&mut self, asset_id: &str, key: &ZoneKey) -> Result<bool, AssignError> {
        if self.asset(asset_id).is_none() {
            return Err(AssignError::UnknownAsset(asset_id.to_string()));
        }
        let zone_assets = self
            .by_zone
            .get_mut(key)
            .ok_or_else(|| AssignError::UnknownZone(key.clone()))?;
        if !zone_assets.insert(asset_id.to_string()) {
            return Ok(false);
        }
        self.by_asset
            .entry(asset_id.to_string())
            .or_default()
            .insert(key.clone());
        Ok(true)
    }

    pub fn unassign(&mut self, asset_id: &str, key: &ZoneKey) -> bool {
        let removed = self
            .by_zone
            .get_mut(key)
            .map(|assets| assets.remove(asset_id))
            .unwrap_or(false);
        if removed {
            if let Some(zones) = self.by_asset.get_mut(asset_id) {
                zones.remove(key);
                if zones.is_empty() {
                    self.by_asset.remove(asset_id);
                }
            }
        }
        removed
    }

    /// Moves an asset between zones. Dropping on the source zone is a no-op.
    pub fn move_asset(&mut self, asset_id: &str, from: &ZoneKey, to: &ZoneKey) -> Result<bool, AssignError> {
        if from == to {
            return Ok(false);
        }
        if !self.by_zone.contains_key(to) {
            return Err(AssignError::UnknownZone(to.clone()));
        }
        self.unassign(asset_id, from);
        self.assign(asset_id, to)
    }

    pub fn is_assigned(&self, asset_id: &str, key: &ZoneKey) -> bool {
        self.by_zone
            .get(key)
            .map(|assets| assets.contains(asset_id))
            .unwrap_or(false)
    }

    pub fn badge(&self, asset_id: &str) -> Badge {
        if self.by_asset.get(asset_id).map(|z| !z.is_empty()).unwrap_or(false) {
            Badge::Assigned
        } else {
            Badge::NotAssigned
        }
    }

    /// Assets in a zone, in preview order.
    pub fn zone_assets(&self, key: &ZoneKey) -> Vec<&Asset> {
        match self.by_zone.get(key) {
            Some(ids) => self.preview.iter().filter(|a| ids.contains(&a.id)).collect(),
            None => Vec::new(),
        }
    }

    pub fn unassigned(&self) -> Vec<&Asset> {
        self.preview
            .iter()
            .filter(|a| self.badge(&a.id) == Badge::NotAssigned)
            .collect()
    }

    /// Checks whether the form may be submitted for `operation`.
    ///
    /// Existing-adset flows require every selected adset to carry at least one
    /// asset. New-campaign flows require at least one asset and, once zones
    /// exist, every asset to sit in at least one of them.
    pub fn check_submit(&self, operation: OperationType) -> Result<(), SubmitError> {
        match operation {
            OperationType::ExistingAdset => {
                if self.zones.is_empty() {
                    return Err(SubmitError::NoAdsetSelected);
                }
                if let Some(empty) = self
                    .zones
                    .iter()
                    .find(|z| self.by_zone.get(&z.key).map(BTreeSet::is_empty).unwrap_or(true))
                {
                    return Err(SubmitError::AdsetWithoutAsset(empty.adset_name.clone()));
                }
                Ok(())
            }
            OperationType::NewCampaign | OperationType::NewCampaignWithAdGroups => {
                if self.preview.is_empty() {
                    return Err(SubmitError::NoAssets);
                }
                if !self.zones.is_empty() {
                    if let Some(orphan) = self.unassigned().first() {
                        return Err(SubmitError::UnassignedAsset(orphan.name.clone()));
                    }
                }
                Ok(())
            }
        }
    }

    /// `check_submit` plus the ad name rules of every open zone.
    pub fn check_ready(&self, operation: OperationType) -> Result<(), SubmitError> {
        self.check_submit(operation)?;
        match self.zones.iter().find_map(|z| validate_ad_name(&z.ad_name).map(|message| (z, message))) {
            Some((zone, message)) => Err(SubmitError::InvalidAdName {
                adset: zone.adset_name.clone(),
                message,
            }),
            None => Ok(()),
        }
    }

    #[cfg(test)]
    fn is_consistent(&self) -> bool {
        let forward = self
            .by_zone
            .iter()
            .all(|(key, ids)| ids.iter().all(|id| self.by_asset.get(id).map(|z| z.contains(key)).unwrap_or(false)));
        let backward = self
            .by_asset
            .iter()
            .all(|(id, keys)| keys.iter().all(|key| self.by_zone.get(key).map(|a| a.contains(id)).unwrap_or(false)));
        let zones_match = self.zones.len() == self.by_zone.len();
        forward && backward && zones_match
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::asset::sample_asset;

    fn meta(adset: &str) -> ZoneKey {
        ZoneKey::new(Platform::Meta, adset)
    }

    fn board_with(assets: &[&str], adsets: &[&str]) -> AssignmentBoard {
        let mut board = AssignmentBoard::new();
        board.add_assets(assets.iter().map(|id| sample_asset(id)));
        for adset in adsets {
            board.open_zone(DropZone::new(meta(adset), "c1", format!("Adset {}", adset)));
        }
        board
    }

    fn id(name: &str) -> String {
        format!("{}.jpg", name)
    }

    #[test]
    fn test_submit_blocked_without_adsets() {
        let board = board_with(&["a"], &[]);
        assert_eq!(
            board.check_submit(OperationType::ExistingAdset),
            Err(SubmitError::NoAdsetSelected)
        );
    }

    #[test]
    fn test_submit_blocked_with_empty_adset() {
        let board = board_with(&["a"], &["s1"]);
        assert_eq!(
            board.check_submit(OperationType::ExistingAdset),
            Err(SubmitError::AdsetWithoutAsset("Adset s1".to_string()))
        );
    }

    #[test]
    fn test_submit_allowed_with_one_assignment() {
        let mut board = board_with(&["a"], &["s1"]);
        assert_eq!(board.assign(&id("a"), &meta("s1")), Ok(true));
        assert_eq!(board.check_submit(OperationType::ExistingAdset), Ok(()));
    }

    #[test]
    fn test_blank_ad_name_blocks_ready_board() {
        let mut board = board_with(&["a"], &["s1"]);
        board.assign(&id("a"), &meta("s1")).unwrap();
        assert_eq!(board.check_ready(OperationType::ExistingAdset), Ok(()));

        board.rename_ad(&meta("s1"), "   ");
        let err = board.check_ready(OperationType::ExistingAdset).unwrap_err();
        assert_eq!(err.to_string(), "Adset s1: Ad name is required");
        assert_eq!(board.check_submit(OperationType::ExistingAdset), Ok(()));
    }

    #[test]
    fn test_new_campaign_rules() {
        let empty = AssignmentBoard::new();
        assert_eq!(
            empty.check_submit(OperationType::NewCampaign),
            Err(SubmitError::NoAssets)
        );

        let mut board = board_with(&["a", "b"], &[]);
        assert_eq!(board.check_submit(OperationType::NewCampaignWithAdGroups), Ok(()));

        board.open_zone(DropZone::new(meta("s1"), "c1", "Group 1"));
        board.assign(&id("a"), &meta("s1")).unwrap();
        assert_eq!(
            board.check_submit(OperationType::NewCampaign),
            Err(SubmitError::UnassignedAsset(id("b")))
        );
    }

    #[test]
    fn test_remove_asset_clears_every_zone() {
        let mut board = board_with(&["a", "b"], &["s1", "s2"]);
        board.assign(&id("a"), &meta("s1")).unwrap();
        board.assign(&id("a"), &meta("s2")).unwrap();
        board.assign(&id("b"), &meta("s2")).unwrap();

        let removed = board.remove_asset(&id("a")).unwrap();
        assert_eq!(removed.id, id("a"));
        assert!(board.zone_assets(&meta("s1")).is_empty());
        assert_eq!(board.zone_assets(&meta("s2")).len(), 1);
        assert_eq!(board.badge(&id("a")), Badge::NotAssigned);
        assert!(board.is_consistent());
    }

    #[test]
    fn test_closing_zone_orphans_assets() {
        let mut board = board_with(&["a", "b"], &["s1", "s2"]);
        board.assign(&id("a"), &meta("s1")).unwrap();
        board.assign(&id("b"), &meta("s1")).unwrap();
        board.assign(&id("b"), &meta("s2")).unwrap();

        let released = board.close_zone(&meta("s1"));
        assert_eq!(released.len(), 2);
        assert_eq!(board.badge(&id("a")), Badge::NotAssigned);
        assert_eq!(board.badge(&id("b")), Badge::Assigned);
        assert_eq!(board.unassigned().len(), 1);
        assert_eq!(board.preview().len(), 2);
        assert!(board.is_consistent());
    }

    #[test]
    fn test_assign_is_idempotent() {
        let mut board = board_with(&["a"], &["s1"]);
        assert_eq!(board.assign(&id("a"), &meta("s1")), Ok(true));
        assert_eq!(board.assign(&id("a"), &meta("s1")), Ok(false));
        assert_eq!(board.zone_assets(&meta("s1")).len(), 1);
    }

    #[test]
    fn test_assign_unknown_targets() {
        let mut board = board_with(&["a"], &["s1"]);
        assert_eq!(
            board.assign("ghost", &meta("s1")),
            Err(AssignError::UnknownAsset("ghost".to_string()))
        );
        assert_eq!(
            board.assign(&id("a"), &meta("nope")),
            Err(AssignError::UnknownZone(meta("nope")))
        );
    }

    #[test]
    fn test_move_between_zones() {
        let mut board = board_with(&["a"], &["s1", "s2"]);
        board.assign(&id("a"), &meta("s1")).unwrap();
        assert_eq!(board.move_asset(&id("a"), &meta("s1"), &meta("s2")), Ok(true));
        assert!(!board.is_assigned(&id("a"), &meta("s1")));
        assert!(board.is_assigned(&id("a"), &meta("s2")));
        assert_eq!(board.move_asset(&id("a"), &meta("s2"), &meta("s2")), Ok(false));
        assert!(board.is_consistent());
    }

    #[test]
    fn test_move_to_missing_zone_keeps_source() {
        let mut board = board_with(&["a"], &["s1"]);
        board.assign(&id("a"), &meta("s1")).unwrap();
        assert!(board.move_asset(&id("a"), &meta("s1"), &meta("gone")).is_err());
        assert!(board.is_assigned(&id("a"), &meta("s1")));
    }

    #[test]
    fn test_close_platform_only_touches_that_platform() {
        let mut board = board_with(&["a"], &["s1"]);
        let tiktok = ZoneKey::new(Platform::TikTok, "t1");
        board.open_zone(DropZone::new(tiktok.clone(), "c9", "TikTok group"));
        board.assign(&id("a"), &tiktok).unwrap();

        board.close_platform(Platform::Meta);
        assert_eq!(board.zones().len(), 1);
        assert_eq!(board.badge(&id("a")), Badge::Assigned);
    }

    #[test]
    fn test_duplicate_preview_and_zone_are_skipped() {
        let mut board = board_with(&["a"], &["s1"]);
        assert_eq!(board.add_assets(vec![sample_asset("a"), sample_asset("b")]), 1);
        assert!(!board.open_zone(DropZone::new(meta("s1"), "c1", "again")));
        assert_eq!(board.zone(&meta("s1")).unwrap().ad_name, "Adset s1 Ad");
    }
}
