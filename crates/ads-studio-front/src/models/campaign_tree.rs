use super::assignment::{DropZone, ZoneKey};
use common::response::{AdsetSummary, CampaignSummary};
use common::Platform;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Load<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Load<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Load::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Load::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CampaignNode {
    pub summary: CampaignSummary,
    pub expanded: bool,
    pub adsets: Load<Vec<AdsetSummary>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlatformCampaigns {
    pub account_id: String,
    generation: u64,
    pub campaigns: Load<Vec<CampaignNode>>,
}

/// Handle for an in-flight campaign fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CampaignTicket {
    pub platform: Platform,
    pub account_id: String,
    generation: u64,
}

/// Handle for an in-flight adset fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdsetTicket {
    pub platform: Platform,
    pub account_id: String,
    pub campaign_id: String,
    generation: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AdsetToggle {
    Selected(DropZone),
    Deselected(ZoneKey),
}

/// Campaign → adset tree per platform. Each (re)load of a platform bumps its
/// generation; responses carrying an older generation are dropped so a slow
/// reply for a previous account never overwrites the current one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CampaignTree {
    platforms: BTreeMap<Platform, PlatformCampaigns>,
    selected: BTreeSet<ZoneKey>,
    next_generation: u64,
}

impl CampaignTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn platform(&self, platform: Platform) -> Option<&PlatformCampaigns> {
        self.platforms.get(&platform)
    }

    pub fn platforms(&self) -> impl Iterator<Item = (&Platform, &PlatformCampaigns)> {
        self.platforms.iter()
    }

    /// Starts a campaign load. A blank account clears the platform instead.
    pub fn begin_load(&mut self, platform: Platform, account_id: &str) -> Option<CampaignTicket> {
        let account_id = account_id.trim();
        if account_id.is_empty() {
            self.remove_platform(platform);
            return None;
        }
        self.next_generation += 1;
        let generation = self.next_generation;
        self.selected.retain(|key| key.platform != platform);
        self.platforms.insert(
            platform,
            PlatformCampaigns {
                account_id: account_id.to_string(),
                generation,
                campaigns: Load::Loading,
            },
        );
        Some(CampaignTicket {
            platform,
            account_id: account_id.to_string(),
            generation,
        })
    }

    /// Returns `false` when the ticket is stale and the result was dropped.
    pub fn finish_load(&mut self, ticket: &CampaignTicket, result: Result<Vec<CampaignSummary>, String>) -> bool {
        let Some(entry) = self.platforms.get_mut(&ticket.platform) else {
            return false;
        };
        if entry.generation != ticket.generation {
            log::debug!("Dropping stale campaign list for {}", ticket.platform);
            return false;
        }
        entry.campaigns = match result {
            Ok(campaigns) => Load::Loaded(
                campaigns
                    .into_iter()
                    .map(|summary| CampaignNode {
                        summary,
                        expanded: false,
                        adsets: Load::Idle,
                    })
                    .collect(),
            ),
            Err(e) => Load::Failed(e),
        };
        true
    }

    pub fn remove_platform(&mut self, platform: Platform) {
        self.platforms.remove(&platform);
        self.selected.retain(|key| key.platform != platform);
    }

    fn campaign_mut(&mut self, platform: Platform, campaign_id: &str) -> Option<(&mut CampaignNode, &str, u64)> {
        let entry = self.platforms.get_mut(&platform)?;
        let generation = entry.generation;
        let account_id = entry.account_id.as_str();
        let node = match &mut entry.campaigns {
            Load::Loaded(nodes) => nodes.iter_mut().find(|n| n.summary.id == campaign_id)?,
            _ => return None,
        };
        Some((node, account_id, generation))
    }

    /// Expands or collapses a campaign. The first expansion returns a ticket
    /// for loading its adsets; later ones reuse the cached list.
    pub fn toggle_campaign(&mut self, platform: Platform, campaign_id: &str) -> Option<AdsetTicket> {
        let (node, account_id, generation) = self.campaign_mut(platform, campaign_id)?;
        node.expanded = !node.expanded;
        if node.expanded && matches!(node.adsets, Load::Idle | Load::Failed(_)) {
            node.adsets = Load::Loading;
            return Some(AdsetTicket {
                platform,
                account_id: account_id.to_string(),
                campaign_id: campaign_id.to_string(),
                generation,
            });
        }
        None
    }

    pub fn finish_adsets(&mut self, ticket: &AdsetTicket, result: Result<Vec<AdsetSummary>, String>) -> bool {
        let Some((node, _, generation)) = self.campaign_mut(ticket.platform, &ticket.campaign_id) else {
            return false;
        };
        if generation != ticket.generation {
            log::debug!("Dropping stale adsets for campaign {}", ticket.campaign_id);
            return false;
        }
        node.adsets = match result {
            Ok(adsets) => Load::Loaded(adsets),
            Err(e) => Load::Failed(e),
        };
        true
    }

    pub fn is_selected(&self, key: &ZoneKey) -> bool {
        self.selected.contains(key)
    }

    pub fn selected(&self) -> impl Iterator<Item = &ZoneKey> {
        self.selected.iter()
    }

    /// Flips the selection of an adset and reports the resulting zone change.
    pub fn toggle_adset(&mut self, platform: Platform, campaign_id: &str, adset: &AdsetSummary) -> AdsetToggle {
        let key = ZoneKey::new(platform, adset.id.clone());
        if self.selected.remove(&key) {
            AdsetToggle::Deselected(key)
        } else {
            self.selected.insert(key.clone());
            AdsetToggle::Selected(DropZone::new(key, campaign_id, adset.name.clone()))
        }
    }

    /// Deselects an adset whose zone was removed from the drop-zone side.
    pub fn deselect(&mut self, key: &ZoneKey) {
        self.selected.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campaign(id: &str) -> CampaignSummary {
        CampaignSummary {
            id: id.to_string(),
            name: format!("Campaign {}", id),
            status: None,
        }
    }

    fn adset(id: &str) -> AdsetSummary {
        AdsetSummary {
            id: id.to_string(),
            name: format!("Adset {}", id),
            status: Some("ACTIVE".to_string()),
        }
    }

    #[test]
    fn test_blank_account_skips_fetch() {
        let mut tree = CampaignTree::new();
        assert!(tree.begin_load(Platform::Meta, "  ").is_none());
        assert!(tree.platform(Platform::Meta).is_none());
    }

    #[test]
    fn test_stale_campaign_response_is_dropped() {
        let mut tree = CampaignTree::new();
        let first = tree.begin_load(Platform::Meta, "act_1").unwrap();
        let second = tree.begin_load(Platform::Meta, "act_2").unwrap();

        assert!(!tree.finish_load(&first, Ok(vec![campaign("old")])));
        assert!(tree.platform(Platform::Meta).unwrap().campaigns.is_loading());

        assert!(tree.finish_load(&second, Ok(vec![campaign("new")])));
        let loaded = tree.platform(Platform::Meta).unwrap().campaigns.loaded().unwrap();
        assert_eq!(loaded[0].summary.id, "new");
    }

    #[test]
    fn test_adsets_load_once() {
        let mut tree = CampaignTree::new();
        let ticket = tree.begin_load(Platform::TikTok, "adv").unwrap();
        tree.finish_load(&ticket, Ok(vec![campaign("c1")]));

        let adset_ticket = tree.toggle_campaign(Platform::TikTok, "c1").unwrap();
        assert_eq!(adset_ticket.account_id, "adv");
        assert!(tree.finish_adsets(&adset_ticket, Ok(vec![adset("s1")])));

        assert!(tree.toggle_campaign(Platform::TikTok, "c1").is_none());
        assert!(tree.toggle_campaign(Platform::TikTok, "c1").is_none());
    }

    #[test]
    fn test_failed_adsets_retry_on_next_expand() {
        let mut tree = CampaignTree::new();
        let ticket = tree.begin_load(Platform::Meta, "act").unwrap();
        tree.finish_load(&ticket, Ok(vec![campaign("c1")]));
        let adset_ticket = tree.toggle_campaign(Platform::Meta, "c1").unwrap();
        tree.finish_adsets(&adset_ticket, Err("boom".to_string()));

        assert!(tree.toggle_campaign(Platform::Meta, "c1").is_none());
        assert!(tree.toggle_campaign(Platform::Meta, "c1").is_some());
    }

    #[test]
    fn test_adsets_from_previous_account_are_dropped() {
        let mut tree = CampaignTree::new();
        let ticket = tree.begin_load(Platform::Meta, "act").unwrap();
        tree.finish_load(&ticket, Ok(vec![campaign("c1")]));
        let adset_ticket = tree.toggle_campaign(Platform::Meta, "c1").unwrap();

        let reload = tree.begin_load(Platform::Meta, "act").unwrap();
        tree.finish_load(&reload, Ok(vec![campaign("c1")]));
        assert!(!tree.finish_adsets(&adset_ticket, Ok(vec![adset("s1")])));
    }

    #[test]
    fn test_toggle_adset_builds_zone() {
        let mut tree = CampaignTree::new();
        let s1 = adset("s1");
        match tree.toggle_adset(Platform::Meta, "c1", &s1) {
            AdsetToggle::Selected(zone) => {
                assert_eq!(zone.ad_name, "Adset s1 Ad");
                assert_eq!(zone.campaign_id, "c1");
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(tree.is_selected(&ZoneKey::new(Platform::Meta, "s1")));
        assert_eq!(
            tree.toggle_adset(Platform::Meta, "c1", &s1),
            AdsetToggle::Deselected(ZoneKey::new(Platform::Meta, "s1"))
        );
    }

    #[test]
    fn test_reload_clears_platform_selection() {
        let mut tree = CampaignTree::new();
        tree.toggle_adset(Platform::Meta, "c1", &adset("s1"));
        tree.toggle_adset(Platform::TikTok, "c2", &adset("t1"));
        tree.begin_load(Platform::Meta, "act_9");
        assert_eq!(tree.selected().count(), 1);
    }
}
