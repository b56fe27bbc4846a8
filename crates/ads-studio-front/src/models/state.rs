use common::Platform;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use yewdux::prelude::*;

/// Advertiser accounts entered during this tab session.
#[derive(Default, Clone, PartialEq, Serialize, Deserialize, Store)]
#[store(storage = "session", storage_tab_sync)]
pub struct SessionState {
    pub accounts: BTreeMap<Platform, String>,
}

impl SessionState {
    pub fn account(&self, platform: Platform) -> String {
        self.accounts.get(&platform).cloned().unwrap_or_default()
    }
}
