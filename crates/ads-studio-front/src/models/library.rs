use super::asset::{Asset, AssetId};
use super::pagination::Pagination;
use super::selection::{ClickModifiers, SelectionModel};
use common::response::AssetKind;
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KindFilter {
    #[default]
    All,
    Only(AssetKind),
}

impl KindFilter {
    pub const CHOICES: [(KindFilter, &'static str); 3] = [
        (KindFilter::All, "All types"),
        (KindFilter::Only(AssetKind::Image), "Images"),
        (KindFilter::Only(AssetKind::Video), "Videos"),
    ];

    pub fn from_value(value: &str) -> Self {
        match value {
            "image" => KindFilter::Only(AssetKind::Image),
            "video" => KindFilter::Only(AssetKind::Video),
            _ => KindFilter::All,
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            KindFilter::All => "all",
            KindFilter::Only(kind) => kind.as_str(),
        }
    }

    fn accepts(self, kind: AssetKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Only(k) => k == kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LibraryError {
    #[error("Please select at least one asset")]
    NothingSelected,
}

/// Where the library contents came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LibrarySource {
    Api,
    Fallback,
}

impl fmt::Display for LibrarySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LibrarySource::Api => f.write_str("media library"),
            LibrarySource::Fallback => f.write_str("uploads folder"),
        }
    }
}

/// State of the asset library modal: catalog, filter, page and selection.
#[derive(Clone, Debug, PartialEq)]
pub struct LibraryState {
    assets: Vec<Asset>,
    source: Option<LibrarySource>,
    kind_filter: KindFilter,
    search: String,
    visible: Vec<AssetId>,
    pub pagination: Pagination,
    pub selection: SelectionModel,
}

impl LibraryState {
    pub fn new(page_size: usize) -> Self {
        Self {
            assets: Vec::new(),
            source: None,
            kind_filter: KindFilter::All,
            search: String::new(),
            visible: Vec::new(),
            pagination: Pagination::new(page_size),
            selection: SelectionModel::new(),
        }
    }

    /// `true` once assets were loaded; the modal only fetches on first open.
    pub fn is_loaded(&self) -> bool {
        self.source.is_some()
    }

    pub fn source(&self) -> Option<LibrarySource> {
        self.source
    }

    pub fn set_assets(&mut self, assets: Vec<Asset>, source: LibrarySource) {
        self.assets = assets;
        self.source = Some(source);
        let ids: Vec<AssetId> = self.assets.iter().map(|a| a.id.clone()).collect();
        self.selection.retain(&ids);
        self.refilter();
    }

    pub fn kind_filter(&self) -> KindFilter {
        self.kind_filter
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Applies a new filter and returns to the first page.
    pub fn apply_filter(&mut self, kind: KindFilter, search: &str) {
        self.kind_filter = kind;
        self.search = search.trim().to_string();
        self.refilter();
        self.pagination.reset();
    }

    fn refilter(&mut self) {
        let needle = self.search.to_lowercase();
        self.visible = self
            .assets
            .iter()
            .filter(|a| self.kind_filter.accepts(a.kind) && a.matches(&needle))
            .map(|a| a.id.clone())
            .collect();
        self.pagination.set_total(self.visible.len());
    }

    pub fn total_assets(&self) -> usize {
        self.assets.len()
    }

    pub fn filtered_len(&self) -> usize {
        self.visible.len()
    }

    fn find(&self, id: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.id == id)
    }

    /// Assets on the current page, in display order.
    pub fn page_items(&self) -> Vec<&Asset> {
        self.visible[self.pagination.range()]
            .iter()
            .filter_map(|id| self.find(id))
            .collect()
    }

    /// Click on a library tile. Ranges follow the filtered display order.
    pub fn click(&mut self, id: &str, modifiers: ClickModifiers) {
        self.selection.click(id, modifiers, &self.visible);
    }

    pub fn selected_assets(&self) -> Vec<Asset> {
        self.assets
            .iter()
            .filter(|a| self.selection.is_selected(&a.id))
            .cloned()
            .collect()
    }

    /// Hands the selection over to the preview panel and clears it.
    pub fn confirm(&mut self) -> Result<Vec<Asset>, LibraryError> {
        if self.selection.is_empty() {
            return Err(LibraryError::NothingSelected);
        }
        let picked = self.selected_assets();
        self.selection.clear();
        Ok(picked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::asset::sample_asset;
    use rstest::rstest;

    fn library(n: usize) -> LibraryState {
        let mut state = LibraryState::new(20);
        let assets = (1..=n).map(|i| sample_asset(&format!("a{:02}", i))).collect();
        state.set_assets(assets, LibrarySource::Api);
        state
    }

    #[test]
    fn test_pages_of_twenty() {
        let mut state = library(45);
        assert_eq!(state.pagination.total_pages(), 3);
        assert_eq!(state.page_items().len(), 20);
        state.pagination.go_to(3);
        assert_eq!(state.page_items().len(), 5);
        assert_eq!(state.page_items()[0].id, "a41.jpg");
    }

    #[test]
    fn test_filter_resets_to_first_page() {
        let mut state = library(45);
        state.pagination.go_to(2);
        state.apply_filter(KindFilter::All, "A1");
        assert_eq!(state.pagination.page(), 1);
        let names: Vec<&str> = state.page_items().iter().map(|a| a.name.as_str()).collect();
        assert!(names.iter().all(|n| n.contains("a1")));
        assert_eq!(state.filtered_len(), 10);
    }

    #[test]
    fn test_kind_filter() {
        let mut state = LibraryState::new(20);
        state.set_assets(
            vec![
                Asset::from_upload("/u/", "one.jpg"),
                Asset::from_upload("/u/", "two.mp4"),
                Asset::from_upload("/u/", "three.mov"),
            ],
            LibrarySource::Fallback,
        );
        state.apply_filter(KindFilter::from_value("video"), "");
        assert_eq!(state.filtered_len(), 2);
        state.apply_filter(KindFilter::from_value("image"), "");
        assert_eq!(state.filtered_len(), 1);
        state.apply_filter(KindFilter::from_value("all"), "");
        assert_eq!(state.filtered_len(), 3);
    }

    #[test]
    fn test_shift_range_follows_filtered_order() {
        let mut state = library(30);
        state.apply_filter(KindFilter::All, "a2");
        state.click("a20.jpg", ClickModifiers::PLAIN);
        state.click("a23.jpg", ClickModifiers::RANGE);
        let ids: Vec<String> = state.selected_assets().into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["a20.jpg", "a21.jpg", "a22.jpg", "a23.jpg"]);
    }

    #[test]
    fn test_confirm_requires_selection() {
        let mut state = library(3);
        assert_eq!(state.confirm(), Err(LibraryError::NothingSelected));

        state.click("a02.jpg", ClickModifiers::PLAIN);
        let picked = state.confirm().unwrap();
        assert_eq!(picked.len(), 1);
        assert!(state.selection.is_empty());
    }

    #[test]
    fn test_reload_drops_vanished_selection() {
        let mut state = library(3);
        state.click("a03.jpg", ClickModifiers::PLAIN);
        state.set_assets(vec![sample_asset("a01")], LibrarySource::Api);
        assert!(state.selection.is_empty());
    }

    #[test]
    fn test_filter_chosen_before_load_survives_arrival() {
        let mut state = LibraryState::new(20);
        state.apply_filter(KindFilter::Only(AssetKind::Video), "promo");
        state.set_assets(
            vec![
                Asset::from_upload("/u/", "promo.jpg"),
                Asset::from_upload("/u/", "promo.mp4"),
                Asset::from_upload("/u/", "other.mp4"),
            ],
            LibrarySource::Api,
        );
        assert!(state.is_loaded());
        assert_eq!(state.kind_filter(), KindFilter::Only(AssetKind::Video));
        assert_eq!(state.search(), "promo");
        assert_eq!(state.filtered_len(), 1);
        assert_eq!(state.page_items()[0].name, "promo.mp4");
    }

    #[rstest]
    #[case(KindFilter::All, "all")]
    #[case(KindFilter::Only(AssetKind::Image), "image")]
    #[case(KindFilter::Only(AssetKind::Video), "video")]
    fn test_choices_round_trip_option_values(#[case] kind: KindFilter, #[case] value: &str) {
        assert_eq!(kind.value(), value);
        assert_eq!(KindFilter::from_value(value), kind);
        assert_eq!(KindFilter::CHOICES.iter().filter(|(k, _)| *k == kind).count(), 1);
    }
}
