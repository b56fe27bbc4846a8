use super::asset::AssetId;
use std::collections::BTreeSet;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClickModifiers {
    /// Ctrl on Windows/Linux, Cmd on macOS.
    pub toggle: bool,
    pub range: bool,
}

impl ClickModifiers {
    pub const PLAIN: ClickModifiers = ClickModifiers {
        toggle: false,
        range: false,
    };
    pub const TOGGLE: ClickModifiers = ClickModifiers {
        toggle: true,
        range: false,
    };
    pub const RANGE: ClickModifiers = ClickModifiers {
        toggle: false,
        range: true,
    };
}

/// Multi-select state for a list of assets. Rendering reads from here; the
/// DOM is never consulted for what is selected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionModel {
    selected: BTreeSet<AssetId>,
    anchor: Option<AssetId>,
}

impl SelectionModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one click on `id`. `order` is the current display order used
    /// to resolve shift ranges.
    pub fn click(&mut self, id: &str, modifiers: ClickModifiers, order: &[AssetId]) {
        if modifiers.range {
            if let Some(range) = self.range_to(id, order) {
                if !modifiers.toggle {
                    self.selected.clear();
                }
                self.selected.extend(range);
                return;
            }
        }

        if modifiers.toggle {
            if !self.selected.remove(id) {
                self.selected.insert(id.to_string());
            }
        } else {
            self.selected.clear();
            self.selected.insert(id.to_string());
        }
        self.anchor = Some(id.to_string());
    }

    fn range_to(&self, id: &str, order: &[AssetId]) -> Option<Vec<AssetId>> {
        let anchor = self.anchor.as_deref()?;
        let from = order.iter().position(|x| x == anchor)?;
        let to = order.iter().position(|x| x == id)?;
        let (lo, hi) = if from <= to { (from, to) } else { (to, from) };
        Some(order[lo..=hi].to_vec())
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn anchor(&self) -> Option<&str> {
        self.anchor.as_deref()
    }

    /// Selected ids in the given display order.
    pub fn ordered<'a>(&self, order: &'a [AssetId]) -> Vec<&'a AssetId> {
        order.iter().filter(|id| self.selected.contains(*id)).collect()
    }

    /// Drops ids that no longer exist.
    pub fn retain(&mut self, known: &[AssetId]) {
        self.selected.retain(|id| known.contains(id));
        if let Some(anchor) = &self.anchor {
            if !known.contains(anchor) {
                self.anchor = None;
            }
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
        self.anchor = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(n: usize) -> Vec<AssetId> {
        (1..=n).map(|i| format!("a{}", i)).collect()
    }

    #[test]
    fn test_plain_click_replaces_selection() {
        let ids = order(5);
        let mut selection = SelectionModel::new();
        selection.click("a1", ClickModifiers::TOGGLE, &ids);
        selection.click("a2", ClickModifiers::TOGGLE, &ids);
        selection.click("a4", ClickModifiers::PLAIN, &ids);

        assert_eq!(selection.len(), 1);
        assert!(selection.is_selected("a4"));
        assert!(!selection.is_selected("a1"));
    }

    #[test]
    fn test_toggle_click_only_touches_clicked_item() {
        let ids = order(5);
        let mut selection = SelectionModel::new();
        selection.click("a1", ClickModifiers::PLAIN, &ids);
        selection.click("a3", ClickModifiers::TOGGLE, &ids);
        assert!(selection.is_selected("a1"));
        assert!(selection.is_selected("a3"));

        selection.click("a1", ClickModifiers::TOGGLE, &ids);
        assert!(!selection.is_selected("a1"));
        assert!(selection.is_selected("a3"));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_shift_click_selects_inclusive_range() {
        let ids = order(8);
        let mut selection = SelectionModel::new();
        selection.click("a6", ClickModifiers::PLAIN, &ids);
        selection.click("a3", ClickModifiers::RANGE, &ids);

        let picked: Vec<&str> = selection.ordered(&ids).into_iter().map(String::as_str).collect();
        assert_eq!(picked, vec!["a3", "a4", "a5", "a6"]);
        assert_eq!(selection.anchor(), Some("a6"));
    }

    #[test]
    fn test_shift_click_keeps_anchor_for_next_range() {
        let ids = order(8);
        let mut selection = SelectionModel::new();
        selection.click("a2", ClickModifiers::PLAIN, &ids);
        selection.click("a5", ClickModifiers::RANGE, &ids);
        selection.click("a3", ClickModifiers::RANGE, &ids);
        let picked: Vec<&str> = selection.ordered(&ids).into_iter().map(String::as_str).collect();
        assert_eq!(picked, vec!["a2", "a3"]);
    }

    #[test]
    fn test_shift_without_anchor_is_plain_click() {
        let ids = order(4);
        let mut selection = SelectionModel::new();
        selection.click("a3", ClickModifiers::RANGE, &ids);
        assert_eq!(selection.len(), 1);
        assert_eq!(selection.anchor(), Some("a3"));
    }

    #[test]
    fn test_ctrl_shift_extends_existing_selection() {
        let ids = order(8);
        let mut selection = SelectionModel::new();
        selection.click("a8", ClickModifiers::PLAIN, &ids);
        selection.click("a1", ClickModifiers::TOGGLE, &ids);
        selection.click(
            "a3",
            ClickModifiers {
                toggle: true,
                range: true,
            },
            &ids,
        );
        assert_eq!(selection.len(), 4);
        assert!(selection.is_selected("a8"));
    }

    #[test]
    fn test_retain_drops_missing_anchor() {
        let ids = order(3);
        let mut selection = SelectionModel::new();
        selection.click("a3", ClickModifiers::PLAIN, &ids);
        selection.retain(&ids[..2]);
        assert!(selection.is_empty());
        assert_eq!(selection.anchor(), None);
    }
}
