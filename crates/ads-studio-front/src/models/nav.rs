use std::collections::BTreeSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavSection {
    pub title: &'static str,
    pub icon: &'static str,
    pub items: &'static [NavItem],
}

pub const NAV_SECTIONS: &[NavSection] = &[
    NavSection {
        title: "Campaigns",
        icon: "📣",
        items: &[
            NavItem {
                label: "All Campaigns",
                path: "/campaigns",
                icon: "📋",
            },
            NavItem {
                label: "Create Ads",
                path: "/campaigns/create",
                icon: "➕",
            },
        ],
    },
    NavSection {
        title: "Automation",
        icon: "⚙️",
        items: &[NavItem {
            label: "Automated Rules",
            path: "/rules",
            icon: "🔁",
        }],
    },
    NavSection {
        title: "Review",
        icon: "✅",
        items: &[NavItem {
            label: "My Approvals",
            path: "/approvals",
            icon: "📝",
        }],
    },
];

/// Sidebar state. Rebuilt on every page load; nothing is persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub collapsed: bool,
    open: BTreeSet<usize>,
    active: Option<(usize, usize)>,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_collapsed(&mut self) {
        self.collapsed = !self.collapsed;
    }

    pub fn chevron(&self) -> &'static str {
        if self.collapsed {
            "»"
        } else {
            "«"
        }
    }

    pub fn toggle_submenu(&mut self, section: usize) {
        if !self.open.remove(&section) {
            self.open.insert(section);
        }
    }

    pub fn is_open(&self, section: usize) -> bool {
        self.open.contains(&section)
    }

    pub fn is_active(&self, section: usize, item: usize) -> bool {
        self.active == Some((section, item))
    }

    /// Highlights the link whose path equals `pathname` and opens its
    /// submenu. Other open submenus stay open.
    pub fn activate(&mut self, pathname: &str) {
        let wanted = normalize(pathname);
        self.active = NAV_SECTIONS.iter().enumerate().find_map(|(s, section)| {
            section
                .items
                .iter()
                .position(|item| item.path == wanted)
                .map(|i| (s, i))
        });
        if let Some((section, _)) = self.active {
            self.open.insert(section);
        }
    }
}

fn normalize(pathname: &str) -> &str {
    let trimmed = pathname.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activate_opens_parent_submenu() {
        let mut nav = NavState::new();
        nav.activate("/rules/");
        assert!(nav.is_active(1, 0));
        assert!(nav.is_open(1));
        assert!(!nav.is_open(0));
    }

    #[test]
    fn test_activate_exact_match_only() {
        let mut nav = NavState::new();
        nav.activate("/campaigns/create");
        assert!(nav.is_active(0, 1));
        assert!(!nav.is_active(0, 0));
    }

    #[test]
    fn test_unknown_path_highlights_nothing() {
        let mut nav = NavState::new();
        nav.activate("/campaigns");
        nav.activate("/settings");
        assert!(!nav.is_active(0, 0));
        assert!(nav.is_open(0));
    }

    #[test]
    fn test_toggles() {
        let mut nav = NavState::new();
        assert_eq!(nav.chevron(), "«");
        nav.toggle_collapsed();
        assert!(nav.collapsed);
        assert_eq!(nav.chevron(), "»");

        nav.toggle_submenu(2);
        assert!(nav.is_open(2));
        nav.toggle_submenu(2);
        assert!(!nav.is_open(2));
    }
}
