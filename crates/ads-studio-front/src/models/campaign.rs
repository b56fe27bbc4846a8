use common::Platform;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CampaignStatus {
    Active,
    Paused,
    Draft,
}

impl CampaignStatus {
    pub const ALL: [CampaignStatus; 3] = [CampaignStatus::Active, CampaignStatus::Paused, CampaignStatus::Draft];

    pub fn label(self) -> &'static str {
        match self {
            CampaignStatus::Active => "Active",
            CampaignStatus::Paused => "Paused",
            CampaignStatus::Draft => "Draft",
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            CampaignStatus::Active => "active",
            CampaignStatus::Paused => "paused",
            CampaignStatus::Draft => "draft",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.value() == value)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CampaignRow {
    pub id: String,
    pub name: String,
    pub platform: Platform,
    pub status: CampaignStatus,
    pub budget: f64,
    pub spend: f64,
    pub impressions: u64,
    pub clicks: u64,
}

impl CampaignRow {
    /// Click-through rate in percent.
    pub fn ctr(&self) -> f64 {
        if self.impressions == 0 {
            0.0
        } else {
            self.clicks as f64 / self.impressions as f64 * 100.0
        }
    }
}

pub fn sample_campaigns() -> Vec<CampaignRow> {
    let row = |id: &str, name: &str, platform, status, budget, spend, impressions, clicks| CampaignRow {
        id: id.to_string(),
        name: name.to_string(),
        platform,
        status,
        budget,
        spend,
        impressions,
        clicks,
    };
    vec![
        row("1001", "Spring Collection Launch", Platform::Meta, CampaignStatus::Active, 5000.0, 3120.5, 412_000, 6_180),
        row("1002", "Retargeting - Cart Abandoners", Platform::Meta, CampaignStatus::Active, 1500.0, 1322.1, 98_500, 2_955),
        row("1003", "Brand Awareness Q3", Platform::TikTok, CampaignStatus::Paused, 8000.0, 4410.0, 1_250_000, 9_375),
        row("1004", "App Install Push", Platform::TikTok, CampaignStatus::Active, 3000.0, 2760.8, 640_000, 12_800),
        row("1005", "Holiday Teaser", Platform::Meta, CampaignStatus::Draft, 2500.0, 0.0, 0, 0),
        row("1006", "Creator Collab Series", Platform::TikTok, CampaignStatus::Draft, 4000.0, 0.0, 0, 0),
    ]
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CampaignFilter {
    pub search: String,
    pub status: Option<CampaignStatus>,
    pub platform: Option<Platform>,
}

impl CampaignFilter {
    pub fn matches(&self, row: &CampaignRow) -> bool {
        let needle = self.search.trim().to_lowercase();
        (needle.is_empty() || row.name.to_lowercase().contains(&needle))
            && self.status.map(|s| s == row.status).unwrap_or(true)
            && self.platform.map(|p| p == row.platform).unwrap_or(true)
    }

    pub fn apply<'a>(&self, rows: &'a [CampaignRow]) -> Vec<&'a CampaignRow> {
        rows.iter().filter(|r| self.matches(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_combines_criteria() {
        let rows = sample_campaigns();
        let filter = CampaignFilter {
            search: "LAUNCH".to_string(),
            ..Default::default()
        };
        assert_eq!(filter.apply(&rows).len(), 1);

        let filter = CampaignFilter {
            status: Some(CampaignStatus::Active),
            platform: Some(Platform::TikTok),
            ..Default::default()
        };
        let hits = filter.apply(&rows);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1004");

        assert_eq!(CampaignFilter::default().apply(&rows).len(), rows.len());
    }

    #[test]
    fn test_ctr() {
        let rows = sample_campaigns();
        assert!((rows[0].ctr() - 1.5).abs() < 1e-9);
        assert_eq!(rows[4].ctr(), 0.0);
    }

    #[test]
    fn test_status_values_round_trip() {
        for status in CampaignStatus::ALL {
            assert_eq!(CampaignStatus::from_value(status.value()), Some(status));
        }
        assert_eq!(CampaignStatus::from_value("archived"), None);
    }
}
