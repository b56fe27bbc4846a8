use common::request::UpdateTextRequest;
use common::response::{AssetKind, AssetRecord};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    /// Unknown or missing statuses are treated as still pending review.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("approved") => ApprovalStatus::Approved,
            Some("rejected") => ApprovalStatus::Rejected,
            _ => ApprovalStatus::Pending,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "Pending",
            ApprovalStatus::Approved => "Approved",
            ApprovalStatus::Rejected => "Rejected",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "status-badge status-pending",
            ApprovalStatus::Approved => "status-badge status-approved",
            ApprovalStatus::Rejected => "status-badge status-rejected",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Approval {
    pub id: String,
    pub name: String,
    pub kind: AssetKind,
    pub url: String,
    pub status: ApprovalStatus,
    pub headline: Option<String>,
    pub tc_text: Option<String>,
    pub rejection_reasons: Vec<String>,
}

impl From<AssetRecord> for Approval {
    fn from(record: AssetRecord) -> Self {
        Self {
            status: ApprovalStatus::parse(record.status.as_deref()),
            id: record.id,
            name: record.name,
            kind: record.kind,
            url: record.url,
            headline: record.headline,
            tc_text: record.tc_text,
            rejection_reasons: record.rejection_reasons,
        }
    }
}

impl Approval {
    /// Only rejected assets can be resubmitted.
    pub fn can_resubmit(&self) -> bool {
        self.status == ApprovalStatus::Rejected
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ApprovalFilter {
    #[default]
    All,
    Only(ApprovalStatus),
}

impl ApprovalFilter {
    pub const TABS: [ApprovalFilter; 4] = [
        ApprovalFilter::All,
        ApprovalFilter::Only(ApprovalStatus::Pending),
        ApprovalFilter::Only(ApprovalStatus::Approved),
        ApprovalFilter::Only(ApprovalStatus::Rejected),
    ];

    pub fn label(self) -> &'static str {
        match self {
            ApprovalFilter::All => "All",
            ApprovalFilter::Only(status) => status.label(),
        }
    }

    pub fn matches(self, approval: &Approval) -> bool {
        match self {
            ApprovalFilter::All => true,
            ApprovalFilter::Only(status) => approval.status == status,
        }
    }

    pub fn count(self, approvals: &[Approval]) -> usize {
        approvals.iter().filter(|a| self.matches(a)).count()
    }
}

/// Editable copy of an asset's text fields. Tracks the loaded values so only
/// changed fields are posted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextDraft {
    pub name: String,
    pub headline: String,
    pub tc_text: String,
    original: (String, String, String),
}

impl TextDraft {
    pub fn from_record(record: &AssetRecord) -> Self {
        let name = record.name.clone();
        let headline = record.headline.clone().unwrap_or_default();
        let tc_text = record.tc_text.clone().unwrap_or_default();
        Self {
            original: (name.clone(), headline.clone(), tc_text.clone()),
            name,
            headline,
            tc_text,
        }
    }

    pub fn to_request(&self) -> UpdateTextRequest {
        let changed = |now: &String, before: &String| (now.trim() != before.trim()).then(|| now.trim().to_string());
        UpdateTextRequest {
            name: changed(&self.name, &self.original.0),
            headline: changed(&self.headline, &self.original.1),
            tc_text: changed(&self.tc_text, &self.original.2),
        }
    }

    pub fn is_dirty(&self) -> bool {
        !self.to_request().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum FeedState {
    #[default]
    Loading,
    Loaded(Vec<Approval>),
    Error(String),
}

/// The approvals list plus a ticket counter; only the newest load may land.
#[derive(Debug, Default)]
pub struct ApprovalFeed {
    state: FeedState,
    latest: u64,
}

impl ApprovalFeed {
    pub fn state(&self) -> &FeedState {
        &self.state
    }

    /// Starts a load and returns its ticket.
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.state = FeedState::Loading;
        self.latest
    }

    /// Returns `false` when a newer load was started and the result was dropped.
    pub fn finish(&mut self, ticket: u64, result: Result<Vec<Approval>, String>) -> bool {
        if ticket != self.latest {
            return false;
        }
        self.state = match result {
            Ok(approvals) => FeedState::Loaded(approvals),
            Err(message) => FeedState::Error(message),
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(json: &str) -> AssetRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(ApprovalStatus::parse(Some("REJECTED")), ApprovalStatus::Rejected);
        assert_eq!(ApprovalStatus::parse(Some("approved")), ApprovalStatus::Approved);
        assert_eq!(ApprovalStatus::parse(Some("in_review")), ApprovalStatus::Pending);
        assert_eq!(ApprovalStatus::parse(None), ApprovalStatus::Pending);
    }

    #[test]
    fn test_filter_counts() {
        let approvals: Vec<Approval> = [
            r#"{"id": 1, "status": "rejected", "rejection_reasons": ["Too much text"]}"#,
            r#"{"id": 2, "status": "approved"}"#,
            r#"{"id": 3}"#,
        ]
        .iter()
        .map(|j| Approval::from(record(j)))
        .collect();

        assert_eq!(ApprovalFilter::All.count(&approvals), 3);
        assert_eq!(ApprovalFilter::Only(ApprovalStatus::Rejected).count(&approvals), 1);
        assert_eq!(ApprovalFilter::Only(ApprovalStatus::Pending).count(&approvals), 1);
        assert!(approvals[0].can_resubmit());
        assert!(!approvals[1].can_resubmit());
    }

    #[test]
    fn test_draft_posts_only_changes() {
        let mut draft = TextDraft::from_record(&record(
            r#"{"id": 9, "name": "Hero", "headline": "Big sale", "tc_text": "T&C apply"}"#,
        ));
        assert!(!draft.is_dirty());

        draft.headline = "Bigger sale ".to_string();
        let request = draft.to_request();
        assert_eq!(request.headline.as_deref(), Some("Bigger sale"));
        assert!(request.name.is_none());
        assert!(request.tc_text.is_none());
    }

    #[test]
    fn test_slow_earlier_load_cannot_replace_newer_one() {
        let fresh = record(r#"{"id": "fresh.jpg", "status": "approved"}"#);
        let old = record(r#"{"id": "old.jpg", "status": "pending"}"#);

        let mut feed = ApprovalFeed::default();
        let first = feed.begin();
        let second = feed.begin();

        assert!(feed.finish(second, Ok(vec![Approval::from(fresh)])));
        assert!(!feed.finish(first, Ok(vec![Approval::from(old)])));
        match feed.state() {
            FeedState::Loaded(approvals) => {
                assert_eq!(approvals.len(), 1);
                assert_eq!(approvals[0].id, "fresh.jpg");
            }
            other => panic!("unexpected state {:?}", other),
        }
    }

    #[test]
    fn test_stale_error_is_dropped_while_loading() {
        let mut feed = ApprovalFeed::default();
        let first = feed.begin();
        let _second = feed.begin();
        assert!(!feed.finish(first, Err("timeout".to_string())));
        assert_eq!(feed.state(), &FeedState::Loading);
    }
}
