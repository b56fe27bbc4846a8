use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the campaign form is going to create. The numeric value is what the
/// form posts as `operationType`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationType {
    /// Create ads inside existing campaigns/adsets.
    #[default]
    ExistingAdset,
    /// New campaign from a template.
    NewCampaign,
    /// New campaign from a template with explicit ad groups.
    NewCampaignWithAdGroups,
}

impl OperationType {
    pub const ALL: [OperationType; 3] = [
        OperationType::ExistingAdset,
        OperationType::NewCampaign,
        OperationType::NewCampaignWithAdGroups,
    ];

    pub fn value(self) -> u8 {
        match self {
            OperationType::ExistingAdset => 1,
            OperationType::NewCampaign => 2,
            OperationType::NewCampaignWithAdGroups => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OperationType::ExistingAdset => "Create ads in existing campaign/adset",
            OperationType::NewCampaign => "Create new campaign",
            OperationType::NewCampaignWithAdGroups => "Create new campaign with ad groups",
        }
    }

    /// Sections shown for this operation. `has_assets` is whether the
    /// creative preview holds at least one asset.
    pub fn sections(self, has_assets: bool) -> Sections {
        match self {
            OperationType::ExistingAdset => Sections {
                campaign_picker: true,
                creative: true,
                template: false,
                ad_groups: false,
                two_column: true,
            },
            OperationType::NewCampaign => Sections {
                campaign_picker: false,
                creative: true,
                template: true,
                ad_groups: false,
                two_column: false,
            },
            OperationType::NewCampaignWithAdGroups => Sections {
                campaign_picker: false,
                creative: true,
                template: true,
                ad_groups: has_assets,
                two_column: false,
            },
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid operation type: {0}")]
pub struct InvalidOperation(pub String);

impl FromStr for OperationType {
    type Err = InvalidOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(OperationType::ExistingAdset),
            "2" => Ok(OperationType::NewCampaign),
            "3" => Ok(OperationType::NewCampaignWithAdGroups),
            other => Err(InvalidOperation(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sections {
    pub campaign_picker: bool,
    pub creative: bool,
    pub template: bool,
    pub ad_groups: bool,
    pub two_column: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", OperationType::ExistingAdset)]
    #[case("2", OperationType::NewCampaign)]
    #[case(" 3 ", OperationType::NewCampaignWithAdGroups)]
    fn test_parse(#[case] raw: &str, #[case] expected: OperationType) {
        assert_eq!(raw.parse::<OperationType>().unwrap(), expected);
        assert_eq!(expected.to_string(), raw.trim());
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("4".parse::<OperationType>().is_err());
    }

    #[test]
    fn test_existing_adset_sections() {
        let sections = OperationType::ExistingAdset.sections(true);
        assert!(sections.campaign_picker && sections.two_column);
        assert!(!sections.template && !sections.ad_groups);
    }

    #[test]
    fn test_ad_groups_need_assets() {
        assert!(!OperationType::NewCampaignWithAdGroups.sections(false).ad_groups);
        assert!(OperationType::NewCampaignWithAdGroups.sections(true).ad_groups);
        assert!(!OperationType::NewCampaign.sections(true).ad_groups);
        assert!(OperationType::NewCampaign.sections(false).template);
    }
}
