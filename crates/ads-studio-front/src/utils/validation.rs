const MAX_AD_NAME_LEN: usize = 255;
const MAX_HEADLINE_LEN: usize = 125;

pub fn validate_account_id(account_id: &str) -> Option<String> {
    let account_id = account_id.trim();
    if account_id.is_empty() {
        return Some("Account id is required".to_string());
    }
    let digits = account_id.strip_prefix("act_").unwrap_or(account_id);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Some("Account id can only contain letters, digits and underscores".to_string());
    }
    None
}

pub fn validate_ad_name(name: &str) -> Option<String> {
    let name = name.trim();
    if name.is_empty() {
        return Some("Ad name is required".to_string());
    }
    if name.chars().count() > MAX_AD_NAME_LEN {
        return Some(format!("Ad name must be {} characters or less", MAX_AD_NAME_LEN));
    }
    None
}

pub fn validate_headline(headline: &str) -> Option<String> {
    if headline.trim().chars().count() > MAX_HEADLINE_LEN {
        return Some(format!("Headline must be {} characters or less", MAX_HEADLINE_LEN));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("act_123456", true)]
    #[case("7012345678901", true)]
    #[case("  ", false)]
    #[case("act_", false)]
    #[case("act-12", false)]
    fn test_account_id(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(validate_account_id(input).is_none(), ok);
    }

    #[test]
    fn test_ad_name() {
        assert!(validate_ad_name("Spring Ad").is_none());
        assert!(validate_ad_name("   ").is_some());
        assert!(validate_ad_name(&"x".repeat(256)).is_some());
    }

    #[test]
    fn test_headline() {
        assert!(validate_headline("").is_none());
        assert!(validate_headline(&"y".repeat(126)).is_some());
    }
}
