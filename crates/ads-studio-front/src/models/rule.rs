use common::Platform;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    pub id: u32,
    pub name: String,
    pub platform: Platform,
    pub condition: String,
    pub action: String,
    pub active: bool,
}

/// Automated rules shown on the rules page. Lives only in memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleBook {
    rules: Vec<Rule>,
}

impl RuleBook {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn sample() -> Self {
        let rule = |id, name: &str, platform, condition: &str, action: &str, active| Rule {
            id,
            name: name.to_string(),
            platform,
            condition: condition.to_string(),
            action: action.to_string(),
            active,
        };
        Self::new(vec![
            rule(1, "Pause low CTR ads", Platform::Meta, "CTR < 0.5% over 3 days", "Pause ad", true),
            rule(2, "Scale winners", Platform::Meta, "ROAS > 3.0 over 7 days", "Increase budget 20%", true),
            rule(3, "Cap CPA", Platform::TikTok, "CPA > $45 today", "Decrease budget 15%", false),
            rule(4, "Night pause", Platform::TikTok, "Time between 01:00 and 06:00", "Pause ad group", true),
        ])
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn get(&self, id: u32) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id == id)
    }

    /// Flips a rule's active flag and returns the new value.
    pub fn toggle(&mut self, id: u32) -> Option<bool> {
        let rule = self.rules.iter_mut().find(|r| r.id == id)?;
        rule.active = !rule.active;
        Some(rule.active)
    }

    pub fn remove(&mut self, id: u32) -> Option<Rule> {
        let pos = self.rules.iter().position(|r| r.id == id)?;
        Some(self.rules.remove(pos))
    }

    pub fn active_count(&self) -> usize {
        self.rules.iter().filter(|r| r.active).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_count() {
        let mut book = RuleBook::sample();
        assert_eq!(book.active_count(), 3);
        assert_eq!(book.toggle(3), Some(true));
        assert_eq!(book.active_count(), 4);
        assert_eq!(book.toggle(99), None);
    }

    #[test]
    fn test_remove() {
        let mut book = RuleBook::sample();
        let removed = book.remove(2).unwrap();
        assert_eq!(removed.name, "Scale winners");
        assert!(book.get(2).is_none());
        assert!(book.remove(2).is_none());
        assert_eq!(book.rules().len(), 3);
    }
}
