use async_trait::async_trait;

use super::Scorer;
use crate::model::{Feature, ScorerResult};

type Rule = Box<dyn Fn(&[Feature]) -> Option<ScorerResult> + Send + Sync>;

/// Evaluates a fixed list of rule closures against a payload's features.
/// A rule that does not apply returns `None` and contributes nothing.
pub struct RuleBasedScorer {
    rules: Vec<Rule>,
}

impl RuleBasedScorer {
    pub fn new() -> Self {
        RuleBasedScorer { rules: Vec::new() }
    }

    pub fn add_rule(
        &mut self,
        rule: impl Fn(&[Feature]) -> Option<ScorerResult> + Send + Sync + 'static,
    ) {
        self.rules.push(Box::new(rule));
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

impl Default for RuleBasedScorer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Scorer for RuleBasedScorer {
    async fn score(&self, features: Vec<Feature>) -> Vec<ScorerResult> {
        self.rules
            .iter()
            .filter_map(|rule| rule(&features))
            .collect()
    }
}
