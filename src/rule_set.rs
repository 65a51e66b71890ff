//! Ordered, immutable collections of rules.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::config::DefaultRulesConfig;
use crate::error::RuleError;
use crate::rule::Rule;
use crate::rules;

static DEFAULT_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    let config = DefaultRulesConfig::from_env().unwrap_or_else(|_e| {
        #[cfg(feature = "tracing")]
        tracing::error!("Invalid default rules configuration, using defaults: {}", _e);
        DefaultRulesConfig::default()
    });
    RuleSet::from_config(&config)
});

/// Returns the process-wide default rule set.
///
/// Built once, on first use, from [`DefaultRulesConfig::from_env`]. Rules in
/// order: `minLength`, `hasUppercase`, `hasLowercase`, `hasDigit`,
/// `hasSpecialChar`.
pub fn default_rules() -> &'static RuleSet {
    &DEFAULT_RULES
}

/// An ordered collection of rules with unique names.
///
/// "Adding" a rule never mutates the set: [`RuleSet::extend`] returns a new
/// one, so a shared base (such as [`default_rules`]) can be extended many times
/// independently.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Builds a rule set, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::DuplicateRuleName`] with the first repeated name.
    pub fn new(rules: impl IntoIterator<Item = Rule>) -> Result<Self, RuleError> {
        let rules: Vec<Rule> = rules.into_iter().collect();
        let mut seen = HashSet::with_capacity(rules.len());
        for rule in &rules {
            if !seen.insert(rule.name()) {
                return Err(RuleError::DuplicateRuleName(rule.name().to_string()));
            }
        }
        Ok(Self { rules })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the baseline rule set described by `config`.
    pub fn from_config(config: &DefaultRulesConfig) -> Self {
        Self {
            rules: vec![
                rules::min_length(config.min_length),
                rules::has_uppercase(),
                rules::has_lowercase(),
                rules::has_digit(),
                rules::has_special_char(),
            ],
        }
    }

    /// Returns a new set with `rule` appended after the existing rules.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::DuplicateRuleName`] if a rule with the same name
    /// already exists.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pwd_rules::{default_rules, Rule};
    ///
    /// let custom = Rule::new(
    ///     "customRule",
    ///     "Password must be longer than 10 characters",
    ///     |pwd: &str| pwd.chars().count() > 10,
    /// )
    /// .unwrap();
    ///
    /// let extended = default_rules().extend(custom).unwrap();
    /// assert_eq!(extended.len(), default_rules().len() + 1);
    /// ```
    pub fn extend(&self, rule: Rule) -> Result<Self, RuleError> {
        self.extend_all([rule])
    }

    /// Returns a new set with every rule in `rules` appended, in order.
    ///
    /// Nothing is appended if any name collides.
    pub fn extend_all(&self, rules: impl IntoIterator<Item = Rule>) -> Result<Self, RuleError> {
        Self::new(self.rules.iter().cloned().chain(rules))
    }

    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(Rule::name)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
