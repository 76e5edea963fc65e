//! Replacement mappings: which template sections take content from which source sections

use crate::error::EnjourError;
use serde::{Deserialize, Serialize};

/// Template title → source title carried over by the daily entry
pub const DAILY_CARRY_OVER: (&str, &str) = ("Daily Goal Checklist", "Goals For Tomorrow");

/// Template title → source title carried over by the weekly review
pub const WEEKLY_CARRY_OVER: (&str, &str) = ("Weekly Goal Checklist", "Weekly Goal Checklist");

/// A single template-to-source rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingRule {
    pub template: String,
    pub source: String,
}

/// Ordered set of rules, unique on the template title
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<MappingRule>", into = "Vec<MappingRule>")]
pub struct ReplacementMapping {
    rules: Vec<MappingRule>,
}

impl ReplacementMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mapping with a single rule
    pub fn single(template: impl Into<String>, source: impl Into<String>) -> Self {
        let mut mapping = Self::new();
        mapping.insert(template, source);
        mapping
    }

    pub fn daily_default() -> Self {
        Self::single(DAILY_CARRY_OVER.0, DAILY_CARRY_OVER.1)
    }

    pub fn weekly_default() -> Self {
        Self::single(WEEKLY_CARRY_OVER.0, WEEKLY_CARRY_OVER.1)
    }

    /// Add a rule, replacing any existing rule for the same template title.
    /// Returns the previous source title, if there was one.
    pub fn insert(
        &mut self,
        template: impl Into<String>,
        source: impl Into<String>,
    ) -> Option<String> {
        let template = template.into();
        let source = source.into();

        match self.rules.iter_mut().find(|rule| rule.template == template) {
            Some(rule) => Some(std::mem::replace(&mut rule.source, source)),
            None => {
                self.rules.push(MappingRule { template, source });
                None
            }
        }
    }

    /// Source title mapped to the given template title
    pub fn source_for(&self, template_title: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|rule| rule.template == template_title)
            .map(|rule| rule.source.as_str())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MappingRule> {
        self.rules.iter()
    }
}

impl TryFrom<Vec<MappingRule>> for ReplacementMapping {
    type Error = EnjourError;

    fn try_from(rules: Vec<MappingRule>) -> Result<Self, Self::Error> {
        let mut mapping = ReplacementMapping::new();
        for rule in rules {
            if mapping.source_for(&rule.template).is_some() {
                return Err(EnjourError::Config(format!(
                    "Duplicate mapping for template section '{}'",
                    rule.template
                )));
            }
            mapping.rules.push(rule);
        }
        Ok(mapping)
    }
}

impl From<ReplacementMapping> for Vec<MappingRule> {
    fn from(mapping: ReplacementMapping) -> Self {
        mapping.rules
    }
}
