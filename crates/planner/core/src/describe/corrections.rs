//! Data fixes applied to description templates before formatting.
//!
//! Upstream localization contains authoring mistakes. Each fix is a named
//! [`CorrectionRule`] so it can be dropped once the data is fixed, without
//! touching [`super::sprintf`].

use std::borrow::Cow;

/// Literal replacement inside a template.
///
/// A rule with a `key` only applies to that description key. A rule without
/// one applies to every template.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CorrectionRule {
    #[cfg_attr(feature = "serde", serde(default))]
    pub key: Option<String>,
    pub find: String,
    pub replace: String,
}

impl CorrectionRule {
    pub fn for_key(key: impl Into<String>, find: impl Into<String>, replace: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            find: find.into(),
            replace: replace.into(),
        }
    }

    pub fn global(find: impl Into<String>, replace: impl Into<String>) -> Self {
        Self {
            key: None,
            find: find.into(),
            replace: replace.into(),
        }
    }

    pub fn applies_to(&self, key: &str) -> bool {
        self.key.as_deref().is_none_or(|rule_key| rule_key == key)
    }

    fn apply<'t>(&self, template: Cow<'t, str>) -> Cow<'t, str> {
        if self.find.is_empty() || !template.contains(self.find.as_str()) {
            return template;
        }
        Cow::Owned(template.replace(self.find.as_str(), &self.replace))
    }
}

/// Ordered correction rules.
///
/// Key-specific rules run first so they can rewrite a template into the shape
/// the global rules expect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateCorrections {
    keyed: Vec<CorrectionRule>,
    global: Vec<CorrectionRule>,
}

impl TemplateCorrections {
    /// Description whose template was authored as `%1.f` instead of `%.1f`.
    pub const MISTYPED_PRECISION_KEY: &'static str = "markus_huntsman_passive_crit_aura_desc";

    /// Rules shipped with the planner.
    pub fn builtin() -> Self {
        Self {
            keyed: vec![Self::mistyped_precision()],
            global: vec![Self::whole_numbers()],
        }
    }

    /// No corrections at all.
    pub fn none() -> Self {
        Self {
            keyed: Vec::new(),
            global: Vec::new(),
        }
    }

    /// `%1.f` → `%.1f` for the one known mistyped template.
    pub fn mistyped_precision() -> CorrectionRule {
        CorrectionRule::for_key(Self::MISTYPED_PRECISION_KEY, "%1.f", "%.1f")
    }

    /// `%.1f` → `%d`: descriptions show whole numbers only.
    pub fn whole_numbers() -> CorrectionRule {
        CorrectionRule::global("%.1f", "%d")
    }

    /// Adds a rule, keeping key-specific rules ahead of global ones.
    pub fn push(&mut self, rule: CorrectionRule) {
        if rule.key.is_some() {
            self.keyed.push(rule);
        } else {
            self.global.push(rule);
        }
    }

    #[must_use]
    pub fn with_rules(mut self, rules: impl IntoIterator<Item = CorrectionRule>) -> Self {
        for rule in rules {
            self.push(rule);
        }
        self
    }

    /// Rewrites `template` (the localized text of `key`).
    pub fn apply<'t>(&self, key: &str, template: &'t str) -> Cow<'t, str> {
        self.keyed
            .iter()
            .chain(&self.global)
            .filter(|rule| rule.applies_to(key))
            .fold(Cow::Borrowed(template), |text, rule| rule.apply(text))
    }
}

impl Default for TemplateCorrections {
    fn default() -> Self {
        Self::builtin()
    }
}
