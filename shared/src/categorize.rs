//! Keyword-based category inference.
//!
//! Classification is an ordered rule list with first-match-wins semantics
//! so the policy stays testable and replaceable independent of the UI.

use crate::transaction::{Transaction, TransactionKind};

/// Bucket name for every income transaction
pub const INCOME_BUCKET: &str = "Income";
/// Bucket name for expenses no rule matches
pub const FALLBACK_BUCKET: &str = "Other";

/// A single classification rule: `keyword` is matched case-insensitively as
/// a substring of the transaction description.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRule {
    pub keyword: String,
    pub name: String,
}

impl CategoryRule {
    pub fn new(keyword: &str, name: &str) -> Self {
        Self {
            keyword: keyword.to_lowercase(),
            name: name.to_string(),
        }
    }

    fn matches(&self, description: &str) -> bool {
        description.to_lowercase().contains(&self.keyword)
    }
}

/// Ordered first-match-wins classifier for expense descriptions.
#[derive(Debug, Clone, PartialEq)]
pub struct Categorizer {
    rules: Vec<CategoryRule>,
}

impl Categorizer {
    /// Classifier with the default rule set
    pub fn new() -> Self {
        Self::with_rules(vec![
            CategoryRule::new("rent", "rent"),
            CategoryRule::new("subscriptions", "subscriptions"),
            CategoryRule::new("groceries", "groceries"),
            CategoryRule::new("travel", "travel"),
        ])
    }

    /// Classifier with a custom ordered rule list
    pub fn with_rules(rules: Vec<CategoryRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    /// Bucket name for a transaction: income is always [`INCOME_BUCKET`];
    /// expenses get the first matching rule's name, or [`FALLBACK_BUCKET`].
    pub fn classify(&self, transaction: &Transaction) -> &str {
        if transaction.kind == TransactionKind::Income {
            return INCOME_BUCKET;
        }
        self.rules
            .iter()
            .find(|rule| rule.matches(&transaction.description))
            .map(|rule| rule.name.as_str())
            .unwrap_or(FALLBACK_BUCKET)
    }
}

impl Default for Categorizer {
    fn default() -> Self {
        Self::new()
    }
}
