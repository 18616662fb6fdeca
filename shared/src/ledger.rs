//! In-memory transaction store and submission validation.
//!
//! The ledger is the only mutable state in the application. Entries are
//! validated once, at submission time; an invalid submission leaves the
//! list untouched and reports why. There is no update operation and no
//! persistence, a fresh ledger is always empty.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::transaction::{Transaction, TransactionKind};

pub const MAX_DESCRIPTION_LENGTH: usize = 256;
pub const MIN_AMOUNT: f64 = 0.01;
pub const MAX_AMOUNT: f64 = 1_000_000.0;
/// Currency symbol used across the table, cards, charts, and report
pub const CURRENCY_SYMBOL: &str = "₹";

/// Raw form input for a new transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub description: String,
    /// Amount exactly as typed; cleaned and parsed during validation
    pub amount_input: String,
    pub kind: TransactionKind,
    /// Optional RFC 3339 override, current time if not provided
    pub date: Option<String>,
}

/// Specific validation errors for transaction submission
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("Please enter a description")]
    EmptyDescription,
    #[error("Description is too long ({0} characters). Maximum is 256.")]
    DescriptionTooLong(usize),
    #[error("Please enter an amount")]
    EmptyAmount,
    #[error("Please enter a valid amount (like 500 or 500.00)")]
    InvalidAmountFormat(String),
    #[error("Amount must be greater than 0")]
    AmountNotPositive,
    #[error("Amount is too large. Maximum is {0:.2}")]
    AmountTooLarge(f64),
    #[error("Amount has too many decimal places. Use at most 2 decimal places.")]
    AmountPrecisionTooHigh,
    #[error("Date is not a valid RFC 3339 timestamp")]
    InvalidDate,
}

/// Validation result for transaction form input
#[derive(Debug, Clone, PartialEq)]
pub struct FormValidation {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
    pub cleaned_amount: Option<f64>,
}

/// Validate form input for a new transaction
pub fn validate(description: &str, amount_input: &str) -> FormValidation {
    let mut errors = Vec::new();

    let description_trimmed = description.trim();
    if description_trimmed.is_empty() {
        errors.push(ValidationError::EmptyDescription);
    } else if description_trimmed.len() > MAX_DESCRIPTION_LENGTH {
        errors.push(ValidationError::DescriptionTooLong(description_trimmed.len()));
    }

    let cleaned_amount = if amount_input.trim().is_empty() {
        errors.push(ValidationError::EmptyAmount);
        None
    } else {
        match clean_and_parse_amount(amount_input) {
            Ok(amount) => {
                if amount < MIN_AMOUNT {
                    errors.push(ValidationError::AmountNotPositive);
                    None
                } else if amount > MAX_AMOUNT {
                    errors.push(ValidationError::AmountTooLarge(MAX_AMOUNT));
                    None
                } else if has_too_many_decimal_places(amount) {
                    errors.push(ValidationError::AmountPrecisionTooHigh);
                    None
                } else {
                    Some(amount)
                }
            }
            Err(parse_error) => {
                errors.push(ValidationError::InvalidAmountFormat(parse_error));
                None
            }
        }
    };

    FormValidation {
        is_valid: errors.is_empty(),
        errors,
        cleaned_amount,
    }
}

/// Clean and parse amount input: strips the currency symbol, commas, and
/// spaces before parsing
pub fn clean_and_parse_amount(amount_input: &str) -> Result<f64, String> {
    let cleaned = amount_input
        .trim()
        .replace(CURRENCY_SYMBOL, "")
        .replace(',', "")
        .replace(' ', "");

    if cleaned.is_empty() {
        return Err("Empty amount after cleaning".to_string());
    }

    cleaned
        .parse::<f64>()
        .map_err(|e| format!("Invalid number format: {}", e))
}

fn has_too_many_decimal_places(amount: f64) -> bool {
    let amount_str = format!("{:.3}", amount);
    if let Some(decimal_pos) = amount_str.find('.') {
        let decimal_part = &amount_str[decimal_pos + 1..];
        if decimal_part.len() > 2 && !decimal_part.ends_with('0') {
            return true;
        }
    }
    false
}

/// The in-memory ordered transaction store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of all transactions, insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Validate and append a new transaction.
    ///
    /// On any validation failure the list is unchanged and all failures are
    /// returned. The assigned id embeds the creation timestamp; when two
    /// submissions land in the same millisecond the timestamp component is
    /// bumped until the id is unique within the list.
    pub fn add(&mut self, input: NewTransaction) -> Result<Transaction, Vec<ValidationError>> {
        let mut validation = validate(&input.description, &input.amount_input);

        let date = input.date.unwrap_or_else(|| Utc::now().to_rfc3339());
        let epoch_millis = match chrono::DateTime::parse_from_rfc3339(&date) {
            Ok(parsed) => parsed.timestamp_millis().max(0) as u64,
            Err(_) => {
                validation.errors.push(ValidationError::InvalidDate);
                0
            }
        };

        if !validation.errors.is_empty() {
            return Err(validation.errors);
        }

        let amount = validation.cleaned_amount.unwrap_or_default();
        let mut millis = epoch_millis;
        let mut id = Transaction::generate_id(input.kind, millis);
        while self.transactions.iter().any(|t| t.id == id) {
            millis += 1;
            id = Transaction::generate_id(input.kind, millis);
        }

        let transaction = Transaction {
            id,
            date,
            description: input.description.trim().to_string(),
            amount,
            kind: input.kind,
        };
        self.transactions.push(transaction.clone());
        Ok(transaction)
    }

    /// Remove the transaction with the given id.
    /// Returns the removed transaction, or `None` when the id is absent.
    pub fn remove(&mut self, id: &str) -> Option<Transaction> {
        let position = self.transactions.iter().position(|t| t.id == id)?;
        Some(self.transactions.remove(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(description: &str, amount: &str) -> NewTransaction {
        NewTransaction {
            description: description.to_string(),
            amount_input: amount.to_string(),
            kind: TransactionKind::Expense,
            date: Some("2025-06-19T08:30:00+00:00".to_string()),
        }
    }

    fn income(description: &str, amount: &str) -> NewTransaction {
        NewTransaction {
            kind: TransactionKind::Income,
            ..expense(description, amount)
        }
    }

    #[test]
    fn test_add_valid_transaction() {
        let mut ledger = Ledger::new();

        let transaction = ledger.add(expense("Monthly rent", "1000")).unwrap();

        assert_eq!(ledger.len(), 1);
        assert_eq!(transaction.description, "Monthly rent");
        assert_eq!(transaction.amount, 1000.0);
        assert_eq!(transaction.kind, TransactionKind::Expense);
        assert!(transaction.id.starts_with("transaction::expense::"));
    }

    #[test]
    fn test_add_trims_description() {
        let mut ledger = Ledger::new();

        let transaction = ledger.add(income("  Salary  ", "5000")).unwrap();

        assert_eq!(transaction.description, "Salary");
    }

    #[test]
    fn test_empty_description_leaves_list_unchanged() {
        let mut ledger = Ledger::new();

        let result = ledger.add(expense("", "1000"));

        assert!(matches!(result, Err(ref errors) if errors[0] == ValidationError::EmptyDescription));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_empty_amount_leaves_list_unchanged() {
        let mut ledger = Ledger::new();

        let result = ledger.add(expense("Groceries", ""));

        assert!(matches!(result, Err(ref errors) if errors[0] == ValidationError::EmptyAmount));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_non_numeric_amount_is_rejected() {
        let mut ledger = Ledger::new();

        let result = ledger.add(expense("Groceries", "abc"));

        assert!(matches!(
            result,
            Err(ref errors) if matches!(errors[0], ValidationError::InvalidAmountFormat(_))
        ));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_negative_amount_is_rejected() {
        let mut ledger = Ledger::new();

        let result = ledger.add(expense("Refund gone wrong", "-5.00"));

        assert!(matches!(result, Err(ref errors) if errors[0] == ValidationError::AmountNotPositive));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_over_precise_amount_is_rejected() {
        let mut ledger = Ledger::new();

        let result = ledger.add(expense("Fuel", "10.999"));

        assert!(matches!(result, Err(ref errors) if errors[0] == ValidationError::AmountPrecisionTooHigh));
    }

    #[test]
    fn test_invalid_date_override_is_rejected() {
        let mut ledger = Ledger::new();
        let input = NewTransaction {
            date: Some("yesterday".to_string()),
            ..expense("Groceries", "50")
        };

        let result = ledger.add(input);

        assert!(matches!(result, Err(ref errors) if errors.contains(&ValidationError::InvalidDate)));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_remove_present_id_removes_exactly_one() {
        let mut ledger = Ledger::new();
        let kept = ledger.add(expense("Groceries", "50")).unwrap();
        let removed = ledger.add(expense("Travel card", "20")).unwrap();

        let result = ledger.remove(&removed.id);

        assert_eq!(result.map(|t| t.id), Some(removed.id));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.transactions()[0].id, kept.id);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut ledger = Ledger::new();
        ledger.add(expense("Groceries", "50")).unwrap();

        let result = ledger.remove("transaction::expense::0");

        assert!(result.is_none());
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_same_millisecond_submissions_get_unique_ids() {
        let mut ledger = Ledger::new();

        let first = ledger.add(expense("Groceries", "50")).unwrap();
        let second = ledger.add(expense("More groceries", "25")).unwrap();
        let third = ledger.add(expense("Even more", "10")).unwrap();

        assert_ne!(first.id, second.id);
        assert_ne!(second.id, third.id);
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let validation = validate("", "abc");

        assert!(!validation.is_valid);
        assert_eq!(validation.errors.len(), 2);
        assert!(validation.cleaned_amount.is_none());
    }

    #[test]
    fn test_clean_and_parse_amount() {
        assert_eq!(clean_and_parse_amount("10.50").unwrap(), 10.50);
        assert_eq!(clean_and_parse_amount("₹10.50").unwrap(), 10.50);
        assert_eq!(clean_and_parse_amount(" ₹1,234.56 ").unwrap(), 1234.56);
        assert_eq!(clean_and_parse_amount("5").unwrap(), 5.0);

        assert!(clean_and_parse_amount("abc").is_err());
        assert!(clean_and_parse_amount("").is_err());
    }

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ValidationError::EmptyDescription.to_string(),
            "Please enter a description"
        );
        assert_eq!(
            ValidationError::AmountNotPositive.to_string(),
            "Amount must be greater than 0"
        );
        assert!(ValidationError::DescriptionTooLong(300).to_string().contains("too long"));
    }
}
