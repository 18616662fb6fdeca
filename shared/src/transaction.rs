use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single recorded income or expense event.
///
/// Transaction ID is in the format: "transaction::<income|expense>::epoch_millis"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    /// RFC 3339 creation timestamp, fixed at creation
    pub date: String,
    /// Description of the transaction (max 256 characters), also drives
    /// category inference
    pub description: String,
    /// Validated non-negative magnitude
    pub amount: f64,
    /// Whether this entry adds to or subtracts from the balance
    pub kind: TransactionKind,
}

/// Type of transaction for rendering and business logic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Lowercase label used in ids, table cells, and report rows
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

impl Transaction {
    /// Generate transaction ID from kind and creation timestamp
    pub fn generate_id(kind: TransactionKind, epoch_millis: u64) -> String {
        format!("transaction::{}::{}", kind.label(), epoch_millis)
    }

    /// Parse transaction ID to extract components
    pub fn parse_id(id: &str) -> Result<(TransactionKind, u64), TransactionIdError> {
        let parts: Vec<&str> = id.split("::").collect();
        if parts.len() != 3 || parts[0] != "transaction" {
            return Err(TransactionIdError::InvalidFormat);
        }

        let kind = match parts[1] {
            "income" => TransactionKind::Income,
            "expense" => TransactionKind::Expense,
            _ => return Err(TransactionIdError::InvalidKind),
        };

        let epoch_millis = parts[2]
            .parse::<u64>()
            .map_err(|_| TransactionIdError::InvalidTimestamp)?;

        Ok((kind, epoch_millis))
    }

    /// Extract epoch timestamp from transaction ID for uniqueness checks
    pub fn extract_timestamp(&self) -> Result<u64, TransactionIdError> {
        Self::parse_id(&self.id).map(|(_, timestamp)| timestamp)
    }

    /// Calendar-day key ("YYYY-MM-DD") for trend aggregation
    pub fn day_key(&self) -> String {
        self.date
            .split('T')
            .next()
            .unwrap_or(self.date.as_str())
            .to_string()
    }

    /// Human-readable creation date, e.g. "June 19, 2025".
    /// Falls back to the raw string when the date is malformed.
    pub fn display_date(&self) -> String {
        format_display_date(&self.date)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransactionIdError {
    #[error("Invalid transaction ID format")]
    InvalidFormat,
    #[error("Invalid transaction kind")]
    InvalidKind,
    #[error("Invalid timestamp in transaction ID")]
    InvalidTimestamp,
}

/// Format an RFC 3339 timestamp (or bare "YYYY-MM-DD") for display
pub fn format_display_date(rfc3339_date: &str) -> String {
    if let Some(date_part) = rfc3339_date.split('T').next() {
        if let Ok(parts) = date_part.split('-').collect::<Vec<_>>().try_into() {
            let [year, month, day]: [&str; 3] = parts;
            if let (Ok(y), Ok(m), Ok(d)) = (year.parse::<u32>(), month.parse::<u32>(), day.parse::<u32>()) {
                return format!("{} {}, {}", month_name(m), d, y);
            }
        }
    }
    rfc3339_date.to_string()
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January", 2 => "February", 3 => "March", 4 => "April",
        5 => "May", 6 => "June", 7 => "July", 8 => "August",
        9 => "September", 10 => "October", 11 => "November", 12 => "December",
        _ => "January",
    }
}
